//! Request text construction for the three operation kinds.

use crate::category::Category;
use crate::error::Result;
use crate::error_report::PendingErrorReport;
use crate::feature::FeatureTemplate;
use crate::history::HistoryEntry;
use minijinja::{Environment, context};
use once_cell::sync::Lazy;
use serde::Serialize;

const ERROR_FIX_TEMPLATE_NAME: &str = "error_fix";

const ERROR_FIX_TEMPLATE: &str = r#"Below is the context of the exchange so far:

{% for entry in entries %}
[Round {{ loop.index }} - {{ entry.kind }}]
Generated at: {{ entry.timestamp }}
Request: {{ entry.request }}
{% if entry.error_description %}
Error: {{ entry.error_description }}
{% endif %}
Generated script:
```javascript
{{ entry.script }}
```

{% endfor %}
[Current error fix request]
Error details: {{ description }}
{% if image %}
Error screenshot: {{ image }}
{% endif %}

Taking the context and error information above into account, correct the most recent script."#;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(ERROR_FIX_TEMPLATE_NAME, ERROR_FIX_TEMPLATE)
        .expect("error fix template parses");
    env
});

/// Flattened view of a ledger entry for the transcript template.
#[derive(Serialize)]
struct TranscriptEntry<'a> {
    kind: &'static str,
    timestamp: String,
    request: &'a str,
    script: &'a str,
    error_description: Option<&'a str>,
}

impl<'a> From<&'a HistoryEntry> for TranscriptEntry<'a> {
    fn from(entry: &'a HistoryEntry) -> Self {
        Self {
            kind: entry.kind.label(),
            timestamp: entry.display_timestamp(),
            request: &entry.request,
            script: &entry.script,
            error_description: entry.error_description.as_deref(),
        }
    }
}

/// Request text for an initial generation.
///
/// The user's requirement is appended verbatim after a header naming the
/// category (and the chosen feature template, if any).
pub fn build_generation_request(
    requirement: &str,
    category: Category,
    feature: Option<&FeatureTemplate>,
) -> String {
    match feature {
        Some(feature) => format!(
            "The user wants the \"{}\" feature (script type: {}, V8 runtime compatible). The concrete requirements are:\n{}",
            feature.label,
            category.label(),
            requirement
        ),
        None => format!(
            "Create a Google Apps Script (script type: {}, V8 runtime compatible) with the following requirements:\n{}",
            category.label(),
            requirement
        ),
    }
}

/// Request text asking for an operating manual of `script`.
pub fn build_explanation_request(script: &str, category: Category, language: &str) -> String {
    format!(
        "Script type: {}\n\nWrite a beginner-friendly operating manual in {} for the following Google Apps Script code.\n\n---\n{}\n---",
        category.label(),
        language,
        script
    )
}

/// Request text replaying every ledger entry, oldest first, followed by the
/// pending report.
pub fn build_error_fix_request(
    history: &[HistoryEntry],
    report: &PendingErrorReport,
) -> Result<String> {
    let entries: Vec<TranscriptEntry<'_>> = history.iter().map(TranscriptEntry::from).collect();
    let image = report.image.as_ref().map(|image| image.to_data_uri());
    let template = TEMPLATES.get_template(ERROR_FIX_TEMPLATE_NAME)?;
    let rendered = template.render(context! {
        entries => entries,
        description => report.description.trim(),
        image => image,
    })?;
    Ok(rendered)
}
