//! Assistant session use case.
//!
//! `AssistantSession` owns everything one user session needs: the credential
//! gate, the history ledger, the view state machine and the generation
//! client. Front ends drive it one operation at a time.

use crate::credential_gate::{CredentialGate, CredentialStatus};
use crate::generation_client::GenerationClient;
use gasgen_core::category::Category;
use gasgen_core::error::{GasgenError, Result};
use gasgen_core::error_report::ImageAttachment;
use gasgen_core::feature::{FeatureTemplate, features_for, find_feature};
use gasgen_core::history::{HistoryEntry, HistoryLedger};
use gasgen_core::prompt::{OperationKind, build_error_fix_request, build_generation_request};
use gasgen_core::view::{Screen, ViewState};
use std::time::Instant;

/// Use case driving one wizard session.
///
/// # Error reporting
///
/// Every fallible operation both returns its error and records it in the view
/// (`ViewState::error`, or `ViewState::explanation_error` for explanations),
/// so a front end may either inspect the result or simply re-render the view.
///
/// # Ledger rules
///
/// - A successful generation resets the ledger and appends one `initial` entry
/// - A successful fix appends one `error_fix` entry
/// - Nothing else touches the ledger; back-navigation never does
pub struct AssistantSession {
    gate: CredentialGate,
    client: GenerationClient,
    ledger: HistoryLedger,
    view: ViewState,
}

impl AssistantSession {
    pub fn new(gate: CredentialGate, client: GenerationClient) -> Self {
        Self {
            gate,
            client,
            ledger: HistoryLedger::new(),
            view: ViewState::new(),
        }
    }

    // ============================================================================
    // Read access
    // ============================================================================

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.ledger.all()
    }

    pub fn credential_status(&self) -> CredentialStatus {
        self.gate.status()
    }

    pub fn language(&self) -> &str {
        self.client.language()
    }

    /// Templates offered for the selected category, empty before a choice.
    pub fn available_features(&self) -> Vec<&'static FeatureTemplate> {
        self.view
            .category()
            .map(features_for)
            .unwrap_or_default()
    }

    // ============================================================================
    // Credential
    // ============================================================================

    pub async fn submit_credential(&mut self, raw: &str) -> Result<CredentialStatus> {
        let result = self.gate.submit(raw).await;
        if result.is_ok() {
            self.view.clear_errors();
        }
        self.record(result)
    }

    pub async fn restore_credential(&mut self) -> CredentialStatus {
        self.gate.restore().await
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    pub fn select_category(&mut self, category: Category) -> Result<()> {
        let result = self.view.select_category(category, self.gate.is_ready());
        if result.is_ok() {
            tracing::info!("Category selected: {}", category);
        }
        self.record(result)
    }

    /// Picks a feature template by id.
    pub fn choose_feature(&mut self, feature_id: &str) -> Result<()> {
        let result = match find_feature(feature_id) {
            Some(feature) => self.view.choose_feature(feature),
            None => Err(GasgenError::validation(format!(
                "Unknown feature \"{}\".",
                feature_id
            ))),
        };
        self.record(result)
    }

    pub fn start_custom_requirement(&mut self) -> Result<()> {
        let result = self.view.start_custom_requirement();
        self.record(result)
    }

    pub fn enter_error_fix(&mut self) -> Result<()> {
        let result = self.view.enter_error_fix();
        self.record(result)
    }

    /// Returns `false` when already on the first screen.
    pub fn back(&mut self) -> Result<bool> {
        let result = self.view.back();
        self.record(result)
    }

    // ============================================================================
    // Inputs
    // ============================================================================

    pub fn set_requirement(&mut self, text: impl Into<String>) -> Result<()> {
        let result = self.view.set_requirement(text);
        self.record(result)
    }

    pub fn set_error_description(&mut self, text: impl Into<String>) -> Result<()> {
        let result = self.view.set_error_description(text);
        self.record(result)
    }

    pub fn attach_image(&mut self, image: ImageAttachment) -> Result<()> {
        let result = self.view.attach_image(image);
        self.record(result)
    }

    pub fn clear_image(&mut self) -> Result<()> {
        let result = self.view.clear_image();
        self.record(result)
    }

    // ============================================================================
    // Generation
    // ============================================================================

    /// Generates a script from the current requirement.
    ///
    /// On success the ledger is reset and holds exactly the new `initial`
    /// entry. On failure the previous script and ledger are left as they were.
    pub async fn generate(&mut self) -> Result<()> {
        let prepared = self.prepare_generation();
        let (request_text, category) = self.record(prepared)?;

        self.view.begin(OperationKind::Generate)?;
        self.view.clear_errors();
        let result = self
            .client
            .generate(&request_text, category, self.gate.credential())
            .await;
        self.view.finish();

        let script = self.record(result)?;
        self.ledger.reset();
        let id = self
            .ledger
            .append(HistoryEntry::initial(self.view.requirement(), script.clone()));
        tracing::info!("Generated script ({} chars), entry {}", script.len(), id);
        self.view.show_script(script);
        Ok(())
    }

    /// Explains the current script. Errors land in `explanation_error`.
    pub async fn explain(&mut self) -> Result<()> {
        let prepared = self.prepare_explanation();
        let (script, category) = self.record_explanation(prepared)?;

        self.view.begin(OperationKind::Explain)?;
        self.view.show_explanation(String::new());
        let result = self
            .client
            .explain(&script, category, self.gate.credential())
            .await;
        self.view.finish();

        let explanation = self.record_explanation(result)?;
        tracing::info!("Generated explanation ({} chars)", explanation.len());
        self.view.show_explanation(explanation);
        Ok(())
    }

    /// Sends the full ledger plus the pending report and shows the fixed
    /// script.
    ///
    /// The pending report is consumed only when the fixed script arrives; a
    /// failed attempt keeps it for resubmission.
    pub async fn fix(&mut self) -> Result<()> {
        let prepared = self.prepare_fix();
        let (request_text, category) = self.record(prepared)?;

        self.view.begin(OperationKind::ErrorFix)?;
        self.view.clear_errors();
        let result = self
            .client
            .fix(&request_text, category, self.gate.credential())
            .await;
        self.view.finish();

        let script = self.record(result)?;
        let report = self.view.take_pending_report();
        let image = report.image.as_ref().map(|image| image.to_data_uri());
        let id = self.ledger.append(HistoryEntry::error_fix(
            report.description.trim(),
            script.clone(),
            image,
        ));
        tracing::info!(
            "Fixed script ({} chars), entry {} (round {})",
            script.len(),
            id,
            self.ledger.len()
        );
        self.view.show_script(script);
        Ok(())
    }

    // ============================================================================
    // Copy
    // ============================================================================

    /// Marks the script as copied and returns the text to hand to the
    /// clipboard.
    pub fn copy_script(&mut self, now: Instant) -> Result<String> {
        let result = self.view.mark_script_copied(now);
        self.record(result)?;
        Ok(self.view.script().to_string())
    }

    pub fn copy_explanation(&mut self, now: Instant) -> Result<String> {
        let result = self.view.mark_explanation_copied(now);
        self.record(result)?;
        Ok(self.view.explanation().to_string())
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn prepare_generation(&self) -> Result<(String, Category)> {
        self.view.ensure_screen(Screen::Generate)?;
        let requirement = self.view.requirement();
        if requirement.trim().is_empty() {
            return Err(GasgenError::validation(
                "Describe the script you want before generating.",
            ));
        }
        let category = self.view.require_category()?;
        let request_text = build_generation_request(requirement, category, self.view.feature());
        tracing::debug!("Generation request: {} chars", request_text.len());
        Ok((request_text, category))
    }

    fn prepare_explanation(&self) -> Result<(String, Category)> {
        if !matches!(self.view.screen(), Screen::Generate | Screen::ErrorFix) {
            return Err(GasgenError::validation(
                "Explanations are available once a script has been generated.",
            ));
        }
        let script = self.view.script();
        if script.trim().is_empty() {
            return Err(GasgenError::validation(
                "There is no script to explain. Generate a script first.",
            ));
        }
        let category = self.view.require_category()?;
        Ok((script.to_string(), category))
    }

    fn prepare_fix(&self) -> Result<(String, Category)> {
        self.view.ensure_screen(Screen::ErrorFix)?;
        let report = self.view.pending_report();
        if report.is_blank() {
            return Err(GasgenError::validation("Describe the error you ran into."));
        }
        let category = self.view.require_category()?;
        let request_text = build_error_fix_request(self.ledger.all(), report)?;
        tracing::debug!(
            "Error fix request: {} rounds, {} chars",
            self.ledger.len(),
            request_text.len()
        );
        Ok((request_text, category))
    }

    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.view.show_error(e.to_string());
        }
        result
    }

    fn record_explanation<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.view.show_explanation_error(e.to_string());
        }
        result
    }
}
