use super::copy::CopyIndicator;
use super::screen::Screen;
use crate::category::Category;
use crate::error::{GasgenError, Result};
use crate::error_report::{ImageAttachment, PendingErrorReport};
use crate::feature::FeatureTemplate;
use crate::prompt::OperationKind;
use std::time::Instant;

/// Everything the wizard displays, plus the current screen.
///
/// Transitions that are not allowed from the current screen fail with a
/// validation error and leave the state untouched. Back-navigation clears
/// all transient output and the requirement text; the session's history
/// ledger and credential live outside this type and are never touched here.
#[derive(Debug, Clone)]
pub struct ViewState {
    screen: Screen,
    category: Option<Category>,
    feature: Option<&'static FeatureTemplate>,
    requirement: String,
    script: String,
    explanation: String,
    error: Option<String>,
    explanation_error: Option<String>,
    pending_report: PendingErrorReport,
    script_copied: CopyIndicator,
    explanation_copied: CopyIndicator,
    in_flight: Option<OperationKind>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            screen: Screen::CategorySelection,
            category: None,
            feature: None,
            requirement: String::new(),
            script: String::new(),
            explanation: String::new(),
            error: None,
            explanation_error: None,
            pending_report: PendingErrorReport::default(),
            script_copied: CopyIndicator::default(),
            explanation_copied: CopyIndicator::default(),
            in_flight: None,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn feature(&self) -> Option<&'static FeatureTemplate> {
        self.feature
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn explanation_error(&self) -> Option<&str> {
        self.explanation_error.as_deref()
    }

    pub fn pending_report(&self) -> &PendingErrorReport {
        &self.pending_report
    }

    pub fn in_flight(&self) -> Option<OperationKind> {
        self.in_flight
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn script_copied(&self, now: Instant) -> bool {
        self.script_copied.is_active(now)
    }

    pub fn explanation_copied(&self, now: Instant) -> bool {
        self.explanation_copied.is_active(now)
    }

    // ============================================================================
    // Screen transitions
    // ============================================================================

    /// `CategorySelection` -> `FeatureSelection`. Requires a valid credential.
    pub fn select_category(&mut self, category: Category, credential_ready: bool) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::CategorySelection)?;
        if !credential_ready {
            return Err(GasgenError::auth("Enter your Gemini API key first."));
        }
        self.category = Some(category);
        self.screen = Screen::FeatureSelection;
        self.clear_outputs();
        Ok(())
    }

    /// `FeatureSelection` -> `Generate`, pre-filling the requirement with the
    /// template's example.
    pub fn choose_feature(&mut self, feature: &'static FeatureTemplate) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::FeatureSelection)?;
        let category = self.require_category()?;
        if !feature.supports(category) {
            return Err(GasgenError::validation(format!(
                "\"{}\" is not available for a {}.",
                feature.label,
                category.label()
            )));
        }
        self.feature = Some(feature);
        self.requirement = feature.prompt_example.to_string();
        self.screen = Screen::Generate;
        self.clear_outputs();
        Ok(())
    }

    /// `FeatureSelection` -> `Generate` with an empty requirement.
    pub fn start_custom_requirement(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::FeatureSelection)?;
        self.feature = None;
        self.requirement.clear();
        self.screen = Screen::Generate;
        self.clear_outputs();
        Ok(())
    }

    /// `Generate` -> `ErrorFix`. Refused while there is no script to fix.
    pub fn enter_error_fix(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::Generate)?;
        if self.script.trim().is_empty() {
            return Err(GasgenError::validation(
                "There is no script to fix. Generate a script first.",
            ));
        }
        self.screen = Screen::ErrorFix;
        Ok(())
    }

    /// Moves to the predecessor screen. Returns `false` on the first screen.
    pub fn back(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some(previous) = self.screen.predecessor() else {
            return Ok(false);
        };
        match self.screen {
            Screen::ErrorFix => self.pending_report.clear(),
            Screen::Generate => self.feature = None,
            Screen::FeatureSelection => self.category = None,
            Screen::CategorySelection => {}
        }
        self.screen = previous;
        self.clear_outputs();
        self.requirement.clear();
        Ok(true)
    }

    // ============================================================================
    // Input fields
    // ============================================================================

    pub fn set_requirement(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::Generate)?;
        self.requirement = text.into();
        Ok(())
    }

    pub fn set_error_description(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::ErrorFix)?;
        self.pending_report.description = text.into();
        Ok(())
    }

    pub fn attach_image(&mut self, image: ImageAttachment) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::ErrorFix)?;
        self.pending_report.image = Some(image);
        Ok(())
    }

    pub fn clear_image(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_screen(Screen::ErrorFix)?;
        self.pending_report.image = None;
        Ok(())
    }

    pub fn take_pending_report(&mut self) -> PendingErrorReport {
        std::mem::take(&mut self.pending_report)
    }

    // ============================================================================
    // Output fields
    // ============================================================================

    /// Marks `kind` as in flight. Only one request may be outstanding.
    pub fn begin(&mut self, kind: OperationKind) -> Result<()> {
        self.ensure_idle()?;
        self.in_flight = Some(kind);
        Ok(())
    }

    pub fn finish(&mut self) {
        self.in_flight = None;
    }

    /// Replaces the current script; the old explanation no longer applies.
    pub fn show_script(&mut self, script: String) {
        self.script = script;
        self.explanation.clear();
        self.explanation_error = None;
        self.error = None;
        self.script_copied.reset();
        self.explanation_copied.reset();
    }

    pub fn show_explanation(&mut self, explanation: String) {
        self.explanation = explanation;
        self.explanation_error = None;
        self.explanation_copied.reset();
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn show_explanation_error(&mut self, message: impl Into<String>) {
        self.explanation_error = Some(message.into());
    }

    pub fn clear_errors(&mut self) {
        self.error = None;
        self.explanation_error = None;
    }

    pub fn mark_script_copied(&mut self, now: Instant) -> Result<()> {
        if self.script.is_empty() {
            return Err(GasgenError::validation("There is no script to copy."));
        }
        self.script_copied.mark(now);
        Ok(())
    }

    pub fn mark_explanation_copied(&mut self, now: Instant) -> Result<()> {
        if self.explanation.is_empty() {
            return Err(GasgenError::validation("There is no explanation to copy."));
        }
        self.explanation_copied.mark(now);
        Ok(())
    }

    // ============================================================================
    // Guards
    // ============================================================================

    pub fn require_category(&self) -> Result<Category> {
        self.category.ok_or_else(|| {
            GasgenError::validation(
                "No script type is selected. Go back to the first screen and choose one.",
            )
        })
    }

    pub fn ensure_screen(&self, expected: Screen) -> Result<()> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(GasgenError::validation(format!(
                "This action is only available on the \"{}\" screen.",
                expected.title()
            )))
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.in_flight {
            Some(kind) => Err(GasgenError::validation(format!(
                "Please wait for the running {} request to finish.",
                kind.label()
            ))),
            None => Ok(()),
        }
    }

    fn clear_outputs(&mut self) {
        self.script.clear();
        self.explanation.clear();
        self.error = None;
        self.explanation_error = None;
        self.script_copied.reset();
        self.explanation_copied.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::find_feature;

    fn at_generate() -> ViewState {
        let mut view = ViewState::new();
        view.select_category(Category::Spreadsheet, true).unwrap();
        view.start_custom_requirement().unwrap();
        view
    }

    #[test]
    fn test_starts_on_category_selection() {
        let view = ViewState::new();
        assert_eq!(view.screen(), Screen::CategorySelection);
        assert!(view.category().is_none());
    }

    #[test]
    fn test_category_requires_credential() {
        let mut view = ViewState::new();
        let err = view.select_category(Category::Form, false).unwrap_err();
        assert!(err.is_auth());
        assert_eq!(view.screen(), Screen::CategorySelection);
        assert!(view.category().is_none());
    }

    #[test]
    fn test_feature_prefills_requirement() {
        let mut view = ViewState::new();
        view.select_category(Category::Spreadsheet, true).unwrap();
        let feature = find_feature("sheet_manipulation").unwrap();
        view.choose_feature(feature).unwrap();
        assert_eq!(view.screen(), Screen::Generate);
        assert_eq!(view.requirement(), feature.prompt_example);
        assert_eq!(view.feature().unwrap().id, "sheet_manipulation");
    }

    #[test]
    fn test_unsupported_feature_is_refused() {
        let mut view = ViewState::new();
        view.select_category(Category::Form, true).unwrap();
        let err = view
            .choose_feature(find_feature("custom_menu_spreadsheet").unwrap())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(view.screen(), Screen::FeatureSelection);
    }

    #[test]
    fn test_error_fix_refused_without_script() {
        let mut view = at_generate();
        view.set_requirement("something").unwrap();

        let err = view.enter_error_fix().unwrap_err();

        assert!(err.is_validation());
        assert_eq!(view.screen(), Screen::Generate);
        assert_eq!(view.requirement(), "something");
    }

    #[test]
    fn test_error_fix_allowed_with_script() {
        let mut view = at_generate();
        view.show_script("function main() {}".to_string());
        view.enter_error_fix().unwrap();
        assert_eq!(view.screen(), Screen::ErrorFix);
        assert_eq!(view.script(), "function main() {}");
    }

    #[test]
    fn test_back_clears_transient_state() {
        let mut view = at_generate();
        view.set_requirement("req").unwrap();
        view.show_script("code".to_string());
        view.show_explanation("manual".to_string());
        view.mark_script_copied(Instant::now()).unwrap();
        view.enter_error_fix().unwrap();
        view.set_error_description("TypeError").unwrap();

        assert!(view.back().unwrap());
        assert_eq!(view.screen(), Screen::Generate);
        assert!(view.script().is_empty());
        assert!(view.explanation().is_empty());
        assert!(view.requirement().is_empty());
        assert!(view.pending_report().is_blank());
        assert!(!view.script_copied(Instant::now()));

        assert!(view.back().unwrap());
        assert_eq!(view.screen(), Screen::FeatureSelection);
        assert!(view.feature().is_none());

        assert!(view.back().unwrap());
        assert_eq!(view.screen(), Screen::CategorySelection);
        assert!(view.category().is_none());

        assert!(!view.back().unwrap());
        assert_eq!(view.screen(), Screen::CategorySelection);
    }

    #[test]
    fn test_wrong_screen_is_validation_error() {
        let mut view = ViewState::new();
        assert!(view.set_requirement("x").unwrap_err().is_validation());
        assert!(view.set_error_description("x").unwrap_err().is_validation());
        assert!(view.start_custom_requirement().unwrap_err().is_validation());
        assert_eq!(view.screen(), Screen::CategorySelection);
    }

    #[test]
    fn test_only_one_request_in_flight() {
        let mut view = at_generate();
        view.begin(OperationKind::Generate).unwrap();
        assert!(view.is_busy());
        assert!(view.begin(OperationKind::Explain).unwrap_err().is_validation());
        assert!(view.back().unwrap_err().is_validation());
        view.finish();
        assert!(!view.is_busy());
        assert!(view.back().unwrap());
    }

    #[test]
    fn test_new_script_drops_stale_explanation() {
        let mut view = at_generate();
        view.show_script("v1".to_string());
        view.show_explanation("manual for v1".to_string());
        view.show_script("v2".to_string());
        assert!(view.explanation().is_empty());
    }

    #[test]
    fn test_copy_needs_content() {
        let mut view = at_generate();
        assert!(view.mark_script_copied(Instant::now()).is_err());
        assert!(view.mark_explanation_copied(Instant::now()).is_err());
    }
}
