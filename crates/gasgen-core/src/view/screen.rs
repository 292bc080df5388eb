use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Initial screen: credential entry and category choice.
    CategorySelection,
    /// Pick a feature template or write a custom requirement.
    FeatureSelection,
    /// Requirement input and generated result.
    Generate,
    /// Error report input and fixed result.
    ErrorFix,
}

impl Screen {
    /// Where back-navigation leads. `None` on the first screen.
    pub fn predecessor(&self) -> Option<Screen> {
        match self {
            Screen::CategorySelection => None,
            Screen::FeatureSelection => Some(Screen::CategorySelection),
            Screen::Generate => Some(Screen::FeatureSelection),
            Screen::ErrorFix => Some(Screen::Generate),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::CategorySelection => "Choose a script type",
            Screen::FeatureSelection => "Choose a feature",
            Screen::Generate => "Generate",
            Screen::ErrorFix => "Error fix mode",
        }
    }
}
