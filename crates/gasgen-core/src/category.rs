//! Script categories.
//!
//! A category is the execution context the generated Apps Script targets. It
//! is chosen once at the start of a session and selects both the structural
//! mandate sent to the model and the feature templates offered to the user.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    /// Not bound to any Workspace file.
    Standalone,
    /// Container-bound to a Google Spreadsheet.
    Spreadsheet,
    /// Container-bound to a Google Form.
    Form,
}

impl Category {
    /// Human-readable label used in prompts and on screen.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Standalone => "Standalone script",
            Category::Spreadsheet => "Spreadsheet-bound script",
            Category::Form => "Google Form-bound script",
        }
    }

    /// One-line description shown on the category selection screen.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Standalone => {
                "An independent script not tied to any file. Suited to web apps and general automation."
            }
            Category::Spreadsheet => {
                "Embedded in a Google Spreadsheet and extended through custom menus."
            }
            Category::Form => {
                "Embedded in a Google Form to automate submission handling and form operations."
            }
        }
    }

    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }
}
