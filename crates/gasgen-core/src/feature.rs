//! Built-in feature templates offered on the feature selection screen.

use crate::category::Category;
use serde::Serialize;

/// A common automation the user can start from instead of a blank requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Pre-filled requirement text when the template is chosen.
    pub prompt_example: &'static str,
    pub supported: &'static [Category],
}

impl FeatureTemplate {
    pub fn supports(&self, category: Category) -> bool {
        self.supported.contains(&category)
    }
}

use Category::{Form, Spreadsheet, Standalone};

pub const FEATURES: &[FeatureTemplate] = &[
    FeatureTemplate {
        id: "line_bot",
        label: "Build a LINE bot",
        description: "Build a basic LINE bot that replies to messages.",
        prompt_example: "Create a LINE bot that replies \"Hello!\" when a user sends \"Hi\". (Set the webhook URL in script properties.)",
        supported: &[Standalone, Spreadsheet],
    },
    FeatureTemplate {
        id: "sheet_manipulation",
        label: "Spreadsheet operations",
        description: "Read, write, process and format sheet data.",
        prompt_example: "Read the values in column A of the sheet named \"Input\" and write twice each value into column B.",
        supported: &[Standalone, Spreadsheet],
    },
    FeatureTemplate {
        id: "gmail_automation",
        label: "Gmail automation",
        description: "Automate sending, processing and labelling mail.",
        prompt_example: "When a mail whose subject contains \"Important\" arrives, add the label \"To review\" and star it.",
        supported: &[Standalone, Spreadsheet],
    },
    FeatureTemplate {
        id: "calendar_integration",
        label: "Calendar integration",
        description: "Create, edit and fetch calendar events automatically.",
        prompt_example: "Register Google Calendar events using the dates in column B and titles in column C of the sheet \"Schedule\".",
        supported: &[Standalone, Spreadsheet],
    },
    FeatureTemplate {
        id: "drive_management",
        label: "Drive file management",
        description: "Create, search, move and share Drive files automatically.",
        prompt_example: "Create a new Google Doc named with today's date inside the Drive folder \"Reports\".",
        supported: &[Standalone, Spreadsheet, Form],
    },
    FeatureTemplate {
        id: "form_response_processing",
        label: "Form response processing",
        description: "Record Google Form responses in a sheet or send notifications.",
        prompt_example: "When a new response is submitted, append it to the sheet \"Responses\" and email the administrator.",
        supported: &[Form, Standalone],
    },
    FeatureTemplate {
        id: "web_api",
        label: "Fetch data from a web API",
        description: "Fetch data from an external API and record it.",
        prompt_example: "Fetch JSON from https://api.example.com/data and write its \"name\" and \"value\" fields to the sheet \"API data\". (Set the API key in script properties.)",
        supported: &[Standalone, Spreadsheet, Form],
    },
    FeatureTemplate {
        id: "doc_generation",
        label: "Document generation",
        description: "Generate documents from templates or data.",
        prompt_example: "Generate one invoice document per row of the sheet \"Customers\".",
        supported: &[Standalone, Spreadsheet],
    },
    FeatureTemplate {
        id: "chat_notification",
        label: "Chat notification",
        description: "Send notifications to Google Chat.",
        prompt_example: "When cell A1 of the sheet \"Sales\" exceeds 100, post a message to a Google Chat space. (Set the webhook URL in script properties.)",
        supported: &[Standalone, Spreadsheet, Form],
    },
    FeatureTemplate {
        id: "discord_notification",
        label: "Discord notification",
        description: "Notify a Discord channel through a webhook when something happens.",
        prompt_example: "When a status in column A of the sheet \"Progress\" becomes \"Done\", send \"Task done: [task name]\" to a Discord webhook. (Set the webhook URL in script properties.)",
        supported: &[Standalone, Spreadsheet, Form],
    },
    FeatureTemplate {
        id: "custom_menu_spreadsheet",
        label: "Extend a custom menu (spreadsheet)",
        description: "Add or change items in an existing custom menu.",
        prompt_example: "Add an item \"Highlight selection in yellow\" to the existing custom menu \"Tools\" of this spreadsheet.",
        supported: &[Spreadsheet],
    },
];

/// Templates available for a category, in catalog order.
pub fn features_for(category: Category) -> Vec<&'static FeatureTemplate> {
    FEATURES.iter().filter(|f| f.supports(category)).collect()
}

pub fn find_feature(id: &str) -> Option<&'static FeatureTemplate> {
    FEATURES.iter().find(|f| f.id == id)
}
