//! Terminal rendering of the session view.

use colored::Colorize;
use gasgen_application::AssistantSession;
use gasgen_core::category::Category;
use gasgen_core::history::HistoryEntry;
use gasgen_core::view::Screen;
use std::time::Instant;
use strum::IntoEnumIterator;

pub fn banner() {
    println!("{}", "=== gasgen: Google Apps Script generator ===".bright_magenta().bold());
    println!(
        "{}",
        "Type /help for commands, or 'quit' to exit.".bright_black()
    );
    println!();
}

pub fn help() {
    let rows: &[(&str, &str)] = &[
        ("/key <api-key>", "set the Gemini API key"),
        ("/category <type>", "choose standalone, spreadsheet or form"),
        ("/features", "list feature templates for the chosen type"),
        ("/feature <id>", "start from a feature template"),
        ("/custom", "start from an empty requirement"),
        ("/req <text>", "replace the requirement (plain lines are appended)"),
        ("/generate", "generate a script from the requirement"),
        ("/explain", "explain the current script"),
        ("/errorfix", "switch to error fix mode"),
        ("/error <text>", "replace the error description (plain lines are appended)"),
        ("/image <path>", "attach an error screenshot (5MB max)"),
        ("/noimage", "drop the attached screenshot"),
        ("/fix", "send the error report and get a fixed script"),
        ("/history", "list generation rounds"),
        ("/copy [script|explanation]", "print text for copying"),
        ("/back", "go back one screen"),
        ("/show", "show the current screen again"),
        ("/status", "show key and session status"),
    ];
    for (command, text) in rows {
        println!("  {:<28} {}", command.bright_cyan(), text.bright_black());
    }
}

/// Prints the whole current screen.
pub fn screen(session: &AssistantSession) {
    let view = session.view();
    println!();
    println!("{}", format!("--- {} ---", view.screen().title()).bright_magenta().bold());

    match view.screen() {
        Screen::CategorySelection => {
            if !session.credential_status().valid {
                println!("{}", "Enter your Gemini API key with /key first.".yellow());
            }
            for category in Category::iter() {
                println!(
                    "  {:<12} {} - {}",
                    category.to_string().bright_cyan(),
                    category.label(),
                    category.description().bright_black()
                );
            }
        }
        Screen::FeatureSelection => {
            if let Some(category) = view.category() {
                println!("Script type: {}", category.label().bold());
            }
            features(session);
            println!("  {:<28} {}", "/custom".bright_cyan(), "write your own requirement".bright_black());
        }
        Screen::Generate => {
            header(session);
            if let Some(feature) = view.feature() {
                println!("Feature: {}", feature.label.bold());
            }
            println!("{}", "Requirement:".bold());
            if view.requirement().is_empty() {
                println!("{}", "  (empty; type it in)".bright_black());
            } else {
                println!("{}", view.requirement());
            }
            outputs(session);
        }
        Screen::ErrorFix => {
            header(session);
            println!("Rounds so far: {}", session.history().len());
            let report = view.pending_report();
            println!("{}", "Error details:".bold());
            if report.is_blank() {
                println!("{}", "  (empty; type it in)".bright_black());
            } else {
                println!("{}", report.description);
            }
            if let Some(image) = &report.image {
                println!(
                    "Screenshot: {} ({}, {} bytes)",
                    image.file_name(),
                    image.mime_type(),
                    image.len()
                );
            }
            outputs(session);
        }
    }
}

fn header(session: &AssistantSession) {
    if let Some(category) = session.view().category() {
        println!("Script type: {}", category.label().bold());
    }
}

pub fn features(session: &AssistantSession) {
    let features = session.available_features();
    if features.is_empty() {
        println!("{}", "Choose a script type first.".yellow());
        return;
    }
    for feature in features {
        println!(
            "  {:<28} {} - {}",
            feature.id.bright_cyan(),
            feature.label,
            feature.description.bright_black()
        );
    }
}

fn outputs(session: &AssistantSession) {
    let view = session.view();
    let now = Instant::now();

    if let Some(error) = view.error() {
        println!("{}", error.red());
    }
    if !view.script().is_empty() {
        let copied = if view.script_copied(now) { " (copied)" } else { "" };
        println!("{}", format!("Generated script{copied}:").bright_green().bold());
        for line in view.script().lines() {
            println!("{}", line.bright_blue());
        }
    }
    if let Some(error) = view.explanation_error() {
        println!("{}", error.red());
    }
    if !view.explanation().is_empty() {
        let copied = if view.explanation_copied(now) { " (copied)" } else { "" };
        println!("{}", format!("Explanation{copied}:").bright_green().bold());
        println!("{}", view.explanation());
    }
}

pub fn history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("{}", "No generation rounds yet.".bright_black());
        return;
    }
    for (index, entry) in entries.iter().enumerate() {
        println!("{}", entry.summary_line(index + 1).bright_cyan());
        println!("   {}", entry.request.lines().next().unwrap_or_default());
    }
}

pub fn status(session: &AssistantSession) {
    let valid = session.credential_status().valid;
    let key = if valid { "set".green() } else { "not set".yellow() };
    println!("API key: {}", key);
    println!("Screen: {}", session.view().screen().title());
    println!("Output language: {}", session.language());
    println!("Rounds: {}", session.history().len());
}

pub fn error(message: impl std::fmt::Display) {
    eprintln!("{}", format!("Error: {}", message).red());
}

pub fn busy(label: &str) {
    println!("{}", format!("Running {label} request...").bright_black());
}
