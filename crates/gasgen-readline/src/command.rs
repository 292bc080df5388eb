//! Parsing of REPL input lines.

use gasgen_core::category::Category;
use std::path::PathBuf;
use std::str::FromStr;

pub const COMMAND_NAMES: &[&str] = &[
    "/key",
    "/category",
    "/features",
    "/feature",
    "/custom",
    "/req",
    "/generate",
    "/explain",
    "/errorfix",
    "/error",
    "/image",
    "/noimage",
    "/fix",
    "/history",
    "/back",
    "/copy",
    "/show",
    "/status",
    "/help",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Script,
    Explanation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Key(String),
    Category(Category),
    Features,
    Feature(String),
    Custom,
    Requirement(String),
    Generate,
    Explain,
    ErrorFix,
    ErrorDescription(String),
    Image(PathBuf),
    NoImage,
    Fix,
    History,
    Back,
    Copy(CopyTarget),
    Show,
    Status,
    Help,
    Quit,
    /// A line without a leading slash; its meaning depends on the screen.
    Text(String),
}

/// Parses one trimmed, non-empty input line.
pub fn parse(line: &str) -> Result<Command, String> {
    if line == "quit" || line == "exit" {
        return Ok(Command::Quit);
    }
    if !line.starts_with('/') {
        return Ok(Command::Text(line.to_string()));
    }

    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    let command = match name {
        "/key" => Command::Key(required(name, arg)?.to_string()),
        "/category" => {
            let raw = required(name, arg)?;
            let category = Category::from_str(raw).map_err(|_| {
                format!("Unknown script type \"{raw}\". Use standalone, spreadsheet or form.")
            })?;
            Command::Category(category)
        }
        "/features" => Command::Features,
        "/feature" => Command::Feature(required(name, arg)?.to_string()),
        "/custom" => Command::Custom,
        "/req" => Command::Requirement(required(name, arg)?.to_string()),
        "/generate" => Command::Generate,
        "/explain" => Command::Explain,
        "/errorfix" => Command::ErrorFix,
        "/error" => Command::ErrorDescription(required(name, arg)?.to_string()),
        "/image" => Command::Image(PathBuf::from(required(name, arg)?)),
        "/noimage" => Command::NoImage,
        "/fix" => Command::Fix,
        "/history" => Command::History,
        "/back" => Command::Back,
        "/copy" => match arg {
            "" | "script" => Command::Copy(CopyTarget::Script),
            "explanation" => Command::Copy(CopyTarget::Explanation),
            other => return Err(format!("Nothing called \"{other}\" to copy.")),
        },
        "/show" => Command::Show,
        "/status" => Command::Status,
        "/help" => Command::Help,
        other => return Err(format!("Unknown command {other}. Type /help.")),
    };
    Ok(command)
}

fn required<'a>(name: &str, arg: &'a str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("{name} needs an argument."))
    } else {
        Ok(arg)
    }
}
