//! Dispatch of parsed commands onto the session.

use colored::Colorize;
use gasgen_application::AssistantSession;
use gasgen_core::error::Result;
use gasgen_core::prompt::OperationKind;
use gasgen_core::view::Screen;
use gasgen_infrastructure::load_image;
use std::time::Instant;

use crate::command::{Command, CopyTarget};
use crate::render;

/// Whether the loop should keep reading input.
pub enum Flow {
    Continue,
    Quit,
}

pub async fn dispatch(session: &mut AssistantSession, command: Command) -> Flow {
    if let Command::Quit = command {
        return Flow::Quit;
    }
    if let Err(e) = run(session, command).await {
        // The session already stored the message on the view; screens that
        // have no error area get it printed here.
        tracing::debug!("Command failed: {}", e);
        render::error(e);
    }
    Flow::Continue
}

async fn run(session: &mut AssistantSession, command: Command) -> Result<()> {
    match command {
        Command::Key(raw) => {
            session.submit_credential(&raw).await?;
            println!("{}", "API key accepted.".bright_green());
        }
        Command::Category(category) => {
            session.select_category(category)?;
            render::screen(session);
        }
        Command::Features => render::features(session),
        Command::Feature(id) => {
            session.choose_feature(&id)?;
            render::screen(session);
        }
        Command::Custom => {
            session.start_custom_requirement()?;
            render::screen(session);
        }
        Command::Requirement(text) => session.set_requirement(text)?,
        Command::Generate => {
            render::busy(OperationKind::Generate.label());
            session.generate().await?;
            render::screen(session);
        }
        Command::Explain => {
            render::busy(OperationKind::Explain.label());
            session.explain().await?;
            render::screen(session);
        }
        Command::ErrorFix => {
            session.enter_error_fix()?;
            render::screen(session);
        }
        Command::ErrorDescription(text) => session.set_error_description(text)?,
        Command::Image(path) => {
            session.view().ensure_screen(Screen::ErrorFix)?;
            let image = load_image(&path).await?;
            let name = image.file_name().to_string();
            session.attach_image(image)?;
            println!("{}", format!("Attached {name}.").bright_green());
        }
        Command::NoImage => {
            session.clear_image()?;
            println!("{}", "Screenshot removed.".bright_black());
        }
        Command::Fix => {
            render::busy(OperationKind::ErrorFix.label());
            session.fix().await?;
            render::screen(session);
        }
        Command::History => render::history(session.history()),
        Command::Back => {
            if session.back()? {
                render::screen(session);
            } else {
                println!("{}", "Already on the first screen.".bright_black());
            }
        }
        Command::Copy(target) => {
            let now = Instant::now();
            let text = match target {
                CopyTarget::Script => session.copy_script(now)?,
                CopyTarget::Explanation => session.copy_explanation(now)?,
            };
            println!();
            println!("{text}");
            println!();
            println!("{}", "Copied.".bright_green());
        }
        Command::Show => render::screen(session),
        Command::Status => render::status(session),
        Command::Help => render::help(),
        Command::Text(text) => match session.view().screen() {
            Screen::Generate => {
                let requirement = append_line(session.view().requirement(), &text);
                session.set_requirement(requirement)?;
            }
            Screen::ErrorFix => {
                let description =
                    append_line(&session.view().pending_report().description, &text);
                session.set_error_description(description)?;
            }
            _ => println!(
                "{}",
                "Use a /command on this screen. Type /help.".bright_black()
            ),
        },
        Command::Quit => {}
    }
    Ok(())
}

/// Plain lines accumulate so pasted multi-line input survives.
fn append_line(current: &str, line: &str) -> String {
    if current.is_empty() {
        line.to_string()
    } else {
        format!("{current}\n{line}")
    }
}
