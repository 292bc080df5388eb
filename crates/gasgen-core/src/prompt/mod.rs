//! Prompt construction.
//!
//! Each operation pairs a request text (built in `builder`) with a system
//! instruction (from `instructions`) and a fixed sampling temperature.
//! Everything here is a pure function of its inputs.

mod builder;
mod instructions;
mod normalize;

pub use builder::{build_error_fix_request, build_explanation_request, build_generation_request};
pub use instructions::{
    category_mandate, error_fix_system_instruction, explanation_system_instruction,
    generation_system_instruction,
};
pub use normalize::strip_code_fence;

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// The three kinds of request the assistant sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Generate,
    Explain,
    ErrorFix,
}

impl OperationKind {
    /// Lower for code, higher for prose.
    pub fn temperature(&self) -> f32 {
        match self {
            OperationKind::Generate | OperationKind::ErrorFix => 0.2,
            OperationKind::Explain => 0.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Generate => "generate",
            OperationKind::Explain => "explain",
            OperationKind::ErrorFix => "error fix",
        }
    }
}

/// A fully built request, ready for an [`crate::backend::LlmBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub kind: OperationKind,
    pub contents: String,
    pub system_instruction: String,
}

impl PromptRequest {
    /// Generation request; `contents` is the output of [`build_generation_request`].
    pub fn generation(contents: impl Into<String>, category: Category, language: &str) -> Self {
        Self {
            kind: OperationKind::Generate,
            contents: contents.into(),
            system_instruction: generation_system_instruction(category, language),
        }
    }

    /// Fix request; `contents` is the output of [`build_error_fix_request`].
    pub fn error_fix(contents: impl Into<String>, category: Category, language: &str) -> Self {
        Self {
            kind: OperationKind::ErrorFix,
            contents: contents.into(),
            system_instruction: error_fix_system_instruction(category, language),
        }
    }

    pub fn explanation(script: &str, category: Category, language: &str) -> Self {
        Self {
            kind: OperationKind::Explain,
            contents: build_explanation_request(script, category, language),
            system_instruction: explanation_system_instruction(language),
        }
    }

    pub fn temperature(&self) -> f32 {
        self.kind.temperature()
    }
}
