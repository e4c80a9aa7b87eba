//! Error types shared by both demos.

use crate::program::ShaderStage;

/// A control emitted a value that could not be turned into a parameter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("expected #RRGGBB, got {0:?}")]
    BadHexColor(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    #[error("failed to create {0} shader")]
    CreateShader(ShaderStage),

    #[error("failed to create shader program")]
    CreateProgram,

    #[error("{stage} shader compilation failed:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program link failed:\n{log}")]
    Link { log: String },
}

/// Reasons a demo could not be brought up.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// A required element id is absent from the page. The demo is skipped quietly.
    #[error("element #{0} not found")]
    MissingElement(&'static str),

    /// The canvas could not hand out a WebGL2 context.
    #[error("WebGL is not available in this browser")]
    ContextUnavailable,

    /// Anything the browser threw at us, stringified.
    #[error("browser error: {0}")]
    Js(String),
}

impl DemoError {
    /// Whether the failure should be surfaced to the person looking at the page.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, DemoError::MissingElement(_))
    }
}
