use thiserror::Error;

/// Errors that can occur while substituting values into a fragment template.
///
/// Recoverable: the override collector logs the failure and drops the
/// single offending fragment instead of aborting the compile.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("substituted template is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors that can occur when converting a custom interface format into a
/// kasane `ProjectDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ProjectConversionError {
    #[error("invalid interface data: {0}")]
    ValidationError(String),
}
