//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kasane crate so that a
//! typical host only needs a single `use`.

// Compilation entry points
pub use crate::compiler::{deep_merge, Compiler, CompilerBuilder};

// Catalog and project model
pub use crate::catalog::{
    BuiltinCatalog, ControllerDefinition, FieldType, InputField, IntoProject, OptionCase,
    OptionCatalog, OptionDefinition, ProjectDefinition, ResourceDefinition, TaskDefinition,
    BUILTIN_TASK_PREFIX,
};

// Runtime value state
pub use crate::values::{defaults, FieldValues, OptionValue, SelectedTask, ValueStore};

// Error types
pub use crate::error::{ProjectConversionError, TemplateError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
