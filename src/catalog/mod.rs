pub mod builtin;
mod conversion;
mod definition;

pub use builtin::{BuiltinCatalog, BUILTIN_TASK_PREFIX};
pub use conversion::IntoProject;
pub use definition::{
    ControllerDefinition, FieldType, InputField, OptionCase, OptionCatalog, OptionDefinition,
    ProjectDefinition, ResourceDefinition, TaskDefinition,
};
