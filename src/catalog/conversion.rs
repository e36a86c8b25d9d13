use super::definition::ProjectDefinition;
use crate::error::ProjectConversionError;

/// A trait for custom interface formats that can be converted into a kasane
/// `ProjectDefinition`.
///
/// `ProjectDefinition` deserializes the standard interface JSON directly;
/// implement this trait when a project ships its catalog in some other
/// shape (a legacy layout, a wrapper document, a non-JSON source) and you
/// want the compiler to stay agnostic of it.
///
/// # Example
///
/// ```rust,no_run
/// use kasane::catalog::{IntoProject, ProjectDefinition, TaskDefinition};
/// use kasane::error::ProjectConversionError;
///
/// struct LegacyManifest {
///     entries: Vec<(String, String)>, // (task name, engine entry)
/// }
///
/// impl IntoProject for LegacyManifest {
///     fn into_project(self) -> Result<ProjectDefinition, ProjectConversionError> {
///         let task = self
///             .entries
///             .into_iter()
///             .map(|(name, entry)| TaskDefinition {
///                 name,
///                 entry,
///                 pipeline_override: None,
///                 option: Vec::new(),
///             })
///             .collect();
///
///         Ok(ProjectDefinition {
///             task,
///             ..ProjectDefinition::default()
///         })
///     }
/// }
/// ```
pub trait IntoProject {
    /// Consumes the object and converts it into a compiler-ready project.
    fn into_project(self) -> Result<ProjectDefinition, ProjectConversionError>;
}
