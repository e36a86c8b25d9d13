//! # Kasane - Option-Tree Resolution and Pipeline-Override Compilation
//!
//! **Kasane** turns a declarative, recursively-nested task/option
//! configuration (the kind a user assembles in a GUI) into a single
//! ordered, merge-ready override document for an external automation
//! engine. The transform is deterministic and synchronous, performs no
//! I/O, and compiles the same catalog and value snapshot to
//! byte-identical output every time.
//!
//! ## Core Workflow
//!
//! 1.  **Load the project**: deserialize the project's interface
//!     description into a [`catalog::ProjectDefinition`] (or adapt a
//!     custom format through [`catalog::IntoProject`]).
//! 2.  **Seed values**: call [`values::defaults::initialize`] for a task's
//!     option keys to synthesize default [`values::OptionValue`]s,
//!     including any nested options its default selections unlock. The
//!     resulting [`values::ValueStore`] is owned by the UI layer, which
//!     mutates it as the user explores cases.
//! 3.  **Compile**: hand a [`values::SelectedTask`] plus the current
//!     controller/resource names to [`compiler::Compiler::compile`] and
//!     pass the returned JSON text to the engine's task-invocation call.
//!
//! Ordinary tasks compile to a multi-element array the engine applies with
//! shallow per-field overwrite, encoding the precedence
//! global < resource < controller < task. Built-in tasks (reserved
//! `builtin:` names, GUI-internal) compile to a one-element array holding
//! the deep merge of every contribution, so sibling fields under the same
//! pipeline node never clobber each other.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kasane::prelude::*;
//! use kasane::values::defaults;
//!
//! fn main() -> Result<()> {
//!     let interface_json = std::fs::read_to_string("interface.json")?;
//!     let project: ProjectDefinition = serde_json::from_str(&interface_json)?;
//!
//!     let compiler = Compiler::new(&project);
//!
//!     // Instantiate a task and seed its option tree with defaults.
//!     let mut selected = SelectedTask::new("DailyRun");
//!     if let Some(task) = project.find_task(&selected.name) {
//!         defaults::initialize(&task.option, &project.option, &mut selected.values);
//!     }
//!
//!     // ... the UI mutates selected.values as the user picks cases ...
//!
//!     let document = compiler.compile(&selected, Some("AdbDefault"), Some("Stable"));
//!     println!("{}", document);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod compiler;
pub mod error;
pub mod prelude;
pub mod values;
