use itertools::chain;
use log::debug;
use serde_json::Value;

mod collector;
pub mod merge;
pub mod template;

use crate::catalog::{BuiltinCatalog, OptionDefinition, ProjectDefinition, TaskDefinition};
use crate::values::SelectedTask;
use collector::OverrideCollector;
pub use merge::deep_merge;

/// Compiles a selected task's option tree into the override document the
/// automation engine consumes.
///
/// A `Compiler` borrows the project definition, reads the caller's value
/// snapshot, and returns a freshly allocated string: it holds no mutable
/// state, so a single instance can serve any number of concurrent compiles.
pub struct Compiler<'a> {
    project: &'a ProjectDefinition,
    builtins: BuiltinCatalog,
}

/// Configures a [`Compiler`], chiefly which built-in tasks it knows about.
pub struct CompilerBuilder<'a> {
    project: &'a ProjectDefinition,
    builtins: BuiltinCatalog,
}

impl<'a> CompilerBuilder<'a> {
    pub fn new(project: &'a ProjectDefinition) -> Self {
        Self {
            project,
            builtins: BuiltinCatalog::stock(),
        }
    }

    /// Replaces the stock built-in registry wholesale.
    pub fn with_builtin_catalog(mut self, builtins: BuiltinCatalog) -> Self {
        self.builtins = builtins;
        self
    }

    /// Registers one additional built-in task with its private options.
    pub fn with_builtin_task(
        mut self,
        task: TaskDefinition,
        options: impl IntoIterator<Item = (String, OptionDefinition)>,
    ) -> Self {
        self.builtins.register(task, options);
        self
    }

    pub fn build(self) -> Compiler<'a> {
        Compiler {
            project: self.project,
            builtins: self.builtins,
        }
    }
}

impl<'a> Compiler<'a> {
    pub fn builder(project: &'a ProjectDefinition) -> CompilerBuilder<'a> {
        CompilerBuilder::new(project)
    }

    /// A compiler with the stock built-in tasks.
    pub fn new(project: &'a ProjectDefinition) -> Self {
        Self::builder(project).build()
    }

    /// Compiles the override document for one task, serialized as a JSON
    /// array.
    ///
    /// Ordinary tasks produce an ordered multi-element array the engine
    /// applies with shallow per-field overwrite, encoding the precedence
    /// global < resource < controller < task. Built-in tasks (reserved
    /// `builtin:` names absent from the project's task list) produce a
    /// one-element array holding the deep merge of every contribution.
    ///
    /// Never fails: an unknown task compiles to `"[]"`.
    pub fn compile(
        &self,
        selected: &SelectedTask,
        controller: Option<&str>,
        resource: Option<&str>,
    ) -> String {
        let fragments = if let Some(task) = self.project.find_task(&selected.name) {
            self.compile_ordinary(task, selected, controller, resource)
        } else if let Some(task) = self.builtins.find_task(&selected.name) {
            vec![self.compile_builtin(task, selected)]
        } else {
            debug!("task '{}' not found, compiling to empty document", selected.name);
            Vec::new()
        };

        serde_json::to_string(&fragments).unwrap_or_else(|_| "[]".to_string())
    }

    /// Ordered fragment list: the task's own override first, then the four
    /// scopes from lowest to highest precedence. Later entries win under
    /// the engine's shallow overwrite.
    fn compile_ordinary(
        &self,
        task: &TaskDefinition,
        selected: &SelectedTask,
        controller: Option<&str>,
        resource: Option<&str>,
    ) -> Vec<Value> {
        let mut fragments = Vec::new();
        if let Some(own) = &task.pipeline_override {
            fragments.push(own.clone());
        }

        let resource_keys = resource
            .and_then(|name| self.project.find_resource(name))
            .map(|resource| resource.option.as_slice())
            .unwrap_or_default();
        let controller_keys = controller
            .and_then(|name| self.project.find_controller(name))
            .map(|controller| controller.option.as_slice())
            .unwrap_or_default();

        let mut collector = OverrideCollector::new(&self.project.option, &selected.values);
        for key in chain!(
            &self.project.global_option,
            resource_keys,
            controller_keys,
            &task.option,
        ) {
            collector.collect(key, &mut fragments);
        }
        fragments
    }

    /// Built-in tasks resolve their options against the private built-in
    /// catalog and deep-merge every contribution into one object.
    fn compile_builtin(&self, task: &TaskDefinition, selected: &SelectedTask) -> Value {
        let mut fragments = Vec::new();
        if let Some(own) = &task.pipeline_override {
            fragments.push(own.clone());
        }

        let mut collector = OverrideCollector::new(self.builtins.options(), &selected.values);
        for key in &task.option {
            collector.collect(key, &mut fragments);
        }
        deep_merge(fragments)
    }

    /// The built-in tasks this compiler was configured with.
    pub fn builtin_tasks(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.builtins.tasks()
    }
}
