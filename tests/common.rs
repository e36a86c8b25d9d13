//! Common test utilities for building project definitions and value stores.
use kasane::prelude::*;
use serde_json::Value;

/// Builds a case with an optional fragment and child option keys.
#[allow(dead_code)]
pub fn case(name: &str, fragment: Option<Value>, children: &[&str]) -> OptionCase {
    OptionCase {
        name: name.to_string(),
        pipeline_override: fragment,
        option: children.iter().map(|child| child.to_string()).collect(),
    }
}

#[allow(dead_code)]
pub fn select(cases: Vec<OptionCase>, default_case: Option<&str>) -> OptionDefinition {
    OptionDefinition::Select {
        cases,
        default_case: default_case.map(str::to_string),
    }
}

#[allow(dead_code)]
pub fn switch(cases: Vec<OptionCase>, default_case: Option<&str>) -> OptionDefinition {
    OptionDefinition::Switch {
        cases,
        default_case: default_case.map(str::to_string),
    }
}

#[allow(dead_code)]
pub fn checkbox(cases: Vec<OptionCase>) -> OptionDefinition {
    OptionDefinition::Checkbox { cases }
}

#[allow(dead_code)]
pub fn input(fields: Vec<InputField>, template: Value) -> OptionDefinition {
    OptionDefinition::Input {
        fields,
        pipeline_override: template,
    }
}

#[allow(dead_code)]
pub fn field(name: &str, pipeline_type: FieldType, default: Option<&str>) -> InputField {
    InputField {
        name: name.to_string(),
        default: default.map(str::to_string),
        pipeline_type,
        pattern: None,
    }
}

/// Builds a project with a single task named "daily" carrying the given
/// top-level option keys.
#[allow(dead_code)]
pub fn project_with(
    options: Vec<(&str, OptionDefinition)>,
    task_options: &[&str],
) -> ProjectDefinition {
    ProjectDefinition {
        option: options
            .into_iter()
            .map(|(key, definition)| (key.to_string(), definition))
            .collect(),
        task: vec![TaskDefinition {
            name: "daily".to_string(),
            entry: "Daily".to_string(),
            pipeline_override: None,
            option: task_options.iter().map(|key| key.to_string()).collect(),
        }],
        ..ProjectDefinition::default()
    }
}

/// Compiles with no controller/resource selected and parses the document
/// back into fragments.
#[allow(dead_code)]
pub fn compile_fragments(project: &ProjectDefinition, selected: &SelectedTask) -> Vec<Value> {
    let compiler = Compiler::new(project);
    let document = compiler.compile(selected, None, None);
    serde_json::from_str(&document).expect("compiled document must be valid JSON")
}
