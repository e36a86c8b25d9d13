//! Built-in task catalog.
//!
//! Built-in tasks are GUI-internal: they never appear in a project's own
//! task list and each one maps to a fixed automation-engine custom action.
//! Their option definitions live in this private catalog rather than in the
//! project's, so a project cannot redefine what a built-in option means.

use ahash::AHashMap;
use serde_json::json;

use super::definition::{
    FieldType, InputField, OptionCase, OptionCatalog, OptionDefinition, TaskDefinition,
};

/// Name prefix reserved for built-in tasks.
pub const BUILTIN_TASK_PREFIX: &str = "builtin:";

/// The registry of built-in tasks and the option catalog backing them.
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog {
    tasks: AHashMap<String, TaskDefinition>,
    options: OptionCatalog,
}

impl BuiltinCatalog {
    /// An empty registry, for hosts that ship no built-in tasks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock registry: sleep, wait-until, launch, webhook, notify,
    /// kill-process and power.
    pub fn stock() -> Self {
        let mut catalog = Self::default();
        catalog.register(sleep_task(), sleep_options());
        catalog.register(wait_until_task(), wait_until_options());
        catalog.register(launch_task(), launch_options());
        catalog.register(webhook_task(), webhook_options());
        catalog.register(notify_task(), notify_options());
        catalog.register(kill_process_task(), kill_process_options());
        catalog.register(power_task(), power_options());
        catalog
    }

    /// Registers one built-in task together with its private options.
    /// A task registered twice replaces the earlier entry; option keys are
    /// shared across all built-in tasks in the registry.
    pub fn register(
        &mut self,
        task: TaskDefinition,
        options: impl IntoIterator<Item = (String, OptionDefinition)>,
    ) {
        self.options.extend(options);
        self.tasks.insert(task.name.clone(), task);
    }

    /// The registered tasks, in no particular order.
    pub fn tasks(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.values()
    }

    /// Looks up a task, honoring the reserved name prefix.
    pub(crate) fn find_task(&self, name: &str) -> Option<&TaskDefinition> {
        if !name.starts_with(BUILTIN_TASK_PREFIX) {
            return None;
        }
        self.tasks.get(name)
    }

    /// The option catalog backing the registered tasks. UI layers resolve
    /// built-in option defaults against this, not the project's catalog.
    pub fn options(&self) -> &OptionCatalog {
        &self.options
    }
}

fn input_field(name: &str, pipeline_type: FieldType, default: Option<&str>) -> InputField {
    InputField {
        name: name.to_string(),
        default: default.map(str::to_string),
        pipeline_type,
        pattern: None,
    }
}

fn sleep_task() -> TaskDefinition {
    TaskDefinition {
        name: format!("{BUILTIN_TASK_PREFIX}sleep"),
        entry: "BuiltinSleep".to_string(),
        pipeline_override: Some(json!({
            "BuiltinSleep": { "action": "Custom", "custom_action": "KASANE_SLEEP_ACTION" }
        })),
        option: vec!["sleep_seconds".to_string()],
    }
}

fn sleep_options() -> Vec<(String, OptionDefinition)> {
    vec![(
        "sleep_seconds".to_string(),
        OptionDefinition::Input {
            fields: vec![input_field("sleep_time", FieldType::Int, Some("5"))],
            pipeline_override: json!({
                "BuiltinSleep": { "custom_action_param": { "sleep_time": "{sleep_time}" } }
            }),
        },
    )]
}

fn wait_until_task() -> TaskDefinition {
    TaskDefinition {
        name: format!("{BUILTIN_TASK_PREFIX}wait_until"),
        entry: "BuiltinWaitUntil".to_string(),
        pipeline_override: Some(json!({
            "BuiltinWaitUntil": { "action": "Custom", "custom_action": "KASANE_WAITUNTIL_ACTION" }
        })),
        option: vec!["wait_target".to_string()],
    }
}

fn wait_until_options() -> Vec<(String, OptionDefinition)> {
    let mut target = input_field("target_time", FieldType::String, None);
    target.pattern = Some(r"^\d{1,2}:\d{2}$".to_string());
    vec![(
        "wait_target".to_string(),
        OptionDefinition::Input {
            fields: vec![target],
            pipeline_override: json!({
                "BuiltinWaitUntil": { "custom_action_param": { "target_time": "{target_time}" } }
            }),
        },
    )]
}

fn launch_task() -> TaskDefinition {
    TaskDefinition {
        name: format!("{BUILTIN_TASK_PREFIX}launch"),
        entry: "BuiltinLaunch".to_string(),
        pipeline_override: Some(json!({
            "BuiltinLaunch": { "action": "Custom", "custom_action": "KASANE_LAUNCH_ACTION" }
        })),
        option: vec!["launch_program".to_string()],
    }
}

fn launch_options() -> Vec<(String, OptionDefinition)> {
    vec![(
        "launch_program".to_string(),
        OptionDefinition::Input {
            fields: vec![
                input_field("program", FieldType::String, None),
                input_field("args", FieldType::String, None),
                input_field("wait_for_exit", FieldType::Bool, Some("false")),
            ],
            pipeline_override: json!({
                "BuiltinLaunch": { "custom_action_param": {
                    "program": "{program}",
                    "args": "{args}",
                    "wait_for_exit": "{wait_for_exit}"
                } }
            }),
        },
    )]
}

fn webhook_task() -> TaskDefinition {
    TaskDefinition {
        name: format!("{BUILTIN_TASK_PREFIX}webhook"),
        entry: "BuiltinWebhook".to_string(),
        pipeline_override: Some(json!({
            "BuiltinWebhook": { "action": "Custom", "custom_action": "KASANE_WEBHOOK_ACTION" }
        })),
        option: vec!["webhook_url".to_string()],
    }
}

fn webhook_options() -> Vec<(String, OptionDefinition)> {
    vec![(
        "webhook_url".to_string(),
        OptionDefinition::Input {
            fields: vec![input_field("url", FieldType::String, None)],
            pipeline_override: json!({
                "BuiltinWebhook": { "custom_action_param": { "url": "{url}" } }
            }),
        },
    )]
}

fn notify_task() -> TaskDefinition {
    TaskDefinition {
        name: format!("{BUILTIN_TASK_PREFIX}notify"),
        entry: "BuiltinNotify".to_string(),
        pipeline_override: Some(json!({
            "BuiltinNotify": { "action": "Custom", "custom_action": "KASANE_NOTIFY_ACTION" }
        })),
        option: vec!["notify_message".to_string()],
    }
}

fn notify_options() -> Vec<(String, OptionDefinition)> {
    vec![(
        "notify_message".to_string(),
        OptionDefinition::Input {
            fields: vec![
                input_field("title", FieldType::String, Some("kasane")),
                input_field("body", FieldType::String, None),
            ],
            pipeline_override: json!({
                "BuiltinNotify": { "custom_action_param": { "title": "{title}", "body": "{body}" } }
            }),
        },
    )]
}

fn kill_process_task() -> TaskDefinition {
    TaskDefinition {
        name: format!("{BUILTIN_TASK_PREFIX}kill_process"),
        entry: "BuiltinKillProcess".to_string(),
        pipeline_override: Some(json!({
            "BuiltinKillProcess": { "action": "Custom", "custom_action": "KASANE_KILLPROC_ACTION" }
        })),
        option: vec!["kill_self".to_string()],
    }
}

fn kill_process_options() -> Vec<(String, OptionDefinition)> {
    vec![
        (
            "kill_self".to_string(),
            OptionDefinition::Switch {
                cases: vec![
                    OptionCase {
                        name: "Yes".to_string(),
                        pipeline_override: Some(json!({
                            "BuiltinKillProcess": { "custom_action_param": { "kill_self": true } }
                        })),
                        option: Vec::new(),
                    },
                    OptionCase {
                        name: "No".to_string(),
                        pipeline_override: Some(json!({
                            "BuiltinKillProcess": { "custom_action_param": { "kill_self": false } }
                        })),
                        // Only a foreign kill needs a process name.
                        option: vec!["kill_target".to_string()],
                    },
                ],
                default_case: Some("Yes".to_string()),
            },
        ),
        (
            "kill_target".to_string(),
            OptionDefinition::Input {
                fields: vec![input_field("process_name", FieldType::String, None)],
                pipeline_override: json!({
                    "BuiltinKillProcess": { "custom_action_param": { "process_name": "{process_name}" } }
                }),
            },
        ),
    ]
}

fn power_task() -> TaskDefinition {
    TaskDefinition {
        name: format!("{BUILTIN_TASK_PREFIX}power"),
        entry: "BuiltinPower".to_string(),
        pipeline_override: Some(json!({
            "BuiltinPower": { "action": "Custom", "custom_action": "KASANE_POWER_ACTION" }
        })),
        option: vec!["power_action".to_string()],
    }
}

fn power_options() -> Vec<(String, OptionDefinition)> {
    let action_case = |name: &str| OptionCase {
        name: name.to_string(),
        pipeline_override: Some(json!({
            "BuiltinPower": { "custom_action_param": { "power_action": name } }
        })),
        option: Vec::new(),
    };

    vec![(
        "power_action".to_string(),
        OptionDefinition::Select {
            cases: vec![
                action_case("shutdown"),
                action_case("restart"),
                action_case("screenoff"),
                action_case("sleep"),
            ],
            default_case: Some("shutdown".to_string()),
        },
    )]
}
