//! End-to-end scenarios: seed defaults, mutate selections the way a UI
//! would, compile, and check the full override document.
mod common;
use common::*;
use kasane::prelude::*;
use kasane::values::defaults;
use serde_json::{json, Value};

/// A project shaped like a real interface description: one farming task
/// with nested options, plus scope options on the project, a resource and
/// a controller.
fn farming_project() -> ProjectDefinition {
    let mut option: OptionCatalog = OptionCatalog::default();
    option.insert(
        "performance".to_string(),
        switch(
            vec![
                case(
                    "Yes",
                    Some(json!({ "GameSettings": { "fast_mode": true } })),
                    &[],
                ),
                case(
                    "No",
                    Some(json!({ "GameSettings": { "fast_mode": false } })),
                    &[],
                ),
            ],
            None,
        ),
    );
    option.insert(
        "server".to_string(),
        select(
            vec![
                case(
                    "Official",
                    Some(json!({ "Launch": { "server": "Official" } })),
                    &[],
                ),
                case(
                    "Bilibili",
                    Some(json!({ "Launch": { "server": "Bilibili" } })),
                    &[],
                ),
            ],
            None,
        ),
    );
    option.insert(
        "screenshot_fast".to_string(),
        switch(
            vec![
                case(
                    "Yes",
                    Some(json!({ "Screenshot": { "fast": true } })),
                    &[],
                ),
                case("No", Some(json!({ "Screenshot": { "fast": false } })), &[]),
            ],
            Some("Yes"),
        ),
    );
    option.insert(
        "stage".to_string(),
        select(
            vec![
                case(
                    "LastPlayed",
                    Some(json!({ "DailyFarm": { "stage": "last" } })),
                    &[],
                ),
                case(
                    "Custom",
                    Some(json!({ "DailyFarm": { "stage": "custom" } })),
                    &["stage_code"],
                ),
            ],
            None,
        ),
    );
    option.insert(
        "stage_code".to_string(),
        input(
            vec![field("stage_code", FieldType::String, Some("1-7"))],
            json!({ "DailyFarm": { "stage_code": "{stage_code}" } }),
        ),
    );
    option.insert(
        "times".to_string(),
        input(
            vec![field("times", FieldType::Int, Some("1"))],
            json!({ "DailyFarm": { "times": "{times}" } }),
        ),
    );
    option.insert(
        "extras".to_string(),
        checkbox(vec![
            case(
                "Annihilation",
                Some(json!({ "DailyFarm": { "annihilation": true } })),
                &[],
            ),
            case(
                "Recruit",
                Some(json!({ "DailyFarm": { "recruit": true } })),
                &[],
            ),
        ]),
    );

    ProjectDefinition {
        option,
        task: vec![TaskDefinition {
            name: "DailyFarm".to_string(),
            entry: "DailyFarm".to_string(),
            pipeline_override: Some(json!({ "DailyFarm": { "enabled": true } })),
            option: vec![
                "stage".to_string(),
                "times".to_string(),
                "extras".to_string(),
            ],
        }],
        resource: vec![ResourceDefinition {
            name: "CN".to_string(),
            option: vec!["server".to_string()],
        }],
        controller: vec![ControllerDefinition {
            name: "Adb".to_string(),
            option: vec!["screenshot_fast".to_string()],
        }],
        global_option: vec!["performance".to_string()],
    }
}

#[test]
fn test_defaults_then_compile_full_document() {
    let project = farming_project();
    let compiler = Compiler::new(&project);

    let mut selected = SelectedTask::new("DailyFarm");
    let task = project.find_task("DailyFarm").unwrap();
    defaults::initialize(&task.option, &project.option, &mut selected.values);

    // Defaults: first select case, empty checkbox, declared field defaults.
    assert_eq!(
        selected.values.get("stage"),
        Some(&OptionValue::Select {
            case: "LastPlayed".to_string()
        })
    );
    assert!(selected.values.contains_key("times"));
    assert!(selected.values.contains_key("extras"));
    // "stage_code" stays unresolved: the default stage case unlocks nothing.
    assert!(!selected.values.contains_key("stage_code"));

    let document = compiler.compile(&selected, Some("Adb"), Some("CN"));
    let fragments: Vec<Value> = serde_json::from_str(&document).unwrap();

    assert_eq!(
        fragments,
        vec![
            json!({ "DailyFarm": { "enabled": true } }),
            json!({ "GameSettings": { "fast_mode": false } }),
            json!({ "Launch": { "server": "Official" } }),
            json!({ "Screenshot": { "fast": true } }),
            json!({ "DailyFarm": { "stage": "last" } }),
            json!({ "DailyFarm": { "times": 1 } }),
        ]
    );
}

#[test]
fn test_user_edits_reshape_the_document() {
    let project = farming_project();
    let compiler = Compiler::new(&project);

    let mut selected = SelectedTask::new("DailyFarm");
    let task = project.find_task("DailyFarm").unwrap();
    defaults::initialize(&task.option, &project.option, &mut selected.values);

    // The user flips to the custom stage; the UI initializes the options
    // the newly active case reveals, then the user edits them.
    selected.values.insert(
        "stage".to_string(),
        OptionValue::Select {
            case: "Custom".to_string(),
        },
    );
    defaults::initialize(
        &["stage_code".to_string()],
        &project.option,
        &mut selected.values,
    );
    selected.values.insert("stage_code".to_string(), {
        let mut fields = FieldValues::default();
        fields.insert("stage_code".to_string(), "5-10".to_string());
        OptionValue::Input { fields }
    });
    selected.values.insert("times".to_string(), {
        let mut fields = FieldValues::default();
        fields.insert("times".to_string(), "6".to_string());
        OptionValue::Input { fields }
    });
    selected.values.insert(
        "extras".to_string(),
        OptionValue::Checkbox {
            selected: vec!["Recruit".to_string()],
        },
    );

    let document = compiler.compile(&selected, Some("Adb"), Some("CN"));
    let fragments: Vec<Value> = serde_json::from_str(&document).unwrap();

    assert_eq!(
        fragments,
        vec![
            json!({ "DailyFarm": { "enabled": true } }),
            json!({ "GameSettings": { "fast_mode": false } }),
            json!({ "Launch": { "server": "Official" } }),
            json!({ "Screenshot": { "fast": true } }),
            json!({ "DailyFarm": { "stage": "custom" } }),
            json!({ "DailyFarm": { "stage_code": "5-10" } }),
            json!({ "DailyFarm": { "times": 6 } }),
            json!({ "DailyFarm": { "recruit": true } }),
        ]
    );
}

#[test]
fn test_builtin_kill_process_merges_switch_and_unlocked_input() {
    let project = ProjectDefinition::default();
    let compiler = Compiler::new(&project);

    let mut selected = SelectedTask::new("builtin:kill_process");
    selected.values.insert(
        "kill_self".to_string(),
        OptionValue::Switch { enabled: false },
    );
    selected.values.insert("kill_target".to_string(), {
        let mut fields = FieldValues::default();
        fields.insert("process_name".to_string(), "emulator.exe".to_string());
        OptionValue::Input { fields }
    });

    let document = compiler.compile(&selected, None, None);
    let fragments: Vec<Value> = serde_json::from_str(&document).unwrap();

    assert_eq!(
        fragments,
        vec![json!({
            "BuiltinKillProcess": {
                "action": "Custom",
                "custom_action": "KASANE_KILLPROC_ACTION",
                "custom_action_param": {
                    "kill_self": false,
                    "process_name": "emulator.exe"
                }
            }
        })]
    );
}

#[test]
fn test_builtin_kill_process_default_keeps_param_minimal() {
    let project = ProjectDefinition::default();
    let compiler = Compiler::new(&project);

    // Default case is "Yes": the process-name option stays locked and the
    // merged parameter carries only the flag.
    let selected = SelectedTask::new("builtin:kill_process");
    let document = compiler.compile(&selected, None, None);
    let fragments: Vec<Value> = serde_json::from_str(&document).unwrap();

    assert_eq!(
        fragments[0]["BuiltinKillProcess"]["custom_action_param"],
        json!({ "kill_self": true })
    );
}

#[test]
fn test_builtin_power_selects_action() {
    let project = ProjectDefinition::default();
    let compiler = Compiler::new(&project);

    let mut selected = SelectedTask::new("builtin:power");
    selected.values.insert(
        "power_action".to_string(),
        OptionValue::Select {
            case: "restart".to_string(),
        },
    );

    let document = compiler.compile(&selected, None, None);
    let fragments: Vec<Value> = serde_json::from_str(&document).unwrap();

    assert_eq!(
        fragments,
        vec![json!({
            "BuiltinPower": {
                "action": "Custom",
                "custom_action": "KASANE_POWER_ACTION",
                "custom_action_param": { "power_action": "restart" }
            }
        })]
    );
}

#[test]
fn test_interface_json_round_trips_through_serde() {
    // The shape a project actually ships: parse it, compile from it.
    let interface_json = r##"{
        "option": {
            "difficulty": {
                "type": "select",
                "cases": [
                    { "name": "Normal", "pipeline_override": { "Battle": { "difficulty": 0 } } },
                    { "name": "Hard", "pipeline_override": { "Battle": { "difficulty": 1 } } }
                ],
                "default_case": "Hard"
            }
        },
        "task": [
            { "name": "Battle", "entry": "Battle", "option": ["difficulty"] }
        ]
    }"##;

    let project: ProjectDefinition = serde_json::from_str(interface_json).unwrap();
    let compiler = Compiler::new(&project);
    let selected = SelectedTask::new("Battle");

    let document = compiler.compile(&selected, None, None);
    let fragments: Vec<Value> = serde_json::from_str(&document).unwrap();
    assert_eq!(fragments, vec![json!({ "Battle": { "difficulty": 1 } })]);
}
