use clap::Parser;
use kasane::prelude::*;
use kasane::values::defaults;
use std::fs;

/// A debug CLI for the kasane override compiler: loads a project interface
/// JSON plus an optional value snapshot and prints the compiled document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the project interface JSON file
    project_path: String,

    /// Name of the task to compile (project task or builtin:* name)
    #[arg(short, long)]
    task: Option<String>,

    /// Optional path to a JSON file holding the option value snapshot
    #[arg(long)]
    values: Option<String>,

    /// Currently selected controller name
    #[arg(long)]
    controller: Option<String>,

    /// Currently selected resource name
    #[arg(long)]
    resource: Option<String>,

    /// Seed unset options with their defaults before compiling
    #[arg(short, long)]
    defaults: bool,

    /// List the project's tasks and the registered built-in tasks
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let project_json = fs::read_to_string(&cli.project_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read project file '{}': {}",
            &cli.project_path, e
        ))
    });
    let project: ProjectDefinition = serde_json::from_str(&project_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse project JSON: {}", e)));

    let compiler = Compiler::new(&project);

    if cli.list {
        list_tasks(&project, &compiler);
        return;
    }

    let task_name = cli
        .task
        .unwrap_or_else(|| exit_with_error("A task name is required (pass --task)."));

    let mut selected = SelectedTask::new(task_name);

    if let Some(values_path) = &cli.values {
        let values_json = fs::read_to_string(values_path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read values file '{}': {}", values_path, e))
        });
        selected.values = serde_json::from_str(&values_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse values JSON: {}", e)));
    }

    if cli.defaults {
        if let Some(task) = project.find_task(&selected.name) {
            defaults::initialize(&task.option, &project.option, &mut selected.values);
        } else {
            let builtins = BuiltinCatalog::stock();
            if let Some(task) = builtins.tasks().find(|task| task.name == selected.name) {
                defaults::initialize(&task.option, builtins.options(), &mut selected.values);
            }
        }
    }

    let document = compiler.compile(&selected, cli.controller.as_deref(), cli.resource.as_deref());
    println!("{}", document);
}

fn list_tasks(project: &ProjectDefinition, compiler: &Compiler<'_>) {
    println!("Project tasks:");
    for task in &project.task {
        println!("  {} (entry: {})", task.name, task.entry);
    }
    println!("Built-in tasks:");
    for task in compiler.builtin_tasks() {
        println!("  {} (entry: {})", task.name, task.entry);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
