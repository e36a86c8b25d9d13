use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The complete option catalog: every option key the project declares,
/// mapped to its definition. Loaded once from the project's interface
/// description and treated as immutable afterwards.
pub type OptionCatalog = AHashMap<String, OptionDefinition>;

/// Pipeline value type a raw input string is coerced to during template
/// substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Int,
    Bool,
}

/// A single text field of an `input`-type option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputField {
    pub name: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub pipeline_type: FieldType,
    /// Optional validation regex the UI applies before accepting a value.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl InputField {
    /// Checks a raw value against the declared validation pattern.
    ///
    /// A field without a pattern accepts everything; an unparseable pattern
    /// is treated the same way rather than rejecting all input.
    pub fn is_valid(&self, raw: &str) -> bool {
        match &self.pattern {
            Some(pattern) => match regex::Regex::new(pattern) {
                Ok(re) => re.is_match(raw),
                Err(_) => true,
            },
            None => true,
        }
    }
}

/// A named variant of a select/switch/checkbox option.
///
/// Case names are unique within a definition and declaration order is
/// significant: the collector emits checkbox fragments in this order, not
/// in the order the user clicked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionCase {
    pub name: String,
    /// Override fragment contributed while this case is active.
    #[serde(default)]
    pub pipeline_override: Option<Value>,
    /// Child option keys unlocked while this case is active.
    #[serde(default)]
    pub option: Vec<String>,
}

/// A single entry of the option catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OptionDefinition {
    /// Exactly one case active at a time.
    Select {
        #[serde(default)]
        cases: Vec<OptionCase>,
        #[serde(default)]
        default_case: Option<String>,
    },
    /// A boolean toggle mapped onto a yes/no case pair.
    Switch {
        #[serde(default)]
        cases: Vec<OptionCase>,
        #[serde(default)]
        default_case: Option<String>,
    },
    /// Any subset of cases active at a time.
    Checkbox {
        #[serde(default)]
        cases: Vec<OptionCase>,
    },
    /// Free-text fields substituted into a fragment template.
    Input {
        #[serde(default)]
        fields: Vec<InputField>,
        /// Fragment template; `{field}` placeholders are substituted per
        /// the field's `pipeline_type`.
        pipeline_override: Value,
    },
}

impl OptionDefinition {
    /// The declared cases, in declaration order. Empty for `input`.
    pub fn cases(&self) -> &[OptionCase] {
        match self {
            Self::Select { cases, .. } | Self::Switch { cases, .. } | Self::Checkbox { cases } => {
                cases
            }
            Self::Input { .. } => &[],
        }
    }

    /// Looks up a case by its exact name.
    pub fn find_case(&self, name: &str) -> Option<&OptionCase> {
        self.cases().iter().find(|case| case.name == name)
    }
}

/// A task as declared by the project's interface description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub name: String,
    /// The automation-engine node this task starts from.
    pub entry: String,
    /// Override fragment the task itself contributes, before any options.
    #[serde(default)]
    pub pipeline_override: Option<Value>,
    /// Top-level option keys shown for this task, in display order.
    #[serde(default)]
    pub option: Vec<String>,
}

/// A resource bundle the project declares, with its scope-level options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub name: String,
    #[serde(default)]
    pub option: Vec<String>,
}

/// A controller the project declares, with its scope-level options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerDefinition {
    pub name: String,
    #[serde(default)]
    pub option: Vec<String>,
}

/// The complete, externally loaded project interface description.
///
/// This is the read-only input of every compile call. The compiler never
/// mutates it, so a single instance can back any number of concurrent
/// compiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDefinition {
    #[serde(default)]
    pub option: OptionCatalog,
    #[serde(default)]
    pub task: Vec<TaskDefinition>,
    #[serde(default)]
    pub resource: Vec<ResourceDefinition>,
    #[serde(default)]
    pub controller: Vec<ControllerDefinition>,
    /// Option keys applied to every task, lowest precedence scope.
    #[serde(default)]
    pub global_option: Vec<String>,
}

impl ProjectDefinition {
    pub fn find_task(&self, name: &str) -> Option<&TaskDefinition> {
        self.task.iter().find(|task| task.name == name)
    }

    pub fn find_resource(&self, name: &str) -> Option<&ResourceDefinition> {
        self.resource.iter().find(|resource| resource.name == name)
    }

    pub fn find_controller(&self, name: &str) -> Option<&ControllerDefinition> {
        self.controller.iter().find(|controller| controller.name == name)
    }
}
