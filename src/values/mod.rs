use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub mod defaults;

/// Raw text per input field name, keyed by the field's declared name.
pub type FieldValues = AHashMap<String, String>;

/// The user-selected value of a single option.
///
/// The variant must mirror the tag of the option's definition; whenever it
/// does not (or no value is stored at all), consumers synthesize a default
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OptionValue {
    Select {
        case: String,
    },
    Switch {
        enabled: bool,
    },
    Checkbox {
        /// Selected case names, in click order. Emission order is decided
        /// by the catalog's declaration order, not by this list.
        selected: Vec<String>,
    },
    Input {
        /// Raw text per field name; coercion happens at compile time.
        fields: FieldValues,
    },
}

/// Sparse option key -> value map.
///
/// A missing key means "use the definition's default". The map grows
/// monotonically as cases are explored; it is owned and mutated by the UI
/// layer, the compiler only reads it.
pub type ValueStore = AHashMap<String, OptionValue>;

/// A task instantiation: which task to run, and the option values chosen
/// for it so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedTask {
    pub name: String,
    #[serde(default)]
    pub values: ValueStore,
}

impl SelectedTask {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: ValueStore::default(),
        }
    }
}
