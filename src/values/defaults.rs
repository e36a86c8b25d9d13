//! Default value initialization.
//!
//! Seeds a value store for a set of option keys, expanding any nested
//! options reachable through default selections so the UI can render the
//! whole visible tree immediately.

use super::{FieldValues, OptionValue, ValueStore};
use crate::catalog::{OptionCase, OptionCatalog, OptionDefinition};

/// Synthesizes default values for every unresolved key, in order.
///
/// Idempotent and safe to call with keys that are already partially
/// resolved: existing entries are never overwritten. A key is inserted
/// *before* its children are expanded, which guarantees termination even
/// when the catalog data describes a cycle.
///
/// Unknown keys produce no entry.
pub fn initialize(keys: &[String], catalog: &OptionCatalog, values: &mut ValueStore) {
    for key in keys {
        let Some(definition) = catalog.get(key) else {
            continue;
        };
        if values.contains_key(key) {
            continue;
        }

        match definition {
            OptionDefinition::Input { fields, .. } => {
                let defaults: FieldValues = fields
                    .iter()
                    .map(|field| (field.name.clone(), field.default.clone().unwrap_or_default()))
                    .collect();
                values.insert(key.clone(), OptionValue::Input { fields: defaults });
            }
            OptionDefinition::Switch {
                cases,
                default_case,
            } => {
                let resolved = default_switch_case(cases, default_case.as_deref());
                let enabled = case_means_enabled(&resolved);
                values.insert(key.clone(), OptionValue::Switch { enabled });
                expand_children(definition, &resolved, catalog, values);
            }
            OptionDefinition::Select {
                cases,
                default_case,
            } => {
                let resolved = default_select_case(cases, default_case.as_deref());
                values.insert(
                    key.clone(),
                    OptionValue::Select {
                        case: resolved.clone(),
                    },
                );
                expand_children(definition, &resolved, catalog, values);
            }
            OptionDefinition::Checkbox { .. } => {
                values.insert(
                    key.clone(),
                    OptionValue::Checkbox {
                        selected: Vec::new(),
                    },
                );
            }
        }
    }
}

fn expand_children(
    definition: &OptionDefinition,
    resolved: &str,
    catalog: &OptionCatalog,
    values: &mut ValueStore,
) {
    if let Some(case) = definition.find_case(resolved) {
        if !case.option.is_empty() {
            initialize(&case.option, catalog, values);
        }
    }
}

/// The case a fresh select resolves to: the declared default, else the
/// first case, else the empty string.
pub(crate) fn default_select_case(cases: &[OptionCase], default_case: Option<&str>) -> String {
    default_case
        .map(str::to_string)
        .or_else(|| cases.first().map(|case| case.name.clone()))
        .unwrap_or_default()
}

/// The case a fresh switch resolves to: the declared default, else the
/// *second* case (the convention is a [on, off] pair with off as the safe
/// default), else the literal "No".
pub(crate) fn default_switch_case(cases: &[OptionCase], default_case: Option<&str>) -> String {
    default_case
        .map(str::to_string)
        .or_else(|| cases.get(1).map(|case| case.name.clone()))
        .unwrap_or_else(|| "No".to_string())
}

/// Whether a switch case name counts as the enabled side.
pub(crate) fn case_means_enabled(name: &str) -> bool {
    name.eq_ignore_ascii_case("yes") || name.eq_ignore_ascii_case("y")
}
