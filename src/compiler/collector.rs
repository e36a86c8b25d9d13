use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;

use super::template;
use crate::catalog::{InputField, OptionCase, OptionCatalog, OptionDefinition};
use crate::values::defaults::{case_means_enabled, default_select_case, default_switch_case};
use crate::values::{FieldValues, OptionValue, ValueStore};

/// Case names a true switch value resolves against, in match order.
const TRUTHY_CASES: [&str; 4] = ["Yes", "yes", "Y", "y"];
/// Case names a false switch value resolves against, in match order.
const FALSY_CASES: [&str; 4] = ["No", "no", "N", "n"];

/// Walks one option key's current value and appends its override
/// fragments, recursing into any child options the active case unlocks.
///
/// The collector only reads the value store; all failure modes degrade to
/// "skip this contribution" rather than erroring.
pub(crate) struct OverrideCollector<'a> {
    catalog: &'a OptionCatalog,
    values: &'a ValueStore,
    /// Keys on the current recursion path. A child list that loops back
    /// onto an ancestor is skipped instead of recursing forever.
    in_progress: HashSet<String>,
}

impl<'a> OverrideCollector<'a> {
    pub(crate) fn new(catalog: &'a OptionCatalog, values: &'a ValueStore) -> Self {
        Self {
            catalog,
            values,
            in_progress: HashSet::new(),
        }
    }

    pub(crate) fn collect(&mut self, key: &str, fragments: &mut Vec<Value>) {
        let Some(definition) = self.definition(key) else {
            debug!("option '{}' not in catalog, skipping", key);
            return;
        };
        if !self.in_progress.insert(key.to_string()) {
            debug!("option '{}' loops back onto itself, skipping repeat visit", key);
            return;
        }

        match definition {
            OptionDefinition::Checkbox { cases } => {
                self.collect_checkbox(key, cases, fragments);
            }
            OptionDefinition::Select {
                cases,
                default_case,
            } => {
                let resolved = match self.values.get(key) {
                    Some(OptionValue::Select { case }) if definition.find_case(case).is_some() => {
                        case.clone()
                    }
                    _ => default_select_case(cases, default_case.as_deref()),
                };
                self.emit_case(definition, &resolved, fragments);
            }
            OptionDefinition::Switch {
                cases,
                default_case,
            } => {
                let enabled = match self.values.get(key) {
                    Some(OptionValue::Switch { enabled }) => *enabled,
                    _ => case_means_enabled(&default_switch_case(cases, default_case.as_deref())),
                };
                let resolved = switch_case_name(cases, enabled);
                self.emit_case(definition, &resolved, fragments);
            }
            OptionDefinition::Input {
                fields,
                pipeline_override,
            } => {
                self.collect_input(key, fields, pipeline_override, fragments);
            }
        }

        self.in_progress.remove(key);
    }

    fn definition(&self, key: &str) -> Option<&'a OptionDefinition> {
        self.catalog.get(key)
    }

    /// Checkbox fragments come out in the catalog's declared case order,
    /// whatever order the user selected them in. Checkbox cases never
    /// expand children.
    fn collect_checkbox(&self, key: &str, cases: &[OptionCase], fragments: &mut Vec<Value>) {
        let selected = match self.values.get(key) {
            Some(OptionValue::Checkbox { selected }) => selected.as_slice(),
            _ => &[],
        };
        for case in cases {
            if selected.contains(&case.name) {
                if let Some(fragment) = &case.pipeline_override {
                    fragments.push(fragment.clone());
                }
            }
        }
    }

    fn collect_input(
        &self,
        key: &str,
        fields: &[InputField],
        template: &Value,
        fragments: &mut Vec<Value>,
    ) {
        let empty = FieldValues::default();
        let stored = match self.values.get(key) {
            Some(OptionValue::Input { fields }) => fields,
            _ => &empty,
        };
        match template::substitute(template, fields, stored) {
            Ok(fragment) => fragments.push(fragment),
            Err(error) => warn!("dropping override fragment for option '{}': {}", key, error),
        }
    }

    fn emit_case(
        &mut self,
        definition: &'a OptionDefinition,
        resolved: &str,
        fragments: &mut Vec<Value>,
    ) {
        let Some(case) = definition.find_case(resolved) else {
            return;
        };
        if let Some(fragment) = &case.pipeline_override {
            fragments.push(fragment.clone());
        }
        for child in &case.option {
            self.collect(child, fragments);
        }
    }
}

/// Maps a switch boolean to the name of the case it activates.
///
/// Searches the declared cases for a known alias of the chosen side and
/// falls back to the literal "Yes"/"No" when none is declared (in which
/// case no fragment is emitted downstream, by construction).
fn switch_case_name(cases: &[OptionCase], enabled: bool) -> String {
    let aliases: &[&str] = if enabled { &TRUTHY_CASES } else { &FALSY_CASES };
    cases
        .iter()
        .map(|case| case.name.as_str())
        .find(|name| aliases.contains(name))
        .unwrap_or(if enabled { "Yes" } else { "No" })
        .to_string()
}
