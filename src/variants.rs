//! Variant axis bookkeeping: combination enumeration, defaults, validation,
//! and deterministic class-name generation.

use crate::schema::{VariantAssignment, VariantAxis};

/// Enumerates the Cartesian product of every axis's value set.
///
/// Each combination is a full assignment covering every axis. Axes are taken
/// in the order given, values in declared order, and combinations are emitted
/// in standard nested-loop order with the first axis varying slowest. For N
/// axes with sizes k1..kN this produces k1 * .. * kN assignments.
pub fn variant_combinations(axes: &[VariantAxis]) -> Vec<VariantAssignment> {
    let mut combinations = vec![VariantAssignment::new()];
    for axis in axes {
        let mut next = Vec::with_capacity(combinations.len() * axis.values.len());
        for combination in &combinations {
            for value in &axis.values {
                let mut extended = combination.clone();
                extended.insert(axis.name.clone(), value.clone());
                next.push(extended);
            }
        }
        combinations = next;
    }
    combinations
}

/// Builds the assignment of declared defaults.
///
/// Axes without a declared default are omitted entirely; a default is never
/// guessed from the value list.
pub fn default_variant_values(axes: &[VariantAxis]) -> VariantAssignment {
    let mut assignment = VariantAssignment::new();
    for axis in axes {
        if let Some(default) = &axis.default {
            assignment.insert(axis.name.clone(), default.clone());
        }
    }
    assignment
}

/// Checks every key in `assignment` that names a declared axis against that
/// axis's value set. Returns one human-readable message per violation; an
/// empty list means the assignment is valid.
///
/// Keys that do not match any declared axis are out of scope here: they are
/// neither validated nor reported.
pub fn validate_variant_values(
    assignment: &VariantAssignment,
    axes: &[VariantAxis],
) -> Vec<String> {
    let mut messages = Vec::new();
    for (axis_name, value) in assignment {
        if let Some(axis) = axes.iter().find(|a| &a.name == axis_name) {
            if !axis.values.contains(value) {
                messages.push(format!(
                    "Invalid value \"{}\" for axis \"{}\". Expected one of: {}",
                    value,
                    axis_name,
                    axis.values.join(", ")
                ));
            }
        }
    }
    messages
}

/// Checks the axis declarations themselves: a declared `default` must be a
/// member of `values`, and axis names must be unique within the component.
/// Same message style as [`validate_variant_values`].
pub fn validate_axes(axes: &[VariantAxis]) -> Vec<String> {
    let mut messages = Vec::new();
    for (i, axis) in axes.iter().enumerate() {
        if let Some(default) = &axis.default {
            if !axis.values.contains(default) {
                messages.push(format!(
                    "Invalid default \"{}\" for axis \"{}\". Expected one of: {}",
                    default,
                    axis.name,
                    axis.values.join(", ")
                ));
            }
        }
        if axes[..i].iter().any(|a| a.name == axis.name) {
            messages.push(format!("Duplicate axis \"{}\"", axis.name));
        }
    }
    messages
}

/// Builds a deterministic class-name string from an assignment.
///
/// Tokens are `<axis>-<value>` (or `<prefix>-<axis>-<value>` when a prefix is
/// given), joined by single spaces, in the assignment's own iteration order.
/// Keys are never sorted; the output is reproducible for a given assignment.
pub fn variants_to_class_name(assignment: &VariantAssignment, prefix: Option<&str>) -> String {
    assignment
        .iter()
        .map(|(axis, value)| match prefix {
            Some(prefix) => format!("{prefix}-{axis}-{value}"),
            None => format!("{axis}-{value}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
