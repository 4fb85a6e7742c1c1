//! Style resolution: flattens base, variant, compound, and state layers into
//! concrete style mappings for one node or a whole tree.
//!
//! Every function here is pure and total over well-typed inputs. Invalid
//! variant values never raise; they simply contribute no override, since the
//! primary caller is an interactive editing surface where partial authoring
//! states are the common case. Axis-value errors are surfaced exclusively by
//! [`crate::variants::validate_variant_values`].

use crate::schema::{Node, StateStyles, StyleMap, VariantAssignment, VariantAxis};
use indexmap::IndexMap;
use log::{debug, trace};

/// Shallow per-property overwrite: later layer wins, nested structures are
/// replaced wholesale rather than deep-merged.
fn merge_styles(resolved: &mut StyleMap, layer: &StyleMap) {
    for (property, value) in layer {
        resolved.insert(property.clone(), value.clone());
    }
}

fn compound_matches(conditions: &IndexMap<String, String>, assignment: &VariantAssignment) -> bool {
    // A condition on an unset axis can never match; the rule simply does not
    // apply. Unknown axis names are held to the same exact-match test.
    conditions
        .iter()
        .all(|(axis, value)| assignment.get(axis) == Some(value))
}

/// Computes the final flattened style mapping for one node under the given
/// assignment.
///
/// Merge order, later wins per property:
/// 1. the node's base `styles`;
/// 2. per-axis variant styles, iterated in the assignment's own key order, so
///    a later-listed axis wins conflicts between axes;
/// 3. compound rules in declaration order; every condition must match for a
///    rule to apply, and all matching rules apply.
pub fn resolve_node_styles(node: &Node, assignment: &VariantAssignment) -> StyleMap {
    let mut resolved = node.styles.clone();

    for (axis, value) in assignment {
        if let Some(by_value) = node.variant_styles.get(axis) {
            if let Some(layer) = by_value.get(value) {
                merge_styles(&mut resolved, layer);
            }
        }
    }

    for rule in &node.compound_variant_styles {
        if compound_matches(&rule.conditions, assignment) {
            merge_styles(&mut resolved, &rule.styles);
        }
    }

    trace!(
        "resolved {} properties for <{}>",
        resolved.len(),
        node.element_type
    );
    resolved
}

/// Resolves one interaction-state overlay for a node.
///
/// Returns `None` when the node declares no styles for `state` at all; a
/// declared-but-empty state resolves to `Some` of an empty mapping, so
/// callers can distinguish the two. Variant-aware entries merge in the
/// assignment's key order, like the variant layer of [`resolve_node_styles`].
pub fn resolve_state_styles(
    node: &Node,
    state: &str,
    assignment: &VariantAssignment,
) -> Option<StyleMap> {
    match node.state_styles.get(state)? {
        StateStyles::Flat(styles) => Some(styles.clone()),
        StateStyles::PerVariant(by_axis) => {
            let mut resolved = StyleMap::new();
            for (axis, value) in assignment {
                if let Some(by_value) = by_axis.get(axis) {
                    if let Some(layer) = by_value.get(value) {
                        merge_styles(&mut resolved, layer);
                    }
                }
            }
            Some(resolved)
        }
    }
}

/// The base styles of a node together with its resolved state overlays.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResolvedNodeStyles {
    pub base: StyleMap,
    pub states: IndexMap<String, StyleMap>,
}

/// Resolves the base mapping and every declared interaction state for one
/// node. States whose resolution is absent are omitted from the result.
pub fn all_node_styles(node: &Node, assignment: &VariantAssignment) -> ResolvedNodeStyles {
    let mut states = IndexMap::new();
    for state in node.state_styles.keys() {
        if let Some(resolved) = resolve_state_styles(node, state, assignment) {
            states.insert(state.clone(), resolved);
        }
    }
    ResolvedNodeStyles {
        base: resolve_node_styles(node, assignment),
        states,
    }
}

/// The outcome of a tree-wide resolution: per-node styles keyed by identity,
/// plus every diagnostic collected along the walk. Diagnostics never abort
/// the traversal; the styles map is always best-effort complete.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeResolution {
    pub styles: IndexMap<String, StyleMap>,
    pub diagnostics: Vec<String>,
}

/// Walks a node tree and resolves every node independently under one shared
/// assignment, accumulating diagnostics instead of failing.
pub struct Resolver {
    diagnostics: Vec<String>,
    visit_index: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Resolver {
            diagnostics: Vec::new(),
            visit_index: 0,
        }
    }

    /// Appends one message per invalid axis value in `assignment` to the
    /// diagnostic list, without affecting resolution.
    pub fn validate_assignment(&mut self, assignment: &VariantAssignment, axes: &[VariantAxis]) {
        self.diagnostics
            .extend(crate::variants::validate_variant_values(assignment, axes));
    }

    /// Depth-first pre-order resolution of `root` and all descendants: root
    /// first, then each child's subtree in array order.
    ///
    /// Each node's variant response is independent; the same assignment is
    /// applied uniformly at every level and nothing is inherited from
    /// ancestors. Identity is the node's `name` when present, otherwise a
    /// generated `<elementType>-<preorder index>`. Identity collisions are
    /// last-write-wins in the map and reported as a diagnostic.
    pub fn resolve_tree(mut self, root: &Node, assignment: &VariantAssignment) -> TreeResolution {
        let mut styles = IndexMap::new();
        self.visit(root, assignment, &mut styles);
        debug!(
            "resolved {} nodes with {} diagnostics",
            styles.len(),
            self.diagnostics.len()
        );
        TreeResolution {
            styles,
            diagnostics: self.diagnostics,
        }
    }

    fn visit(
        &mut self,
        node: &Node,
        assignment: &VariantAssignment,
        styles: &mut IndexMap<String, StyleMap>,
    ) {
        let identity = self.identity_of(node);
        if styles.contains_key(&identity) {
            self.diagnostics.push(format!(
                "Duplicate node identity \"{identity}\"; styles of an earlier node were overwritten"
            ));
        }
        styles.insert(identity, resolve_node_styles(node, assignment));
        for child in &node.children {
            self.visit(child, assignment, styles);
        }
    }

    // Pre-order position makes generated identities stable across calls on
    // the same tree.
    fn identity_of(&mut self, node: &Node) -> String {
        let index = self.visit_index;
        self.visit_index += 1;
        node.name
            .clone()
            .unwrap_or_else(|| format!("{}-{}", node.element_type, index))
    }
}

/// Convenience wrapper over [`Resolver::resolve_tree`] for callers that only
/// want the identity-to-style mapping.
pub fn resolve_tree_styles(
    root: &Node,
    assignment: &VariantAssignment,
) -> IndexMap<String, StyleMap> {
    Resolver::new().resolve_tree(root, assignment).styles
}

/// Previews each axis/value pair's raw contribution from `variant_styles`
/// alone, keyed `"<axis>-<value>"` for every declared axis and value.
///
/// Base styles and compound rules are deliberately excluded: the result shows
/// each variant's isolated delta, independent of any combination. Values the
/// node declares nothing for map to an empty mapping.
pub fn variant_style_map(node: &Node, axes: &[VariantAxis]) -> IndexMap<String, StyleMap> {
    let mut map = IndexMap::new();
    for axis in axes {
        for value in &axis.values {
            let styles = node
                .variant_styles
                .get(&axis.name)
                .and_then(|by_value| by_value.get(value))
                .cloned()
                .unwrap_or_default();
            map.insert(format!("{}-{}", axis.name, value), styles);
        }
    }
    map
}
