use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A flat style mapping: property name (camelCase, as authored) to value.
/// Insertion order is preserved and is part of the resolution contract.
pub type StyleMap = IndexMap<String, StyleValue>;

/// Axis name -> axis value -> partial style mapping.
pub type VariantStyles = IndexMap<String, IndexMap<String, StyleMap>>;

/// A concrete selection of values for (some of) a component's variant axes.
/// Iteration order is the author's key order and drives merge ordering.
pub type VariantAssignment = IndexMap<String, String>;

/// A single style value. Typed structures (dimensions, colors) pass through
/// resolution unmodified; the resolver never coerces them to strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    String(String),
    Dimension(Dimension),
    Color(ColorValue),
}

/// A dimension with an explicit unit, e.g. `{ "value": 12, "unit": "px" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub unit: String,
}

/// A color in one or more notations. `hex` is always present; `rgb`/`hsl`
/// are optional alternate renderings supplied by the authoring tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl: Option<String>,
}

/// A named dimension of visual variation (e.g. `intent`, `size`) with an
/// enumerated value set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAxis {
    pub name: String,
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A style override keyed on a conjunction of axis values: every listed
/// condition must equal the active assignment's value for the rule to apply.
///
/// Both fields default to empty so a shape-degenerate entry in an otherwise
/// valid document becomes a no-op rule instead of a document-level failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    #[serde(default)]
    pub conditions: IndexMap<String, String>,
    #[serde(default)]
    pub styles: StyleMap,
}

/// A style overlay for one interaction state (hover, focus, active, ...).
///
/// The flat/variant-aware distinction is decided once, at parse time, by the
/// shape of the JSON: a two-level nesting of objects is variant-aware,
/// anything else is a flat style mapping. The resolver never re-inspects the
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateStyles {
    /// Axis name -> axis value -> partial style mapping, allowing different
    /// interaction styles per active variant.
    PerVariant(IndexMap<String, IndexMap<String, StyleMap>>),
    /// A single partial style mapping applied whenever the state is active.
    Flat(StyleMap),
}

/// One element in a component's node tree.
///
/// Every style-bearing field is optional in the wire format; an absent field
/// behaves exactly like an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Tag or semantic kind, e.g. "button", "span".
    pub element_type: String,
    /// Author-supplied identity. Used as the key in tree-wide style maps;
    /// unnamed nodes receive a generated positional identity instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub styles: StyleMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variant_styles: VariantStyles,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compound_variant_styles: Vec<CompoundVariant>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub state_styles: IndexMap<String, StateStyles>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Counts this node plus all descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

/// A complete Coral component document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Published schema identifier, e.g. "coral/v1".
    pub schema: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantAxis>,
    pub root: Node,
}
