use crate::resolver::ResolvedNodeStyles;
use crate::schema::{StyleMap, StyleValue};
use indexmap::IndexMap;
use serde::Serialize;

/// A generic, serializable value handed to code generators. Object keys keep
/// their authored order and casing; dimension and color structures stay as
/// primitive-ish shapes rather than being flattened to strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

pub fn to_value(style_value: &StyleValue) -> Value {
    match style_value {
        StyleValue::String(s) => Value::String(s.clone()),
        StyleValue::Number(n) => Value::Number(*n),
        StyleValue::Dimension(dimension) => {
            let mut object = IndexMap::new();
            object.insert("value".to_string(), Value::Number(dimension.value));
            object.insert("unit".to_string(), Value::String(dimension.unit.clone()));
            Value::Object(object)
        }
        StyleValue::Color(color) => {
            let mut object = IndexMap::new();
            object.insert("hex".to_string(), Value::String(color.hex.clone()));
            if let Some(rgb) = &color.rgb {
                object.insert("rgb".to_string(), Value::String(rgb.clone()));
            }
            if let Some(hsl) = &color.hsl {
                object.insert("hsl".to_string(), Value::String(hsl.clone()));
            }
            Value::Object(object)
        }
    }
}

pub fn style_map_to_value(styles: &StyleMap) -> Value {
    let mut object = IndexMap::new();
    for (property, value) in styles {
        object.insert(property.clone(), to_value(value));
    }
    Value::Object(object)
}

pub fn node_styles_to_value(resolved: &ResolvedNodeStyles) -> Value {
    let mut object = IndexMap::new();
    object.insert("base".to_string(), style_map_to_value(&resolved.base));
    for (state, styles) in &resolved.states {
        object.insert(state.clone(), style_map_to_value(styles));
    }
    Value::Object(object)
}
