use coral_core::resolver::{all_node_styles, resolve_node_styles, resolve_state_styles};
use coral_core::schema::{Node, StyleValue, VariantAssignment};
use coral_core::serialization::node_styles_to_value;

fn node(value: serde_json::Value) -> Node {
    match serde_json::from_value(value) {
        Ok(node) => node,
        Err(err) => panic!("Fixture did not deserialize as a Node: {err}"),
    }
}

fn assignment(pairs: &[(&str, &str)]) -> VariantAssignment {
    pairs
        .iter()
        .map(|(axis, value)| (axis.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_empty_assignment_yields_base_styles() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "styles": { "display": "inline-flex", "cursor": "pointer" },
        "variantStyles": {
            "intent": { "primary": { "backgroundColor": "#007bff" } }
        }
    }));

    let resolved = resolve_node_styles(&button, &VariantAssignment::new());
    assert_eq!(resolved, button.styles);
}

#[test]
fn test_empty_node_resolves_to_empty_map() {
    let bare = node(serde_json::json!({ "elementType": "div" }));
    let resolved = resolve_node_styles(&bare, &assignment(&[("intent", "primary")]));
    assert!(resolved.is_empty());
}

#[test]
fn test_base_plus_two_axes() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "styles": { "display": "inline-flex" },
        "variantStyles": {
            "intent": { "primary": { "backgroundColor": "#007bff" } },
            "size": { "lg": { "padding": "12px 24px" } }
        }
    }));

    let resolved =
        resolve_node_styles(&button, &assignment(&[("intent", "primary"), ("size", "lg")]));

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved["display"], StyleValue::String("inline-flex".into()));
    assert_eq!(resolved["backgroundColor"], StyleValue::String("#007bff".into()));
    assert_eq!(resolved["padding"], StyleValue::String("12px 24px".into()));
}

#[test]
fn test_axis_conflicts_resolved_by_assignment_key_order() {
    // Both axes set the same property; the axis listed later in the
    // assignment wins, and reversing the assignment flips the winner.
    let chip = node(serde_json::json!({
        "elementType": "span",
        "variantStyles": {
            "intent": { "primary": { "color": "#fff" } },
            "tone": { "muted": { "color": "#888" } }
        }
    }));

    let resolved =
        resolve_node_styles(&chip, &assignment(&[("intent", "primary"), ("tone", "muted")]));
    assert_eq!(resolved["color"], StyleValue::String("#888".into()));

    let resolved =
        resolve_node_styles(&chip, &assignment(&[("tone", "muted"), ("intent", "primary")]));
    assert_eq!(resolved["color"], StyleValue::String("#fff".into()));
}

#[test]
fn test_compound_requires_every_condition() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "compoundVariantStyles": [
            {
                "conditions": { "intent": "destructive", "size": "sm" },
                "styles": { "fontWeight": "700" }
            }
        ]
    }));

    let resolved = resolve_node_styles(
        &button,
        &assignment(&[("intent", "destructive"), ("size", "sm")]),
    );
    assert_eq!(resolved["fontWeight"], StyleValue::String("700".into()));

    // Changing any one condition value removes the compound's contribution.
    let resolved = resolve_node_styles(
        &button,
        &assignment(&[("intent", "destructive"), ("size", "md")]),
    );
    assert!(!resolved.contains_key("fontWeight"));
}

#[test]
fn test_compound_on_unset_axis_never_matches() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "compoundVariantStyles": [
            { "conditions": { "size": "sm" }, "styles": { "padding": "2px" } }
        ]
    }));

    let resolved = resolve_node_styles(&button, &assignment(&[("intent", "primary")]));
    assert!(!resolved.contains_key("padding"));
}

#[test]
fn test_empty_conditions_compound_always_applies() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "compoundVariantStyles": [
            { "styles": { "boxSizing": "border-box" } }
        ]
    }));

    let resolved = resolve_node_styles(&button, &VariantAssignment::new());
    assert_eq!(resolved["boxSizing"], StyleValue::String("border-box".into()));
}

#[test]
fn test_later_compound_overrides_earlier_and_axis_styles() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "variantStyles": {
            "intent": { "primary": { "backgroundColor": "#007bff", "color": "#fff" } }
        },
        "compoundVariantStyles": [
            {
                "conditions": { "intent": "primary" },
                "styles": { "backgroundColor": "#0056b3" }
            },
            {
                "conditions": { "intent": "primary" },
                "styles": { "backgroundColor": "#003d80" }
            }
        ]
    }));

    let resolved = resolve_node_styles(&button, &assignment(&[("intent", "primary")]));

    // Compounds apply after axis styles; the later-declared rule wins.
    assert_eq!(resolved["backgroundColor"], StyleValue::String("#003d80".into()));
    assert_eq!(resolved["color"], StyleValue::String("#fff".into()));
}

#[test]
fn test_unknown_axis_in_assignment_is_a_noop() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "styles": { "display": "block" },
        "variantStyles": {
            "intent": { "primary": { "backgroundColor": "#007bff" } }
        }
    }));

    let resolved = resolve_node_styles(&button, &assignment(&[("density", "compact")]));
    assert_eq!(resolved, button.styles);
}

#[test]
fn test_typed_values_pass_through_unmodified() {
    let card = node(serde_json::json!({
        "elementType": "div",
        "styles": {
            "padding": { "value": 12.0, "unit": "px" },
            "borderColor": { "hex": "#dee2e6", "rgb": "rgb(222, 226, 230)" }
        }
    }));

    let resolved = resolve_node_styles(&card, &VariantAssignment::new());

    match &resolved["padding"] {
        StyleValue::Dimension(dimension) => {
            assert_eq!(dimension.value, 12.0);
            assert_eq!(dimension.unit, "px");
        }
        other => panic!("Expected a dimension, got {other:?}"),
    }
    match &resolved["borderColor"] {
        StyleValue::Color(color) => {
            assert_eq!(color.hex, "#dee2e6");
            assert_eq!(color.rgb.as_deref(), Some("rgb(222, 226, 230)"));
            assert_eq!(color.hsl, None);
        }
        other => panic!("Expected a color, got {other:?}"),
    }
}

#[test]
fn test_state_styles_absent_is_none() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "stateStyles": { "hover": { "backgroundColor": "#0056b3" } }
    }));

    assert!(resolve_state_styles(&button, "focus", &VariantAssignment::new()).is_none());
}

#[test]
fn test_state_styles_flat_returned_as_is() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "stateStyles": { "hover": { "backgroundColor": "#0056b3" } }
    }));

    let hover = resolve_state_styles(&button, "hover", &assignment(&[("intent", "primary")]))
        .expect("hover is declared");
    assert_eq!(hover.len(), 1);
    assert_eq!(hover["backgroundColor"], StyleValue::String("#0056b3".into()));
}

#[test]
fn test_state_styles_declared_but_empty_is_some_empty() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "stateStyles": { "disabled": {} }
    }));

    let disabled = resolve_state_styles(&button, "disabled", &VariantAssignment::new())
        .expect("disabled is declared");
    assert!(disabled.is_empty());
}

#[test]
fn test_state_styles_variant_aware() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "stateStyles": {
            "hover": {
                "intent": {
                    "primary": { "backgroundColor": "#0056b3" },
                    "secondary": { "backgroundColor": "#545b62" }
                }
            }
        }
    }));

    let hover = resolve_state_styles(&button, "hover", &assignment(&[("intent", "secondary")]))
        .expect("hover is declared");
    assert_eq!(hover["backgroundColor"], StyleValue::String("#545b62".into()));

    // An assignment that never sets the axis resolves to an empty overlay,
    // not an absent one.
    let hover = resolve_state_styles(&button, "hover", &assignment(&[("size", "lg")]))
        .expect("hover is declared");
    assert!(hover.is_empty());
}

#[test]
fn test_all_node_styles_collects_declared_states() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "styles": { "display": "inline-flex" },
        "variantStyles": {
            "intent": { "primary": { "backgroundColor": "#007bff" } }
        },
        "stateStyles": {
            "hover": { "backgroundColor": "#0056b3" },
            "disabled": { "opacity": 0.65 }
        }
    }));

    let resolved = all_node_styles(&button, &assignment(&[("intent", "primary")]));

    assert_eq!(resolved.base["display"], StyleValue::String("inline-flex".into()));
    assert_eq!(resolved.base["backgroundColor"], StyleValue::String("#007bff".into()));
    assert_eq!(resolved.states.len(), 2);
    assert_eq!(
        resolved.states["hover"]["backgroundColor"],
        StyleValue::String("#0056b3".into())
    );
    assert_eq!(resolved.states["disabled"]["opacity"], StyleValue::Number(0.65));
}

#[test]
fn test_all_node_styles_serializes_for_generators() {
    let button = node(serde_json::json!({
        "elementType": "button",
        "styles": {
            "display": "inline-flex",
            "padding": { "value": 8.0, "unit": "px" }
        },
        "stateStyles": {
            "hover": { "backgroundColor": { "hex": "#0056b3" } }
        }
    }));

    let resolved = all_node_styles(&button, &VariantAssignment::new());
    let value = serde_json::to_value(node_styles_to_value(&resolved)).unwrap();

    // Generators receive base plus one entry per state, with typed values
    // kept as primitive-ish structures.
    assert_eq!(value["base"]["display"], "inline-flex");
    assert_eq!(value["base"]["padding"]["value"], 8.0);
    assert_eq!(value["base"]["padding"]["unit"], "px");
    assert_eq!(value["hover"]["backgroundColor"]["hex"], "#0056b3");
}
