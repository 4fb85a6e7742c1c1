use crate::error::{CoralError, DocumentError};
use crate::resolver::{Resolver, TreeResolution};
use crate::schema::{ComponentSpec, StyleMap, VariantAssignment};
use crate::serialization::{style_map_to_value, Value};
use crate::utils::offset_for;
use crate::variants::{default_variant_values, validate_axes};
use indexmap::IndexMap;
use log::debug;
use miette::NamedSource;
use serde::{Serialize, Serializer};

/// The schema identifier this build understands.
pub const SUPPORTED_SCHEMA: &str = "coral/v1";

/// The result of a successful analysis of a Coral component document.
/// Contains the typed specification, the tree resolved under the declared
/// defaults, and every diagnostic collected along the way. Further
/// resolutions under other assignments go through [`AnalysisResult::resolve`].
pub struct AnalysisResult {
    pub spec: ComponentSpec,
    pub default_assignment: VariantAssignment,
    pub styles: IndexMap<String, StyleMap>,
    pub diagnostics: Vec<String>,
}

impl Serialize for AnalysisResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.to_value();
        value.serialize(serializer)
    }
}

impl AnalysisResult {
    /// Re-resolves the component tree under an explicit assignment,
    /// validating it against the declared axes as part of the walk.
    #[must_use]
    pub fn resolve(&self, assignment: &VariantAssignment) -> TreeResolution {
        let mut resolver = Resolver::new();
        resolver.validate_assignment(assignment, &self.spec.variants);
        resolver.resolve_tree(&self.spec.root, assignment)
    }

    /// Serializes the default-assignment resolution into a generic,
    /// serializable `Value`: node identity -> flat style mapping.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = IndexMap::new();
        for (identity, styles) in &self.styles {
            object.insert(identity.clone(), style_map_to_value(styles));
        }
        Value::Object(object)
    }

    /// Serializes the default-assignment resolution into a pretty-printed
    /// JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the default-assignment resolution into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }
}

/// Analyzes a Coral component document: deserializes it, checks the schema
/// identifier and axis declarations, and resolves the whole tree under the
/// declared default variant values.
///
/// This is the primary entry point for processing Coral documents. Axis and
/// identity problems found past the document boundary are accumulated into
/// `AnalysisResult::diagnostics` rather than returned as errors, so an
/// interactive caller always gets a best-effort resolution.
///
/// # Arguments
///
/// * `source` - The component document as a JSON string.
/// * `document_name` - The document's name (used for error reporting).
///
/// # Errors
///
/// Returns a `CoralError` if the source is not valid JSON for the component
/// schema, or if the document declares an unsupported schema identifier.
pub fn analyze(source: &str, document_name: &str) -> Result<AnalysisResult, CoralError> {
    let spec: ComponentSpec = serde_json::from_str(source).map_err(|err| {
        let offset = offset_for(source, err.line(), err.column());
        DocumentError::InvalidJson {
            src: NamedSource::new(document_name, source.to_string()),
            span: (offset, 0).into(),
            message: err.to_string(),
        }
    })?;

    if spec.schema != SUPPORTED_SCHEMA {
        return Err(DocumentError::UnsupportedSchema {
            found: spec.schema,
            supported: SUPPORTED_SCHEMA.to_string(),
        }
        .into());
    }

    let default_assignment = default_variant_values(&spec.variants);
    debug!(
        "analyzing component \"{}\": {} axes, {} nodes",
        spec.name,
        spec.variants.len(),
        spec.root.node_count()
    );

    let mut resolver = Resolver::new();
    resolver.validate_assignment(&default_assignment, &spec.variants);
    let resolution = resolver.resolve_tree(&spec.root, &default_assignment);

    let mut diagnostics = validate_axes(&spec.variants);
    diagnostics.extend(resolution.diagnostics);

    Ok(AnalysisResult {
        spec,
        default_assignment,
        styles: resolution.styles,
        diagnostics,
    })
}
