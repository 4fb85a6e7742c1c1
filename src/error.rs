use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CoralError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),
}

/// Errors at the document boundary. Resolution itself never fails; anything
/// past deserialization is reported as diagnostics, not errors.
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DocumentError {
    #[error("Invalid Coral document")]
    #[diagnostic(
        code(document::invalid_json),
        help("The source must be a JSON object matching the Coral component schema.")
    )]
    InvalidJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("Unsupported schema identifier \"{found}\"")]
    #[diagnostic(
        code(document::unsupported_schema),
        help("This build of coral-core understands \"{supported}\".")
    )]
    UnsupportedSchema { found: String, supported: String },
}
