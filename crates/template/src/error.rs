use thiserror::Error;

/// Result type for templating operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while turning a rule into an applet template
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Failed to read the rule document
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Rule document is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The document has no top-level `rule` object
    #[error("Document has no top-level \"rule\" key")]
    MissingRuleKey,

    /// A scripted oracle ran out of canned answers
    #[error("Scripted oracle exhausted after {0} answers")]
    ScriptExhausted(usize),
}
