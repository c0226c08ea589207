use serde_json::Value;

use crate::error::{Result, TemplateError};

/// Parse a rule document and pull out its required top-level `rule` object.
///
/// Every other top-level key (ids, activity flags, scheduling metadata) is
/// read but ignored.
pub fn extract_rule(raw: &str) -> Result<Value> {
    let mut document: Value = serde_json::from_str(raw)?;
    match document
        .as_object_mut()
        .and_then(|top| top.remove("rule"))
    {
        Some(rule) => Ok(rule),
        None => Err(TemplateError::MissingRuleKey),
    }
}
