use serde::{Deserialize, Serialize};

use crate::registry::PlaceholderRegistry;

/// UI widget kind an input renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    /// Pick one of the user's linked accounts
    AccountSelect,
    /// Numeric threshold entry
    Number,
    /// Free-form text entry
    Text,
}

/// One form field the end user fills in to instantiate the applet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDescriptor {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
}

/// Guess a placeholder name from a fact path.
///
/// Advisory only; the oracle may always override it. First match wins,
/// case-sensitive substring tests.
#[must_use]
pub fn suggest_name(fact_path: &str) -> &'static str {
    if fact_path.contains("expenses") {
        "accountPath"
    } else if fact_path.contains("customValue") {
        "amount"
    } else {
        "placeholder"
    }
}

/// Derive the form field for one placeholder. Pure in `(name, original_value)`.
#[must_use]
pub fn classify(name: &str, original_value: &str) -> InputDescriptor {
    let lower = name.to_lowercase();
    let (input_type, label) = if lower.starts_with("account") {
        (
            InputType::AccountSelect,
            format!("Select the account (replaces {original_value})"),
        )
    } else if lower.starts_with("amount") {
        (InputType::Number, "Enter the threshold amount".to_string())
    } else {
        (InputType::Text, format!("Replace {original_value} with?"))
    };
    InputDescriptor {
        key: name.to_string(),
        label,
        input_type,
    }
}

/// Classify every registry entry, preserving first-acceptance order.
#[must_use]
pub fn derive_inputs(registry: &PlaceholderRegistry) -> Vec<InputDescriptor> {
    registry
        .iter()
        .map(|(original, name)| classify(name, original))
        .collect()
}
