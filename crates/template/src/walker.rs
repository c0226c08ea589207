use serde_json::Value;

use crate::classify::suggest_name;
use crate::error::Result;
use crate::oracle::DecisionOracle;
use crate::registry::{scalar_key, PlaceholderRegistry};

/// Render a placeholder name as the token substituted into the tree.
#[must_use]
pub fn placeholder_token(name: &str) -> String {
    format!("${{{name}}}")
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

/// Walk a rule tree depth-first, pre-order, offering every fact reference and
/// every `params.customValue` to the oracle for placeholder substitution.
///
/// Accepted candidates are rewritten in place to `${name}` and recorded in
/// `registry`; everything else is left untouched. Both candidate shapes are
/// checked on the same object before its children are visited, so traversal
/// order is deterministic for a fixed tree and answer sequence.
pub fn walk(
    node: &mut Value,
    registry: &mut PlaceholderRegistry,
    oracle: &mut dyn DecisionOracle,
) -> Result<()> {
    match node {
        Value::Object(map) => {
            let fact_literal = map.get("fact").filter(|v| is_scalar(v)).map(scalar_key);
            if let Some(original) = fact_literal {
                let prompt = format!(
                    "Found a fact: {original}\nShould this be replaced by a placeholder?"
                );
                if oracle.confirm(&prompt)? {
                    let suggested = suggest_name(&original);
                    let name = oracle.ask_text(
                        &format!("Enter placeholder name to use (default: {suggested})"),
                        suggested,
                    )?;
                    log::debug!("replacing fact {original:?} with {name:?}");
                    map.insert("fact".to_string(), Value::String(placeholder_token(&name)));
                    registry.record(original, name);
                }
            }

            // Independent of the fact check; both may fire on one node.
            let custom_literal = map
                .get("params")
                .and_then(Value::as_object)
                .and_then(|params| params.get("customValue"))
                .map(scalar_key);
            if let Some(original) = custom_literal {
                let prompt = format!(
                    "Found a customValue: {original}\nShould this customValue be replaced by a placeholder?"
                );
                if oracle.confirm(&prompt)? {
                    let name =
                        oracle.ask_text("Enter placeholder name for customValue (e.g. 'amount')", "")?;
                    log::debug!("replacing customValue {original:?} with {name:?}");
                    if let Some(params) = map.get_mut("params").and_then(Value::as_object_mut) {
                        params.insert(
                            "customValue".to_string(),
                            Value::String(placeholder_token(&name)),
                        );
                    }
                    registry.record(original, name);
                }
            }

            for (_, child) in map.iter_mut() {
                walk(child, registry, oracle)?;
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                walk(item, registry, oracle)?;
            }
        }
        // Scalars reached outside the two candidate shapes are never prompted.
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ScriptedOracle;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn walk_scripted(tree: &mut Value, answers: &[&str]) -> PlaceholderRegistry {
        let mut registry = PlaceholderRegistry::new();
        let mut oracle = ScriptedOracle::new(answers.iter().copied());
        walk(tree, &mut registry, &mut oracle).unwrap();
        registry
    }

    #[test]
    fn test_fact_accepted_with_default_name() {
        let mut tree = json!({
            "fact": "bank_of_america/plaid_checking_0000/expenses/since_1_week"
        });
        let registry = walk_scripted(&mut tree, &["y", ""]);
        assert_eq!(tree, json!({ "fact": "${accountPath}" }));
        let entries: Vec<_> = registry.iter().collect();
        assert_eq!(
            entries,
            [(
                "bank_of_america/plaid_checking_0000/expenses/since_1_week",
                "accountPath"
            )]
        );
    }

    #[test]
    fn test_fact_rejected_leaves_tree_untouched() {
        let mut tree = json!({ "fact": "income/total/since_1_week" });
        let before = tree.clone();
        let registry = walk_scripted(&mut tree, &["n"]);
        assert_eq!(tree, before);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_fact_name_override() {
        let mut tree = json!({ "fact": "a/expenses/b" });
        let registry = walk_scripted(&mut tree, &["yes", "spendingAccount"]);
        assert_eq!(tree, json!({ "fact": "${spendingAccount}" }));
        assert_eq!(registry.iter().next(), Some(("a/expenses/b", "spendingAccount")));
    }

    #[test]
    fn test_custom_value_accepted() {
        let mut tree = json!({ "rule": { "params": { "customValue": 50 } } });
        let registry = walk_scripted(&mut tree, &["y", "amount"]);
        assert_eq!(
            tree,
            json!({ "rule": { "params": { "customValue": "${amount}" } } })
        );
        assert_eq!(registry.iter().next(), Some(("50", "amount")));
    }

    #[test]
    fn test_both_shapes_fire_on_one_node() {
        let mut tree = json!({
            "fact": "a/expenses/b",
            "operator": "greaterThan",
            "params": { "customValue": 50, "currency": "USD" }
        });
        let registry = walk_scripted(&mut tree, &["y", "", "y", "amount"]);
        assert_eq!(
            tree,
            json!({
                "fact": "${accountPath}",
                "operator": "greaterThan",
                "params": { "customValue": "${amount}", "currency": "USD" }
            })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_nested_conditions_each_prompted_independently() {
        let mut tree = json!({
            "conditions": {
                "all": [
                    { "fact": "a/expenses/one" },
                    { "fact": "b/expenses/two" },
                    { "fact": "c/expenses/three" }
                ]
            }
        });
        // accept, reject, accept with override
        let registry = walk_scripted(&mut tree, &["y", "", "n", "y", "thirdPath"]);
        assert_eq!(
            tree,
            json!({
                "conditions": {
                    "all": [
                        { "fact": "${accountPath}" },
                        { "fact": "b/expenses/two" },
                        { "fact": "${thirdPath}" }
                    ]
                }
            })
        );
        let entries: Vec<_> = registry.iter().collect();
        assert_eq!(
            entries,
            [("a/expenses/one", "accountPath"), ("c/expenses/three", "thirdPath")]
        );
    }

    #[test]
    fn test_fact_with_object_value_is_not_a_candidate() {
        // `value: { fact: 'custom_value' }` style nodes still get visited,
        // but an object-valued `fact` at the outer level never prompts.
        let mut tree = json!({ "fact": { "nested": true } });
        let before = tree.clone();
        let registry = walk_scripted(&mut tree, &[]);
        assert_eq!(tree, before);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_shape_free_tree_is_idempotent() {
        let mut tree = json!({
            "name": "My rule",
            "schedule": { "frequency": "ontruth", "events": [1, 2, 3] }
        });
        let before = tree.clone();
        let registry = walk_scripted(&mut tree, &[]);
        assert_eq!(tree, before);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unrecognized_answers_retry() {
        let mut tree = json!({ "fact": "a/expenses/b" });
        let registry = walk_scripted(&mut tree, &["maybe", "ok", "y", ""]);
        assert_eq!(tree, json!({ "fact": "${accountPath}" }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_placeholder_token_syntax() {
        assert_eq!(placeholder_token("amount"), "${amount}");
    }
}
