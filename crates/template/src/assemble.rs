use serde::Serialize;
use serde_json::Value;

use crate::classify::InputDescriptor;
use crate::error::Result;

/// Icon used when the caller supplies an empty one
pub const DEFAULT_ICON: &str = "🎉";

/// Fixed regeneration stub attached to every emitted applet. Not synthesized
/// from the data; the host document's `processAppletConfig` does the actual
/// placeholder replacement later.
pub const GENERATE_RULE: &str = "function (formValues) {\n  // Example of naive placeholders replacement\n  return processAppletConfig(this.ruleConfig, formValues);\n}";

/// Applet identity supplied by the template author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppletMeta {
    pub id: String,
    pub title: String,
    pub icon: String,
}

impl AppletMeta {
    /// An empty icon falls back to [`DEFAULT_ICON`].
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        let icon = icon.into();
        Self {
            id: id.into(),
            title: title.into(),
            icon: if icon.trim().is_empty() {
                DEFAULT_ICON.to_string()
            } else {
                icon
            },
        }
    }
}

/// The terminal artifact: parameterized rule plus its form schema.
/// Write-once; never mutated after assembly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppletConfig {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub rule_config: Value,
    pub inputs: Vec<InputDescriptor>,
    /// Raw JavaScript source; spliced unquoted into the rendered snippet.
    #[serde(skip)]
    pub generate_rule: &'static str,
}

/// Combine applet metadata, the mutated rule tree and the derived form fields.
#[must_use]
pub fn assemble(meta: AppletMeta, rule: Value, inputs: Vec<InputDescriptor>) -> AppletConfig {
    AppletConfig {
        id: meta.id,
        icon: meta.icon,
        title: meta.title,
        rule_config: rule,
        inputs,
        generate_rule: GENERATE_RULE,
    }
}

/// Render the applet config as a JavaScript object literal for manual
/// insertion into the host `appletConfigs` document.
///
/// The JSON-representable fields are pretty-printed with serde; `generateRule`
/// is then emitted as raw source text while building the literal, so the stub
/// never round-trips through string escaping.
pub fn render_snippet(config: &AppletConfig) -> Result<String> {
    let body = serde_json::to_string_pretty(config)?;
    let fields = body
        .trim_end()
        .strip_suffix('}')
        .unwrap_or(&body)
        .trim_end()
        .to_string();

    let mut out = fields;
    out.push_str(",\n  \"generateRule\": ");
    for (i, line) in config.generate_rule.lines().enumerate() {
        if i > 0 {
            out.push_str("\n  ");
        }
        out.push_str(line);
    }
    out.push_str("\n}");
    Ok(out)
}
