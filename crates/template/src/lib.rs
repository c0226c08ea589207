//! # Applet Template
//!
//! Turn a concrete automation rule (nested JSON) into a reusable,
//! parameterized applet template.
//!
//! ## Pipeline
//!
//! ```text
//! rule document (JSON)
//!     │
//!     ├──> Tree Walker (pre-order DFS)
//!     │      ├─ fact references        ─┐ offered to the
//!     │      └─ params.customValue      ┘ Decision Oracle
//!     │            accepted ─> rewrite to "${name}", record in registry
//!     │
//!     ├──> Placeholder Registry (insertion-ordered value -> name)
//!     │
//!     ├──> Classifier (name heuristic + input-type inference)
//!     │      └─ InputDescriptor { key, label, type }
//!     │
//!     └──> Template Assembler
//!            └─ AppletConfig rendered as a JS object literal
//!               (generateRule spliced in as raw source)
//! ```

mod assemble;
mod classify;
mod document;
mod error;
mod oracle;
mod registry;
mod walker;

pub use assemble::{assemble, render_snippet, AppletConfig, AppletMeta, DEFAULT_ICON, GENERATE_RULE};
pub use classify::{classify, derive_inputs, suggest_name, InputDescriptor, InputType};
pub use document::extract_rule;
pub use error::{Result, TemplateError};
pub use oracle::{DecisionOracle, ScriptedOracle, TerminalOracle};
pub use registry::{scalar_key, PlaceholderRegistry};
pub use walker::{placeholder_token, walk};
