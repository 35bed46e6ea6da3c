//! Output mode control.
//!
//! [`OutputMode`] decides whether results go through templates (styled or
//! plain) or are serialized directly as structured data.

use serde::{Deserialize, Serialize};

/// How rendered results reach the user. Selected by `--output` or the
/// config file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Styled text on a terminal, plain text otherwise
    #[default]
    Auto,
    /// Styled text
    Term,
    /// Plain text
    Text,
    /// JSON views, no templates
    Json,
    /// YAML views, no templates
    Yaml,
}

impl OutputMode {
    /// JSON and YAML bypass the templates.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml)
    }

    /// Returns true if text output should carry ANSI styling.
    pub fn is_styled(&self) -> bool {
        matches!(self.resolve_auto(), OutputMode::Term)
    }

    /// Picks Term or Text for `Auto` by checking whether stdout is a
    /// terminal. Other modes are returned as is.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().is_term() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }
}
