//! Hook points and the data passed through them.

use serde::{Deserialize, Serialize};

/// Extension points the host exposes to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// Fired once per chat turn before the system prompt is assembled.
    SystemTransform,
}

impl HookPoint {
    /// Name the host registers this hook under.
    pub fn name(&self) -> &'static str {
        match self {
            HookPoint::SystemTransform => "experimental.chat.system.transform",
        }
    }
}

/// Input to the system prompt transform. Opaque to plugins here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemTransformInput {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Output of the system prompt transform.
///
/// `system` stays `None` until some hook appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemTransformOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<Vec<String>>,
}

impl SystemTransformOutput {
    /// Append a system prompt segment, creating the list on first use.
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.system.get_or_insert_with(Vec::new).push(text.into());
    }
}
