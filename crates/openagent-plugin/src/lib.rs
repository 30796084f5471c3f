//! openagent-plugin — OpenAgent custom skills for the chat system prompt.
//!
//! Registers a handler for `experimental.chat.system.transform` that reads
//! the installed OpenAgent skills from the config directory and appends them,
//! wrapped in marker tags, to the host's system prompt list.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use openagent_hooks::{HookRegistry, SystemTransformInput, SystemTransformOutput};
//! use openagent_plugin::OpenAgentPlugin;
//!
//! let registry = HookRegistry::new();
//! OpenAgentPlugin::new().register(&registry).await;
//!
//! let mut output = SystemTransformOutput::default();
//! registry
//!     .run_system_transform(&SystemTransformInput::default(), &mut output)
//!     .await?;
//! ```

mod error;
mod plugin;

pub use error::PluginError;
pub use plugin::OpenAgentPlugin;
