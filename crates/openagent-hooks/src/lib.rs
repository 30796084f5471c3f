//! openagent-hooks: Host extension points for prompt enrichment.
//!
//! The host fires [`HookPoint::SystemTransform`] once per chat turn with a
//! fresh [`SystemTransformOutput`]; registered handlers append segments to
//! its `system` list.

pub mod events;
pub mod registry;

pub use events::{HookPoint, SystemTransformInput, SystemTransformOutput};
pub use registry::{HookRegistry, SystemTransformHook};
