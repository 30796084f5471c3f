//! Hook registry — holds system prompt transform handlers and runs them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::events::{HookPoint, SystemTransformInput, SystemTransformOutput};

/// A handler for [`HookPoint::SystemTransform`].
#[async_trait]
pub trait SystemTransformHook: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Append to `output.system`. Existing entries belong to the host and
    /// other plugins and are left alone.
    async fn transform(
        &self,
        input: &SystemTransformInput,
        output: &mut SystemTransformOutput,
    ) -> anyhow::Result<()>;
}

/// Manages hook subscriptions and dispatches events.
pub struct HookRegistry {
    handlers: RwLock<HashMap<HookPoint, Vec<Arc<dyn SystemTransformHook>>>>,
}

impl HookRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a handler for a hook point.
    pub async fn on(&self, point: HookPoint, handler: Arc<dyn SystemTransformHook>) {
        let mut handlers = self.handlers.write().await;
        handlers.entry(point).or_default().push(handler);
    }

    /// Number of handlers registered for a hook point.
    pub async fn handler_count(&self, point: HookPoint) -> usize {
        let handlers = self.handlers.read().await;
        handlers.get(&point).map_or(0, Vec::len)
    }

    /// Run every system transform handler in registration order.
    ///
    /// A failing handler does not stop the ones after it. The first error is
    /// returned once all handlers have run; later ones are only logged.
    pub async fn run_system_transform(
        &self,
        input: &SystemTransformInput,
        output: &mut SystemTransformOutput,
    ) -> anyhow::Result<()> {
        let handlers = {
            let handlers = self.handlers.read().await;
            handlers
                .get(&HookPoint::SystemTransform)
                .cloned()
                .unwrap_or_default()
        };

        let mut first_error = None;
        for handler in handlers {
            if let Err(e) = handler.transform(input, output).await {
                tracing::warn!(
                    hook = HookPoint::SystemTransform.name(),
                    handler = %handler.name(),
                    "Hook handler failed: {e:#}"
                );
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Append(&'static str);

    #[async_trait]
    impl SystemTransformHook for Append {
        fn name(&self) -> &str {
            self.0
        }

        async fn transform(
            &self,
            _input: &SystemTransformInput,
            output: &mut SystemTransformOutput,
        ) -> anyhow::Result<()> {
            output.push_system(self.0);
            Ok(())
        }
    }

    struct Failing(Arc<AtomicU32>);

    #[async_trait]
    impl SystemTransformHook for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn transform(
            &self,
            _input: &SystemTransformInput,
            _output: &mut SystemTransformOutput,
        ) -> anyhow::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("boom")
        }
    }

    #[tokio::test]
    async fn test_handlers_run_in_order() {
        let registry = HookRegistry::new();
        registry.on(HookPoint::SystemTransform, Arc::new(Append("first"))).await;
        registry.on(HookPoint::SystemTransform, Arc::new(Append("second"))).await;
        assert_eq!(registry.handler_count(HookPoint::SystemTransform).await, 2);

        let mut output = SystemTransformOutput {
            system: Some(vec!["host".into()]),
        };
        registry
            .run_system_transform(&SystemTransformInput::default(), &mut output)
            .await
            .unwrap();
        assert_eq!(
            output.system,
            Some(vec!["host".into(), "first".into(), "second".into()])
        );
    }

    #[tokio::test]
    async fn test_empty_registry_leaves_output_unset() {
        let registry = HookRegistry::default();
        let mut output = SystemTransformOutput::default();
        registry
            .run_system_transform(&SystemTransformInput::default(), &mut output)
            .await
            .unwrap();
        assert!(output.system.is_none());
    }

    #[tokio::test]
    async fn test_failure_does_not_block_later_handlers() {
        let registry = HookRegistry::new();
        let calls = Arc::new(AtomicU32::new(0));
        registry.on(HookPoint::SystemTransform, Arc::new(Append("before"))).await;
        registry
            .on(HookPoint::SystemTransform, Arc::new(Failing(calls.clone())))
            .await;
        registry.on(HookPoint::SystemTransform, Arc::new(Append("after"))).await;

        let mut output = SystemTransformOutput::default();
        let err = registry
            .run_system_transform(&SystemTransformInput::default(), &mut output)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(output.system, Some(vec!["before".into(), "after".into()]));
    }
}
