//! The system prompt enrichment hook.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use openagent_config::{EnvProvider, ProcessEnv, resolve_config_dir};
use openagent_hooks::{
    HookPoint, HookRegistry, SystemTransformHook, SystemTransformInput, SystemTransformOutput,
};
use openagent_skills::{SYSTEM_PROMPT_SKILLS, SkillTemplate, load_skill};

use crate::error::PluginError;

/// Injects OpenAgent custom skills into the system prompt.
///
/// Nothing is cached: every call resolves the config directory again and
/// re-reads every skill file.
pub struct OpenAgentPlugin<E = ProcessEnv> {
    env: E,
    skills: &'static [SkillTemplate],
}

impl OpenAgentPlugin<ProcessEnv> {
    /// Plugin reading the live process environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for OpenAgentPlugin<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvProvider> OpenAgentPlugin<E> {
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            skills: SYSTEM_PROMPT_SKILLS,
        }
    }

    /// Resolve the config directory from a fresh environment snapshot.
    pub fn config_dir(&self) -> Result<PathBuf, PluginError> {
        let env = self.env.snapshot()?;
        Ok(resolve_config_dir(&env)?)
    }

    /// Append every installed skill to `output.system`.
    ///
    /// Skills that are not installed are skipped. A skill that fails to load
    /// does not stop the others; the first failure is returned after all
    /// skills have been tried.
    pub fn enrich(&self, output: &mut SystemTransformOutput) -> Result<(), PluginError> {
        let config_dir = self.config_dir()?;
        tracing::debug!(config_dir = %config_dir.display(), "Enriching system prompt");

        let mut first_error = None;
        for template in self.skills {
            match load_skill(&config_dir, template.skill) {
                Ok(Some(doc)) => {
                    output.push_system(template.render(&doc.body, &config_dir));
                    tracing::debug!(
                        skill = %doc.name,
                        path = %doc.file_path.display(),
                        "Injected skill"
                    );
                }
                Ok(None) => {}
                Err(source) => {
                    tracing::warn!(skill = %template.skill, "Failed to load skill: {source}");
                    if first_error.is_none() {
                        first_error = Some(PluginError::Skill {
                            skill: template.skill.to_string(),
                            source,
                        });
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<E: EnvProvider + 'static> OpenAgentPlugin<E> {
    /// Register this plugin with the host's hook registry.
    pub async fn register(self, registry: &HookRegistry) {
        registry.on(HookPoint::SystemTransform, Arc::new(self)).await;
    }
}

#[async_trait]
impl<E: EnvProvider> SystemTransformHook for OpenAgentPlugin<E> {
    fn name(&self) -> &str {
        "openagent"
    }

    async fn transform(
        &self,
        _input: &SystemTransformInput,
        output: &mut SystemTransformOutput,
    ) -> anyhow::Result<()> {
        self.enrich(output)?;
        Ok(())
    }
}
