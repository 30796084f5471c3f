use openagent_config::ConfigError;
use openagent_skills::SkillError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Skill {skill} failed to load: {source}")]
    Skill {
        skill: String,
        #[source]
        source: SkillError,
    },
}
