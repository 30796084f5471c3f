//! Skill document lookup and loading.

use std::path::{Path, PathBuf};

use crate::errors::SkillError;
use crate::frontmatter::{Frontmatter, split_frontmatter};

/// Skill file name inside each skill directory.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Directory of custom skills, relative to the config directory.
pub const CUSTOM_SKILLS_DIR: &str = "skills/custom";

/// A skill document read from disk.
#[derive(Debug, Clone)]
pub struct SkillDocument {
    /// Skill name (the directory name).
    pub name: String,
    /// File path of the skill definition.
    pub file_path: PathBuf,
    /// Parsed frontmatter. Not used for rendering.
    pub frontmatter: Frontmatter,
    /// Markdown body after the frontmatter.
    pub body: String,
}

/// Directory holding custom skills for a config directory.
pub fn custom_skills_dir(config_dir: &Path) -> PathBuf {
    config_dir.join(CUSTOM_SKILLS_DIR)
}

/// `<configDir>/skills/custom/<name>/SKILL.md`
pub fn skill_path(config_dir: &Path, name: &str) -> PathBuf {
    custom_skills_dir(config_dir).join(name).join(SKILL_FILE_NAME)
}

/// Load a custom skill by name.
///
/// Returns `Ok(None)` if the skill file does not exist. Read failures after
/// the existence check are errors.
pub fn load_skill(config_dir: &Path, name: &str) -> Result<Option<SkillDocument>, SkillError> {
    let path = skill_path(config_dir, name);
    if !path.exists() {
        tracing::debug!(skill = %name, path = %path.display(), "Skill not installed");
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|source| SkillError::Read {
        path: path.clone(),
        source,
    })?;
    let (frontmatter, body) = split_frontmatter(&content);

    Ok(Some(SkillDocument {
        name: name.to_string(),
        file_path: path,
        frontmatter,
        body,
    }))
}
