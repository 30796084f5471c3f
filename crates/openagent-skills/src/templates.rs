//! Wrapper templates for injected skills.
//!
//! Each template is plain text with two placeholders: `{skills_dir}` for the
//! custom skills directory under the config directory and `{content}` for
//! the skill body.

use std::path::Path;

use crate::loader::custom_skills_dir;

/// A skill identity paired with the text block its body is wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTemplate {
    /// Directory name under `skills/custom/`.
    pub skill: &'static str,
    pub template: &'static str,
}

impl SkillTemplate {
    /// Fill in the template. The body is substituted last so placeholders
    /// inside it are left alone.
    pub fn render(&self, content: &str, config_dir: &Path) -> String {
        let skills_dir = custom_skills_dir(config_dir);
        self.template
            .replace("{skills_dir}", &skills_dir.display().to_string())
            .replace("{content}", content)
    }
}

pub const USING_OPENAGENT: SkillTemplate = SkillTemplate {
    skill: "using-openagent",
    template: "<EXTREMELY_IMPORTANT>
You have OpenAgent custom skills.

**IMPORTANT: The using-openagent skill content is included below. It is ALREADY LOADED - you are currently following it. Do NOT load it again.**

{content}

**Skills location:**
OpenAgent custom skills live in `{skills_dir}/`.
Each skill is a directory containing a SKILL.md file.
</EXTREMELY_IMPORTANT>",
};

pub const OPENAGENT_SKILL_INDEX: SkillTemplate = SkillTemplate {
    skill: "openagent-skill-index",
    template: "<OPENAGENT_ENHANCEMENT>
The using-superpowers skill has been loaded by the Superpowers plugin.

**ADDITIONAL CONTEXT: OpenAgent Custom Skills**

{content}

**Key Principle:**
When Superpowers tells you to check for skills, PRIORITIZE OpenAgent custom skills:
- custom/openagent-brainstorming (not superpowers/brainstorming)
- custom/openagent-tdd (not superpowers/test-driven-development)
- custom/openagent-debugging (not superpowers/systematic-debugging)
- custom/openagent-git-worktrees (not superpowers/using-git-worktrees)

These add approval gates that match your safety-first approach.
</OPENAGENT_ENHANCEMENT>",
};

/// Skills injected into the system prompt, in append order.
pub const SYSTEM_PROMPT_SKILLS: &[SkillTemplate] = &[USING_OPENAGENT, OPENAGENT_SKILL_INDEX];
