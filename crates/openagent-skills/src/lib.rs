//! openagent-skills: Skill document loading, frontmatter splitting, and the
//! text blocks skills are injected as.
//!
//! Skills live at `<configDir>/skills/custom/<name>/SKILL.md`. A file may
//! start with a frontmatter block; only the body after it is injected.
//!
//! # Skill file format
//!
//! ```markdown
//! ---
//! name: openagent-skill-index
//! description: Index of approval-gated skills
//! ---
//!
//! # Skill Index
//!
//! [Markdown injected into the system prompt]
//! ```

pub mod errors;
pub mod frontmatter;
pub mod loader;
pub mod templates;

pub use errors::SkillError;
pub use frontmatter::{Frontmatter, split_frontmatter};
pub use loader::{SkillDocument, load_skill};
pub use templates::{SYSTEM_PROMPT_SKILLS, SkillTemplate};
