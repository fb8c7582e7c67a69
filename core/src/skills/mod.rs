//! Skill list normalization.
//!
//! The game reports every skill slot of the active class, including entries
//! that have no meaning to a viewer. The exported list keeps only the
//! displayable grades, in the game's order.

mod rules;

pub use rules::{ClassRules, ExclusionRule, SkillRules};

use crate::host::SkillGrade;

/// Position of the action-skill baseline, never displayed.
pub const BASELINE_INDEX: usize = 0;

impl SkillRules {
    /// Reduce raw skill grades to the displayable grades for `class`.
    ///
    /// Returns `None` when there are no skills at all. Exclusions reference
    /// positions in the raw list; positions past its end are ignored.
    pub fn normalize(&self, class: Option<&str>, skills: &[SkillGrade]) -> Option<Vec<i32>> {
        if skills.is_empty() {
            return None;
        }

        let exclusions = class.map(|c| self.exclusions(c)).unwrap_or_default();

        Some(
            skills
                .iter()
                .enumerate()
                .filter(|(index, _)| {
                    *index != BASELINE_INDEX && !exclusions.iter().any(|rule| rule.covers(*index))
                })
                .map(|(_, skill)| skill.grade)
                .collect(),
        )
    }
}
