use livefeed_types::Snapshot;

use super::Reaction;
use crate::host::SkillGrade;
use crate::skills::SkillRules;

/// Playthrough numbers are zero-based; the last one has no successor.
const FINAL_PLAYTHROUGH: i32 = 2;

pub fn skill_grade_changed(
    snapshot: &mut Snapshot,
    rules: &SkillRules,
    skills: &[SkillGrade],
) -> Reaction {
    snapshot.skills = rules.normalize(snapshot.class.as_deref(), skills);
    Reaction::updated()
}

pub fn exp_level_changed(snapshot: &mut Snapshot, level: i32) -> Reaction {
    snapshot.level = Some(level);
    Reaction::updated()
}

/// Accept an overpower unlock only if it stays within the host's maximum.
pub fn overpower_incremented(
    snapshot: &mut Snapshot,
    levels_unlocked: i32,
    increment: i32,
    maximum: i32,
) -> Reaction {
    match levels_unlocked.checked_add(increment) {
        Some(candidate) if candidate <= maximum => {
            snapshot.op_level = Some(candidate);
            Reaction::updated()
        }
        _ => {
            tracing::debug!(levels_unlocked, increment, maximum, "Overpower increment rejected");
            Reaction::unchanged()
        }
    }
}

pub fn playthrough_completed(snapshot: &mut Snapshot, number: i32) -> Reaction {
    if number < FINAL_PLAYTHROUGH {
        snapshot.playthrough = Some(number + 1);
        Reaction::updated()
    } else {
        tracing::debug!(number, "Completion of final playthrough ignored");
        Reaction::unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overpower_within_maximum_is_accepted() {
        let mut snapshot = Snapshot::new();
        snapshot.op_level = Some(5);

        let reaction = overpower_incremented(&mut snapshot, 5, 1, 7);

        assert_eq!(reaction, Reaction::updated());
        assert_eq!(snapshot.op_level, Some(6));
    }

    #[test]
    fn overpower_at_maximum_is_accepted() {
        let mut snapshot = Snapshot::new();
        overpower_incremented(&mut snapshot, 5, 2, 7);
        assert_eq!(snapshot.op_level, Some(7));
    }

    #[test]
    fn overpower_past_maximum_is_rejected() {
        let mut snapshot = Snapshot::new();
        snapshot.op_level = Some(5);

        let reaction = overpower_incremented(&mut snapshot, 5, 3, 7);

        assert_eq!(reaction, Reaction::unchanged());
        assert_eq!(snapshot.op_level, Some(5));
    }

    #[test]
    fn overpower_overflow_is_rejected() {
        let mut snapshot = Snapshot::new();
        let reaction = overpower_incremented(&mut snapshot, i32::MAX, 1, i32::MAX);
        assert!(!reaction.changed);
        assert_eq!(snapshot.op_level, None);
    }

    #[test]
    fn playthrough_advances_before_final() {
        let mut snapshot = Snapshot::new();
        assert!(playthrough_completed(&mut snapshot, 0).changed);
        assert_eq!(snapshot.playthrough, Some(1));
        assert!(playthrough_completed(&mut snapshot, 1).changed);
        assert_eq!(snapshot.playthrough, Some(2));
    }

    #[test]
    fn final_playthrough_completion_is_rejected() {
        let mut snapshot = Snapshot::new();
        snapshot.playthrough = Some(2);

        assert!(!playthrough_completed(&mut snapshot, 2).changed);
        assert_eq!(snapshot.playthrough, Some(2));
    }

    #[test]
    fn empty_skill_list_clears_skills() {
        let mut snapshot = Snapshot::new();
        snapshot.skills = Some(vec![1, 2, 3]);

        skill_grade_changed(&mut snapshot, &SkillRules::builtin(), &[]);

        assert_eq!(snapshot.skills, None);
    }

    #[test]
    fn skills_use_snapshot_class() {
        let mut snapshot = Snapshot::new();
        snapshot.class = Some("Mechromancer".into());
        let skills: Vec<SkillGrade> = (0..26)
            .map(|grade| SkillGrade {
                skill: String::new(),
                grade,
            })
            .collect();

        skill_grade_changed(&mut snapshot, &SkillRules::builtin(), &skills);

        let grades = snapshot.skills.unwrap();
        assert_eq!(grades.len(), 24);
        assert!(!grades.contains(&24));
    }
}
