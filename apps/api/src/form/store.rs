//! Form state store: the canonical owner of the résumé document.
//!
//! Every mutation runs synchronously to completion under the session lock,
//! so no partial application is ever observable. Index-addressed operations
//! treat an out-of-range index as a silent no-op (debug-logged): the UI may
//! race a removal against an in-flight edit, and dropping the stale edit is
//! preferable to failing the editing session.
//!
//! Dirty-flag contract: every successful mutation sets `is_dirty` and bumps
//! `revision`; `load_document` and `reset` clear the flag (they represent the
//! source-of-truth state, not an unsaved edit).

use tracing::debug;

use crate::form::patch::{
    CertificationPatch, EducationPatch, ExperiencePatch, PersonalInfoPatch, ProjectPatch,
    SkillPatch,
};
use crate::models::resume::{
    Certification, CollectionKind, Education, Experience, Project, ResumeDocument, Skill,
};
use uuid::Uuid;

/// Moves the element at `from` to `to` by splice-out/splice-in. This is an
/// array move, not a swap: every element between the two positions shifts by
/// one. Returns false (leaving the slice untouched) if either index is out
/// of range.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}

fn update_at<T>(items: &mut [T], index: usize, apply: impl FnOnce(&mut T)) -> bool {
    match items.get_mut(index) {
        Some(item) => {
            apply(item);
            true
        }
        None => false,
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index >= items.len() {
        return false;
    }
    items.remove(index);
    true
}

/// The résumé document plus edit-tracking state.
///
/// `revision` is a monotonic edit counter. The autosave coordinator snapshots
/// it alongside the document; if it has moved by the time a write completes,
/// edits landed mid-write and the dirty flag must not be cleared.
#[derive(Debug, Clone)]
pub struct FormState {
    pub document: ResumeDocument,
    pub is_dirty: bool,
    pub revision: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        FormState {
            document: ResumeDocument::default(),
            is_dirty: false,
            revision: 0,
        }
    }

    fn touch(&mut self) {
        self.is_dirty = true;
        self.revision += 1;
    }

    // ── singleton ───────────────────────────────────────────────────────────

    /// Shallow-merges a partial update into the personal info block.
    /// Always succeeds.
    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        patch.apply(&mut self.document.personal_info);
        self.touch();
    }

    // ── collection operations ───────────────────────────────────────────────

    /// Appends a default (empty) record to the collection and returns its id.
    /// The store enforces no upper bound on collection size.
    pub fn add_entry(&mut self, kind: CollectionKind) -> Uuid {
        let id = match kind {
            CollectionKind::Education => {
                let record = Education::default();
                let id = record.id;
                self.document.education.push(record);
                id
            }
            CollectionKind::Experience => {
                let record = Experience::default();
                let id = record.id;
                self.document.experience.push(record);
                id
            }
            CollectionKind::Skills => {
                let record = Skill::default();
                let id = record.id;
                self.document.skills.push(record);
                id
            }
            CollectionKind::Projects => {
                let record = Project::default();
                let id = record.id;
                self.document.projects.push(record);
                id
            }
            CollectionKind::Certifications => {
                let record = Certification::default();
                let id = record.id;
                self.document.certifications.push(record);
                id
            }
        };
        self.touch();
        id
    }

    /// Removes the record at `index`, shifting subsequent records down by
    /// one. Out-of-range is a no-op.
    pub fn remove_entry(&mut self, kind: CollectionKind, index: usize) {
        let removed = match kind {
            CollectionKind::Education => remove_at(&mut self.document.education, index),
            CollectionKind::Experience => remove_at(&mut self.document.experience, index),
            CollectionKind::Skills => remove_at(&mut self.document.skills, index),
            CollectionKind::Projects => remove_at(&mut self.document.projects, index),
            CollectionKind::Certifications => remove_at(&mut self.document.certifications, index),
        };
        if removed {
            self.touch();
        } else {
            debug!(
                section = kind.as_str(),
                index, "remove targeted a missing entry; ignoring"
            );
        }
    }

    /// Array-moves the record at `from` to `to`. Either index out of range
    /// is a no-op.
    pub fn reorder_entries(&mut self, kind: CollectionKind, from: usize, to: usize) {
        let moved = match kind {
            CollectionKind::Education => array_move(&mut self.document.education, from, to),
            CollectionKind::Experience => array_move(&mut self.document.experience, from, to),
            CollectionKind::Skills => array_move(&mut self.document.skills, from, to),
            CollectionKind::Projects => array_move(&mut self.document.projects, from, to),
            CollectionKind::Certifications => {
                array_move(&mut self.document.certifications, from, to)
            }
        };
        if moved {
            self.touch();
        } else {
            debug!(
                section = kind.as_str(),
                from, to, "reorder out of range; ignoring"
            );
        }
    }

    // Field updates are typed per collection: the patch's shallow-merge
    // keeps untouched fields intact. Out-of-range indices are no-ops.

    pub fn update_education(&mut self, index: usize, patch: EducationPatch) {
        if update_at(&mut self.document.education, index, |r| patch.apply(r)) {
            self.touch();
        } else {
            debug!(index, "education update targeted a missing entry; ignoring");
        }
    }

    pub fn update_experience(&mut self, index: usize, patch: ExperiencePatch) {
        if update_at(&mut self.document.experience, index, |r| patch.apply(r)) {
            self.touch();
        } else {
            debug!(index, "experience update targeted a missing entry; ignoring");
        }
    }

    pub fn update_skill(&mut self, index: usize, patch: SkillPatch) {
        if update_at(&mut self.document.skills, index, |r| patch.apply(r)) {
            self.touch();
        } else {
            debug!(index, "skill update targeted a missing entry; ignoring");
        }
    }

    pub fn update_project(&mut self, index: usize, patch: ProjectPatch) {
        if update_at(&mut self.document.projects, index, |r| patch.apply(r)) {
            self.touch();
        } else {
            debug!(index, "project update targeted a missing entry; ignoring");
        }
    }

    pub fn update_certification(&mut self, index: usize, patch: CertificationPatch) {
        if update_at(&mut self.document.certifications, index, |r| patch.apply(r)) {
            self.touch();
        } else {
            debug!(
                index,
                "certification update targeted a missing entry; ignoring"
            );
        }
    }

    // ── whole-document operations ───────────────────────────────────────────

    /// Replaces the document with one loaded from the persistence
    /// collaborator. The serde layer has already substituted defaults for any
    /// absent collection or personal-info block, and backfilled missing
    /// record ids, so the replacement is total. Clears the dirty flag: the
    /// state now mirrors the source of truth.
    pub fn load_document(&mut self, document: ResumeDocument) {
        self.document = document;
        self.is_dirty = false;
        self.revision += 1;
    }

    /// Restores the initial empty document. Clears the dirty flag.
    pub fn reset(&mut self) {
        self.document = ResumeDocument::default();
        self.is_dirty = false;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillLevel;

    // ── array_move ──────────────────────────────────────────────────────────

    #[test]
    fn test_array_move_is_splice_not_swap() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(array_move(&mut items, 0, 3));
        // 'a' reinserted at 3 of the shortened sequence; b..d shift left.
        assert_eq!(items, vec!['b', 'c', 'd', 'a', 'e']);
    }

    #[test]
    fn test_array_move_backwards() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert!(array_move(&mut items, 3, 1));
        assert_eq!(items, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_array_move_inverse_restores_order() {
        // reorder(j, i) after reorder(i, j) restores the original order for
        // any i, j; the move is self-invertible under swapped arguments.
        for from in 0..5 {
            for to in 0..5 {
                let original = vec![0, 1, 2, 3, 4];
                let mut items = original.clone();
                assert!(array_move(&mut items, from, to));
                assert!(array_move(&mut items, to, from));
                assert_eq!(items, original, "round trip failed for ({from}, {to})");
            }
        }
    }

    #[test]
    fn test_array_move_out_of_range_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!array_move(&mut items, 0, 3));
        assert!(!array_move(&mut items, 5, 0));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_array_move_preserves_multiset() {
        let mut items = vec![10, 20, 30, 40];
        array_move(&mut items, 1, 3);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, vec![10, 20, 30, 40]);
        assert_eq!(items.len(), 4);
    }

    // ── add / update / remove ───────────────────────────────────────────────

    #[test]
    fn test_add_entry_appends_default_record_and_dirties() {
        let mut state = FormState::new();
        assert!(!state.is_dirty);

        let id = state.add_entry(CollectionKind::Skills);
        assert_eq!(state.document.skills.len(), 1);
        assert_eq!(state.document.skills[0].id, id);
        assert_eq!(state.document.skills[0].name, "");
        assert_eq!(state.document.skills[0].level, SkillLevel::Beginner);
        assert!(state.is_dirty);
    }

    #[test]
    fn test_update_is_shallow_merge() {
        let mut state = FormState::new();
        state.add_entry(CollectionKind::Experience);
        state.update_experience(
            0,
            ExperiencePatch {
                company: Some("Acme".to_string()),
                ..ExperiencePatch::default()
            },
        );
        state.update_experience(
            0,
            ExperiencePatch {
                position: Some("Engineer".to_string()),
                ..ExperiencePatch::default()
            },
        );

        // Both fields survive: the second patch did not clobber the first.
        assert_eq!(state.document.experience[0].company, "Acme");
        assert_eq!(state.document.experience[0].position, "Engineer");
    }

    #[test]
    fn test_update_does_not_disturb_other_entries() {
        let mut state = FormState::new();
        state.add_entry(CollectionKind::Education);
        state.add_entry(CollectionKind::Education);
        state.update_education(
            1,
            EducationPatch {
                degree: Some("BSc".to_string()),
                ..EducationPatch::default()
            },
        );
        assert_eq!(state.document.education[0].degree, "");
        assert_eq!(state.document.education[1].degree, "BSc");
    }

    #[test]
    fn test_update_out_of_range_is_silent_noop() {
        let mut state = FormState::new();
        state.add_entry(CollectionKind::Projects);
        let revision = state.revision;

        state.update_project(
            7,
            ProjectPatch {
                title: Some("ghost".to_string()),
                ..ProjectPatch::default()
            },
        );
        assert_eq!(state.revision, revision, "no-op must not bump revision");
        assert_eq!(state.document.projects[0].title, "");
    }

    #[test]
    fn test_remove_shifts_subsequent_entries_left() {
        let mut state = FormState::new();
        for name in ["first", "second", "third"] {
            state.add_entry(CollectionKind::Skills);
            let idx = state.document.skills.len() - 1;
            state.update_skill(
                idx,
                SkillPatch {
                    name: Some(name.to_string()),
                    ..SkillPatch::default()
                },
            );
        }

        state.remove_entry(CollectionKind::Skills, 1);
        assert_eq!(state.document.skills.len(), 2);
        assert_eq!(state.document.skills[0].name, "first");
        assert_eq!(state.document.skills[1].name, "third");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut state = FormState::new();
        state.add_entry(CollectionKind::Certifications);
        let revision = state.revision;
        state.remove_entry(CollectionKind::Certifications, 3);
        assert_eq!(state.document.certifications.len(), 1);
        assert_eq!(state.revision, revision);
    }

    #[test]
    fn test_reorder_entries_moves_across_positions() {
        let mut state = FormState::new();
        for company in ["a", "b", "c"] {
            state.add_entry(CollectionKind::Experience);
            let idx = state.document.experience.len() - 1;
            state.update_experience(
                idx,
                ExperiencePatch {
                    company: Some(company.to_string()),
                    ..ExperiencePatch::default()
                },
            );
        }

        state.reorder_entries(CollectionKind::Experience, 2, 0);
        let companies: Vec<&str> = state
            .document
            .experience
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(companies, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_entry_ids_are_stable_across_reorder() {
        let mut state = FormState::new();
        let first = state.add_entry(CollectionKind::Projects);
        let second = state.add_entry(CollectionKind::Projects);

        state.reorder_entries(CollectionKind::Projects, 0, 1);
        assert_eq!(state.document.position_of(CollectionKind::Projects, first), Some(1));
        assert_eq!(state.document.position_of(CollectionKind::Projects, second), Some(0));
    }

    // ── personal info ───────────────────────────────────────────────────────

    #[test]
    fn test_update_personal_info_merges_and_dirties() {
        let mut state = FormState::new();
        state.update_personal_info(PersonalInfoPatch {
            full_name: Some("Grace Hopper".to_string()),
            ..PersonalInfoPatch::default()
        });
        state.update_personal_info(PersonalInfoPatch {
            email: Some("grace@navy.mil".to_string()),
            ..PersonalInfoPatch::default()
        });

        assert_eq!(state.document.personal_info.full_name, "Grace Hopper");
        assert_eq!(state.document.personal_info.email, "grace@navy.mil");
        assert!(state.is_dirty);
    }

    // ── load / reset ────────────────────────────────────────────────────────

    #[test]
    fn test_load_document_clears_dirty() {
        let mut state = FormState::new();
        state.add_entry(CollectionKind::Skills);
        assert!(state.is_dirty);

        let loaded: ResumeDocument =
            serde_json::from_str(r#"{"personalInfo": {"fullName": "Ada"}}"#).unwrap();
        state.load_document(loaded);
        assert!(!state.is_dirty);
        assert_eq!(state.document.personal_info.full_name, "Ada");
        assert!(state.document.skills.is_empty());
        assert!(state.document.education.is_empty());
    }

    #[test]
    fn test_reset_restores_initial_empty_document() {
        let mut state = FormState::new();
        state.add_entry(CollectionKind::Experience);
        state.update_personal_info(PersonalInfoPatch {
            full_name: Some("Someone".to_string()),
            ..PersonalInfoPatch::default()
        });

        state.reset();
        assert!(!state.is_dirty);
        assert_eq!(state.document.personal_info, Default::default());
        assert!(state.document.experience.is_empty());
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut state = FormState::new();
        let r0 = state.revision;
        state.add_entry(CollectionKind::Education);
        let r1 = state.revision;
        state.remove_entry(CollectionKind::Education, 0);
        let r2 = state.revision;
        assert!(r0 < r1 && r1 < r2);
    }

    // ── end-to-end edit flow ────────────────────────────────────────────────

    #[test]
    fn test_add_update_remove_round_trip_leaves_collection_empty() {
        let mut state = FormState::new();
        state.add_entry(CollectionKind::Experience);
        state.update_experience(
            0,
            ExperiencePatch {
                company: Some("Acme".to_string()),
                ..ExperiencePatch::default()
            },
        );
        state.remove_entry(CollectionKind::Experience, 0);
        assert!(state.document.experience.is_empty());
        assert!(state.is_dirty);
    }
}
