use super::Assignments;
use super::ConflictMatrix;
use super::Domains;
use crate::basic_types::SlotRoom;

/// Signals that forward checking removed the last value from the domain of `exam`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain {
    pub(crate) exam: usize,
}

/// Prunes the domains after `exam` has been placed at `value`.
///
/// Every unassigned exam sharing a student with `exam` loses exactly `value`. Other rooms in the
/// same time slot stay in those domains; the validity check rejects them when they are tried.
/// Stops at the first exam whose domain becomes empty, leaving the domains partially pruned; the
/// caller restores them from its snapshot.
pub(crate) fn forward_check(
    conflicts: &ConflictMatrix,
    assignments: &Assignments,
    domains: &mut Domains,
    exam: usize,
    value: SlotRoom,
) -> Result<(), EmptyDomain> {
    for other in conflicts.conflicting_exams(exam) {
        if assignments.is_assigned(other) {
            continue;
        }

        let _ = domains.remove_value(other, value);

        if domains.get(other).is_empty() {
            return Err(EmptyDomain { exam: other });
        }
    }

    Ok(())
}
