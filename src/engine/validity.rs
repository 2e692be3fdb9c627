use super::Assignments;
use super::ConflictMatrix;
use crate::basic_types::SlotRoom;
use crate::model::Instance;

/// Whether `exam` may be placed at `candidate` given the exams which are already placed.
///
/// Rejects the candidate if its room is too small, if another exam already uses the room in that
/// time slot, or if an exam sharing a student with `exam` is placed in that time slot. Runs in
/// `O(n)` for `n` exams and has no side effects.
pub(crate) fn is_valid(
    instance: &Instance,
    conflicts: &ConflictMatrix,
    assignments: &Assignments,
    exam: usize,
    candidate: SlotRoom,
) -> bool {
    let fits = instance
        .room(candidate.room)
        .is_some_and(|room| room.fits(instance.exam(exam)));
    if !fits {
        return false;
    }

    assignments
        .in_time_slot(candidate.time_slot)
        .all(|(other, value)| value.room != candidate.room && !conflicts.conflicts(exam, other))
}
