//! Contains the outputs of the [`Solver`](crate::Solver).

use crate::basic_types::SlotRoom;
use crate::engine::Assignments;
use crate::engine::ConflictMatrix;
use crate::model::ExamId;
use crate::model::Instance;
use crate::model::RoomId;
use crate::model::TimeSlotId;

/// The result of a call to [`Solver::satisfy`](crate::Solver::satisfy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Every exam has been placed; contains the [`Schedule`].
    Satisfiable(Schedule),
    /// There is no way to place every exam.
    Unsatisfiable,
    /// It is not known whether a schedule exists because a
    /// [`TerminationCondition`](crate::termination::TerminationCondition) stopped the search.
    Unknown,
}

/// A (time slot, room) for every exam, indexed by exam position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    placements: Vec<SlotRoom>,
}

impl Schedule {
    /// Extracts the schedule from complete assignments; returns `None` if any exam is unplaced.
    pub(crate) fn from_assignments(assignments: &Assignments) -> Option<Schedule> {
        let placements = assignments
            .values()
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()?;

        Some(Schedule { placements })
    }

    /// A schedule which places the exam at position `i` at `placements[i]`. Use
    /// [`Schedule::verify`] to check whether it is feasible.
    pub fn from_placements(placements: Vec<SlotRoom>) -> Schedule {
        Schedule { placements }
    }

    pub fn num_exams(&self) -> usize {
        self.placements.len()
    }

    /// The (time slot, room) of the exam at position `exam`.
    pub fn placement(&self, exam: usize) -> SlotRoom {
        self.placements[exam]
    }

    /// The placement of every exam in the order of the exams of the instance.
    pub fn placements(&self) -> &[SlotRoom] {
        &self.placements
    }

    /// Checks the schedule against `instance` without relying on the search: every exam is
    /// placed, in an existing time slot and in an existing room which is large enough, no room
    /// hosts two exams in one time slot and no two exams sharing a student take place in the same
    /// time slot.
    pub fn verify(&self, instance: &Instance) -> Result<(), ScheduleViolation> {
        if self.placements.len() != instance.num_exams() {
            return Err(ScheduleViolation::Incomplete {
                expected: instance.num_exams(),
                actual: self.placements.len(),
            });
        }

        for (exam, placement) in instance.exams().iter().zip(&self.placements) {
            if instance.time_slot(placement.time_slot).is_none() {
                return Err(ScheduleViolation::UnknownTimeSlot {
                    exam: exam.id,
                    time_slot: placement.time_slot,
                });
            }

            let room = instance
                .room(placement.room)
                .ok_or(ScheduleViolation::UnknownRoom {
                    exam: exam.id,
                    room: placement.room,
                })?;

            if !room.fits(exam) {
                return Err(ScheduleViolation::CapacityExceeded {
                    exam: exam.id,
                    room: room.id,
                });
            }
        }

        let conflicts = ConflictMatrix::build(instance.exams());
        for (i, first) in self.placements.iter().enumerate() {
            for (j, second) in self.placements.iter().enumerate().skip(i + 1) {
                if first.time_slot != second.time_slot {
                    continue;
                }

                let (first_exam, second_exam) = (instance.exam(i).id, instance.exam(j).id);

                if first.room == second.room {
                    return Err(ScheduleViolation::RoomClash {
                        first: first_exam,
                        second: second_exam,
                        time_slot: first.time_slot,
                        room: first.room,
                    });
                }

                if conflicts.conflicts(i, j) {
                    return Err(ScheduleViolation::StudentClash {
                        first: first_exam,
                        second: second_exam,
                        time_slot: first.time_slot,
                    });
                }
            }
        }

        Ok(())
    }
}

/// The ways in which a [`Schedule`] can be infeasible for an [`Instance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleViolation {
    #[error("the schedule places {actual} exams but the instance has {expected}")]
    Incomplete { expected: usize, actual: usize },
    #[error("exam {exam} is placed in unknown time slot {time_slot}")]
    UnknownTimeSlot { exam: ExamId, time_slot: TimeSlotId },
    #[error("exam {exam} is placed in unknown room {room}")]
    UnknownRoom { exam: ExamId, room: RoomId },
    #[error("exam {exam} does not fit in room {room}")]
    CapacityExceeded { exam: ExamId, room: RoomId },
    #[error("exams {first} and {second} both use room {room} in time slot {time_slot}")]
    RoomClash {
        first: ExamId,
        second: ExamId,
        time_slot: TimeSlotId,
        room: RoomId,
    },
    #[error("exams {first} and {second} share a student and both take place in time slot {time_slot}")]
    StudentClash {
        first: ExamId,
        second: ExamId,
        time_slot: TimeSlotId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestInstanceBuilder;

    fn value(time_slot: u32, room: u32) -> SlotRoom {
        SlotRoom::new(TimeSlotId(time_slot), RoomId(room))
    }

    fn schedule(placements: Vec<SlotRoom>) -> Schedule {
        Schedule::from_placements(placements)
    }

    fn instance() -> Instance {
        TestInstanceBuilder::default()
            .exam(&[1, 2])
            .exam(&[2])
            .exam(&[3])
            .room(1, 2)
            .room(2, 1)
            .time_slots(2)
            .build()
    }

    #[test]
    fn feasible_schedule_is_accepted() {
        let placements = vec![value(1, 1), value(2, 1), value(1, 2)];

        assert_eq!(schedule(placements).verify(&instance()), Ok(()));
    }

    #[test]
    fn missing_exams_are_reported() {
        let result = schedule(vec![value(1, 1)]).verify(&instance());

        assert_eq!(
            result,
            Err(ScheduleViolation::Incomplete {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn small_rooms_are_reported() {
        let result = schedule(vec![value(1, 2), value(2, 1), value(1, 1)]).verify(&instance());

        assert_eq!(
            result,
            Err(ScheduleViolation::CapacityExceeded {
                exam: ExamId(1),
                room: RoomId(2)
            })
        );
    }

    #[test]
    fn shared_rooms_are_reported() {
        let result = schedule(vec![value(1, 1), value(2, 1), value(2, 1)]).verify(&instance());

        assert!(matches!(result, Err(ScheduleViolation::RoomClash { .. })));
    }

    #[test]
    fn shared_students_are_reported() {
        let result = schedule(vec![value(1, 1), value(1, 2), value(2, 1)]).verify(&instance());

        assert_eq!(
            result,
            Err(ScheduleViolation::StudentClash {
                first: ExamId(1),
                second: ExamId(2),
                time_slot: TimeSlotId(1)
            })
        );
    }

    #[test]
    fn unknown_identities_are_reported() {
        let result = schedule(vec![value(9, 1), value(2, 1), value(1, 2)]).verify(&instance());
        assert!(matches!(
            result,
            Err(ScheduleViolation::UnknownTimeSlot { .. })
        ));

        let result = schedule(vec![value(1, 9), value(2, 1), value(1, 2)]).verify(&instance());
        assert!(matches!(result, Err(ScheduleViolation::UnknownRoom { .. })));
    }

    #[test]
    fn incomplete_assignments_have_no_schedule() {
        let mut assignments = Assignments::new(2);
        assignments.assign(0, value(1, 1));
        assert!(Schedule::from_assignments(&assignments).is_none());

        assignments.assign(1, value(1, 2));
        let schedule = Schedule::from_assignments(&assignments).expect("complete");
        assert_eq!(schedule.placement(1), value(1, 2));
    }
}
