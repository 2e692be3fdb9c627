use crate::basic_types::SlotRoom;
use crate::model::TimeSlotId;
use crate::scheduler_assert_simple;

/// The current (time slot, room) of every exam, indexed by exam position. `None` marks an exam
/// which has not been placed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignments {
    values: Vec<Option<SlotRoom>>,
    num_assigned: usize,
}

impl Assignments {
    /// Every one of the `num_exams` exams starts unassigned.
    pub fn new(num_exams: usize) -> Assignments {
        Assignments {
            values: vec![None; num_exams],
            num_assigned: 0,
        }
    }

    pub fn num_exams(&self) -> usize {
        self.values.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub fn get(&self, exam: usize) -> Option<SlotRoom> {
        self.values[exam]
    }

    pub fn is_assigned(&self, exam: usize) -> bool {
        self.values[exam].is_some()
    }

    /// Whether every exam has been placed.
    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.values.len()
    }

    /// The positions of the exams which have not been placed, in increasing order.
    pub fn unassigned_exams(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(exam, value)| value.is_none().then_some(exam))
    }

    /// The exams placed in `time_slot` together with their position.
    pub fn in_time_slot(&self, time_slot: TimeSlotId) -> impl Iterator<Item = (usize, SlotRoom)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(move |(exam, value)| match value {
                Some(value) if value.time_slot == time_slot => Some((exam, *value)),
                _ => None,
            })
    }

    pub(crate) fn assign(&mut self, exam: usize, value: SlotRoom) {
        scheduler_assert_simple!(
            self.values[exam].is_none(),
            "exam {exam} is assigned twice without being unassigned"
        );

        self.values[exam] = Some(value);
        self.num_assigned += 1;
    }

    pub(crate) fn unassign(&mut self, exam: usize) {
        scheduler_assert_simple!(
            self.values[exam].is_some(),
            "exam {exam} is unassigned while it has no value"
        );

        self.values[exam] = None;
        self.num_assigned -= 1;
    }

    pub(crate) fn values(&self) -> &[Option<SlotRoom>] {
        &self.values
    }
}
