#![cfg(test)]
//! Helpers to set up small timetabling instances in tests.

use crate::model::Date;
use crate::model::Exam;
use crate::model::ExamId;
use crate::model::Instance;
use crate::model::Period;
use crate::model::Room;
use crate::model::RoomId;
use crate::model::StudentId;
use crate::model::TimeSlot;
use crate::model::TimeSlotId;

/// Builds an [`Instance`] piece by piece. Exams get the identities `1, 2, ...` in the order they
/// are added and need as many seats as they have students.
#[derive(Debug, Default)]
pub(crate) struct TestInstanceBuilder {
    exams: Vec<Exam>,
    rooms: Vec<Room>,
    time_slot_ids: Vec<u32>,
}

#[allow(unused, reason = "not every test uses every helper")]
impl TestInstanceBuilder {
    pub(crate) fn exam(mut self, students: &[u32]) -> Self {
        let id = self.exams.len() as u32 + 1;
        self.exams.push(Exam::new(
            ExamId(id),
            format!("Exam {id}"),
            students.len() as u32,
            students.iter().copied().map(StudentId),
        ));
        self
    }

    pub(crate) fn room(mut self, id: u32, capacity: u32) -> Self {
        self.rooms.push(Room::new(RoomId(id), capacity));
        self
    }

    /// Adds `count` time slots with the identities `1..=count`.
    pub(crate) fn time_slots(self, count: u32) -> Self {
        let ids = (1..=count).collect::<Vec<_>>();
        self.time_slots_with_ids(&ids)
    }

    /// Adds one time slot per identity. Consecutive slots alternate between the morning and the
    /// afternoon, starting on 2024-12-01.
    pub(crate) fn time_slots_with_ids(mut self, ids: &[u32]) -> Self {
        self.time_slot_ids.extend_from_slice(ids);
        self
    }

    pub(crate) fn build(self) -> Instance {
        let time_slots = self
            .time_slot_ids
            .iter()
            .enumerate()
            .map(|(position, &id)| {
                let day = u8::try_from(position / 2 + 1).expect("at most 62 time slots");
                let date = Date::new(2024, 12, day).expect("at most 62 time slots");
                let period = if position % 2 == 0 {
                    Period::Morning
                } else {
                    Period::Afternoon
                };

                TimeSlot::new(TimeSlotId(id), date, period)
            })
            .collect();

        Instance::new(self.exams, self.rooms, time_slots).expect("test instance should be valid")
    }
}
