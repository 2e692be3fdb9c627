//! The entities of an exam timetabling problem and the validated [`Instance`] handed to the
//! solver.
//!
//! The solver assumes its input is well formed. All checks on the input happen here, when an
//! [`Instance`] is constructed, so that a malformed timetable never reaches the search.

mod entities;
mod loading;
mod sample;

use fnv::FnvHashMap;
use fnv::FnvHashSet;

pub use entities::*;
pub use loading::LoadError;
pub use sample::sample_instance;

/// A validated collection of exams, rooms and time slots.
///
/// Exams are addressed by their position in [`Instance::exams`]; rooms and time slots are
/// addressed by identity through [`Instance::room`] and [`Instance::time_slot`].
#[derive(Clone, Debug)]
pub struct Instance {
    exams: Vec<Exam>,
    rooms: Vec<Room>,
    time_slots: Vec<TimeSlot>,
    room_positions: FnvHashMap<RoomId, usize>,
    time_slot_positions: FnvHashMap<TimeSlotId, usize>,
}

impl Instance {
    /// Validate the given entities and build the identity lookup tables.
    pub fn new(
        exams: Vec<Exam>,
        rooms: Vec<Room>,
        time_slots: Vec<TimeSlot>,
    ) -> Result<Instance, InstanceError> {
        let mut exam_ids = FnvHashSet::default();
        for exam in &exams {
            if !exam_ids.insert(exam.id) {
                return Err(InstanceError::DuplicateExam(exam.id));
            }

            let enrolled = exam.students.iter().collect::<FnvHashSet<_>>().len();
            if enrolled == 0 {
                return Err(InstanceError::NoStudents(exam.id));
            }
            if usize::try_from(exam.num_students).ok() != Some(enrolled) {
                return Err(InstanceError::StudentCountMismatch {
                    exam: exam.id,
                    declared: exam.num_students,
                    enrolled,
                });
            }
        }

        if !exams.is_empty() && rooms.is_empty() {
            return Err(InstanceError::NoRooms);
        }
        if !exams.is_empty() && time_slots.is_empty() {
            return Err(InstanceError::NoTimeSlots);
        }

        let mut room_positions = FnvHashMap::default();
        for (position, room) in rooms.iter().enumerate() {
            if room_positions.insert(room.id, position).is_some() {
                return Err(InstanceError::DuplicateRoom(room.id));
            }
        }

        let mut time_slot_positions = FnvHashMap::default();
        let mut occupied_periods = FnvHashMap::default();
        for (position, time_slot) in time_slots.iter().enumerate() {
            if time_slot_positions
                .insert(time_slot.id, position)
                .is_some()
            {
                return Err(InstanceError::DuplicateTimeSlot(time_slot.id));
            }

            if let Some(first) =
                occupied_periods.insert((time_slot.date, time_slot.period), time_slot.id)
            {
                return Err(InstanceError::OverlappingTimeSlots {
                    first,
                    second: time_slot.id,
                    date: time_slot.date,
                    period: time_slot.period,
                });
            }
        }

        Ok(Instance {
            exams,
            rooms,
            time_slots,
            room_positions,
            time_slot_positions,
        })
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn num_exams(&self) -> usize {
        self.exams.len()
    }

    /// Get the exam at the given position.
    pub fn exam(&self, exam: usize) -> &Exam {
        &self.exams[exam]
    }

    /// Look up a room by its identity.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.room_positions
            .get(&id)
            .map(|&position| &self.rooms[position])
    }

    /// Look up a time slot by its identity.
    pub fn time_slot(&self, id: TimeSlotId) -> Option<&TimeSlot> {
        self.time_slot_positions
            .get(&id)
            .map(|&position| &self.time_slots[position])
    }
}

/// The reasons an [`Instance`] can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    #[error("exam identity {0} is used more than once")]
    DuplicateExam(ExamId),
    #[error("room identity {0} is used more than once")]
    DuplicateRoom(RoomId),
    #[error("time slot identity {0} is used more than once")]
    DuplicateTimeSlot(TimeSlotId),
    #[error("time slots {first} and {second} both take place on {date} in the {period}")]
    OverlappingTimeSlots {
        first: TimeSlotId,
        second: TimeSlotId,
        date: Date,
        period: Period,
    },
    #[error("exam {exam} declares {declared} students but enrols {enrolled} distinct students")]
    StudentCountMismatch {
        exam: ExamId,
        declared: u32,
        enrolled: usize,
    },
    #[error("exam {0} has no students")]
    NoStudents(ExamId),
    #[error("there are exams to schedule but no rooms")]
    NoRooms,
    #[error("there are exams to schedule but no time slots")]
    NoTimeSlots,
}
