//! Builds an [`Instance`] from a DZN data file.
//!
//! # Format
//! ```dzn
//! NumExams = 2;
//! ExamId = [1, 2];
//! NumStudents = [2, 1];
//!
//! % One entry per (exam, student) pair.
//! NumEnrolments = 3;
//! EnrolmentExam = [1, 1, 2];
//! EnrolmentStudent = [101, 102, 102];
//!
//! NumRooms = 1;
//! RoomId = [201];
//! RoomCapacity = [2];
//!
//! % Dates are written as YYYYMMDD, periods as 1 (morning) or 2 (afternoon).
//! NumSlots = 2;
//! SlotId = [1, 2];
//! SlotDate = [20241210, 20241210];
//! SlotPeriod = [1, 2];
//! ```
//!
//! Data files carry no names, so exam `i` is called `Exam i`.

use dzn_rs::DataFile;
use fnv::FnvHashMap;

use super::Date;
use super::Exam;
use super::ExamId;
use super::Instance;
use super::InstanceError;
use super::Period;
use super::Room;
use super::RoomId;
use super::StudentId;
use super::TimeSlot;
use super::TimeSlotId;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("missing int parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("missing int array '{name}' of length {len}")]
    MissingArray { name: &'static str, len: usize },
    #[error("'{name}' should not be negative, but it is {value}")]
    Negative { name: &'static str, value: i32 },
    #[error("'{0}' contains an invalid date {1}, expected YYYYMMDD")]
    InvalidDate(&'static str, i32),
    #[error("'{0}' contains an invalid period {1}, expected 1 (morning) or 2 (afternoon)")]
    InvalidPeriod(&'static str, i32),
    #[error("enrolment of student {student} refers to unknown exam {exam}")]
    UnknownExam { exam: ExamId, student: StudentId },
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

impl Instance {
    /// Read an instance from parsed DZN data, using the parameters listed in the documentation of
    /// this module.
    pub fn from_dzn(data: &DataFile<i32>) -> Result<Instance, LoadError> {
        let num_exams = length(data, "NumExams")?;
        let exam_ids = unsigned_array(data, "ExamId", num_exams)?;
        let num_students = unsigned_array(data, "NumStudents", num_exams)?;

        let num_enrolments = length(data, "NumEnrolments")?;
        let enrolment_exams = unsigned_array(data, "EnrolmentExam", num_enrolments)?;
        let enrolment_students = unsigned_array(data, "EnrolmentStudent", num_enrolments)?;

        let num_rooms = length(data, "NumRooms")?;
        let room_ids = unsigned_array(data, "RoomId", num_rooms)?;
        let capacities = unsigned_array(data, "RoomCapacity", num_rooms)?;

        let num_slots = length(data, "NumSlots")?;
        let slot_ids = unsigned_array(data, "SlotId", num_slots)?;
        let slot_dates = int_array(data, "SlotDate", num_slots)?;
        let slot_periods = int_array(data, "SlotPeriod", num_slots)?;

        let mut exams = exam_ids
            .iter()
            .zip(num_students)
            .map(|(&id, num_students)| {
                Exam::new(ExamId(id), format!("Exam {id}"), num_students, Vec::new())
            })
            .collect::<Vec<_>>();

        // Duplicate identities are reported by `Instance::new`; enrolments go to the first exam
        // with the identity.
        let mut exam_positions = FnvHashMap::default();
        for (position, &id) in exam_ids.iter().enumerate().rev() {
            let _ = exam_positions.insert(ExamId(id), position);
        }

        for (exam, student) in enrolment_exams.into_iter().zip(enrolment_students) {
            let (exam, student) = (ExamId(exam), StudentId(student));
            let position = exam_positions
                .get(&exam)
                .copied()
                .ok_or(LoadError::UnknownExam { exam, student })?;

            exams[position].students.push(student);
        }

        let rooms = room_ids
            .into_iter()
            .zip(capacities)
            .map(|(id, capacity)| Room::new(RoomId(id), capacity))
            .collect();

        let time_slots = slot_ids
            .into_iter()
            .zip(slot_dates)
            .zip(slot_periods)
            .map(|((id, date), period)| {
                let date =
                    Date::from_yyyymmdd(date).ok_or(LoadError::InvalidDate("SlotDate", date))?;
                let period =
                    Period::from_code(period).ok_or(LoadError::InvalidPeriod("SlotPeriod", period))?;

                Ok(TimeSlot::new(TimeSlotId(id), date, period))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        Ok(Instance::new(exams, rooms, time_slots)?)
    }
}

fn length(data: &DataFile<i32>, name: &'static str) -> Result<usize, LoadError> {
    let value: Option<&i32> = data.get(name);
    let value = value.copied().ok_or(LoadError::MissingParameter(name))?;

    usize::try_from(value).map_err(|_| LoadError::Negative { name, value })
}

fn int_array(
    data: &DataFile<i32>,
    name: &'static str,
    len: usize,
) -> Result<Vec<i32>, LoadError> {
    let array = data
        .array_1d::<i32>(name, len)
        .ok_or(LoadError::MissingArray { name, len })?;

    (0..len)
        .map(|index| {
            array
                .get([index])
                .copied()
                .ok_or(LoadError::MissingArray { name, len })
        })
        .collect()
}

fn unsigned_array(
    data: &DataFile<i32>,
    name: &'static str,
    len: usize,
) -> Result<Vec<u32>, LoadError> {
    int_array(data, name, len)?
        .into_iter()
        .map(|value| u32::try_from(value).map_err(|_| LoadError::Negative { name, value }))
        .collect()
}
