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

/// A small timetable of five exams, four rooms and six time slots over three days.
///
/// Mathematics needs three seats and therefore only fits in room 204 and 202; Mathematics and
/// Physics share student 102 and have to be held in different time slots.
pub fn sample_instance() -> Result<Instance, InstanceError> {
    let exams = vec![
        Exam::new(ExamId(1), "Mathematics", 3, [101, 102, 103].map(StudentId)),
        Exam::new(ExamId(2), "Physics", 2, [102, 104].map(StudentId)),
        Exam::new(ExamId(3), "Chemistry", 2, [105, 106].map(StudentId)),
        Exam::new(ExamId(4), "Biology", 1, [107].map(StudentId)),
        Exam::new(ExamId(5), "English", 2, [108, 109].map(StudentId)),
    ];

    let rooms = vec![
        Room::new(RoomId(201), 2),
        Room::new(RoomId(202), 3),
        Room::new(RoomId(203), 1),
        Room::new(RoomId(204), 4),
    ];

    let days = [(2024, 12, 10), (2024, 12, 11), (2024, 12, 12)];
    let time_slots = days
        .into_iter()
        .filter_map(|(year, month, day)| Date::new(year, month, day))
        .flat_map(|date| [(date, Period::Morning), (date, Period::Afternoon)])
        .zip(1..)
        .map(|((date, period), id)| TimeSlot::new(TimeSlotId(id), date, period))
        .collect();

    Instance::new(exams, rooms, time_slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid() {
        let instance = sample_instance().expect("the sample is valid");

        assert_eq!(instance.num_exams(), 5);
        assert_eq!(instance.rooms().len(), 4);
        assert_eq!(instance.time_slots().len(), 6);

        let last = instance.time_slot(TimeSlotId(6)).expect("six slots");
        assert_eq!(last.date.to_string(), "2024-12-12");
        assert_eq!(last.period, Period::Afternoon);
    }
}
