use std::fmt::Display;
use std::fmt::Formatter;

macro_rules! identity {
    ($(#[$documentation:meta])* $name:ident) => {
        $(#[$documentation])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identity!(
    /// The identity of an [`Exam`]. Identities are not positions; they need not be contiguous or
    /// start at zero.
    ExamId
);
identity!(
    /// The identity of a [`Room`].
    RoomId
);
identity!(
    /// The identity of a [`TimeSlot`].
    TimeSlotId
);
identity!(StudentId);

/// An exam which has to be given a time slot and a room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exam {
    pub id: ExamId,
    pub name: String,
    /// The number of seats the exam needs; compared against room capacities.
    pub num_students: u32,
    /// The students taking the exam. Only membership matters, the order and duplicates do not.
    pub students: Vec<StudentId>,
}

impl Exam {
    pub fn new(
        id: ExamId,
        name: impl Display,
        num_students: u32,
        students: impl IntoIterator<Item = StudentId>,
    ) -> Exam {
        Exam {
            id,
            name: name.to_string(),
            num_students,
            students: students.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub capacity: u32,
}

impl Room {
    pub fn new(id: RoomId, capacity: u32) -> Room {
        Room { id, capacity }
    }

    pub fn fits(&self, exam: &Exam) -> bool {
        self.capacity >= exam.num_students
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub date: Date,
    pub period: Period,
}

impl TimeSlot {
    pub fn new(id: TimeSlotId, date: Date, period: Period) -> TimeSlot {
        TimeSlot { id, date, period }
    }
}

/// The part of the day in which a [`TimeSlot`] takes place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    /// Decode the numeric period code used in data files: `1` is the morning, `2` the afternoon.
    pub fn from_code(code: i32) -> Option<Period> {
        match code {
            1 => Some(Period::Morning),
            2 => Some(Period::Afternoon),
            _ => None,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Morning => write!(f, "Morning"),
            Period::Afternoon => write!(f, "Afternoon"),
        }
    }
}

/// A calendar date, displayed as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Create a date, returning `None` if the day does not exist in the given month.
    pub fn new(year: u16, month: u8, day: u8) -> Option<Date> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }

        Some(Date { year, month, day })
    }

    /// Decode a date written as the integer `YYYYMMDD`, e.g. `20241210`.
    pub fn from_yyyymmdd(value: i32) -> Option<Date> {
        if value < 0 {
            return None;
        }

        let year = u16::try_from(value / 10_000).ok()?;
        let month = u8::try_from((value / 100) % 100).ok()?;
        let day = u8::try_from(value % 100).ok()?;

        Date::new(year, month, day)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
