use std::fmt::Display;
use std::fmt::Formatter;

use crate::model::RoomId;
use crate::model::TimeSlotId;

/// A single value of an exam's domain: the exam takes place in `room` during `time_slot`.
///
/// Both fields are identities, never positions in the room or time slot collections; resolve them
/// through [`crate::model::Instance::room`] and [`crate::model::Instance::time_slot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotRoom {
    pub time_slot: TimeSlotId,
    pub room: RoomId,
}

impl SlotRoom {
    pub fn new(time_slot: TimeSlotId, room: RoomId) -> SlotRoom {
        SlotRoom { time_slot, room }
    }
}

impl Display for SlotRoom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(slot {}, room {})", self.time_slot, self.room)
    }
}
