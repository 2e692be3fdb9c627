mod slot_room;
pub mod statistic_logging;

pub use slot_room::SlotRoom;
