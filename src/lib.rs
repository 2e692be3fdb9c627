//! # Exam scheduler
//! Assigns every exam of a timetabling [`Instance`](model::Instance) to a (time slot, room) such
//! that each room is large enough for its exam, no room hosts two exams in one time slot and no
//! student has two exams in one time slot.
//!
//! The [`Solver`] runs a depth-first backtracking search. It places the exam with the fewest
//! remaining values first, prunes the chosen value from the domains of every exam sharing a
//! student with it, and undoes placements which lead to a dead end. It stops at the first schedule
//! it finds.
//!
//! ```rust
//! # use exam_scheduler::model::sample_instance;
//! # use exam_scheduler::results::SatisfactionResult;
//! # use exam_scheduler::termination::Indefinite;
//! # use exam_scheduler::Solver;
//! let instance = sample_instance().expect("the sample is well formed");
//!
//! let mut solver = Solver::default();
//! let mut brancher = solver.default_brancher();
//! let result = solver.satisfy(&instance, &mut brancher, &mut Indefinite);
//!
//! if let SatisfactionResult::Satisfiable(schedule) = result {
//!     assert!(schedule.verify(&instance).is_ok());
//! }
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub mod branching;
pub(crate) mod engine;
pub mod model;
pub mod options;
pub mod results;
pub mod runner;

#[cfg(test)]
mod tests;

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when it is not yet known whether a schedule exists.
    pub use crate::engine::termination::*;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod statistics {
    //! Contains functions which configure how the statistics of the [`Solver`] are written.
    pub use crate::basic_types::statistic_logging::configure;
    pub use crate::basic_types::statistic_logging::log_statistic;
    pub use crate::basic_types::statistic_logging::log_statistic_postfix;
    pub use crate::basic_types::statistic_logging::should_log_statistics;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod search {
    //! The state of the search which the selectors of [`branching`](crate::branching) inspect.
    pub use crate::basic_types::SlotRoom;
    pub use crate::engine::Assignments;
    pub use crate::engine::ConflictMatrix;
    pub use crate::engine::Domain;
    pub use crate::engine::Domains;
}

pub use crate::engine::DefaultBrancher;
pub use crate::engine::ExamSchedulingSolver as Solver;
