//! Contains structures and traits to define the decision making procedure of the solver.
//!
//! A decision consists of two parts:
//! 1. Which exam to place next; a [`VariableSelector`] makes this choice, for example
//!    [`FirstFail`] picks the exam with the fewest values left in its domain.
//! 2. In which order to try the values of that exam; a [`ValueSelector`] makes this choice, for
//!    example [`LeastConstrainingValue`] tries the values which prune the fewest options of other
//!    exams first.
//!
//! A [`Brancher`] combines both; [`IndependentVariableValueBrancher`] does so by consulting a
//! variable selector and a value selector which know nothing of each other.

mod brancher;
pub mod branchers;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use branchers::IndependentVariableValueBrancher;
pub use selection_context::SelectionContext;
pub use value_selection::*;
pub use variable_selection::*;
