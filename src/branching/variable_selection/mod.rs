//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait relies on [`VariableSelector::select_variable`].
//!
//! Furthermore, it defines the implementations [`FirstFail`] and [`InputOrder`]. A
//! [`VariableSelector`] only ever selects exams which have not been placed yet.

mod first_fail;
mod input_order;
mod variable_selector;

pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use variable_selector::VariableSelector;
