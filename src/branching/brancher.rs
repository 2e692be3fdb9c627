use crate::basic_types::SlotRoom;
use crate::branching::SelectionContext;

/// A trait for definining a branching strategy: which exam to place next and in which order to
/// try its values.
pub trait Brancher {
    /// Returns the position of the next exam to place, or `None` if every exam has been placed.
    fn next_exam(&mut self, context: &SelectionContext) -> Option<usize>;

    /// Returns the values of the domain of `exam` in the order in which they should be tried.
    /// The result is a permutation of the current domain of `exam`.
    fn order_values(&mut self, context: &SelectionContext, exam: usize) -> Vec<SlotRoom>;
}

impl<T: Brancher + ?Sized> Brancher for Box<T> {
    fn next_exam(&mut self, context: &SelectionContext) -> Option<usize> {
        (**self).next_exam(context)
    }

    fn order_values(&mut self, context: &SelectionContext, exam: usize) -> Vec<SlotRoom> {
        (**self).order_values(context, exam)
    }
}
