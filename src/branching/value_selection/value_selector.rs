use crate::basic_types::SlotRoom;
use crate::branching::SelectionContext;

/// A trait containing the interface for [`ValueSelector`]s, specifying the method required for
/// ordering the values of the exam which is about to be placed.
pub trait ValueSelector {
    /// Returns the values of the domain of `exam` in the order in which they should be tried. The
    /// result contains every value of the domain exactly once.
    fn order_values(&mut self, context: &SelectionContext, exam: usize) -> Vec<SlotRoom>;
}

impl<T: ValueSelector + ?Sized> ValueSelector for Box<T> {
    fn order_values(&mut self, context: &SelectionContext, exam: usize) -> Vec<SlotRoom> {
        (**self).order_values(context, exam)
    }
}
