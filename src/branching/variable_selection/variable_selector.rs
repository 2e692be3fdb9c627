use crate::branching::SelectionContext;

/// A trait containing the interface for [`VariableSelector`]s, specifying the method required for
/// selecting the next exam to place.
pub trait VariableSelector {
    /// Determines which unplaced exam to place next, returning its position.
    ///
    /// Returns `None` only if every exam has been placed. An exam with an empty domain can still
    /// be selected; the search then fails at that exam and backtracks.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<usize>;
}

impl<T: VariableSelector + ?Sized> VariableSelector for Box<T> {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<usize> {
        (**self).select_variable(context)
    }
}
