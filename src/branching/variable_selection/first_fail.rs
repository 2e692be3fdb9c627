use crate::branching::SelectionContext;
use crate::branching::VariableSelector;

/// A [`VariableSelector`] which selects the unplaced exam with the smallest domain, also known as
/// the minimum-remaining-values heuristic. Ties go to the exam with the lowest position.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFail;

impl VariableSelector for FirstFail {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<usize> {
        // `min_by_key` keeps the first of several minimal elements.
        context
            .unassigned_exams()
            .min_by_key(|&exam| context.get_size_of_domain(exam))
    }
}
