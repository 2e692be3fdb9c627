use crate::basic_types::SlotRoom;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;

/// An implementation of a [`Brancher`] which simply uses a single [`VariableSelector`] and a
/// single [`ValueSelector`] independently of one another.
#[derive(Debug, Clone, Copy)]
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    /// The [`VariableSelector`] of the [`Brancher`], determines which exam to place next.
    variable_selector: VariableSelect,
    /// The [`ValueSelector`] of the [`Brancher`], determines in which order the values of the
    /// selected exam are tried.
    value_selector: ValueSelect,
}

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    fn next_exam(&mut self, context: &SelectionContext) -> Option<usize> {
        self.variable_selector.select_variable(context)
    }

    fn order_values(&mut self, context: &SelectionContext, exam: usize) -> Vec<SlotRoom> {
        self.value_selector.order_values(context, exam)
    }
}
