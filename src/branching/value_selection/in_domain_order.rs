use crate::basic_types::SlotRoom;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;

/// A [`ValueSelector`] which tries the values in the order in which they appear in the domain:
/// time slots in input order, and within a time slot the rooms in input order.
#[derive(Clone, Copy, Debug, Default)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(&mut self, context: &SelectionContext, exam: usize) -> Vec<SlotRoom> {
        context.domain(exam).iter().collect()
    }
}
