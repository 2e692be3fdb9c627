use log::trace;

use crate::basic_types::SlotRoom;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;

/// A [`ValueSelector`] which first tries the values that rule out the fewest options of the
/// unplaced exams sharing a student with the exam being placed.
///
/// Placing an exam in a time slot rules out every value in that time slot for the exams it
/// conflicts with, so the score of a value is the number of values with the same time slot in the
/// domains of those exams. Values with equal scores keep their order in the domain.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeastConstrainingValue;

impl LeastConstrainingValue {
    fn num_ruled_out(context: &SelectionContext, exam: usize, value: SlotRoom) -> usize {
        context
            .unassigned_conflicting_exams(exam)
            .map(|other| {
                context
                    .domain(other)
                    .iter()
                    .filter(|option| option.time_slot == value.time_slot)
                    .count()
            })
            .sum()
    }
}

impl ValueSelector for LeastConstrainingValue {
    fn order_values(&mut self, context: &SelectionContext, exam: usize) -> Vec<SlotRoom> {
        let mut scored = context
            .domain(exam)
            .iter()
            .map(|value| (Self::num_ruled_out(context, exam, value), value))
            .collect::<Vec<_>>();

        // Stable, so ties keep the domain order.
        scored.sort_by_key(|&(score, _)| score);
        trace!("Value scores for exam {exam}: {scored:?}");

        scored.into_iter().map(|(_, value)| value).collect()
    }
}
