use crate::branching::SelectionContext;
use crate::branching::VariableSelector;

/// A [`VariableSelector`] which selects the first unplaced exam in the order of the input.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<usize> {
        context.unassigned_exams().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::SlotRoom;
    use crate::engine::Assignments;
    use crate::engine::ConflictMatrix;
    use crate::engine::Domains;
    use crate::engine::test_helper::TestInstanceBuilder;
    use crate::model::RoomId;
    use crate::model::TimeSlotId;

    #[test]
    fn first_unassigned_exam_is_selected() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1, 2])
            .exam(&[3])
            .exam(&[4])
            .room(1, 1)
            .room(2, 2)
            .time_slots(1)
            .build();
        let conflicts = ConflictMatrix::build(instance.exams());
        let domains = Domains::initialise(&instance);
        let mut assignments = Assignments::new(3);
        assignments.assign(0, SlotRoom::new(TimeSlotId(1), RoomId(2)));
        let context = SelectionContext::new(&instance, &conflicts, &assignments, &domains);

        assert_eq!(InputOrder.select_variable(&context), Some(1));
    }
}
