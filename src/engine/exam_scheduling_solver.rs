//! Houses the backtracking search which places every exam in a (time slot, room).
use std::time::Instant;

use log::debug;
use log::info;
use log::trace;

use super::forward_checking::forward_check;
use super::termination::TerminationCondition;
use super::validity::is_valid;
use super::Assignments;
use super::ConflictMatrix;
use super::Domains;
use crate::basic_types::statistic_logging::log_statistic;
use crate::basic_types::statistic_logging::log_statistic_postfix;
use crate::branching::Brancher;
use crate::branching::IndependentVariableValueBrancher;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::model::Instance;
use crate::options::SolverOptions;
use crate::results::SatisfactionResult;
use crate::results::Schedule;
use crate::scheduler_assert_advanced;
use crate::scheduler_assert_moderate;
use crate::scheduler_assert_simple;

/// The [`Brancher`] described by the [`SolverOptions`] of a solver.
pub type DefaultBrancher =
    IndependentVariableValueBrancher<Box<dyn VariableSelector>, Box<dyn ValueSelector>>;

/// Places exams one at a time, pruning the domains of conflicting exams after every placement and
/// undoing placements which lead to a dead end.
///
/// The solver holds no search state between calls; every call to
/// [`ExamSchedulingSolver::satisfy`] starts from the initial domains of the given [`Instance`].
/// Only the statistics accumulate over calls.
#[derive(Debug, Default)]
pub struct ExamSchedulingSolver {
    options: SolverOptions,
    counters: Counters,
}

impl ExamSchedulingSolver {
    pub fn new(options: SolverOptions) -> ExamSchedulingSolver {
        ExamSchedulingSolver {
            options,
            counters: Counters::default(),
        }
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// A brancher following the variable and value selection of the options of this solver.
    pub fn default_brancher(&self) -> DefaultBrancher {
        IndependentVariableValueBrancher::new(
            self.options.variable_selection.selector(),
            self.options.value_selection.selector(),
        )
    }

    /// Searches for a schedule of `instance`, stopping at the first one found.
    ///
    /// Returns [`SatisfactionResult::Unsatisfiable`] when every branch has been explored without
    /// finding a schedule, and [`SatisfactionResult::Unknown`] when `termination` stopped the
    /// search before either outcome was known.
    pub fn satisfy(
        &mut self,
        instance: &Instance,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let start_time = Instant::now();
        info!(
            "Scheduling {} exams over {} time slots and {} rooms",
            instance.num_exams(),
            instance.time_slots().len(),
            instance.rooms().len()
        );

        let (status, state) = self.search(instance, brancher, termination);

        self.counters.time_spent_in_solver += start_time.elapsed().as_millis() as u64;

        match status {
            SearchStatus::Solved => {
                let schedule = Schedule::from_assignments(&state.assignments);
                scheduler_assert_simple!(
                    schedule.is_some(),
                    "a solved search has placed every exam"
                );

                match schedule {
                    Some(schedule) => {
                        scheduler_assert_moderate!(
                            schedule.verify(instance).is_ok(),
                            "the schedule found by the search is infeasible"
                        );
                        info!("Found a schedule");
                        SatisfactionResult::Satisfiable(schedule)
                    }
                    None => SatisfactionResult::Unknown,
                }
            }
            SearchStatus::Exhausted => {
                info!("No schedule exists");
                SatisfactionResult::Unsatisfiable
            }
            SearchStatus::Stopped => {
                info!("Search stopped before a conclusion was reached");
                SatisfactionResult::Unknown
            }
        }
    }

    pub fn log_statistics(&self) {
        self.counters.log_statistics()
    }

    /// Runs the search from the initial domains and returns how it ended, together with the
    /// search state it ended in.
    pub(crate) fn search(
        &mut self,
        instance: &Instance,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> (SearchStatus, SearchState) {
        let conflicts = ConflictMatrix::build(instance.exams());
        let mut state = SearchState {
            assignments: Assignments::new(instance.num_exams()),
            domains: Domains::initialise(instance),
        };

        let mut search = Search {
            instance,
            conflicts: &conflicts,
            counters: &mut self.counters,
        };
        let status = search.backtrack(&mut state, brancher, termination, 0);

        (status, state)
    }
}

/// How a (sub)search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    /// Every exam has been placed.
    Solved,
    /// Every value of the selected exam has been tried without success.
    Exhausted,
    /// The termination condition triggered.
    Stopped,
}

/// The mutable state of the search, owned by the active call of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SearchState {
    pub(crate) assignments: Assignments,
    pub(crate) domains: Domains,
}

struct Search<'a> {
    instance: &'a Instance,
    conflicts: &'a ConflictMatrix,
    counters: &'a mut Counters,
}

impl Search<'_> {
    fn backtrack(
        &mut self,
        state: &mut SearchState,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        depth: u64,
    ) -> SearchStatus {
        self.counters.num_nodes += 1;
        self.counters.max_depth = self.counters.max_depth.max(depth);
        scheduler_assert_advanced!(state.assignments.num_assigned() as u64 == depth);

        if state.assignments.is_complete() {
            return SearchStatus::Solved;
        }

        if termination.should_stop() {
            return SearchStatus::Stopped;
        }

        let context = SelectionContext::new(
            self.instance,
            self.conflicts,
            &state.assignments,
            &state.domains,
        );
        let selected = brancher.next_exam(&context);
        scheduler_assert_simple!(
            selected.is_some(),
            "no exam was selected while {} exams are unplaced",
            state.assignments.num_exams() - state.assignments.num_assigned()
        );
        let Some(exam) = selected else {
            return SearchStatus::Exhausted;
        };
        let values = brancher.order_values(&context, exam);

        for value in values {
            if !is_valid(
                self.instance,
                self.conflicts,
                &state.assignments,
                exam,
                value,
            ) {
                self.counters.num_rejected_candidates += 1;
                trace!("Rejected {value} for exam {}", self.instance.exam(exam).id);
                continue;
            }

            debug!(
                "Placing exam {} at {value} (depth {depth})",
                self.instance.exam(exam).id
            );
            self.counters.num_decisions += 1;
            termination.decision_has_been_made();

            state.assignments.assign(exam, value);
            let snapshot = state.domains.snapshot();

            if let Err(wipeout) = forward_check(
                self.conflicts,
                &state.assignments,
                &mut state.domains,
                exam,
                value,
            ) {
                self.counters.num_domain_wipeouts += 1;
                trace!(
                    "Placing exam {} at {value} leaves no values for exam {}",
                    self.instance.exam(exam).id,
                    self.instance.exam(wipeout.exam).id
                );
                state.assignments.unassign(exam);
                state.domains.restore(snapshot);
                continue;
            }

            match self.backtrack(state, brancher, termination, depth + 1) {
                SearchStatus::Solved => return SearchStatus::Solved,
                SearchStatus::Exhausted => {
                    self.counters.num_backtracks += 1;
                    debug!(
                        "Undoing exam {} at {value} (depth {depth})",
                        self.instance.exam(exam).id
                    );
                    state.assignments.unassign(exam);
                    state.domains.restore(snapshot);
                }
                SearchStatus::Stopped => {
                    state.assignments.unassign(exam);
                    state.domains.restore(snapshot);
                    return SearchStatus::Stopped;
                }
            }
        }

        SearchStatus::Exhausted
    }
}

/// Structure responsible for storing several statistics of the search of the
/// [`ExamSchedulingSolver`].
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct Counters {
    pub(crate) num_nodes: u64,
    pub(crate) num_decisions: u64,
    num_rejected_candidates: u64,
    num_domain_wipeouts: u64,
    pub(crate) num_backtracks: u64,
    max_depth: u64,
    time_spent_in_solver: u64,
}

impl Counters {
    fn log_statistics(&self) {
        log_statistic("numberOfNodes", self.num_nodes);
        log_statistic("numberOfDecisions", self.num_decisions);
        log_statistic("numberOfRejectedCandidates", self.num_rejected_candidates);
        log_statistic("numberOfDomainWipeouts", self.num_domain_wipeouts);
        log_statistic("numberOfBacktracks", self.num_backtracks);
        log_statistic("maximumDepth", self.max_depth);
        log_statistic("timeSpentInSolverInMilliseconds", self.time_spent_in_solver);
        log_statistic_postfix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::SlotRoom;
    use crate::engine::termination::DecisionBudget;
    use crate::engine::termination::Indefinite;
    use crate::engine::test_helper::TestInstanceBuilder;
    use crate::model::RoomId;
    use crate::model::TimeSlotId;
    use crate::options::ValueSelection;
    use crate::options::VariableSelection;

    fn solve(instance: &Instance) -> SatisfactionResult {
        let mut solver = ExamSchedulingSolver::default();
        let mut brancher = solver.default_brancher();
        solver.satisfy(instance, &mut brancher, &mut Indefinite)
    }

    #[test]
    fn empty_instance_is_satisfiable() {
        let instance = TestInstanceBuilder::default().build();

        let result = solve(&instance);

        assert!(matches!(result, SatisfactionResult::Satisfiable(schedule) if schedule.num_exams() == 0));
    }

    #[test]
    fn first_value_is_taken_when_nothing_conflicts() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1])
            .room(7, 1)
            .time_slots_with_ids(&[3, 9])
            .build();

        let SatisfactionResult::Satisfiable(schedule) = solve(&instance) else {
            panic!("expected a schedule");
        };

        assert_eq!(
            schedule.placement(0),
            SlotRoom::new(TimeSlotId(3), RoomId(7))
        );
    }

    #[test]
    fn conflicting_exams_are_spread_over_time_slots() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1, 2])
            .exam(&[2, 3])
            .exam(&[3, 1])
            .room(1, 2)
            .room(2, 2)
            .time_slots(3)
            .build();

        let SatisfactionResult::Satisfiable(schedule) = solve(&instance) else {
            panic!("expected a schedule");
        };

        assert_eq!(schedule.verify(&instance), Ok(()));
        let mut time_slots = schedule
            .placements()
            .iter()
            .map(|placement| placement.time_slot)
            .collect::<Vec<_>>();
        time_slots.sort();
        time_slots.dedup();
        assert_eq!(time_slots.len(), 3);
    }

    #[test]
    fn too_few_time_slots_is_unsatisfiable() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1])
            .exam(&[1])
            .exam(&[1])
            .room(1, 1)
            .room(2, 1)
            .time_slots(2)
            .build();

        assert_eq!(solve(&instance), SatisfactionResult::Unsatisfiable);
    }

    #[test]
    fn exam_without_large_enough_room_is_unsatisfiable() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1, 2, 3])
            .room(1, 2)
            .time_slots(4)
            .build();

        assert_eq!(solve(&instance), SatisfactionResult::Unsatisfiable);
    }

    #[test]
    fn exhausted_search_restores_the_initial_state() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1])
            .exam(&[1, 2])
            .exam(&[2, 1])
            .room(1, 2)
            .room(2, 2)
            .time_slots(2)
            .build();
        let mut solver = ExamSchedulingSolver::default();
        let mut brancher = solver.default_brancher();

        let (status, state) = solver.search(&instance, &mut brancher, &mut Indefinite);

        assert_eq!(status, SearchStatus::Exhausted);
        assert_eq!(state.assignments, Assignments::new(3));
        assert_eq!(state.domains, Domains::initialise(&instance));
        assert!(solver.counters.num_backtracks > 0);
    }

    #[test]
    fn stopped_search_restores_the_initial_state() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1])
            .exam(&[2])
            .exam(&[3])
            .room(1, 1)
            .time_slots(3)
            .build();
        let mut solver = ExamSchedulingSolver::default();
        let mut brancher = solver.default_brancher();

        let (status, state) = solver.search(&instance, &mut brancher, &mut DecisionBudget::new(2));

        assert_eq!(status, SearchStatus::Stopped);
        assert_eq!(state.assignments, Assignments::new(3));
        assert_eq!(state.domains, Domains::initialise(&instance));
    }

    #[test]
    fn stopped_search_is_unknown() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1])
            .room(1, 1)
            .time_slots(1)
            .build();
        let mut solver = ExamSchedulingSolver::default();
        let mut brancher = solver.default_brancher();

        let result = solver.satisfy(&instance, &mut brancher, &mut DecisionBudget::new(0));

        assert_eq!(result, SatisfactionResult::Unknown);
    }

    #[test]
    fn every_strategy_finds_a_schedule() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1, 2])
            .exam(&[2, 3])
            .exam(&[4])
            .exam(&[1, 4])
            .room(1, 2)
            .room(2, 2)
            .time_slots(2)
            .build();

        for variable_selection in [VariableSelection::FirstFail, VariableSelection::InputOrder] {
            for value_selection in [
                ValueSelection::InDomainOrder,
                ValueSelection::LeastConstraining,
            ] {
                let mut solver = ExamSchedulingSolver::new(SolverOptions {
                    variable_selection,
                    value_selection,
                });
                let mut brancher = solver.default_brancher();

                let result = solver.satisfy(&instance, &mut brancher, &mut Indefinite);

                let SatisfactionResult::Satisfiable(schedule) = result else {
                    panic!("{variable_selection:?} with {value_selection:?} found no schedule");
                };
                assert_eq!(schedule.verify(&instance), Ok(()));
            }
        }
    }

    #[test]
    fn counters_accumulate_over_calls() {
        let instance = TestInstanceBuilder::default()
            .exam(&[1])
            .exam(&[2])
            .room(1, 1)
            .time_slots(2)
            .build();
        let mut solver = ExamSchedulingSolver::default();
        let mut brancher = solver.default_brancher();

        let _ = solver.satisfy(&instance, &mut brancher, &mut Indefinite);
        assert_eq!(solver.counters.num_decisions, 2);

        let _ = solver.satisfy(&instance, &mut brancher, &mut Indefinite);
        assert_eq!(solver.counters.num_decisions, 4);
        assert_eq!(solver.counters.num_nodes, 6);
    }
}
