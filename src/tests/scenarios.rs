#![cfg(test)]
use crate::engine::test_helper::TestInstanceBuilder;
use crate::model::sample_instance;
use crate::model::ExamId;
use crate::model::Instance;
use crate::model::RoomId;
use crate::model::TimeSlotId;
use crate::options::SolverOptions;
use crate::options::ValueSelection;
use crate::options::VariableSelection;
use crate::results::SatisfactionResult;
use crate::results::Schedule;
use crate::termination::Indefinite;
use crate::Solver;

fn solve_with(instance: &Instance, options: SolverOptions) -> SatisfactionResult {
    let mut solver = Solver::new(options);
    let mut brancher = solver.default_brancher();
    solver.satisfy(instance, &mut brancher, &mut Indefinite)
}

fn solve(instance: &Instance) -> SatisfactionResult {
    solve_with(instance, SolverOptions::default())
}

fn expect_schedule(instance: &Instance) -> Schedule {
    match solve(instance) {
        SatisfactionResult::Satisfiable(schedule) => {
            assert_eq!(schedule.verify(instance), Ok(()));
            schedule
        }
        other => panic!("expected a schedule, got {other:?}"),
    }
}

#[test]
fn sample_timetable_is_scheduled() {
    let instance = sample_instance().expect("valid sample");

    let schedule = expect_schedule(&instance);

    assert_eq!(schedule.num_exams(), 5);

    let mathematics = schedule.placement(0);
    let physics = schedule.placement(1);
    assert_ne!(mathematics.time_slot, physics.time_slot);
    assert!([RoomId(202), RoomId(204)].contains(&mathematics.room));
}

#[test]
fn sample_timetable_is_scheduled_by_every_strategy() {
    let instance = sample_instance().expect("valid sample");

    for variable_selection in [VariableSelection::FirstFail, VariableSelection::InputOrder] {
        for value_selection in [
            ValueSelection::InDomainOrder,
            ValueSelection::LeastConstraining,
        ] {
            let result = solve_with(
                &instance,
                SolverOptions {
                    variable_selection,
                    value_selection,
                },
            );

            let SatisfactionResult::Satisfiable(schedule) = result else {
                panic!("{variable_selection:?} with {value_selection:?} found no schedule");
            };
            assert_eq!(schedule.verify(&instance), Ok(()));
        }
    }
}

#[test]
fn exams_sharing_a_student_need_as_many_time_slots() {
    let instance = TestInstanceBuilder::default()
        .exam(&[1])
        .exam(&[1])
        .exam(&[1])
        .room(1, 1)
        .time_slots(3)
        .build();

    let schedule = expect_schedule(&instance);

    let mut time_slots = schedule
        .placements()
        .iter()
        .map(|placement| placement.time_slot)
        .collect::<Vec<_>>();
    time_slots.sort();
    assert_eq!(time_slots, vec![TimeSlotId(1), TimeSlotId(2), TimeSlotId(3)]);
}

#[test]
fn exams_sharing_a_student_with_too_few_time_slots_are_infeasible() {
    let instance = TestInstanceBuilder::default()
        .exam(&[1])
        .exam(&[1])
        .exam(&[1])
        .room(1, 1)
        .room(2, 1)
        .room(3, 1)
        .time_slots(2)
        .build();

    assert_eq!(solve(&instance), SatisfactionResult::Unsatisfiable);
}

#[test]
fn exam_larger_than_every_room_is_infeasible() {
    let instance = TestInstanceBuilder::default()
        .exam(&[1])
        .exam(&[2, 3, 4, 5])
        .room(1, 3)
        .room(2, 2)
        .time_slots(5)
        .build();

    assert_eq!(solve(&instance), SatisfactionResult::Unsatisfiable);
}

#[test]
fn exam_fitting_exactly_is_placed() {
    let instance = TestInstanceBuilder::default()
        .exam(&[1, 2, 3])
        .room(1, 2)
        .room(2, 3)
        .time_slots(1)
        .build();

    let schedule = expect_schedule(&instance);

    assert_eq!(schedule.placement(0).room, RoomId(2));
}

#[test]
fn single_room_hosts_one_exam_per_time_slot() {
    let instance = TestInstanceBuilder::default()
        .exam(&[1])
        .exam(&[2])
        .exam(&[3])
        .room(1, 5)
        .time_slots(3)
        .build();

    let schedule = expect_schedule(&instance);
    let mut time_slots = schedule
        .placements()
        .iter()
        .map(|placement| placement.time_slot)
        .collect::<Vec<_>>();
    time_slots.sort();
    time_slots.dedup();
    assert_eq!(time_slots.len(), 3);

    let crowded = TestInstanceBuilder::default()
        .exam(&[1])
        .exam(&[2])
        .exam(&[3])
        .room(1, 5)
        .time_slots(2)
        .build();
    assert_eq!(solve(&crowded), SatisfactionResult::Unsatisfiable);
}

#[test]
fn identities_need_not_be_contiguous() {
    let instance = TestInstanceBuilder::default()
        .exam(&[1, 2])
        .exam(&[2])
        .room(900, 1)
        .room(17, 2)
        .time_slots_with_ids(&[40, 7])
        .build();

    let schedule = expect_schedule(&instance);

    for placement in schedule.placements() {
        assert!(instance.time_slot(placement.time_slot).is_some());
        assert!(instance.room(placement.room).is_some());
    }
    assert_eq!(schedule.placement(0).room, RoomId(17));
}

#[test]
fn rerunning_gives_the_same_verdict() {
    let feasible = sample_instance().expect("valid sample");
    let infeasible = TestInstanceBuilder::default()
        .exam(&[1, 2])
        .exam(&[2, 3])
        .exam(&[3, 1])
        .room(1, 2)
        .time_slots(2)
        .build();

    let mut solver = Solver::default();
    let mut brancher = solver.default_brancher();
    for _ in 0..2 {
        let first = solver.satisfy(&feasible, &mut brancher, &mut Indefinite);
        assert!(matches!(first, SatisfactionResult::Satisfiable(_)));

        let second = solver.satisfy(&infeasible, &mut brancher, &mut Indefinite);
        assert_eq!(second, SatisfactionResult::Unsatisfiable);
    }
}

#[test]
fn sample_data_file_matches_the_built_in_sample() {
    let data = dzn_rs::parse::<i32>(include_str!("../../instances/sample.dzn").as_bytes())
        .expect("valid dzn");
    let loaded = Instance::from_dzn(&data).expect("valid instance");
    let sample = sample_instance().expect("valid sample");

    assert_eq!(loaded.num_exams(), sample.num_exams());
    for (loaded, sample) in loaded.exams().iter().zip(sample.exams()) {
        assert_eq!(loaded.id, sample.id);
        assert_eq!(loaded.num_students, sample.num_students);
        assert_eq!(loaded.students, sample.students);
    }
    assert_eq!(loaded.rooms(), sample.rooms());
    assert_eq!(loaded.time_slots(), sample.time_slots());

    let schedule = expect_schedule(&loaded);
    assert_eq!(schedule.num_exams(), 5);
    assert_eq!(loaded.exam(0).id, ExamId(1));
}
