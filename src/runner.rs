//! The command-line front end of the scheduler: reads an instance, runs the [`Solver`] and prints
//! the outcome.

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use log::info;
use log::LevelFilter;

use crate::model::sample_instance;
use crate::model::Instance;
use crate::options::SolverOptions;
use crate::options::ValueSelection;
use crate::options::VariableSelection;
use crate::print_scheduler_assert_warning_message;
use crate::results::SatisfactionResult;
use crate::results::Schedule;
use crate::statistics::configure;
use crate::termination::Combinator;
use crate::termination::DecisionBudget;
use crate::termination::OsSignal;
use crate::termination::TimeBudget;
use crate::Solver;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The instance to schedule, formatted as a MiniZinc data (*.dzn) file.
    ///
    /// If no path is provided, the built-in sample timetable is used.
    pub instance: Option<PathBuf>,

    /// Log the decisions of the search.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Defaults to `solve` with default arguments.
    #[command(subcommand)]
    pub command: Option<Action>,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Action {
    /// Search for a schedule of the given instance.
    Solve(SolveArgs),

    /// Only check that the given instance is well formed.
    Validate,
}

#[derive(Clone, Debug, Default, clap::Args)]
pub struct SolveArgs {
    /// Which exam to place next.
    #[arg(long = "variable-selection", value_enum, default_value_t)]
    pub variable_selection: VariableSelection,

    /// In which order to try the values of the selected exam.
    #[arg(long = "value-selection", value_enum, default_value_t)]
    pub value_selection: ValueSelection,

    /// The number of seconds the solver is allowed to run.
    #[arg(short = 't', long = "time-out")]
    pub time_out: Option<u64>,

    /// The number of exam placements the solver is allowed to make.
    #[arg(short = 'd', long = "decision-limit")]
    pub decision_limit: Option<u64>,

    /// Print the statistics of the search.
    #[arg(short = 's', long = "statistics")]
    pub statistics: bool,
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let args = Cli::parse();

    let level_filter = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    print_scheduler_assert_warning_message!();

    let instance = match &args.instance {
        Some(path) => read_instance(path)?,
        None => sample_instance().context("The built-in sample is malformed")?,
    };

    match args.command.unwrap_or_else(|| Action::Solve(SolveArgs::default())) {
        Action::Solve(solve_args) => solve(&instance, solve_args),
        Action::Validate => {
            println!(
                "The instance is valid: {} exams, {} rooms, {} time slots.",
                instance.num_exams(),
                instance.rooms().len(),
                instance.time_slots().len()
            );
            Ok(())
        }
    }
}

/// Reads and validates the DZN instance at `path`.
pub fn read_instance(path: &Path) -> anyhow::Result<Instance> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;

    let data = dzn_rs::parse::<i32>(data.as_bytes())
        .with_context(|| format!("Failed to parse DZN from {}", path.display()))?;

    Instance::from_dzn(&data).with_context(|| format!("Invalid instance in {}", path.display()))
}

pub fn solve(instance: &Instance, args: SolveArgs) -> anyhow::Result<()> {
    if args.statistics {
        configure("%%%mzn-stat:", Some("%%%mzn-stat-end"), None);
    }

    let mut solver = Solver::new(SolverOptions {
        variable_selection: args.variable_selection,
        value_selection: args.value_selection,
    });
    let mut brancher = solver.default_brancher();

    let mut termination = Combinator::new(
        OsSignal::install().context("Failed to install the signal handler")?,
        Combinator::new(
            args.time_out
                .map(|seconds| TimeBudget::starting_now(Duration::from_secs(seconds))),
            args.decision_limit.map(DecisionBudget::new),
        ),
    );

    let result = solver.satisfy(instance, &mut brancher, &mut termination);
    solver.log_statistics();

    let mut stdout = std::io::stdout().lock();
    write_result(&mut stdout, instance, &result).context("Failed to write the schedule")?;

    Ok(())
}

/// Writes the outcome of the search: one line per exam for a schedule, a single line otherwise.
pub fn write_result(
    out: &mut impl Write,
    instance: &Instance,
    result: &SatisfactionResult,
) -> std::io::Result<()> {
    match result {
        SatisfactionResult::Satisfiable(schedule) => write_schedule(out, instance, schedule),
        SatisfactionResult::Unsatisfiable => writeln!(out, "No feasible schedule found."),
        SatisfactionResult::Unknown => writeln!(out, "UNKNOWN"),
    }
}

/// Writes one line per exam, in the order of the exams of `instance`. Time slots and rooms are
/// looked up by identity.
pub fn write_schedule(
    out: &mut impl Write,
    instance: &Instance,
    schedule: &Schedule,
) -> std::io::Result<()> {
    for (exam, placement) in instance.exams().iter().zip(schedule.placements()) {
        let time_slot = instance.time_slot(placement.time_slot);
        let room = instance.room(placement.room);

        let (Some(time_slot), Some(room)) = (time_slot, room) else {
            writeln!(
                out,
                "Exam {} ({}) is placed outside of the instance at {placement}",
                exam.id, exam.name
            )?;
            continue;
        };

        writeln!(
            out,
            "Exam {} ({}) scheduled on \"{}\", {} in Room {}",
            exam.id, exam.name, time_slot.date, time_slot.period, room.id
        )?;
    }

    Ok(())
}
