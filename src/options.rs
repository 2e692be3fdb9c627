//! Options which determine how the [`Solver`](crate::Solver) searches.

use clap::ValueEnum;

use crate::branching::FirstFail;
use crate::branching::InDomainOrder;
use crate::branching::InputOrder;
use crate::branching::LeastConstrainingValue;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;

/// Options for the [`Solver`](crate::Solver) which determine how it behaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// Which exam to place next.
    pub variable_selection: VariableSelection,
    /// In which order to try the values of the selected exam.
    pub value_selection: ValueSelection,
}

/// The available [`VariableSelector`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum VariableSelection {
    /// The unplaced exam with the fewest remaining values, see [`FirstFail`].
    #[default]
    FirstFail,
    /// The first unplaced exam in input order, see [`InputOrder`].
    InputOrder,
}

impl VariableSelection {
    pub fn selector(self) -> Box<dyn VariableSelector> {
        match self {
            VariableSelection::FirstFail => Box::new(FirstFail),
            VariableSelection::InputOrder => Box::new(InputOrder),
        }
    }
}

/// The available [`ValueSelector`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ValueSelection {
    /// The values in domain order, see [`InDomainOrder`].
    #[default]
    InDomainOrder,
    /// The values which rule out the fewest options first, see [`LeastConstrainingValue`].
    LeastConstraining,
}

impl ValueSelection {
    pub fn selector(self) -> Box<dyn ValueSelector> {
        match self {
            ValueSelection::InDomainOrder => Box::new(InDomainOrder),
            ValueSelection::LeastConstraining => Box::new(LeastConstrainingValue),
        }
    }
}
