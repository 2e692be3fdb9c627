mod assignments;
mod conflict_matrix;
mod domains;
mod exam_scheduling_solver;
mod forward_checking;
pub(crate) mod termination;
pub(crate) mod test_helper;
mod validity;

pub use assignments::Assignments;
pub use conflict_matrix::ConflictMatrix;
pub use domains::Domain;
pub use domains::Domains;
pub use exam_scheduling_solver::DefaultBrancher;
pub use exam_scheduling_solver::ExamSchedulingSolver;
#[cfg(test)]
pub(crate) use exam_scheduling_solver::SearchStatus;
