use crate::engine::Assignments;
use crate::engine::ConflictMatrix;
use crate::engine::Domain;
use crate::engine::Domains;
use crate::model::Exam;
use crate::model::Instance;

/// A read-only view of the state of the search, handed to the selectors.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    instance: &'a Instance,
    conflicts: &'a ConflictMatrix,
    assignments: &'a Assignments,
    domains: &'a Domains,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        instance: &'a Instance,
        conflicts: &'a ConflictMatrix,
        assignments: &'a Assignments,
        domains: &'a Domains,
    ) -> Self {
        SelectionContext {
            instance,
            conflicts,
            assignments,
            domains,
        }
    }

    pub fn num_exams(&self) -> usize {
        self.assignments.num_exams()
    }

    pub fn exam(&self, exam: usize) -> &'a Exam {
        self.instance.exam(exam)
    }

    pub fn is_assigned(&self, exam: usize) -> bool {
        self.assignments.is_assigned(exam)
    }

    /// The positions of the exams which have not been placed, in increasing order.
    pub fn unassigned_exams(&self) -> impl Iterator<Item = usize> + 'a {
        let assignments = self.assignments;
        assignments.unassigned_exams()
    }

    pub fn domain(&self, exam: usize) -> &'a Domain {
        self.domains.get(exam)
    }

    pub fn get_size_of_domain(&self, exam: usize) -> usize {
        self.domains.get(exam).len()
    }

    /// The unplaced exams which share a student with `exam`.
    pub fn unassigned_conflicting_exams(&self, exam: usize) -> impl Iterator<Item = usize> + 'a {
        let assignments = self.assignments;
        let conflicts = self.conflicts;

        conflicts
            .conflicting_exams(exam)
            .filter(move |&other| !assignments.is_assigned(other))
    }
}
