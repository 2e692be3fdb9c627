use fnv::FnvHashSet;

use crate::model::Exam;
use crate::scheduler_assert_extreme;
use crate::scheduler_assert_moderate;

/// The symmetric relation over exam positions which holds when two exams share at least one
/// student. Built once before the search starts and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictMatrix {
    num_exams: usize,
    /// Row-major `num_exams x num_exams` matrix; the diagonal is always `false`.
    conflicts: Vec<bool>,
}

impl ConflictMatrix {
    /// Computes the conflicts between every pair of exams.
    ///
    /// The students of exam `i` are put in a set once, after which every exam `j > i` probes it;
    /// this takes `O(n^2 + n * s)` time for `n` exams of at most `s` students.
    pub fn build(exams: &[Exam]) -> ConflictMatrix {
        let num_exams = exams.len();
        let mut conflicts = vec![false; num_exams * num_exams];

        for (i, exam) in exams.iter().enumerate() {
            let students = exam.students.iter().collect::<FnvHashSet<_>>();

            for (j, other) in exams.iter().enumerate().skip(i + 1) {
                if other
                    .students
                    .iter()
                    .any(|student| students.contains(student))
                {
                    conflicts[i * num_exams + j] = true;
                    conflicts[j * num_exams + i] = true;
                }
            }
        }

        let matrix = ConflictMatrix {
            num_exams,
            conflicts,
        };
        scheduler_assert_extreme!((0..num_exams).all(|i| {
            matrix
                .conflicting_exams(i)
                .all(|j| j != i && matrix.conflicts[j * num_exams + i])
        }));

        matrix
    }

    pub fn num_exams(&self) -> usize {
        self.num_exams
    }

    /// Whether the exams at positions `exam` and `other` share a student.
    pub fn conflicts(&self, exam: usize, other: usize) -> bool {
        scheduler_assert_moderate!(
            exam != other,
            "an exam is never compared with itself, exam {exam}"
        );

        self.conflicts[exam * self.num_exams + other]
    }

    /// The positions of the exams sharing a student with `exam`, in increasing order.
    pub fn conflicting_exams(&self, exam: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.conflicts[exam * self.num_exams..(exam + 1) * self.num_exams];

        row.iter()
            .enumerate()
            .filter_map(|(other, &conflicts)| conflicts.then_some(other))
    }

    /// The number of exams sharing a student with `exam`.
    pub fn degree(&self, exam: usize) -> usize {
        self.conflicting_exams(exam).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExamId;
    use crate::model::StudentId;

    fn exams(students: &[&[u32]]) -> Vec<Exam> {
        students
            .iter()
            .zip(1..)
            .map(|(students, id)| {
                Exam::new(
                    ExamId(id),
                    format!("Exam {id}"),
                    students.len() as u32,
                    students.iter().copied().map(StudentId),
                )
            })
            .collect()
    }

    #[test]
    fn shared_students_conflict() {
        let exams = exams(&[&[101, 102, 103], &[102, 104], &[105, 106], &[107], &[108, 109]]);
        let matrix = ConflictMatrix::build(&exams);

        assert!(matrix.conflicts(0, 1));
        assert!(matrix.conflicts(1, 0));
        assert!(!matrix.conflicts(0, 2));
        assert!(!matrix.conflicts(3, 4));
        assert_eq!(matrix.conflicting_exams(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(matrix.degree(2), 0);
    }

    #[test]
    fn relation_is_symmetric_and_irreflexive() {
        let exams = exams(&[&[1, 2], &[2, 3], &[3, 1], &[4], &[1, 4]]);
        let matrix = ConflictMatrix::build(&exams);

        for i in 0..exams.len() {
            assert!(matrix.conflicting_exams(i).all(|other| other != i));

            for j in (0..exams.len()).filter(|&j| j != i) {
                assert_eq!(matrix.conflicts(i, j), matrix.conflicts(j, i));
            }
        }
    }

    #[test]
    fn duplicate_students_do_not_matter() {
        let exams = exams(&[&[1, 1, 1], &[2, 2], &[2, 1]]);
        let matrix = ConflictMatrix::build(&exams);

        assert!(!matrix.conflicts(0, 1));
        assert!(matrix.conflicts(0, 2));
        assert!(matrix.conflicts(1, 2));
    }

    #[test]
    fn no_exams_no_conflicts() {
        let matrix = ConflictMatrix::build(&[]);

        assert_eq!(matrix.num_exams(), 0);
    }
}
