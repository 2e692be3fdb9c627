use log::warn;

use crate::basic_types::SlotRoom;
use crate::model::Instance;
use crate::scheduler_assert_eq_simple;

/// The (time slot, room) pairs which are still considered feasible for a single exam.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Domain {
    values: Vec<SlotRoom>,
}

impl Domain {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: SlotRoom) -> bool {
        self.values.contains(&value)
    }

    pub fn iter(&self) -> impl Iterator<Item = SlotRoom> + '_ {
        self.values.iter().copied()
    }

    /// Removes `value` while keeping the order of the remaining values. Returns whether the value
    /// was present.
    pub(crate) fn remove(&mut self, value: SlotRoom) -> bool {
        match self.values.iter().position(|&other| other == value) {
            Some(index) => {
                let _ = self.values.remove(index);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<SlotRoom> for Domain {
    fn from_iter<T: IntoIterator<Item = SlotRoom>>(iter: T) -> Self {
        Domain {
            values: iter.into_iter().collect(),
        }
    }
}

/// The [`Domain`] of every exam, indexed by exam position.
///
/// Domains only shrink during the search. Before a value is tried the solver takes a full copy
/// through [`Domains::snapshot`] and puts it back with [`Domains::restore`] when the value fails,
/// so pruning never leaks into sibling branches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domains {
    domains: Vec<Domain>,
}

impl Domains {
    /// The initial domain of every exam: all pairs of a time slot and a room large enough for the
    /// exam. Values are ordered by time slot first and room second, both in input order.
    pub fn initialise(instance: &Instance) -> Domains {
        let domains = instance
            .exams()
            .iter()
            .map(|exam| {
                let domain = instance
                    .time_slots()
                    .iter()
                    .flat_map(|time_slot| {
                        instance
                            .rooms()
                            .iter()
                            .filter(|room| room.fits(exam))
                            .map(|room| SlotRoom::new(time_slot.id, room.id))
                    })
                    .collect::<Domain>();

                if domain.is_empty() {
                    warn!(
                        "Exam {} needs {} seats which no room provides",
                        exam.id, exam.num_students
                    );
                }

                domain
            })
            .collect();

        Domains { domains }
    }

    pub fn num_exams(&self) -> usize {
        self.domains.len()
    }

    pub fn get(&self, exam: usize) -> &Domain {
        &self.domains[exam]
    }

    /// Removes `value` from the domain of `exam`. Returns whether the value was present.
    pub(crate) fn remove_value(&mut self, exam: usize, value: SlotRoom) -> bool {
        self.domains[exam].remove(value)
    }

    /// A copy of the current domains to return to with [`Domains::restore`].
    pub(crate) fn snapshot(&self) -> Domains {
        self.clone()
    }

    /// Resets every domain to the state captured by `snapshot`.
    pub(crate) fn restore(&mut self, snapshot: Domains) {
        scheduler_assert_eq_simple!(self.domains.len(), snapshot.domains.len());

        *self = snapshot;
    }
}
