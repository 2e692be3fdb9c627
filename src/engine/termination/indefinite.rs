use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers. The solver searches until it either finds a
/// schedule or proves that none exists.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
