//! Leveled assertions for internal invariants of the search.
//!
//! A violated invariant is a defect in the scheduler, never a recoverable condition, so these
//! macros panic. Cheap checks run at [`SCHEDULER_ASSERT_SIMPLE`] in every build; the expensive
//! ones (e.g. re-verifying a complete schedule) only run in tests or with the `debug-checks`
//! feature enabled.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const SCHEDULER_ASSERT_LEVEL_DEFINITION: u8 = SCHEDULER_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const SCHEDULER_ASSERT_LEVEL_DEFINITION: u8 = SCHEDULER_ASSERT_EXTREME;

pub const SCHEDULER_ASSERT_SIMPLE: u8 = 1;
pub const SCHEDULER_ASSERT_MODERATE: u8 = 2;
pub const SCHEDULER_ASSERT_ADVANCED: u8 = 3;
pub const SCHEDULER_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_scheduler_assert_warning_message {
    () => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_MODERATE {
            log::warn!("Potential performance degradation: the scheduler assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! scheduler_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::SCHEDULER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SCHEDULER_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
