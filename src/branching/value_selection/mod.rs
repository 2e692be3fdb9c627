//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait relies on [`ValueSelector::order_values`].
//!
//! Furthermore, it defines the implementations [`InDomainOrder`] and [`LeastConstrainingValue`].
//! A [`ValueSelector`] only ever returns values which are in the domain of the provided exam.

mod in_domain_order;
mod least_constraining_value;
mod value_selector;

pub use in_domain_order::InDomainOrder;
pub use least_constraining_value::LeastConstrainingValue;
pub use value_selector::ValueSelector;
