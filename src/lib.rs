//! State and pricing core of the АвтоМир storefront.
//!
//! The host application owns rendering; this crate owns the data the pages
//! show and the commands the visitor's clicks turn into.

pub mod domain;
pub mod infra;
pub mod util;

pub use domain::{
    filter_catalog, monthly_payment, overpayment, Catalog, FilterCriteria, StorefrontState,
    Vehicle,
};
pub use infra::showroom::ShowroomError;

/// Session over the built-in showroom catalog.
pub fn showroom_session() -> Result<StorefrontState, ShowroomError> {
    infra::showroom::catalog().map(StorefrontState::new)
}
