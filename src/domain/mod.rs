//! Storefront domain: catalog filtering, favorites, loan math and the
//! per-visitor session that ties them together.

pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod favorites;
pub mod inquiry;
pub mod loan;

pub use app_state::{InquiryRequest, Section, SessionError, SessionSnapshot, StorefrontState};
pub use catalog::{
    filter_catalog, BrandFilter, Catalog, CatalogView, FilterCriteria, FilterError, PriceRange,
    MAX_LISTED_PRICE,
};
pub use entities::{
    average_rating, DealerContacts, FuelType, Review, Rubles, Transmission, Vehicle, VehicleId,
};
pub use favorites::Favorites;
pub use inquiry::{ContactDetails, Inquiry, InquiryError, InquiryKind};
pub use loan::{
    monthly_payment, overpayment, total_paid, LoanBounds, LoanError, LoanParams, LoanQuote,
    SliderBounds,
};
