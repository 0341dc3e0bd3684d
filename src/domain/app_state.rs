use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::catalog::{BrandFilter, Catalog, CatalogView, FilterCriteria, FilterError, PriceRange};
use super::entities::{Rubles, Vehicle, VehicleId};
use super::favorites::Favorites;
use super::inquiry::{ContactDetails, Inquiry, InquiryError, InquiryKind};
use super::loan::{LoanError, LoanParams, LoanQuote};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("vehicle {0} is not in the catalog")]
    UnknownVehicle(VehicleId),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Loan(#[from] LoanError),
    #[error(transparent)]
    Inquiry(#[from] InquiryError),
}

/// Storefront page the visitor is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Catalog,
    Favorites,
    Loan,
    About,
    Reviews,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Catalog,
        Section::Favorites,
        Section::Loan,
        Section::About,
        Section::Reviews,
        Section::Contacts,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Catalog => "Каталог",
            Section::Favorites => "Избранное",
            Section::Loan => "Кредит",
            Section::About => "О нас",
            Section::Reviews => "Отзывы",
            Section::Contacts => "Контакты",
        }
    }
}

/// Which storefront button raised the inquiry.
#[derive(Clone, Debug, PartialEq)]
pub enum InquiryRequest {
    General,
    VehicleCallback(VehicleId),
    LoanApplication,
}

/// Session state for one visitor. Derived views are recomputed on every read.
///
/// Fields are private so every change goes through the validating commands.
#[derive(Clone, Debug, Default)]
pub struct StorefrontState {
    catalog: Catalog,
    section: Section,
    criteria: FilterCriteria,
    favorites: Favorites,
    loan: LoanParams,
    /// Validated requests waiting for the host to pick them up.
    inquiries: Vec<Inquiry>,
}

impl StorefrontState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn loan(&self) -> &LoanParams {
        &self.loan
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn open_section(&mut self, section: Section) {
        debug!(?section, "section opened");
        self.section = section;
    }

    pub fn select_brand(&mut self, brand: BrandFilter) {
        debug!(?brand, "brand filter changed");
        self.criteria.brand = brand;
    }

    pub fn set_price_range(&mut self, min: Rubles, max: Rubles) -> Result<(), SessionError> {
        match PriceRange::new(min, max) {
            Ok(range) => {
                debug!(min, max, "price range changed");
                self.criteria.price = range;
                Ok(())
            }
            Err(err) => {
                warn!(min, max, "rejected price range: {err}");
                Err(err.into())
            }
        }
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn filtered_vehicles(&self) -> CatalogView<'_> {
        self.catalog.filter(&self.criteria)
    }

    /// Toggles a catalog vehicle in the favorites set.
    pub fn toggle_favorite(&mut self, id: VehicleId) -> Result<&Favorites, SessionError> {
        if !self.catalog.contains(id) {
            warn!(id, "favorite toggle for vehicle outside the catalog");
            return Err(SessionError::UnknownVehicle(id));
        }
        let now_favorite = self.favorites.toggle(id);
        debug!(id, now_favorite, count = self.favorites.len(), "favorite toggled");
        Ok(&self.favorites)
    }

    pub fn is_favorite(&self, id: VehicleId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_vehicles(&self) -> Vec<&Vehicle> {
        self.favorites.favorite_vehicles(self.catalog.vehicles())
    }

    pub fn set_loan_amount(&mut self, principal: Rubles) -> Rubles {
        let applied = self.loan.set_principal(principal);
        debug!(requested = principal, applied, "loan amount changed");
        applied
    }

    pub fn set_loan_term(&mut self, months: u32) -> u32 {
        let applied = self.loan.set_term_months(months);
        debug!(requested = months, applied, "loan term changed");
        applied
    }

    pub fn set_interest_rate(&mut self, percent: f64) -> f64 {
        let applied = self.loan.set_annual_rate_percent(percent);
        debug!(requested = percent, applied, "interest rate changed");
        applied
    }

    /// Prefills the calculator with a vehicle's price.
    pub fn finance_vehicle(&mut self, id: VehicleId) -> Result<Rubles, SessionError> {
        let price = self
            .catalog
            .get(id)
            .map(|vehicle| vehicle.price)
            .ok_or(SessionError::UnknownVehicle(id))?;
        let applied = self.set_loan_amount(price);
        self.open_section(Section::Loan);
        Ok(applied)
    }

    pub fn loan_quote(&self) -> Result<LoanQuote, SessionError> {
        Ok(self.loan.quote()?)
    }

    pub fn submit_inquiry(
        &mut self,
        contact: ContactDetails,
        request: InquiryRequest,
    ) -> Result<&Inquiry, SessionError> {
        let kind = match request {
            InquiryRequest::General => InquiryKind::General,
            InquiryRequest::VehicleCallback(vehicle_id) => {
                if !self.catalog.contains(vehicle_id) {
                    return Err(InquiryError::UnknownVehicle(vehicle_id).into());
                }
                InquiryKind::VehicleCallback { vehicle_id }
            }
            InquiryRequest::LoanApplication => InquiryKind::LoanApplication {
                quote: self.loan_quote()?,
            },
        };

        let inquiry = Inquiry::new(contact, kind).map_err(|err| {
            warn!("inquiry rejected: {err}");
            SessionError::from(err)
        })?;
        debug!(id = %inquiry.id, "inquiry queued");
        self.inquiries.push(inquiry);
        let last = self.inquiries.len() - 1;
        Ok(&self.inquiries[last])
    }

    /// Hands queued inquiries to the caller and empties the queue.
    pub fn take_inquiries(&mut self) -> Vec<Inquiry> {
        std::mem::take(&mut self.inquiries)
    }

    pub fn apply_snapshot(&mut self, snapshot: SessionSnapshot) {
        self.section = snapshot.section;
        self.criteria = snapshot.criteria;
        if self.criteria.validate().is_err() {
            let PriceRange { min, max } = self.criteria.price;
            self.criteria.price = PriceRange::ordered(min, max);
        }
        self.favorites = snapshot
            .favorites
            .iter()
            .filter(|id| self.catalog.contains(*id))
            .collect();
        self.loan = LoanParams::default();
        self.set_loan_amount(snapshot.loan.principal);
        self.set_loan_term(snapshot.loan.term_months);
        self.set_interest_rate(snapshot.loan.annual_rate_percent);
    }

    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            section: self.section,
            criteria: self.criteria.clone(),
            favorites: self.favorites.clone(),
            loan: self.loan.clone(),
        }
    }
}

/// Serializable copy of the visitor's choices. Storage is up to the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub section: Section,
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub favorites: Favorites,
    #[serde(default)]
    pub loan: LoanParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::showroom;

    fn state() -> StorefrontState {
        StorefrontState::new(showroom::catalog().unwrap())
    }

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "Елена".to_string(),
            phone: "+7 916 000-11-22".to_string(),
            message: None,
        }
    }

    #[test]
    fn fresh_session_shows_whole_catalog() {
        let state = state();
        assert_eq!(state.section(), Section::Catalog);
        assert_eq!(state.filtered_vehicles().ids(), vec![1, 2, 3]);
        assert!(state.favorite_vehicles().is_empty());
    }

    #[test]
    fn toggling_unknown_vehicle_is_rejected() {
        let mut state = state();
        assert_eq!(
            state.toggle_favorite(42).unwrap_err(),
            SessionError::UnknownVehicle(42)
        );
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn favorites_follow_toggles() {
        let mut state = state();
        state.toggle_favorite(3).unwrap();
        state.toggle_favorite(1).unwrap();
        let names: Vec<_> = state.favorite_vehicles().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Mercedes-Benz S-Class", "BMW X7 M50i"]);

        assert_eq!(state.toggle_favorite(3).unwrap().len(), 1);
        assert!(!state.is_favorite(3));
    }

    #[test]
    fn inverted_price_range_keeps_previous_filter() {
        let mut state = state();
        state.set_price_range(1_000_000, 8_000_000).unwrap();
        assert!(matches!(
            state.set_price_range(9, 1),
            Err(SessionError::Filter(FilterError::InvertedPriceRange { .. }))
        ));
        assert_eq!(state.criteria().price, PriceRange { min: 1_000_000, max: 8_000_000 });
        assert_eq!(state.filtered_vehicles().ids(), vec![2]);

        state.reset_filters();
        assert_eq!(state.filtered_vehicles().len(), 3);
    }

    #[test]
    fn finance_vehicle_prefills_calculator() {
        let mut state = state();
        assert_eq!(state.finance_vehicle(3).unwrap(), 9_800_000);
        assert_eq!(state.section(), Section::Loan);
        assert_eq!(state.loan_quote().unwrap().principal, 9_800_000);
        assert!(state.finance_vehicle(7).is_err());
    }

    #[test]
    fn loan_application_carries_current_quote() {
        let mut state = state();
        state.set_loan_term(36);
        let inquiry = state
            .submit_inquiry(contact(), InquiryRequest::LoanApplication)
            .unwrap();
        match &inquiry.kind {
            InquiryKind::LoanApplication { quote } => {
                assert_eq!(quote.term_months, 36);
                assert_eq!(quote.principal, 5_000_000);
            }
            other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(state.take_inquiries().len(), 1);
        assert!(state.inquiries().is_empty());
    }

    #[test]
    fn callback_for_unknown_vehicle_is_rejected() {
        let mut state = state();
        let err = state
            .submit_inquiry(contact(), InquiryRequest::VehicleCallback(9))
            .unwrap_err();
        assert_eq!(err, SessionError::Inquiry(InquiryError::UnknownVehicle(9)));
        assert!(state.inquiries().is_empty());
    }

    #[test]
    fn invalid_contact_is_not_queued() {
        let mut state = state();
        let mut details = contact();
        details.phone = "call me".to_string();
        assert!(state.submit_inquiry(details, InquiryRequest::General).is_err());
        assert!(state.inquiries().is_empty());
    }

    #[test]
    fn snapshot_restores_choices_and_drops_stale_favorites() {
        let mut state = state();
        state.open_section(Section::Favorites);
        state.select_brand(BrandFilter::from_selector("Audi"));
        state.toggle_favorite(2).unwrap();
        state.set_interest_rate(7.5);

        let mut snapshot = state.to_snapshot();
        snapshot.favorites.toggle(77);
        snapshot.loan.term_months = 1_000;

        let mut restored = StorefrontState::new(showroom::catalog().unwrap());
        restored.apply_snapshot(snapshot);
        assert_eq!(restored.section(), Section::Favorites);
        assert_eq!(restored.filtered_vehicles().ids(), vec![2]);
        assert_eq!(restored.favorites().iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(restored.loan().annual_rate_percent, 7.5);
        assert_eq!(restored.loan().term_months, 84);
    }
}
