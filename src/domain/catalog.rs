//! Showroom catalog and the brand / price filter over it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Rubles, Vehicle, VehicleId};

/// Upper bound of the price slider on the catalog page.
pub const MAX_LISTED_PRICE: Rubles = 15_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("price range is inverted: min {min} > max {max}")]
    InvertedPriceRange { min: Rubles, max: Rubles },
}

/// Brand selector: either every brand or one exact brand name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrandFilter {
    #[default]
    All,
    Exact(String),
}

impl BrandFilter {
    /// Maps the selector value used by the storefront ("all" or a brand name).
    pub fn from_selector(value: &str) -> Self {
        if value == "all" {
            BrandFilter::All
        } else {
            BrandFilter::Exact(value.to_string())
        }
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Exact(brand) => vehicle.is_brand(brand),
        }
    }
}

/// Inclusive price range in rubles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Rubles,
    pub max: Rubles,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: MAX_LISTED_PRICE,
        }
    }
}

impl PriceRange {
    pub fn new(min: Rubles, max: Rubles) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a range from two slider thumbs in either order.
    pub fn ordered(a: Rubles, b: Rubles) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, price: Rubles) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub brand: BrandFilter,
    pub price: PriceRange,
}

impl FilterCriteria {
    pub fn validate(&self) -> Result<(), FilterError> {
        PriceRange::new(self.price.min, self.price.max).map(|_| ())
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.brand.matches(vehicle) && self.price.contains(vehicle.price)
    }
}

/// Result of filtering the catalog, in catalog order.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogView<'a> {
    pub vehicles: Vec<&'a Vehicle>,
}

impl<'a> CatalogView<'a> {
    /// True when nothing matched; the storefront shows a "no results" notice.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn ids(&self) -> Vec<VehicleId> {
        self.vehicles.iter().map(|vehicle| vehicle.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Vehicle> + '_ {
        self.vehicles.iter().copied()
    }
}

/// Stable filter over the vehicle list. Never reorders or mutates the input.
pub fn filter_catalog<'a>(vehicles: &'a [Vehicle], criteria: &FilterCriteria) -> CatalogView<'a> {
    CatalogView {
        vehicles: vehicles
            .iter()
            .filter(|vehicle| criteria.matches(vehicle))
            .collect(),
    }
}

/// The fixed vehicle list supplied by the host application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.get(id).is_some()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> CatalogView<'_> {
        filter_catalog(&self.vehicles, criteria)
    }

    /// Distinct brands in first-seen order, for the brand selector.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for vehicle in &self.vehicles {
            if !brands.contains(&vehicle.brand.as_str()) {
                brands.push(&vehicle.brand);
            }
        }
        brands
    }

    /// Cheapest and most expensive price on the floor.
    pub fn price_bounds(&self) -> Option<(Rubles, Rubles)> {
        let min = self.vehicles.iter().map(|vehicle| vehicle.price).min()?;
        let max = self.vehicles.iter().map(|vehicle| vehicle.price).max()?;
        Some((min, max))
    }
}
