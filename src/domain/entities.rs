use serde::{Deserialize, Serialize};
use url::Url;

/// Identifier for vehicles in the showroom catalog.
pub type VehicleId = u32;

/// Price in whole rubles.
pub type Rubles = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Бензин",
            FuelType::Diesel => "Дизель",
            FuelType::Hybrid => "Гибрид",
            FuelType::Electric => "Электро",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Automatic,
    Manual,
    Robotic,
    Cvt,
}

impl Transmission {
    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Automatic => "Автомат",
            Transmission::Manual => "Механика",
            Transmission::Robotic => "Робот",
            Transmission::Cvt => "Вариатор",
        }
    }
}

/// A vehicle on the showroom floor. Seed data only; never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Display name, e.g. "BMW X7 M50i".
    pub name: String,
    pub brand: String,
    pub price: Rubles,
    pub year: u16,
    /// Odometer reading in kilometres.
    pub mileage_km: u32,
    pub fuel: FuelType,
    pub transmission: Transmission,
    pub image: Url,
    pub in_stock: bool,
}

impl Vehicle {
    pub fn is_brand(&self, brand: &str) -> bool {
        self.brand == brand
    }
}

/// Customer testimonial shown on the reviews page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub car: String,
    /// 1..=5 stars.
    pub rating: u8,
    pub text: String,
}

impl Review {
    /// First letter of the author's name, used as an avatar placeholder.
    pub fn initial(&self) -> Option<char> {
        self.author.chars().next()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerContacts {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_hours: String,
}

/// Mean star rating, `None` when there are no reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|review| review.rating as u32).sum();
    Some(total as f64 / reviews.len() as f64)
}
