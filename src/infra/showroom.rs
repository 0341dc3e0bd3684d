//! Static showroom content: vehicles on the floor, customer reviews, the
//! dealer's contact card and the "about us" blurbs.

use thiserror::Error;
use url::Url;

use crate::domain::{
    Catalog, DealerContacts, FuelType, Review, Rubles, Transmission, Vehicle, VehicleId,
};

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("vehicle {id} has an invalid image url: {source}")]
    InvalidImage {
        id: VehicleId,
        #[source]
        source: url::ParseError,
    },
}

const IMAGE_CDN: &str = "https://cdn.poehali.dev/projects/10ef4b30-77ef-4b06-812e-9ef48b1af0b6/files/";

struct SeedVehicle {
    id: VehicleId,
    name: &'static str,
    brand: &'static str,
    price: Rubles,
    year: u16,
    mileage_km: u32,
    fuel: FuelType,
    transmission: Transmission,
    image_file: &'static str,
    in_stock: bool,
}

const VEHICLES: &[SeedVehicle] = &[
    SeedVehicle {
        id: 1,
        name: "Mercedes-Benz S-Class",
        brand: "Mercedes-Benz",
        price: 8_500_000,
        year: 2023,
        mileage_km: 5_000,
        fuel: FuelType::Petrol,
        transmission: Transmission::Automatic,
        image_file: "34d304b6-698f-4224-84ae-45b32a33b96c.jpg",
        in_stock: true,
    },
    SeedVehicle {
        id: 2,
        name: "Audi RS6 Avant",
        brand: "Audi",
        price: 7_200_000,
        year: 2024,
        mileage_km: 1_200,
        fuel: FuelType::Petrol,
        transmission: Transmission::Automatic,
        image_file: "bcdc45e0-4abc-48d5-a84a-b1fb68f876e7.jpg",
        in_stock: true,
    },
    SeedVehicle {
        id: 3,
        name: "BMW X7 M50i",
        brand: "BMW",
        price: 9_800_000,
        year: 2023,
        mileage_km: 8_500,
        fuel: FuelType::Petrol,
        transmission: Transmission::Automatic,
        image_file: "e67bcf18-e40a-418f-9b7e-9b9f70d28ddf.jpg",
        in_stock: true,
    },
];

impl SeedVehicle {
    fn to_vehicle(&self) -> Result<Vehicle, ShowroomError> {
        let image = Url::parse(IMAGE_CDN)
            .and_then(|base| base.join(self.image_file))
            .map_err(|source| ShowroomError::InvalidImage {
                id: self.id,
                source,
            })?;

        Ok(Vehicle {
            id: self.id,
            name: self.name.to_string(),
            brand: self.brand.to_string(),
            price: self.price,
            year: self.year,
            mileage_km: self.mileage_km,
            fuel: self.fuel,
            transmission: self.transmission,
            image,
            in_stock: self.in_stock,
        })
    }
}

pub fn vehicles() -> Result<Vec<Vehicle>, ShowroomError> {
    VEHICLES.iter().map(SeedVehicle::to_vehicle).collect()
}

pub fn catalog() -> Result<Catalog, ShowroomError> {
    vehicles().map(Catalog::new)
}

pub fn reviews() -> Vec<Review> {
    [
        (
            "Алексей Иванов",
            "Mercedes-Benz S-Class",
            "Отличный сервис! Помогли выбрать автомобиль, оформили все документы быстро. Машина в идеальном состоянии, полностью доволен покупкой.",
        ),
        (
            "Мария Петрова",
            "BMW X7",
            "Спасибо команде АвтоМир за профессионализм! Купила BMW X7 и очень довольна. Менеджеры компетентные, помогли с кредитом.",
        ),
        (
            "Дмитрий Сидоров",
            "Audi RS6",
            "Лучший автосалон в городе! Большой выбор, адекватные цены, честный подход. Рекомендую всем, кто ищет качественный автомобиль.",
        ),
        (
            "Елена Волкова",
            "Mercedes-Benz GLE",
            "Покупала автомобиль впервые, очень переживала. Но сотрудники все подробно объяснили, помогли с выбором. Машина супер!",
        ),
    ]
    .into_iter()
    .map(|(author, car, text)| Review {
        author: author.to_string(),
        car: car.to_string(),
        rating: 5,
        text: text.to_string(),
    })
    .collect()
}

pub fn contacts() -> DealerContacts {
    DealerContacts {
        address: "Москва, Ленинградский проспект, д. 39, стр. 1".to_string(),
        phone: "+7 (495) 123-45-67".to_string(),
        email: "info@automir.ru".to_string(),
        opening_hours: "Пн-Вс: 09:00 - 21:00".to_string(),
    }
}

/// Founding year shown in the footer and on the about page.
pub const FOUNDED: u16 = 2009;

pub fn about() -> [(&'static str, &'static str); 4] {
    [
        (
            "О компании",
            "Компания АвтоМир работает с 2009 года и за это время стала одним из крупнейших дилеров премиум автомобилей в России.",
        ),
        (
            "Наши клиенты",
            "Нашими клиентами стали тысячи автолюбителей по всей стране.",
        ),
        (
            "Гарантия качества",
            "Все автомобили проходят тщательную проверку и техническое обслуживание перед продажей.",
        ),
        (
            "Поддержка",
            "Наши специалисты всегда готовы помочь вам с выбором автомобиля, оформлением документов и решением любых вопросов.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{average_rating, inquiry::normalize_phone};

    #[test]
    fn seed_catalog_has_unique_ids() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        let mut ids: Vec<_> = catalog.vehicles().iter().map(|v| v.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn images_resolve_under_cdn() {
        for vehicle in vehicles().unwrap() {
            assert_eq!(vehicle.image.scheme(), "https");
            assert!(vehicle.image.as_str().starts_with(IMAGE_CDN));
        }
    }

    #[test]
    fn reviews_are_all_five_star() {
        assert_eq!(average_rating(&reviews()), Some(5.0));
    }

    #[test]
    fn dealer_phone_passes_inquiry_validation() {
        assert!(normalize_phone(&contacts().phone).is_ok());
        assert!(about()[0].1.contains(&FOUNDED.to_string()));
    }
}
