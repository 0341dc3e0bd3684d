use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::entities::{Vehicle, VehicleId};

/// Vehicles the visitor marked with the heart button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: HashSet<VehicleId>,
}

impl Favorites {
    /// Adds `id` if absent, removes it otherwise. Returns the new membership.
    pub fn toggle(&mut self, id: VehicleId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.ids.iter().copied()
    }

    /// Catalog intersected with the set, in catalog order.
    pub fn favorite_vehicles<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles
            .iter()
            .filter(|vehicle| self.contains(vehicle.id))
            .collect()
    }
}

impl FromIterator<VehicleId> for Favorites {
    fn from_iter<T: IntoIterator<Item = VehicleId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{FuelType, Transmission};

    fn vehicles() -> Vec<Vehicle> {
        (1..=4)
            .map(|id| Vehicle {
                id,
                name: format!("Car {id}"),
                brand: "Audi".to_string(),
                price: 1_000_000 * id as u64,
                year: 2024,
                mileage_km: 0,
                fuel: FuelType::Petrol,
                transmission: Transmission::Automatic,
                image: url::Url::parse("https://cdn.example.com/car.jpg").unwrap(),
                in_stock: true,
            })
            .collect()
    }

    #[test]
    fn toggle_twice_is_a_no_op() {
        let mut favorites: Favorites = [2, 3].into_iter().collect();
        let before = favorites.clone();

        assert!(favorites.toggle(1));
        assert!(!favorites.toggle(1));
        assert_eq!(favorites, before);

        assert!(!favorites.toggle(2));
        assert!(favorites.toggle(2));
        assert_eq!(favorites, before);
    }

    #[test]
    fn favorite_vehicles_follow_catalog_order() {
        let vehicles = vehicles();
        let mut favorites = Favorites::default();
        for id in [4, 1, 3, 1, 2, 2] {
            favorites.toggle(id);
        }

        let ids: Vec<VehicleId> = favorites
            .favorite_vehicles(&vehicles)
            .iter()
            .map(|vehicle| vehicle.id)
            .collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn favorite_vehicles_match_intersection_after_every_toggle() {
        let vehicles = vehicles();
        let mut favorites = Favorites::default();
        for id in [1, 2, 9, 2, 4, 1, 3, 9, 3] {
            favorites.toggle(id);
            let expected: Vec<VehicleId> = vehicles
                .iter()
                .map(|vehicle| vehicle.id)
                .filter(|id| favorites.contains(*id))
                .collect();
            let actual: Vec<VehicleId> = favorites
                .favorite_vehicles(&vehicles)
                .iter()
                .map(|vehicle| vehicle.id)
                .collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn ids_outside_catalog_do_not_appear_in_view() {
        let vehicles = vehicles();
        let mut favorites = Favorites::default();
        favorites.toggle(99);
        assert_eq!(favorites.len(), 1);
        assert!(favorites.favorite_vehicles(&vehicles).is_empty());

        favorites.clear();
        assert!(favorites.is_empty());
    }
}
