// 🍛 Cuisine Option - catering menus priced per plate
//
// The only catalog item whose cost scales with the guest count.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisineOption {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Cost per guest
    pub price_per_plate: u64,

    /// Menu style label (e.g., "Vegetarian", "Mixed", "Premium")
    pub cuisine_type: String,

    #[serde(default)]
    pub popular_dishes: Vec<String>,
}

impl CuisineOption {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        price_per_plate: u64,
        cuisine_type: &str,
        popular_dishes: &[&str],
    ) -> Self {
        CuisineOption {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_per_plate,
            cuisine_type: cuisine_type.to_string(),
            popular_dishes: popular_dishes.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Catering cost for a number of guests
    pub fn cost_for(&self, guest_count: u32) -> u64 {
        self.price_per_plate.saturating_mul(u64::from(guest_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_veg() -> CuisineOption {
        CuisineOption::new(
            "c5",
            "Simple Vegetarian",
            "Budget-friendly simple veg menu",
            250,
            "Vegetarian",
            &["Dal", "Roti"],
        )
    }

    #[test]
    fn test_cost_scales_with_guests() {
        let cuisine = simple_veg();

        assert_eq!(cuisine.cost_for(200), 50000);
        assert_eq!(cuisine.cost_for(400), 2 * cuisine.cost_for(200));
    }

    #[test]
    fn test_zero_guests_costs_nothing() {
        assert_eq!(simple_veg().cost_for(0), 0);
    }
}
