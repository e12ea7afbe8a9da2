// 🏛️ Venue Option - flat-priced reception venues
//
// A venue costs the same no matter how many guests attend.
// Capacity and price range are display labels only, never used for pricing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueOption {
    /// Stable catalog identifier (e.g., "v1")
    pub id: String,

    pub name: String,
    pub description: String,

    /// Price category label (e.g., "Budget-Friendly", "Premium")
    pub price_range: String,

    /// Capacity label (e.g., "200-300 guests")
    pub capacity: String,

    /// Flat cost of the venue
    pub price: u64,

    /// Image URL shown by the frontend
    pub image: String,

    #[serde(default)]
    pub amenities: Vec<String>,
}

impl VenueOption {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        price_range: &str,
        capacity: &str,
        price: u64,
        image: &str,
        amenities: &[&str],
    ) -> Self {
        VenueOption {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_range: price_range.to_string(),
            capacity: capacity.to_string(),
            price,
            image: image.to_string(),
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_creation() {
        let venue = VenueOption::new(
            "v9",
            "Test Hall",
            "A hall for tests",
            "Mid-Range",
            "100-200 guests",
            120000,
            "https://example.com/hall.jpg",
            &["Parking", "AC Hall"],
        );

        assert_eq!(venue.id, "v9");
        assert_eq!(venue.price, 120000);
        assert_eq!(venue.amenities, vec!["Parking", "AC Hall"]);
    }

    #[test]
    fn test_venue_wire_format() {
        let json = serde_json::json!({
            "id": "v1",
            "name": "Garden Paradise",
            "description": "Outdoor garden",
            "price_range": "Budget-Friendly",
            "capacity": "200-300 guests",
            "price": 150000,
            "image": "https://example.com/garden.jpg",
            "amenities": ["Open Garden", "Parking"]
        });

        let venue: VenueOption = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(venue.price, 150000);
        assert_eq!(serde_json::to_value(&venue).unwrap(), json);
    }
}
