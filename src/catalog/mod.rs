// 📚 Catalog - immutable reference data for venues, cuisines and services
//
// Built once (defaults or JSON file), then shared read-only.
// Lookups return None for unknown ids; callers treat that as "not selected".

pub mod cuisine;
pub mod service;
pub mod venue;

pub use cuisine::CuisineOption;
pub use service::{group_by_category, ServiceItem};
pub use venue::VenueOption;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// LOOKUP INTERFACE
// ============================================================================

/// Point lookups the budget calculator depends on
pub trait CatalogLookup {
    fn venue(&self, id: &str) -> Option<&VenueOption>;
    fn cuisine(&self, id: &str) -> Option<&CuisineOption>;
    fn service(&self, id: &str) -> Option<&ServiceItem>;
}

// ============================================================================
// CATALOG
// ============================================================================

/// On-disk / serialized shape of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub venues: Vec<VenueOption>,
    #[serde(default)]
    pub cuisines: Vec<CuisineOption>,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub venue_count: usize,
    pub cuisine_count: usize,
    pub service_count: usize,
    pub service_categories: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    venues: Vec<VenueOption>,
    cuisines: Vec<CuisineOption>,
    services: Vec<ServiceItem>,

    // id -> position in the vectors above
    venue_index: HashMap<String, usize>,
    cuisine_index: HashMap<String, usize>,
    service_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids within a section
    pub fn from_data(data: CatalogData) -> Result<Self> {
        ensure_unique("venue", data.venues.iter().map(|v| v.id.as_str()))?;
        ensure_unique("cuisine", data.cuisines.iter().map(|c| c.id.as_str()))?;
        ensure_unique("service", data.services.iter().map(|s| s.id.as_str()))?;

        Ok(Catalog::indexed(data))
    }

    /// Index already-validated data
    fn indexed(data: CatalogData) -> Self {
        let venue_index = build_index(data.venues.iter().map(|v| v.id.as_str()));
        let cuisine_index = build_index(data.cuisines.iter().map(|c| c.id.as_str()));
        let service_index = build_index(data.services.iter().map(|s| s.id.as_str()));

        Catalog {
            venues: data.venues,
            cuisines: data.cuisines,
            services: data.services,
            venue_index,
            cuisine_index,
            service_index,
        }
    }

    /// Load catalog from a JSON file shaped like `{venues, cuisines, services}`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;

        let data: CatalogData =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        let catalog = Catalog::from_data(data)?;
        tracing::info!(
            path = %path.as_ref().display(),
            venues = catalog.venues.len(),
            cuisines = catalog.cuisines.len(),
            services = catalog.services.len(),
            "Catalog loaded from file"
        );

        Ok(catalog)
    }

    /// Catalog with the built-in seed data (seed ids are unique)
    pub fn with_defaults() -> Self {
        Catalog::indexed(seed_data())
    }

    pub fn venues(&self) -> &[VenueOption] {
        &self.venues
    }

    pub fn cuisines(&self) -> &[CuisineOption] {
        &self.cuisines
    }

    pub fn services(&self) -> &[ServiceItem] {
        &self.services
    }

    /// Services grouped by category (display only, no effect on pricing)
    pub fn services_by_category(&self) -> BTreeMap<String, Vec<ServiceItem>> {
        group_by_category(&self.services)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            venue_count: self.venues.len(),
            cuisine_count: self.cuisines.len(),
            service_count: self.services.len(),
            service_categories: self.services_by_category().into_keys().collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl CatalogLookup for Catalog {
    fn venue(&self, id: &str) -> Option<&VenueOption> {
        self.venue_index.get(id).map(|&i| &self.venues[i])
    }

    fn cuisine(&self, id: &str) -> Option<&CuisineOption> {
        self.cuisine_index.get(id).map(|&i| &self.cuisines[i])
    }

    fn service(&self, id: &str) -> Option<&ServiceItem> {
        self.service_index.get(id).map(|&i| &self.services[i])
    }
}

fn ensure_unique<'a>(section: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            bail!("Duplicate {} id in catalog: {}", section, id);
        }
    }

    Ok(())
}

fn build_index<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    ids.enumerate()
        .map(|(position, id)| (id.to_string(), position))
        .collect()
}

// ============================================================================
// SEED DATA
// ============================================================================

fn seed_data() -> CatalogData {
    CatalogData {
        venues: default_venues(),
        cuisines: default_cuisines(),
        services: default_services(),
    }
}

fn default_venues() -> Vec<VenueOption> {
    vec![
        VenueOption::new(
            "v1",
            "Garden Paradise",
            "Beautiful outdoor garden venue with natural ambiance",
            "Budget-Friendly",
            "200-300 guests",
            150000,
            "https://images.unsplash.com/photo-1519167758481-83f29da8c8d6?w=800",
            &["Open Garden", "Parking", "Basic Lighting", "Mandap Setup"],
        ),
        VenueOption::new(
            "v2",
            "Royal Banquet Hall",
            "Elegant indoor banquet hall with AC and modern facilities",
            "Mid-Range",
            "300-500 guests",
            300000,
            "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?w=800",
            &["AC Hall", "Valet Parking", "Premium Lighting", "Stage Setup", "Green Rooms"],
        ),
        VenueOption::new(
            "v3",
            "Heritage Palace",
            "Luxurious heritage property with traditional architecture",
            "Premium",
            "500+ guests",
            500000,
            "https://images.unsplash.com/photo-1478146896981-b80fe463b330?w=800",
            &[
                "Multiple Halls",
                "Premium Decor",
                "Valet Service",
                "Bridal Suite",
                "Photography Areas",
            ],
        ),
        VenueOption::new(
            "v4",
            "Lakeside Resort",
            "Scenic lakeside venue perfect for destination weddings",
            "Mid-Range",
            "150-250 guests",
            250000,
            "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800",
            &["Lake View", "Accommodation", "Outdoor Setup", "Bonfire Area"],
        ),
    ]
}

fn default_cuisines() -> Vec<CuisineOption> {
    vec![
        CuisineOption::new(
            "c1",
            "Traditional North Indian",
            "Classic North Indian vegetarian menu",
            400,
            "Vegetarian",
            &["Dal Makhani", "Paneer Butter Masala", "Naan", "Biryani", "Gulab Jamun"],
        ),
        CuisineOption::new(
            "c2",
            "South Indian Delights",
            "Authentic South Indian vegetarian spread",
            350,
            "Vegetarian",
            &["Dosa", "Idli", "Sambar", "Rasam", "Payasam"],
        ),
        CuisineOption::new(
            "c3",
            "Mixed Cuisine Buffet",
            "Multi-cuisine buffet with veg and non-veg options",
            600,
            "Mixed",
            &["Tandoori Chicken", "Mutton Curry", "Paneer Tikka", "Pasta", "Chinese"],
        ),
        CuisineOption::new(
            "c4",
            "Premium Royal Feast",
            "Elaborate royal menu with premium ingredients",
            800,
            "Premium",
            &["Raan", "Kebabs", "Live Counters", "Continental", "Exotic Desserts"],
        ),
        CuisineOption::new(
            "c5",
            "Simple Vegetarian",
            "Budget-friendly simple veg menu",
            250,
            "Vegetarian",
            &["Dal", "Sabzi", "Roti", "Rice", "Sweet"],
        ),
    ]
}

fn default_services() -> Vec<ServiceItem> {
    vec![
        ServiceItem::new(
            "s1",
            "Photography",
            "Basic Photography Package",
            "One photographer for 6 hours",
            30000,
            "Basic",
        ),
        ServiceItem::new(
            "s2",
            "Photography",
            "Premium Photo + Video",
            "Photography + Videography + Drone shots",
            80000,
            "Premium",
        ),
        ServiceItem::new(
            "s3",
            "Decorations",
            "Simple Floral Decor",
            "Basic floral decoration for venue",
            40000,
            "Basic",
        ),
        ServiceItem::new(
            "s4",
            "Decorations",
            "Grand Theme Decor",
            "Themed decoration with lights and props",
            100000,
            "Premium",
        ),
        ServiceItem::new(
            "s5",
            "Entertainment",
            "DJ + Sound System",
            "Professional DJ with sound system",
            25000,
            "Standard",
        ),
        ServiceItem::new(
            "s6",
            "Entertainment",
            "Live Band Performance",
            "Live music band for 3 hours",
            50000,
            "Premium",
        ),
        ServiceItem::new(
            "s7",
            "Makeup",
            "Bridal Makeup Package",
            "Professional bridal makeup + trial",
            20000,
            "Standard",
        ),
        ServiceItem::new(
            "s8",
            "Makeup",
            "Bridal + Family Makeup",
            "Bridal makeup + 5 family members",
            40000,
            "Premium",
        ),
        ServiceItem::new(
            "s9",
            "Invitations",
            "Printed Wedding Cards",
            "Designer printed cards (500 pcs)",
            15000,
            "Standard",
        ),
        ServiceItem::new(
            "s10",
            "Invitations",
            "Premium Digital + Print",
            "Digital invites + premium printed cards",
            30000,
            "Premium",
        ),
        ServiceItem::new(
            "s11",
            "Transportation",
            "Wedding Car Rental",
            "Luxury car for bride/groom",
            15000,
            "Standard",
        ),
        ServiceItem::new(
            "s12",
            "Mehendi",
            "Mehendi Artist",
            "Professional mehendi for bride + family",
            10000,
            "Standard",
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
