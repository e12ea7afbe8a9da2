// 💰 Budget Calculator - selection + guest count → total and itemized breakdown
//
// Pricing rules:
// - Venue: flat price
// - Cuisine: price_per_plate × guest_count
// - Service: flat price, labelled with the service's own category
//
// Breakdown order: venue, cuisines (request order), services (request order).
// Unknown ids are skipped; the calculation itself never fails.

use crate::catalog::CatalogLookup;
use serde::{Deserialize, Serialize};

pub const VENUE_CATEGORY: &str = "Venue";
pub const CATERING_CATEGORY: &str = "Catering";

// ============================================================================
// REQUEST / RESULT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub guest_count: u32,

    #[serde(default)]
    pub venue_id: Option<String>,

    #[serde(default)]
    pub cuisine_ids: Option<Vec<String>>,

    #[serde(default)]
    pub service_ids: Option<Vec<String>>,
}

impl BudgetRequest {
    pub fn new(guest_count: u32) -> Self {
        BudgetRequest {
            guest_count,
            ..Default::default()
        }
    }

    pub fn with_venue(mut self, venue_id: &str) -> Self {
        self.venue_id = Some(venue_id.to_string());
        self
    }

    pub fn with_cuisine(mut self, cuisine_id: &str) -> Self {
        self.cuisine_ids
            .get_or_insert_with(Vec::new)
            .push(cuisine_id.to_string());
        self
    }

    pub fn with_service(mut self, service_id: &str) -> Self {
        self.service_ids
            .get_or_insert_with(Vec::new)
            .push(service_id.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub category: String,
    pub item: String,
    pub cost: u64,

    /// Only set on per-guest lines, e.g. "200 guests × 250"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub total_cost: u64,
    pub breakdown: Vec<BreakdownLine>,
    pub guest_count: u32,
}

impl BudgetResult {
    /// Build a result whose total is the sum of its own lines
    pub fn from_breakdown(breakdown: Vec<BreakdownLine>, guest_count: u32) -> Self {
        let total_cost = breakdown
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.cost));

        BudgetResult {
            total_cost,
            breakdown,
            guest_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}

// ============================================================================
// CALCULATOR
// ============================================================================

/// Stateless calculator over a catalog
pub struct BudgetCalculator<'a, C: CatalogLookup> {
    catalog: &'a C,
}

impl<'a, C: CatalogLookup> BudgetCalculator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        BudgetCalculator { catalog }
    }

    pub fn calculate(&self, request: &BudgetRequest) -> BudgetResult {
        let guest_count = request.guest_count;
        let mut breakdown = Vec::new();

        // 1. Venue
        if let Some(venue) = request
            .venue_id
            .as_deref()
            .and_then(|id| self.catalog.venue(id))
        {
            breakdown.push(BreakdownLine {
                category: VENUE_CATEGORY.to_string(),
                item: venue.name.clone(),
                cost: venue.price,
                details: None,
            });
        }

        // 2. Catering, one line per selected cuisine
        for id in request.cuisine_ids.iter().flatten() {
            let Some(cuisine) = self.catalog.cuisine(id) else {
                tracing::debug!(cuisine_id = %id, "Skipping unknown cuisine");
                continue;
            };

            breakdown.push(BreakdownLine {
                category: CATERING_CATEGORY.to_string(),
                item: cuisine.name.clone(),
                cost: cuisine.cost_for(guest_count),
                details: Some(format!("{} guests × {}", guest_count, cuisine.price_per_plate)),
            });
        }

        // 3. Services
        for id in request.service_ids.iter().flatten() {
            let Some(service) = self.catalog.service(id) else {
                tracing::debug!(service_id = %id, "Skipping unknown service");
                continue;
            };

            breakdown.push(BreakdownLine {
                category: service.category.clone(),
                item: service.name.clone(),
                cost: service.price,
                details: None,
            });
        }

        let result = BudgetResult::from_breakdown(breakdown, guest_count);

        tracing::info!(
            guest_count,
            lines = result.breakdown.len(),
            total_cost = result.total_cost,
            "Budget calculated"
        );

        result
    }
}

/// Convenience wrapper: calculate against any catalog
pub fn calculate<C: CatalogLookup>(catalog: &C, request: &BudgetRequest) -> BudgetResult {
    BudgetCalculator::new(catalog).calculate(request)
}

// ============================================================================
// TESTS
// ============================================================================
