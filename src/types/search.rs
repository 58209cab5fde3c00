use std::collections::HashMap;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use super::overpass::ElementType;

pub const DEFAULT_RADIUS_KM: f64 = 1.0;

/// A validated search, built from the host's tool parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    // x is longitude, y is latitude
    pub center: Point<f64>,
    pub radius_km: f64,
    pub category: String,
}

impl SearchRequest {
    pub fn new(latitude: f64, longitude: f64, radius_km: f64, category: impl Into<String>) -> Self {
        Self {
            center: Point::new(longitude, latitude),
            radius_km,
            category: category.into(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_km * 1000.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationResult {
    pub name: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub address: String,
    pub description: String,
    pub tags: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SearchResponse {
    pub count: usize,
    pub results: Vec<LocationResult>,
}

impl SearchResponse {
    pub fn summary(&self) -> String {
        if self.results.is_empty() {
            String::from("No locations found matching your criteria in this area.")
        } else {
            format!("Found {} locations nearby.", self.count)
        }
    }
}

impl From<Vec<LocationResult>> for SearchResponse {
    fn from(results: Vec<LocationResult>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}
