use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct OverpassResponse {
    // Overpass omits the array entirely on some error payloads
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// Element kind. Anything Overpass sends besides the three OSM kinds is
/// carried through as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    Node,
    Way,
    Relation,
    Other(String),
}

impl From<String> for ElementType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "node" => Self::Node,
            "way" => Self::Way,
            "relation" => Self::Relation,
            _ => Self::Other(value),
        }
    }
}

impl From<ElementType> for String {
    fn from(value: ElementType) -> Self {
        match value {
            ElementType::Node => String::from("node"),
            ElementType::Way => String::from("way"),
            ElementType::Relation => String::from("relation"),
            ElementType::Other(other) => other,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    // Only set on nodes
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    // Synthesized for ways and relations by `out center`
    #[serde(default)]
    pub center: Option<OverpassCoord>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OverpassCoord {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl OverpassElement {
    /// Direct coordinates when the element has them, otherwise its center
    pub fn coordinates(&self) -> (Option<f64>, Option<f64>) {
        let center = self.center.unwrap_or(OverpassCoord {
            lat: None,
            lon: None,
        });
        (self.lat.or(center.lat), self.lon.or(center.lon))
    }

    /// A tag value, treating empty strings as missing. Used for the address
    /// and description parts; `name` is taken verbatim.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
