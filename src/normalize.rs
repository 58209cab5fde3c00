use crate::types::{
    overpass::{OverpassElement, OverpassResponse},
    search::{LocationResult, SearchResponse},
};

const ADDRESS_KEYS: [&str; 3] = ["addr:housenumber", "addr:street", "addr:city"];
const DESCRIPTION_KEYS: [(&str, &str); 3] =
    [("shop", "Shop"), ("amenity", "Amenity"), ("leisure", "Leisure")];

/// Upstream order is kept; nothing is filtered, deduplicated or sorted.
pub fn normalize(response: OverpassResponse) -> SearchResponse {
    response
        .elements
        .into_iter()
        .map(LocationResult::from)
        .collect::<Vec<_>>()
        .into()
}

// House number comes first, so "1, Main St" rather than "Main St 1"
fn address(element: &OverpassElement) -> String {
    let parts: Vec<&str> = ADDRESS_KEYS
        .iter()
        .filter_map(|key| element.tag(key))
        .collect();
    if parts.is_empty() {
        String::from("Address unknown")
    } else {
        parts.join(", ")
    }
}

fn description(element: &OverpassElement) -> String {
    let parts: Vec<String> = DESCRIPTION_KEYS
        .iter()
        .filter_map(|(key, label)| element.tag(key).map(|value| format!("{label}: {value}")))
        .collect();
    if parts.is_empty() {
        String::from("No description available")
    } else {
        parts.join(" | ")
    }
}

impl From<OverpassElement> for LocationResult {
    fn from(element: OverpassElement) -> Self {
        let (lat, lon) = element.coordinates();
        let name = element
            .tags
            .get("name")
            .map_or("Unnamed", String::as_str)
            .to_owned();
        let address = address(&element);
        let description = description(&element);
        Self {
            name,
            element_type: element.element_type,
            lat,
            lon,
            address,
            description,
            tags: element.tags,
        }
    }
}
