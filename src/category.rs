/// Overpass tag filters for the recognised search categories
pub static CATEGORY_FILTERS: [(&str, &str); 7] = [
    (
        "groceries",
        r#"["shop"~"supermarket|convenience|grocery|bakery"]"#,
    ),
    (
        "restaurants",
        r#"["amenity"~"restaurant|cafe|fast_food|pub"]"#,
    ),
    (
        "transportation",
        r#"["amenity"~"bus_station|train_station|bicycle_parking|fuel"]"#,
    ),
    ("pharmacies", r#"["amenity"~"pharmacy"]"#),
    ("banks", r#"["amenity"~"bank|atm"]"#),
    ("parks", r#"["leisure"~"park|garden"]"#),
    ("hospitals", r#"["amenity"~"hospital|clinic|doctors"]"#),
];

/// Case-insensitive lookup. Unknown categories get an empty filter, which
/// matches every element in range.
pub fn tag_filter(category: &str) -> &'static str {
    let category = category.to_lowercase();
    CATEGORY_FILTERS
        .iter()
        .find(|(key, _)| *key == category)
        .map_or("", |(_, filter)| *filter)
}

pub fn category_keys() -> impl Iterator<Item = &'static str> {
    CATEGORY_FILTERS.iter().map(|(key, _)| *key)
}
