use crate::{category::tag_filter, types::search::SearchRequest};

/// Server-side execution limit embedded in every query, in seconds
pub const SERVER_TIMEOUT_SECS: u64 = 25;

/// Build the Overpass QL for a search. Ways and relations are reduced to
/// their center point by `out center`.
pub fn build_query(request: &SearchRequest) -> String {
    let filter = tag_filter(&request.category);
    let around = format!(
        "(around:{},{},{})",
        request.radius_meters(),
        request.latitude(),
        request.longitude()
    );
    format!(
        r#"
        [out:json][timeout:{SERVER_TIMEOUT_SECS}];
        (
          node{filter}{around};
          way{filter}{around};
          relation{filter}{around};
        );
        out center;
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_radius_and_center() {
        let query = build_query(&SearchRequest::new(52.52, 13.405, 1.5, "groceries"));
        assert!(query.contains("(around:1500,52.52,13.405)"));
        assert!(query.contains("[out:json][timeout:25];"));
        assert!(query.contains("out center;"));
    }

    #[test]
    fn every_kind_is_filtered() {
        let query = build_query(&SearchRequest::new(48.85, 2.35, 0.5, "Pharmacies"));
        for kind in ["node", "way", "relation"] {
            assert!(query.contains(&format!(
                r#"{kind}["amenity"~"pharmacy"](around:500,48.85,2.35);"#
            )));
        }
    }

    #[test]
    fn unknown_category_is_unfiltered() {
        let query = build_query(&SearchRequest::new(1.0, 2.0, 1.0, "zoos"));
        assert!(query.contains("node(around:1000,1,2);"));
        assert!(query.contains("way(around:1000,1,2);"));
        assert!(query.contains("relation(around:1000,1,2);"));
        assert!(!query.contains("~"));
    }
}
