use serde::Serialize;

use crate::{category::category_keys, tool::TOOL_NAME, types::search::DEFAULT_RADIUS_KM};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Number,
    String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ToolParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    pub required: bool,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

/// What the host runtime needs to render and call the tool
#[derive(Serialize, Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ToolParameter>,
}

pub fn osm_search_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: "Find points of interest near a location using OpenStreetMap data.",
        parameters: vec![
            ToolParameter {
                name: "latitude",
                parameter_type: ParameterType::Number,
                required: true,
                description: "Latitude of the search center",
                default: None,
                options: vec![],
            },
            ToolParameter {
                name: "longitude",
                parameter_type: ParameterType::Number,
                required: true,
                description: "Longitude of the search center",
                default: None,
                options: vec![],
            },
            ToolParameter {
                name: "radius",
                parameter_type: ParameterType::Number,
                required: false,
                description: "Search radius in kilometers",
                default: Some(DEFAULT_RADIUS_KM),
                options: vec![],
            },
            ToolParameter {
                name: "categories",
                parameter_type: ParameterType::String,
                required: false,
                description: "Kind of place to look for; anything else matches all tagged places",
                default: None,
                options: category_keys().collect(),
            },
        ],
    }
}
