use serde_json::{Map, Value};

use crate::{
    error::{Result, ToolError},
    types::search::{SearchRequest, DEFAULT_RADIUS_KM},
};

pub type ToolParameters = Map<String, Value>;

/// Numbers may come in as JSON numbers or numeric strings
fn number(params: &ToolParameters, key: &str) -> Result<Option<f64>> {
    match params.get(key) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ToolError::invalid(format!("{key} is out of range"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ToolError::invalid(format!("{key} must be a number, got {s:?}"))),
        Some(other) => Err(ToolError::invalid(format!(
            "{key} must be a number, got {other}"
        ))),
    }
}

fn required_number(params: &ToolParameters, key: &str) -> Result<f64> {
    number(params, key)?.ok_or_else(|| ToolError::invalid(format!("{key} is required")))
}

impl TryFrom<&ToolParameters> for SearchRequest {
    type Error = ToolError;

    fn try_from(params: &ToolParameters) -> Result<Self> {
        let latitude = required_number(params, "latitude")?;
        let longitude = required_number(params, "longitude")?;
        let radius_km = number(params, "radius")?.unwrap_or(DEFAULT_RADIUS_KM);
        let category = match params.get("categories") {
            None => "",
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                return Err(ToolError::invalid(format!(
                    "categories must be a string, got {other}"
                )))
            }
        };
        Ok(SearchRequest::new(latitude, longitude, radius_km, category))
    }
}
