use thiserror::Error;

pub type Result<T, E = ToolError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ToolError {
    /// Bad tool parameters, caught before any request goes out
    #[error("Invalid input parameters - {0}")]
    InputValidation(String),

    /// Transport failure, non-success status or undecodable body from Overpass
    #[error("Failed to fetch data from OpenStreetMap - {0}")]
    UpstreamFetch(#[from] reqwest::Error),
}

impl ToolError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::InputValidation(detail.into())
    }
}
