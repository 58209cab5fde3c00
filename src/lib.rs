pub mod category;
pub mod clients;
pub mod config;
pub mod error;
pub mod manifest;
pub mod net;
pub mod normalize;
pub mod params;
pub mod query;
pub mod server;
pub mod tool;
pub mod types;
