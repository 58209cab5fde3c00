pub mod message;
pub mod overpass;
pub mod search;
