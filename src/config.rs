use std::{env, net::SocketAddr};

use color_eyre::eyre::{Result, WrapErr};

use crate::clients::DEFAULT_OVERPASS_URL;

pub const BIND_ADDR_VAR: &str = "OSM_SEARCH_BIND_ADDR";
pub const OVERPASS_URL_VAR: &str = "OSM_SEARCH_OVERPASS_URL";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub overpass_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("{BIND_ADDR_VAR} is not a socket address: {bind_addr}"))?;
        let overpass_url =
            lookup(OVERPASS_URL_VAR).unwrap_or_else(|| DEFAULT_OVERPASS_URL.to_owned());
        Ok(Self {
            bind_addr,
            overpass_url,
        })
    }
}
