use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("foodies-circle.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub promotions: Option<Promotions>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub jwt_secret: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub token_expire_in: Option<Duration>,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Promotions {
    pub code_key: Option<String>,
    pub points_per_redemption: u64,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub code_expire_in: Option<Duration>,
    #[serde(default)]
    pub offers: HashMap<String, Offer>,
}

impl Default for Promotions {
    fn default() -> Self {
        Config::default()
            .promotions
            .expect("Promotions configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Offer {
    pub points: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub expire_in: Option<Duration>,
}
