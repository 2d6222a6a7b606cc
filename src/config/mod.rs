use anyhow::{anyhow, Result};
use fc_core::{
    entities::OfferId,
    offers::{OfferCatalog, OfferPolicy},
};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "foodies-circle.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "FC_JWT_SECRET";
const ENV_NAME_CODE_KEY: &str = "FC_CODE_KEY";

const DEFAULT_TOKEN_EXPIRE_IN: Duration = Duration::from_secs(14 * 24 * 60 * 60);

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub promotions: Promotions,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            self.webserver.jwt_secret = Some(secret);
        }
        if let Ok(key) = env::var(ENV_NAME_CODE_KEY) {
            self.promotions.code_key = Some(key);
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub jwt_secret: Option<String>,
    pub token_expire_in: Duration,
}

pub struct Promotions {
    /// Base64 encoded key for sealing redemption codes.
    pub code_key: Option<String>,
    pub offers: OfferCatalog,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            promotions,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be zero"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            jwt_secret,
            token_expire_in,
        } = webserver.unwrap_or_default();
        let jwt_secret = jwt_secret.filter(|s| !s.trim().is_empty());
        let webserver = WebServer {
            enable_cors: cors,
            jwt_secret,
            token_expire_in: token_expire_in.unwrap_or(DEFAULT_TOKEN_EXPIRE_IN),
        };

        let raw::Promotions {
            code_key,
            points_per_redemption,
            code_expire_in,
            offers,
        } = promotions.unwrap_or_default();
        let default_policy = OfferPolicy {
            reward_points: points_per_redemption,
            valid_for: code_expire_in,
        };
        let mut catalog = OfferCatalog::new(default_policy);
        for (offer_id, raw::Offer { points, expire_in }) in offers {
            let offer_id = offer_id
                .parse::<OfferId>()
                .map_err(|err| anyhow!("Invalid offer '{offer_id}': {err}"))?;
            let policy = OfferPolicy {
                reward_points: points.unwrap_or(default_policy.reward_points),
                valid_for: expire_in.or(default_policy.valid_for),
            };
            log::debug!("Offer {offer_id}: {policy:?}");
            catalog = catalog.with_offer(offer_id, policy);
        }
        let promotions = Promotions {
            code_key: code_key.filter(|k| !k.trim().is_empty()),
            offers: catalog,
        };

        Ok(Self {
            db,
            webserver,
            promotions,
        })
    }
}
