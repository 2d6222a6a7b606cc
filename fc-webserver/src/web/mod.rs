use std::time::Duration;

use fc_core::{
    gateways::{code_cipher::CodeCipher, notify::NotificationGateway},
    offers::OfferCatalog,
};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// A random secret is generated if `None`.
    pub jwt_secret: Option<String>,
    pub token_expire_in: Duration,
    pub offers: OfferCatalog,
}

impl Cfg {
    pub const DEFAULT_TOKEN_EXPIRE_IN: Duration = Duration::from_secs(14 * 24 * 60 * 60);
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_expire_in: Self::DEFAULT_TOKEN_EXPIRE_IN,
            offers: OfferCatalog::default(),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    cipher: Box<dyn CodeCipher + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { cipher, notify } = gateways;

    let jwt_state = match &cfg.jwt_secret {
        Some(secret) => jwt::JwtState::new(secret.as_bytes(), cfg.token_expire_in),
        None => {
            warn!("No JWT secret configured: issued tokens will not survive a restart");
            jwt::JwtState::random(cfg.token_expire_in)
        }
    };

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let cipher = guards::Cipher(cipher);
    let notify_gw = guards::Notify(notify);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(cipher)
        .manage(notify_gw)
        .manage(cfg)
        .manage(version)
        .register("/", api::catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    cipher: Box<dyn CodeCipher + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways { cipher, notify };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
