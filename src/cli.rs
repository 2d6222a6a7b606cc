use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fc_core::gateways::code_cipher::CodeCipher;
use fc_gateways::{code_cipher::AesGcmCodeCipher, notify::Notify};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "foodies-circle", version, about = "Foodie's Circle promotion service")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections =
        fc_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    fc_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let cipher: Box<dyn CodeCipher + Send + Sync> = match &cfg.promotions.code_key {
        Some(key) => Box::new(AesGcmCodeCipher::from_base64_key(key)?),
        None => {
            log::warn!("No code key configured: issued redemption codes will not survive a restart");
            Box::new(AesGcmCodeCipher::generate())
        }
    };
    let notify = Box::new(Notify::all());

    let web_cfg = fc_webserver::Cfg {
        jwt_secret: cfg.webserver.jwt_secret,
        token_expire_in: cfg.webserver.token_expire_in,
        offers: cfg.promotions.offers,
    };
    fc_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        web_cfg,
        cipher,
        notify,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "foodies-circle",
            "--config",
            "custom.toml",
            "--db-url",
            "test.db",
            "--enable-cors",
        ])
        .unwrap();
        assert_eq!(Some(PathBuf::from("custom.toml")), args.config);
        assert_eq!(Some("test.db".to_string()), args.db_url);
        assert!(args.enable_cors);
    }
}
