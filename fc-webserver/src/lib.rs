#![recursion_limit = "128"]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

use fc_core::gateways::{code_cipher::CodeCipher, notify::NotificationGateway};
use fc_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    cipher: Box<dyn CodeCipher + Send + Sync>,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(
        connections.into(),
        enable_cors,
        cfg,
        cipher,
        notify_gw,
        version,
    )
    .await;
}
