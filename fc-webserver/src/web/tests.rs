use std::{
    net::{SocketAddr, TcpListener},
    thread,
};

use fc_gateways::{code_cipher::AesGcmCodeCipher, notify::Notify};
use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::{sqlite, Cfg};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{rocket_test_setup, run_server};
}

pub fn run_server() -> (SocketAddr, sqlite::Connections) {
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0".parse::<SocketAddr>().unwrap()).unwrap();
        listener.local_addr().unwrap()
    };

    let mut rocket_cfg = RocketCfg::debug_default();
    rocket_cfg.port = address.port();
    rocket_cfg.address = address.ip();

    let socket_address: SocketAddr = (rocket_cfg.address, rocket_cfg.port).into();

    let (rocket, db) = rocket_test_instance_with_cfg(crate::web::mounts(), Cfg::default(), rocket_cfg);

    thread::spawn(move || {
        rocket::execute(rocket.launch()).unwrap();
    });

    (socket_address, db)
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let connections = fc_db_sqlite::Connections::init(":memory:", 1).unwrap();
    fc_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version: prelude::DUMMY_VERSION,
    };
    let gateways = super::Gateways {
        cipher: Box::new(AesGcmCodeCipher::generate()),
        notify: Box::new(Notify::all()),
    };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    (rocket, db)
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, db) = rocket_test_instance_with_cfg(mounts, Cfg::default(), rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
