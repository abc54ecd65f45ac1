#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

use crate::config::{ConfigFairing, UpstreamFairing};
use crate::logging::LoggerFairing;
use crate::model::draft::DraftSessions;
use crate::model::region::RegionCatalog;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod upstream;

/// Build the server, with upstream services taken from the config.
pub fn build() -> Rocket<Build> {
    base_rocket().attach(UpstreamFairing)
}

/// Everything but the upstream services.
fn base_rocket() -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .register("/", api::catchers())
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .manage(RegionCatalog::india())
        .manage(DraftSessions::default())
}

/// Build the server around the given upstream services.
#[cfg(test)]
pub(crate) fn rocket_for_upstream(upstream: upstream::Upstream) -> Rocket<Build> {
    base_rocket().manage(upstream)
}
