use rocket::{serde::json::Json, Route, State};
use serde::Serialize;

use crate::{
    error::{Error, Result},
    model::region::{RegionCatalog, RegionOption, StateKind},
};

pub fn routes() -> Vec<Route> {
    routes![
        states,
        state,
        districts,
        constituencies,
        national_constituencies,
    ]
}

/// Everything known about one State, for the form to decide which inputs to
/// offer as lists and which as free text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateDetails {
    name: &'static str,
    label: String,
    kind: StateKind,
    lok_sabha_seats: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    vidhan_sabha_seats: Option<u16>,
    has_assembly_data: bool,
    districts: Vec<&'static str>,
    national_constituencies: Vec<&'static str>,
}

#[get("/regions/states")]
fn states(catalog: &State<RegionCatalog>) -> Json<Vec<RegionOption>> {
    Json(catalog.state_options())
}

#[get("/regions/state?<name>")]
fn state(name: &str, catalog: &State<RegionCatalog>) -> Result<Json<StateDetails>> {
    let record = catalog
        .state(name)
        .ok_or_else(|| Error::not_found(format!("State {name:?}")))?;
    Ok(Json(StateDetails {
        name: record.name,
        label: record.label(),
        kind: record.kind,
        lok_sabha_seats: record.lok_sabha_seats,
        vidhan_sabha_seats: record.vidhan_sabha_seats,
        has_assembly_data: record.has_assembly_data(),
        districts: catalog.districts_of(record.name),
        national_constituencies: catalog.national_constituencies_of(record.name),
    }))
}

#[get("/regions/districts?<state>")]
fn districts(state: &str, catalog: &State<RegionCatalog>) -> Json<Vec<RegionOption>> {
    Json(catalog.district_options(state))
}

#[get("/regions/constituencies?<state>&<district>")]
fn constituencies(
    state: &str,
    district: &str,
    catalog: &State<RegionCatalog>,
) -> Json<Vec<RegionOption>> {
    Json(catalog.constituency_options(state, district))
}

#[get("/regions/national-constituencies?<state>")]
fn national_constituencies(state: &str, catalog: &State<RegionCatalog>) -> Json<Vec<RegionOption>> {
    Json(catalog.national_constituency_options(state))
}
