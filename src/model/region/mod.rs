mod catalog;
mod data;

pub use catalog::{DistrictRecord, RegionCatalog, RegionOption, StateKind, StateRecord};
