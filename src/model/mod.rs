pub mod auth;
pub mod cascade;
pub mod common;
pub mod draft;
pub mod eligibility;
pub mod id;
pub mod region;
pub mod template;
