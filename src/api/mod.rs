pub mod auth;
pub mod client;
pub mod models;
pub mod regions;

/// Host inventory query endpoint
pub const HOSTS_QUERY_ENDPOINT: &str = "/devices/queries/devices/v1";
