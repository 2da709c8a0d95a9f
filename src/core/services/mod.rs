//! Service layer: business rules between the CLI and storage/API layers

pub mod config_service;
pub mod filter_service;
