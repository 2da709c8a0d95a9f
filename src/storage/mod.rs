//! Storage layer for falcon-cli
//!
//! Handles the YAML configuration file: API credentials and saved filters.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
