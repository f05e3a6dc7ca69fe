//! Configuration modules for the gateway.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables:
//!
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`gateway`]: route policy, realm, and response-header settings

pub mod database;
pub mod gateway;
