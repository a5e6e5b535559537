//! Core DigiGold library (config, credentials, authentication capability).

pub mod auth;
pub mod config;
pub mod logging;
