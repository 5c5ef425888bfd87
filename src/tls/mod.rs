//! TLS settings for the probe connection
//!
//! The probe never speaks TLS itself; it hands the mode and certificate paths
//! to the `MySQL` driver, which performs the handshake as part of connecting.

pub mod config;

pub use config::{TlsConfig, TlsMode};
