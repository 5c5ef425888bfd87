//! The seam between the probe and the database client
//!
//! A [`Connector`] opens exactly one session per call and hands back a
//! [`ConnectionHandle`]; closing consumes the handle, so a session can be
//! released at most once.

pub mod mysql;

use crate::params::ConnectionParameters;
use std::time::Duration;
use thiserror::Error;

pub use mysql::MySqlConnector;

/// Why a connection could not be established
///
/// The probe does not tell causes apart: unreachable host, rejected
/// credentials and unknown schema all arrive as `Driver` with whatever text
/// the client library produced.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("{cause}")]
    Driver { cause: String },

    #[error("connection attempt timed out after {0:?}")]
    TimedOut(Duration),
}

impl ConnectionError {
    #[must_use]
    pub fn driver(cause: impl Into<String>) -> Self {
        Self::Driver {
            cause: cause.into(),
        }
    }
}

/// Opens database sessions
pub trait Connector {
    type Handle: ConnectionHandle;

    /// Make a single connection attempt, no retries
    fn connect(
        &self,
        params: &ConnectionParameters,
    ) -> impl Future<Output = Result<Self::Handle, ConnectionError>>;
}

/// A live database session
pub trait ConnectionHandle {
    /// Release the session
    fn close(self) -> impl Future<Output = Result<(), ConnectionError>>;
}
