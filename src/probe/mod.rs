//! One-shot connectivity check
//!
//! Connect once, write one line, release the session. There is no retry: a
//! failed attempt is reported and becomes a non-zero exit status.

pub mod report;

use crate::{
    connector::{ConnectionError, ConnectionHandle, Connector},
    params::ConnectionParameters,
};
use std::{
    io::Write,
    process::ExitCode,
    time::{Duration, Instant},
};
use tokio::time::timeout;
use tracing::{info, warn};

pub use report::{FAILURE_PREFIX, OutputFormat, Report, SUCCESS_LINE, Status};

/// Terminal state of a probe run
#[derive(Debug)]
pub enum Outcome {
    Connected,
    Failed(ConnectionError),
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Connected)
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Connected => ExitCode::SUCCESS,
            Self::Failed(_) => ExitCode::FAILURE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectivityProbe<C> {
    connector: C,
    connect_timeout: Option<Duration>,
    format: OutputFormat,
}

impl<C: Connector> ConnectivityProbe<C> {
    #[must_use]
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            connect_timeout: None,
            format: OutputFormat::Text,
        }
    }

    /// Bound the single attempt; `None` waits as long as the driver does
    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the check and write the result line to `out`
    ///
    /// On success the line is written first and the session is released
    /// right after, even when writing the line fails.
    ///
    /// # Errors
    ///
    /// Returns an error only if the result line cannot be written; connection
    /// failures are reported through [`Outcome::Failed`]
    pub async fn run<W: Write>(
        &self,
        params: &ConnectionParameters,
        out: &mut W,
    ) -> anyhow::Result<Outcome> {
        let started = Instant::now();

        match self.attempt(params).await {
            Ok(handle) => {
                info!(
                    host = %params.host,
                    elapsed = ?started.elapsed(),
                    "connected"
                );

                let written = self.write_report(params, None, out);

                if let Err(err) = handle.close().await {
                    warn!(error = %err, "failed to close connection");
                }

                written?;
                Ok(Outcome::Connected)
            }
            Err(err) => {
                warn!(
                    host = %params.host,
                    elapsed = ?started.elapsed(),
                    error = %err,
                    "connection failed"
                );

                self.write_report(params, Some(&err), out)?;
                Ok(Outcome::Failed(err))
            }
        }
    }

    async fn attempt(&self, params: &ConnectionParameters) -> Result<C::Handle, ConnectionError> {
        let attempt = self.connector.connect(params);

        match self.connect_timeout {
            Some(limit) => timeout(limit, attempt)
                .await
                .unwrap_or(Err(ConnectionError::TimedOut(limit))),
            None => attempt.await,
        }
    }

    fn write_report<W: Write>(
        &self,
        params: &ConnectionParameters,
        error: Option<&ConnectionError>,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let line = Report::new(params, error).render(self.format)?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
