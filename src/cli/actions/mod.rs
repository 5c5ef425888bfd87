mod run;

use crate::{params::ConnectionParameters, probe::OutputFormat, tls::TlsConfig};
use std::{process::ExitCode, time::Duration};

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Probe {
        params: ConnectionParameters,
        connect_timeout: Option<Duration>,
        format: OutputFormat,
        tls: TlsConfig,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be written to stdout
    pub async fn execute(self) -> anyhow::Result<ExitCode> {
        run::execute(self).await
    }
}
