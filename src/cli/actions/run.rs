use super::Action;
use crate::{connector::MySqlConnector, probe::ConnectivityProbe};
use std::{io, process::ExitCode};

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<ExitCode> {
    match action {
        Action::Probe {
            params,
            connect_timeout,
            format,
            tls,
        } => {
            let probe = ConnectivityProbe::new(MySqlConnector::new(tls))
                .with_connect_timeout(connect_timeout)
                .with_format(format);

            let outcome = probe.run(&params, &mut io::stdout()).await?;
            Ok(outcome.exit_code())
        }
    }
}
