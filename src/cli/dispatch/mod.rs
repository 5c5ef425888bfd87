use crate::{
    cli::actions::Action,
    params::{ConnectionParameters, DEFAULT_PORT},
    probe::OutputFormat,
    tls::{TlsConfig, TlsMode},
};
use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use std::{path::PathBuf, time::Duration};

/// Read a string argument, an unset value becomes an empty string
fn string_arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Read an optional setting, an empty value counts as unset
///
/// Orchestrators often inject `VAR=""` for settings nobody filled in.
fn optional_arg<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Extract TLS configuration from the tls-* arguments
///
/// # Errors
///
/// Returns an error if the TLS mode is not recognized or only one of the
/// client certificate and key is set
fn extract_tls_config(matches: &ArgMatches) -> Result<TlsConfig> {
    let mode = optional_arg(matches, "tls-mode")
        .map(|m| m.parse::<TlsMode>().map_err(|e| anyhow!(e)))
        .transpose()?
        .unwrap_or_default();

    let path = |id: &str| optional_arg(matches, id).map(PathBuf::from);

    let tls = TlsConfig {
        mode,
        ca: path("tls-ca"),
        cert: path("tls-cert"),
        key: path("tls-key"),
    };

    if tls.cert.is_some() != tls.key.is_some() {
        bail!("--tls-cert and --tls-key must be used together");
    }

    Ok(tls)
}

/// Convert `ArgMatches` into typed Action enum
///
/// Connection parameters are taken as given: missing values are passed
/// through empty and left for the server to reject. Optional settings that
/// are set but empty fall back to their defaults.
///
/// # Errors
///
/// Returns an error if the port, timeout, TLS settings or output format are
/// invalid
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let port = optional_arg(matches, "port")
        .map(|p| p.parse::<u16>().with_context(|| format!("Invalid port: {p}")))
        .transpose()?
        .unwrap_or(DEFAULT_PORT);

    let params = ConnectionParameters::new(
        string_arg(matches, "host"),
        string_arg(matches, "database"),
        string_arg(matches, "user"),
        string_arg(matches, "password"),
    )
    .with_port(port);

    let connect_timeout = optional_arg(matches, "connect-timeout")
        .map(|t| match t.parse::<u64>() {
            Ok(0) => Err(anyhow!("Invalid connect timeout: must be at least 1 second")),
            Ok(secs) => Ok(Duration::from_secs(secs)),
            Err(e) => Err(anyhow!("Invalid connect timeout: {t}: {e}")),
        })
        .transpose()?;

    let format = optional_arg(matches, "format")
        .map(|f| f.parse::<OutputFormat>().map_err(|e| anyhow!(e)))
        .transpose()?
        .unwrap_or_default();

    let tls = extract_tls_config(matches)?;

    Ok(Action::Probe {
        params,
        connect_timeout,
        format,
        tls,
    })
}
