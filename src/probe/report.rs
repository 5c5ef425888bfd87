use crate::{connector::ConnectionError, params::ConnectionParameters};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::str::FromStr;

pub const SUCCESS_LINE: &str = "Connected successfully";
pub const FAILURE_PREFIX: &str = "Connection failed: ";

/// How the result line is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}")),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// One probe result, rendered as a single line
#[derive(Serialize, Debug)]
pub struct Report<'a> {
    pub status: Status,
    pub time: String,
    pub host: &'a str,
    pub port: u16,
    pub database: &'a str,
    pub user: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(params: &'a ConnectionParameters, error: Option<&ConnectionError>) -> Self {
        Self {
            status: if error.is_some() {
                Status::Error
            } else {
                Status::Ok
            },
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            host: &params.host,
            port: params.port,
            database: &params.database,
            user: &params.user,
            error: error.map(ToString::to_string),
        }
    }

    /// Render without a trailing newline
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(match &self.error {
                None => SUCCESS_LINE.to_string(),
                Some(cause) => format!("{FAILURE_PREFIX}{cause}"),
            }),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}
