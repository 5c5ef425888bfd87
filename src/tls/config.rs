use sqlx::mysql::MySqlSslMode;
use std::{path::PathBuf, str::FromStr};

/// TLS configuration for the probe connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsConfig {
    pub mode: TlsMode,
    pub ca: Option<PathBuf>,
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
}

impl TlsConfig {
    /// Client certificate and key, only when both are set and TLS is on
    #[must_use]
    pub fn client_identity(&self) -> Option<(&PathBuf, &PathBuf)> {
        if !self.mode.is_enabled() {
            return None;
        }
        self.cert.as_ref().zip(self.key.as_ref())
    }
}

/// TLS/SSL mode for the probe connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// No TLS encryption
    #[default]
    Disable,
    /// TLS required, but no certificate verification
    Require,
    /// Verify server certificate against CA
    VerifyCA,
    /// Verify certificate and hostname
    VerifyFull,
}

impl FromStr for TlsMode {
    type Err = String;

    // Accepts the libpq-style names plus the MySQL ssl-mode spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "disable" | "disabled" => Ok(Self::Disable),
            "require" | "required" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCA),
            "verify-full" | "verify-identity" => Ok(Self::VerifyFull),
            _ => Err(format!("Invalid TLS mode: {s}")),
        }
    }
}

impl TlsMode {
    /// Check if TLS is enabled
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disable)
    }

    /// Whether the server certificate is checked against a CA
    #[must_use]
    pub const fn verifies_ca(&self) -> bool {
        matches!(self, Self::VerifyCA | Self::VerifyFull)
    }

    /// `MySQL` ssl-mode equivalent
    #[must_use]
    pub const fn ssl_mode(&self) -> MySqlSslMode {
        match self {
            Self::Disable => MySqlSslMode::Disabled,
            Self::Require => MySqlSslMode::Required,
            Self::VerifyCA => MySqlSslMode::VerifyCa,
            Self::VerifyFull => MySqlSslMode::VerifyIdentity,
        }
    }
}
