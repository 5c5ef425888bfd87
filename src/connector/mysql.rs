use sqlx::{
    ConnectOptions, Connection, MySqlConnection,
    mysql::{MySqlConnectOptions, MySqlDatabaseError},
};
use tracing::debug;

use super::{ConnectionError, ConnectionHandle, Connector};
use crate::params::ConnectionParameters;
use crate::tls::TlsConfig;

/// Connects to `MySQL`/`MariaDB` through sqlx
#[derive(Debug, Clone, Default)]
pub struct MySqlConnector {
    tls: TlsConfig,
}

impl MySqlConnector {
    #[must_use]
    pub const fn new(tls: TlsConfig) -> Self {
        Self { tls }
    }

    /// Build the driver options for one session
    #[must_use]
    pub fn options(&self, params: &ConnectionParameters) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&params.host)
            .port(params.port)
            .username(&params.user)
            .password(&params.password)
            .ssl_mode(self.tls.mode.ssl_mode())
            // no session SETs after the handshake
            .pipes_as_concat(false)
            .no_engine_substitution(false)
            .timezone(None::<String>)
            .set_names(false);

        // an empty schema means "connect without selecting one"
        if !params.database.is_empty() {
            options = options.database(&params.database);
        }

        if self.tls.mode.verifies_ca()
            && let Some(ca_path) = &self.tls.ca
        {
            options = options.ssl_ca(ca_path);
        }

        if let Some((cert_path, key_path)) = self.tls.client_identity() {
            options = options.ssl_client_cert(cert_path).ssl_client_key(key_path);
        }

        options
    }
}

impl Connector for MySqlConnector {
    type Handle = MySqlHandle;

    fn connect(
        &self,
        params: &ConnectionParameters,
    ) -> impl Future<Output = Result<Self::Handle, ConnectionError>> {
        let options = self.options(params);

        debug!(
            host = %params.host,
            port = params.port,
            database = %params.database,
            user = %params.user,
            tls = self.tls.mode.is_enabled(),
            tls_mode = ?self.tls.mode,
            "connecting to MySQL"
        );

        async move {
            let conn = options.connect().await?;
            Ok(MySqlHandle(conn))
        }
    }
}

/// Open `MySQL` session owned by the probe
#[derive(Debug)]
pub struct MySqlHandle(MySqlConnection);

impl ConnectionHandle for MySqlHandle {
    fn close(self) -> impl Future<Output = Result<(), ConnectionError>> {
        // graceful COM_QUIT so the server does not log "Connection reset by peer"
        async move {
            self.0.close().await?;
            Ok(())
        }
    }
}

impl From<sqlx::Error> for ConnectionError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // server message only, e.g. "Access denied for user 'root'@'10.0.0.5' (using password: YES)"
            sqlx::Error::Database(db_err) => {
                let code = db_err
                    .try_downcast_ref::<MySqlDatabaseError>()
                    .map(MySqlDatabaseError::number);
                debug!(code = ?code, "server rejected connection");
                Self::driver(db_err.message())
            }
            other => Self::driver(other.to_string()),
        }
    }
}
