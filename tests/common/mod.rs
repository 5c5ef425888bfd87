#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use dbprobe::connector::{ConnectionError, ConnectionHandle, Connector};
use dbprobe::params::ConnectionParameters;
use std::{
    env,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

pub const MARIADB_HOST: &str = "127.0.0.1";
pub const MARIADB_PORT: u16 = 3306;
pub const MARIADB_DATABASE: &str = "testdb";
pub const MARIADB_USER: &str = "dbprobe";
pub const MARIADB_PASSWORD: &str = "secret";

pub fn skip_if_no_mariadb() -> bool {
    env::var("SKIP_MARIADB_TESTS").is_ok()
}

pub fn mariadb_params() -> ConnectionParameters {
    ConnectionParameters::new(MARIADB_HOST, MARIADB_DATABASE, MARIADB_USER, MARIADB_PASSWORD)
        .with_port(MARIADB_PORT)
}

/// Scenario parameters: {host: db.local, database: app, user: root, password: secret}
pub fn scenario_params() -> ConnectionParameters {
    ConnectionParameters::new("db.local", "app", "root", "secret")
}

pub fn pick_free_port() -> u16 {
    std::net::TcpListener::bind(("127.0.0.1", 0))
        .expect("failed to bind random local port")
        .local_addr()
        .expect("failed to read local addr")
        .port()
}

pub fn dbprobe_binary_path() -> PathBuf {
    env::var_os("CARGO_BIN_EXE_dbprobe")
        .map_or_else(|| PathBuf::from("target/debug/dbprobe"), PathBuf::from)
}

/// Counts what the probe did with the database layer
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    attempts: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    leaked: Arc<AtomicUsize>,
}

impl Ledger {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Handles dropped without being closed
    pub fn leaked(&self) -> usize {
        self.leaked.load(Ordering::SeqCst)
    }
}

/// Handle double: panics on a second close, counts drops without a close
#[derive(Debug)]
pub struct MockHandle {
    ledger: Ledger,
    closed: bool,
    close_error: Option<String>,
}

impl ConnectionHandle for MockHandle {
    fn close(mut self) -> impl Future<Output = Result<(), ConnectionError>> {
        async move {
            let previous = self.ledger.closes.fetch_add(1, Ordering::SeqCst);
            assert_eq!(previous, 0, "connection closed more than once");
            self.closed = true;
            match self.close_error.take() {
                Some(cause) => Err(ConnectionError::driver(cause)),
                None => Ok(()),
            }
        }
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        if !self.closed {
            self.ledger.leaked.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// What the mock server does on the n-th attempt
#[derive(Debug, Clone)]
pub enum Response {
    Accept,
    Reject(String),
    Hang,
}

/// Server double that checks credentials like a `MySQL` server would
#[derive(Debug, Clone)]
pub struct MockServer {
    expected: ConnectionParameters,
    ledger: Ledger,
    close_error: Option<String>,
}

impl MockServer {
    pub fn new(expected: ConnectionParameters) -> Self {
        Self {
            expected,
            ledger: Ledger::default(),
            close_error: None,
        }
    }

    pub fn failing_close(mut self, cause: &str) -> Self {
        self.close_error = Some(cause.to_string());
        self
    }

    pub fn ledger(&self) -> Ledger {
        self.ledger.clone()
    }

    fn check(&self, params: &ConnectionParameters) -> Result<(), String> {
        if params.host.is_empty() || params.host != self.expected.host {
            return Err(format!(
                "error communicating with database: failed to lookup address information: host '{}' unreachable",
                params.host
            ));
        }
        if params.user != self.expected.user || params.password != self.expected.password {
            return Err(format!("Access denied for user '{}'", params.user));
        }
        if params.database != self.expected.database {
            return Err(format!("Unknown database '{}'", params.database));
        }
        Ok(())
    }
}

impl Connector for MockServer {
    type Handle = MockHandle;

    fn connect(
        &self,
        params: &ConnectionParameters,
    ) -> impl Future<Output = Result<Self::Handle, ConnectionError>> {
        self.ledger.attempts.fetch_add(1, Ordering::SeqCst);
        let checked = self.check(params);
        let ledger = self.ledger.clone();
        let close_error = self.close_error.clone();

        async move {
            checked.map_err(ConnectionError::driver)?;
            Ok(MockHandle {
                ledger,
                closed: false,
                close_error,
            })
        }
    }
}

/// Connector double that replays one response per attempt
#[derive(Debug, Clone)]
pub struct ScriptedConnector {
    script: Vec<Response>,
    ledger: Ledger,
}

impl ScriptedConnector {
    pub fn new(script: Vec<Response>) -> Self {
        Self {
            script,
            ledger: Ledger::default(),
        }
    }

    pub fn ledger(&self) -> Ledger {
        self.ledger.clone()
    }
}

impl Connector for ScriptedConnector {
    type Handle = MockHandle;

    fn connect(
        &self,
        _params: &ConnectionParameters,
    ) -> impl Future<Output = Result<Self::Handle, ConnectionError>> {
        let attempt = self.ledger.attempts.fetch_add(1, Ordering::SeqCst);
        let response = self
            .script
            .get(attempt)
            .cloned()
            .unwrap_or_else(|| Response::Reject("script exhausted".to_string()));
        let ledger = self.ledger.clone();

        async move {
            match response {
                Response::Accept => Ok(MockHandle {
                    ledger,
                    closed: false,
                    close_error: None,
                }),
                Response::Reject(cause) => Err(ConnectionError::driver(cause)),
                Response::Hang => std::future::pending().await,
            }
        }
    }
}

/// Single line written by the probe, without the newline
pub fn output_line(buffer: &[u8]) -> String {
    let output = String::from_utf8(buffer.to_vec()).expect("probe output is utf-8");
    assert_eq!(
        output.matches('\n').count(),
        1,
        "probe must write exactly one line: {output:?}"
    );
    output.trim_end().to_string()
}
