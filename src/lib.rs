pub mod cli;
pub mod connector;
pub mod params;
pub mod probe;
pub mod tls;
