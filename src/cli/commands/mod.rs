use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("host")
                .env("MYSQL_HOST")
                .help("database server address")
                .long("host")
                .short('H')
                .value_name("HOST"),
        )
        .arg(
            Arg::new("port")
                .env("MYSQL_PORT")
                .help("database server port [default: 3306]")
                .long("port")
                .short('P')
                .value_name("PORT"),
        )
        .arg(
            Arg::new("database")
                .env("MYSQL_DATABASE")
                .help("schema to select once connected")
                .long("database")
                .short('D')
                .value_name("NAME"),
        )
        .arg(
            Arg::new("user")
                .env("MYSQL_USER")
                .help("user to authenticate as")
                .long("user")
                .short('u')
                .value_name("USER"),
        )
        .arg(
            Arg::new("password")
                .env("MYSQL_PASSWORD")
                .hide_env_values(true)
                .help("password for the user")
                .long("password")
                .short('p')
                .value_name("PASSWORD"),
        )
        .arg(
            Arg::new("connect-timeout")
                .env("MYSQL_CONNECT_TIMEOUT")
                .help("seconds to wait for the connection (default: no limit)")
                .long("connect-timeout")
                .short('t')
                .value_name("SECONDS"),
        )
        .arg(
            Arg::new("format")
                .env("DBPROBE_FORMAT")
                .help("output format of the result line: text, json [default: text]")
                .long("format")
                .short('f')
                .value_name("FORMAT"),
        )
        .arg(
            Arg::new("tls-mode")
                .env("MYSQL_SSL_MODE")
                .help("TLS/SSL mode: disable, require, verify-ca, verify-full")
                .long("tls-mode")
                .long_help(
                    "TLS/SSL connection mode:\n\n\
                    - disable: No TLS (default)\n\
                    - require: TLS required, no certificate verification\n\
                    - verify-ca: Verify server certificate against CA\n\
                    - verify-full: Verify certificate and hostname\n\n\
                    The MySQL ssl-mode names (DISABLED, REQUIRED, VERIFY_CA, \
                    VERIFY_IDENTITY) are accepted too."
                )
                .value_name("MODE"),
        )
        .arg(
            Arg::new("tls-ca")
                .env("MYSQL_SSL_CA")
                .help("Path to CA certificate file for TLS verification")
                .long("tls-ca")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("tls-cert")
                .env("MYSQL_SSL_CERT")
                .help("Path to client certificate file for TLS client authentication")
                .long("tls-cert")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("tls-key")
                .env("MYSQL_SSL_KEY")
                .help("Path to client private key file for TLS client authentication")
                .long("tls-key")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("verbose")
                .help("log to stderr, repeat for more detail (-v info, -vv debug, -vvv trace)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
}
