use cinelink_gateway::PresenterSettings;
use cinelink_redirect::StoreSettings;
use cinelink_telemetry::LogFormat;
use clap::{Parser, ValueEnum};
use jiff::SignedDuration;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "CINELINK_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "CINELINK_PUBLIC_BASE_URL";
pub const WATCH_BASE_URL_ENV: &str = "CINELINK_WATCH_BASE_URL";
pub const REDIRECT_TTL_ENV: &str = "CINELINK_REDIRECT_TTL";
pub const TOKEN_BYTES_ENV: &str = "CINELINK_TOKEN_BYTES";
pub const LOG_FORMAT_ENV: &str = "CINELINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REDIRECT_TTL: &str = "6h";
pub const DEFAULT_TOKEN_BYTES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Pretty => write!(f, "pretty"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cinelink-gateway", version)]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public origin of this gateway; enables redirect links when set
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    /// Streaming hub that plays a URL passed as `?url=`
    #[arg(long, env = WATCH_BASE_URL_ENV)]
    pub watch_base_url: Option<String>,

    /// Lifetime of issued redirect tokens, e.g. `6h` or `90m`
    #[arg(
        long,
        env = REDIRECT_TTL_ENV,
        default_value = DEFAULT_REDIRECT_TTL,
        value_parser = parse_ttl,
    )]
    pub redirect_ttl: Duration,

    #[arg(long, env = TOKEN_BYTES_ENV, default_value_t = DEFAULT_TOKEN_BYTES)]
    pub token_bytes: usize,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings::builder()
            .ttl(self.redirect_ttl)
            .token_bytes(self.token_bytes)
            .build()
    }

    pub fn presenter_settings(&self) -> PresenterSettings {
        PresenterSettings {
            public_base_url: self.public_base_url.clone(),
            watch_base_url: self.watch_base_url.clone(),
        }
    }
}

fn parse_ttl(value: &str) -> Result<Duration, String> {
    let ttl: SignedDuration = value.parse().map_err(|err: jiff::Error| err.to_string())?;
    Duration::try_from(ttl).map_err(|err| err.to_string())
}
