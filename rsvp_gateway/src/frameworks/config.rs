// Runtime configuration, resolved once at startup and never mutated.
//
// Precedence: built-in defaults, then the optional TOML file named by
// `GATEWAY_CONFIG`, then individual environment variables.

use crate::interface_adapters::clients::RemoteTimeouts;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::{env, fmt, fs, io, time::Duration};
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbwP58sJqzGTgLI_jIU0TGq7DoLPYQ6qQ5Ur63p2cecgw4rNAl4PIlvjgta0tEZ0_FG4/exec";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://boda-ceci-angel-bnd.vercel.app";
pub const DEFAULT_VERIFICATION_URL: &str = "https://boda-ceci-angel-bnd.vercel.app/validacion-qr/";
pub const DEFAULT_USER_AGENT: &str = "Wedding-App/1.0";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5000",
    "http://127.0.0.1:5500",
    "https://boda-ceci-angel-bnd.vercel.app",
    "https://ceciigaska.github.io",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_host: IpAddr,
    pub port: u16,
    // Remote scripting endpoint; only ever logged, never returned to clients.
    pub script_url: Url,
    // Public origin used to build QR links handed to guests.
    pub public_base_url: Url,
    // Page the QR code points at.
    pub verification_url: Url,
    pub allowed_origins: Vec<String>,
    pub user_agent: String,
    pub timeouts: RemoteTimeouts,
}

// Shape of the optional TOML file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bind_host: Option<String>,
    pub port: Option<u16>,
    pub script_url: Option<String>,
    pub public_base_url: Option<String>,
    pub verification_url: Option<String>,
    pub allowed_origins: Option<Vec<String>>,
    pub user_agent: Option<String>,
    pub lookup_timeout_ms: Option<u64>,
    pub search_timeout_ms: Option<u64>,
    pub submit_timeout_ms: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: io::Error },
    Parse(toml::de::Error),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config file {path}: {source}")
            }
            ConfigError::Parse(err) => write!(f, "invalid config file: {err}"),
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let file = match env::var("GATEWAY_CONFIG") {
            Ok(path) => {
                let raw = fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                toml::from_str(&raw).map_err(ConfigError::Parse)?
            }
            Err(_) => FileConfig::default(),
        };

        Self::resolve(file, |key| env::var(key).ok())
    }

    // Merge file values with environment overrides read through `lookup`.
    pub fn resolve(
        file: FileConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_host = match lookup("BIND_HOST").or(file.bind_host) {
            Some(value) => value
                .parse()
                .map_err(|_| invalid("BIND_HOST", &value))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| invalid("PORT", &value))?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let script_url = http_url(
            "SCRIPT_URL",
            lookup("SCRIPT_URL").or(file.script_url),
            DEFAULT_SCRIPT_URL,
        )?;
        let public_base_url = http_url(
            "PUBLIC_BASE_URL",
            lookup("PUBLIC_BASE_URL").or(file.public_base_url),
            DEFAULT_PUBLIC_BASE_URL,
        )?;
        let verification_url = http_url(
            "VERIFICATION_URL",
            lookup("VERIFICATION_URL").or(file.verification_url),
            DEFAULT_VERIFICATION_URL,
        )?;

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => file.allowed_origins.unwrap_or_else(|| {
                DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|origin| origin.to_string())
                    .collect()
            }),
        };

        let user_agent = lookup("USER_AGENT")
            .or(file.user_agent)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let defaults = RemoteTimeouts::default();
        let timeouts = RemoteTimeouts {
            lookup: timeout(
                "LOOKUP_TIMEOUT_MS",
                lookup("LOOKUP_TIMEOUT_MS"),
                file.lookup_timeout_ms,
                defaults.lookup,
            )?,
            search: timeout(
                "SEARCH_TIMEOUT_MS",
                lookup("SEARCH_TIMEOUT_MS"),
                file.search_timeout_ms,
                defaults.search,
            )?,
            submit: timeout(
                "SUBMIT_TIMEOUT_MS",
                lookup("SUBMIT_TIMEOUT_MS"),
                file.submit_timeout_ms,
                defaults.submit,
            )?,
        };

        Ok(Self {
            bind_host,
            port,
            script_url,
            public_base_url,
            verification_url,
            allowed_origins,
            user_agent,
            timeouts,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

fn http_url(key: &'static str, value: Option<String>, default: &str) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    match Url::parse(&raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Err(invalid(key, &raw)),
    }
}

fn timeout(
    key: &'static str,
    env_value: Option<String>,
    file_value: Option<u64>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let millis = match env_value {
        Some(value) => value.parse::<u64>().map_err(|_| invalid(key, &value))?,
        None => match file_value {
            Some(millis) => millis,
            None => return Ok(default),
        },
    };

    if millis == 0 {
        return Err(invalid(key, "0"));
    }
    Ok(Duration::from_millis(millis))
}
