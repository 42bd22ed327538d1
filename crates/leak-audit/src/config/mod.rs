use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub audit: AuditDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            audit: AuditDefaults::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Fallback audit parameters used when a caller does not supply its own.
///
/// The leakage engine never reads these directly; the CLI and HTTP layers
/// resolve them into explicit
/// [`ImpactParameters`](crate::workflows::leakage::ImpactParameters) per request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditDefaults {
    pub currency: String,
    pub average_transaction_value: f64,
    pub estimated_monthly_contacts: u32,
}

impl AuditDefaults {
    fn from_env() -> Result<Self, ConfigError> {
        let currency = env::var("AUDIT_CURRENCY").unwrap_or_else(|_| "USD".to_string());

        let average_transaction_value = env::var("AUDIT_AVG_TRANSACTION_VALUE")
            .unwrap_or_else(|_| "100".to_string())
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidTransactionValue)?;

        let estimated_monthly_contacts = env::var("AUDIT_MONTHLY_CONTACTS")
            .unwrap_or_else(|_| "50".to_string())
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidMonthlyContacts)?;

        Ok(Self {
            currency,
            average_transaction_value,
            estimated_monthly_contacts,
        })
    }
}

impl Default for AuditDefaults {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            average_transaction_value: 100.0,
            estimated_monthly_contacts: 50,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTransactionValue,
    InvalidMonthlyContacts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTransactionValue => write!(
                f,
                "AUDIT_AVG_TRANSACTION_VALUE must be a non-negative number"
            ),
            ConfigError::InvalidMonthlyContacts => {
                write!(f, "AUDIT_MONTHLY_CONTACTS must be a valid u32")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTransactionValue
            | ConfigError::InvalidMonthlyContacts => None,
        }
    }
}
