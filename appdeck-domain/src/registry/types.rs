//! Data types for the application registry.

use crate::registry::errors::RegistryError;
use appdeck_core::config::ApplicationSeed;
use appdeck_core::types::AppLabel;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum length of a host name, in characters.
const MAX_HOST_LEN: usize = 255;

/// Network protocol of a registered application.
///
/// Variants are declared in alphabetical order of their scheme so that the
/// derived `Ord` matches the listing order of the registry (protocol, then
/// host, then port).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    Ftp,
    Http,
    Https,
    Tcp,
    Udp,
}

impl Protocol {
    /// All protocols accepted by the registry.
    pub const ALL: [Protocol; 5] = [
        Protocol::Ftp,
        Protocol::Http,
        Protocol::Https,
        Protocol::Tcp,
        Protocol::Udp,
    ];

    /// Parses a protocol from its lowercase scheme name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownProtocol`] for anything outside the
    /// accepted set.
    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        match name.to_lowercase().as_str() {
            "ftp" => Ok(Protocol::Ftp),
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            _ => Err(RegistryError::UnknownProtocol {
                name: name.to_string(),
            }),
        }
    }

    /// The URL scheme for this protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Ftp => "ftp",
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }

    /// Whether an application with this protocol can be opened in a new
    /// browsing context. Only plain and secure hypertext transfer qualify;
    /// cards for other protocols get a disabled primary control.
    pub fn is_openable(&self) -> bool {
        matches!(self, Protocol::Http | Protocol::Https)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme())
    }
}

/// A validated network port in the range 1..=65535.
///
/// # Examples
///
/// ```
/// # use appdeck_domain::registry::Port;
/// let port = Port::new(8080).unwrap();
/// assert_eq!(port.get(), 8080);
/// assert!(Port::new(0).is_err());
/// assert!(Port::new(65536).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Port(u16);

impl Port {
    /// Creates a new `Port`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPort`] when the value is outside
    /// 1..=65535.
    pub fn new(value: u32) -> Result<Self, RegistryError> {
        if value < 1 || value > 65535 {
            return Err(RegistryError::InvalidPort { value });
        }
        Ok(Port(value as u16))
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One registered application with its network connection details.
///
/// The address is stored in parts (protocol, host, port) and combined on
/// demand by [`Application::full_address`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub label: AppLabel,
    pub protocol: Protocol,
    pub host: String,
    pub port: Port,
}

impl Application {
    /// Creates a new application entry with a fresh id.
    ///
    /// The host must be non-empty, at most 255 characters, and must be a
    /// bare host name: no embedded scheme, whitespace, or control
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHost`] when the host is malformed.
    pub fn new(
        label: AppLabel,
        protocol: Protocol,
        host: &str,
        port: Port,
    ) -> Result<Self, RegistryError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(RegistryError::InvalidHost {
                reason: "host cannot be empty".to_string(),
            });
        }
        if host.chars().count() > MAX_HOST_LEN {
            return Err(RegistryError::InvalidHost {
                reason: format!("host exceeds {} characters", MAX_HOST_LEN),
            });
        }
        if host.contains("://") {
            return Err(RegistryError::InvalidHost {
                reason: "host must not include a scheme".to_string(),
            });
        }
        if host.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(RegistryError::InvalidHost {
                reason: "host must not contain whitespace or control characters".to_string(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            label,
            protocol,
            host: host.to_string(),
            port,
        })
    }

    /// Builds an application from a configuration seed entry.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] naming the first invalid field.
    pub fn from_seed(seed: &ApplicationSeed) -> Result<Self, RegistryError> {
        let label = AppLabel::new(&seed.label)?;
        let protocol = Protocol::from_name(&seed.protocol)?;
        let port = Port::new(seed.port)?;
        Self::new(label, protocol, &seed.host, port)
    }

    /// Combines protocol, host, and port into a full address string,
    /// e.g. `https://grafana.internal:3000`.
    pub fn full_address(&self) -> String {
        format!("{}://{}:{}", self.protocol.scheme(), self.host, self.port)
    }

    /// Sort key for the registry listing order: protocol, host, port.
    pub(crate) fn sort_key(&self) -> (Protocol, String, Port) {
        (self.protocol, self.host.clone(), self.port)
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_address())
    }
}
