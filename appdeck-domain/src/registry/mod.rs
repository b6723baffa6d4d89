//! Application registry: validated application entries and the ordered
//! listing the interaction layer renders as cards.

pub mod errors;
pub mod service;
pub mod types;

pub use errors::RegistryError;
pub use service::{ApplicationPage, ApplicationRegistry, InMemoryApplicationRegistry};
pub use types::{Application, Port, Protocol};
