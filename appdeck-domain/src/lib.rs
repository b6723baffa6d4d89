//! # Appdeck Domain Library (`appdeck-domain`)
//!
//! Domain layer for Appdeck, the internal application registry tool. It
//! provides:
//!
//! - **Registry**: validated [`registry::Application`] entries (protocol,
//!   host, port) and the [`registry::ApplicationRegistry`] service with
//!   ordered listing, counting, and pagination.
//! - **Toasts**: the [`toasts::ToastService`] with severity-dependent
//!   lifetimes, a replace-not-stack policy, and scheduled, cancellable
//!   expiry.
//! - **Ports**: the platform capability seams ([`ports::ContextOpener`],
//!   [`ports::Clipboard`]) that the interaction layer consumes and tests
//!   substitute with fakes.

pub use appdeck_core as core;

pub mod error;
pub mod ports;
pub mod registry;
pub mod toasts;

pub use error::{DomainError, DomainResult};
pub use ports::{Clipboard, ClipboardError, ContextOpener, OpenError, OpenOutcome};
pub use registry::{
    Application, ApplicationPage, ApplicationRegistry, InMemoryApplicationRegistry, Port, Protocol,
    RegistryError,
};
pub use toasts::{
    DefaultToastService, DismissReason, Toast, ToastEvent, ToastService, ToastSeverity,
};
