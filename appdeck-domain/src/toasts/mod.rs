//! Transient toast notifications with severity-dependent lifetimes and a
//! replace-not-stack display policy.

pub mod service;
pub mod types;

pub use service::{DefaultToastService, ToastService};
pub use types::{DismissReason, Toast, ToastEvent, ToastSeverity, LEAVE_WINDOW};
