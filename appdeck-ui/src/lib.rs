//! # Appdeck Interaction Layer (`appdeck-ui`)
//!
//! The user-facing layer of Appdeck, the internal application registry
//! tool. It attaches to a page of server-built application cards and
//! provides:
//!
//! - opening an application's address in a new browsing context with scheme
//!   validation and toast feedback ([`interaction::InteractionLayer::open_target`]),
//! - copying an address to the clipboard with a legacy fallback path
//!   ([`interaction::InteractionLayer::copy_address`]),
//! - keyboard navigation across cards, page-level shortcuts, and transient
//!   loading states ([`interaction::InteractionLayer::handle_key`]),
//! - system adapters backing the platform ports ([`platform`]).
//!
//! All platform access goes through the ports in `appdeck_domain::ports`,
//! so tests drive the whole layer against fakes and a paused clock.

pub mod interaction;
pub mod keys;
pub mod page;
pub mod platform;

pub use interaction::{ControlKind, InteractionLayer, EMPTY_STATE_MESSAGE, LOADING_CLEAR};
pub use keys::{KeyCode, KeyDisposition, KeyEvent};
pub use page::{Card, FocusTarget, Page, ScratchInput};
pub use platform::{SystemClipboard, SystemContextOpener};
