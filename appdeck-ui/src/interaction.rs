//! The interaction layer: open/copy actions, toast feedback, keyboard
//! navigation, and loading states over a page of application cards.
//!
//! Every public entry point is an event boundary: failures are logged and
//! surfaced as toasts, never propagated, so one failing action cannot take
//! the rest of the page down with it.

use crate::keys::{KeyCode, KeyDisposition, KeyEvent};
use crate::page::{FocusTarget, Page};
use appdeck_domain::ports::{Clipboard, ContextOpener, OpenOutcome};
use appdeck_domain::registry::{ApplicationRegistry, Protocol};
use appdeck_domain::toasts::{DismissReason, ToastService, ToastSeverity};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

/// How long an activated control stays in the loading state. Cleared
/// unconditionally, independent of the action's outcome.
pub const LOADING_CLEAR: Duration = Duration::from_millis(1000);

/// Message shown when the page renders with no cards.
pub const EMPTY_STATE_MESSAGE: &str = "No applications registered yet...";

/// Which of a card's controls an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// The "go to" control.
    Primary,
    /// The "copy address" control.
    Copy,
}

/// The interaction layer over a rendered page of application cards.
///
/// Construct it with the platform ports and a toast service, then call
/// [`InteractionLayer::initialize`] once the registry listing is available.
pub struct InteractionLayer {
    opener: Arc<dyn ContextOpener>,
    clipboard: Arc<dyn Clipboard>,
    toasts: Arc<dyn ToastService>,
    page: Page,
    loading: Arc<Mutex<HashSet<(usize, ControlKind)>>>,
}

impl InteractionLayer {
    pub fn new(
        opener: Arc<dyn ContextOpener>,
        clipboard: Arc<dyn Clipboard>,
        toasts: Arc<dyn ToastService>,
    ) -> Self {
        Self {
            opener,
            clipboard,
            toasts,
            page: Page::default(),
            loading: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Scans the registry listing into the page, makes every card focusable,
    /// and announces the empty state when there is nothing to show.
    ///
    /// Called once at load; calling it again rebuilds the page from scratch,
    /// exactly like a reload.
    pub async fn initialize(&mut self, registry: &dyn ApplicationRegistry) {
        let applications = registry.list().await;
        debug!(cards = applications.len(), "Initializing interaction layer");
        self.page = Page::from_applications(applications);
        self.page.assign_tab_order();
        if self.page.is_empty_state() {
            self.toasts.show(EMPTY_STATE_MESSAGE, ToastSeverity::Info).await;
        }
    }

    /// The current page snapshot.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Moves the focus cursor onto a card. Returns `false` for an unknown
    /// index.
    pub fn focus_card(&mut self, index: usize) -> bool {
        self.page.set_focus(FocusTarget::Card(index))
    }

    /// Whether a control is currently in the loading state.
    pub fn is_loading(&self, index: usize, kind: ControlKind) -> bool {
        self.loading.lock().unwrap().contains(&(index, kind))
    }

    /// Validates `address` and opens it in a new browsing context.
    ///
    /// Only plain and secure hypertext transfer schemes are allowed; every
    /// other address yields a single error toast and no open attempt. A
    /// refused context (pop-up suppression) yields a warning with
    /// actionable wording; an obtained context yields a success toast.
    pub async fn open_target(&self, address: &str, label: &str) {
        let url = match Url::parse(address) {
            Ok(url) => url,
            Err(e) => {
                warn!(address, error = %e, "Rejected unparseable address");
                self.toasts.show("Invalid URL format", ToastSeverity::Error).await;
                return;
            }
        };
        let openable = Protocol::from_name(url.scheme())
            .map(|p| p.is_openable())
            .unwrap_or(false);
        if !openable {
            warn!(address, scheme = url.scheme(), "Rejected disallowed scheme");
            self.toasts.show("Invalid URL format", ToastSeverity::Error).await;
            return;
        }

        match self.opener.open(&url).await {
            Ok(OpenOutcome::Opened { focused }) => {
                if !focused {
                    debug!(address, "New context obtained but could not be focused");
                }
                self.toasts
                    .show(&format!("Opening {}...", label), ToastSeverity::Success)
                    .await;
            }
            Ok(OpenOutcome::Refused) => {
                self.toasts
                    .show(
                        "Pop-up blocked. Please allow pop-ups for this page.",
                        ToastSeverity::Warning,
                    )
                    .await;
            }
            Err(e) => {
                error!(address, error = %e, "Opening a new context failed unexpectedly");
                self.toasts
                    .show("Could not open the application", ToastSeverity::Error)
                    .await;
            }
        }
    }

    /// Copies `text` to the clipboard.
    ///
    /// Prefers the asynchronous clipboard in a secure context; falls back to
    /// the legacy selection-copy path when the write is rejected. When no
    /// clipboard capability exists at all, a warning toast says so.
    pub async fn copy_address(&self, text: &str) {
        if self.clipboard.has_async_clipboard() && self.clipboard.is_secure_context() {
            match self.clipboard.write_text(text).await {
                Ok(()) => {
                    self.toasts
                        .show("Address copied to clipboard", ToastSeverity::Success)
                        .await;
                }
                Err(e) => {
                    warn!(error = %e, "Asynchronous clipboard write failed; using fallback");
                    self.legacy_copy(text).await;
                }
            }
            return;
        }

        if self.clipboard.has_legacy_copy() {
            self.legacy_copy(text).await;
            return;
        }

        self.toasts
            .show("Copy not supported in this browser", ToastSeverity::Warning)
            .await;
    }

    /// Legacy copy path: a transient scratch input is populated, selected,
    /// and fed to the legacy copy command. The scratch input is removed from
    /// the page when this function returns, whatever happened in between.
    async fn legacy_copy(&self, text: &str) {
        let mut scratch = self.page.insert_scratch_input(text);
        scratch.select_all();
        let result = match scratch.selection() {
            Some(selection) => self.clipboard.legacy_copy(selection),
            None => {
                // select_all was just called, so this arm is unreachable in
                // practice; keep the failure path uniform anyway.
                Err(appdeck_domain::ports::ClipboardError::AccessFailed(
                    "selection unavailable".to_string(),
                ))
            }
        };
        match result {
            Ok(()) => {
                self.toasts
                    .show("Address copied to clipboard", ToastSeverity::Success)
                    .await;
            }
            Err(e) => {
                error!(error = %e, "Legacy copy command failed");
                self.toasts
                    .show("Could not copy the address", ToastSeverity::Error)
                    .await;
            }
        }
    }

    /// Activates a card's primary ("go to") control.
    ///
    /// Disabled or currently-loading controls are a no-op. Activation sets
    /// the loading state and opens the card's address.
    pub async fn activate_primary(&self, index: usize) {
        let Some(card) = self.page.card(index) else {
            return;
        };
        if !card.primary_enabled() {
            debug!(index, "Ignored activation of disabled primary control");
            return;
        }
        if self.is_loading(index, ControlKind::Primary) {
            return;
        }
        let address = card.application.full_address();
        let label = card.application.label.value().to_string();
        self.begin_loading(index, ControlKind::Primary);
        self.open_target(&address, &label).await;
    }

    /// Activates a card's secondary ("copy") control.
    pub async fn activate_copy(&self, index: usize) {
        let Some(card) = self.page.card(index) else {
            return;
        };
        if self.is_loading(index, ControlKind::Copy) {
            return;
        }
        let address = card.application.full_address();
        self.begin_loading(index, ControlKind::Copy);
        self.copy_address(&address).await;
    }

    /// Sets the loading state for a control and schedules the unconditional
    /// clear. The clear tolerates the flag already being gone.
    fn begin_loading(&self, index: usize, kind: ControlKind) {
        self.loading.lock().unwrap().insert((index, kind));
        let loading = Arc::clone(&self.loading);
        tokio::spawn(async move {
            tokio::time::sleep(LOADING_CLEAR).await;
            loading.lock().unwrap().remove(&(index, kind));
        });
    }

    /// Handles one key event: card-level bindings first, then the
    /// page-level ones.
    pub async fn handle_key(&mut self, event: &KeyEvent) -> KeyDisposition {
        let disposition = self.handle_card_key(event).await;
        if disposition == KeyDisposition::Consumed {
            return disposition;
        }
        self.handle_global_key(event, false).await
    }

    /// Card-level bindings, applied to the focused card: Enter/Space
    /// activate the primary control, ArrowDown/ArrowUp move focus between
    /// cards without wraparound.
    async fn handle_card_key(&mut self, event: &KeyEvent) -> KeyDisposition {
        let Some(focus) = self.page.focus() else {
            return KeyDisposition::Ignored;
        };
        let index = focus.card_index();
        match event.code {
            KeyCode::Enter | KeyCode::Space if !event.primary_modifier => {
                self.activate_primary(index).await;
                KeyDisposition::Consumed
            }
            KeyCode::ArrowDown if !event.primary_modifier => {
                // Past the last card: a no-op, focus stays put.
                if index + 1 < self.page.cards().len() {
                    self.page.set_focus(FocusTarget::Card(index + 1));
                }
                KeyDisposition::Consumed
            }
            KeyCode::ArrowUp if !event.primary_modifier => {
                if index > 0 {
                    self.page.set_focus(FocusTarget::Card(index - 1));
                }
                KeyDisposition::Consumed
            }
            _ => KeyDisposition::Ignored,
        }
    }

    /// Page-level bindings. `already_handled` reports whether an earlier
    /// handler consumed the event; the copy shortcut backs off in that case.
    pub async fn handle_global_key(
        &mut self,
        event: &KeyEvent,
        already_handled: bool,
    ) -> KeyDisposition {
        match event.code {
            KeyCode::Char('g') if event.primary_modifier => {
                match self.page.focus_first_enabled_primary() {
                    Some(index) => {
                        let label = self
                            .page
                            .card(index)
                            .map(|c| c.application.label.value().to_string())
                            .unwrap_or_default();
                        debug!(index, "Shortcut focused first enabled primary control");
                        self.toasts
                            .show(&format!("Jumped to {}", label), ToastSeverity::Info)
                            .await;
                    }
                    // No enabled control anywhere: the focus attempt fails
                    // silently.
                    None => debug!("Shortcut found no enabled primary control"),
                }
                KeyDisposition::Consumed
            }
            KeyCode::Char('c') if event.primary_modifier => {
                if already_handled {
                    return KeyDisposition::Ignored;
                }
                let Some(focus) = self.page.focus() else {
                    return KeyDisposition::Ignored;
                };
                self.activate_copy(focus.card_index()).await;
                KeyDisposition::Consumed
            }
            KeyCode::Escape => {
                self.toasts.dismiss_all(DismissReason::EscapeKey).await;
                KeyDisposition::Consumed
            }
            _ => KeyDisposition::Ignored,
        }
    }
}
