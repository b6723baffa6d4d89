//! Page model: the snapshot of rendered cards the interaction layer works
//! against.
//!
//! Cards are built once from the registry listing; nothing here survives a
//! rebuild. The page also tracks the focus cursor and any transient scratch
//! inputs created by the legacy copy fallback.

use appdeck_domain::registry::Application;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// One rendered application card.
#[derive(Debug, Clone)]
pub struct Card {
    /// Position in document order.
    pub index: usize,
    /// The registered application this card represents.
    pub application: Application,
    /// Tab-order position; assigned during initialization when absent.
    pub tab_index: Option<i32>,
}

impl Card {
    /// Whether the card's primary ("go to") control is usable. Cards for
    /// protocols that cannot be opened in a browsing context render the
    /// control disabled.
    pub fn primary_enabled(&self) -> bool {
        self.application.protocol.is_openable()
    }
}

/// Where the focus cursor currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The card element itself.
    Card(usize),
    /// The card's primary ("go to") control.
    PrimaryControl(usize),
    /// The card's secondary ("copy") control.
    CopyControl(usize),
}

impl FocusTarget {
    /// Index of the card this target belongs to.
    pub fn card_index(&self) -> usize {
        match self {
            FocusTarget::Card(i) | FocusTarget::PrimaryControl(i) | FocusTarget::CopyControl(i) => {
                *i
            }
        }
    }
}

/// A transient, off-screen text input used by the legacy copy fallback.
///
/// The input deregisters itself from the page when dropped, so it cannot
/// outlive the copy attempt regardless of how that attempt ends.
#[derive(Debug)]
pub struct ScratchInput {
    id: Uuid,
    text: String,
    selected: bool,
    registry: Arc<Mutex<HashSet<Uuid>>>,
}

impl ScratchInput {
    /// Selects the entire contents, as the legacy copy command requires.
    pub fn select_all(&mut self) {
        self.selected = true;
    }

    /// The selected text, if a selection has been made.
    pub fn selection(&self) -> Option<&str> {
        self.selected.then_some(self.text.as_str())
    }
}

impl Drop for ScratchInput {
    fn drop(&mut self) {
        self.registry.lock().unwrap().remove(&self.id);
    }
}

/// Snapshot of the rendered page.
#[derive(Debug, Default)]
pub struct Page {
    cards: Vec<Card>,
    empty_state: bool,
    focus: Option<FocusTarget>,
    scratch_inputs: Arc<Mutex<HashSet<Uuid>>>,
}

impl Page {
    /// Builds the page from the registry listing. An empty listing renders
    /// the empty-state marker instead of cards.
    pub fn from_applications(applications: Vec<Application>) -> Self {
        let empty_state = applications.is_empty();
        let cards = applications
            .into_iter()
            .enumerate()
            .map(|(index, application)| Card {
                index,
                application,
                tab_index: None,
            })
            .collect();
        Self {
            cards,
            empty_state,
            focus: None,
            scratch_inputs: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// All cards in document order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// One card by index.
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Whether the empty-state marker is rendered.
    pub fn is_empty_state(&self) -> bool {
        self.empty_state
    }

    /// Gives every card a tab-order position if it does not have one yet.
    pub fn assign_tab_order(&mut self) {
        for card in &mut self.cards {
            if card.tab_index.is_none() {
                card.tab_index = Some(0);
            }
        }
    }

    /// Current focus cursor.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Moves focus to `target`. Returns `false` (leaving focus unchanged)
    /// when the target's card does not exist.
    pub fn set_focus(&mut self, target: FocusTarget) -> bool {
        if target.card_index() >= self.cards.len() {
            return false;
        }
        self.focus = Some(target);
        true
    }

    /// Clears the focus cursor.
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Focuses the first card whose primary control is enabled. Returns the
    /// card index when one exists.
    pub fn focus_first_enabled_primary(&mut self) -> Option<usize> {
        let index = self.cards.iter().position(Card::primary_enabled)?;
        self.focus = Some(FocusTarget::PrimaryControl(index));
        Some(index)
    }

    /// Creates a scratch input holding `text` and registers it with the
    /// page. The returned guard removes the input again on drop.
    pub fn insert_scratch_input(&self, text: &str) -> ScratchInput {
        let id = Uuid::new_v4();
        self.scratch_inputs.lock().unwrap().insert(id);
        ScratchInput {
            id,
            text: text.to_string(),
            selected: false,
            registry: Arc::clone(&self.scratch_inputs),
        }
    }

    /// Number of scratch inputs currently attached to the page.
    pub fn scratch_input_count(&self) -> usize {
        self.scratch_inputs.lock().unwrap().len()
    }
}
