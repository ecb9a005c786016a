//! Transient UI state of the campaign view.
//!
//! Holds the reservation dialog and the FAQ disclosure set together so every
//! clickable affordance on the page can be described as "the state after
//! this event". Nothing in here outlives a page view.

use crate::faq::FaqDisclosure;
use crate::reservation::{DialogEvent, ReservationDialog};

/// A discrete user interaction on the campaign page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Reserve or cancel on the dialog.
    Dialog(DialogEvent),
    /// Expand or collapse one FAQ entry.
    ToggleFaq(usize),
}

impl From<DialogEvent> for UiEvent {
    fn from(event: DialogEvent) -> Self {
        Self::Dialog(event)
    }
}

/// Everything the campaign page remembers between clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignUiState {
    /// Reservation dialog visibility and selection.
    pub dialog: ReservationDialog,
    /// Expanded FAQ entries.
    pub faq: FaqDisclosure,
}

impl CampaignUiState {
    /// State after one event. Dialog events leave the FAQ untouched and FAQ
    /// toggles leave the dialog untouched.
    #[must_use]
    pub fn apply(&self, event: impl Into<UiEvent>) -> Self {
        match event.into() {
            UiEvent::Dialog(event) => Self {
                dialog: self.dialog.apply(event),
                faq: self.faq.clone(),
            },
            UiEvent::ToggleFaq(index) => Self {
                dialog: self.dialog.clone(),
                faq: self.faq.toggle(index),
            },
        }
    }
}
