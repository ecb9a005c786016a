//! Reservation dialog state machine.
//!
//! The dialog is the only stateful piece of the campaign page:
//!
//! ```text
//!   Closed ──Reserve{stock}──▶ Open(stock)
//!   Open   ──Reserve{stock}──▶ Open(stock)      (selection replaced)
//!   Open   ──Cancel─────────▶ Closed
//!   Closed ──Cancel─────────▶ Closed            (no-op)
//! ```
//!
//! Generic "Reserve Your VIN" buttons fire `Reserve` with no stock; the
//! per-listing "Reserve This VIN" button fires it with that listing's stock
//! number. Nothing here touches the catalog: a reservation is not an
//! inventory hold, and the dialog's Submit control has no bound behavior.

/// Dialog title.
pub const DIALOG_TITLE: &str = "Reserve Your VIN";

/// Dialog body when no stock number is selected.
pub const NO_SELECTION_PROMPT: &str = "Choose your preferred vehicle";

/// Visibility and selection of the reservation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReservationDialog {
    /// Dialog hidden. Initial state.
    #[default]
    Closed,
    /// Dialog shown, optionally with a selected stock number.
    Open {
        /// Stock number of the listing whose button opened the dialog.
        stock: Option<String>,
    },
}

/// A user interaction that drives the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// A reserve button was clicked. `None` for the generic buttons.
    Reserve { stock: Option<String> },
    /// The dialog's Cancel button was clicked.
    Cancel,
}

impl DialogEvent {
    /// Click on a generic "Reserve Your VIN" button.
    #[must_use]
    pub fn reserve_any() -> Self {
        Self::Reserve { stock: None }
    }

    /// Click on a listing's "Reserve This VIN" button.
    #[must_use]
    pub fn reserve_stock(stock: impl Into<String>) -> Self {
        Self::Reserve {
            stock: Some(stock.into()),
        }
    }
}

impl ReservationDialog {
    /// Build the state carried in a request. An empty stock string counts as
    /// no selection, and a stock without `open` is ignored.
    #[must_use]
    pub fn from_parts(open: bool, stock: Option<&str>) -> Self {
        if !open {
            return Self::Closed;
        }
        let stock = stock
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Self::Open { stock }
    }

    /// Apply one event and return the next state.
    #[must_use]
    pub fn apply(&self, event: DialogEvent) -> Self {
        match (self, event) {
            (_, DialogEvent::Reserve { stock }) => Self::Open { stock },
            (Self::Open { .. } | Self::Closed, DialogEvent::Cancel) => Self::Closed,
        }
    }

    /// Whether the dialog is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The selected stock number, if the dialog is open with one.
    #[must_use]
    pub fn selected_stock(&self) -> Option<&str> {
        match self {
            Self::Open { stock } => stock.as_deref(),
            Self::Closed => None,
        }
    }

    /// Body text of the open dialog.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self.selected_stock() {
            Some(stock) => format!("Stock #{stock} selected"),
            None => NO_SELECTION_PROMPT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_closed() {
        let dialog = ReservationDialog::default();
        assert_eq!(dialog, ReservationDialog::Closed);
        assert!(!dialog.is_open());
        assert_eq!(dialog.selected_stock(), None);
    }

    #[test]
    fn listing_reserve_opens_with_stock() {
        let dialog = ReservationDialog::Closed.apply(DialogEvent::reserve_stock("N1234"));
        assert!(dialog.is_open());
        assert_eq!(dialog.selected_stock(), Some("N1234"));
        assert!(dialog.prompt().contains("N1234"));
    }

    #[test]
    fn generic_reserve_opens_without_stock() {
        let dialog = ReservationDialog::Closed.apply(DialogEvent::reserve_any());
        assert_eq!(dialog, ReservationDialog::Open { stock: None });
        assert_eq!(dialog.prompt(), NO_SELECTION_PROMPT);
    }

    #[test]
    fn generic_reserve_clears_previous_selection() {
        let dialog = ReservationDialog::Closed
            .apply(DialogEvent::reserve_stock("N1234"))
            .apply(DialogEvent::reserve_any());
        assert_eq!(dialog.selected_stock(), None);
    }

    #[test]
    fn reserve_while_open_replaces_selection() {
        let dialog = ReservationDialog::Closed
            .apply(DialogEvent::reserve_stock("N1"))
            .apply(DialogEvent::reserve_stock("N2"));
        assert_eq!(dialog.selected_stock(), Some("N2"));
    }

    #[test]
    fn cancel_from_any_open_state_closes() {
        for open in [
            ReservationDialog::Open { stock: None },
            ReservationDialog::Open {
                stock: Some("N1234".to_owned()),
            },
        ] {
            assert_eq!(open.apply(DialogEvent::Cancel), ReservationDialog::Closed);
        }
    }

    #[test]
    fn cancel_while_closed_is_noop() {
        assert_eq!(
            ReservationDialog::Closed.apply(DialogEvent::Cancel),
            ReservationDialog::Closed
        );
    }

    #[test]
    fn dialog_can_cycle_indefinitely() {
        let mut dialog = ReservationDialog::Closed;
        for i in 0..10 {
            dialog = dialog.apply(DialogEvent::reserve_stock(format!("N{i}")));
            assert!(dialog.is_open());
            dialog = dialog.apply(DialogEvent::Cancel);
            assert!(!dialog.is_open());
        }
    }

    #[test]
    fn from_parts_ignores_stock_when_closed() {
        assert_eq!(
            ReservationDialog::from_parts(false, Some("N1")),
            ReservationDialog::Closed
        );
    }

    #[test]
    fn from_parts_treats_blank_stock_as_none() {
        assert_eq!(
            ReservationDialog::from_parts(true, Some("  ")),
            ReservationDialog::Open { stock: None }
        );
        assert_eq!(
            ReservationDialog::from_parts(true, Some("N9")).selected_stock(),
            Some("N9")
        );
    }
}
