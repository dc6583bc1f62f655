//! Colour dialog request/response contract.
//!
//! A dialog is asked for a colour and answers with either a confirmed
//! selection or a cancellation. Blocking dialogs implement [`ColorDialog`];
//! event-driven ones (the egui modal) report a [`DialogOutcome`] later.

use super::model::Rgb;

/// Result of showing the colour dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// User confirmed this colour
    Confirmed(Rgb),
    /// User dismissed the dialog
    Cancelled,
}

impl DialogOutcome {
    pub fn confirmed(self) -> Option<Rgb> {
        match self {
            DialogOutcome::Confirmed(color) => Some(color),
            DialogOutcome::Cancelled => None,
        }
    }
}

/// A modal colour picker that blocks until the user answers.
pub trait ColorDialog {
    /// Show the dialog starting at `initial` and wait for the user.
    fn pick(&mut self, initial: Rgb) -> DialogOutcome;
}

impl<F> ColorDialog for F
where
    F: FnMut(Rgb) -> DialogOutcome,
{
    fn pick(&mut self, initial: Rgb) -> DialogOutcome {
        self(initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_dialog() {
        let mut seen = None;
        let mut dialog = |initial: Rgb| {
            seen = Some(initial);
            DialogOutcome::Confirmed(Rgb::new(1, 2, 3))
        };

        let outcome = dialog.pick(Rgb::WHITE);
        assert_eq!(outcome.confirmed(), Some(Rgb::new(1, 2, 3)));
        assert_eq!(seen, Some(Rgb::WHITE));
    }

    #[test]
    fn test_cancel_has_no_colour() {
        assert_eq!(DialogOutcome::Cancelled.confirmed(), None);
    }
}
