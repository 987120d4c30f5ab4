//! # Actions
//!
//! Everything that can happen in Voyage becomes an `Action`.
//! User taps a card? That's `Action::SelectDestination { id, price }`.
//! User presses "Book Now"? That's `Action::Book`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` for the adapter to carry
//! out. No I/O happens here.
//!
//! ```text
//! State + Action + now  →  update()  →  New State + Effect
//! ```

use log::{debug, info};
use std::time::Duration;

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectDestination { id: u32, price: u64 },
    IncrementQuantity,
    DecrementQuantity,
    /// "Book Now" on the destination screen.
    Book,
    /// "Start Swimming" on the hero screen.
    StartJourney,
    Quit,
}

/// A fixed title/message pair for the adapter's alert dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: &'static str,
    pub button: &'static str,
}

impl Confirmation {
    pub fn booking() -> Self {
        Self {
            title: "Booking Successful ✅",
            message: "Can't wait to explore with you!",
            button: "OK",
        }
    }

    pub fn journey() -> Self {
        Self {
            title: "🌊 Golden Shore",
            message: "Your journey begins now!",
            button: "OK",
        }
    }
}

/// Side effects the adapter must perform after `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Confirm(Confirmation),
    Quit,
}

pub fn update(app: &mut App, action: Action, now: Duration) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectDestination { id, price } => {
            app.selection.select_destination(id, price, now);
            if let Some(name) = app.selected_name() {
                app.status_message = format!("Selected {name}");
            }
            Effect::None
        }
        Action::IncrementQuantity => {
            app.selection.increment_quantity();
            Effect::None
        }
        Action::DecrementQuantity => {
            app.selection.decrement_quantity();
            Effect::None
        }
        Action::Book => {
            info!(
                "Booking: {} x{} = {}",
                app.selected_name().unwrap_or("(none)"),
                app.selection.quantity(),
                app.selection.total_amount()
            );
            app.status_message = String::from("Booked");
            Effect::Confirm(Confirmation::booking())
        }
        Action::StartJourney => Effect::Confirm(Confirmation::journey()),
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ms, test_app};

    #[test]
    fn test_select_updates_status_and_price() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectDestination { id: 3, price: 3500 }, ms(0));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.selection.selected_price(), 3500);
        assert_eq!(app.status_message, "Selected Sanyang Beach");
    }

    #[test]
    fn test_quantity_actions() {
        let mut app = test_app();
        update(&mut app, Action::IncrementQuantity, ms(0));
        update(&mut app, Action::IncrementQuantity, ms(0));
        update(&mut app, Action::DecrementQuantity, ms(0));
        assert_eq!(app.selection.quantity(), 2);
        assert_eq!(app.selection.total_amount(), 10000);
    }

    #[test]
    fn test_book_requests_confirmation() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Book, ms(0));
        assert_eq!(effect, Effect::Confirm(Confirmation::booking()));
        assert_eq!(app.selection.quantity(), 1);
    }

    #[test]
    fn test_start_journey_requests_confirmation() {
        let mut app = test_app();
        let effect = update(&mut app, Action::StartJourney, ms(0));
        match effect {
            Effect::Confirm(c) => assert_eq!(c.message, "Your journey begins now!"),
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit, ms(0)), Effect::Quit);
    }
}
