//! # Application State
//!
//! Core business state for Voyage. Domain logic only, no TUI types.
//! Presentation state (focus, scroll, dialogs) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>          // immutable destination list
//! ├── selection: SelectionState      // the booking state machine
//! │   ├── selected_id: Option<u32>
//! │   ├── selected_price: u64
//! │   ├── quantity: u32              // always >= 1
//! │   └── panels: BTreeMap<u32, Tween>
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::animation::{Easing, Tween};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;

/// Selection, quantity and per-destination panel animation for one
/// mounted destination screen.
#[derive(Debug, Clone)]
pub struct SelectionState {
    selected_id: Option<u32>,
    selected_price: u64,
    quantity: u32,
    panels: BTreeMap<u32, Tween>,
}

impl SelectionState {
    /// Seed from the catalog: the first entry is selected with its panel
    /// already open, every other panel closed.
    pub fn new(catalog: &Catalog, duration: Duration, easing: Easing) -> Self {
        let first = catalog.first();
        let panels = catalog
            .iter()
            .map(|d| {
                let start = if d.id == first.id { 1.0 } else { 0.0 };
                (d.id, Tween::settled(start, duration, easing))
            })
            .collect();
        Self {
            selected_id: Some(first.id),
            selected_price: first.price,
            quantity: 1,
            panels,
        }
    }

    /// Select `id` and retarget every panel: the selected one opens, the
    /// rest close. Reselecting the current id reassigns it anyway.
    pub fn select_destination(&mut self, id: u32, price: u64, now: Duration) {
        self.selected_id = Some(id);
        self.selected_price = price;
        for (&panel_id, tween) in self.panels.iter_mut() {
            let target = if Some(panel_id) == self.selected_id { 1.0 } else { 0.0 };
            tween.retarget(target, now);
        }
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn compute_total(&self) -> u64 {
        self.selected_price.saturating_mul(u64::from(self.quantity))
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    pub fn selected_price(&self) -> u64 {
        self.selected_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_amount(&self) -> u64 {
        self.compute_total()
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_id == Some(id)
    }

    /// Panel reveal progress in [0, 1]; 0 for ids outside the catalog.
    pub fn progress(&self, id: u32, now: Duration) -> f32 {
        self.panels.get(&id).map_or(0.0, |t| t.value(now))
    }

    /// Value the panel is heading toward.
    pub fn target(&self, id: u32) -> f32 {
        self.panels.get(&id).map_or(0.0, Tween::target)
    }

    /// True while any panel is still moving.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.panels.values().any(|t| t.is_running(now))
    }
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub selection: SelectionState,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, duration: Duration) -> Self {
        let selection = SelectionState::new(&catalog, duration, Easing::EaseOutCubic);
        Self {
            catalog,
            selection,
            status_message: String::from("Welcome to The Gambia!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(Arc::new(config.catalog.clone()), config.animation)
    }

    /// Currently selected destination's name, for status text and logs.
    pub fn selected_name(&self) -> Option<&str> {
        self.selection
            .selected_id()
            .and_then(|id| self.catalog.find(id))
            .map(|d| d.name.as_str())
    }
}
