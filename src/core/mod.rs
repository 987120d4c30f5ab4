//! # Core Application Logic
//!
//! This module contains Voyage's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (read-only)  │
//!                    │  • State (selection)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No clock.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Destination` and the validated `Catalog`
//! - [`animation`]: tweens and easing for description panels
//! - [`state`]: `SelectionState` and the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings and their override hierarchy
//! - [`currency`]: price display formatting

pub mod action;
pub mod animation;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod state;
