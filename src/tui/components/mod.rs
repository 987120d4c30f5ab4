//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `StatusBar`: top line with status message and key hints
//! - `HelloScreen`, `HeroScreen`: static screens
//! - `BookingFooter`: quantity counter, total and book button
//! - `DestinationCard`, `DescriptionPanel`, `CountryHeader`: ratatui
//!   widgets drawn into the destination scroll buffer
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events:
//! - `DestinationList`: scrollable cards with focus and hit testing
//! - `AlertDialog`: modal confirmation
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── alert.rs            (confirmation dialog)
//! ├── artwork.rs          (image handle → swatch)
//! ├── card.rs             (card + description panel widgets)
//! ├── destination_list.rs (scrollable destination body)
//! ├── footer.rs           (counter / total / book)
//! ├── header.rs           (country banner)
//! ├── hello.rs            (greeting screen)
//! ├── hero.rs             (golden shore screen)
//! └── status_bar.rs       (top line)
//! ```

pub mod alert;
pub mod artwork;
pub mod card;
pub mod destination_list;
pub mod footer;
pub mod header;
pub mod hello;
pub mod hero;
mod status_bar;

pub use alert::{AlertDialog, AlertEvent, AlertState};
pub use artwork::{BundledArtwork, ImageResolver};
pub use destination_list::{DestinationList, DestinationListState, ListEvent};
pub use footer::{BookingFooter, FooterLayout};
pub use hello::HelloScreen;
pub use hero::HeroScreen;
pub use status_bar::StatusBar;
