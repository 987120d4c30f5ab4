//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard and mouse input into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a description panel is opening or closing): draws
//!   every ~16ms so the panel slides smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! The core owns no clock. The loop measures elapsed time since the
//! screen was mounted and passes it to `update()` and the renderer.

mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{ResolvedConfig, Screen};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AlertEvent, AlertState, BundledArtwork, DestinationListState, ListEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Palette;
use crate::tui::ui::HitTarget;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub screen: Screen,
    pub palette: Palette,
    pub panel_rows: u16,
    pub currency_suffix: String,
    pub resolver: BundledArtwork,
    pub destinations: DestinationListState,
    /// Open confirmation dialog (None = hidden)
    pub alert: Option<AlertState>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, app: &App) -> Self {
        let focused = app
            .selection
            .selected_id()
            .and_then(|id| app.catalog.position(id))
            .unwrap_or(0);
        Self {
            screen: config.screen,
            palette: Palette::for_theme(config.theme),
            panel_rows: config.panel_rows,
            currency_suffix: config.currency_suffix.clone(),
            resolver: BundledArtwork,
            destinations: DestinationListState::new(focused),
            alert: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Carry out an effect on the presentation side. Returns true to quit.
fn apply_effect(tui: &mut TuiState, effect: Effect) -> bool {
    match effect {
        Effect::None => false,
        Effect::Confirm(confirmation) => {
            debug!("Showing confirmation: {}", confirmation.title);
            tui.alert = Some(AlertState::new(confirmation));
            false
        }
        Effect::Quit => true,
    }
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, now: Duration) -> bool {
    let effect = update(app, action, now);
    apply_effect(tui, effect)
}

/// Select the catalog entry at `index`, the same way a tap on its card does.
fn select_index(app: &mut App, tui: &mut TuiState, index: usize, now: Duration) -> bool {
    let Some(d) = app.catalog.get(index) else {
        return false;
    };
    let action = Action::SelectDestination {
        id: d.id,
        price: d.price,
    };
    tui.destinations.focused = index;
    dispatch(app, tui, action, now)
}

/// Route one input event. Returns true when the app should exit.
///
/// `frame_area` is the terminal size used for the last draw, needed to
/// map mouse clicks back onto widgets.
pub fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    now: Duration,
    frame_area: Rect,
) -> bool {
    if matches!(event, TuiEvent::ForceQuit) {
        return dispatch(app, tui, Action::Quit, now);
    }

    // When the dialog is open, route everything to it
    if tui.alert.is_some() {
        let dismissed = match event {
            TuiEvent::MouseClick(column, row) => {
                ui::hit_test(column, row, frame_area, tui) == Some(HitTarget::DismissAlert)
            }
            _ => {
                tui.alert.as_mut().and_then(|alert| alert.handle_event(&event))
                    == Some(AlertEvent::Dismiss)
            }
        };
        if dismissed {
            tui.alert = None;
        }
        return false;
    }

    match event {
        TuiEvent::Quit | TuiEvent::Escape => return dispatch(app, tui, Action::Quit, now),
        TuiEvent::Resize => return false,
        TuiEvent::MouseClick(column, row) => {
            return match ui::hit_test(column, row, frame_area, tui) {
                Some(HitTarget::Card(index)) => select_index(app, tui, index, now),
                Some(HitTarget::Decrement) => dispatch(app, tui, Action::DecrementQuantity, now),
                Some(HitTarget::Increment) => dispatch(app, tui, Action::IncrementQuantity, now),
                Some(HitTarget::Book) => dispatch(app, tui, Action::Book, now),
                Some(HitTarget::StartJourney) => dispatch(app, tui, Action::StartJourney, now),
                Some(HitTarget::DismissAlert) | None => false,
            };
        }
        _ => {}
    }

    match tui.screen {
        Screen::Hello => false,
        Screen::Home => match event {
            TuiEvent::Activate => dispatch(app, tui, Action::StartJourney, now),
            _ => false,
        },
        Screen::Destinations => match event {
            TuiEvent::Increment => dispatch(app, tui, Action::IncrementQuantity, now),
            TuiEvent::Decrement => dispatch(app, tui, Action::DecrementQuantity, now),
            TuiEvent::Book => dispatch(app, tui, Action::Book, now),
            _ => match tui.destinations.handle_event(&event) {
                Some(ListEvent::Select(index)) => select_index(app, tui, index, now),
                None => false,
            },
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config, &app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Mouse capture unavailable: {}", e));

    // Screen mount time; all animation timestamps are relative to it
    let mounted_at = Instant::now();
    let mut needs_redraw = true; // Force first frame

    info!("Showing {:?} screen", tui.screen);

    loop {
        let now = mounted_at.elapsed();
        let animating = app.selection.is_animating(now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event, mounted_at.elapsed(), frame_area) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Voyage shutting down");
    ratatui::restore();
    Ok(())
}
