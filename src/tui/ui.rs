use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::config::Screen;
use crate::core::currency::format_price;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::footer::FOOTER_HEIGHT;
use crate::tui::components::{
    AlertDialog, AlertState, BookingFooter, DestinationList, FooterLayout, HelloScreen,
    HeroScreen, StatusBar,
};

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Card(usize),
    Decrement,
    Increment,
    Book,
    StartJourney,
    DismissAlert,
}

/// Status line on top, screen body below.
fn screen_areas(area: Rect) -> (Rect, Rect) {
    let [status, main] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    (status, main)
}

/// Destination screen body: scrolling list above a fixed footer.
fn destination_areas(main: Rect) -> (Rect, Rect) {
    let [list, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(main);
    (list, footer)
}

fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Hello => "q Quit ",
        Screen::Home => "Enter Start  q Quit ",
        Screen::Destinations => "↑↓ Move  Enter Select  +/- Qty  b Book  q Quit ",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Duration) {
    let (status_area, main_area) = screen_areas(frame.area());

    StatusBar::new(&app.status_message, hints(tui.screen), tui.palette.status)
        .render(frame, status_area);

    match tui.screen {
        Screen::Hello => HelloScreen.render(frame, main_area),
        Screen::Home => HeroScreen::new(&tui.resolver).render(frame, main_area),
        Screen::Destinations => {
            let (list_area, footer_area) = destination_areas(main_area);
            DestinationList {
                state: &mut tui.destinations,
                catalog: &app.catalog,
                selection: &app.selection,
                now,
                palette: &tui.palette,
                resolver: &tui.resolver,
                panel_rows: tui.panel_rows,
                currency_suffix: &tui.currency_suffix,
            }
            .render(frame, list_area);

            BookingFooter {
                quantity: app.selection.quantity(),
                total_label: format_price(app.selection.total_amount(), &tui.currency_suffix),
            }
            .render(frame, footer_area);
        }
    }

    if let Some(alert) = &tui.alert {
        AlertDialog::new(alert).render(frame, frame.area());
    }
}

/// Hit test: given a screen position, find what (if anything) was clicked.
///
/// Layout is recomputed from `frame_area` the same way `draw_ui` does it;
/// card positions come from the list's cache of the last render.
pub fn hit_test(column: u16, row: u16, frame_area: Rect, tui: &TuiState) -> Option<HitTarget> {
    let pos = Position { x: column, y: row };

    // The dialog is modal: only its button responds.
    if tui.alert.is_some() {
        return AlertState::button_area(frame_area)
            .contains(pos)
            .then_some(HitTarget::DismissAlert);
    }

    let (_, main_area) = screen_areas(frame_area);
    match tui.screen {
        Screen::Hello => None,
        Screen::Home => HeroScreen::button_area(main_area)
            .contains(pos)
            .then_some(HitTarget::StartJourney),
        Screen::Destinations => {
            let (_, footer_area) = destination_areas(main_area);
            let footer = FooterLayout::new(footer_area);
            if footer.decrement.contains(pos) {
                Some(HitTarget::Decrement)
            } else if footer.increment.contains(pos) {
                Some(HitTarget::Increment)
            } else if footer.book.contains(pos) {
                Some(HitTarget::Book)
            } else {
                tui.destinations.hit_test(column, row).map(HitTarget::Card)
            }
        }
    }
}
