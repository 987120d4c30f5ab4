//! # DestinationList Component
//!
//! Scrollable destination screen body: country header, section title and
//! one card + description panel per catalog entry.
//!
//! ## Architecture
//!
//! `DestinationList` is a transient component (created each frame) that
//! wraps `&'a mut DestinationListState` (persistent state) and borrows the
//! catalog and selection as props. Panel heights change every frame while
//! animations run, so the layout cache is rebuilt on each render and the
//! hit tester reads it back afterwards.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{Catalog, ImageRef};
use crate::core::currency::format_price;
use crate::core::state::SelectionState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::artwork::ImageResolver;
use crate::tui::components::card::{
    CARD_HEIGHT, DescriptionPanel, DestinationCard, panel_height,
};
use crate::tui::components::header::{CountryHeader, HEADER_HEIGHT};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub const SECTION_TITLE: &str = "Recommended Destinations";
pub const SECTION_HINT: &str = "Tap a card to view details & pricing";

/// Rows between header and section title, and above each card.
const GAP: u16 = 1;
const SECTION_HEIGHT: u16 = 2;

/// Where each card ended up in content coordinates on the last render.
#[derive(Debug, Default, Clone)]
pub struct LayoutCache {
    /// Content y of each card's top border.
    pub card_tops: Vec<u16>,
    /// Card plus its visible panel.
    pub item_heights: Vec<u16>,
    pub content_height: u16,
}

impl LayoutCache {
    pub fn len(&self) -> usize {
        self.card_tops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_tops.is_empty()
    }
}

pub struct DestinationListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// Card with keyboard focus (index into the catalog).
    pub focused: usize,
    /// Area the list was last drawn into, for hit testing.
    pub viewport: Rect,
}

/// Events emitted by the destination list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Select(usize),
}

impl Default for DestinationListState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DestinationListState {
    pub fn new(focused: usize) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            focused,
            viewport: Rect::default(),
        }
    }

    fn max_offset(&self) -> u16 {
        self.layout
            .content_height
            .saturating_sub(self.viewport.height)
    }

    fn scroll_to(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset().y as i32;
        self.scroll_to((current + delta).max(0) as u16);
    }

    pub fn clamp_scroll(&mut self) {
        let current = self.scroll_state.offset().y;
        if current > self.max_offset() {
            self.scroll_to(current);
        }
    }

    /// Scroll so the focused card (and its panel) is fully visible.
    /// Taller-than-viewport items align their top edge.
    pub fn scroll_to_focused(&mut self) {
        let idx = self.focused;
        let (Some(&top), Some(&height)) = (
            self.layout.card_tops.get(idx),
            self.layout.item_heights.get(idx),
        ) else {
            return;
        };
        let bottom = top.saturating_add(height);
        let offset = self.scroll_state.offset().y;
        if top < offset {
            self.scroll_to(top);
        } else if bottom > offset.saturating_add(self.viewport.height) {
            self.scroll_to(bottom.saturating_sub(self.viewport.height).min(top));
        }
    }

    /// Card index under a screen position, if any. Only the card itself
    /// is clickable; its description panel is not.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.viewport.contains(Position { x: column, y: row }) {
            return None;
        }
        let content_y = (row - self.viewport.y).saturating_add(self.scroll_state.offset().y);
        self.layout
            .card_tops
            .iter()
            .position(|&top| content_y >= top && content_y < top.saturating_add(CARD_HEIGHT))
    }
}

impl EventHandler for DestinationListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.focused = self.focused.saturating_sub(1);
                self.scroll_to_focused();
                None
            }
            TuiEvent::CursorDown => {
                if !self.layout.is_empty() {
                    self.focused = (self.focused + 1).min(self.layout.len() - 1);
                    self.scroll_to_focused();
                }
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_by(-1);
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_by(1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_by(-(self.viewport.height.max(1) as i32));
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_by(self.viewport.height.max(1) as i32);
                None
            }
            TuiEvent::Activate => Some(ListEvent::Select(self.focused)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the destination screen body.
pub struct DestinationList<'a> {
    pub state: &'a mut DestinationListState,
    pub catalog: &'a Catalog,
    pub selection: &'a SelectionState,
    pub now: Duration,
    pub palette: &'a Palette,
    pub resolver: &'a dyn ImageResolver,
    pub panel_rows: u16,
    pub currency_suffix: &'a str,
}

impl DestinationList<'_> {
    /// Recompute card positions for the current animation frame.
    fn measure(&self) -> LayoutCache {
        let mut y = HEADER_HEIGHT + GAP + SECTION_HEIGHT;
        let mut cache = LayoutCache::default();
        for d in self.catalog.iter() {
            y = y.saturating_add(GAP);
            let panel = panel_height(self.selection.progress(d.id, self.now), self.panel_rows);
            let height = CARD_HEIGHT.saturating_add(panel);
            cache.card_tops.push(y);
            cache.item_heights.push(height);
            y = y.saturating_add(height);
        }
        cache.content_height = y.saturating_add(GAP);
        cache
    }
}

impl Component for DestinationList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.layout = self.measure();
        self.state.viewport = area;
        self.state.clamp_scroll();

        let content_width = area.width.saturating_sub(1);
        let layout = &self.state.layout;
        let mut view = ScrollView::new(Size::new(content_width, layout.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        view.render_widget(
            Block::new().style(Style::default().bg(self.palette.background)),
            Rect::new(0, 0, content_width, layout.content_height),
        );
        view.render_widget(
            CountryHeader {
                artwork: self.resolver.resolve(&ImageRef::new("gambia")),
            },
            Rect::new(0, 0, content_width, HEADER_HEIGHT),
        );
        view.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    SECTION_TITLE,
                    Style::default()
                        .fg(self.palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(SECTION_HINT, Style::default().fg(self.palette.muted)),
            ]),
            Rect::new(2, HEADER_HEIGHT + GAP, content_width.saturating_sub(4), SECTION_HEIGHT),
        );

        let card_width = content_width.saturating_sub(4);
        for (idx, d) in self.catalog.iter().enumerate() {
            let top = layout.card_tops[idx];
            let panel_rows = layout.item_heights[idx] - CARD_HEIGHT;

            view.render_widget(
                DestinationCard {
                    destination: d,
                    price_label: format_price(d.price, self.currency_suffix),
                    artwork: self.resolver.resolve(&d.image),
                    selected: self.selection.is_selected(d.id),
                    focused: idx == self.state.focused,
                    palette: self.palette,
                },
                Rect::new(2, top, card_width, CARD_HEIGHT),
            );
            if panel_rows > 0 {
                view.render_widget(
                    DescriptionPanel {
                        text: &d.description,
                        progress: self.selection.progress(d.id, self.now),
                        palette: self.palette,
                    },
                    Rect::new(2, top + CARD_HEIGHT, card_width, panel_rows),
                );
            }
        }

        frame.render_stateful_widget(view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::{DEFAULT_DURATION, Easing};
    use crate::core::config::Theme;
    use crate::test_support::{ms, test_catalog};
    use crate::tui::components::artwork::BundledArtwork;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut DestinationListState, selection: &SelectionState, now: Duration) -> String {
        let catalog = test_catalog();
        let palette = Palette::for_theme(Theme::Dark);
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|f| {
                DestinationList {
                    state: &mut *state,
                    catalog: &catalog,
                    selection,
                    now,
                    palette: &palette,
                    resolver: &BundledArtwork,
                    panel_rows: 4,
                    currency_suffix: "D",
                }
                .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn selection() -> SelectionState {
        SelectionState::new(&test_catalog(), DEFAULT_DURATION, Easing::EaseOutCubic)
    }

    #[test]
    fn test_layout_grows_with_open_panel() {
        let mut state = DestinationListState::new(0);
        let sel = selection();
        render(&mut state, &sel, ms(0));

        assert_eq!(state.layout.len(), 3);
        assert_eq!(state.layout.item_heights[0], CARD_HEIGHT + 4);
        assert_eq!(state.layout.item_heights[1], CARD_HEIGHT);
        assert_eq!(
            state.layout.card_tops[1],
            state.layout.card_tops[0] + CARD_HEIGHT + 4 + GAP
        );
    }

    #[test]
    fn test_render_shows_section_and_first_card() {
        let mut state = DestinationListState::new(0);
        let text = render(&mut state, &selection(), ms(0));
        assert!(text.contains(SECTION_TITLE));
        assert!(text.contains("Kunta Kinteh Island"));
        assert!(text.contains("5,000 D"));
    }

    #[test]
    fn test_panels_swap_after_animation() {
        let mut state = DestinationListState::new(0);
        let mut sel = selection();
        sel.select_destination(2, 4000, ms(0));

        render(&mut state, &sel, ms(100));
        let first_mid = state.layout.item_heights[0];
        let second_mid = state.layout.item_heights[1];
        assert!(first_mid > CARD_HEIGHT || second_mid > CARD_HEIGHT);

        render(&mut state, &sel, ms(400));
        assert_eq!(state.layout.item_heights[0], CARD_HEIGHT);
        assert_eq!(state.layout.item_heights[1], CARD_HEIGHT + 4);
    }

    #[test]
    fn test_hit_test_maps_rows_to_cards() {
        let mut state = DestinationListState::new(0);
        render(&mut state, &selection(), ms(0));

        let first_top = state.layout.card_tops[0];
        assert_eq!(state.hit_test(5, first_top), Some(0));
        assert_eq!(state.hit_test(5, first_top + CARD_HEIGHT - 1), Some(0));
        assert_eq!(state.hit_test(5, 0), None);
        assert_eq!(state.hit_test(5, 200), None);
    }

    #[test]
    fn test_panel_rows_are_not_clickable() {
        let mut state = DestinationListState::new(0);
        let mut sel = selection();
        sel.select_destination(2, 4000, ms(0));

        // First panel is still closing at 100ms
        render(&mut state, &sel, ms(100));
        let first_top = state.layout.card_tops[0];
        assert!(state.layout.item_heights[0] > CARD_HEIGHT);
        assert_eq!(state.hit_test(5, first_top + CARD_HEIGHT), None);
        assert_eq!(state.hit_test(5, state.layout.card_tops[1]), Some(1));
    }

    #[test]
    fn test_huge_panel_rows_do_not_overflow() {
        let catalog = test_catalog();
        let palette = Palette::for_theme(Theme::Dark);
        let sel = selection();
        let mut state = DestinationListState::new(0);
        let list = DestinationList {
            state: &mut state,
            catalog: &catalog,
            selection: &sel,
            now: ms(0),
            palette: &palette,
            resolver: &BundledArtwork,
            panel_rows: u16::MAX,
            currency_suffix: "D",
        };
        let layout = list.measure();
        assert_eq!(layout.content_height, u16::MAX);
        assert_eq!(layout.item_heights[0], u16::MAX);
    }

    #[test]
    fn test_focus_moves_and_scrolls() {
        let mut state = DestinationListState::new(0);
        render(&mut state, &selection(), ms(0));

        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.focused, 2);

        let top = state.layout.card_tops[2];
        let bottom = top + state.layout.item_heights[2];
        let offset = state.scroll_state.offset().y;
        assert!(top >= offset && bottom <= offset + state.viewport.height);

        assert_eq!(
            state.handle_event(&TuiEvent::Activate),
            Some(ListEvent::Select(2))
        );
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = DestinationListState::new(0);
        render(&mut state, &selection(), ms(0));
        for _ in 0..100 {
            state.handle_event(&TuiEvent::ScrollPageDown);
        }
        assert_eq!(state.scroll_state.offset().y, state.max_offset());
        state.handle_event(&TuiEvent::ScrollPageUp);
        state.handle_event(&TuiEvent::ScrollPageUp);
        state.handle_event(&TuiEvent::ScrollPageUp);
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
