//! Record List Component
//!
//! Encapsulates list selection state and input handling for one record
//! panel. Supports scrolling (j/k, arrows, Home/End).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::ListViewModel;
use crate::presentation::views::tui::RecordTableView;

/// Record list component with encapsulated state and logic
pub struct RecordListComponent {
    /// List state (scroll position, selection) - PRIVATE
    state: ListState,
    /// Item count seen at last render, used to clamp input handling
    item_count: usize,
}

impl Default for RecordListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            item_count: 0,
        }
    }

    /// Handle keyboard input
    ///
    /// Returns true if the input was handled.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                true
            }
            KeyCode::Home => {
                self.scroll_to_top();
                true
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                true
            }
            _ => false,
        }
    }

    /// Index of the currently selected row, if any
    pub fn selected(&self) -> Option<usize> {
        self.state.selected().filter(|i| *i < self.item_count)
    }

    /// Render one record panel with data
    ///
    /// Performs index safety checks before rendering.
    pub fn render(&mut self, f: &mut Frame, area: Rect, model: &ListViewModel, focused: bool) {
        let view = RecordTableView::new(model, focused);
        let item_count = view.item_count();
        self.item_count = item_count;

        // Index Safety: Clamp selection to data bounds
        match self.state.selected() {
            Some(_) if item_count == 0 => self.state.select(None),
            Some(selected) if selected >= item_count => self.state.select(Some(item_count - 1)),
            // A focused panel always has a visible selection
            None if focused && item_count > 0 => self.state.select(Some(0)),
            _ => {}
        }

        let block = view.block();
        let inner = block.inner(area);
        f.render_widget(block, area);

        if view.is_empty() {
            f.render_widget(view.empty_placeholder(), inner);
            return;
        }

        let (list, list_area) = view.build_list(area);
        f.render_stateful_widget(list, list_area, &mut self.state);
    }

    // Private state manipulation methods

    fn next(&mut self) {
        if self.item_count == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => {
                if i >= self.item_count - 1 {
                    i
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let previous = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(previous));
    }

    fn scroll_to_top(&mut self) {
        if self.item_count > 0 {
            self.state.select(Some(0));
        }
    }

    fn scroll_to_bottom(&mut self) {
        if self.item_count > 0 {
            self.state.select(Some(self.item_count - 1));
        }
    }
}
