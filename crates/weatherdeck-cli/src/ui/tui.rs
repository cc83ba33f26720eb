//! Interactive dashboard: terminal lifecycle and event loop.
//!
//! Each key event triggers exactly one controller operation, which runs to
//! completion before the next event is read. All view state lives in
//! `DashboardState`; this module only routes input and redraws.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io;
use std::time::Duration;
use weatherdeck_core::DashboardState;

use crate::presentation::view_models::{DashboardViewModel, dashboard_view_model};
use crate::presentation::views::tui::HeaderView;
use crate::presentation::views::tui::components::RecordListComponent;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Which zone receives non-global key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Search,
    Results,
    Favorites,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Favorites,
            Focus::Favorites => Focus::Search,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Results => Focus::Search,
            Focus::Favorites => Focus::Results,
        }
    }
}

/// Restores the terminal when dropped, so a panic or early return cannot
/// leave the user's shell in raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct DashboardApp {
    state: DashboardState,
    focus: Focus,
    results: RecordListComponent,
    favorites: RecordListComponent,
    should_quit: bool,
}

impl DashboardApp {
    fn new(state: DashboardState) -> Self {
        Self {
            state,
            focus: Focus::Search,
            results: RecordListComponent::new(),
            favorites: RecordListComponent::new(),
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first, independent of focus
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('u') => {
                    self.state.toggle_unit();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Results => self.handle_list_key(key, Focus::Results),
            Focus::Favorites => self.handle_list_key(key, Focus::Favorites),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.clear_search(),
            KeyCode::Backspace => {
                let mut query = self.state.query().to_string();
                query.pop();
                self.state.search(&query);
            }
            KeyCode::Enter | KeyCode::Down => self.focus = Focus::Results,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = self.state.query().to_string();
                query.push(c);
                self.state.search(&query);
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, zone: Focus) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
                return;
            }
            KeyCode::Char('c') => {
                self.state.clear_search();
                return;
            }
            KeyCode::Char('u') => {
                self.state.toggle_unit();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_search();
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected_favorite(zone);
                return;
            }
            _ => {}
        }

        let component = match zone {
            Focus::Results => &mut self.results,
            Focus::Favorites => &mut self.favorites,
            Focus::Search => unreachable!("search zone handled separately"),
        };
        component.handle_input(key);
    }

    /// Run the row's action for the selected entry: add the record to the
    /// favorites when it is not one, remove it when it is.
    fn toggle_selected_favorite(&mut self, zone: Focus) {
        let id = match zone {
            Focus::Results => self
                .results
                .selected()
                .and_then(|i| self.state.search_ids().get(i).copied()),
            Focus::Favorites => self
                .favorites
                .selected()
                .and_then(|i| self.state.favorite_ids().get(i).copied()),
            Focus::Search => None,
        };

        let Some(id) = id else {
            return;
        };

        if self.state.is_favorite(id) {
            self.state.remove_favorite(id);
        } else {
            self.state.add_favorite(id);
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let model: DashboardViewModel = dashboard_view_model(&self.state);

        let chunks = Layout::vertical([
            Constraint::Length(5),
            Constraint::Fill(3),
            Constraint::Fill(2),
        ])
        .split(f.area());

        f.render_widget(
            HeaderView::new(&model, self.focus == Focus::Search),
            chunks[0],
        );
        self.results
            .render(f, chunks[1], &model.results, self.focus == Focus::Results);
        self.favorites
            .render(f, chunks[2], &model.favorites, self.focus == Focus::Favorites);
    }
}

/// Run the dashboard until the user quits.
pub fn run_dashboard(state: DashboardState) -> Result<()> {
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = DashboardApp::new(state);

    while !app.should_quit {
        terminal.draw(|f| app.render(f))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    Ok(())
}
