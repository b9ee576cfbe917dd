use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, Clear, ClearType},
};
use std::time::{Duration, Instant};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::panic;

use crate::cli::state::{AddField, AppState};
use crate::config::Config;
use crate::formatter::MenuFormatter;
use crate::menu::{filter_items, MenuStore};
use crate::router::Route;

const CTRL_C_WINDOW: Duration = Duration::from_secs(2);

/// Puts the terminal into raw mode on the alternate screen and undoes it
/// on drop, including when setup fails halfway or the app panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let guard = TerminalGuard;

        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));

        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), EnterAlternateScreen)?;
        enable_raw_mode()?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Clear(ClearType::All), cursor::Show)
}

/// Best effort: raw mode off, main screen back, cursor visible.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = leave_screen(&mut stdout);
}

/// Top-level application object. Owns the menu and all screen state.
pub struct App {
    pub state: AppState,
    pub store: MenuStore,
    pub config: Config,
    pub formatter: MenuFormatter,
    pub should_quit: bool,
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let formatter = MenuFormatter::new(config.currency.clone());

        Self {
            state: AppState::new(),
            store: MenuStore::new(),
            config,
            formatter,
            should_quit: false,
            last_ctrl_c: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let _restore = TerminalGuard::enter()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_app(&mut terminal);

        if let Err(err) = &res {
            tracing::error!(error = %err, "event loop failed");
        }
        res
    }

    fn run_app<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        tracing::info!(route = %self.state.route(), "menucard started");

        while !self.should_quit {
            terminal.draw(|f| super::ui::render(f, &self.state, &self.store, &self.formatter))?;

            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }

        tracing::info!(items = self.store.len(), "menucard exiting");
        Ok(())
    }

    /// Applies one key press to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        tracing::debug!(code = ?key.code, route = %self.state.route(), "key");

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.handle_ctrl_c();
            return;
        }

        if self.state.alert.is_some() {
            self.state.dismiss_alert();
            return;
        }

        if self.state.show_help {
            if matches!(key.code, KeyCode::Char('h') | KeyCode::Esc) {
                self.state.show_help = false;
            }
            return;
        }

        match self.state.route() {
            Route::Home => self.handle_home_key(key),
            Route::Add => self.handle_add_key(key),
            Route::View => self.handle_view_key(key),
        }
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        if let Some(last_ctrl_c) = self.last_ctrl_c {
            if now.duration_since(last_ctrl_c) < CTRL_C_WINDOW {
                self.should_quit = true;
                return;
            }
        }
        self.last_ctrl_c = Some(now);
        self.state
            .add_message("Press Ctrl+C again within 2 seconds to exit".to_string());
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('h') => self.state.show_help = true,
            KeyCode::Char('a') => self.state.navigate(Route::Add),
            KeyCode::Char('v') => self.state.navigate(Route::View),
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.state.home_selected = self.state.home_selected.toggle();
            }
            KeyCode::Enter => {
                let to = self.state.home_selected.route();
                self.state.navigate(to);
            }
            _ => {}
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent) {
        let focus = self.state.add_form.focus;
        match key.code {
            KeyCode::Esc => self.state.navigate(Route::Home),
            KeyCode::Tab | KeyCode::Down => self.state.add_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.add_form.prev_field(),
            KeyCode::Left if focus == AddField::Course => self.state.add_form.prev_course(),
            KeyCode::Right | KeyCode::Char(' ') if focus == AddField::Course => {
                self.state.add_form.next_course()
            }
            KeyCode::Char(c) if focus.is_text() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.add_form.insert_char(c)
            }
            KeyCode::Backspace => self.state.add_form.backspace(),
            KeyCode::Enter => match focus {
                AddField::ViewItems => self.state.navigate(Route::View),
                AddField::Home => self.state.navigate(Route::Home),
                _ => self.state.submit_form(&mut self.store, &self.formatter),
            },
            _ => {}
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('b') => {
                self.state.navigate(Route::Home)
            }
            KeyCode::Right | KeyCode::Tab => self.state.view.next_filter(),
            KeyCode::Left | KeyCode::BackTab => self.state.view.prev_filter(),
            KeyCode::Up | KeyCode::Char('k') => self.state.view.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let shown = filter_items(self.store.snapshot(), self.state.view.filter).len();
                self.state.view.scroll_down(shown);
            }
            _ => {}
        }
    }
}
