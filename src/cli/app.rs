use super::ui;
use celebdesk::{EditStart, FieldUpdate, Gender, ProfileField, ProfileId, SaveOutcome, Session};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::{Block, Borders},
};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{debug, error};
use tui_textarea::{CursorMove, TextArea};

const TICK: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

pub struct App<'a> {
    pub session: Session,
    pub search: TextArea<'a>,
    pub field_input: TextArea<'a>,
    pub active_field: ProfileField,
    pub focus: Focus,
    pub selected: usize,
    pub exit: bool,
}

impl<'a> App<'a> {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            search: Self::new_search(),
            field_input: Self::new_field_input(ProfileField::First, String::new()),
            active_field: ProfileField::First,
            focus: Focus::List,
            selected: 0,
            exit: false,
        }
    }

    fn new_search() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("Search Celebs... (press '/' to type, Ctrl+U to clear)");
        textarea.set_block(Block::default().borders(Borders::ALL).title(" Search "));
        textarea
    }

    fn new_field_input(field: ProfileField, value: String) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![value]);
        textarea.set_placeholder_text(field.placeholder());
        let title = if field == ProfileField::Gender {
            format!(" {} (←/→ to choose) ", field.label())
        } else {
            format!(" {} ", field.label())
        };
        textarea.set_block(Block::default().borders(Borders::ALL).title(title));
        textarea.move_cursor(CursorMove::End);
        textarea
    }

    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        if let Err(err) = &res {
            error!(error = %err, "terminal loop failed");
        }
        res
    }

    async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.session.expire_notices(Instant::now());
            terminal.draw(|f| ui::draw(f, self))?;

            // Poll so an expiring notice is redrawn without a key press.
            if !event::poll(TICK)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    pub fn selected_id(&self) -> Option<ProfileId> {
        self.session.roster().filtered().get(self.selected).map(|p| p.id)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.session.blocking_notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.session.dismiss_blocking();
            }
            return;
        }

        if self.session.pending_delete().is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.session.confirm_delete();
                    self.clamp_selection();
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.session.decline_delete();
                }
                _ => {}
            }
            return;
        }

        if self.session.edit_buffer().is_some() {
            self.handle_edit_key(key);
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.exit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.session.roster().filtered().len();
                if len > 0 {
                    self.selected = (self.selected + 1) % len;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = self.session.roster().filtered().len();
                if len > 0 {
                    self.selected = (self.selected + len - 1) % len;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.session.toggle_expanded(id);
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    if self.session.begin_edit(id) == EditStart::Started {
                        self.active_field = ProfileField::First;
                        self.load_field();
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.session.request_delete(id);
                }
            }
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = Focus::List;
                return;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search = Self::new_search();
            }
            _ => {
                self.search.input(key);
            }
        }
        let term = self.search.lines().join(" ").to_lowercase();
        self.session.search(&term);
        self.clamp_selection();
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.session.cancel();
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.session.save() {
                    Ok(SaveOutcome::Saved) => self.clamp_selection(),
                    Ok(outcome) => debug!(?outcome, "save skipped"),
                    // Already surfaced as a blocking notice.
                    Err(_) => {}
                }
            }
            KeyCode::Tab | KeyCode::Enter => {
                self.active_field = self.active_field.next();
                self.load_field();
            }
            KeyCode::BackTab => {
                self.active_field = self.active_field.previous();
                self.load_field();
            }
            KeyCode::Left | KeyCode::Right if self.active_field == ProfileField::Gender => {
                let forward = key.code == KeyCode::Right;
                self.cycle_gender(forward);
            }
            // Gender is a fixed choice list; typed text is not accepted.
            _ if self.active_field == ProfileField::Gender => {}
            _ => {
                if !self.field_input.input(key) {
                    return;
                }
                let text = self.field_input.lines().join("");
                match self.session.update_field(self.active_field, &text) {
                    FieldUpdate::Applied if self.active_field == ProfileField::Age => {
                        self.load_field()
                    }
                    FieldUpdate::Applied => {}
                    FieldUpdate::Rejected => self.load_field(),
                }
            }
        }
    }

    /// Step through the gender options, including the empty "Select Gender"
    /// entry.
    fn cycle_gender(&mut self, forward: bool) {
        let options: Vec<&str> = std::iter::once("")
            .chain(Gender::ALL.iter().map(|g| g.as_str()))
            .collect();
        let current = self.current_value(ProfileField::Gender);
        let idx = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % options.len()
        } else {
            (idx + options.len() - 1) % options.len()
        };
        self.session.update_field(ProfileField::Gender, options[next]);
        self.load_field();
    }

    fn current_value(&self, field: ProfileField) -> String {
        let today = self.session.today();
        self.session
            .edit_buffer()
            .map(|buffer| buffer.value(field, today))
            .unwrap_or_default()
    }

    fn load_field(&mut self) {
        let value = self.current_value(self.active_field);
        self.field_input = Self::new_field_input(self.active_field, value);
    }

    fn clamp_selection(&mut self) {
        let len = self.session.roster().filtered().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
