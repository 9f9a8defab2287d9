// TUI application state and key handling
//
// The app never touches the network itself: every handler returns the
// actions it wants performed and the runner carries them out.
use std::num::NonZeroUsize;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use profilescout_core::{
    pagination::next_page_size, Account, ColumnKey, FetchTicket, Handle, ListOptions,
    PageOutcome, PageResponse, Repository, RepositoryList, ResolutionError, SortSpec,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Searching,  // Typing a username
    Browsing,   // Moving around the table
    GotoPage,   // Typing a page number
}

/// Side effects requested by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Resolve { generation: u64, handle: Handle },
    FetchPage(FetchTicket),
    /// Clear banner `id` after `delay`, unless a newer one replaced it
    DismissBannerAfter { id: u64, delay: Duration },
    OpenUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub id: u64,
    pub message: String,
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub search_input: String,
    pub goto_input: String,
    pub list: RepositoryList,
    /// Handle whose lookup is in flight
    pub resolving: Option<Handle>,
    pub banner: Option<ErrorBanner>,
    /// Highlighted row, relative to the visible page
    pub selected_row: usize,
    search_generation: u64,
    next_banner_id: u64,
    banner_timeout: Duration,
    initial_sort: Option<SortSpec>,
}

impl App {
    pub fn new(options: ListOptions, initial_sort: Option<SortSpec>, banner_timeout: Duration) -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Searching,
            search_input: String::new(),
            goto_input: String::new(),
            list: RepositoryList::new(options),
            resolving: None,
            banner: None,
            selected_row: 0,
            search_generation: 0,
            next_banner_id: 0,
            banner_timeout,
            initial_sort,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        self.list.account()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return Vec::new();
        }

        match self.input_mode {
            InputMode::Searching => self.handle_search_key(key),
            InputMode::GotoPage => {
                self.handle_goto_key(key);
                Vec::new()
            }
            InputMode::Browsing => self.handle_browse_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Enter => return self.submit_search(),
            KeyCode::Char(c) => self.search_input.push(c),
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Esc => {
                if self.account().is_some() {
                    self.input_mode = InputMode::Browsing;
                } else {
                    self.quit();
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_goto_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => self.goto_input.push(c),
            KeyCode::Backspace => {
                self.goto_input.pop();
            }
            KeyCode::Enter => {
                // Pages are shown 1-based; blank means the first page and
                // anything too long to parse lands on the last one
                let page: isize = if self.goto_input.is_empty() {
                    1
                } else {
                    self.goto_input.parse().unwrap_or(isize::MAX)
                };
                self.list.goto_page(page.saturating_sub(1));
                self.selected_row = 0;
                self.goto_input.clear();
                self.input_mode = InputMode::Browsing;
            }
            KeyCode::Esc => {
                self.goto_input.clear();
                self.input_mode = InputMode::Browsing;
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') => {
                self.search_input.clear();
                self.input_mode = InputMode::Searching;
            }
            KeyCode::Char(':') => {
                self.goto_input.clear();
                self.input_mode = InputMode::GotoPage;
            }
            KeyCode::Char('j') | KeyCode::Down => self.next_row(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_row(),
            KeyCode::Char('l') | KeyCode::Right => return self.next_page(),
            KeyCode::Char('h') | KeyCode::Left => {
                if self.list.previous_page() {
                    self.selected_row = 0;
                }
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.list.goto_page(0);
                self.selected_row = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.list.last_page();
                self.selected_row = 0;
            }
            KeyCode::Char('n') => self.toggle_sort(ColumnKey::Name),
            KeyCode::Char('s') => self.toggle_sort(ColumnKey::Stars),
            KeyCode::Char('p') => self.cycle_page_size(),
            KeyCode::Char('m') | KeyCode::Char('r') => return self.load_more(),
            KeyCode::Enter => {
                if let Some(repo) = self.selected_repository() {
                    return vec![Action::OpenUrl(repo.url.clone())];
                }
            }
            KeyCode::Char('o') => {
                if let Some(account) = self.account() {
                    return vec![Action::OpenUrl(account.profile_url.clone())];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    /// Validate the search box and start a lookup
    ///
    /// Whatever was on screen is dropped right away, late answers for it
    /// are ignored.
    pub fn submit_search(&mut self) -> Vec<Action> {
        let handle = match Handle::from_input(&self.search_input) {
            Ok(handle) => handle,
            Err(e) => return vec![self.show_error(e.to_string())],
        };

        info!("Searching for {}", handle);
        self.search_generation += 1;
        self.list.clear();
        self.selected_row = 0;
        self.resolving = Some(handle.clone());

        vec![Action::Resolve {
            generation: self.search_generation,
            handle,
        }]
    }

    pub fn on_account_resolved(
        &mut self,
        generation: u64,
        result: Result<Account, ResolutionError>,
    ) -> Vec<Action> {
        if generation != self.search_generation {
            debug!("Ignoring lookup from search {}", generation);
            return Vec::new();
        }
        self.resolving = None;

        match result {
            Ok(account) => {
                let ticket = self.list.reset(account);
                self.list.set_sort(self.initial_sort);
                self.selected_row = 0;
                self.input_mode = InputMode::Browsing;
                vec![Action::FetchPage(ticket)]
            }
            Err(e) => vec![self.show_error(e.to_string())],
        }
    }

    pub fn on_page_loaded(&mut self, response: PageResponse) -> Vec<Action> {
        let outcome = self.list.apply_page(response);
        self.clamp_selection();

        match outcome {
            PageOutcome::Failed(e) => vec![self.show_error(format!("{} (press r to retry)", e))],
            PageOutcome::Merged { .. } | PageOutcome::Stale => Vec::new(),
        }
    }

    /// Put up an error banner and schedule its removal
    pub fn show_error(&mut self, message: String) -> Action {
        self.next_banner_id += 1;
        let id = self.next_banner_id;
        self.banner = Some(ErrorBanner { id, message });

        Action::DismissBannerAfter {
            id,
            delay: self.banner_timeout,
        }
    }

    /// Clear banner `id` if it is still the one showing
    pub fn dismiss_banner(&mut self, id: u64) {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }

    pub fn load_more(&mut self) -> Vec<Action> {
        match self.list.request_more() {
            Some(ticket) => vec![Action::FetchPage(ticket)],
            None => Vec::new(),
        }
    }

    /// Next page, or fetch more when sitting on the last loaded page
    pub fn next_page(&mut self) -> Vec<Action> {
        if self.list.next_page() {
            self.selected_row = 0;
            return Vec::new();
        }
        self.load_more()
    }

    pub fn toggle_sort(&mut self, column: ColumnKey) {
        self.list.toggle_sort(column);
        self.selected_row = 0;
    }

    pub fn cycle_page_size(&mut self) {
        let size: NonZeroUsize = next_page_size(self.list.page_size());
        self.list.set_page_size(size);
        self.clamp_selection();
    }

    pub fn next_row(&mut self) {
        let visible = self.list.visible_rows().len();
        if visible > 0 {
            self.selected_row = (self.selected_row + 1).min(visible - 1);
        }
    }

    pub fn previous_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn selected_repository(&self) -> Option<&Repository> {
        self.list.visible_rows().get(self.selected_row).copied()
    }

    pub fn is_loading(&self) -> bool {
        self.resolving.is_some() || self.list.state().is_fetching()
    }

    fn clamp_selection(&mut self) {
        let visible = self.list.visible_rows().len();
        self.selected_row = self.selected_row.min(visible.saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ListOptions::default(), None, Duration::from_secs(5))
    }
}
