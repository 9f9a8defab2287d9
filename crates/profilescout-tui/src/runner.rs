// TUI event loop and terminal management
use crate::app::Action;
use crate::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use profilescout_core::{Account, AccountResolver, PageResponse, PageSource, ResolutionError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Everything that can wake the event loop up
#[derive(Debug)]
pub enum AppEvent {
    Input(Event),
    AccountResolved {
        generation: u64,
        result: Result<Account, ResolutionError>,
    },
    PageLoaded(PageResponse),
    DismissBanner(u64),
}

/// The remote side of the app
#[derive(Clone)]
pub struct Services {
    pub resolver: AccountResolver,
    pub pages: Arc<dyn PageSource>,
}

/// Background work owned by the loop
///
/// Only the banner timer is tracked: lookups and page fetches may finish
/// whenever, their answers are checked for staleness on arrival.
struct Tasks {
    tx: UnboundedSender<AppEvent>,
    services: Services,
    banner_timer: Option<JoinHandle<()>>,
}

impl Tasks {
    fn spawn(&mut self, action: Action) -> Option<String> {
        match action {
            Action::Resolve { generation, handle } => {
                let resolver = self.services.resolver.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = resolver.resolve(&handle).await;
                    let _ = tx.send(AppEvent::AccountResolved { generation, result });
                });
            }
            Action::FetchPage(ticket) => {
                let pages = Arc::clone(&self.services.pages);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let response = ticket.execute(pages.as_ref()).await;
                    let _ = tx.send(AppEvent::PageLoaded(response));
                });
            }
            Action::DismissBannerAfter { id, delay } => {
                // A newer error replaces the old timer
                if let Some(timer) = self.banner_timer.take() {
                    timer.abort();
                }
                let tx = self.tx.clone();
                self.banner_timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppEvent::DismissBanner(id));
                }));
            }
            Action::OpenUrl(url) => {
                debug!("Opening {}", url);
                if let Err(e) = open::that(&url) {
                    warn!("Failed to open {}: {}", url, e);
                    return Some(format!("Failed to open browser: {}", e));
                }
            }
        }
        None
    }

    /// Carry out `actions` and whatever follow-ups they produce
    fn run(&mut self, app: &mut App, actions: Vec<Action>) {
        let mut queue: VecDeque<Action> = actions.into();
        while let Some(action) = queue.pop_front() {
            if let Some(message) = self.spawn(action) {
                queue.push_back(app.show_error(message));
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }
    }
}

/// Read terminal events on a plain thread, crossterm's reader blocks
fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    std::thread::spawn(move || loop {
        if tx.is_closed() {
            break;
        }
        match event::poll(Duration::from_millis(200)) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.send(AppEvent::Input(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Terminal input failed: {}", e);
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                warn!("Terminal input failed: {}", e);
                break;
            }
        }
    });
}

/// Run the interactive UI until the user quits
///
/// With `initial_handle` the lookup starts right away, as if it had been
/// typed into the search box.
pub async fn run_tui(
    mut app: App,
    services: Services,
    initial_handle: Option<String>,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = unbounded_channel();
    spawn_input_reader(tx.clone());

    let mut tasks = Tasks {
        tx,
        services,
        banner_timer: None,
    };

    if let Some(handle) = initial_handle {
        app.search_input = handle;
        let actions = app.submit_search();
        tasks.run(&mut app, actions);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tasks, &mut rx).await;

    tasks.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tasks: &mut Tasks,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| crate::ui::render(f, app))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        let actions = match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                app.handle_key(key)
            }
            AppEvent::Input(_) => Vec::new(),
            AppEvent::AccountResolved { generation, result } => {
                app.on_account_resolved(generation, result)
            }
            AppEvent::PageLoaded(response) => app.on_page_loaded(response),
            AppEvent::DismissBanner(id) => {
                app.dismiss_banner(id);
                Vec::new()
            }
        };
        tasks.run(app, actions);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
