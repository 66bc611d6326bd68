use std::future::Future;
use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;

use crate::pipeline::{Completion, FactSource, ResultStore};
use crate::ui::expansion::ExpansionController;
use crate::ui::render;
use crate::ui::view::{compose, View};

/// Side effects requested by a key press; the loop carries them out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppCommand {
    Refresh,
    Quit,
}

pub struct App<S: FactSource> {
    store: ResultStore<S>,
    expansion: ExpansionController,
    cursor: usize,
}

impl<S: FactSource + 'static> App<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            store: ResultStore::new(source),
            expansion: ExpansionController::new(),
            cursor: 0,
        }
    }

    pub fn store(&self) -> &ResultStore<S> {
        &self.store
    }

    pub fn expansion(&self) -> &ExpansionController {
        &self.expansion
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn view(&self) -> View {
        compose(self.store.status(), self.expansion.state())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppCommand::Quit)
            }
            KeyCode::Char('r') | KeyCode::F(5) => Some(AppCommand::Refresh),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected();
                None
            }
            _ => None,
        }
    }

    /// Flip `Loading` on now and return the fetch to run in the background.
    pub fn start_refresh(&mut self) -> impl Future<Output = Completion> + Send + 'static {
        let ticket = self.store.begin_load();
        self.store.fetch(ticket)
    }

    pub fn apply(&mut self, completion: Completion) {
        if !self.store.complete(completion) {
            return;
        }
        if self.expansion.reconcile(self.store.last_good()) {
            debug!("expanded row no longer present, collapsed");
        }
        self.clamp_cursor();
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.store.records().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn clamp_cursor(&mut self) {
        let len = self.store.records().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn toggle_selected(&mut self) {
        if let Some(record) = self.store.records().get(self.cursor) {
            self.expansion.toggle(record.id.clone());
        }
    }
}

/// Take over the terminal, run the dashboard, and restore the terminal
/// whatever the outcome.
pub async fn run_terminal<S: FactSource + 'static>(app: &mut App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    let result = event_loop(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run `setup`; if it fails, run `restore` before handing back the error so
/// the shell is not left in raw mode.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    setup().inspect_err(|_| {
        if let Err(err) = restore() {
            debug!(%err, "terminal restore after failed setup");
        }
    })
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Single-threaded loop: redraw, then wait for either a key or a finished
/// fetch. Fetches run as tasks on the same runtime.
pub async fn event_loop<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: Backend,
    S: FactSource + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_refresh(app, &tx);
    let mut events = EventStream::new();

    loop {
        let view = app.view();
        terminal.draw(|frame| render::draw(frame, &view, app.cursor()))?;

        tokio::select! {
            Some(completion) = rx.recv() => app.apply(completion),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match app.handle_key(key) {
                    Some(AppCommand::Refresh) => spawn_refresh(app, &tx),
                    Some(AppCommand::Quit) => break,
                    None => {}
                },
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }
    Ok(())
}

fn spawn_refresh<S: FactSource + 'static>(app: &mut App<S>, tx: &mpsc::UnboundedSender<Completion>) {
    let fetch = app.start_refresh();
    let tx = tx.clone();
    tokio::spawn(async move {
        // The receiver only goes away when the loop has exited.
        let _ = tx.send(fetch.await);
    });
}
