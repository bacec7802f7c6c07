// src/app.rs

use crate::error::FetchError;
use crate::github;
use crate::types::commit_record::CommitRecord;
use crossterm::event::{self, KeyCode, KeyEvent};
use log::{debug, warn};
use tokio::sync::mpsc;
use tui::widgets::ListState;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

pub enum ActiveField {
    Owner,
    Repo,
}

pub enum AppMode {
    /// The owner/repo form has focus.
    RepoInput,
    /// Browsing the contributor list.
    Normal,
    /// The search box has focus; every keystroke re-highlights the list.
    Search,
    /// A fetch is in flight; the string is the popup message.
    Loading(String),
}

/// Result of one dispatched fetch, tagged with the generation counter it
/// was dispatched under so superseded responses can be dropped.
pub struct FetchOutcome {
    pub seq: u64,
    pub owner: String,
    pub repo: String,
    pub result: Result<Vec<CommitRecord>, FetchError>,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub active_field: ActiveField,
    pub owner_input: Input,
    pub repo_input: Input,
    pub search_input: Input,
    pub commits: Vec<CommitRecord>,
    pub list_state: ListState,
    /// Message shown in place of the list after a failed fetch.
    pub error: Option<String>,
    /// (owner, repo) of the currently displayed result, once any fetch
    /// has completed.
    pub loaded: Option<(String, String)>,
    fetch_seq: u64,
    pub fetch_sender: mpsc::Sender<FetchOutcome>,
    pub fetch_receiver: mpsc::Receiver<FetchOutcome>,
}

impl App {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(1);

        Self {
            should_quit: false,
            mode: AppMode::RepoInput,
            active_field: ActiveField::Owner,
            owner_input: Input::default(),
            repo_input: Input::default(),
            search_input: Input::default(),
            commits: Vec::new(),
            list_state: ListState::default(),
            error: None,
            loaded: None,
            fetch_seq: 0,
            fetch_sender: tx,
            fetch_receiver: rx,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::RepoInput => self.handle_repo_input_keys(key),
            AppMode::Normal => self.handle_normal_mode_keys(key),
            AppMode::Search => self.handle_search_keys(key),
            AppMode::Loading(_) => {
                if let KeyCode::Esc = key.code {
                    self.cancel_fetch();
                }
            }
        }
    }

    fn handle_normal_mode_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.mode = AppMode::Search,
            KeyCode::Char('e') => self.mode = AppMode::RepoInput,
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            _ => {}
        }
    }

    fn handle_repo_input_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_fetch(),
            KeyCode::Tab => {
                self.active_field = match self.active_field {
                    ActiveField::Owner => ActiveField::Repo,
                    ActiveField::Repo => ActiveField::Owner,
                };
            }
            KeyCode::Esc => self.mode = AppMode::Normal,
            _ => {
                let input = match self.active_field {
                    ActiveField::Owner => &mut self.owner_input,
                    ActiveField::Repo => &mut self.repo_input,
                };
                input.handle_event(&event::Event::Key(key));
            }
        }
    }

    fn handle_search_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.mode = AppMode::Normal,
            _ => {
                self.search_input.handle_event(&event::Event::Key(key));
            }
        }
    }

    /// Kicks off a fetch for whatever the form currently holds. Input
    /// validation happens inside the fetcher, so an empty field comes
    /// back as an ordinary error outcome.
    fn submit_fetch(&mut self) {
        let owner = self.owner_input.value().to_string();
        let repo = self.repo_input.value().to_string();

        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.mode = AppMode::Loading(format!("Fetching commits for {owner}/{repo}..."));
        debug!("dispatching fetch #{seq} for {owner}/{repo}");

        let sender = self.fetch_sender.clone();
        tokio::spawn(async move {
            let result = github::fetch_commits(&owner, &repo).await;
            let _ = sender
                .send(FetchOutcome {
                    seq,
                    owner,
                    repo,
                    result,
                })
                .await;
        });
    }

    /// Dismisses the loading popup and invalidates the in-flight request
    /// by advancing the generation counter.
    fn cancel_fetch(&mut self) {
        self.fetch_seq += 1;
        self.mode = AppMode::Normal;
    }

    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.seq != self.fetch_seq {
            warn!(
                "dropping stale fetch outcome #{} for {}/{}",
                outcome.seq, outcome.owner, outcome.repo
            );
            return;
        }

        self.mode = AppMode::Normal;
        self.loaded = Some((outcome.owner, outcome.repo));

        match outcome.result {
            Ok(commits) => {
                self.commits = commits;
                self.error = None;
                self.search_input.reset();
                self.list_state
                    .select(if self.commits.is_empty() { None } else { Some(0) });
            }
            Err(e) => {
                // A failed fetch replaces the list, never coexists with it.
                self.commits.clear();
                self.list_state.select(None);
                self.error = Some(e.to_string());
            }
        }
    }

    fn select_next(&mut self) {
        if self.commits.is_empty() {
            return;
        }
        let i = self
            .list_state
            .selected()
            .map_or(0, |i| if i >= self.commits.len() - 1 { 0 } else { i + 1 });
        self.list_state.select(Some(i));
    }

    fn select_previous(&mut self) {
        if self.commits.is_empty() {
            return;
        }
        let i = self
            .list_state
            .selected()
            .map_or(0, |i| if i == 0 { self.commits.len() - 1 } else { i - 1 });
        self.list_state.select(Some(i));
    }
}
