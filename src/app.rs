use ratatui::widgets::ListState;

use crate::link::LinkOpener;
use crate::source::Article;
use crate::store::FetchState;

pub struct App {
    /// Latest snapshot published by the store.
    pub state: FetchState,
    /// Card selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Advances once per frame; drives the spinner.
    pub tick: usize,
    /// One-line feedback shown in the status bar.
    pub status: String,
    /// Upper-cased country code, for headings.
    pub country: String,
}

impl App {
    pub fn new(country: &str) -> Self {
        Self {
            state: FetchState::Idle,
            list_state: ListState::default(),
            quit: false,
            tick: 0,
            status: String::new(),
            country: country.to_ascii_uppercase(),
        }
    }

    /// Replace the displayed state with a newer snapshot from the store.
    pub fn apply(&mut self, state: FetchState) {
        self.status = match &state {
            FetchState::Idle => String::new(),
            FetchState::Loading => "Fetching…".into(),
            FetchState::Success(result) => format!("Fetched {} articles", result.articles.len()),
            FetchState::Error(_) => "Fetch failed".into(),
        };
        self.list_state = ListState::default();
        self.state = state;
        self.select_first();
    }

    /// Articles currently on screen, in server order.
    pub fn articles(&self) -> &[Article] {
        match &self.state {
            FetchState::Success(result) => &result.articles,
            _ => &[],
        }
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.list_state
            .selected()
            .and_then(|i| self.articles().get(i))
    }

    /// Hand the selected article's link to `opener`.
    pub fn open_selected(&mut self, opener: &dyn LinkOpener) {
        let Some(article) = self.selected_article() else {
            return;
        };
        let Some(url) = article.link() else {
            self.status = "This article has no link".into();
            return;
        };
        self.status = match opener.open(&url) {
            Ok(()) => format!("Opened {url}"),
            Err(e) => format!("Error: {e:#}"),
        };
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        let len = self.articles().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.articles().is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.articles().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.articles().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }
}
