//! Browsing state and the transitions that drive it.
//!
//! [`BrowserState`] is the single owner of everything the browser knows:
//! pagination, search text, the loaded page, the selection. It only changes
//! through [`BrowserState::apply`], which returns a [`FetchRequest`] whenever
//! the (page, page size, committed search) combination changes. Every request
//! carries a ticket; a response is applied only if its ticket is the latest
//! one issued, so a slow response for an old query never overwrites a newer
//! one.

use marquee_core::listing::{total_pages, MoviePage};
use marquee_core::movie::Movie;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [i64; 4] = [10, 25, 50, 100];

/// Page size on start.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// The parameters of one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: i64,
    pub limit: i64,
    /// Committed search text; empty means no filter.
    pub search: String,
}

/// A request the caller must perform, tagged with the ticket that the
/// matching response has to carry back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: u64,
    pub query: PageQuery,
}

/// Everything that can happen to the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The search box text changed. Does not trigger a request.
    EditSearch(String),
    /// The search form was submitted.
    SubmitSearch,
    /// A page size was picked from the selector.
    SetPageSize(i64),
    PrevPage,
    NextPage,
    /// Raw text from the jump-to-page box.
    JumpToPage(String),
    /// A card was selected, by its position in the current page.
    Select(usize),
    /// The detail view was dismissed.
    CloseDetail,
    /// A listing request completed.
    Loaded { ticket: u64, page: MoviePage },
    /// A listing request failed.
    Failed { ticket: u64, message: String },
}

/// The browser's state container.
#[derive(Debug, Clone)]
pub struct BrowserState {
    page: i64,
    page_size: i64,
    search: String,
    search_input: String,
    loading: bool,
    error: Option<String>,
    data: Option<MoviePage>,
    selected: Option<Movie>,
    ticket: u64,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            search_input: String::new(),
            loading: false,
            error: None,
            data: None,
            selected: None,
            ticket: 0,
        }
    }

    /// Issue the initial request for the starting state.
    pub fn start(&mut self) -> FetchRequest {
        self.begin_fetch()
    }

    /// Apply one action. Returns the request to perform if the listing
    /// parameters changed.
    pub fn apply(&mut self, action: Action) -> Option<FetchRequest> {
        let before = self.query();

        match action {
            Action::EditSearch(text) => self.search_input = text,
            Action::SubmitSearch => {
                self.search = self.search_input.trim().to_string();
                self.page = 1;
            }
            Action::SetPageSize(size) => {
                if PAGE_SIZE_OPTIONS.contains(&size) {
                    self.page_size = size;
                    self.page = 1;
                }
            }
            Action::PrevPage => {
                if self.can_go_prev() {
                    self.page -= 1;
                }
            }
            Action::NextPage => {
                if self.can_go_next() {
                    self.page += 1;
                }
            }
            Action::JumpToPage(raw) => {
                if let Some(target) = self.parse_jump(&raw) {
                    self.page = target;
                }
            }
            // Cards are hidden while loading, so there is nothing to pick.
            Action::Select(_) if self.loading => {}
            Action::Select(index) => {
                if let Some(movie) = self.data.as_ref().and_then(|d| d.movies.get(index)) {
                    self.selected = Some(movie.clone());
                }
            }
            Action::CloseDetail => self.selected = None,
            Action::Loaded { ticket, page } => {
                if self.is_current(ticket) {
                    self.data = Some(page);
                    self.error = None;
                    self.loading = false;
                } else {
                    tracing::debug!(ticket, latest = self.ticket, "Discarding stale response");
                }
            }
            Action::Failed { ticket, message } => {
                if self.is_current(ticket) {
                    self.error = Some(message);
                    self.data = None;
                    self.loading = false;
                } else {
                    tracing::debug!(ticket, latest = self.ticket, "Discarding stale failure");
                }
            }
        }

        (self.query() != before).then(|| self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.ticket += 1;
        self.loading = true;
        self.error = None;
        FetchRequest {
            ticket: self.ticket,
            query: self.query(),
        }
    }

    fn is_current(&self, ticket: u64) -> bool {
        ticket == self.ticket
    }

    /// Accept a jump target only if it is an integer within `[1, total_pages]`.
    fn parse_jump(&self, raw: &str) -> Option<i64> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .filter(|p| (1..=self.total_pages()).contains(p))
    }

    /// The listing parameters for the current state.
    pub fn query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: self.page_size,
            search: self.search.clone(),
        }
    }

    /// Pages available at the current page size; 1 before anything loads.
    pub fn total_pages(&self) -> i64 {
        self.data
            .as_ref()
            .map_or(1, |d| total_pages(d.total, self.page_size))
    }

    /// Whether the loaded result has no records.
    pub fn is_empty_result(&self) -> bool {
        self.data.as_ref().is_some_and(|d| d.total == 0)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1 && !self.is_empty_result()
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages() && !self.is_empty_result()
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&MoviePage> {
        self.data.as_ref()
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
