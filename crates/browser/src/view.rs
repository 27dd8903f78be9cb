//! What the browser shows for a given state.
//!
//! [`View::from_state`] decides *what* is visible (at most one of loading,
//! error, or the result grid, plus an optional detail panel); the
//! [`Display`](std::fmt::Display) impl writes it as plain text.

use std::fmt;

use marquee_core::movie::Movie;

use crate::state::BrowserState;

/// Image shown for movies without a poster.
pub const POSTER_PLACEHOLDER: &str =
    "https://placehold.co/200x280/000000/FFFFFF.png?text=No+Image";

/// Cast members listed in the detail panel before eliding the rest.
const DETAIL_CAST_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub search_input: String,
    pub active_search: String,
    pub page_size: i64,
    pub body: Body,
    pub detail: Option<Detail>,
}

/// The main area: exactly one of these is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading,
    Error(String),
    Grid { cards: Vec<Card>, pagination: Pagination },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// 1-based position on the page, as typed in `open <n>`.
    pub number: usize,
    pub title: String,
    pub year: Option<i32>,
    pub poster: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub total_pages: i64,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub title: String,
    pub poster: String,
    /// `Year: 1999 | Rated: R`
    pub headline: String,
    pub plot: Option<String>,
    /// Labelled facts, only those the record has.
    pub facts: Vec<(String, String)>,
}

impl View {
    pub fn from_state(state: &BrowserState) -> Self {
        let body = if state.is_loading() {
            Body::Loading
        } else if let Some(message) = state.error() {
            Body::Error(message.to_string())
        } else {
            let cards = state
                .data()
                .map(|d| d.movies.iter().enumerate().map(|(i, m)| card(i + 1, m)).collect())
                .unwrap_or_default();
            Body::Grid {
                cards,
                pagination: Pagination {
                    page: state.page(),
                    total_pages: state.total_pages(),
                    prev_enabled: state.can_go_prev(),
                    next_enabled: state.can_go_next(),
                },
            }
        };

        Self {
            search_input: state.search_input().to_string(),
            active_search: state.search().to_string(),
            page_size: state.page_size(),
            body,
            detail: state.selected().map(detail),
        }
    }
}

fn poster_of(movie: &Movie) -> String {
    movie
        .poster
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(POSTER_PLACEHOLDER)
        .to_string()
}

fn card(number: usize, movie: &Movie) -> Card {
    Card {
        number,
        title: movie.title.clone(),
        year: movie.year,
        poster: poster_of(movie),
    }
}

fn non_empty_list(items: &Option<Vec<String>>) -> Option<&[String]> {
    items.as_deref().filter(|v| !v.is_empty())
}

fn detail(movie: &Movie) -> Detail {
    let mut headline = match movie.year {
        Some(year) => format!("Year: {year}"),
        None => "Year: unknown".to_string(),
    };
    if let Some(rated) = movie.rated.as_deref().filter(|r| !r.is_empty()) {
        headline.push_str(&format!(" | Rated: {rated}"));
    }

    let mut facts: Vec<(String, String)> = Vec::new();
    let mut push = |label: &str, value: String| facts.push((label.to_string(), value));

    if let Some(genres) = non_empty_list(&movie.genres) {
        push("Genres", genres.join(", "));
    }
    if let Some(runtime) = movie.runtime {
        push("Runtime", format!("{runtime} min"));
    }
    if let Some(imdb) = &movie.imdb {
        let mut line = String::new();
        if let Some(rating) = imdb.rating {
            line.push_str(&rating.to_string());
        }
        if let Some(votes) = imdb.votes {
            line.push_str(&format!(" ({votes} votes)"));
        }
        if !line.is_empty() {
            push("IMDb", line.trim().to_string());
        }
    }
    if let Some(viewer) = movie.tomatoes.as_ref().and_then(|t| t.viewer.as_ref()) {
        let mut line = String::new();
        if let Some(rating) = viewer.rating {
            line.push_str(&format!("{rating}/5"));
        }
        if let Some(meter) = viewer.meter {
            line.push_str(&format!(" ({meter}%)"));
        }
        if !line.is_empty() {
            push("Rotten Tomatoes", line.trim().to_string());
        }
    }
    if let Some(directors) = non_empty_list(&movie.directors) {
        let label = if directors.len() > 1 { "Directors" } else { "Director" };
        push(label, directors.join(", "));
    }
    if let Some(cast) = non_empty_list(&movie.cast) {
        let mut line = cast
            .iter()
            .take(DETAIL_CAST_LIMIT)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if cast.len() > DETAIL_CAST_LIMIT {
            line.push_str(", ...");
        }
        push("Cast", line);
    }
    if let Some(text) = movie.awards.as_ref().and_then(|a| a.text.clone()) {
        push("Awards", text);
    }
    if let Some(languages) = non_empty_list(&movie.languages) {
        push("Languages", languages.join(", "));
    }
    if let Some(countries) = non_empty_list(&movie.countries) {
        push("Countries", countries.join(", "));
    }
    if let Some(writers) = non_empty_list(&movie.writers) {
        push("Writers", writers.join(", "));
    }

    Detail {
        title: movie.title.clone(),
        poster: poster_of(movie),
        headline,
        plot: movie.plot.clone(),
        facts,
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Search: [{}]", self.search_input)?;
        if !self.active_search.is_empty() {
            write!(f, "  (showing \"{}\")", self.active_search)?;
        }
        writeln!(f, "  Page size: {}", self.page_size)?;

        match &self.body {
            Body::Loading => writeln!(f, "Loading...")?,
            Body::Error(message) => writeln!(f, "Error: {message}")?,
            Body::Grid { cards, pagination } => {
                if cards.is_empty() {
                    writeln!(f, "No movies found.")?;
                }
                for card in cards {
                    writeln!(f, "{card}")?;
                }
                writeln!(f, "{pagination}")?;
            }
        }

        if let Some(detail) = &self.detail {
            write!(f, "{detail}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.map_or_else(|| "----".to_string(), |y| y.to_string());
        write!(f, "{:>3}. {} ({year})  {}", self.number, self.title, self.poster)
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prev = if self.prev_enabled { "[Prev]" } else { " Prev " };
        let next = if self.next_enabled { "[Next]" } else { " Next " };
        write!(f, "{prev}  Page {} of {}  {next}", self.page, self.total_pages)
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== {} ====  (close)", self.title)?;
        writeln!(f, "{}", self.poster)?;
        writeln!(f, "{}", self.headline)?;
        if let Some(plot) = &self.plot {
            writeln!(f, "{plot}")?;
        }
        for (label, value) in &self.facts {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
