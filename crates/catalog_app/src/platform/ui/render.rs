use std::io::{self, Write};

use catalog_core::format::{
    format_budget, format_rating, format_runtime, format_thousands, release_year,
};
use catalog_core::{HomeViewModel, MovieCard, PageViewModel};
use catalog_engine::{image_url, MovieDetail};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::platform::effects::movie_card;
use crate::platform::session::{DetailStatus, ScreenView};

/// Cards shown per home carousel.
pub const CAROUSEL_LEN: usize = 10;
const CAST_LEN: usize = 12;
const BACKDROP_LEN: usize = 12;
const SIMILAR_LEN: usize = 8;

/// Clears the terminal and homes the cursor, so a new page starts at the top.
pub fn scroll_to_top(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

pub fn render(view: &ScreenView) -> Vec<String> {
    match view {
        ScreenView::Home(home) => render_home(home),
        ScreenView::Listing { title, view } => render_listing(title, view),
        ScreenView::Detail { movie_id, status } => render_detail(*movie_id, status),
    }
}

fn render_home(home: &HomeViewModel) -> Vec<String> {
    if home.is_loading {
        return vec!["Loading movies...".to_string()];
    }
    let mut lines = Vec::new();
    if !home.hero.is_empty() {
        lines.push("== Featured ==".to_string());
        for card in &home.hero {
            lines.push(format_card(card));
        }
    }
    for section in &home.sections {
        lines.push(String::new());
        lines.push(format!("== {} ==  (g /{})", section.title, section.slug));
        if section.is_pending {
            lines.push("  loading...".to_string());
        } else if let Some(reason) = &section.error_message {
            lines.push(format!("  unavailable: {reason}"));
        } else if section.items.is_empty() {
            lines.push("  no movies".to_string());
        } else {
            for card in section.items.iter().take(CAROUSEL_LEN) {
                lines.push(format_card(card));
            }
        }
    }
    lines
}

fn render_listing(title: &str, view: &PageViewModel) -> Vec<String> {
    let mut lines = vec![format!("== {title} ==")];
    if view.is_error {
        lines.push(format!(
            "Something went wrong: {}",
            view.error_message.as_deref().unwrap_or("unknown error")
        ));
        lines.push("Could not load movies. Type r to retry.".to_string());
        return lines;
    }
    if view.is_pending {
        lines.push(format!("Loading {title}..."));
        return lines;
    }
    if view.is_empty {
        lines.push("No movies found. Type r to reload.".to_string());
        return lines;
    }

    lines.push(format!(
        "Showing {} movies    Page {}",
        view.range_label, view.page_count_label
    ));
    for card in &view.items {
        lines.push(format_card(card));
    }
    if view.show_pagination {
        lines.push(String::new());
        lines.push(pager_line(view));
        lines.push(format!("Jump to page: j <1-{}>", view.total_pages));
    }
    lines
}

/// `< Prev | 1 … 4 5 [6] 7 8 … 500 | Next >`; disabled buttons lose their arrow.
pub fn pager_line(view: &PageViewModel) -> String {
    let mut parts = Vec::new();
    let window = &view.window;
    if window.show_first() {
        parts.push("1".to_string());
        if window.show_leading_ellipsis() {
            parts.push("…".to_string());
        }
    }
    for page in &window.pages {
        if *page == view.current_page {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.show_last() {
        if window.show_trailing_ellipsis() {
            parts.push("…".to_string());
        }
        parts.push(window.total_pages.to_string());
    }
    let prev = if view.can_go_previous { "< Prev" } else { "  Prev" };
    let next = if view.can_go_next { "Next >" } else { "Next  " };
    format!("{prev} | {} | {next}", parts.join(" "))
}

pub fn format_card(card: &MovieCard) -> String {
    let year = release_year(&card.release_date)
        .map(|year| format!(" ({year})"))
        .unwrap_or_default();
    format!(
        "  {:>8}  {}{}  * {}",
        card.id,
        card.title,
        year,
        format_rating(card.vote_average)
    )
}

fn render_detail(movie_id: u64, status: &DetailStatus) -> Vec<String> {
    match status {
        DetailStatus::Loading => vec![format!("Loading movie {movie_id}...")],
        DetailStatus::Failed(reason) => vec![
            format!("Could not load movie {movie_id}: {reason}"),
            "Type r to retry or b to go back.".to_string(),
        ],
        DetailStatus::Loaded(detail) => render_loaded_detail(detail),
    }
}

fn render_loaded_detail(detail: &MovieDetail) -> Vec<String> {
    let movie = &detail.movie;
    let mut lines = Vec::new();
    let year = release_year(&movie.release_date)
        .map(|year| format!(" ({year})"))
        .unwrap_or_default();
    lines.push(format!("== {}{} ==", movie.title, year));
    if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("\"{tagline}\""));
    }
    lines.push(format!(
        "Rating: {} ({} votes)",
        format_rating(movie.vote_average),
        format_thousands(movie.vote_count)
    ));
    if let Some(runtime) = movie.runtime.filter(|minutes| *minutes > 0) {
        lines.push(format!("Runtime: {}", format_runtime(runtime)));
    }
    if !movie.genres.is_empty() {
        let names: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        lines.push(format!("Genres: {}", names.join(", ")));
    }
    if let Some(poster) = &movie.poster_path {
        lines.push(format!("Poster: {}", image_url(poster, "w500")));
    }
    if let Some(overview) = movie.overview.as_deref().filter(|o| !o.is_empty()) {
        lines.push(String::new());
        lines.push(overview.to_string());
    }

    lines.push(String::new());
    if let Some(budget) = movie.budget.filter(|amount| *amount > 0) {
        lines.push(format!("Budget: {}", format_budget(budget)));
    }
    if let Some(revenue) = movie.revenue.filter(|amount| *amount > 0) {
        lines.push(format!("Revenue: {}", format_budget(revenue)));
    }
    if let Some(status) = &movie.status {
        lines.push(format!("Status: {status}"));
    }
    if !movie.production_countries.is_empty() {
        let names: Vec<&str> = movie
            .production_countries
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        lines.push(format!("Countries: {}", names.join(", ")));
    }
    if !movie.spoken_languages.is_empty() {
        let names: Vec<&str> = movie
            .spoken_languages
            .iter()
            .map(|l| l.english_name.as_str())
            .collect();
        lines.push(format!("Languages: {}", names.join(", ")));
    }

    if let Some(credits) = detail.credits.as_ref().filter(|c| !c.cast.is_empty()) {
        lines.push(String::new());
        lines.push("Cast:".to_string());
        for person in credits.cast.iter().take(CAST_LEN) {
            lines.push(format!("  {} as {}", person.name, person.character));
        }
    }
    if let Some(images) = detail.images.as_ref().filter(|i| !i.backdrops.is_empty()) {
        lines.push(String::new());
        lines.push("Backdrops:".to_string());
        for image in images.backdrops.iter().take(BACKDROP_LEN) {
            lines.push(format!("  {}", image_url(&image.file_path, "w780")));
        }
    }
    if !detail.similar.is_empty() {
        lines.push(String::new());
        lines.push("Similar:".to_string());
        for movie in detail.similar.iter().take(SIMILAR_LEN) {
            lines.push(format_card(&movie_card(movie)));
        }
    }
    lines
}
