use catalog_app::platform::session::{DetailStatus, Session, ScreenView};
use catalog_app::platform::ui::render::{format_card, pager_line, render, scroll_to_top};
use catalog_core::{update, Category, FetchKey, MovieCard, Msg, PageWindowController};
use catalog_engine::{Cast, Credits, Genre, Movie, MovieDetail};
use pretty_assertions::assert_eq;

const TODAY: &str = "2026-10-19";

fn loaded(page: &str, total: u64) -> PageWindowController {
    let filter = Category::Comedy.filter(TODAY);
    let state = PageWindowController::new(filter.clone(), Some(page.to_string()));
    let (state, _) = update(state, Msg::Mounted);
    let key = FetchKey::new(filter, state.current_page());
    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            key,
            total_results: total,
            items: Vec::new(),
        },
    );
    state
}

#[test]
fn pager_in_the_middle_shows_both_ellipses() {
    let view = loaded("250", 12_000).view();
    assert_eq!(
        pager_line(&view),
        "< Prev | 1 … 248 249 [250] 251 252 … 500 | Next >"
    );
}

#[test]
fn pager_on_first_page_disables_prev() {
    let view = loaded("1", 12_000).view();
    assert_eq!(pager_line(&view), "  Prev | [1] 2 3 4 5 … 500 | Next >");
}

#[test]
fn pager_near_end_has_no_trailing_ellipsis_or_last_link() {
    let view = loaded("5", 140).view();
    assert_eq!(view.total_pages, 7);
    assert_eq!(pager_line(&view), "< Prev | 1 … 3 4 [5] 6 7 | Next >");
}

#[test]
fn card_line() {
    let card = MovieCard {
        id: 603,
        title: "The Matrix".to_string(),
        vote_average: 8.2,
        release_date: "1999-03-30".to_string(),
        ..MovieCard::default()
    };
    assert_eq!(format_card(&card), "       603  The Matrix (1999)  * 8.2");
}

#[test]
fn empty_listing_renders_empty_state() {
    let (mut session, _) = Session::open(TODAY, "/comedy");
    session.apply_page(
        FetchKey::new(Category::Comedy.filter(TODAY), 1),
        Ok((0, Vec::new())),
    );
    let lines = render(&session.view());
    assert_eq!(lines, vec!["== Comedy ==", "No movies found. Type r to reload."]);
}

#[test]
fn listing_shows_range_and_page_count() {
    let (mut session, _) = Session::open(TODAY, "/comedy?page=3");
    let cards = vec![MovieCard {
        id: 1,
        title: "Airplane!".to_string(),
        ..MovieCard::default()
    }];
    session.apply_page(
        FetchKey::new(Category::Comedy.filter(TODAY), 3),
        Ok((95, cards)),
    );
    let lines = render(&session.view());
    assert_eq!(lines[0], "== Comedy ==");
    assert_eq!(lines[1], "Showing 41-60 of 95 movies    Page 3 of 5");
    assert_eq!(lines[2], "         1  Airplane!  * 0.0");
    assert_eq!(lines.last().unwrap(), "Jump to page: j <1-5>");
}

#[test]
fn detail_lists_money_runtime_and_cast() {
    let detail = MovieDetail {
        movie: Movie {
            id: 603,
            title: "The Matrix".to_string(),
            release_date: "1999-03-30".to_string(),
            vote_average: 8.2,
            vote_count: 25_000,
            runtime: Some(136),
            budget: Some(63_000_000),
            revenue: Some(0),
            genres: vec![
                Genre {
                    id: 28,
                    name: "Action".to_string(),
                },
                Genre {
                    id: 878,
                    name: "Science Fiction".to_string(),
                },
            ],
            ..Movie::default()
        },
        credits: Some(Credits {
            cast: vec![Cast {
                name: "Keanu Reeves".to_string(),
                character: "Neo".to_string(),
                ..Cast::default()
            }],
            crew: Vec::new(),
        }),
        images: None,
        similar: Vec::new(),
    };
    let lines = render(&ScreenView::Detail {
        movie_id: 603,
        status: DetailStatus::Loaded(Box::new(detail)),
    });

    assert_eq!(lines[0], "== The Matrix (1999) ==");
    assert!(lines.contains(&"Rating: 8.2 (25,000 votes)".to_string()));
    assert!(lines.contains(&"Runtime: 2h 16m".to_string()));
    assert!(lines.contains(&"Genres: Action, Science Fiction".to_string()));
    assert!(lines.contains(&"Budget: $63.0M".to_string()));
    assert!(!lines.iter().any(|line| line.starts_with("Revenue")));
    assert!(lines.contains(&"  Keanu Reeves as Neo".to_string()));
}

#[test]
fn scroll_to_top_clears_and_homes_cursor() {
    let mut out = Vec::new();
    scroll_to_top(&mut out).unwrap();
    let written = String::from_utf8(out).unwrap();
    assert!(written.contains("\x1b[2J"), "{written:?}");
    assert!(written.ends_with("\x1b[1;1H"), "{written:?}");
}
