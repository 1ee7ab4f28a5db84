use catalog_core::{Category, Effect, FetchKey, HomeFeed, MovieCard, HERO_LEN};

const TODAY: &str = "2026-10-19";

fn key(category: Category) -> FetchKey {
    FetchKey::new(category.filter(TODAY), 1)
}

fn cards(count: usize) -> Vec<MovieCard> {
    (0..count)
        .map(|i| MovieCard {
            id: i as u64,
            title: format!("Title {i}"),
            ..MovieCard::default()
        })
        .collect()
}

#[test]
fn fetches_first_page_of_every_category() {
    let feed = HomeFeed::new(TODAY);
    let effects = feed.fetch_effects();

    assert_eq!(effects.len(), Category::ALL.len());
    for category in Category::ALL {
        assert!(effects.contains(&Effect::FetchPage(key(category))));
    }
}

#[test]
fn loading_until_blocking_sections_arrive() {
    let mut feed = HomeFeed::new(TODAY);
    assert!(feed.is_loading());

    for category in [Category::Action, Category::Comedy, Category::Drama, Category::SciFi] {
        assert!(feed.apply(&key(category), Ok(cards(3))));
    }
    assert!(feed.is_loading());

    feed.apply(&key(Category::Popular), Ok(cards(20)));
    feed.apply(&key(Category::TopRated), Ok(cards(20)));
    assert!(feed.is_loading());
    feed.apply(&key(Category::Upcoming), Err("timeout".to_string()));
    assert!(!feed.is_loading());

    let view = feed.view();
    assert!(!view.is_loading);
    assert_eq!(view.hero.len(), HERO_LEN);
    let upcoming = view
        .sections
        .iter()
        .find(|section| section.slug == "upcoming")
        .unwrap();
    assert_eq!(upcoming.error_message.as_deref(), Some("timeout"));
    assert!(upcoming.items.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
    let mut feed = HomeFeed::new(TODAY);
    let before = feed.clone();
    let stray = FetchKey::new(Category::Action.filter(TODAY), 2);

    assert!(!feed.apply(&stray, Ok(cards(1))));
    assert_eq!(feed, before);
}

#[test]
fn reload_resets_sections() {
    let mut feed = HomeFeed::new(TODAY);
    for category in Category::ALL {
        feed.apply(&key(category), Ok(cards(2)));
    }
    assert!(!feed.is_loading());
    assert!(feed.consume_dirty());

    let effects = feed.reload();
    assert_eq!(effects.len(), Category::ALL.len());
    assert!(feed.is_loading());
    assert!(feed.consume_dirty());
}
