use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use catalog_engine::{
    CacheSettings, CatalogSource, Credits, DiscoverRequest, EngineEvent, EngineHandle, FailureKind,
    FetchError, Images, Movie, MovieResponse,
};

#[derive(Default)]
struct FakeCatalog {
    discover_calls: AtomicUsize,
    movie_calls: AtomicUsize,
    fail_discover: bool,
    fail_similar: bool,
}

fn not_found() -> FetchError {
    FetchError {
        kind: FailureKind::HttpStatus(404),
        message: "404 Not Found".to_string(),
    }
}

fn movie(id: u64) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        ..Movie::default()
    }
}

#[async_trait::async_trait]
impl CatalogSource for FakeCatalog {
    async fn discover(&self, request: &DiscoverRequest) -> Result<MovieResponse, FetchError> {
        self.discover_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        if self.fail_discover {
            return Err(FetchError {
                kind: FailureKind::Timeout,
                message: "timed out".to_string(),
            });
        }
        Ok(MovieResponse {
            page: request.page,
            results: vec![movie(u64::from(request.page))],
            total_pages: 5,
            total_results: 95,
        })
    }

    async fn movie(&self, id: u64) -> Result<Movie, FetchError> {
        self.movie_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(movie(id))
    }

    async fn credits(&self, _id: u64) -> Result<Credits, FetchError> {
        Ok(Credits::default())
    }

    async fn images(&self, _id: u64) -> Result<Images, FetchError> {
        Err(not_found())
    }

    async fn similar(&self, _id: u64) -> Result<MovieResponse, FetchError> {
        if self.fail_similar {
            return Err(not_found());
        }
        Ok(MovieResponse {
            results: vec![movie(2), movie(3)],
            ..MovieResponse::default()
        })
    }
}

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("no engine event within deadline");
}

fn request(page: u32) -> DiscoverRequest {
    DiscoverRequest::new(vec![("with_genres".to_string(), "28".to_string())], page)
}

#[test]
fn duplicate_requests_share_one_fetch() {
    let source = Arc::new(FakeCatalog::default());
    let engine = EngineHandle::with_source(source.clone(), CacheSettings::default()).unwrap();

    engine.discover(request(1));
    engine.discover(request(1));

    match wait_for_event(&engine) {
        EngineEvent::PageLoaded { request: got, result } => {
            assert_eq!(got, request(1));
            assert_eq!(result.unwrap().total_results, 95);
        }
        other => panic!("unexpected event {other:?}"),
    }
    thread::sleep(Duration::from_millis(100));
    assert!(engine.try_recv().is_none());
    assert_eq!(source.discover_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn completed_pages_are_served_from_cache() {
    let source = Arc::new(FakeCatalog::default());
    let engine = EngineHandle::with_source(source.clone(), CacheSettings::default()).unwrap();

    engine.discover(request(2));
    wait_for_event(&engine);
    engine.discover(request(2));
    match wait_for_event(&engine) {
        EngineEvent::PageLoaded { result, .. } => assert_eq!(result.unwrap().page, 2),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(source.discover_calls.load(Ordering::SeqCst), 1);

    engine.discover(request(3));
    wait_for_event(&engine);
    assert_eq!(source.discover_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn expired_cache_refetches() {
    let source = Arc::new(FakeCatalog::default());
    let cache = CacheSettings {
        max_age: Duration::ZERO,
        capacity: 8,
    };
    let engine = EngineHandle::with_source(source.clone(), cache).unwrap();

    engine.discover(request(1));
    wait_for_event(&engine);
    engine.discover(request(1));
    wait_for_event(&engine);
    assert_eq!(source.discover_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn details_tolerate_failed_side_requests() {
    let source = Arc::new(FakeCatalog::default());
    let engine = EngineHandle::with_source(source.clone(), CacheSettings::default()).unwrap();

    engine.details(603);
    engine.details(603);
    match wait_for_event(&engine) {
        EngineEvent::DetailLoaded { movie_id, result } => {
            let detail = result.unwrap();
            assert_eq!(movie_id, 603);
            assert_eq!(detail.movie.title, "Movie 603");
            assert_eq!(detail.credits, Some(Credits::default()));
            assert_eq!(detail.images, None);
            assert_eq!(detail.similar.len(), 2);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(source.movie_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_pages_are_not_cached() {
    let source = Arc::new(FakeCatalog {
        fail_discover: true,
        ..FakeCatalog::default()
    });
    let engine = EngineHandle::with_source(source.clone(), CacheSettings::default()).unwrap();

    engine.discover(request(4));
    match wait_for_event(&engine) {
        EngineEvent::PageLoaded { result, .. } => {
            assert_eq!(result.unwrap_err().kind, FailureKind::Timeout)
        }
        other => panic!("unexpected event {other:?}"),
    }
    engine.discover(request(4));
    wait_for_event(&engine);
    assert_eq!(source.discover_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn details_without_similar_titles_still_load() {
    let source = Arc::new(FakeCatalog {
        fail_similar: true,
        ..FakeCatalog::default()
    });
    let engine = EngineHandle::with_source(source, CacheSettings::default()).unwrap();

    engine.details(604);
    match wait_for_event(&engine) {
        EngineEvent::DetailLoaded { result, .. } => {
            let detail = result.unwrap();
            assert_eq!(detail.movie.id, 604);
            assert!(detail.similar.is_empty());
            assert_eq!(detail.credits, Some(Credits::default()));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
