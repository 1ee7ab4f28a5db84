use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use catalog_core::{CatalogFilter, FetchKey, MovieCard};
use catalog_engine::{DiscoverRequest, EngineEvent, EngineHandle, Movie};
use catalog_logging::{catalog_info, catalog_warn};

use super::app::AppEvent;
use super::session::Request;

/// Hands session requests to the engine and feeds engine results back as [`AppEvent`]s.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn run(&self, requests: Vec<Request>) {
        for request in requests {
            match request {
                Request::Discover(key) => {
                    catalog_info!("FetchPage {}", key);
                    self.engine
                        .discover(DiscoverRequest::new(key.filter.pairs(), key.page));
                }
                Request::Details(movie_id) => {
                    catalog_info!("FetchDetails {}", movie_id);
                    self.engine.details(movie_id);
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if event_tx.send(map_event(event)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

pub fn map_event(event: EngineEvent) -> AppEvent {
    match event {
        EngineEvent::PageLoaded { request, result } => {
            let filter: CatalogFilter = request.filters.into_iter().collect();
            let key = FetchKey::new(filter, request.page);
            let result = match result {
                Ok(page) => Ok((
                    page.total_results,
                    page.results.iter().map(movie_card).collect(),
                )),
                Err(err) => {
                    catalog_warn!("Page {} failed: {}", key, err);
                    Err(err.kind.to_string())
                }
            };
            AppEvent::Page { key, result }
        }
        EngineEvent::DetailLoaded { movie_id, result } => AppEvent::Detail {
            movie_id,
            result: result.map(Box::new).map_err(|err| err.kind.to_string()),
        },
    }
}

pub fn movie_card(movie: &Movie) -> MovieCard {
    MovieCard {
        id: movie.id,
        title: movie.title.clone(),
        poster_path: movie.poster_path.clone(),
        backdrop_path: movie.backdrop_path.clone(),
        vote_average: movie.vote_average,
        release_date: movie.release_date.clone(),
    }
}
