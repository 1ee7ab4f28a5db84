use std::collections::HashSet;
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use catalog_logging::{catalog_debug, catalog_error, catalog_info, catalog_warn};
use futures_util::future::join4;

use crate::cache::{page_cache, CacheSettings, PageCache};
use crate::fetch::{CatalogSource, FetchSettings, ReqwestCatalog};
use crate::{DiscoverRequest, EngineError, EngineEvent, FetchError, MovieDetail, MovieId};

enum EngineCommand {
    Discover(DiscoverRequest),
    Details(MovieId),
}

/// In-flight bookkeeping shared between the command loop and the spawned fetches.
struct Shared {
    pages_in_flight: HashSet<DiscoverRequest>,
    details_in_flight: HashSet<MovieId>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs catalog requests on a background runtime.
///
/// At most one request per key is in flight; a second request for the same
/// key is absorbed and both callers see the single result event. Successful
/// pages are served from cache until they expire.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, cache: CacheSettings) -> Result<Self, EngineError> {
        let source = ReqwestCatalog::new(settings)?;
        Self::with_source(Arc::new(source), cache)
    }

    pub fn with_source(
        source: Arc<dyn CatalogSource>,
        cache: CacheSettings,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;
        let pages = page_cache(cache);
        let shared = Arc::new(Mutex::new(Shared {
            pages_in_flight: HashSet::new(),
            details_in_flight: HashSet::new(),
        }));

        thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    dispatch(&runtime, &source, &pages, &shared, command, &event_tx);
                }
                catalog_info!("Engine command channel closed");
            })
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn discover(&self, request: DiscoverRequest) {
        let page = request.page;
        if self.cmd_tx.send(EngineCommand::Discover(request)).is_err() {
            catalog_error!("Engine is gone, dropping discover page {}", page);
        }
    }

    pub fn details(&self, movie_id: MovieId) {
        if self.cmd_tx.send(EngineCommand::Details(movie_id)).is_err() {
            catalog_error!("Engine is gone, dropping details for {}", movie_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        lock(&self.event_rx).try_recv().ok()
    }
}

fn dispatch(
    runtime: &tokio::runtime::Runtime,
    source: &Arc<dyn CatalogSource>,
    pages: &PageCache,
    shared: &Arc<Mutex<Shared>>,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Discover(request) => {
            if let Some(cached) = pages.get(&request) {
                catalog_debug!("Cache hit for page {}", request.page);
                let _ = event_tx.send(EngineEvent::PageLoaded {
                    request,
                    result: Ok(cached),
                });
                return;
            }
            if !lock(shared).pages_in_flight.insert(request.clone()) {
                catalog_debug!("Page {} already in flight", request.page);
                return;
            }
            let source = source.clone();
            let pages = pages.clone();
            let shared = shared.clone();
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = source.discover(&request).await;
                if let Ok(page) = &result {
                    pages.insert(request.clone(), page.clone());
                }
                lock(&shared).pages_in_flight.remove(&request);
                if let Err(err) = &result {
                    catalog_warn!("Discover page {} failed: {}", request.page, err);
                }
                let _ = event_tx.send(EngineEvent::PageLoaded { request, result });
            });
        }
        EngineCommand::Details(movie_id) => {
            if !lock(shared).details_in_flight.insert(movie_id) {
                catalog_debug!("Details for {} already in flight", movie_id);
                return;
            }
            let source = source.clone();
            let shared = shared.clone();
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = load_detail(source.as_ref(), movie_id).await;
                lock(&shared).details_in_flight.remove(&movie_id);
                let _ = event_tx.send(EngineEvent::DetailLoaded { movie_id, result });
            });
        }
    }
}

async fn load_detail(source: &dyn CatalogSource, id: MovieId) -> Result<MovieDetail, FetchError> {
    let (movie, credits, images, similar) = join4(
        source.movie(id),
        source.credits(id),
        source.images(id),
        source.similar(id),
    )
    .await;
    let movie = movie?;
    if let Err(err) = &credits {
        catalog_warn!("Credits for {} failed: {}", id, err);
    }
    if let Err(err) = &images {
        catalog_warn!("Images for {} failed: {}", id, err);
    }
    if let Err(err) = &similar {
        catalog_warn!("Similar titles for {} failed: {}", id, err);
    }
    Ok(MovieDetail {
        movie,
        credits: credits.ok(),
        images: images.ok(),
        similar: similar.map(|page| page.results).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_after_engine_shutdown_are_dropped() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        };

        engine.discover(DiscoverRequest::new(Vec::new(), 1));
        engine.details(603);
        assert_eq!(engine.try_recv(), None);
    }
}
