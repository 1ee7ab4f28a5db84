use crate::pagination::{self, PageWindow, RangeLabel};
use crate::view_model::PageViewModel;
use crate::{CatalogFilter, FetchKey};

/// The slice of a catalog record a listing needs to draw a card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub release_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending(FetchKey),
    Failed { key: FetchKey, reason: String },
}

/// Values from the most recent successful fetch.
#[derive(Debug, Clone, PartialEq, Default)]
struct ResultSnapshot {
    total_results: u64,
    items: Vec<MovieCard>,
}

/// Paged listing controller.
///
/// All derived values (current page, total pages, window, range) are
/// recomputed from the raw page parameter and the last successful result.
/// A failed fetch never replaces that result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageWindowController {
    filter: CatalogFilter,
    raw_page_param: Option<String>,
    last_good: Option<ResultSnapshot>,
    status: FetchStatus,
    dirty: bool,
}

impl PageWindowController {
    pub fn new(filter: CatalogFilter, raw_page_param: Option<String>) -> Self {
        Self {
            filter,
            raw_page_param,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn raw_page_param(&self) -> Option<&str> {
        self.raw_page_param.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        pagination::parse_page_param(self.raw_page_param.as_deref())
    }

    /// `None` until a fetch has succeeded.
    pub fn total_pages(&self) -> Option<u32> {
        self.last_good
            .as_ref()
            .map(|snapshot| pagination::total_pages(snapshot.total_results))
    }

    pub fn total_results(&self) -> u64 {
        self.last_good
            .as_ref()
            .map_or(0, |snapshot| snapshot.total_results)
    }

    pub fn fetch_key(&self) -> FetchKey {
        FetchKey::new(self.filter.clone(), self.current_page())
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, FetchStatus::Pending(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, FetchStatus::Failed { .. })
    }

    /// Whether a page-change request for `target` should be honored.
    ///
    /// Targets below 1 are never valid; above the total only once the total
    /// is known.
    pub fn accepts(&self, target: i64) -> Option<u32> {
        let target = u32::try_from(target).ok().filter(|page| *page >= 1)?;
        match self.total_pages() {
            Some(total) if target > total => None,
            _ => Some(target),
        }
    }

    pub fn view(&self) -> PageViewModel {
        let current_page = self.current_page();
        let total_pages = self.total_pages().unwrap_or(0);
        let total_results = self.total_results();
        let items = self
            .last_good
            .as_ref()
            .map(|snapshot| snapshot.items.clone())
            .unwrap_or_default();
        let is_pending = self.is_pending();
        let is_error = self.is_error();
        let error_message = match &self.status {
            FetchStatus::Failed { reason, .. } => Some(reason.clone()),
            _ => None,
        };
        PageViewModel {
            current_page,
            total_pages,
            page_count_label: pagination::page_count_label(current_page, total_pages),
            window: PageWindow::new(current_page, total_pages),
            range_label: RangeLabel::compute(current_page, total_results),
            is_empty: !is_pending && !is_error && self.last_good.is_some() && items.is_empty(),
            items,
            total_results,
            is_pending,
            is_error,
            show_pagination: total_pages > 1,
            can_go_previous: current_page > 1,
            can_go_next: current_page < total_pages,
            error_message,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_raw_page_param(&mut self, raw: Option<String>) {
        if self.raw_page_param != raw {
            self.raw_page_param = raw;
            self.dirty = true;
        }
    }

    pub(crate) fn mark_pending(&mut self, key: FetchKey) {
        self.status = FetchStatus::Pending(key);
        self.dirty = true;
    }

    pub(crate) fn apply_success(&mut self, total_results: u64, items: Vec<MovieCard>) {
        self.last_good = Some(ResultSnapshot {
            total_results,
            items,
        });
        self.status = FetchStatus::Idle;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, key: FetchKey, reason: String) {
        self.status = FetchStatus::Failed { key, reason };
        self.dirty = true;
    }
}
