use crate::pagination::{PageWindow, RangeLabel};
use crate::MovieCard;

/// Everything the view layer needs to draw one paged listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewModel {
    pub current_page: u32,
    /// 0 while unknown or for an empty catalog.
    pub total_pages: u32,
    pub page_count_label: String,
    pub window: PageWindow,
    pub range_label: RangeLabel,
    pub items: Vec<MovieCard>,
    pub total_results: u64,
    pub is_pending: bool,
    pub is_error: bool,
    pub is_empty: bool,
    pub show_pagination: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeSectionView {
    pub title: &'static str,
    pub slug: &'static str,
    pub items: Vec<MovieCard>,
    pub is_pending: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeViewModel {
    pub is_loading: bool,
    pub hero: Vec<MovieCard>,
    pub sections: Vec<HomeSectionView>,
}
