//! Catalog core: pure state machines and view-model helpers.
mod effect;
mod filter;
pub mod format;
mod home;
mod msg;
pub mod pagination;
mod params;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{CatalogFilter, Category, FetchKey};
pub use home::{HomeFeed, HERO_LEN};
pub use msg::Msg;
pub use pagination::{PageWindow, RangeLabel, MAX_PAGES, PAGE_SIZE, WINDOW_SIZE};
pub use params::{ParamStore, QueryParams, PAGE_PARAM};
pub use state::{FetchStatus, MovieCard, PageWindowController};
pub use update::update;
pub use view_model::{HomeSectionView, HomeViewModel, PageViewModel};
