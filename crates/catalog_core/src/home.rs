use catalog_logging::catalog_warn;

use crate::view_model::{HomeSectionView, HomeViewModel};
use crate::{Category, Effect, FetchKey, MovieCard};

/// Titles in the hero strip at the top of the home page.
pub const HERO_LEN: usize = 5;

/// Sections whose loading blocks the whole home page.
const BLOCKING: [Category; 3] = [Category::Popular, Category::TopRated, Category::Upcoming];

#[derive(Debug, Clone, PartialEq)]
enum SectionStatus {
    Pending,
    Loaded(Vec<MovieCard>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
struct HomeSection {
    category: Category,
    key: FetchKey,
    status: SectionStatus,
}

/// First page of every category, shown as carousels.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeFeed {
    sections: Vec<HomeSection>,
    dirty: bool,
}

impl HomeFeed {
    /// `today` bounds the upcoming section, see [`Category::filter`].
    pub fn new(today: &str) -> Self {
        let sections = Category::ALL
            .into_iter()
            .map(|category| HomeSection {
                category,
                key: FetchKey::new(category.filter(today), 1),
                status: SectionStatus::Pending,
            })
            .collect();
        Self {
            sections,
            dirty: true,
        }
    }

    /// One fetch per section.
    pub fn fetch_effects(&self) -> Vec<Effect> {
        self.sections
            .iter()
            .map(|section| Effect::FetchPage(section.key.clone()))
            .collect()
    }

    /// Puts every section back into the pending state and returns the fetches to issue.
    pub fn reload(&mut self) -> Vec<Effect> {
        for section in &mut self.sections {
            section.status = SectionStatus::Pending;
        }
        self.dirty = true;
        self.fetch_effects()
    }

    /// Applies a fetch outcome. Returns false when no section owns `key`.
    pub fn apply(&mut self, key: &FetchKey, result: Result<Vec<MovieCard>, String>) -> bool {
        let Some(section) = self.sections.iter_mut().find(|section| &section.key == key) else {
            return false;
        };
        section.status = match result {
            Ok(items) => SectionStatus::Loaded(items),
            Err(reason) => {
                catalog_warn!("Home section {} failed: {}", section.category.title(), reason);
                SectionStatus::Failed(reason)
            }
        };
        self.dirty = true;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.sections.iter().any(|section| {
            BLOCKING.contains(&section.category) && section.status == SectionStatus::Pending
        })
    }

    pub fn view(&self) -> HomeViewModel {
        let sections: Vec<HomeSectionView> = self
            .sections
            .iter()
            .map(|section| {
                let (items, is_pending, error_message) = match &section.status {
                    SectionStatus::Pending => (Vec::new(), true, None),
                    SectionStatus::Loaded(items) => (items.clone(), false, None),
                    SectionStatus::Failed(reason) => (Vec::new(), false, Some(reason.clone())),
                };
                HomeSectionView {
                    title: section.category.title(),
                    slug: section.category.slug(),
                    items,
                    is_pending,
                    error_message,
                }
            })
            .collect();
        let hero = sections
            .iter()
            .find(|section| section.slug == Category::Popular.slug())
            .map(|section| section.items.iter().take(HERO_LEN).cloned().collect())
            .unwrap_or_default();
        HomeViewModel {
            is_loading: self.is_loading(),
            hero,
            sections,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
