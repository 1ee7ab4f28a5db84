use catalog_core::{
    update, Category, Effect, FetchKey, HomeFeed, HomeViewModel, MovieCard, Msg, PageViewModel,
    PageWindowController, ParamStore, PAGE_PARAM,
};
use catalog_engine::MovieDetail;
use catalog_logging::{catalog_debug, catalog_info};

use super::routes::Route;
use super::ui::commands::Command;

/// Outcome of a page fetch as the session sees it: total results and cards, or a reason.
pub type PageResult = Result<(u64, Vec<MovieCard>), String>;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading,
    Loaded(Box<MovieDetail>),
    Failed(String),
}

#[derive(Debug)]
enum Screen {
    Home(HomeFeed),
    Listing {
        category: Category,
        controller: PageWindowController,
    },
    Detail {
        movie_id: u64,
        status: DetailStatus,
    },
}

/// Work for the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Discover(FetchKey),
    Details(u64),
}

#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub requests: Vec<Request>,
    pub scroll_to_top: bool,
    pub show_help: bool,
    pub quit: bool,
    pub notice: Option<String>,
}

impl Outcome {
    fn notice(text: impl Into<String>) -> Self {
        Self {
            notice: Some(text.into()),
            ..Self::default()
        }
    }

    fn requests(requests: Vec<Request>) -> Self {
        Self {
            requests,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Home(HomeViewModel),
    Listing {
        title: &'static str,
        view: PageViewModel,
    },
    Detail {
        movie_id: u64,
        status: DetailStatus,
    },
}

/// The screen being shown, its route (the parameter store) and the back stack.
#[derive(Debug)]
pub struct Session {
    route: Route,
    screen: Screen,
    history: Vec<String>,
    today: String,
    dirty: bool,
}

impl Session {
    /// Opens `route`; `today` is an ISO date bounding the upcoming listings.
    pub fn open(today: impl Into<String>, route: &str) -> (Self, Vec<Request>) {
        let today = today.into();
        let mut session = Self {
            route: Route::Home,
            screen: Screen::Home(HomeFeed::new(&today)),
            history: Vec::new(),
            today,
            dirty: true,
        };
        let outcome = session.enter(Route::parse(route));
        (session, outcome.requests)
    }

    pub fn route_path(&self) -> String {
        self.route.to_path()
    }

    pub fn handle_command(&mut self, command: Command) -> Outcome {
        match command {
            Command::Next => self.dispatch(Msg::NextClicked),
            Command::Previous => self.dispatch(Msg::PreviousClicked),
            Command::First => self.dispatch(Msg::FirstClicked),
            Command::Last => self.dispatch(Msg::LastClicked),
            Command::Page(page) => self.dispatch(Msg::PageRequested(page)),
            Command::Jump(text) => self.dispatch(Msg::PageJumpEntered(text)),
            Command::Retry => self.retry(),
            Command::Open(id) => self.go(&format!("/movie/{id}")),
            Command::Go(route) => self.go(&route),
            Command::Back => match self.history.pop() {
                Some(previous) => self.enter(Route::parse(&previous)),
                None => Outcome::notice("Nothing to go back to."),
            },
            Command::Help => Outcome {
                show_help: true,
                ..Outcome::default()
            },
            Command::Quit => Outcome {
                quit: true,
                ..Outcome::default()
            },
            Command::Empty => Outcome::default(),
            Command::Unknown(text) => {
                Outcome::notice(format!("Unknown command {text:?}, h for help."))
            }
        }
    }

    pub fn apply_page(&mut self, key: FetchKey, result: PageResult) {
        if let Screen::Home(feed) = &mut self.screen {
            if !feed.apply(&key, result.map(|(_, items)| items)) {
                catalog_debug!("Home has no section for {}", key);
            }
            return;
        }
        if !matches!(self.screen, Screen::Listing { .. }) {
            catalog_debug!("Dropping page {} on detail screen", key);
            return;
        }
        let msg = match result {
            Ok((total_results, items)) => Msg::FetchSucceeded {
                key,
                total_results,
                items,
            },
            Err(reason) => Msg::FetchFailed { key, reason },
        };
        // Fetch results never produce effects.
        let _ = self.dispatch(msg);
    }

    pub fn apply_detail(&mut self, movie_id: u64, result: Result<Box<MovieDetail>, String>) {
        if let Screen::Detail {
            movie_id: shown,
            status,
        } = &mut self.screen
        {
            if *shown == movie_id {
                *status = match result {
                    Ok(detail) => DetailStatus::Loaded(detail),
                    Err(reason) => DetailStatus::Failed(reason),
                };
                self.dirty = true;
            }
        }
    }

    pub fn view(&self) -> ScreenView {
        match &self.screen {
            Screen::Home(feed) => ScreenView::Home(feed.view()),
            Screen::Listing {
                category,
                controller,
            } => ScreenView::Listing {
                title: category.title(),
                view: controller.view(),
            },
            Screen::Detail { movie_id, status } => ScreenView::Detail {
                movie_id: *movie_id,
                status: status.clone(),
            },
        }
    }

    /// Returns whether a redraw is due, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let screen_dirty = match &mut self.screen {
            Screen::Home(feed) => feed.consume_dirty(),
            Screen::Listing { controller, .. } => controller.consume_dirty(),
            Screen::Detail { .. } => false,
        };
        std::mem::take(&mut self.dirty) | screen_dirty
    }

    fn go(&mut self, raw: &str) -> Outcome {
        self.history.push(self.route.to_path());
        self.enter(Route::parse(raw))
    }

    fn enter(&mut self, route: Route) -> Outcome {
        catalog_info!("Entering {}", route.to_path());
        self.dirty = true;
        let same_listing = matches!(
            (&route, &self.screen),
            (Route::Listing { category, .. }, Screen::Listing { category: shown, .. })
                if category == shown
        );
        if same_listing {
            // Keep the controller so the known total still bounds page requests.
            let raw = route.page_param();
            self.route = route;
            return self.dispatch(Msg::PageParamChanged(raw));
        }
        self.route = route.clone();
        match route {
            Route::Home => {
                let feed = HomeFeed::new(&self.today);
                let requests = feed
                    .fetch_effects()
                    .into_iter()
                    .filter_map(|effect| match effect {
                        Effect::FetchPage(key) => Some(Request::Discover(key)),
                        _ => None,
                    })
                    .collect();
                self.screen = Screen::Home(feed);
                Outcome::requests(requests)
            }
            Route::Listing { category, params } => {
                let controller = PageWindowController::new(
                    category.filter(&self.today),
                    params.get_param(PAGE_PARAM),
                );
                self.screen = Screen::Listing {
                    category,
                    controller,
                };
                self.dispatch(Msg::Mounted)
            }
            Route::Movie(movie_id) => {
                self.screen = Screen::Detail {
                    movie_id,
                    status: DetailStatus::Loading,
                };
                Outcome::requests(vec![Request::Details(movie_id)])
            }
        }
    }

    fn retry(&mut self) -> Outcome {
        if matches!(self.screen, Screen::Listing { .. }) {
            return self.dispatch(Msg::RetryClicked);
        }
        match &mut self.screen {
            Screen::Home(feed) => {
                let requests = feed
                    .reload()
                    .into_iter()
                    .filter_map(|effect| match effect {
                        Effect::FetchPage(key) => Some(Request::Discover(key)),
                        _ => None,
                    })
                    .collect();
                Outcome::requests(requests)
            }
            Screen::Detail { movie_id, status } if matches!(status, DetailStatus::Failed(_)) => {
                *status = DetailStatus::Loading;
                self.dirty = true;
                Outcome::requests(vec![Request::Details(*movie_id)])
            }
            _ => Outcome::default(),
        }
    }

    /// Runs a message through the listing controller and carries out its effects.
    fn dispatch(&mut self, msg: Msg) -> Outcome {
        let effects = match &mut self.screen {
            Screen::Listing { controller, .. } => {
                let state = std::mem::take(controller);
                let (state, effects) = update(state, msg);
                *controller = state;
                effects
            }
            _ => return Outcome::notice("Paging is only available on listing pages."),
        };

        let mut outcome = Outcome::default();
        for effect in effects {
            match effect {
                Effect::SetParam { name, value } => {
                    if let Route::Listing { params, .. } = &mut self.route {
                        params.set_param(&name, &value);
                    }
                }
                Effect::ScrollToTop => outcome.scroll_to_top = true,
                Effect::FetchPage(key) => outcome.requests.push(Request::Discover(key)),
            }
        }
        outcome
    }
}
