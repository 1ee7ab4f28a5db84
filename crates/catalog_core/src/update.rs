use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

use crate::params::PAGE_PARAM;
use crate::{Effect, FetchStatus, Msg, PageWindowController};

/// Pure update function: applies a message to the controller and returns any effects.
pub fn update(mut state: PageWindowController, msg: Msg) -> (PageWindowController, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => fetch_current(&mut state),
        Msg::PageParamChanged(raw) => {
            let before = state.current_page();
            state.set_raw_page_param(raw);
            if state.current_page() != before {
                fetch_current(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::PageRequested(target) => request_page(&mut state, target),
        Msg::PreviousClicked => {
            let target = i64::from(state.current_page()) - 1;
            request_page(&mut state, target)
        }
        Msg::NextClicked => {
            let target = i64::from(state.current_page()) + 1;
            request_page(&mut state, target)
        }
        Msg::FirstClicked => request_page(&mut state, 1),
        Msg::LastClicked => match state.total_pages() {
            Some(total) => request_page(&mut state, i64::from(total)),
            None => Vec::new(),
        },
        Msg::PageJumpEntered(text) => match text.trim().parse::<i64>() {
            Ok(target) => request_page(&mut state, target),
            Err(_) => {
                catalog_debug!("Ignoring page jump input {:?}", text);
                Vec::new()
            }
        },
        Msg::FetchSucceeded {
            key,
            total_results,
            items,
        } => {
            if key == state.fetch_key() {
                state.apply_success(total_results, items);
            } else {
                catalog_debug!("Discarding stale result for {}", key);
            }
            Vec::new()
        }
        Msg::FetchFailed { key, reason } => {
            if key == state.fetch_key() {
                catalog_warn!("Fetch failed for {}: {}", key, reason);
                state.apply_failure(key, reason);
            } else {
                catalog_debug!("Discarding stale failure for {}", key);
            }
            Vec::new()
        }
        Msg::RetryClicked => fetch_current(&mut state),
    };

    (state, effects)
}

/// requestPage: validate, write the parameter back, scroll, then fetch.
fn request_page(state: &mut PageWindowController, target: i64) -> Vec<Effect> {
    let Some(page) = state.accepts(target) else {
        catalog_debug!(
            "Rejected page {} (total pages {:?})",
            target,
            state.total_pages()
        );
        return Vec::new();
    };
    if page == state.current_page() {
        return Vec::new();
    }

    catalog_info!("Page change {} -> {}", state.current_page(), page);
    let value = page.to_string();
    state.set_raw_page_param(Some(value.clone()));
    let key = state.fetch_key();
    state.mark_pending(key.clone());
    vec![
        Effect::SetParam {
            name: PAGE_PARAM.to_string(),
            value,
        },
        Effect::ScrollToTop,
        Effect::FetchPage(key),
    ]
}

fn fetch_current(state: &mut PageWindowController) -> Vec<Effect> {
    let key = state.fetch_key();
    if state.status() == &FetchStatus::Pending(key.clone()) {
        return Vec::new();
    }
    state.mark_pending(key.clone());
    vec![Effect::FetchPage(key)]
}
