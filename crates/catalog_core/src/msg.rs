#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The listing was shown; fetch whatever the current key points at.
    Mounted,
    /// The external `page` parameter changed (navigation, history, manual edit).
    PageParamChanged(Option<String>),
    /// A page link was clicked.
    PageRequested(i64),
    PreviousClicked,
    NextClicked,
    FirstClicked,
    LastClicked,
    /// Free-text page-jump input; text that is not a number is ignored.
    PageJumpEntered(String),
    /// The fetch collaborator returned a page.
    FetchSucceeded {
        key: crate::FetchKey,
        total_results: u64,
        items: Vec<crate::MovieCard>,
    },
    /// The fetch collaborator gave up on a page.
    FetchFailed { key: crate::FetchKey, reason: String },
    /// User asked to re-issue the failed fetch.
    RetryClicked,
}
