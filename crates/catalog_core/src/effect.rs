use crate::FetchKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write a value back to the external parameter store.
    SetParam { name: String, value: String },
    /// Bring the viewport back to the top of the listing.
    ScrollToTop,
    /// Ask the fetch collaborator for one page of results.
    FetchPage(FetchKey),
}
