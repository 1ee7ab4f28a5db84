//! Terminal front end for browsing the movie catalog.
pub mod platform;
