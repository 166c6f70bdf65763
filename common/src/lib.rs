// portfolio logic
//
// everything here is independent of the browser so that it can be exercised by
// plain unit tests; the web app owns the DOM side and calls into these modules
pub mod animation;
pub mod config;
pub mod contact;
pub mod i18n;
pub mod preferences;
pub mod section;
pub mod tracker;
