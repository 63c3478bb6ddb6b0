//! Cottage Scout: a client for a remote lake-cottage suggestion API.
//! Criteria come in through a CLI form, one HTTP GET goes out, and the
//! results come back as rendered HTML cards.

pub mod client;
pub mod form;
pub mod models;
pub mod render;
