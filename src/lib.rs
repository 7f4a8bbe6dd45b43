//! Persisted form values and an asynchronous fetch lifecycle, with a
//! GraphQL pokemon lookup and a line-oriented front end.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod mvi;
pub mod pokemon;
pub mod storage;
pub mod ui;
