//! Client core for a remote movie list.
//!
//! # Overview
//! Fetches the movie collection from a REST API, keeps it in a local cache,
//! filters it by a search string, renders it into rows and performs
//! create / update / delete, re-fetching the whole list after every write.
//!
//! # Design
//! - `MovieApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).
//! - The host supplies a `Transport` for the round-trip and a `ListView` to
//!   show rendered output; `MovieListClient` ties them together.
//! - Edits are collected through `EditSession`, which the host steps one
//!   answer at a time.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod cache;
pub mod edit;
pub mod error;
pub mod filter;
pub mod form;
pub mod http;
pub mod list_client;
pub mod render;
pub mod types;

pub use api::MovieApi;
pub use cache::MovieCache;
pub use edit::{run_dialog, EditDialog, EditField, EditSession, EditStep};
pub use error::{ApiError, FailureKind};
pub use filter::filter_movies;
pub use form::{parse_year, MovieForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use list_client::MovieListClient;
pub use render::{render, ListDisplay, ListView, MovieRow, RowAction, NO_RESULTS};
pub use types::{Movie, MovieId, MovieUpdate, NewMovie};
