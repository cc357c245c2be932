//! Client for the iTunes catalog search and lookup API.
//!
//! [`Client`] builds GET requests against `https://itunes.apple.com/`,
//! encodes [`QueryArgs`] into the query string and decodes the JSON
//! [`Envelope`](types::Envelope) into schema-less [`Record`](types::Record)s.

mod client;
mod config;
mod errors;
mod query;
pub mod types;
pub use self::client::{default_http_client, Client};
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use self::errors::Error;
pub use self::query::{LookupQuery, Query, QueryArgs, QueryCommon, SearchQuery};
