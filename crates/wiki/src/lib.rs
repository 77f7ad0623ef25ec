//! Fetch article excerpts from a MediaWiki action API.
//!
//! ```no_run
//! let url = wiki::request::build(wiki::request::DEFAULT_BASE_URL, "Rust", "en")?;
//! let client = wiki::client::Client::new(&Default::default())?;
//! let page = client.page(&url)?;
//! println!("{}", page.content);
//! # Ok::<(), wiki::WikiError>(())
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod request;
pub mod response;

pub use client::{Client, ClientOptions};
pub use error::{ErrorKind, WikiError};
pub use models::{Page, Redirect};
