use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A normalized article lookup result.
///
/// An empty `content` means the wiki has no such page; `url` still points at
/// where the page would live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub language: String,
    pub url: String,
    pub redirect: Option<Redirect>,
}

/// One redirect hop reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub batchcomplete: Option<String>,
    #[serde(default)]
    pub query: Option<Query>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub redirects: Vec<Redirect>,
    /// Keyed by stringified page id; missing titles come back under a negative id.
    #[serde(default)]
    pub pages: BTreeMap<String, RawPage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPage {
    pub pageid: i64,
    pub ns: i64,
    pub title: String,
    pub extract: String,
    pub contentmodel: String,
    pub pagelanguage: String,
    pub touched: String,
    pub fullurl: String,
    pub canonicalurl: String,
}
