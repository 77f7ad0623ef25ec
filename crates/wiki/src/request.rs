use std::collections::BTreeMap;
use std::fmt;

use url::{form_urlencoded, ParseError, Url};

use crate::error::WikiError;

pub const LANGUAGE_PLACEHOLDER: &str = "%s";
pub const DEFAULT_BASE_URL: &str = "https://%s.wikipedia.org/w/api.php";

/// Parameters every extract query carries. An empty value encodes as a bare flag.
const FIXED_PARAMS: &[(&str, &str)] = &[
    ("action", "query"),
    ("prop", "extracts|info"),
    ("format", "json"),
    ("exintro", ""),
    ("explaintext", ""),
    ("inprop", "url"),
    ("redirects", ""),
    ("converttitles", ""),
];

/// A fully encoded API URL, as text.
///
/// Kept as a string rather than a [`Url`] so that scheme-less templates such as
/// `example.com` round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the query URL for a single title.
///
/// `language` replaces the first `%s` in `base_template`; a template without a
/// placeholder is used as-is. Existing query parameters survive, the fixed set
/// overrides them, and keys come out sorted.
pub fn build(base_template: &str, query: &str, language: &str) -> Result<ApiUrl, WikiError> {
    let base = if base_template.contains(LANGUAGE_PLACEHOLDER) {
        base_template.replacen(LANGUAGE_PLACEHOLDER, language, 1)
    } else {
        base_template.to_owned()
    };
    validate_base(&base)?;

    let (without_fragment, fragment) = match base.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (base.as_str(), None),
    };
    let (root, existing) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    // Repeated keys keep every value in their original order.
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(existing.as_bytes()).into_owned() {
        params.entry(key).or_default().push(value);
    }
    for (key, value) in FIXED_PARAMS {
        params.insert((*key).to_owned(), vec![(*value).to_owned()]);
    }
    params.insert("titles".to_owned(), vec![query.to_owned()]);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in &params {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    let encoded = serializer.finish();

    let mut out = format!("{root}?{encoded}");
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }

    log::debug!("built request url {out}");
    Ok(ApiUrl(out))
}

fn validate_base(candidate: &str) -> Result<(), WikiError> {
    if candidate.trim().is_empty() {
        return Err(WikiError::invalid_url(candidate, "empty URL"));
    }
    if candidate.chars().any(char::is_control) {
        return Err(WikiError::invalid_url(candidate, "contains control characters"));
    }

    match Url::parse(candidate) {
        Ok(_) => Ok(()),
        // Scheme-less bases are legal references; check them as relative to a dummy root.
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse("http://relative.invalid/")
            .and_then(|root| root.join(candidate))
            .map(|_| ())
            .map_err(|err| WikiError::invalid_url(candidate, err)),
        Err(err) => Err(WikiError::invalid_url(candidate, err)),
    }
}
