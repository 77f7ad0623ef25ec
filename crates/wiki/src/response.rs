use std::collections::BTreeMap;

use crate::{
    error::WikiError,
    models::{ApiResponse, Page, RawPage},
};

/// Parses an extract query response into a [`Page`].
///
/// Only the first redirect hop is kept. A response with no page entries yields
/// an empty page rather than an error.
pub fn parse(body: &[u8]) -> Result<Page, WikiError> {
    let response: ApiResponse = serde_json::from_slice(body)?;

    let Some(query) = response.query else {
        let reason = match response.error {
            Some(api) if !api.info.is_empty() => format!("API error {}: {}", api.code, api.info),
            _ => "missing query object".to_owned(),
        };
        return Err(WikiError::MalformedResponse(reason));
    };

    let Some(raw) = sole_page(query.pages) else {
        log::debug!("response has no page entries");
        return Ok(Page::default());
    };

    if query.redirects.len() > 1 {
        log::debug!(
            "redirect chain has {} hops, keeping the first",
            query.redirects.len()
        );
    }
    let redirect = query.redirects.into_iter().next();

    Ok(Page {
        id: raw.pageid,
        title: raw.title,
        content: raw.extract,
        language: raw.pagelanguage,
        url: decode_url(&raw.canonicalurl),
        redirect,
    })
}

/// First value of the page map. A single title is requested, so there is at most one.
fn sole_page(pages: BTreeMap<String, RawPage>) -> Option<RawPage> {
    if pages.len() > 1 {
        log::warn!(
            "expected one page entry, got {}; using the first",
            pages.len()
        );
    }
    pages.into_values().next()
}

/// Query-unescapes `raw` (`+` becomes a space), returning it untouched when it
/// is not valid encoding.
pub fn decode_url(raw: &str) -> String {
    if !has_valid_escapes(raw) {
        log::debug!("url has malformed escapes, keeping raw: {raw}");
        return raw.to_owned();
    }
    match urlencoding::decode(&raw.replace('+', " ")) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            log::debug!("url does not decode to UTF-8, keeping raw: {raw}");
            raw.to_owned()
        }
    }
}

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut idx = 0;
    while let Some(offset) = bytes[idx..].iter().position(|&b| b == b'%') {
        let at = idx + offset;
        match bytes.get(at + 1..at + 3) {
            Some(pair) if pair.iter().all(u8::is_ascii_hexdigit) => idx = at + 3,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_must_have_two_hex_digits() {
        assert!(has_valid_escapes("https://en.wikipedia.org/wiki/Caf%C3%A9"));
        assert!(has_valid_escapes("no escapes at all"));
        assert!(!has_valid_escapes("100%"));
        assert!(!has_valid_escapes("bad %zz escape"));
        assert!(!has_valid_escapes("short %4"));
    }

    #[test]
    fn plus_decodes_to_space_but_escaped_plus_survives() {
        assert_eq!(decode_url("C%2B%2B+tips"), "C++ tips");
    }

    #[test]
    fn invalid_utf8_falls_back_to_raw() {
        assert_eq!(decode_url("https://x.org/%FF%FE"), "https://x.org/%FF%FE");
    }
}
