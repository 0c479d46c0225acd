//! URL utility functions for reading query parameters

use std::collections::HashMap;

use web_sys::window;

/// Parse a raw query string (with or without the leading `?`) into a map.
///
/// Values are percent-decoded. A key without `=` maps to an empty string; the
/// last occurrence of a repeated key wins.
pub fn parse_query_string(search: &str) -> HashMap<String, String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            (key.to_string(), decoded)
        })
        .collect()
}

/// Query parameters of the current page, empty outside a browser.
pub fn get_query_params() -> HashMap<String, String> {
    window()
        .and_then(|w| w.location().search().ok())
        .map(|search| parse_query_string(&search))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_string() {
        let params = parse_query_string("?wallet=mock&collection=https%3A%2F%2Fexample.org%2Fpoaps.json");
        assert_eq!(params.get("wallet").map(String::as_str), Some("mock"));
        assert_eq!(
            params.get("collection").map(String::as_str),
            Some("https://example.org/poaps.json")
        );
    }

    #[test]
    fn test_parse_query_string_edge_cases() {
        assert!(parse_query_string("").is_empty());
        assert!(parse_query_string("?").is_empty());

        let params = parse_query_string("flag&provider=pera&provider=defly");
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
        assert_eq!(params.get("provider").map(String::as_str), Some("defly"));
    }
}
