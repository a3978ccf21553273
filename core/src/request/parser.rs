use crate::errors::FormError;
use crate::request::source::QueryValues;

/// Parses `application/x-www-form-urlencoded` text, keeping every value in
/// order. `+` decodes to a space; pairs without `=` get an empty value;
/// pairs that fail percent-decoding are dropped.
pub fn parse_query_string(query: &str) -> QueryValues {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

pub fn parse_form_body(data: &[u8]) -> Result<QueryValues, FormError> {
    let body_str = std::str::from_utf8(data).map_err(|e| FormError::Format {
        field: "body".to_string(),
        message: format!("Invalid UTF-8 in form body: {}", e),
    })?;

    Ok(parse_query_string(body_str))
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}
