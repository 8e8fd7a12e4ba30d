//! Share Codec
//!
//! Round-trips the whole sheet state through a single `state` query
//! parameter: compact JSON with short keys, UTF-8, base64url without
//! padding. Decoding never fails loudly; every malformed input degrades to
//! `None` and the app falls back to defaults.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::Value;

use crate::models::PreviewOptions;

const SHARE_PARAM: &str = "state";

/// Characters percent-escaped inside a query component
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// The serialized sheet state.
///
/// Short keys keep the URL token compact: `t` theme id, `c` column labels,
/// `ec` classic-mode flag, `p` selected preset ids, `po` preview options.
/// On the decode side every field is optional; absent or mistyped fields
/// become `None` and are defaulted by the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po: Option<PreviewOptions>,
}

fn to_base64_url(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

fn from_base64_url(value: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(value.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Split an absolute URL into (pre-query part, query, fragment)
fn split_query(href: &str) -> Option<(&str, &str, &str)> {
    let head_end = href.find(['?', '#']).unwrap_or(href.len());
    let scheme = href.find("://")?;
    if scheme == 0 || scheme > head_end {
        return None;
    }

    let (head, fragment) = match href.find('#') {
        Some(index) => (&href[..index], &href[index..]),
        None => (href, ""),
    };

    match head.find('?') {
        Some(index) => Some((&head[..index], &head[index + 1..], fragment)),
        None => Some((head, "", fragment)),
    }
}

fn decode_component(component: &str) -> Option<String> {
    let unplussed = component.replace('+', " ");
    percent_decode_str(&unplussed)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

fn query_param(href: &str, name: &str) -> Option<String> {
    let (_, query, _) = split_query(href)?;

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key).as_deref() == Some(name) {
            return decode_component(value);
        }
    }

    None
}

/// Replace or append one query parameter, leaving all other parts verbatim
fn set_query_param(href: &str, name: &str, value: &str) -> String {
    let Some((base, query, fragment)) = split_query(href) else {
        return href.to_string();
    };

    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or(pair);
            !pair.is_empty() && decode_component(key).as_deref() != Some(name)
        })
        .map(str::to_string)
        .collect();

    pairs.push(format!(
        "{}={}",
        utf8_percent_encode(name, QUERY_ENCODE_SET),
        utf8_percent_encode(value, QUERY_ENCODE_SET)
    ));

    format!("{}?{}{}", base, pairs.join("&"), fragment)
}

/// Build a shareable URL carrying the encoded payload.
///
/// A pre-existing `state` parameter is overwritten; every other query
/// parameter and the fragment survive untouched.
pub fn create_share_url(current_href: &str, payload: &SharePayload) -> String {
    let json = serde_json::to_string(payload).expect("share payload serializes to JSON");
    set_query_param(current_href, SHARE_PARAM, &to_base64_url(&json))
}

fn string_entries(value: Option<&Value>) -> Option<Vec<String>> {
    let entries = value?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_owned))
            .collect(),
    )
}

fn preview_options_from(value: &Value) -> Option<PreviewOptions> {
    let object = value.as_object()?;
    let defaults = PreviewOptions::default();

    Some(PreviewOptions {
        show_date_line: object
            .get("showDateLine")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.show_date_line),
        show_letter_column: object
            .get("showLetterColumn")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.show_letter_column),
        show_letter_bar: object
            .get("showLetterBar")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.show_letter_bar),
    })
}

/// Extract and decode the shared state from a URL.
///
/// Missing parameter, malformed URL, bad base64, bad UTF-8 and non-object
/// JSON all yield `None`. Inside a valid object, fields are checked one by
/// one; list entries that are not strings are dropped.
pub fn read_share_state(current_href: &str) -> Option<SharePayload> {
    let raw_value = query_param(current_href, SHARE_PARAM)?;
    let json = from_base64_url(&raw_value)?;
    let value: Value = serde_json::from_str(&json).ok()?;
    let object = value.as_object()?;

    Some(SharePayload {
        t: object.get("t").and_then(Value::as_str).map(str::to_owned),
        c: string_entries(object.get("c")),
        ec: object.get("ec").and_then(Value::as_bool),
        p: string_entries(object.get("p")),
        po: object.get("po").and_then(preview_options_from),
    })
}
