//! Stateless "is this string of kind K" checks.
//!
//! Character classes are ASCII-only; an empty string passes every class
//! check except [`is_required`].

use regex::Regex;

macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<Regex> =
            once_cell::sync::Lazy::new(|| Regex::new($pat).unwrap());
        &*RE
    }};
}

pub fn is_required(s: &str) -> bool {
    !s.is_empty()
}

pub fn is_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

pub fn is_numeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_alphanumeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Letters, digits and underscore; at least one character.
pub fn is_alphadash(s: &str) -> bool {
    regex!(r"^[0-9A-Za-z_]+$").is_match(s)
}

pub fn is_float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

pub fn is_integer(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}

pub fn is_email(s: &str) -> bool {
    regex!(
        r"^[0-9A-Za-z_!\#$%\&'*+/=?^`{|}\~\-]+(?:\.[0-9A-Za-z_!\#$%\&'*+/=?^`{|}\~\-]+)*@(?:[0-9A-Za-z_](?:[0-9A-Za-z_\-]*[0-9A-Za-z_])?\.)+[0-9A-Za-z](?:[0-9A-Za-z_\-]*[0-9A-Za-z_])?$"
    )
    .is_match(s)
}

pub fn is_ipv4(s: &str) -> bool {
    regex!(r"^((2[0-4][0-9]|25[0-5]|[01]?[0-9][0-9]?)\.){3}(2[0-4][0-9]|25[0-5]|[01]?[0-9][0-9]?)$")
        .is_match(s)
}

/// Mainland China mobile number, optional `+86` / `86` prefix.
pub fn is_mobile(s: &str) -> bool {
    regex!(r"^((\+86)|(86))?(1(([35][0-9])|[8][0-9]|[7][056789]|[4][579]|99))[0-9]{8}$").is_match(s)
}

/// Looser mobile check: any `13`-`19` prefix followed by nine digits.
pub fn is_mobile2(s: &str) -> bool {
    regex!(r"^((\+86)|(86))?1[3-9][0-9]{9}$").is_match(s)
}

/// Landline: optional area code (`0` + 2-3 digits, optional dash), then 7-8 digits.
pub fn is_tel(s: &str) -> bool {
    regex!(r"^(0[0-9]{2,3}(\-)?)?[0-9]{7,8}$").is_match(s)
}

pub fn is_phone(s: &str) -> bool {
    is_mobile(s) || is_tel(s)
}

/// 15-digit or 18-character resident ID (last may be `X`).
pub fn is_idcard(s: &str) -> bool {
    regex!(r"(^[0-9]{15}$)|(^[0-9]{17}([0-9X])$)").is_match(s)
}
