//! Result page identifiers: `<template>-<base36 millis>`.
//!
//! The token is timestamp derived, so two runs started at different
//! milliseconds get different ids. Collision resistant, not unique.

#[cfg(test)]
#[path = "result_id_test.rs"]
mod result_id_test;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lower-case base-36 rendering of `n`.
#[must_use]
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::with_capacity(13);
    while n > 0 {
        #[allow(clippy::cast_possible_truncation)]
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

#[must_use]
pub fn synthesize_result_id(template: &str, now_ms: u64) -> String {
    format!("{template}-{}", to_base36(now_ms))
}

/// Path of the detail page for a finished run, with the id percent-encoded.
#[must_use]
pub fn result_path(template: &str, now_ms: u64) -> String {
    let id = synthesize_result_id(template, now_ms);
    format!("/prototype/{}", urlencoding::encode(&id))
}
