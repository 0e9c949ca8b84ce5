// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::strings::*;
use serde::Serialize;
use tracing::trace;

const ZERO_OCTET: &str = "00000000";

/// The four `.`-separated components of an address, as written.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Octets {
    pub first: String,
    pub second: String,
    pub third: String,
    pub fourth: String,
}

/// Split `ip` into exactly four parts, or nothing.
fn four_parts(ip: &str) -> Option<[&str; 4]> {
    if !ip.contains(DOT) {
        return None;
    }
    let parts: Vec<&str> = ip.split(DOT).collect();
    match parts.as_slice() {
        [a, b, c, d] => Some([*a, *b, *c, *d]),
        _ => {
            trace!("'{ip}' has {} parts, not 4", parts.len());
            None
        }
    }
}

/**
Decompose `ip` into its four components without validating them.

Returns `None` if `ip` is empty, has no `.` at all, or does not split
into exactly four parts. Component text is passed through verbatim.
*/
pub fn octets_of(ip: &str) -> Option<Octets> {
    let [first, second, third, fourth] = four_parts(ip)?;
    Some(Octets {
        first: first.to_string(),
        second: second.to_string(),
        third: third.to_string(),
        fourth: fourth.to_string(),
    })
}

/**
Render each of the four components of `ip` as 8 binary digits, MSB first.

This is deliberately more lenient than [super::is_valid_ipv4]: only the
4-part shape is required. Each component is read as a loose numeric
literal, so `1e2`, `0x1F`, `0o17`, `0b11`, ` 7 `
and `+5` all count. A component that does not denote an integer in
`0..=255` renders as `00000000` instead of failing the whole address.
*/
pub fn binary_octets_of(ip: &str) -> Option<[String; 4]> {
    let parts: [&str; 4] = four_parts(ip)?;
    Some(parts.map(binary_octet))
}

fn binary_octet(part: &str) -> String {
    match lenient_octet(part) {
        Some(num) => format!("{num:08b}"),
        None => ZERO_OCTET.to_string(),
    }
}

/**
Value of a loosely written numeric component, if it is an integer in `0..=255`.

Accepted forms, after trimming whitespace:
- empty text, read as `0`
- `0x`/`0o`/`0b` prefixed integers (either case, no sign)
- decimal with optional sign, fraction and exponent (`12`, `+5`, `1e2`, `2.5e1`)

Fractions such as `5e-1` and non-finite values yield `None`.
*/
fn lenient_octet(part: &str) -> Option<u8> {
    let s: &str = part.trim();
    if s.is_empty() {
        return Some(0);
    }

    let radix: Option<(u32, &str)> = match s.get(..2).map(|p| p.to_ascii_lowercase()) {
        Some(p) if p == "0x" => Some((16, &s[2..])),
        Some(p) if p == "0o" => Some((8, &s[2..])),
        Some(p) if p == "0b" => Some((2, &s[2..])),
        _ => None,
    };
    if let Some((radix, digits)) = radix {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        let num: u32 = u32::from_str_radix(digits, radix).ok()?;
        return u8::try_from(num).ok();
    }

    // plain decimal only; rules out the "inf"/"nan" spellings f64 parsing knows
    if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return None;
    }
    let num: f64 = s.parse::<f64>().ok()?;
    if num.fract() != 0.0 || !(0.0..=u8::MAX as f64).contains(&num) {
        trace!("component '{part}' is not an octet value");
        return None;
    }
    Some(num as u8)
}

/* -------------------------------------------------------------------------- */
