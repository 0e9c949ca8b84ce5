// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use tracing::debug;

// One canonical decimal octet: 0..=255, no sign, no padding, no leading zeros.
lazy_static! {
    static ref OCTET: Regex =
        Regex::new(r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])$").expect("Invalid Regex?");
}

/**
Whether `text` is a dotted-decimal IPv4 address in canonical form.

Exactly four `.`-separated components are required, each of which must be
the decimal rendering of a value in `0..=255`. Anything else is rejected,
including empty components, whitespace, signs (`+5`) and leading zeros (`01`).
*/
pub fn is_valid_ipv4(text: &str) -> bool {
    parse_ipv4(text).is_ok()
}

/**
Parse a canonical dotted-decimal IPv4 address.

This is the gate used by every string-level operation in this crate: the
same rules as [is_valid_ipv4], but returning the parsed address.
*/
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let parts: Vec<&str> = text.split(DOT).collect();
    if parts.len() != 4 {
        debug!("rejected '{text}': {} components", parts.len());
        return Err(SubnetError::InvalidAddress(text.to_string()));
    }

    let mut octets: [u8; 4] = [0; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if !OCTET.is_match(part) {
            debug!("rejected '{text}': bad component '{part}'");
            return Err(SubnetError::InvalidAddress(text.to_string()));
        }
        *octet = part
            .parse::<u8>()
            .map_err(|_| SubnetError::InvalidAddress(text.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    #[test]
    fn test_is_valid_ipv4() {
        let tests: Vec<(&str, bool)> = vec![
            ("192.168.1.1",     true),
            ("0.0.0.0",         true),
            ("255.255.255.255", true),
            ("10.0.0.10",       true),
            ("192.168.01.1",    false),
            ("256.1.1.1",       false),
            ("1.2.3",           false),
            ("1.2.3.4.5",       false),
            ("1.2.3.4.",        false),
            ("",                false),
            ("...",             false),
            ("1..3.4",          false),
            (" 1.2.3.4",        false),
            ("1.2.3.4 ",        false),
            ("+1.2.3.4",        false),
            ("-1.2.3.4",        false),
            ("1.2.3.0x4",       false),
            ("1.2.3.1e2",       false),
            ("00.1.1.1",        false),
            ("1.2.3.999",       false),
            ("a.b.c.d",         false),
        ];

        for (input, expected) in tests {
            assert_eq!(is_valid_ipv4(input), expected, "Failed: '{input}'");
        }
    }

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(parse_ipv4("192.168.1.200"), Ok(Ipv4Addr::new(192, 168, 1, 200)));
        assert_eq!(parse_ipv4("0.0.0.0"), Ok(Ipv4Addr::UNSPECIFIED));
        assert_eq!(
            parse_ipv4("192.168.01.1"),
            Err(SubnetError::InvalidAddress("192.168.01.1".into()))
        );
    }

    #[test]
    fn test_every_octet_value_round_trips() {
        for n in 0..=255u8 {
            let ip: String = format!("{n}.{n}.{n}.{n}");
            assert_eq!(parse_ipv4(&ip), Ok(Ipv4Addr::new(n, n, n, n)));
        }
        for n in 256..1000u32 {
            assert!(!is_valid_ipv4(&format!("1.1.1.{n}")), "accepted {n}");
        }
    }
}
