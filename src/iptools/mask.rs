// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{check_prefix, strings::*, validate::parse_ipv4, SubnetError, OCTET_BITS};
use std::net::Ipv4Addr;
use tracing::{debug, trace};

/// Every octet value a contiguous mask can contain, with its bit count.
#[rustfmt::skip]
const MASK_OCTET_BITS: [(u8, u8); 9] = [
    (255, 8), (254, 7), (252, 6), (248, 5),
    (240, 4), (224, 3), (192, 2), (128, 1),
    (0, 0),
];

/**
Derive the subnet mask for `prefix`, one octet at a time.

Octet `i` gets `prefix - 8*i` leading one-bits, limited to `0..=8`.
Prefixes above 32 are a caller error and are returned as such.
*/
pub fn mask_octets(prefix: u8) -> Result<[u8; 4], SubnetError> {
    let prefix: u8 = check_prefix(prefix)?;
    let mut octets: [u8; 4] = [0; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let bits: u8 = prefix.saturating_sub(OCTET_BITS * i as u8).min(OCTET_BITS);
        *octet = ((0xFFu16 << (OCTET_BITS - bits)) & 0xFF) as u8;
    }
    Ok(octets)
}

/// Subnet mask for `prefix` as an address.
pub fn subnet_mask(prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    mask_octets(prefix).map(Ipv4Addr::from)
}

/// Dotted-decimal subnet mask for `prefix`, e.g. `/24` -> `255.255.255.0`.
/// Out-of-range prefixes yield [INVALID].
pub fn mask_from_prefix(prefix: u8) -> String {
    match subnet_mask(prefix) {
        Ok(mask) => mask.to_string(),
        Err(_) => INVALID.to_string(),
    }
}

/// Dotted-decimal wildcard (inverted) mask for `prefix`, e.g. `/24` -> `0.0.0.255`.
pub fn wildcard_from_prefix(prefix: u8) -> String {
    match subnet_mask(prefix) {
        Ok(mask) => Ipv4Addr::from(!u32::from(mask)).to_string(),
        Err(_) => INVALID.to_string(),
    }
}

/* ---------------------------------- */

/**
Count the network bits of a dotted-decimal mask, octet by octet.

Each octet must be one of the nine values a contiguous mask can hold.
Note that the octets are not checked against each other, so a mask like
`255.0.255.0` is counted as `/16`. See [mask_to_prefix_strict] for a
version which rejects that.
*/
pub fn mask_to_prefix(mask: &str) -> Result<u8, SubnetError> {
    let addr: Ipv4Addr = parse_ipv4(mask)?;
    let mut prefix: u8 = 0;
    for octet in addr.octets() {
        match MASK_OCTET_BITS.iter().find(|(value, _)| *value == octet) {
            Some((_, bits)) => prefix += bits,
            None => {
                debug!("mask '{mask}': octet {octet} is not a mask octet");
                return Err(SubnetError::InvalidMask(mask.to_string()));
            }
        }
    }
    trace!("mask '{mask}' -> /{prefix}");
    Ok(prefix)
}

/// Like [mask_to_prefix], but the whole 32-bit mask must be contiguous.
pub fn mask_to_prefix_strict(mask: &str) -> Result<u8, SubnetError> {
    let addr: Ipv4Addr = parse_ipv4(mask)?;
    ipnet::ipv4_mask_to_prefix(addr).map_err(|_| {
        debug!("mask '{mask}' is not contiguous");
        SubnetError::InvalidMask(mask.to_string())
    })
}

/// CIDR prefix of a dotted-decimal mask, or `None`. Per-octet check only.
pub fn cidr_from_mask(mask: &str) -> Option<u8> {
    mask_to_prefix(mask).ok()
}

/// CIDR prefix of a dotted-decimal mask, or `None` unless fully contiguous.
pub fn cidr_from_mask_strict(mask: &str) -> Option<u8> {
    mask_to_prefix_strict(mask).ok()
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iptools::IPV4_BITS;

    #[rustfmt::skip]
    #[test]
    fn test_mask_from_prefix() {
        let tests: Vec<(u8, &str)> = vec![
            (0,  "0.0.0.0"),
            (1,  "128.0.0.0"),
            (7,  "254.0.0.0"),
            (8,  "255.0.0.0"),
            (12, "255.240.0.0"),
            (16, "255.255.0.0"),
            (23, "255.255.254.0"),
            (24, "255.255.255.0"),
            (26, "255.255.255.192"),
            (30, "255.255.255.252"),
            (31, "255.255.255.254"),
            (32, "255.255.255.255"),
        ];

        for (prefix, expected) in tests {
            assert_eq!(mask_from_prefix(prefix), expected, "Failed: /{prefix}");
        }
    }

    #[test]
    fn test_mask_out_of_range() {
        assert_eq!(mask_octets(33), Err(SubnetError::InvalidPrefix(33)));
        assert_eq!(mask_from_prefix(33), INVALID);
        assert_eq!(wildcard_from_prefix(64), INVALID);
    }

    #[test]
    fn test_mask_shape() {
        for p in 0..=IPV4_BITS {
            let octets: [u8; 4] = mask_octets(p).unwrap();
            // non-increasing, each octet a left-aligned run of ones
            assert!(octets.windows(2).all(|w| w[0] >= w[1]), "/{p}: {octets:?}");
            for o in octets {
                assert_eq!(o.leading_ones() + o.trailing_zeros(), 8, "/{p}: {o}");
            }
            assert_eq!(u32::from(subnet_mask(p).unwrap()).count_ones(), p as u32);
        }
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(wildcard_from_prefix(24), "0.0.0.255");
        assert_eq!(wildcard_from_prefix(0), "255.255.255.255");
        assert_eq!(wildcard_from_prefix(32), "0.0.0.0");
        assert_eq!(wildcard_from_prefix(20), "0.0.15.255");
    }

    #[test]
    fn test_cidr_from_mask() {
        assert_eq!(cidr_from_mask("255.255.255.0"), Some(24));
        assert_eq!(cidr_from_mask("255.255.240.0"), Some(20));
        assert_eq!(cidr_from_mask("0.0.0.0"), Some(0));
        assert_eq!(cidr_from_mask("255.255.255.255"), Some(32));
        assert_eq!(cidr_from_mask("255.255.255.1"), None);
        assert_eq!(cidr_from_mask("255.255.255"), None);
        assert_eq!(cidr_from_mask("255.255.255.00"), None);
    }

    #[test]
    fn test_prefix_mask_round_trip() {
        for p in 0..=IPV4_BITS {
            let mask: String = mask_from_prefix(p);
            assert_eq!(cidr_from_mask(&mask), Some(p), "lenient: {mask}");
            assert_eq!(cidr_from_mask_strict(&mask), Some(p), "strict: {mask}");
        }
    }

    /// Known gap: octets are validated one by one, not as a whole mask.
    #[test]
    fn test_noncontiguous_mask_accepted() {
        assert_eq!(cidr_from_mask("255.0.255.0"), Some(16));
        assert_eq!(cidr_from_mask("0.0.0.255"), Some(8));
        assert_eq!(cidr_from_mask("128.255.0.0"), Some(9));
    }

    #[test]
    fn test_noncontiguous_mask_strict() {
        assert_eq!(cidr_from_mask_strict("255.0.255.0"), None);
        assert_eq!(cidr_from_mask_strict("0.0.0.255"), None);
        assert_eq!(
            mask_to_prefix_strict("255.255.255.1"),
            Err(SubnetError::InvalidMask("255.255.255.1".into()))
        );
        assert_eq!(
            mask_to_prefix_strict("1.2.3"),
            Err(SubnetError::InvalidAddress("1.2.3".into()))
        );
    }
}
