// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 subnet arithmetic: validation, octet decomposition, masks,
//! network/broadcast/host derivation and historical address classes.

mod class;
mod mask;
mod octets;
mod options;
mod report;
mod strings;
mod subnet;
mod validate;

use std::{error, fmt, net::Ipv4Addr};
use strings::*;

pub use class::*;
pub use mask::*;
pub use octets::*;
pub use options::{HostCarry, Options};
pub use report::{parse_cidr_notation, SubnetReport};
pub use strings::{INVALID, INVALID_IP};
pub use subnet::*;
pub use validate::{is_valid_ipv4, parse_ipv4};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const OCTET_BITS: u8 = 8;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubnetError {
    /// text is not a canonical dotted-decimal IPv4 address
    InvalidAddress(String),
    /// prefix outside `0..=32`
    InvalidPrefix(u8),
    /// mask is not made of contiguous-mask octets
    InvalidMask(String),
    /// not of the form `a.b.c.d/n`
    InvalidNotation(String),
    HostOverflow(Ipv4Addr),
    HostUnderflow(Ipv4Addr),
}

impl fmt::Display for SubnetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubnetError::InvalidAddress(ip) => {
                write!(f, "{ERR_INVALID_IP}: '{ip}'")
            }
            SubnetError::InvalidPrefix(prefix) => {
                write!(f, "{ERR_PREFIX} {prefix}")
            }
            SubnetError::InvalidMask(mask) => {
                write!(f, "{ERR_MASK}: '{mask}'")
            }
            SubnetError::InvalidNotation(s) => {
                write!(f, "{ERR_CIDR_FMT}: '{s}'")
            }
            SubnetError::HostOverflow(ip) => {
                write!(f, "{ERR_OVERFLOW} {ip}")
            }
            SubnetError::HostUnderflow(ip) => {
                write!(f, "{ERR_UNDERFLOW} {ip}")
            }
        }
    }
}

impl error::Error for SubnetError {}

/// Reject prefixes the engine has no meaning for. Never clamps.
pub(crate) fn check_prefix(prefix: u8) -> Result<u8, SubnetError> {
    if prefix > IPV4_BITS {
        tracing::debug!("rejected prefix /{prefix}");
        return Err(SubnetError::InvalidPrefix(prefix));
    }
    Ok(prefix)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_prefix() {
        for p in 0..=IPV4_BITS {
            assert_eq!(check_prefix(p), Ok(p));
        }
        assert_eq!(check_prefix(33), Err(SubnetError::InvalidPrefix(33)));
        assert_eq!(check_prefix(u8::MAX), Err(SubnetError::InvalidPrefix(255)));
    }

    #[test]
    fn test_error_display() {
        let err = SubnetError::InvalidAddress("1.2.3".into());
        assert_eq!(err.to_string(), "invalid IPv4 address: '1.2.3'");
        let err = SubnetError::InvalidPrefix(40);
        assert_eq!(err.to_string(), "IPv4 prefix must be <= 32, got 40");
        let err = SubnetError::HostOverflow(Ipv4Addr::BROADCAST);
        assert_eq!(err.to_string(), "no address above 255.255.255.255");
    }
}
