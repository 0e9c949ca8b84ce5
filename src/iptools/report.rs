// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    check_prefix,
    class::{class_of, AddressClass},
    mask::mask_from_prefix,
    options::Options,
    strings::*,
    subnet::*,
    validate::{is_valid_ipv4, parse_ipv4},
    SubnetError,
};
use serde::Serialize;
use std::{fmt, net::Ipv4Addr};
use tracing::debug;

/**
Everything a subnet calculator shows for one `ip/prefix` input.

Address fields hold either a dotted-decimal address or a sentinel:
[INVALID_IP] when `ip` itself is invalid, [INVALID] when a first/last
host could not be derived. The host counts depend on the prefix only.
*/
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SubnetReport {
    pub ip: String,
    pub prefix: u8,
    pub subnet_mask: String,
    pub network: String,
    pub broadcast: String,
    pub first_host: String,
    pub last_host: String,
    pub total_hosts: u64,
    pub usable_hosts: u64,
    pub class: Option<AddressClass>,
}

impl SubnetReport {
    /// Build the report. Fails only for a prefix outside `0..=32`.
    pub fn new(ip: &str, prefix: u8, opts: &Options) -> Result<Self, SubnetError> {
        let prefix: u8 = check_prefix(prefix)?;
        let total_hosts: u64 = total_host_count(prefix)?;
        let usable_hosts: u64 = usable_host_count(prefix)?;

        if !is_valid_ipv4(ip) {
            debug!("report for invalid address '{ip}'");
            return Ok(Self {
                ip: ip.to_string(),
                prefix,
                subnet_mask: INVALID_IP.to_string(),
                network: INVALID_IP.to_string(),
                broadcast: INVALID_IP.to_string(),
                first_host: INVALID_IP.to_string(),
                last_host: INVALID_IP.to_string(),
                total_hosts,
                usable_hosts,
                class: None,
            });
        }

        let network: String = network_address(ip, prefix);
        let broadcast: String = broadcast_address(ip, prefix);
        Ok(Self {
            ip: ip.to_string(),
            prefix,
            subnet_mask: mask_from_prefix(prefix),
            first_host: first_host_with(&network, opts),
            last_host: last_host_with(&broadcast, opts),
            network,
            broadcast,
            total_hosts,
            usable_hosts,
            class: class_of(ip),
        })
    }

    /// Report for `a.b.c.d/n` notation.
    pub fn from_cidr(s: &str, opts: &Options) -> Result<Self, SubnetError> {
        let (addr, prefix) = parse_cidr_notation(s)?;
        Self::new(&addr.to_string(), prefix, opts)
    }
}

#[rustfmt::skip]
impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class: String = self.class.map_or_else(|| "-".to_string(), |c| c.to_string());
        writeln!(f, "{:<18} {}{SLASH}{}", "Address", self.ip, self.prefix)?;
        writeln!(f, "{:<18} {}", "Subnet Mask",       self.subnet_mask)?;
        writeln!(f, "{:<18} {}", "Network Address",   self.network)?;
        writeln!(f, "{:<18} {}", "Broadcast Address", self.broadcast)?;
        writeln!(f, "{:<18} {}", "Total Addresses",   self.total_hosts)?;
        writeln!(f, "{:<18} {}", "Usable Hosts",      self.usable_hosts)?;
        writeln!(f, "{:<18} {}", "First Host",        self.first_host)?;
        writeln!(f, "{:<18} {}", "Last Host",         self.last_host)?;
        write!(f,   "{:<18} {}", "Class",             class)
    }
}

/**
Parse `a.b.c.d/n` into an address and prefix.

The address must pass [super::is_valid_ipv4] and the prefix must be in
`0..=32`. Whitespace around either half is ignored.
*/
pub fn parse_cidr_notation(s: &str) -> Result<(Ipv4Addr, u8), SubnetError> {
    let parts: Vec<&str> = s.split(SLASH).collect();
    if parts.len() != 2 {
        return Err(SubnetError::InvalidNotation(s.to_string()));
    }

    let addr: Ipv4Addr = parse_ipv4(parts[0].trim())?;
    let prefix: u8 = parts[1]
        .trim()
        .parse::<u8>()
        .map_err(|_| SubnetError::InvalidNotation(s.to_string()))?;

    Ok((addr, check_prefix(prefix)?))
}

/* -------------------------------------------------------------------------- */
