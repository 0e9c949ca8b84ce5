// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    check_prefix,
    mask::mask_octets,
    options::{HostCarry, Options},
    strings::*,
    validate::parse_ipv4,
    SubnetError, IPV4_BITS,
};
use std::net::Ipv4Addr;
use tracing::{debug, trace};

/// Network address of `addr/prefix`: every host bit cleared.
pub fn network_of(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask: [u8; 4] = mask_octets(prefix)?;
    let octets: [u8; 4] = addr.octets();
    let mut net: [u8; 4] = [0; 4];
    for i in 0..4 {
        net[i] = octets[i] & mask[i];
    }
    Ok(Ipv4Addr::from(net))
}

/**
Broadcast address of `addr/prefix`: every host bit set.

For `/32` there are no host bits and the broadcast equals the network.
For `/0` every bit is a host bit and the result is `255.255.255.255`.
*/
pub fn broadcast_of(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    let net: u32 = u32::from(network_of(addr, prefix)?);
    let host_bits: u8 = IPV4_BITS - prefix;
    // u64 so that a shift by 32 is well defined
    let host_mask: u32 = ((1u64 << host_bits) - 1) as u32;
    Ok(Ipv4Addr::from(net | host_mask))
}

/// The address one above `addr`, carrying as far as `carry` allows.
pub fn next_addr(addr: Ipv4Addr, carry: HostCarry) -> Result<Ipv4Addr, SubnetError> {
    let next: Option<Ipv4Addr> = match carry {
        HostCarry::Full => u32::from(addr).checked_add(1).map(Ipv4Addr::from),
        HostCarry::ThirdOctet => {
            let [a, b, c, d] = addr.octets();
            match d.checked_add(1) {
                Some(d) => Some(Ipv4Addr::new(a, b, c, d)),
                None => c.checked_add(1).map(|c| Ipv4Addr::new(a, b, c, 0)),
            }
        }
    };
    next.ok_or_else(|| {
        debug!("cannot step above {addr} ({carry:?})");
        SubnetError::HostOverflow(addr)
    })
}

/// The address one below `addr`, borrowing as far as `carry` allows.
pub fn prev_addr(addr: Ipv4Addr, carry: HostCarry) -> Result<Ipv4Addr, SubnetError> {
    let prev: Option<Ipv4Addr> = match carry {
        HostCarry::Full => u32::from(addr).checked_sub(1).map(Ipv4Addr::from),
        HostCarry::ThirdOctet => {
            let [a, b, c, d] = addr.octets();
            match d.checked_sub(1) {
                Some(d) => Some(Ipv4Addr::new(a, b, c, d)),
                None => c.checked_sub(1).map(|c| Ipv4Addr::new(a, b, c, 255)),
            }
        }
    };
    prev.ok_or_else(|| {
        debug!("cannot step below {addr} ({carry:?})");
        SubnetError::HostUnderflow(addr)
    })
}

/// Number of addresses in a `/prefix` block, `2^(32 - prefix)`.
pub fn total_host_count(prefix: u8) -> Result<u64, SubnetError> {
    let prefix: u8 = check_prefix(prefix)?;
    Ok(1u64 << (IPV4_BITS - prefix))
}

/// Assignable hosts in a `/prefix` block: total minus network and broadcast, never negative.
pub fn usable_host_count(prefix: u8) -> Result<u64, SubnetError> {
    Ok(total_host_count(prefix)?.saturating_sub(2))
}

/* ---------------------------------- */

/// Network address of `ip/prefix` in dotted-decimal, or [INVALID_IP].
pub fn network_address(ip: &str, prefix: u8) -> String {
    match parse_ipv4(ip).and_then(|addr| network_of(addr, prefix)) {
        Ok(net) => {
            trace!("network of {ip}/{prefix} = {net}");
            net.to_string()
        }
        Err(_) => INVALID_IP.to_string(),
    }
}

/// Broadcast address of `ip/prefix` in dotted-decimal, or [INVALID_IP].
pub fn broadcast_address(ip: &str, prefix: u8) -> String {
    match parse_ipv4(ip).and_then(|addr| broadcast_of(addr, prefix)) {
        Ok(bcast) => {
            trace!("broadcast of {ip}/{prefix} = {bcast}");
            bcast.to_string()
        }
        Err(_) => INVALID_IP.to_string(),
    }
}

/**
First host after a network address, or [INVALID].

Uses the default [HostCarry::ThirdOctet]: `10.0.0.255` gives `10.0.1.0`,
but `10.0.255.255` has nowhere to carry to and gives [INVALID].
Older calculators printed the out-of-range octet instead (`10.0.256.0`).
*/
pub fn first_host(network: &str) -> String {
    first_host_with(network, &Options::default())
}

/// Last host before a broadcast address, or [INVALID]. See [first_host].
pub fn last_host(broadcast: &str) -> String {
    last_host_with(broadcast, &Options::default())
}

/// [first_host] with explicit [Options].
pub fn first_host_with(network: &str, opts: &Options) -> String {
    match parse_ipv4(network).and_then(|addr| next_addr(addr, opts.host_carry)) {
        Ok(host) => host.to_string(),
        Err(_) => INVALID.to_string(),
    }
}

/// [last_host] with explicit [Options].
pub fn last_host_with(broadcast: &str, opts: &Options) -> String {
    match parse_ipv4(broadcast).and_then(|addr| prev_addr(addr, opts.host_carry)) {
        Ok(host) => host.to_string(),
        Err(_) => INVALID.to_string(),
    }
}

/* -------------------------------------------------------------------------- */
