// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::strings::*;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Historical (pre-CIDR) IPv4 address class.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

/// Fixed facts about one [AddressClass].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClassInfo {
    pub description: &'static str,
    pub default_mask: &'static str,
    pub network_bits: &'static str,
}

#[rustfmt::skip]
static CLASS_TABLE: [ClassInfo; 5] = [
    ClassInfo { description: "Large networks with many hosts",  default_mask: "255.0.0.0 (/8)",      network_bits: "8" },
    ClassInfo { description: "Medium-sized networks",           default_mask: "255.255.0.0 (/16)",   network_bits: "16" },
    ClassInfo { description: "Small networks with fewer hosts", default_mask: "255.255.255.0 (/24)", network_bits: "24" },
    ClassInfo { description: "Multicast addresses",             default_mask: "N/A (Multicast)",     network_bits: "N/A" },
    ClassInfo { description: "Experimental/Reserved addresses", default_mask: "N/A (Reserved)",      network_bits: "N/A" },
];

impl AddressClass {
    /**
    Class of an address with the given first octet.

    `0` and `127` belong to no class (reserved and loopback).
    */
    pub fn from_first_octet(octet: u32) -> Option<Self> {
        match octet {
            1..=126 => Some(Self::A),
            128..=191 => Some(Self::B),
            192..=223 => Some(Self::C),
            224..=239 => Some(Self::D),
            240..=255 => Some(Self::E),
            _ => None,
        }
    }

    pub fn info(&self) -> &'static ClassInfo {
        &CLASS_TABLE[*self as usize]
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }

    pub fn default_mask(&self) -> &'static str {
        self.info().default_mask
    }

    pub fn network_bits(&self) -> &'static str {
        self.info().network_bits
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for AddressClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            _ => Err(format!("{ERR_CLASS}: '{s}'")),
        }
    }
}

/* ---------------------------------- */

/// Leading decimal integer of `s`, ignoring leading whitespace and a `+`.
fn leading_int(s: &str) -> Option<u32> {
    let s: &str = s.trim_start();
    let s: &str = s.strip_prefix('+').unwrap_or(s);
    let end: usize = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse::<u32>().ok()
}

/**
Class of `ip` judged by its first component alone.

The rest of the address is not validated. The first component is read up
to its first non-digit, so `"10abc.x"` is still class A. Returns `None` for
empty or non-numeric input and for first octets `0`, `127` and `> 255`.
*/
pub fn class_of(ip: &str) -> Option<AddressClass> {
    let first: &str = ip.split(DOT).next()?;
    AddressClass::from_first_octet(leading_int(first)?)
}

/// Description of `class`, or `""` when there is none.
pub fn class_description(class: Option<AddressClass>) -> &'static str {
    class.map_or("", |c| c.description())
}

/// Default mask of `class` (e.g. `255.0.0.0 (/8)`), or `""` when there is none.
pub fn default_mask(class: Option<AddressClass>) -> &'static str {
    class.map_or("", |c| c.default_mask())
}

/// Default network bit count of `class`, or `""` when there is none.
pub fn default_network_bits(class: Option<AddressClass>) -> &'static str {
    class.map_or("", |c| c.network_bits())
}

/* -------------------------------------------------------------------------- */
