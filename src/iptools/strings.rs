// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: char = '.';
pub(crate) static SLASH: &str = "/";

// sentinels handed to string-rendering callers
pub static INVALID_IP: &str = "Invalid IP";
pub static INVALID: &str = "Invalid";

// mod.rs
pub(crate) static ERR_INVALID_IP: &str = "invalid IPv4 address";
pub(crate) static ERR_PREFIX: &str = "IPv4 prefix must be <= 32, got";
pub(crate) static ERR_MASK: &str = "invalid subnet mask";
pub(crate) static ERR_OVERFLOW: &str = "no address above";
pub(crate) static ERR_UNDERFLOW: &str = "no address below";
pub(crate) static ERR_CIDR_FMT: &str = "invalid CIDR notation (expected exactly one slash)";

// class.rs
pub(crate) static ERR_CLASS: &str = "unknown address class";
