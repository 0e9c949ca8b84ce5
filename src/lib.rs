// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv4 subnet calculator primitives.

Everything here is a pure function of its arguments: no I/O, no shared
state, nothing to lock. Each operation comes in two flavours:

- a typed one over [std::net::Ipv4Addr] returning `Result<_, SubnetError>`
  (`network_of`, `broadcast_of`, `subnet_mask`, `mask_to_prefix`, ...)
- a string one for rendering layers, which takes and returns text and
  reports failure in-band: the [INVALID_IP] / [INVALID] sentinels for
  address-valued results, `None` for structured ones.

```
use subnetcalc::*;

assert!(is_valid_ipv4("192.168.1.200"));
assert_eq!(network_address("192.168.1.200", 24), "192.168.1.0");
assert_eq!(broadcast_address("192.168.1.200", 24), "192.168.1.255");
assert_eq!(cidr_from_mask("255.255.255.0"), Some(24));
assert_eq!(class_of("10.0.0.1"), Some(AddressClass::A));
```
*/

mod iptools;

pub use iptools::*;
