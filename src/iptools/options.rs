// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// How far a first/last host step may carry between octets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostCarry {
    /// Carry from the last octet into the third one and no further.
    /// A step that would need to go past the third octet is an error.
    #[default]
    ThirdOctet,
    /// Treat the address as one `u32`; only wrapping past
    /// `255.255.255.255` / `0.0.0.0` is an error.
    Full,
}

/**
Knobs for the operations whose behaviour has more than one reasonable reading.

The free functions of this crate use `Options::default()`, which keeps the
historical behaviour (limited carry, per-octet mask checking).

```
# use subnetcalc::{HostCarry, Options};
# fn main() -> Result<(), serde_json::Error> {
let opts: Options = serde_json::from_str(r#"{"host_carry": "full"}"#)?;
assert_eq!(opts.host_carry, HostCarry::Full);
assert!(!opts.strict_masks);
# Ok(())
# }
```
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub host_carry: HostCarry,
    /// reject masks that are not contiguous as a whole, not only per octet
    pub strict_masks: bool,
}

impl Options {
    pub fn new(host_carry: HostCarry, strict_masks: bool) -> Self {
        Self {
            host_carry,
            strict_masks,
        }
    }

    /// [super::cidr_from_mask] or [super::cidr_from_mask_strict], per `strict_masks`.
    pub fn cidr_from_mask(&self, mask: &str) -> Option<u8> {
        if self.strict_masks {
            super::cidr_from_mask_strict(mask)
        } else {
            super::cidr_from_mask(mask)
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts: Options = Options::default();
        assert_eq!(opts.host_carry, HostCarry::ThirdOctet);
        assert!(!opts.strict_masks);
    }

    #[test]
    fn test_deserialize() {
        let opts: Options = serde_json::from_str(r#"{"host_carry": "full"}"#).unwrap();
        assert_eq!(opts, Options::new(HostCarry::Full, false));

        let opts: Options = serde_json::from_str(r#"{"strict_masks": true}"#).unwrap();
        assert_eq!(opts, Options::new(HostCarry::ThirdOctet, true));

        let opts: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, Options::default());

        assert!(serde_json::from_str::<Options>(r#"{"host_carry": "second_octet"}"#).is_err());
    }

    #[test]
    fn test_serialize() {
        let json: String = serde_json::to_string(&Options::new(HostCarry::Full, true)).unwrap();
        assert_eq!(json, r#"{"host_carry":"full","strict_masks":true}"#);
    }

    #[test]
    fn test_mask_strictness() {
        let lenient: Options = Options::default();
        let strict: Options = Options::new(HostCarry::default(), true);
        assert_eq!(lenient.cidr_from_mask("255.0.255.0"), Some(16));
        assert_eq!(strict.cidr_from_mask("255.0.255.0"), None);
        assert_eq!(strict.cidr_from_mask("255.255.128.0"), Some(17));
    }
}
