// ── Identity types ──
//
// `Id` addresses a single object in a RouterOS menu; `MacAddress` is the
// hardware address carried by interfaces and ARP entries. Both are opaque
// integers with a fixed text form.

use std::fmt;
use std::str::FromStr;

use crate::codec::string_codec;
use crate::error::{MalformedValue, ValueKind};

// ── Id ──────────────────────────────────────────────────────────────

/// Router-assigned object identifier, written `*` + lowercase hex
/// (e.g. `*ffff1234`).
///
/// Only ever obtained from the router; the value carries no meaning beyond
/// equality and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u64);

impl Id {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Id {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{:x}", self.0)
    }
}

impl FromStr for Id {
    type Err = MalformedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.strip_prefix('*') else {
            return Err(MalformedValue::new(ValueKind::Id, s, "must start with `*`"));
        };
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MalformedValue::new(ValueKind::Id, s, "expected hex digits after `*`"));
        }
        u64::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| MalformedValue::new(ValueKind::Id, s, "does not fit in 64 bits"))
    }
}

string_codec!(Id);

// ── MacAddress ──────────────────────────────────────────────────────

const MAC_HEX_DIGITS: usize = 12;

/// 48-bit hardware address.
///
/// Always rendered as six uppercase, zero-padded octets
/// (`0A:1B:2C:3D:4E:5F`). The router's query matcher is case-sensitive, so
/// lowercase input is normalized rather than reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress(u64);

impl MacAddress {
    pub fn from_octets(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(u64::from_be_bytes([0, 0, a, b, c, d, e, f]))
    }

    pub fn octets(self) -> [u8; 6] {
        let [_, _, a, b, c, d, e, f] = self.0.to_be_bytes();
        [a, b, c, d, e, f]
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self::from_octets(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl FromStr for MacAddress {
    type Err = MalformedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|&c| c != ':').collect();
        if digits.len() != MAC_HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MalformedValue::new(
                ValueKind::MacAddress,
                s,
                "expected 12 hex digits",
            ));
        }
        u64::from_str_radix(&digits, 16)
            .map(Self)
            .map_err(|e| MalformedValue::new(ValueKind::MacAddress, s, e.to_string()))
    }
}

string_codec!(MacAddress);
