// ── IP values ──
//
// Thin wrappers over `std::net` that speak the RouterOS text form and carry
// the crate's error type.

use std::fmt;
use std::net::{self, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::codec::string_codec;
use crate::error::{MalformedValue, ValueKind};

// ── IpAddr ──────────────────────────────────────────────────────────

/// A single IPv4 or IPv6 host address (`10.10.10.1`, `2001:db8::68`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpAddr(net::IpAddr);

impl IpAddr {
    pub const fn addr(self) -> net::IpAddr {
        self.0
    }

    pub const fn is_ipv4(self) -> bool {
        self.0.is_ipv4()
    }
}

impl From<net::IpAddr> for IpAddr {
    fn from(addr: net::IpAddr) -> Self {
        Self(addr)
    }
}

impl From<Ipv4Addr> for IpAddr {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.into())
    }
}

impl From<Ipv6Addr> for IpAddr {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr.into())
    }
}

impl From<IpAddr> for net::IpAddr {
    fn from(addr: IpAddr) -> Self {
        addr.0
    }
}

impl fmt::Display for IpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for IpAddr {
    type Err = MalformedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<net::IpAddr>()
            .map(Self)
            .map_err(|e| MalformedValue::new(ValueKind::IpAddr, s, e.to_string()))
    }
}

string_codec!(IpAddr);

// ── IpPrefix ────────────────────────────────────────────────────────

/// An address with a prefix length (`10.10.10.0/24`, `2001:db8::/32`).
///
/// Host bits are kept as given: an interface address such as
/// `192.168.88.1/24` is a valid prefix and renders unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpPrefix {
    addr: net::IpAddr,
    len: u8,
}

impl IpPrefix {
    /// Returns `None` when `len` exceeds the address family's width.
    pub fn new(addr: impl Into<net::IpAddr>, len: u8) -> Option<Self> {
        let addr = addr.into();
        (len <= max_len(addr)).then_some(Self { addr, len })
    }

    pub const fn addr(self) -> IpAddr {
        IpAddr(self.addr)
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> u8 {
        self.len
    }
}

fn max_len(addr: net::IpAddr) -> u8 {
    if addr.is_ipv4() { 32 } else { 128 }
}

impl fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl FromStr for IpPrefix {
    type Err = MalformedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| MalformedValue::new(ValueKind::IpPrefix, s, reason);

        let (addr, len) = s.split_once('/').ok_or_else(|| malformed("missing `/`"))?;
        let addr: net::IpAddr = addr.parse().map_err(|_| malformed("invalid address"))?;

        let canonical_digits = !len.is_empty()
            && len.bytes().all(|b| b.is_ascii_digit())
            && (len == "0" || !len.starts_with('0'));
        if !canonical_digits {
            return Err(malformed("invalid prefix length"));
        }
        let len: u8 = len.parse().map_err(|_| malformed("prefix length out of range"))?;

        Self::new(addr, len).ok_or_else(|| malformed("prefix length out of range"))
    }
}

string_codec!(IpPrefix);
