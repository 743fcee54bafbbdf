// ── Route values ──

use std::fmt;
use std::str::FromStr;

use crate::codec::string_codec;
use crate::error::{MalformedValue, ValueKind};
use crate::ip::IpAddr;
use crate::token::token_enum;

/// Next hop of a route: an address, an interface, or an address scoped to
/// an interface (`10.0.0.1%ether1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gateway {
    Address(IpAddr),
    Interface(String),
    AddressAndInterface(IpAddr, String),
}

impl Gateway {
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            Self::Address(addr) | Self::AddressAndInterface(addr, _) => Some(*addr),
            Self::Interface(_) => None,
        }
    }

    pub fn interface(&self) -> Option<&str> {
        match self {
            Self::Interface(name) | Self::AddressAndInterface(_, name) => Some(name),
            Self::Address(_) => None,
        }
    }
}

impl From<IpAddr> for Gateway {
    fn from(addr: IpAddr) -> Self {
        Self::Address(addr)
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(addr) => addr.fmt(f),
            Self::Interface(name) => f.write_str(name),
            Self::AddressAndInterface(addr, name) => write!(f, "{addr}%{name}"),
        }
    }
}

impl FromStr for Gateway {
    type Err = MalformedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(addr) = s.parse::<IpAddr>() {
            return Ok(Self::Address(addr));
        }

        match s.split_once('%') {
            None if s.is_empty() => Err(MalformedValue::new(ValueKind::Gateway, s, "empty gateway")),
            None => Ok(Self::Interface(s.to_owned())),
            Some((addr, name)) => {
                let addr = addr.parse::<IpAddr>().map_err(|_| {
                    MalformedValue::new(ValueKind::Gateway, s, "expected an IP address before `%`")
                })?;
                if name.is_empty() {
                    return Err(MalformedValue::new(
                        ValueKind::Gateway,
                        s,
                        "expected an interface name after `%`",
                    ));
                }
                Ok(Self::AddressAndInterface(addr, name.to_owned()))
            }
        }
    }
}

string_codec!(Gateway);

token_enum! {
    /// How a route verifies that its gateway is reachable.
    pub enum CheckGatewayMode(ValueKind::CheckGatewayMode) {
        None => "none",
        Arp => "arp",
        Bfd => "bfd",
        BfdMultihop => "bfd-multihop",
        Ping => "ping",
    }
}
