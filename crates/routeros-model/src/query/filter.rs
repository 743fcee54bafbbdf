use std::fmt::Display;

use super::Field;

/// One condition over a single property.
///
/// Values are rendered with `Display` when the filter is built, so a filter
/// owns plain text and no longer depends on the field's value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// The property is present.
    Set(&'static str),
    /// The property is absent.
    NotSet(&'static str),
    Eq(&'static str, String),
    Lt(&'static str, String),
    Gt(&'static str, String),
    /// Any of the values matches. The router ORs repeated equality tokens
    /// on the same property.
    In(&'static str, Vec<String>),
}

impl Filter {
    /// The property this filter tests.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Set(name)
            | Self::NotSet(name)
            | Self::Eq(name, _)
            | Self::Lt(name, _)
            | Self::Gt(name, _)
            | Self::In(name, _) => name,
        }
    }

    /// Lower to query tokens. Every variant yields exactly one token except
    /// `In`, which yields one per candidate (none for an empty list).
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Self::Set(name) => vec![(*name).to_owned()],
            Self::NotSet(name) => vec![format!("-{name}")],
            Self::Eq(name, value) => vec![format!("{name}={value}")],
            Self::Lt(name, value) => vec![format!("<{name}={value}")],
            Self::Gt(name, value) => vec![format!(">{name}={value}")],
            Self::In(name, values) => values.iter().map(|v| format!("{name}={v}")).collect(),
        }
    }
}

pub fn set<T>(field: Field<T>) -> Filter {
    Filter::Set(field.name())
}

pub fn not_set<T>(field: Field<T>) -> Filter {
    Filter::NotSet(field.name())
}

pub fn eq<T: Display>(field: Field<T>, value: impl Into<T>) -> Filter {
    Filter::Eq(field.name(), value.into().to_string())
}

pub fn lt<T: Display>(field: Field<T>, value: impl Into<T>) -> Filter {
    Filter::Lt(field.name(), value.into().to_string())
}

pub fn gt<T: Display>(field: Field<T>, value: impl Into<T>) -> Filter {
    Filter::Gt(field.name(), value.into().to_string())
}

/// Match any of `values`.
pub fn any_of<T, V>(field: Field<T>, values: impl IntoIterator<Item = V>) -> Filter
where
    T: Display,
    V: Into<T>,
{
    let values = values.into_iter().map(|v| v.into().to_string()).collect();
    Filter::In(field.name(), values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{MacAddress, Speed};

    const MTU: Field<u16> = Field::new("mtu");
    const SPEED: Field<Speed> = Field::new("speed");
    const COMMENT: Field<String> = Field::new("comment");
    const MAC: Field<MacAddress> = Field::new("mac-address");

    #[test]
    fn eq_uses_display() {
        assert_eq!(eq(MTU, 1500u16).tokens(), ["mtu=1500"]);
        assert_eq!(eq(COMMENT, "uplink").tokens(), ["comment=uplink"]);
    }

    #[test]
    fn any_of_yields_one_token_per_value() {
        let filter = any_of(SPEED, [Speed::Speed1Gbps, Speed::Speed10Gbps]);
        assert_eq!(filter.tokens(), ["speed=1Gbps", "speed=10Gbps"]);
    }

    #[test]
    fn any_of_empty_yields_nothing() {
        let filter = any_of(SPEED, Vec::<Speed>::new());
        assert!(filter.tokens().is_empty());
        assert_eq!(filter.field(), "speed");
    }

    #[test]
    fn presence() {
        assert_eq!(set(COMMENT).tokens(), ["comment"]);
        assert_eq!(not_set(COMMENT).tokens(), ["-comment"]);
    }

    #[test]
    fn ordering_prefixes() {
        assert_eq!(lt(MTU, 1500u16).tokens(), ["<mtu=1500"]);
        assert_eq!(gt(MTU, 1500u16).tokens(), [">mtu=1500"]);
    }

    #[test]
    fn mac_values_are_uppercase() {
        let mac: MacAddress = "aa:bb:cc:00:11:22".parse().unwrap();
        assert_eq!(eq(MAC, mac).tokens(), ["mac-address=AA:BB:CC:00:11:22"]);
    }
}
