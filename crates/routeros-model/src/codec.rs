// ── JSON plumbing shared by every scalar ──
//
// RouterOS transmits every property as a JSON string, including booleans and
// counters. The scalars in this crate serialize through their `Display` text
// and deserialize through `FromStr`; `stringly` covers the primitive types.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::MalformedValue;

/// Implement `Serialize`/`Deserialize` for a type via its `Display` and
/// `FromStr<Err = MalformedValue>` impls.
macro_rules! string_codec {
    ($ty:ty) => {
        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use string_codec;

/// Deserialize an optional scalar, mapping an absent or empty string to `None`.
///
/// RouterOS reports unset address-like properties (`pref-src`, `immediate-gw`)
/// as `""`. Use with `#[serde(default, deserialize_with = "...")]`.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = MalformedValue>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Serde adapters for booleans and integers carried as JSON strings.
///
/// ```ignore
/// #[serde(with = "routeros_model::stringly")]
/// pub disabled: bool,
/// ```
pub mod stringly {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::error::{MalformedValue, ValueKind};

    /// A primitive that RouterOS quotes on the wire.
    pub trait Stringly: Sized {
        fn to_wire(&self) -> String;
        fn from_wire(raw: &str) -> Result<Self, MalformedValue>;
    }

    impl Stringly for bool {
        fn to_wire(&self) -> String {
            self.to_string()
        }

        fn from_wire(raw: &str) -> Result<Self, MalformedValue> {
            match raw {
                "true" | "yes" => Ok(true),
                "false" | "no" => Ok(false),
                _ => Err(MalformedValue::new(
                    ValueKind::Bool,
                    raw,
                    "expected `true` or `false`",
                )),
            }
        }
    }

    macro_rules! stringly_unsigned {
        ($($ty:ty),*) => {$(
            impl Stringly for $ty {
                fn to_wire(&self) -> String {
                    self.to_string()
                }

                fn from_wire(raw: &str) -> Result<Self, MalformedValue> {
                    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(MalformedValue::new(ValueKind::Integer, raw, "expected decimal digits"));
                    }
                    raw.parse()
                        .map_err(|e| MalformedValue::new(ValueKind::Integer, raw, format!("{e}")))
                }
            }
        )*};
    }

    stringly_unsigned!(u8, u16, u32, u64);

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Stringly,
        S: Serializer,
    {
        serializer.serialize_str(&value.to_wire())
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Stringly,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        T::from_wire(&raw).map_err(serde::de::Error::custom)
    }

    /// The same adapters for `Option<T>`; pair with
    /// `#[serde(default, skip_serializing_if = "Option::is_none")]`.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        use super::Stringly;

        #[allow(clippy::ref_option)]
        pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            T: Stringly,
            S: Serializer,
        {
            match value {
                Some(v) => serializer.serialize_some(&v.to_wire()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            T: Stringly,
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| T::from_wire(&raw))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::IpAddr;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "stringly")]
        running: bool,
        #[serde(with = "stringly")]
        mtu: u16,
        #[serde(
            default,
            with = "stringly::option",
            skip_serializing_if = "Option::is_none"
        )]
        l2mtu: Option<u16>,
        #[serde(default, deserialize_with = "empty_as_none")]
        pref_src: Option<IpAddr>,
    }

    #[test]
    fn primitives_travel_as_strings() {
        let sample = Sample {
            running: true,
            mtu: 1500,
            l2mtu: Some(1598),
            pref_src: None,
        };
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["running"], json!("true"));
        assert_eq!(value["mtu"], json!("1500"));
        assert_eq!(value["l2mtu"], json!("1598"));
    }

    #[test]
    fn missing_optional_is_skipped() {
        let sample = Sample {
            running: false,
            mtu: 1500,
            l2mtu: None,
            pref_src: None,
        };
        let value = serde_json::to_value(&sample).unwrap();
        assert!(value.get("l2mtu").is_none());
    }

    #[test]
    fn decodes_quoted_primitives() {
        let sample: Sample = serde_json::from_value(json!({
            "running": "false",
            "mtu": "9000",
            "pref_src": "10.0.0.1",
        }))
        .unwrap();
        assert!(!sample.running);
        assert_eq!(sample.mtu, 9000);
        assert_eq!(sample.l2mtu, None);
        assert_eq!(sample.pref_src, Some("10.0.0.1".parse().unwrap()));
    }

    #[test]
    fn empty_address_is_none() {
        let sample: Sample = serde_json::from_value(json!({
            "running": "yes",
            "mtu": "1500",
            "pref_src": "",
        }))
        .unwrap();
        assert!(sample.running);
        assert_eq!(sample.pref_src, None);
    }

    #[test]
    fn rejects_native_json_bool() {
        let result: Result<Sample, _> = serde_json::from_value(json!({
            "running": true,
            "mtu": "1500",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_signed_or_overflowing_integers() {
        use stringly::Stringly;
        assert!(u16::from_wire("+1500").is_err());
        assert!(u16::from_wire("-1").is_err());
        assert!(u8::from_wire("256").is_err());
        assert!(u64::from_wire("").is_err());
    }
}
