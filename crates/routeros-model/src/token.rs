// ── Closed string enumerations ──
//
// `token_enum!` declares an enum together with its literal token table.
// The table is the only place a token is spelled: `as_str`, `FromStr`,
// `Display` and the serde impls are all generated from it.

/// Declare a closed enumeration of RouterOS tokens.
///
/// ```ignore
/// token_enum! {
///     /// Interface ARP mode.
///     pub enum ArpMode(ValueKind::ArpMode) {
///         Disabled => "disabled",
///         Enabled => "enabled",
///     }
/// }
/// ```
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($kind:expr) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::strum::EnumIter, ::strum::EnumCount)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// The literal RouterOS token for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Every member, in declaration order.
            pub fn iter() -> impl Iterator<Item = Self> {
                <Self as ::strum::IntoEnumIterator>::iter()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::MalformedValue;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err($crate::error::MalformedValue::new(
                        $kind,
                        s,
                        concat!("expected one of:", $(" `", $token, "`"),+),
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        $crate::codec::string_codec!($name);
    };
}

pub(crate) use token_enum;
