use std::fmt;
use std::marker::PhantomData;

/// A filterable property: its wire name plus the type its values must have.
///
/// The type parameter never holds data. It only constrains which values the
/// comparison constructors in [`crate::query`] accept for this property.
pub struct Field<T> {
    name: &'static str,
    value: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            value: PhantomData,
        }
    }

    pub const fn name(self) -> &'static str {
        self.name
    }
}

// Manual impls: deriving would add a `T: Clone` (etc.) bound.

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

/// Declare the filterable properties of one resource.
///
/// Expands to a unit struct whose associated constants are typed
/// [`Field`]s, plus `NAMES` listing every wire name in declaration order.
///
/// ```
/// use routeros_model::{field_set, query, Speed};
///
/// field_set! {
///     pub struct PortFields {
///         NAME: String => "name",
///         MTU: u16 => "mtu",
///         SPEED: Speed => "speed",
///     }
/// }
///
/// let filter = query::eq(PortFields::MTU, 1500u16);
/// assert_eq!(filter.tokens(), ["mtu=1500"]);
/// assert_eq!(PortFields::NAMES, ["name", "mtu", "speed"]);
/// ```
#[macro_export]
macro_rules! field_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $name {
            $(
                $(#[$fmeta])*
                pub const $field: $crate::query::Field<$ty> = $crate::query::Field::new($wire);
            )+

            /// Wire names of every field in this set.
            pub const NAMES: &'static [&'static str] = &[$($wire),+];
        }
    };
}
