//! Typed filters lowered to the RouterOS query grammar.
//!
//! A resource declares its filterable properties once with
//! [`field_set!`](crate::field_set). Filters are built against those typed
//! fields and collected into a [`Query`], which serializes to the body of a
//! `POST .../print` request:
//!
//! ```json
//! { ".query": ["mtu=1500", "-comment"] }
//! ```
//!
//! Tokens keep caller order and are never deduplicated. Unknown properties
//! are not detected here; the router rejects them.

mod field;
mod filter;

use serde::Serialize;

pub use field::Field;
pub use filter::{Filter, any_of, eq, gt, lt, not_set, set};

/// A lowered filter sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    #[serde(rename = ".query")]
    tokens: Vec<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_filters(filters: &[Filter]) -> Self {
        filters.iter().cloned().collect()
    }

    /// Append one more filter.
    pub fn and(mut self, filter: &Filter) -> Self {
        self.tokens.extend(filter.tokens());
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Extend<Filter> for Query {
    fn extend<I: IntoIterator<Item = Filter>>(&mut self, iter: I) {
        for filter in iter {
            self.tokens.extend(filter.tokens());
        }
    }
}

impl FromIterator<Filter> for Query {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        let mut query = Self::new();
        query.extend(iter);
        query
    }
}

impl From<Filter> for Query {
    fn from(filter: Filter) -> Self {
        Self {
            tokens: filter.tokens(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::Speed;

    crate::field_set! {
        struct PortFields {
            MTU: u16 => "mtu",
            SPEED: Speed => "speed",
            COMMENT: String => "comment",
            DISABLED: bool => "disabled",
        }
    }

    #[test]
    fn preserves_order_without_dedup() {
        let query = Query::from_filters(&[
            eq(PortFields::DISABLED, false),
            any_of(PortFields::SPEED, [Speed::Speed1Gbps, Speed::Speed10Gbps]),
            eq(PortFields::DISABLED, false),
            not_set(PortFields::COMMENT),
        ]);
        assert_eq!(
            query.tokens(),
            [
                "disabled=false",
                "speed=1Gbps",
                "speed=10Gbps",
                "disabled=false",
                "-comment",
            ]
        );
        assert_eq!(query.len(), 5);
    }

    #[test]
    fn serializes_under_dot_query() {
        let query: Query = [eq(PortFields::MTU, 1500u16), set(PortFields::COMMENT)]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ ".query": ["mtu=1500", "comment"] })
        );
    }

    #[test]
    fn empty_query_still_has_key() {
        let query = Query::new();
        assert!(query.is_empty());
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({ ".query": [] }));
    }

    #[test]
    fn builder_chain() {
        let query = Query::from(gt(PortFields::MTU, 1500u16)).and(&lt(PortFields::MTU, 9000u16));
        assert_eq!(query.tokens(), [">mtu=1500", "<mtu=9000"]);
    }

    #[test]
    fn field_set_lists_names() {
        assert_eq!(PortFields::NAMES, ["mtu", "speed", "comment", "disabled"]);
        assert_eq!(PortFields::SPEED.name(), "speed");
    }
}
