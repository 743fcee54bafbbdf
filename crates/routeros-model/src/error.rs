// ── Value parse errors ──
//
// Every codec in this crate fails the same way: the text did not match the
// grammar of the scalar it was parsed as. `MalformedValue` records which
// scalar, the offending input, and a short reason.

use strum::Display;
use thiserror::Error;

/// The scalar kind a [`MalformedValue`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValueKind {
    #[strum(to_string = "identifier")]
    Id,
    #[strum(to_string = "MAC address")]
    MacAddress,
    #[strum(to_string = "IP address")]
    IpAddr,
    #[strum(to_string = "IP prefix")]
    IpPrefix,
    #[strum(to_string = "gateway")]
    Gateway,
    #[strum(to_string = "duration")]
    Duration,
    #[strum(to_string = "duration or `auto`")]
    DurationWithAuto,
    #[strum(to_string = "advertise")]
    Advertise,
    #[strum(to_string = "ARP mode")]
    ArpMode,
    #[strum(to_string = "cable settings")]
    CableSettings,
    #[strum(to_string = "check gateway mode")]
    CheckGatewayMode,
    #[strum(to_string = "combo mode")]
    ComboMode,
    #[strum(to_string = "FEC mode")]
    FecMode,
    #[strum(to_string = "SFP rate select mode")]
    SfpRateSelectMode,
    #[strum(to_string = "speed")]
    Speed,
    #[strum(to_string = "status")]
    Status,
    #[strum(to_string = "toggle")]
    ToggleWithDefault,
    #[strum(to_string = "toggle")]
    ToggleWithAuto,
    #[strum(to_string = "boolean")]
    Bool,
    #[strum(to_string = "integer")]
    Integer,
}

/// Text that does not match the grammar of the scalar it was parsed as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {kind} {input:?}: {reason}")]
pub struct MalformedValue {
    kind: ValueKind,
    input: String,
    reason: String,
}

impl MalformedValue {
    /// Build an error for `input` rejected as `kind`.
    pub fn new(kind: ValueKind, input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Which scalar rejected the input.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The rejected text, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the text was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_input() {
        let err = MalformedValue::new(ValueKind::Id, "2a", "must start with `*`");
        assert_eq!(err.to_string(), r#"malformed identifier "2a": must start with `*`"#);
    }

    #[test]
    fn accessors_return_parts() {
        let err = MalformedValue::new(ValueKind::MacAddress, "zz", "expected 12 hex digits");
        assert_eq!(err.kind(), ValueKind::MacAddress);
        assert_eq!(err.input(), "zz");
        assert_eq!(err.reason(), "expected 12 hex digits");
    }
}
