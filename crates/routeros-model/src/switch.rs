// ── On/off style properties ──

use crate::error::ValueKind;
use crate::token::token_enum;

token_enum! {
    /// A read-only on/off status, e.g. `loop-protect-status`.
    pub enum Status(ValueKind::Status) {
        Off => "off",
        On => "on",
    }
}

impl Status {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for Status {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl From<Status> for bool {
    fn from(status: Status) -> Self {
        status.is_on()
    }
}

token_enum! {
    /// An on/off toggle that can defer to the global default.
    pub enum ToggleWithDefault(ValueKind::ToggleWithDefault) {
        Default => "default",
        Off => "off",
        On => "on",
    }
}

token_enum! {
    /// An on/off toggle that can be left to auto-detection.
    pub enum ToggleWithAuto(ValueKind::ToggleWithAuto) {
        Auto => "auto",
        Off => "off",
        On => "on",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_from_bool() {
        assert_eq!(Status::from(true), Status::On);
        assert_eq!(Status::from(false).to_string(), "off");
        assert!(bool::from(Status::On));
    }

    #[test]
    fn toggles_round_trip() {
        for v in ToggleWithDefault::iter() {
            assert_eq!(v.to_string().parse::<ToggleWithDefault>().unwrap(), v);
        }
        for v in ToggleWithAuto::iter() {
            assert_eq!(v.to_string().parse::<ToggleWithAuto>().unwrap(), v);
        }
        for v in Status::iter() {
            assert_eq!(v.to_string().parse::<Status>().unwrap(), v);
        }
    }

    #[test]
    fn toggle_tables_are_distinct() {
        assert!("auto".parse::<ToggleWithDefault>().is_err());
        assert!("default".parse::<ToggleWithAuto>().is_err());
        assert!("default".parse::<Status>().is_err());
        assert!("ON".parse::<Status>().is_err());
    }
}
