// ── Ethernet interface enumerations ──
//
// Token tables for the `/interface/ethernet` properties that take a fixed
// set of values.

use crate::error::ValueKind;
use crate::token::token_enum;

token_enum! {
    /// Link mode advertised during auto-negotiation.
    ///
    /// `None` is the empty token the router reports when nothing is
    /// advertised; it is a valid value, not a parse failure.
    #[derive(Default)]
    pub enum Advertise(ValueKind::Advertise) {
        #[default]
        None => "",
        Half10M => "10M-half",
        Full10M => "10M-full",
        Half100M => "100M-half",
        Full100M => "100M-full",
        Half1000M => "1000M-half",
        Full1000M => "1000M-full",
        Full2500M => "2500M-full",
        Full5000M => "5000M-full",
        Full10000M => "10000M-full",
    }
}

token_enum! {
    /// Interface ARP mode (`arp` property).
    pub enum ArpMode(ValueKind::ArpMode) {
        Disabled => "disabled",
        Enabled => "enabled",
        LocalProxyArp => "local-proxy-arp",
        ProxyArp => "proxy-arp",
        ReplyOnly => "reply-only",
    }
}

token_enum! {
    pub enum CableSettings(ValueKind::CableSettings) {
        Default => "default",
        Short => "short",
        Standard => "standard",
    }
}

token_enum! {
    /// Which port of a combo interface is used.
    pub enum ComboMode(ValueKind::ComboMode) {
        Auto => "auto",
        Copper => "copper",
        Sfp => "sfp",
        SfpAlt => "sfp-alt",
    }
}

token_enum! {
    /// Forward error correction mode.
    pub enum FecMode(ValueKind::FecMode) {
        Auto => "auto",
        Fec74 => "fec74",
        Fec91 => "fec91",
        Off => "off",
    }
}

token_enum! {
    pub enum SfpRateSelectMode(ValueKind::SfpRateSelectMode) {
        Low => "low",
        High => "high",
    }
}

token_enum! {
    /// Interface link speed.
    pub enum Speed(ValueKind::Speed) {
        Speed10Mbps => "10Mbps",
        Speed100Mbps => "100Mbps",
        Speed1Gbps => "1Gbps",
        Speed2_5Gbps => "2.5Gbps",
        Speed5Gbps => "5Gbps",
        Speed10Gbps => "10Gbps",
        Speed25Gbps => "25Gbps",
        Speed40Gbps => "40Gbps",
        Speed50Gbps => "50Gbps",
        Speed100Gbps => "100Gbps",
        Speed200Gbps => "200Gbps",
        Speed400Gbps => "400Gbps",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;

    use super::*;

    fn tokens<T: ToString>(values: impl Iterator<Item = T>) -> Vec<String> {
        values.map(|v| v.to_string()).collect()
    }

    #[test]
    fn advertise_tokens() {
        assert_eq!(
            tokens(Advertise::iter()),
            [
                "", "10M-half", "10M-full", "100M-half", "100M-full", "1000M-half",
                "1000M-full", "2500M-full", "5000M-full", "10000M-full",
            ]
        );
        assert_eq!(Advertise::COUNT, 10);
    }

    #[test]
    fn advertise_empty_is_none() {
        assert_eq!("".parse::<Advertise>().unwrap(), Advertise::None);
        assert_eq!(Advertise::default().as_str(), "");
    }

    #[test]
    fn arp_mode_tokens() {
        assert_eq!(
            tokens(ArpMode::iter()),
            ["disabled", "enabled", "local-proxy-arp", "proxy-arp", "reply-only"]
        );
    }

    #[test]
    fn speed_tokens() {
        assert_eq!(
            tokens(Speed::iter()),
            [
                "10Mbps", "100Mbps", "1Gbps", "2.5Gbps", "5Gbps", "10Gbps", "25Gbps",
                "40Gbps", "50Gbps", "100Gbps", "200Gbps", "400Gbps",
            ]
        );
    }

    #[test]
    fn small_tables() {
        assert_eq!(tokens(CableSettings::iter()), ["default", "short", "standard"]);
        assert_eq!(tokens(ComboMode::iter()), ["auto", "copper", "sfp", "sfp-alt"]);
        assert_eq!(tokens(FecMode::iter()), ["auto", "fec74", "fec91", "off"]);
        assert_eq!(tokens(SfpRateSelectMode::iter()), ["low", "high"]);
    }

    #[test]
    fn every_member_round_trips() {
        for v in Advertise::iter() {
            assert_eq!(v.as_str().parse::<Advertise>().unwrap(), v);
        }
        for v in ArpMode::iter() {
            assert_eq!(v.as_str().parse::<ArpMode>().unwrap(), v);
        }
        for v in CableSettings::iter() {
            assert_eq!(v.as_str().parse::<CableSettings>().unwrap(), v);
        }
        for v in ComboMode::iter() {
            assert_eq!(v.as_str().parse::<ComboMode>().unwrap(), v);
        }
        for v in FecMode::iter() {
            assert_eq!(v.as_str().parse::<FecMode>().unwrap(), v);
        }
        for v in SfpRateSelectMode::iter() {
            assert_eq!(v.as_str().parse::<SfpRateSelectMode>().unwrap(), v);
        }
        for v in Speed::iter() {
            assert_eq!(v.as_str().parse::<Speed>().unwrap(), v);
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let err = "1000M".parse::<Advertise>().unwrap_err();
        assert_eq!(err.kind(), ValueKind::Advertise);
        assert!("1gbps".parse::<Speed>().is_err());
        assert!("Disabled".parse::<ArpMode>().is_err());
        assert!("".parse::<ComboMode>().is_err());
        assert!("fec".parse::<FecMode>().is_err());
        assert!("medium".parse::<SfpRateSelectMode>().is_err());
        assert!("long".parse::<CableSettings>().is_err());
    }

    #[test]
    fn json_uses_token() {
        assert_eq!(serde_json::to_string(&Speed::Speed2_5Gbps).unwrap(), r#""2.5Gbps""#);
        let mode: ArpMode = serde_json::from_str(r#""reply-only""#).unwrap();
        assert_eq!(mode, ArpMode::ReplyOnly);
        assert!(serde_json::from_str::<ArpMode>(r#""bogus""#).is_err());
    }
}
