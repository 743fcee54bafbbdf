// Physical ethernet ports under `/interface/ethernet`.
//
// Ports exist as long as the hardware does, so the menu only supports
// reading and updating.

use routeros_model::{
    Advertise, ArpMode, CableSettings, ComboMode, Duration, DurationWithAuto, FecMode, Filter, Id,
    MacAddress, Query, SfpRateSelectMode, Speed, Status, ToggleWithAuto, ToggleWithDefault,
    field_set, stringly,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item_path;
use crate::client::Client;
use crate::error::Error;

const MENU: &str = "interface/ethernet";

/// Configuration and counters of one ethernet port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EthernetInterface {
    #[serde(rename = ".id")]
    pub id: Id,
    #[serde(default)]
    pub advertise: Advertise,
    #[serde(rename = "arp")]
    pub arp_mode: ArpMode,
    pub arp_timeout: DurationWithAuto,
    #[serde(default, with = "stringly")]
    pub auto_negotiation: bool,
    pub cable_settings: CableSettings,
    #[serde(default)]
    pub default_name: String,
    #[serde(default, with = "stringly")]
    pub disable_running_check: bool,
    #[serde(default, with = "stringly")]
    pub disabled: bool,
    #[serde(default, with = "stringly")]
    pub full_duplex: bool,
    pub loop_protect: ToggleWithDefault,
    pub loop_protect_disable_time: Duration,
    pub loop_protect_send_interval: Duration,
    pub loop_protect_status: Status,
    pub mac_address: MacAddress,
    #[serde(with = "stringly")]
    pub mtu: u16,
    pub name: String,
    pub orig_mac_address: MacAddress,
    #[serde(default, with = "stringly")]
    pub running: bool,
    #[serde(default, with = "stringly")]
    pub rx_bytes: u64,
    #[serde(default, with = "stringly")]
    pub rx_drop: u64,
    #[serde(default, with = "stringly")]
    pub rx_packet: u64,
    pub speed: Speed,
    #[serde(default, with = "stringly")]
    pub tx_bytes: u64,
    #[serde(default, with = "stringly")]
    pub tx_packet: u64,

    // Hardware-dependent properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo_mode: Option<ComboMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_mode: Option<FecMode>,
    #[serde(default, with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub l2mtu: Option<u16>,
    #[serde(default, with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub mdix_enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx_flow_control: Option<ToggleWithAuto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfp_rate_select: Option<SfpRateSelectMode>,
    /// Degrees Celsius.
    #[serde(default, with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub sfp_shutdown_temperature: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_flow_control: Option<ToggleWithAuto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body of `PATCH /interface/ethernet/{id}`. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateEthernetInterfaceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertise: Option<Advertise>,
    #[serde(rename = "arp", skip_serializing_if = "Option::is_none")]
    pub arp_mode: Option<ArpMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arp_timeout: Option<DurationWithAuto>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub auto_negotiation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cable_settings: Option<CableSettings>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub disable_running_check: Option<bool>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_protect: Option<ToggleWithDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_protect_disable_time: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_protect_send_interval: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<MacAddress>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_mac_address: Option<MacAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo_mode: Option<ComboMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fec_mode: Option<FecMode>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub l2mtu: Option<u16>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub mdix_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_flow_control: Option<ToggleWithAuto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfp_rate_select: Option<SfpRateSelectMode>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub sfp_shutdown_temperature: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_flow_control: Option<ToggleWithAuto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

field_set! {
    /// Filterable properties of [`EthernetInterface`].
    pub struct EthernetInterfaceFields {
        ADVERTISE: Advertise => "advertise",
        ARP_MODE: ArpMode => "arp",
        ARP_TIMEOUT: DurationWithAuto => "arp-timeout",
        AUTO_NEGOTIATION: bool => "auto-negotiation",
        CABLE_SETTINGS: CableSettings => "cable-settings",
        DEFAULT_NAME: String => "default-name",
        DISABLE_RUNNING_CHECK: bool => "disable-running-check",
        DISABLED: bool => "disabled",
        FULL_DUPLEX: bool => "full-duplex",
        LOOP_PROTECT: ToggleWithDefault => "loop-protect",
        LOOP_PROTECT_DISABLE_TIME: Duration => "loop-protect-disable-time",
        LOOP_PROTECT_SEND_INTERVAL: Duration => "loop-protect-send-interval",
        LOOP_PROTECT_STATUS: Status => "loop-protect-status",
        MAC_ADDRESS: MacAddress => "mac-address",
        MTU: u16 => "mtu",
        NAME: String => "name",
        ORIG_MAC_ADDRESS: MacAddress => "orig-mac-address",
        RUNNING: bool => "running",
        RX_BYTES: u64 => "rx-bytes",
        RX_DROP: u64 => "rx-drop",
        RX_PACKET: u64 => "rx-packet",
        SPEED: Speed => "speed",
        TX_BYTES: u64 => "tx-bytes",
        TX_PACKET: u64 => "tx-packet",
        COMBO_MODE: ComboMode => "combo-mode",
        FEC_MODE: FecMode => "fec-mode",
        L2MTU: u16 => "l2mtu",
        MDIX_ENABLE: bool => "mdix-enable",
        RX_FLOW_CONTROL: ToggleWithAuto => "rx-flow-control",
        SFP_RATE_SELECT: SfpRateSelectMode => "sfp-rate-select",
        SFP_SHUTDOWN_TEMPERATURE: u8 => "sfp-shutdown-temperature",
        TX_FLOW_CONTROL: ToggleWithAuto => "tx-flow-control",
        COMMENT: String => "comment",
    }
}

impl Client {
    /// `GET /interface/ethernet`
    pub async fn list_ethernet_interfaces(&self) -> Result<Vec<EthernetInterface>, Error> {
        self.get(MENU).await
    }

    /// List ports matching every filter.
    ///
    /// `POST /interface/ethernet/print`
    pub async fn filter_ethernet_interfaces(
        &self,
        filters: &[Filter],
    ) -> Result<Vec<EthernetInterface>, Error> {
        self.print(MENU, &Query::from_filters(filters)).await
    }

    /// `GET /interface/ethernet/{id}`
    pub async fn get_ethernet_interface(&self, id: Id) -> Result<EthernetInterface, Error> {
        self.get(&item_path(MENU, id)).await
    }

    /// Apply `params` and return the port's new state.
    ///
    /// `PATCH /interface/ethernet/{id}`
    pub async fn update_ethernet_interface(
        &self,
        id: Id,
        params: &UpdateEthernetInterfaceParams,
    ) -> Result<EthernetInterface, Error> {
        debug!(%id, "updating ethernet interface");
        self.patch(&item_path(MENU, id), params).await
    }
}
