// ARP table entries under `/ip/arp`.

use routeros_model::{Filter, Id, IpAddr, MacAddress, Query, empty_as_none, field_set, stringly};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item_path;
use crate::client::Client;
use crate::error::Error;

const MENU: &str = "ip/arp";

/// One row of the ARP table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArpEntry {
    #[serde(rename = ".id")]
    pub id: Id,
    /// Entry was added by the DHCP server.
    #[serde(rename = "DHCP", default, with = "stringly")]
    pub dhcp: bool,
    pub address: IpAddr,
    #[serde(default, with = "stringly")]
    pub complete: bool,
    #[serde(default, with = "stringly")]
    pub disabled: bool,
    #[serde(default, with = "stringly")]
    pub dynamic: bool,
    #[serde(default)]
    pub interface: String,
    #[serde(default, with = "stringly")]
    pub invalid: bool,
    /// Absent while resolution is still pending.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub mac_address: Option<MacAddress>,
    #[serde(default, with = "stringly")]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body of `PUT /ip/arp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateArpEntryParams {
    pub address: IpAddr,
    #[serde(with = "stringly")]
    pub disabled: bool,
    pub interface: String,
    pub mac_address: MacAddress,
    #[serde(with = "stringly")]
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateArpEntryParams {
    /// An enabled, unpublished static entry.
    pub fn new(address: IpAddr, interface: impl Into<String>, mac_address: MacAddress) -> Self {
        Self {
            address,
            disabled: false,
            interface: interface.into(),
            mac_address,
            published: false,
            comment: None,
        }
    }
}

/// Body of `PATCH /ip/arp/{id}`. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateArpEntryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<IpAddr>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<MacAddress>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

field_set! {
    /// Filterable properties of [`ArpEntry`].
    pub struct ArpEntryFields {
        DHCP: String => "DHCP",
        ADDRESS: IpAddr => "address",
        COMPLETE: bool => "complete",
        DISABLED: bool => "disabled",
        DYNAMIC: bool => "dynamic",
        INTERFACE: String => "interface",
        INVALID: bool => "invalid",
        MAC_ADDRESS: MacAddress => "mac-address",
        PUBLISHED: bool => "published",
        COMMENT: String => "comment",
    }
}

impl Client {
    /// List every ARP entry.
    ///
    /// `GET /ip/arp`
    pub async fn list_arp_entries(&self) -> Result<Vec<ArpEntry>, Error> {
        self.get(MENU).await
    }

    /// List ARP entries matching every filter. No filters lists all.
    ///
    /// `POST /ip/arp/print`
    pub async fn filter_arp_entries(&self, filters: &[Filter]) -> Result<Vec<ArpEntry>, Error> {
        self.print(MENU, &Query::from_filters(filters)).await
    }

    /// `GET /ip/arp/{id}`
    pub async fn get_arp_entry(&self, id: Id) -> Result<ArpEntry, Error> {
        self.get(&item_path(MENU, id)).await
    }

    /// Create a static entry and return it as stored.
    ///
    /// `PUT /ip/arp`
    pub async fn create_arp_entry(&self, params: &CreateArpEntryParams) -> Result<ArpEntry, Error> {
        debug!(address = %params.address, interface = %params.interface, "creating ARP entry");
        self.put(MENU, params).await
    }

    /// Apply `params` and return the entry's new state.
    ///
    /// `PATCH /ip/arp/{id}`
    pub async fn update_arp_entry(
        &self,
        id: Id,
        params: &UpdateArpEntryParams,
    ) -> Result<ArpEntry, Error> {
        debug!(%id, "updating ARP entry");
        self.patch(&item_path(MENU, id), params).await
    }

    /// `DELETE /ip/arp/{id}`
    pub async fn delete_arp_entry(&self, id: Id) -> Result<(), Error> {
        debug!(%id, "deleting ARP entry");
        self.delete(&item_path(MENU, id)).await
    }
}
