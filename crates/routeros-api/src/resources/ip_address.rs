// Interface addresses under `/ip/address`.

use routeros_model::{Filter, Id, IpAddr, IpPrefix, Query, field_set, stringly};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item_path;
use crate::client::Client;
use crate::error::Error;

const MENU: &str = "ip/address";

/// An address assigned to an interface, e.g. `192.168.88.1/24` on `bridge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IpAddress {
    #[serde(rename = ".id")]
    pub id: Id,
    /// The interface the address is really bound to (differs from
    /// `interface` for slave ports).
    #[serde(default)]
    pub actual_interface: String,
    /// Host address with the network's prefix length.
    pub address: IpPrefix,
    #[serde(default, with = "stringly")]
    pub disabled: bool,
    #[serde(default, with = "stringly")]
    pub dynamic: bool,
    #[serde(default)]
    pub interface: String,
    #[serde(default, with = "stringly")]
    pub invalid: bool,
    pub network: IpAddr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body of `PUT /ip/address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateIpAddressParams {
    pub address: IpPrefix,
    #[serde(with = "stringly")]
    pub disabled: bool,
    pub interface: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateIpAddressParams {
    pub fn new(address: IpPrefix, interface: impl Into<String>) -> Self {
        Self {
            address,
            disabled: false,
            interface: interface.into(),
            comment: None,
        }
    }
}

/// Body of `PATCH /ip/address/{id}`. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateIpAddressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<IpPrefix>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

field_set! {
    /// Filterable properties of [`IpAddress`].
    pub struct IpAddressFields {
        ACTUAL_INTERFACE: String => "actual-interface",
        ADDRESS: IpPrefix => "address",
        DISABLED: bool => "disabled",
        DYNAMIC: bool => "dynamic",
        INTERFACE: String => "interface",
        INVALID: bool => "invalid",
        NETWORK: IpAddr => "network",
        COMMENT: String => "comment",
    }
}

impl Client {
    /// `GET /ip/address`
    pub async fn list_ip_addresses(&self) -> Result<Vec<IpAddress>, Error> {
        self.get(MENU).await
    }

    /// `POST /ip/address/print`
    pub async fn filter_ip_addresses(&self, filters: &[Filter]) -> Result<Vec<IpAddress>, Error> {
        self.print(MENU, &Query::from_filters(filters)).await
    }

    /// `GET /ip/address/{id}`
    pub async fn get_ip_address(&self, id: Id) -> Result<IpAddress, Error> {
        self.get(&item_path(MENU, id)).await
    }

    /// `PUT /ip/address`
    pub async fn create_ip_address(&self, params: &CreateIpAddressParams) -> Result<IpAddress, Error> {
        debug!(address = %params.address, interface = %params.interface, "creating IP address");
        self.put(MENU, params).await
    }

    /// `PATCH /ip/address/{id}`
    pub async fn update_ip_address(
        &self,
        id: Id,
        params: &UpdateIpAddressParams,
    ) -> Result<IpAddress, Error> {
        debug!(%id, "updating IP address");
        self.patch(&item_path(MENU, id), params).await
    }

    /// `DELETE /ip/address/{id}`
    pub async fn delete_ip_address(&self, id: Id) -> Result<(), Error> {
        debug!(%id, "deleting IP address");
        self.delete(&item_path(MENU, id)).await
    }
}
