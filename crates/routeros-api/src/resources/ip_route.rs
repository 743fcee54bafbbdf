// Routing table entries under `/ip/route`.

use routeros_model::{
    CheckGatewayMode, Filter, Gateway, Id, IpAddr, IpPrefix, Query, empty_as_none, field_set,
    stringly,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item_path;
use crate::client::Client;
use crate::error::Error;

const MENU: &str = "ip/route";

/// One route, static or learned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IpRoute {
    #[serde(rename = ".id")]
    pub id: Id,
    #[serde(default, with = "stringly")]
    pub active: bool,
    #[serde(with = "stringly")]
    pub distance: u8,
    pub dst_address: IpPrefix,
    #[serde(default, with = "stringly")]
    pub disabled: bool,
    #[serde(default, with = "stringly")]
    pub dynamic: bool,
    #[serde(default, with = "stringly")]
    pub ecmp: bool,
    /// `None` for blackhole routes.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub gateway: Option<Gateway>,
    #[serde(default, with = "stringly")]
    pub hw_offloaded: bool,
    /// The resolved next hop, reported once the route is active.
    #[serde(
        rename = "immediate-gw",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub immediate_gateway: Option<Gateway>,
    #[serde(default, with = "stringly")]
    pub inactive: bool,
    #[serde(default, with = "stringly")]
    pub ospf: bool,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub pref_src: Option<IpAddr>,
    #[serde(default)]
    pub routing_table: String,
    #[serde(with = "stringly")]
    pub scope: u8,
    #[serde(default, with = "stringly")]
    pub suppress_hw_offload: bool,
    #[serde(with = "stringly")]
    pub target_scope: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub blackhole: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_gateway: Option<CheckGatewayMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_interface: Option<String>,
}

/// Body of `PUT /ip/route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateIpRouteParams {
    pub dst_address: IpPrefix,
    pub gateway: Gateway,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub distance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pref_src: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_table: Option<String>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub scope: Option<u8>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub suppress_hw_offload: Option<bool>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub target_scope: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub blackhole: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_gateway: Option<CheckGatewayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf_interface: Option<String>,
}

impl CreateIpRouteParams {
    /// A route to `dst_address` via `gateway` with router defaults for the rest.
    pub fn new(dst_address: IpPrefix, gateway: impl Into<Gateway>) -> Self {
        Self {
            dst_address,
            gateway: gateway.into(),
            disabled: None,
            distance: None,
            pref_src: None,
            routing_table: None,
            scope: None,
            suppress_hw_offload: None,
            target_scope: None,
            comment: None,
            blackhole: None,
            check_gateway: None,
            vrf_interface: None,
        }
    }
}

/// Body of `PATCH /ip/route/{id}`. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateIpRouteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_address: Option<IpPrefix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub distance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pref_src: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_table: Option<String>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub scope: Option<u8>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub suppress_hw_offload: Option<bool>,
    #[serde(with = "stringly::option", skip_serializing_if = "Option::is_none")]
    pub target_scope: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_gateway: Option<CheckGatewayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf_interface: Option<String>,
}

field_set! {
    /// Filterable properties of [`IpRoute`].
    pub struct IpRouteFields {
        ACTIVE: bool => "active",
        DISTANCE: u8 => "distance",
        DST_ADDRESS: IpPrefix => "dst-address",
        DISABLED: bool => "disabled",
        DYNAMIC: bool => "dynamic",
        ECMP: bool => "ecmp",
        GATEWAY: Gateway => "gateway",
        HW_OFFLOADED: bool => "hw-offloaded",
        IMMEDIATE_GATEWAY: Gateway => "immediate-gw",
        INACTIVE: bool => "inactive",
        OSPF: bool => "ospf",
        PREF_SRC: IpAddr => "pref-src",
        ROUTING_TABLE: String => "routing-table",
        SCOPE: u8 => "scope",
        SUPPRESS_HW_OFFLOAD: bool => "suppress-hw-offload",
        TARGET_SCOPE: u8 => "target-scope",
        COMMENT: String => "comment",
        BLACKHOLE: bool => "blackhole",
        CHECK_GATEWAY: CheckGatewayMode => "check-gateway",
        VRF_INTERFACE: String => "vrf-interface",
    }
}

impl Client {
    /// `GET /ip/route`
    pub async fn list_ip_routes(&self) -> Result<Vec<IpRoute>, Error> {
        self.get(MENU).await
    }

    /// List routes matching every filter.
    ///
    /// `POST /ip/route/print`
    pub async fn filter_ip_routes(&self, filters: &[Filter]) -> Result<Vec<IpRoute>, Error> {
        self.print(MENU, &Query::from_filters(filters)).await
    }

    /// `GET /ip/route/{id}`
    pub async fn get_ip_route(&self, id: Id) -> Result<IpRoute, Error> {
        self.get(&item_path(MENU, id)).await
    }

    /// Create a route and return it as stored.
    ///
    /// `PUT /ip/route`
    pub async fn create_ip_route(&self, params: &CreateIpRouteParams) -> Result<IpRoute, Error> {
        debug!(dst = %params.dst_address, gateway = %params.gateway, "creating IP route");
        self.put(MENU, params).await
    }

    /// `PATCH /ip/route/{id}`
    pub async fn update_ip_route(
        &self,
        id: Id,
        params: &UpdateIpRouteParams,
    ) -> Result<IpRoute, Error> {
        debug!(%id, "updating IP route");
        self.patch(&item_path(MENU, id), params).await
    }

    /// `DELETE /ip/route/{id}`
    pub async fn delete_ip_route(&self, id: Id) -> Result<(), Error> {
        debug!(%id, "deleting IP route");
        self.delete(&item_path(MENU, id)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_blackhole_route_without_gateway() {
        let route: IpRoute = serde_json::from_value(json!({
            ".id": "*8000000a",
            "active": "true",
            "blackhole": "true",
            "distance": "1",
            "dst-address": "203.0.113.0/24",
            "dynamic": "false",
            "pref-src": "",
            "routing-table": "main",
            "scope": "30",
            "target-scope": "10"
        }))
        .unwrap();
        assert_eq!(route.gateway, None);
        assert_eq!(route.pref_src, None);
        assert_eq!(route.blackhole, Some(true));
        assert_eq!(route.distance, 1);
    }

    #[test]
    fn create_omits_unset_options() {
        let params = CreateIpRouteParams::new(
            "0.0.0.0/0".parse().unwrap(),
            "10.0.0.1%ether1".parse::<Gateway>().unwrap(),
        );
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "dst-address": "0.0.0.0/0", "gateway": "10.0.0.1%ether1" })
        );
    }

    #[test]
    fn vrf_filter_name() {
        assert_eq!(IpRouteFields::VRF_INTERFACE.name(), "vrf-interface");
    }
}
