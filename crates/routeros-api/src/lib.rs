// routeros-api: Async Rust client for the MikroTik RouterOS REST API.
//
// Talks to `https://<router>/rest/...` with basic auth. Request and response
// bodies are built from the scalar types in `routeros-model`, which is
// re-exported here as `model`.

pub mod auth;
pub mod client;
pub mod error;
pub mod resources;
pub mod transport;

pub use routeros_model as model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use auth::Credentials;
pub use client::{Client, ClientConfig};
pub use error::{Error, RemoteError};
pub use transport::{TlsMode, TransportConfig};

// Resource types
pub use resources::arp::{ArpEntry, ArpEntryFields, CreateArpEntryParams, UpdateArpEntryParams};
pub use resources::ethernet::{
    EthernetInterface, EthernetInterfaceFields, UpdateEthernetInterfaceParams,
};
pub use resources::ip_address::{
    CreateIpAddressParams, IpAddress, IpAddressFields, UpdateIpAddressParams,
};
pub use resources::ip_route::{CreateIpRouteParams, IpRoute, IpRouteFields, UpdateIpRouteParams};
