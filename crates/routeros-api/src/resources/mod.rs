// RouterOS menus exposed by the client
//
// Each module carries the response struct, create/update parameter structs,
// the filterable field set, and the `Client` methods for one menu path.
// Bodies follow the RouterOS convention: every scalar is a JSON string.

pub mod arp;
pub mod ethernet;
pub mod ip_address;
pub mod ip_route;

use routeros_model::Id;

/// Path of a single object under a menu: `ip/arp` + `*1a` → `ip/arp/*1a`.
fn item_path(menu: &str, id: Id) -> String {
    format!("{menu}/{id}")
}
