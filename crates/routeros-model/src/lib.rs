// routeros-model: Value codecs and typed query filters for the RouterOS REST API.
//
// Every property RouterOS reports travels as a JSON string. The scalars here
// parse that text strictly, render it canonically, and plug into serde so
// resource structs can use them directly.

mod codec;
mod duration;
mod error;
mod ethernet;
mod identity;
mod ip;
pub mod query;
mod route;
mod switch;
mod token;

// ── Primary re-exports ──────────────────────────────────────────────
pub use codec::{empty_as_none, stringly};
pub use error::{MalformedValue, ValueKind};

// Scalars
pub use duration::{Duration, DurationWithAuto};
pub use identity::{Id, MacAddress};
pub use ip::{IpAddr, IpPrefix};
pub use route::{CheckGatewayMode, Gateway};

// Token enumerations
pub use ethernet::{Advertise, ArpMode, CableSettings, ComboMode, FecMode, SfpRateSelectMode, Speed};
pub use switch::{Status, ToggleWithAuto, ToggleWithDefault};

// Query builder
pub use query::{Field, Filter, Query};
