// ── Domain model ──
//
// Canonical types built from legacy API payloads. MAC normalization happens
// here, once, at ingestion; everything downstream compares canonical values.

pub mod device;
pub mod entry;
pub mod mac;
pub mod site;
pub mod wlan;

pub use device::KnownDevice;
pub use entry::{Label, MacEntry};
pub use mac::MacAddress;
pub use site::Site;
pub use wlan::{FilterPolicy, WlanProfile};
