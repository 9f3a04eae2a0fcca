// Legacy API client modules
//
// Hand-written client for the controller's legacy (non-OpenAPI) endpoints,
// wrapped in the standard `{ meta: { rc, msg }, data: [...] }` envelope.

pub mod auth;
pub mod client;
pub mod models;
pub mod sites;
pub mod users;
pub mod wlans;

pub use client::LegacyClient;
