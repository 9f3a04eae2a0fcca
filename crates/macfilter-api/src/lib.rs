// macfilter-api: Async client for the UniFi controller's legacy JSON API
//
// Only the endpoints needed to read a WLAN's MAC filter list are modelled:
// session login/logout, site listing, WLAN configuration, and the known
// client catalogue.

pub mod auth;
pub mod error;
pub mod legacy;
pub mod transport;

pub use auth::ControllerPlatform;
pub use error::Error;
pub use legacy::LegacyClient;
pub use legacy::models::{LegacySite, LegacyUser, LegacyWlan};
pub use transport::{TlsMode, TransportConfig};
