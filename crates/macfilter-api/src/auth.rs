/// The platform type of the UniFi controller.
///
/// Determines URL prefixes and login paths for the legacy API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPlatform {
    /// UniFi OS device (UDM, UCG, Cloud Key Gen2+) -- port 443, `/proxy/network/` prefix.
    UnifiOs,
    /// Standalone Network Application (Java) -- port 8443, no prefix.
    ClassicController,
}

impl ControllerPlatform {
    /// The path prefix for legacy API endpoints.
    pub fn legacy_prefix(self) -> &'static str {
        match self {
            Self::UnifiOs => "/proxy/network",
            Self::ClassicController => "",
        }
    }

    /// The login endpoint path.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/login",
            Self::ClassicController => "/api/login",
        }
    }

    /// The logout endpoint path.
    pub fn logout_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/logout",
            Self::ClassicController => "/api/logout",
        }
    }
}
