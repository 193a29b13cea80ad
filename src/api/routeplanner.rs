use serde::Serialize;

/// IP rotation strategy the backend reports as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePlannerKind {
    /// Switches the IP on ban.
    RotatingIp,
    /// Selects random IP addresses from the given block.
    BalancingIp,
    /// Switches the IP on every clock update.
    NanoIp,
    /// Switches the IP on every clock update and rotates to the next IP
    /// block on ban as a fallback.
    RotatingNanoIp,
}

impl RoutePlannerKind {
    /// Resolves the wire `class` discriminator to a planner kind.
    ///
    /// Matching is exact and case-sensitive. An unrecognized class name
    /// resolves to `None` so that backends introducing new planner types
    /// keep working against older consumers.
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "RotatingIpRoutePlanner" => Some(Self::RotatingIp),
            "BalancingIpRoutePlanner" => Some(Self::BalancingIp),
            "NanoIpRoutePlanner" => Some(Self::NanoIp),
            "RotatingNanoIpRoutePlanner" => Some(Self::RotatingNanoIp),
            _ => None,
        }
    }
}

/// Route planner status report returned by the backend's management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatus {
    /// Raw planner class name exactly as transmitted. Kept so re-encoding
    /// reproduces the wire payload even for class names [`RoutePlannerKind`]
    /// does not know.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Strategy-specific diagnostics, absent when the backend sent none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<RouteStatusDetails>,
}

impl RouteStatus {
    /// The active planner kind, or `None` when the class is missing or
    /// unrecognized.
    pub fn kind(&self) -> Option<RoutePlannerKind> {
        self.class.as_deref().and_then(RoutePlannerKind::from_class)
    }
}

/// Diagnostic details of the active route planner.
///
/// Every field is optional on the wire. Which fields the backend actually
/// populates depends on the planner kind; fields outside a kind's set may
/// still arrive with default values and are preserved as decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatusDetails {
    /// The IP block the planner draws addresses from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_block: Option<IpBlock>,
    /// Addresses the backend has marked as failing, in wire order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failing_addresses: Vec<FailedAddress>,
    /// Number of rotations since the backend started. `RotatingIp` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_index: Option<String>,
    /// Current offset in the IP block. `RotatingIp` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_index: Option<String>,
    /// IP address currently in use. `RotatingIp` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_address: Option<String>,
    /// Current offset in the IP block. `NanoIp` and `RotatingNanoIp` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_address_index: Option<i64>,
    /// The /64 block ips are chosen from, increases on each ban.
    /// `RotatingNanoIp` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_index: Option<String>,
}

/// An IP block available to the route planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpBlock {
    /// Address family label, e.g. `Inet6Address`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    /// Block size as transmitted. Numeric-as-text, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// A single address the backend has marked as failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// When the address started failing, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failing_timestamp: Option<u64>,
    /// The backend's own human-readable rendering of the failing instant.
    /// Stored as given, never derived from `failing_timestamp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failing_time: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
