//! Shipment status values.

use serde::{Deserialize, Serialize};

/// Error returned when a status string is blank.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("shipment status cannot be blank: {0:?}")]
pub struct ParseShipmentStatusError(pub String);

/// Where a shipment is in its journey.
///
/// The tracking page knows five labels and has an icon for each. Operators
/// may record any other label (e.g. `"Out for Delivery"`); it is kept
/// verbatim as [`ShipmentStatus::Other`]. On the wire every status is its
/// plain label string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShipmentStatus {
    /// Booked, not yet handed to a carrier.
    #[default]
    Processing,
    /// Handed to the carrier at origin.
    Shipped,
    #[serde(rename = "In Transit")]
    InTransit,
    /// Held at the destination customs authority.
    #[serde(rename = "Customs Clearance")]
    CustomsClearance,
    Delivered,
    /// Any label outside the known five.
    #[serde(untagged)]
    Other(String),
}

impl ShipmentStatus {
    /// Every known status, in journey order.
    pub const ALL: [Self; 5] = [
        Self::Processing,
        Self::Shipped,
        Self::InTransit,
        Self::CustomsClearance,
        Self::Delivered,
    ];

    /// Map a label to a status. Known labels must match exactly; anything
    /// else becomes [`ShipmentStatus::Other`].
    #[must_use]
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .unwrap_or(Self::Other(label))
    }

    /// The label used on the wire and on the tracking page.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::InTransit => "In Transit",
            Self::CustomsClearance => "Customs Clearance",
            Self::Delivered => "Delivered",
            Self::Other(label) => label,
        }
    }

    /// Whether this is one of the five labels the tracking page has an icon for.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether the shipment has reached its final state.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ShipmentStatus {
    type Err = ParseShipmentStatusError;

    /// Parses operator input: surrounding whitespace is ignored and known
    /// labels match case-insensitively. Only a blank string is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Err(ParseShipmentStatusError(s.to_string()));
        }
        Ok(Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| Self::Other(wanted.to_string())))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_serde() {
        for status in ShipmentStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "In Transit".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::InTransit
        );
        assert_eq!(
            " customs clearance ".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::CustomsClearance
        );
        assert_eq!(
            " Lost at sea ".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::Other("Lost at sea".to_string())
        );
        assert!("   ".parse::<ShipmentStatus>().is_err());
    }

    #[test]
    fn test_deserialize_label() {
        let status: ShipmentStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(status, ShipmentStatus::Delivered);
        assert!(status.is_final());
        assert!(status.is_known());
    }

    #[test]
    fn test_unknown_label_round_trips() {
        let status: ShipmentStatus = serde_json::from_str("\"Out for Delivery\"").unwrap();
        assert_eq!(status, ShipmentStatus::Other("Out for Delivery".to_string()));
        assert!(!status.is_known());
        assert!(!status.is_final());
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            "\"Out for Delivery\""
        );

        // Exact match only on the wire; a differently-cased label is kept as is.
        let status: ShipmentStatus = serde_json::from_str("\"InTransit\"").unwrap();
        assert_eq!(status.label(), "InTransit");
    }
}
