//! Shipment tracking records.

use chrono::{DateTime, Utc};
use gls_core::{ShipmentId, ShipmentStatus};
use serde::{Deserialize, Serialize};

use super::omit_empty;

/// A tracked shipment.
///
/// Looked up by `tracking_number`, not by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    /// Customer-facing number, e.g. `GLS001234567`.
    pub tracking_number: String,
    pub status: ShipmentStatus,
    pub origin: String,
    pub destination: String,
    /// Free-form estimate as quoted to the customer (e.g. `2025-09-15`).
    pub estimated_delivery: Option<String>,
    pub current_location: Option<String>,
    pub last_update: DateTime<Utc>,
}

/// Fields supplied when creating a [`Shipment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShipment {
    pub tracking_number: String,
    pub status: ShipmentStatus,
    pub origin: String,
    pub destination: String,
    pub estimated_delivery: Option<String>,
    pub current_location: Option<String>,
}

impl Shipment {
    pub(crate) fn create(new: NewShipment, last_update: DateTime<Utc>) -> Self {
        Self {
            id: ShipmentId::generate(),
            tracking_number: new.tracking_number,
            status: new.status,
            origin: new.origin,
            destination: new.destination,
            estimated_delivery: omit_empty(new.estimated_delivery),
            current_location: omit_empty(new.current_location),
            last_update,
        }
    }

    /// Apply a status update.
    ///
    /// `current_location` only replaces the existing value when a non-empty
    /// location is given. `last_update` is always moved to `now`.
    pub(crate) fn apply_status(
        &mut self,
        status: ShipmentStatus,
        current_location: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.status = status;
        if let Some(location) = omit_empty(current_location) {
            self.current_location = Some(location);
        }
        self.last_update = now;
    }
}
