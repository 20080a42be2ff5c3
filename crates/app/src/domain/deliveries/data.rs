//! Deliveries Data

use jiff::Timestamp;
use thiserror::Error;

use crate::domain::deliveries::DeliveryStatus;

/// Reasons a new delivery is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDelivery {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be a finite, non-negative number")]
    InvalidQuantity(&'static str),
}

/// New Delivery Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub client: String,
    pub invoice: String,
    pub destination: String,
    pub weight: f64,
    pub volume: f64,
    pub status: DeliveryStatus,
    pub observation: String,
    pub dock_arrival_time: Timestamp,
}

impl NewDelivery {
    /// A delivery arriving at the dock now, with no observation.
    pub fn at_dock(
        client: impl Into<String>,
        invoice: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
        volume: f64,
    ) -> Self {
        Self {
            client: client.into(),
            invoice: invoice.into(),
            destination: destination.into(),
            weight,
            volume,
            status: DeliveryStatus::AtDock,
            observation: String::new(),
            dock_arrival_time: Timestamp::now(),
        }
    }

    /// Check required text and quantities.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), InvalidDelivery> {
        for (name, value) in [
            ("client", &self.client),
            ("invoice", &self.invoice),
            ("destination", &self.destination),
        ] {
            if value.trim().is_empty() {
                return Err(InvalidDelivery::MissingField(name));
            }
        }

        for (name, value) in [("weight", self.weight), ("volume", self.volume)] {
            if !value.is_finite() || value.is_sign_negative() {
                return Err(InvalidDelivery::InvalidQuantity(name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deliveries_default_to_the_dock() {
        let delivery = NewDelivery::at_dock("Acme", "NF-1", "Recife", 10.0, 1.0);

        assert_eq!(delivery.status, DeliveryStatus::AtDock);
        assert!(delivery.observation.is_empty());
        assert_eq!(delivery.validate(), Ok(()));
    }

    #[test]
    fn blank_text_is_rejected() {
        let delivery = NewDelivery::at_dock("Acme", "  ", "Recife", 10.0, 1.0);

        assert_eq!(
            delivery.validate(),
            Err(InvalidDelivery::MissingField("invoice"))
        );
    }

    #[test]
    fn negative_and_non_finite_quantities_are_rejected() {
        let negative = NewDelivery::at_dock("Acme", "NF-1", "Recife", -1.0, 1.0);
        let infinite = NewDelivery::at_dock("Acme", "NF-1", "Recife", 1.0, f64::INFINITY);
        let nan = NewDelivery::at_dock("Acme", "NF-1", "Recife", f64::NAN, 1.0);

        assert_eq!(
            negative.validate(),
            Err(InvalidDelivery::InvalidQuantity("weight"))
        );
        assert_eq!(
            infinite.validate(),
            Err(InvalidDelivery::InvalidQuantity("volume"))
        );
        assert_eq!(nan.validate(), Err(InvalidDelivery::InvalidQuantity("weight")));
    }

    #[test]
    fn negative_zero_is_rejected_but_zero_is_kept() {
        let negative_zero = NewDelivery::at_dock("Acme", "NF-1", "Recife", 1.0, -0.0);
        let zero = NewDelivery::at_dock("Acme", "NF-1", "Recife", 0.0, 0.0);

        assert_eq!(
            negative_zero.validate(),
            Err(InvalidDelivery::InvalidQuantity("volume"))
        );
        assert_eq!(zero.validate(), Ok(()));
    }
}
