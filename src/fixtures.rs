//! Fixtures
//!
//! Delivery sets described in YAML, used by tests and by the seed command.

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::deliveries::DeliveryRecord;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Delivery not found
    #[error("Delivery not found: {0}")]
    DeliveryNotFound(String),
}

#[derive(Debug, Deserialize)]
struct DeliveriesFile {
    deliveries: Vec<DeliveryRecord>,
}

/// A named set of deliveries
#[derive(Debug, Clone)]
pub struct DeliveryFixture {
    base_path: PathBuf,
    deliveries: Vec<DeliveryRecord>,
}

impl DeliveryFixture {
    /// Create a new empty fixture with default base path
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            deliveries: Vec::new(),
        }
    }

    /// Load a fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load(name)?;

        Ok(fixture)
    }

    /// Load deliveries from `deliveries/{name}.yml`, appending them to the set
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("deliveries").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        self.deliveries.extend(Self::parse(&contents)?);

        Ok(self)
    }

    /// Parse a deliveries document
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a delivery is missing a field.
    pub fn parse(contents: &str) -> Result<Vec<DeliveryRecord>, FixtureError> {
        let file: DeliveriesFile = serde_norway::from_str(contents)?;

        Ok(file.deliveries)
    }

    /// Every loaded delivery, in file order
    #[must_use]
    pub fn deliveries(&self) -> &[DeliveryRecord] {
        &self.deliveries
    }

    /// Look up a delivery by invoice number
    ///
    /// # Errors
    ///
    /// Returns an error if no delivery carries that invoice.
    pub fn delivery(&self, invoice: &str) -> Result<&DeliveryRecord, FixtureError> {
        self.deliveries
            .iter()
            .find(|record| record.invoice == invoice)
            .ok_or_else(|| FixtureError::DeliveryNotFound(invoice.to_string()))
    }
}

impl Default for DeliveryFixture {
    fn default() -> Self {
        Self::new()
    }
}
