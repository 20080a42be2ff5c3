//! Dock Report
//!
//! The printable dock status view: every delivery still at the dock with its dock day
//! count. Deliveries in transit are left out; overdue ones are flagged and rendered in
//! red.

use std::io;

use jiff::Timestamp;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    deliveries::DeliveryRecord,
    metrics::{days_at_dock, is_overdue},
};

const COLUMN_COUNT: usize = 8;

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// A single report line.
#[derive(Debug, Clone, PartialEq)]
pub struct DockReportRow {
    /// The delivery at the dock
    pub record: DeliveryRecord,

    /// Whole days spent at the dock
    pub days_at_dock: u64,

    /// Whether the delivery reached the overdue threshold
    pub overdue: bool,
}

/// Dock status report for a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DockReport {
    rows: Vec<DockReportRow>,
    generated_at: Timestamp,
    threshold_days: u64,
}

impl DockReport {
    /// Build a report from `records`, keeping their order.
    #[must_use]
    pub fn new(records: &[DeliveryRecord], now: Timestamp, threshold_days: u64) -> Self {
        let rows = records
            .iter()
            .filter(|record| record.is_at_dock())
            .map(|record| DockReportRow {
                days_at_dock: days_at_dock(record, now),
                overdue: is_overdue(record, now, threshold_days),
                record: record.clone(),
            })
            .collect();

        Self {
            rows,
            generated_at: now,
            threshold_days,
        }
    }

    /// Report lines, one per delivery at the dock.
    #[must_use]
    pub fn rows(&self) -> &[DockReportRow] {
        &self.rows
    }

    /// Point in time the day counts were computed for.
    #[must_use]
    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }

    /// Days at the dock after which a delivery is flagged.
    #[must_use]
    pub fn threshold_days(&self) -> u64 {
        self.threshold_days
    }

    /// Number of flagged deliveries.
    #[must_use]
    pub fn overdue_count(&self) -> usize {
        self.rows.iter().filter(|row| row.overdue).count()
    }

    /// Render the report as a text table.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        writeln!(
            out,
            "Dock report at {} (overdue after {} days)",
            self.generated_at, self.threshold_days
        )?;

        let mut builder = Builder::default();

        builder.push_record([
            "Client",
            "Invoice",
            "Destination",
            "Weight",
            "Volume",
            "Status",
            "Observation",
            "Days at Dock",
        ]);

        let mut overdue_rows: SmallVec<[usize; 16]> = SmallVec::new();

        for (idx, row) in self.rows.iter().enumerate() {
            let record = &row.record;

            builder.push_record([
                record.client.clone(),
                record.invoice.clone(),
                record.destination.clone(),
                format!("{} kg", record.weight),
                format!("{} m³", record.volume),
                record.status.to_string(),
                record.observation.clone(),
                format!("{} days", row.days_at_dock),
            ]);

            if row.overdue {
                overdue_rows.push(idx + 1);
            }
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..5), Alignment::right());
        table.modify(Columns::new(7..8), Alignment::right());

        for row in overdue_rows {
            for col in 0..COLUMN_COUNT {
                table.modify((row, col), Color::FG_RED);
            }
        }

        writeln!(out, "{table}")?;

        writeln!(
            out,
            "{} at dock, {} overdue",
            self.rows.len(),
            self.overdue_count()
        )?;

        Ok(())
    }
}
