//! Dock Metrics
//!
//! Values derived from a record's dock arrival time and the current time. Malformed
//! arrival times never fail: they count as zero days at the dock.

use jiff::{
    Timestamp,
    civil::{Date, DateTime},
    tz::TimeZone,
};

use crate::deliveries::DeliveryRecord;

/// Days at the dock after which a delivery counts as overdue.
pub const DEFAULT_OVERDUE_THRESHOLD_DAYS: u64 = 5;

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse dock arrival text.
///
/// Accepts an RFC 3339 timestamp, or a civil date-time / date without offset which is
/// read as UTC.
#[must_use]
pub fn parse_dock_arrival(value: &str) -> Option<Timestamp> {
    let value = value.trim();

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = value.parse::<DateTime>() {
        return datetime
            .to_zoned(TimeZone::UTC)
            .ok()
            .map(|zoned| zoned.timestamp());
    }

    value
        .parse::<Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

/// Whole days between two points in time, floored and clamped at zero.
#[must_use]
pub fn elapsed_days(from: Timestamp, to: Timestamp) -> u64 {
    let seconds = to.duration_since(from).as_secs();

    u64::try_from(seconds.div_euclid(SECONDS_PER_DAY)).unwrap_or(0)
}

/// Whole days the record has spent at the dock as of `now`.
///
/// Only meaningful while the record is at the dock; see [`dock_days`].
#[must_use]
pub fn days_at_dock(record: &DeliveryRecord, now: Timestamp) -> u64 {
    record
        .dock_arrival()
        .map_or(0, |arrival| elapsed_days(arrival, now))
}

/// Days at the dock for display, `None` when the record is not at the dock.
#[must_use]
pub fn dock_days(record: &DeliveryRecord, now: Timestamp) -> Option<u64> {
    record
        .is_at_dock()
        .then(|| days_at_dock(record, now))
}

/// Whether the record has been at the dock for at least `threshold_days`.
#[must_use]
pub fn is_overdue(record: &DeliveryRecord, now: Timestamp, threshold_days: u64) -> bool {
    record.is_at_dock() && days_at_dock(record, now) >= threshold_days
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use crate::deliveries::{DeliveryStatus, DeliveryUuid};

    use super::*;

    fn record(status: DeliveryStatus, dock_arrival_time: &str) -> DeliveryRecord {
        DeliveryRecord {
            uuid: DeliveryUuid::new(),
            client: "Acme".to_string(),
            invoice: "NF-1".to_string(),
            destination: "Recife".to_string(),
            weight: 10.0,
            volume: 1.0,
            status,
            observation: String::new(),
            dock_arrival_time: dock_arrival_time.to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn now() -> Result<Timestamp, jiff::Error> {
        "2026-03-10T12:00:00Z".parse()
    }

    #[test]
    fn counts_whole_days_floored() -> TestResult {
        let record = record(DeliveryStatus::AtDock, "2026-03-07T18:00:00Z");

        // 2 days 18 hours
        assert_eq!(days_at_dock(&record, now()?), 2);

        Ok(())
    }

    #[test]
    fn future_arrival_clamps_to_zero() -> TestResult {
        let record = record(DeliveryStatus::AtDock, "2026-04-01T00:00:00Z");

        assert_eq!(days_at_dock(&record, now()?), 0);

        Ok(())
    }

    #[test]
    fn malformed_arrival_is_zero_days() -> TestResult {
        for text in ["", "not a date", "2026-13-45", "yesterday"] {
            let record = record(DeliveryStatus::AtDock, text);

            assert_eq!(days_at_dock(&record, now()?), 0, "input: {text:?}");
            assert!(!is_overdue(&record, now()?, 1), "input: {text:?}");
        }

        Ok(())
    }

    #[test]
    fn accepts_civil_dates_as_utc() -> TestResult {
        assert_eq!(
            parse_dock_arrival("2026-03-01"),
            Some("2026-03-01T00:00:00Z".parse()?)
        );
        assert_eq!(
            parse_dock_arrival("2026-03-01T06:30:00"),
            Some("2026-03-01T06:30:00Z".parse()?)
        );

        Ok(())
    }

    #[test]
    fn overdue_respects_threshold() -> TestResult {
        let now = now()?;
        let arrival = now.checked_sub(SignedDuration::from_hours(6 * 24))?;
        let record = record(DeliveryStatus::AtDock, &arrival.to_string());

        assert!(is_overdue(&record, now, DEFAULT_OVERDUE_THRESHOLD_DAYS));
        assert!(!is_overdue(&record, now, 7));

        Ok(())
    }

    #[test]
    fn in_transit_is_never_overdue() -> TestResult {
        let record = record(DeliveryStatus::InTransit, "2020-01-01T00:00:00Z");

        assert!(!is_overdue(&record, now()?, 0));
        assert!(!is_overdue(&record, now()?, DEFAULT_OVERDUE_THRESHOLD_DAYS));
        assert_eq!(dock_days(&record, now()?), None);

        Ok(())
    }

    #[test]
    fn dock_days_present_while_at_dock() -> TestResult {
        let record = record(DeliveryStatus::AtDock, "2026-03-01T12:00:00Z");

        assert_eq!(dock_days(&record, now()?), Some(9));

        Ok(())
    }

    #[test]
    fn days_never_decrease_as_time_advances() -> TestResult {
        let record = record(DeliveryStatus::AtDock, "2026-03-01T07:45:00Z");
        let start: Timestamp = "2026-02-27T00:00:00Z".parse()?;

        let mut previous = 0;

        for hour in 0..(24 * 20) {
            let now = start.checked_add(SignedDuration::from_hours(hour))?;
            let days = days_at_dock(&record, now);

            assert!(days >= previous, "days went backwards at hour {hour}");

            previous = days;
        }

        Ok(())
    }
}
