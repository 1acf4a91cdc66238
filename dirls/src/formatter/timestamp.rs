use crate::config::TimeZoneChoice;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const EPOCH_UTC: &str = "1970-01-01 00:00:00";

/// Renders `time` in `zone`. Times chrono cannot represent fall back to the
/// epoch, the same default used when the mtime cannot be read at all.
pub fn format_timestamp(time: SystemTime, zone: TimeZoneChoice) -> String {
    unix_parts(time)
        .and_then(|(secs, nanos)| render(secs, nanos, zone))
        .unwrap_or_else(|| {
            log::debug!("modification time {:?} out of range, using epoch", time);
            render(0, 0, zone).unwrap_or_else(|| EPOCH_UTC.to_string())
        })
}

/// Seconds and nanoseconds relative to the epoch, with nanos always positive.
fn unix_parts(time: SystemTime) -> Option<(i64, u32)> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => Some((i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => Some((-secs, 0)),
                nanos => Some((-secs - 1, 1_000_000_000 - nanos)),
            }
        }
    }
}

fn render(secs: i64, nanos: u32, zone: TimeZoneChoice) -> Option<String> {
    match zone {
        TimeZoneChoice::Local => Local
            .timestamp_opt(secs, nanos)
            .single()
            .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string()),
        TimeZoneChoice::Utc => DateTime::<Utc>::from_timestamp(secs, nanos)
            .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn utc_is_deterministic() {
        let time = UNIX_EPOCH + Duration::from_secs(1_704_153_600);
        assert_eq!(
            format_timestamp(time, TimeZoneChoice::Utc),
            "2024-01-02 00:00:00"
        );
    }

    #[test]
    fn sub_second_precision_is_truncated() {
        let time = UNIX_EPOCH + Duration::from_millis(1_704_067_200_999);
        assert_eq!(
            format_timestamp(time, TimeZoneChoice::Utc),
            "2024-01-01 00:00:00"
        );
    }

    #[test]
    fn epoch_fallback_renders() {
        assert_eq!(
            format_timestamp(UNIX_EPOCH, TimeZoneChoice::Utc),
            "1970-01-01 00:00:00"
        );
    }

    #[test]
    fn times_before_the_epoch_render() {
        let time = UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(
            format_timestamp(time, TimeZoneChoice::Utc),
            "1969-12-31 23:59:58"
        );
    }

    #[test]
    fn unrepresentable_time_falls_back_to_epoch() {
        let far_future = UNIX_EPOCH + Duration::from_secs(10_000_000_000_000);
        assert_eq!(
            format_timestamp(far_future, TimeZoneChoice::Utc),
            "1970-01-01 00:00:00"
        );
        assert_eq!(
            format_timestamp(far_future, TimeZoneChoice::Local),
            format_timestamp(UNIX_EPOCH, TimeZoneChoice::Local)
        );
    }

    #[test]
    fn local_uses_the_system_zone() {
        let secs = 1_704_067_200;
        let expected = Local
            .timestamp_opt(secs, 0)
            .single()
            .unwrap()
            .format(TIMESTAMP_FORMAT)
            .to_string();
        let time = UNIX_EPOCH + Duration::from_secs(secs as u64);
        assert_eq!(format_timestamp(time, TimeZoneChoice::Local), expected);
        assert_eq!(expected.len(), 19);
    }
}
