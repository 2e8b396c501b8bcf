use crate::models::{ActivityRecord, Filter};
use chrono::{DateTime, Duration, Local, Months};
use std::collections::BTreeMap;

pub fn project(days: &BTreeMap<String, ActivityRecord>, filter: Filter) -> Vec<ActivityRecord> {
    project_at(days, filter, Local::now())
}

// Pure view over a store snapshot: newest write first, window bounds
// inclusive. Ties on timestamp keep the map's date order.
pub fn project_at(
    days: &BTreeMap<String, ActivityRecord>,
    filter: Filter,
    now: DateTime<Local>,
) -> Vec<ActivityRecord> {
    let mut records: Vec<ActivityRecord> = days.values().cloned().collect();
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let cutoff = match filter {
        Filter::All => None,
        Filter::Week => Some(now - Duration::days(7)),
        // Same day-of-month one month back, clamped to that month's last
        // day (Mar 31 -> Feb 28/29).
        Filter::Month => now
            .checked_sub_months(Months::new(1))
            .or_else(|| now.checked_sub_signed(Duration::days(30))),
    };

    if let Some(cutoff) = cutoff {
        records.retain(|record| record.timestamp >= cutoff);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::day_key;
    use chrono::TimeZone;

    fn record(timestamp: DateTime<Local>, steps: u64) -> ActivityRecord {
        ActivityRecord {
            date: day_key(timestamp),
            timestamp,
            steps,
            walking: 1.0,
            money_spent: 0.0,
            learned: String::new(),
            goals: String::new(),
        }
    }

    fn journal(records: Vec<ActivityRecord>) -> BTreeMap<String, ActivityRecord> {
        records
            .into_iter()
            .map(|record| (record.date.clone(), record))
            .collect()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn projection_orders_newest_first() {
        let days = journal(vec![
            record(at(2024, 3, 1, 9), 1),
            record(at(2024, 3, 3, 9), 3),
            record(at(2024, 3, 2, 9), 2),
        ]);

        let ordered = project_at(&days, Filter::All, at(2024, 3, 4, 12));
        let steps: Vec<u64> = ordered.iter().map(|record| record.steps).collect();
        assert_eq!(steps, vec![3, 2, 1]);
    }

    #[test]
    fn week_window_is_seven_days_inclusive() {
        let now = at(2024, 3, 10, 12);
        let days = journal(vec![
            record(now - Duration::days(8), 8),
            record(now - Duration::days(2), 2),
        ]);

        let week = project_at(&days, Filter::Week, now);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].steps, 2);

        let month = project_at(&days, Filter::Month, now);
        assert_eq!(month.len(), 2);
    }

    #[test]
    fn month_window_clamps_to_short_months() {
        // One month before Mar 31 is Feb 29 in a leap year.
        let now = at(2024, 3, 31, 12);
        let days = journal(vec![
            record(at(2024, 2, 28, 12), 28),
            record(at(2024, 2, 29, 12), 29),
            record(at(2024, 3, 15, 12), 15),
        ]);

        let month = project_at(&days, Filter::Month, now);
        let steps: Vec<u64> = month.iter().map(|record| record.steps).collect();
        assert_eq!(steps, vec![15, 29]);
    }

    #[test]
    fn equal_timestamps_keep_date_order() {
        let moment = at(2024, 3, 5, 12);
        let mut first = record(moment, 1);
        first.date = "2024-03-04".to_string();
        let second = record(moment, 2);

        let days = journal(vec![second, first]);
        let ordered = project_at(&days, Filter::All, at(2024, 3, 6, 12));
        let dates: Vec<&str> = ordered.iter().map(|record| record.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-04", "2024-03-05"]);
    }

    #[test]
    fn empty_journal_projects_to_empty_history() {
        let days = BTreeMap::new();
        assert!(project_at(&days, Filter::All, at(2024, 3, 4, 12)).is_empty());
        assert!(project_at(&days, Filter::Week, at(2024, 3, 4, 12)).is_empty());
    }
}
