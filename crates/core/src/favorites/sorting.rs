use std::cmp::Ordering;

use super::types::FavoriteEntry;

/// Sorts favorites most recently created first.
///
/// Each entry is paired with its insertion sequence number. Entries sharing a
/// timestamp are ordered by descending sequence, so the later insert wins.
pub fn sort_newest_first(entries: &mut [(u64, FavoriteEntry)]) {
    entries.sort_by(|(a_seq, a), (b_seq, b)| match b.created_at.cmp(&a.created_at) {
        Ordering::Equal => b_seq.cmp(a_seq),
        other => other,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ids(entries: &[(u64, FavoriteEntry)]) -> Vec<i64> {
        entries.iter().map(|(_, e)| e.taxon_id).collect()
    }

    #[test]
    fn test_sort_newest_first_by_timestamp() {
        let base = at("2024-06-15T10:30:00Z");
        let mut entries = vec![
            (0, FavoriteEntry::new(10, base)),
            (1, FavoriteEntry::new(20, base + Duration::seconds(1))),
            (2, FavoriteEntry::new(30, base + Duration::seconds(2))),
        ];

        sort_newest_first(&mut entries);

        assert_eq!(ids(&entries), vec![30, 20, 10]);
    }

    #[test]
    fn test_sort_equal_timestamps_by_reverse_insertion() {
        let same = at("2024-06-15T10:30:00Z");
        let mut entries = vec![
            (5, FavoriteEntry::new(1, same)),
            (7, FavoriteEntry::new(2, same)),
            (6, FavoriteEntry::new(3, same)),
        ];

        sort_newest_first(&mut entries);

        assert_eq!(ids(&entries), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_timestamp_dominates_sequence() {
        let base = at("2024-06-15T10:30:00Z");
        let mut entries = vec![
            (9, FavoriteEntry::new(1, base)),
            (0, FavoriteEntry::new(2, base + Duration::milliseconds(1))),
        ];

        sort_newest_first(&mut entries);

        assert_eq!(ids(&entries), vec![2, 1]);
    }

    #[test]
    fn test_sort_empty() {
        let mut entries: Vec<(u64, FavoriteEntry)> = Vec::new();
        sort_newest_first(&mut entries);
        assert!(entries.is_empty());
    }
}
