use chapter_types::{Dated, InvalidDate};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Records split around a reference date.
///
/// Both buckets keep the relative order of the input. Records whose date does
/// not parse land in neither bucket and are listed in `rejected`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partition<T> {
    pub upcoming: Vec<T>,
    pub past: Vec<T>,
    pub rejected: Vec<InvalidDate>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            upcoming: Vec::new(),
            past: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    /// Number of records that were classified (rejected ones excluded)
    pub fn classified(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}

/// Current local calendar date, the default reference for partitioning
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stable partition into `upcoming` (date >= reference) and `past` (date < reference).
pub fn partition_by_date<I, T>(records: I, reference: NaiveDate) -> Partition<T>
where
    I: IntoIterator<Item = T>,
    T: Dated,
{
    let mut partition = Partition::default();

    for record in records {
        match record.calendar_date() {
            Ok(date) if date >= reference => partition.upcoming.push(record),
            Ok(_) => partition.past.push(record),
            Err(invalid) => partition.rejected.push(invalid),
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapter_types::RecordId;

    struct Item {
        id: RecordId,
        date: &'static str,
    }

    impl Dated for Item {
        fn id(&self) -> &RecordId {
            &self.id
        }

        fn date_str(&self) -> &str {
            self.date
        }
    }

    fn item(id: i64, date: &'static str) -> Item {
        Item {
            id: RecordId::Number(id),
            date,
        }
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_today_is_upcoming() {
        let items = [item(1, "2024-06-10")];
        let p = partition_by_date(&items, reference());
        assert_eq!(p.upcoming.len(), 1);
        assert!(p.past.is_empty());
    }

    #[test]
    fn test_stable_unsorted_input() {
        let items = [
            item(1, "2024-07-01"),
            item(2, "2024-01-01"),
            item(3, "2024-06-11"),
            item(4, "2023-12-31"),
            item(5, "2024-06-09"),
        ];
        let p = partition_by_date(&items, reference());
        assert_eq!(ids(&p.upcoming), vec!["1", "3"]);
        assert_eq!(ids(&p.past), vec!["2", "4", "5"]);
        assert_eq!(p.classified(), items.len());
    }

    #[test]
    fn test_invalid_dates_are_excluded_and_reported() {
        let items = [item(1, "2024-07-01"), item(2, "TBA"), item(3, "2020-02-02")];
        let p = partition_by_date(&items, reference());
        assert_eq!(ids(&p.upcoming), vec!["1"]);
        assert_eq!(ids(&p.past), vec!["3"]);
        assert_eq!(p.rejected.len(), 1);
        assert_eq!(p.rejected[0].id, RecordId::Number(2));
        assert_eq!(p.rejected[0].value, "TBA");
    }

    #[test]
    fn test_empty_input() {
        let items: [Item; 0] = [];
        let p = partition_by_date(&items, reference());
        assert_eq!(p.classified(), 0);
        assert!(p.rejected.is_empty());
    }
}
