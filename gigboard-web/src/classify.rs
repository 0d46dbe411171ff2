//! Show classification and aggregation
//!
//! Pure functions over already-fetched rows: nothing here touches the
//! database or the wall clock. The reference instant is always passed
//! in, so the upcoming/past boundary is deterministic under test.

use chrono::NaiveDateTime;

/// A show joined against its counterpart entity's display fields.
///
/// When listing a venue's shows the counterpart is the artist, and vice
/// versa. The join happens in SQL; by the time rows reach this module
/// every show already carries its counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedShow {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Result of partitioning a show list against a reference instant
#[derive(Debug, Clone, Default)]
pub struct ClassifiedShows {
    pub upcoming: Vec<BookedShow>,
    pub past: Vec<BookedShow>,
}

impl ClassifiedShows {
    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }
}

/// A show is upcoming iff it starts strictly after `now`.
///
/// `start_time == now` counts as past. The boundary is strict
/// greater-than; both listing pages and the per-entity counts depend on
/// agreeing about it.
pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time > now
}

/// Partition shows into (upcoming, past), preserving input order within
/// each partition. Callers fetch rows ordered by start time ascending,
/// so both partitions come out ascending as well.
pub fn partition_shows(shows: Vec<BookedShow>, now: NaiveDateTime) -> ClassifiedShows {
    let mut classified = ClassifiedShows::default();
    for show in shows {
        if is_upcoming(show.start_time, now) {
            classified.upcoming.push(show);
        } else {
            classified.past.push(show);
        }
    }
    classified
}

/// One name-search hit decorated with its own upcoming-show count.
///
/// The search result total is the number of hits, not the number of
/// shows behind them.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A venue row reduced to its area-listing projection
#[derive(Debug, Clone, serde::Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    #[serde(skip)]
    pub city: String,
    #[serde(skip)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// One (city, state) group in the venue listing
#[derive(Debug, Clone, serde::Serialize)]
pub struct AreaGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group venues by exact (city, state) string equality.
///
/// Groups appear in order of first occurrence; every venue lands in
/// exactly one group.
pub fn group_by_area(venues: Vec<VenueSummary>) -> Vec<AreaGroup> {
    let mut groups: Vec<AreaGroup> = Vec::new();
    for venue in venues {
        match groups
            .iter_mut()
            .find(|g| g.city == venue.city && g.state == venue.state)
        {
            Some(group) => group.venues.push(venue),
            None => groups.push(AreaGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![venue],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn show(start_time: NaiveDateTime) -> BookedShow {
        BookedShow {
            counterpart_id: 1,
            counterpart_name: "The Dueling Pianos Bar".to_string(),
            counterpart_image_link: "https://example.com/p.jpg".to_string(),
            start_time,
        }
    }

    #[test]
    fn show_starting_exactly_now_is_past() {
        let now = at(20);
        let classified = partition_shows(vec![show(now)], now);
        assert_eq!(classified.upcoming_count(), 0);
        assert_eq!(classified.past_count(), 1);
    }

    #[test]
    fn one_second_after_now_is_upcoming() {
        let now = at(20);
        let classified = partition_shows(vec![show(now + Duration::seconds(1))], now);
        assert_eq!(classified.upcoming_count(), 1);
        assert_eq!(classified.past_count(), 0);
    }

    #[test]
    fn partition_is_total_and_exclusive() {
        let now = at(12);
        let shows: Vec<BookedShow> = (0..24).map(|h| show(at(h))).collect();
        let classified = partition_shows(shows.clone(), now);
        assert_eq!(
            classified.upcoming_count() + classified.past_count(),
            shows.len()
        );
        for s in &classified.upcoming {
            assert!(s.start_time > now);
        }
        for s in &classified.past {
            assert!(s.start_time <= now);
        }
    }

    #[test]
    fn counts_match_partition_lengths() {
        let now = at(12);
        let classified = partition_shows(vec![show(at(9)), show(at(15)), show(at(23))], now);
        assert_eq!(classified.upcoming_count(), classified.upcoming.len());
        assert_eq!(classified.past_count(), classified.past.len());
        assert_eq!(classified.upcoming_count(), 2);
        assert_eq!(classified.past_count(), 1);
    }

    #[test]
    fn input_order_is_preserved_within_partitions() {
        let now = at(12);
        let classified = partition_shows(
            vec![show(at(13)), show(at(9)), show(at(14)), show(at(10))],
            now,
        );
        let upcoming_hours: Vec<u32> = classified
            .upcoming
            .iter()
            .map(|s| s.start_time.format("%H").to_string().parse().unwrap())
            .collect();
        assert_eq!(upcoming_hours, vec![13, 14]);
        let past_hours: Vec<u32> = classified
            .past
            .iter()
            .map(|s| s.start_time.format("%H").to_string().parse().unwrap())
            .collect();
        assert_eq!(past_hours, vec![9, 10]);
    }

    fn summary(id: i64, city: &str, state: &str) -> VenueSummary {
        VenueSummary {
            id,
            name: format!("Venue {id}"),
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming_shows: 0,
        }
    }

    #[test]
    fn venues_sharing_city_and_state_share_one_group() {
        let groups = group_by_area(vec![summary(1, "SF", "CA"), summary(2, "SF", "CA")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].city, "SF");
        assert_eq!(groups[0].state, "CA");
        let ids: Vec<i64> = groups[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn grouping_never_duplicates_or_drops_venues() {
        let venues = vec![
            summary(1, "SF", "CA"),
            summary(2, "New York", "NY"),
            summary(3, "SF", "CA"),
            summary(4, "SF", "NC"),
        ];
        let groups = group_by_area(venues);
        let mut seen: Vec<i64> = groups
            .iter()
            .flat_map(|g| g.venues.iter().map(|v| v.id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4]);
        // Same city in a different state is a different area
        assert_eq!(groups.len(), 3);
    }
}
