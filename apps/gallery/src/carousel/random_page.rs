//! Independent random pages that avoid repeating the previous page.
//!
//! Unlike the session order, every call reshuffles the pool. Records whose key
//! appeared on the previous page are only used to top the page up when there
//! are not enough fresh ones.

use std::collections::HashSet;

use rand::Rng;

use crate::carousel::order::{shuffle, PAGE_SIZE};
use crate::models::{ExhibitorKey, ExhibitorRecord};

/// Picks a page of up to `PAGE_SIZE` records, preferring keys absent from `previous_keys`.
///
/// A pool of `PAGE_SIZE` records or fewer is returned as-is, without reshuffling.
pub fn pick_random_page<R: Rng + ?Sized>(
    records: &[ExhibitorRecord],
    previous_keys: &HashSet<ExhibitorKey>,
    rng: &mut R,
) -> Vec<ExhibitorRecord> {
    if records.len() <= PAGE_SIZE {
        return records.to_vec();
    }

    let shuffled = shuffle(records, rng);
    let mut taken = vec![false; shuffled.len()];
    let mut page = Vec::with_capacity(PAGE_SIZE);

    for (i, record) in shuffled.iter().enumerate() {
        if page.len() == PAGE_SIZE {
            break;
        }
        if !previous_keys.contains(&record.key()) {
            taken[i] = true;
            page.push(record.clone());
        }
    }

    // Not enough fresh records: top up with whatever is left.
    for (i, record) in shuffled.iter().enumerate() {
        if page.len() == PAGE_SIZE {
            break;
        }
        if !taken[i] {
            taken[i] = true;
            page.push(record.clone());
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_records;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn keys(page: &[ExhibitorRecord]) -> Vec<i64> {
        page.iter().map(|r| r.number).collect()
    }

    #[test]
    fn test_small_pool_returned_unchanged() {
        let records = make_records(3);
        let mut rng = StdRng::seed_from_u64(3);
        let page = pick_random_page(&records, &HashSet::from([1, 2]), &mut rng);
        assert_eq!(keys(&page), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_pool_gives_empty_page() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pick_random_page(&[], &HashSet::new(), &mut rng).is_empty());
    }

    #[test]
    fn test_avoids_previous_page_when_enough_fresh_records() {
        let records = make_records(6);
        let previous = HashSet::from([1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(11);
        let page = pick_random_page(&records, &previous, &mut rng);
        assert_eq!(page.len(), PAGE_SIZE);
        assert!(page.iter().all(|r| !previous.contains(&r.number)));
    }

    #[test]
    fn test_tops_up_with_seen_records_when_fresh_ones_run_out() {
        let records = make_records(4);
        let previous = HashSet::from([1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(5);
        let page = pick_random_page(&records, &previous, &mut rng);
        assert_eq!(page.len(), PAGE_SIZE);
        assert_eq!(page[0].number, 4, "the only unseen record is taken first");

        let mut distinct = keys(&page);
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), PAGE_SIZE, "no record is used twice");
    }

    proptest! {
        #[test]
        fn prop_no_previous_key_when_fresh_pool_is_large(
            fresh in 3usize..15,
            seen in 1usize..6,
            seed in any::<u64>(),
        ) {
            let records = make_records(fresh + seen);
            let previous: HashSet<i64> = (1..=seen as i64).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let page = pick_random_page(&records, &previous, &mut rng);
            prop_assert_eq!(page.len(), PAGE_SIZE);
            prop_assert!(page.iter().all(|r| !previous.contains(&r.number)));
        }
    }
}
