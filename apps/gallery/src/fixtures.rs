//! Shared record builders for unit tests.

use crate::models::ExhibitorRecord;

pub(crate) fn make_record(number: i64) -> ExhibitorRecord {
    ExhibitorRecord {
        number,
        name: format!("Exposant {number}"),
        role: "Céramiste".to_string(),
        bio: "Travaille la terre depuis vingt ans, entre grès et porcelaine.".to_string(),
        photo_path: format!("photos/{number}.jpg"),
    }
}

/// Records numbered `1..=n`, in order.
pub(crate) fn make_records(n: usize) -> Vec<ExhibitorRecord> {
    (1..=n as i64).map(make_record).collect()
}
