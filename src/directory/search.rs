use crate::directory::record_model::Hospital;

/// Case-insensitive substring match over name and address.
///
/// Recomputed from the full list on every query change; an empty query
/// matches everything.
pub fn filter_hospitals<'a>(hospitals: &'a [Hospital], query: &str) -> Vec<&'a Hospital> {
    let needle = query.to_lowercase();
    hospitals
        .iter()
        .filter(|h| matches_query(h, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(hospital: &Hospital, needle: &str) -> bool {
    hospital.name.to_lowercase().contains(needle)
        || hospital.address.to_lowercase().contains(needle)
}
