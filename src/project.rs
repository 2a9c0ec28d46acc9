use crate::store::{Activatable, Orderable, Record};

/// Filter criteria for a list screen: status equality and a case-insensitive
/// substring query, combined with AND. `None` on either means "don't filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub status: Option<String>,
    pub query: Option<String>,
}

impl Criteria {
    pub fn all() -> Self {
        Criteria::default()
    }

    pub fn with_status(status: &str) -> Self {
        Criteria { status: Some(status.to_string()), query: None }
    }

    pub fn with_query(query: &str) -> Self {
        Criteria { status: None, query: Some(query.to_string()) }
    }

    fn matches<T: Projectable>(&self, record: &T) -> bool {
        if let Some(status) = &self.status {
            if record.status_key() != Some(status.as_str()) {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.trim().to_lowercase();
            if !needle.is_empty()
                && !record
                    .search_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }
}

/// Hooks an entity into [`project`]: its status key (if it has a status) and
/// the 2-3 fields its screen's search box matches against.
pub trait Projectable: Record {
    fn status_key(&self) -> Option<&str> {
        None
    }

    fn search_text(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Pure projection: same inputs always yield the same output, and the input
/// slice is never mutated.
pub fn project<T: Projectable>(records: &[T], criteria: &Criteria) -> Vec<T> {
    records
        .iter()
        .filter(|r| criteria.matches(*r))
        .cloned()
        .collect()
}

/// [`project`] plus an ascending stable sort by display order, so rank ties
/// keep their original relative order.
pub fn project_ordered<T: Projectable + Orderable>(records: &[T], criteria: &Criteria) -> Vec<T> {
    let mut out = project(records, criteria);
    out.sort_by_key(|r| r.display_order());
    out
}

/// Active records in display order: what the public site renders for team
/// members, services, and testimonials.
pub fn active_ordered<T: Orderable + Activatable>(records: &[T]) -> Vec<T> {
    let mut out: Vec<T> = records.iter().filter(|r| r.is_active()).cloned().collect();
    out.sort_by_key(|r| r.display_order());
    out
}
