//! Exact, case-insensitive search over stored entries.

use crate::entry::Entry;

/// Optional equality constraints for a search.
///
/// A missing or blank value places no constraint on that field.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub district: Option<String>,
    pub place: Option<String>,
    pub state: Option<String>,
}

impl EntryFilter {
    /// Build a filter from decoded query-string pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "district" => &mut filter.district,
                "place" => &mut filter.place,
                "state" => &mut filter.state,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        filter
    }

    /// Whether `entry` satisfies every supplied constraint.
    pub fn matches(&self, entry: &Entry) -> bool {
        field_matches(self.district.as_deref(), &entry.district)
            && field_matches(self.place.as_deref(), &entry.place)
            && field_matches(self.state.as_deref(), &entry.state)
    }

    /// Whether no constraint is active, i.e. the search is a full listing.
    pub fn is_empty(&self) -> bool {
        [&self.district, &self.place, &self.state]
            .iter()
            .all(|value| value.as_deref().is_none_or(|v| v.trim().is_empty()))
    }

    /// Keep matching entries, preserving storage order.
    pub fn apply(&self, entries: Vec<Entry>) -> Vec<Entry> {
        if self.is_empty() {
            return entries;
        }
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

fn field_matches(wanted: Option<&str>, stored: &str) -> bool {
    let wanted = match wanted.map(str::trim) {
        Some(w) if !w.is_empty() => w.to_lowercase(),
        _ => return true,
    };
    stored.to_lowercase() == wanted
}
