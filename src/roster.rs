//! Roster loading, id normalization and identity lookup
use std::collections::HashMap;

/// One row of the roster table.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    #[n(0)]
    pub id: String,
    #[n(1)]
    pub name: String,
}

/// A known employee, keyed by its normalized id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub employee_id: String,
    pub display_name: String,
}

/// External roster collaborator. Fetched fresh on every load, no cache
/// retention.
pub trait RosterSource {
    fn fetch(&self) -> anyhow::Result<Vec<RosterEntry>>;
}

/// Fixed in-memory roster, used as the test fake.
#[derive(Debug, Clone, Default)]
pub struct FixedRoster {
    pub entries: Vec<RosterEntry>,
}

impl FixedRoster {
    pub fn new(entries: Vec<(&str, &str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, name)| RosterEntry {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

impl RosterSource for FixedRoster {
    fn fetch(&self) -> anyhow::Result<Vec<RosterEntry>> {
        Ok(self.entries.clone())
    }
}

/// Strips whitespace and the `.0` float artifact that spreadsheet
/// round-tripping leaves on numeric ids, so `"117102.0"` and `" 117102 "`
/// both compare as `"117102"`. Applied identically wherever an id enters the
/// system; the function is idempotent.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some((stem, frac)) = trimmed.split_once('.') {
        let looks_numeric = !stem.is_empty()
            && !frac.is_empty()
            && stem.chars().all(|c| c.is_ascii_digit())
            && frac.chars().all(|c| c == '0');
        if looks_numeric {
            return stem.to_string();
        }
    }
    trimmed.to_string()
}

/// Snapshot of the roster, normalized id -> display name.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    entries: HashMap<String, String>,
}

impl RosterIndex {
    /// Builds the index from the collaborator. A fetch failure degrades to an
    /// empty index so lookups report "not found" instead of crashing the
    /// submission flow.
    pub fn load<R: RosterSource>(source: &R) -> Self {
        match source.fetch() {
            Ok(rows) => {
                let entries = rows
                    .into_iter()
                    .map(|row| (normalize(&row.id), row.name))
                    .collect();
                Self { entries }
            }
            Err(e) => {
                tracing::warn!(error = %e, "roster fetch failed, continuing with empty roster");
                Self::default()
            }
        }
    }

    pub fn lookup(&self, raw_id: &str) -> Option<Identity> {
        let employee_id = normalize(raw_id);
        self.entries.get(&employee_id).map(|name| Identity {
            employee_id: employee_id.clone(),
            display_name: name.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_float_artifact() {
        assert_eq!(normalize("117102.0"), "117102");
        assert_eq!(normalize("117102.00"), "117102");
        assert_eq!(normalize(" 117102 "), "117102");
        assert_eq!(normalize("117102"), "117102");
    }

    #[test]
    fn normalize_leaves_non_numeric_ids_alone() {
        assert_eq!(normalize("E-42.0x"), "E-42.0x");
        assert_eq!(normalize("117102.5"), "117102.5");
        assert_eq!(normalize("a.0"), "a.0");
    }

    #[test]
    fn lookup_matches_messy_ids() {
        let roster = FixedRoster::new(vec![("117102.0", "Abel")]);
        let index = RosterIndex::load(&roster);

        let identity = index.lookup(" 117102 ").unwrap();
        assert_eq!(identity.employee_id, "117102");
        assert_eq!(identity.display_name, "Abel");
    }
}
