// src/config.rs

use serde::Deserialize;

/// Configured identifiers whose presence is tracked across polls:
/// MAC addresses, with hostnames accepted as a fallback. Supplied as a
/// comma-separated string at the configuration boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct WatchList {
    ids: Vec<String>,
}

impl WatchList {
    pub fn parse(raw: &str) -> Self {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|w| w == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

impl From<String> for WatchList {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_trims() {
        let w = WatchList::parse(" AA:BB:CC:DD:EE:FF , nas-box ,,  ");
        assert_eq!(w.len(), 2);
        assert!(w.contains("AA:BB:CC:DD:EE:FF"));
        assert!(w.contains("nas-box"));
        assert!(!w.contains("other"));
    }

    #[test]
    fn empty_string_is_an_empty_list() {
        assert!(WatchList::parse("").is_empty());
        assert!(WatchList::parse(" , ,").is_empty());
    }

    #[test]
    fn deserializes_from_a_bare_string() {
        let w: WatchList = serde_json::from_str("\"aa,bb\"").unwrap();
        assert!(w.contains("aa") && w.contains("bb"));
    }
}
