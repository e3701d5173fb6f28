mod loader;

pub use loader::load;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashMap;
use std::fmt;

/// One row of the materials spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    pub name: String,
    pub english_name: String,
    /// kg/m³
    pub density: f64,
    /// W/(m·K)
    pub conductivity: f64,
    /// J/(kg·K)
    pub specific_heat: f64,
    pub roughness: String,
    pub material_type: String,
}

/// Materials in file order, indexed by exact name.
pub struct MaterialTable {
    records: Vec<MaterialRecord>,
    index: HashMap<String, usize>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for MaterialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialTable")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl MaterialTable {
    pub fn new(records: Vec<MaterialRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.contains_key(&record.name) {
                log::warn!("Duplicate material '{}' in dataset, keeping the first row", record.name);
                continue;
            }
            index.insert(record.name.clone(), i);
        }

        MaterialTable {
            records,
            index,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&MaterialRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[MaterialRecord] {
        &self.records
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose name fuzzily matches `pattern`, best score first.
    pub fn search(&self, pattern: &str) -> Vec<&MaterialRecord> {
        let mut matches: Vec<(i64, usize)> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                self.matcher
                    .fuzzy_match(&record.name, pattern)
                    .map(|score| (score, i))
            })
            .collect();

        // Stable on ties so equal scores keep dataset order.
        matches.sort_by(|a, b| b.0.cmp(&a.0));
        matches.into_iter().map(|(_, i)| &self.records[i]).collect()
    }

    /// Up to `limit` names close to a name that was not found.
    pub fn suggestions(&self, name: &str, limit: usize) -> Vec<&str> {
        self.search(name)
            .into_iter()
            .take(limit)
            .map(|r| r.name.as_str())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(name: &str, english: &str) -> MaterialRecord {
        MaterialRecord {
            name: name.to_string(),
            english_name: english.to_string(),
            density: 1000.0,
            conductivity: 1.0,
            specific_heat: 1000.0,
            roughness: "Medio".to_string(),
            material_type: "Acabado".to_string(),
        }
    }

    pub(crate) fn sample_table() -> MaterialTable {
        MaterialTable::new(vec![
            MaterialRecord {
                name: "Concreto".to_string(),
                english_name: "Concrete".to_string(),
                density: 2400.0,
                conductivity: 1.7,
                specific_heat: 880.0,
                roughness: "Rugoso".to_string(),
                material_type: "Estructura".to_string(),
            },
            record("Ladrillo rojo", "Red brick"),
            record("Madera de pino", "Pine wood"),
        ])
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = sample_table();
        assert!(table.get("Concreto").is_some());
        assert!(table.get("concreto").is_none());
        assert!(table.get("Concreto ").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first_row() {
        let table = MaterialTable::new(vec![record("Yeso", "Gypsum"), record("Yeso", "Plaster")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Yeso").unwrap().english_name, "Gypsum");
    }

    #[test]
    fn test_debug_shows_records() {
        let rendered = format!("{:?}", sample_table());
        assert!(rendered.starts_with("MaterialTable"));
        assert!(rendered.contains("Ladrillo rojo"));
        assert!(!rendered.contains("matcher"));
    }

    #[test]
    fn test_search_ranks_matches() {
        let table = sample_table();
        let found: Vec<&str> = table.search("ladr").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(found.first(), Some(&"Ladrillo rojo"));
        assert!(!found.contains(&"Concreto"));
    }

    #[test]
    fn test_suggestions_respect_limit() {
        let table = sample_table();
        assert!(table.suggestions("o", 2).len() <= 2);
        assert_eq!(table.suggestions("concret", 3), vec!["Concreto"]);
    }
}
