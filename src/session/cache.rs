use std::collections::HashMap;

/// Mentor AI answers keyed by the exact material name they were fetched for.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, String>,
}

impl ResponseCache {
    pub fn new() -> Self {
        ResponseCache {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Inserts or overwrites; the last write wins.
    pub fn put(&mut self, name: &str, text: String) {
        self.entries.insert(name.to_string(), text);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_before_put() {
        let cache = ResponseCache::new();
        assert_eq!(cache.get("Concreto"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut cache = ResponseCache::new();
        cache.put("Concreto", "primera".to_string());
        cache.put("Concreto", "segunda".to_string());
        assert_eq!(cache.get("Concreto"), Some("segunda"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_case_and_whitespace_sensitive() {
        let mut cache = ResponseCache::new();
        cache.put("Concreto", "a".to_string());
        assert!(cache.contains("Concreto"));
        assert!(!cache.contains("concreto"));
        assert!(!cache.contains("Concreto "));

        cache.put("concreto", "b".to_string());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.names(), vec!["Concreto", "concreto"]);
    }

    #[test]
    fn test_text_is_stored_unchanged() {
        let mut cache = ResponseCache::new();
        let text = "  línea 1\n\n**línea 2**  \n".to_string();
        cache.put("Adobe", text.clone());
        assert_eq!(cache.get("Adobe"), Some(text.as_str()));
    }
}
