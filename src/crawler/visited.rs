//! Once-only admission set over crawl targets

use std::collections::HashSet;
use std::sync::Mutex;

/// Thread-safe set of URLs already claimed by a crawl run.
///
/// Admission is atomic: the membership check and the insert happen under a
/// single lock, so exactly one caller wins for any given URL no matter how
/// many branches race on it.
#[derive(Debug, Default)]
pub struct VisitedSet {
    pages: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `url` for the calling branch.
    ///
    /// Returns true iff this call performed the insertion; false means
    /// another caller already admitted the URL.
    pub fn try_admit(&self, url: &str) -> bool {
        self.pages.lock().unwrap().insert(url.to_string())
    }

    /// Number of URLs admitted so far.
    pub fn len(&self) -> usize {
        self.pages.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies out every admitted URL, in unspecified order.
    pub fn snapshot(&self) -> Vec<String> {
        self.pages.lock().unwrap().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_admission_is_idempotent() {
        let visited = VisitedSet::new();

        assert!(visited.try_admit("http://localhost.com/pricing"));
        assert!(!visited.try_admit("http://localhost.com/pricing"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_urls_admitted_independently() {
        let visited = VisitedSet::new();

        assert!(visited.try_admit("http://localhost.com/a"));
        assert!(visited.try_admit("http://localhost.com/b"));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_snapshot_contains_admitted_urls() {
        let visited = VisitedSet::new();
        visited.try_admit("http://localhost.com/a");
        visited.try_admit("http://localhost.com/b");

        let mut snapshot = visited.snapshot();
        snapshot.sort();
        assert_eq!(
            snapshot,
            vec!["http://localhost.com/a", "http://localhost.com/b"]
        );
    }

    #[test]
    fn test_concurrent_admission_has_one_winner() {
        let visited = Arc::new(VisitedSet::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let visited = Arc::clone(&visited);
                std::thread::spawn(move || visited.try_admit("http://localhost.com/race"))
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_empty_set() {
        let visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.snapshot().is_empty());
    }
}
