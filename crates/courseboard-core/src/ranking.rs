//! Ranking and top-N selection
//!
//! One generic helper shared by the project activity ranking, the dashboard
//! top-committer list and the chart legends.

/// Stable descending sort by `key`, truncated to the first `n` items.
///
/// Ties keep their input order (the backend's fetch order; no secondary key is
/// defined upstream), which also makes repeated calls on the same input
/// idempotent. `n == 0` returns an empty vec; `n >= len` returns the whole
/// input sorted.
pub fn top_n_by<T, K, F>(items: &[T], n: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<T> = items.to_vec();
    // slice::sort_by is stable; Equal on ties (and on incomparable values,
    // which do not occur for the integer/float counts we rank) keeps order.
    ranked.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: &'static str,
        commits: u64,
    }

    fn entry(name: &'static str, commits: u64) -> Entry {
        Entry { name, commits }
    }

    #[test]
    fn test_descending_order() {
        let items = vec![entry("a", 3), entry("b", 10), entry("c", 7)];
        let top = top_n_by(&items, 3, |e| e.commits);
        let names: Vec<_> = top.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            entry("python", 5),
            entry("javascript", 3),
            entry("go", 3),
        ];
        let top = top_n_by(&items, 3, |e| e.commits);
        let names: Vec<_> = top.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["python", "javascript", "go"]);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![entry("a", 2), entry("b", 2), entry("c", 9), entry("d", 2)];
        let first = top_n_by(&items, 4, |e| e.commits);
        let second = top_n_by(&first, 4, |e| e.commits);
        assert_eq!(first, second);
    }

    #[test]
    fn test_n_larger_than_collection() {
        let items = vec![entry("a", 1), entry("b", 2)];
        let top = top_n_by(&items, 10, |e| e.commits);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_n_zero_returns_empty() {
        let items = vec![entry("a", 1)];
        assert!(top_n_by(&items, 0, |e| e.commits).is_empty());
    }

    #[test]
    fn test_twelve_projects_top_ten() {
        let items: Vec<Entry> = (0..12).map(|i| entry("p", i * 3 % 7)).collect();
        let top = top_n_by(&items, 10, |e| e.commits);
        assert_eq!(top.len(), 10);
        for pair in top.windows(2) {
            assert!(pair[0].commits >= pair[1].commits);
        }
    }
}
