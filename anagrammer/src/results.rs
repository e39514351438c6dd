use std::sync::Mutex;

/// Direction for sorting matches by word size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest words first
    #[default]
    Ascending,
    /// Largest words first
    Descending,
}

/// A thread-safe, growable collection of matched words.
///
/// Matching tasks append concurrently with no coordination beyond calling
/// [`append`]; the lock makes the capacity check, the write, and the length
/// update one atomic unit, so the final count always equals the number of
/// appends once all producers finish. Sorting and indexed reads are meant
/// for after the producing tasks have completed.
///
/// [`append`]: MatchList::append
#[derive(Debug, Default)]
pub struct MatchList {
    words: Mutex<Vec<String>>,
}

impl MatchList {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a matched word. Safe to call from any number of threads.
    pub fn append(&self, word: String) {
        // Vec reallocates to roughly double its capacity when exhausted,
        // preserving insertion order, so appends stay amortized O(1).
        self.words.lock().unwrap().push(word);
    }

    pub fn len(&self) -> usize {
        self.words.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.lock().unwrap().is_empty()
    }

    /// Returns a copy of the word at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<String> {
        self.words.lock().unwrap().get(index).cloned()
    }

    /// Sorts the collected words by character length.
    ///
    /// The sort is unstable: words of equal length carry no relative-order
    /// guarantee. Callers that need a deterministic order among equal
    /// lengths must impose one themselves.
    pub fn sort(&self, order: SortOrder) {
        let mut words = self.words.lock().unwrap();
        match order {
            SortOrder::Ascending => words.sort_unstable_by_key(|w| w.chars().count()),
            SortOrder::Descending => {
                words.sort_unstable_by(|a, b| b.chars().count().cmp(&a.chars().count()))
            }
        }
    }

    /// Consumes the collection, returning the words in their current order
    pub fn into_words(self) -> Vec<String> {
        self.words.into_inner().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_append_and_read() {
        let matches = MatchList::new();
        assert!(matches.is_empty());

        matches.append("cat".to_string());
        matches.append("act".to_string());

        assert_eq!(matches.len(), 2);
        assert_eq!(matches.get(0), Some("cat".to_string()));
        assert_eq!(matches.get(1), Some("act".to_string()));
        assert_eq!(matches.get(2), None);
    }

    #[test]
    fn test_concurrent_append_loses_nothing() {
        const THREADS: usize = 16;
        const PER_THREAD: usize = 500;

        let matches = Arc::new(MatchList::new());
        let mut handles = Vec::with_capacity(THREADS);

        for t in 0..THREADS {
            let matches = Arc::clone(&matches);
            handles.push(thread::spawn(move || {
                for i in 0..PER_THREAD {
                    matches.append(format!("word-{t}-{i}"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(matches.len(), THREADS * PER_THREAD);

        // Every append must be present exactly once
        let mut words = Arc::try_unwrap(matches).unwrap().into_words();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), THREADS * PER_THREAD);
    }

    #[test]
    fn test_sort_ascending() {
        let matches = MatchList::new();
        for word in ["hippopotamus", "cat", "badger", "ox"] {
            matches.append(word.to_string());
        }

        matches.sort(SortOrder::Ascending);

        let words = matches.into_words();
        for pair in words.windows(2) {
            assert!(pair[0].chars().count() <= pair[1].chars().count());
        }
        assert_eq!(words[0], "ox");
        assert_eq!(words[3], "hippopotamus");
    }

    #[test]
    fn test_sort_descending() {
        let matches = MatchList::new();
        for word in ["ox", "badger", "hippopotamus", "cat"] {
            matches.append(word.to_string());
        }

        matches.sort(SortOrder::Descending);

        let words = matches.into_words();
        for pair in words.windows(2) {
            assert!(pair[0].chars().count() >= pair[1].chars().count());
        }
        assert_eq!(words[0], "hippopotamus");
        assert_eq!(words[3], "ox");
    }

    #[test]
    fn test_sort_groups_equal_lengths() {
        let matches = MatchList::new();
        for word in ["dog", "mouse", "cat", "horse", "ox"] {
            matches.append(word.to_string());
        }

        matches.sort(SortOrder::Ascending);

        let lengths: Vec<usize> = matches
            .into_words()
            .iter()
            .map(|w| w.chars().count())
            .collect();
        assert_eq!(lengths, vec![2, 3, 3, 5, 5]);
    }
}
