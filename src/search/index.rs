use std::collections::HashMap;

use super::query::SearchQuery;

/// Substring index over a fixed list of names.
///
/// Every suffix of every lowercased name contributes its prefixes of length
/// `1..=depth`, each mapped to the sorted positions of the names containing
/// it. Queries up to `depth` characters are a single map lookup; longer ones
/// narrow the candidates with their first `depth` characters and confirm
/// with a substring check.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    depth: usize,
    lowered: Vec<String>,
    entries: HashMap<String, Vec<usize>>,
}

impl PrefixIndex {
    pub fn build<S: AsRef<str>>(names: &[S], depth: usize) -> Self {
        let depth = depth.max(1);
        let lowered: Vec<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
        let mut entries: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, name) in lowered.iter().enumerate() {
            for key in substrings_up_to(name, depth) {
                let slots = entries.entry(key.to_string()).or_default();
                // Positions arrive in ascending order, so only the tail can repeat
                if slots.last() != Some(&position) {
                    slots.push(position);
                }
            }
        }

        Self {
            depth,
            lowered,
            entries,
        }
    }

    /// Positions of matching names, in list order
    pub fn search(&self, query: &SearchQuery) -> Vec<usize> {
        if query.is_empty() {
            return (0..self.lowered.len()).collect();
        }

        if query.char_len() <= self.depth {
            return self.lookup(query.as_str()).to_vec();
        }

        self.lookup(query.head(self.depth))
            .iter()
            .copied()
            .filter(|&position| self.lowered[position].contains(query.as_str()))
            .collect()
    }

    fn lookup(&self, key: &str) -> &[usize] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Every substring of `name` with at most `depth` characters
fn substrings_up_to(name: &str, depth: usize) -> Vec<&str> {
    let boundaries: Vec<usize> = name
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(name.len()))
        .collect();
    let last = boundaries.len() - 1;

    let mut substrings = Vec::new();
    for start in 0..last {
        let end_max = (start + depth).min(last);
        for end in start + 1..=end_max {
            substrings.push(&name[boundaries[start]..boundaries[end]]);
        }
    }
    substrings
}
