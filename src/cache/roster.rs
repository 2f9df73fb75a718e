use chrono::{DateTime, Utc};

use crate::domain::Title;
use crate::pagination::{PageSlice, Selection, paginate};
use crate::search::{PrefixIndex, SearchQuery};

/// Usernames for one title, indexed for search. Immutable once built.
#[derive(Debug)]
pub struct Roster {
    title: Title,
    players: Vec<String>,
    index: PrefixIndex,
    loaded_at: DateTime<Utc>,
}

impl Roster {
    pub fn new(title: Title, players: Vec<String>, index_depth: usize) -> Self {
        let index = PrefixIndex::build(&players, index_depth);
        Self {
            title,
            players,
            index,
            loaded_at: Utc::now(),
        }
    }

    pub fn title(&self) -> Title {
        self.title
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Matching usernames restricted to `selection`
    pub fn select(&self, query: &SearchQuery, selection: Selection) -> PageSlice<String> {
        let positions = self.index.search(query);
        paginate(&positions, selection).map(|position| self.players[position].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        let players = ["alireza2003", "anishgiri", "DanielNaroditsky", "GHANDEEVAM2003", "Hikaru"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Roster::new(Title::GM, players, 3)
    }

    #[test]
    fn matches_keep_roster_spelling_and_order() {
        let roster = roster();
        let slice = roster.select(
            &SearchQuery::new("2003"),
            Selection::Window { offset: 0, limit: 10 },
        );
        assert_eq!(slice.items, vec!["alireza2003", "GHANDEEVAM2003"]);
        assert_eq!(roster.title(), Title::GM);
    }

    #[test]
    fn selects_a_page_of_matches() {
        let roster = roster();
        let slice = roster.select(
            &SearchQuery::new("a"),
            Selection::Page { number: 2, size: 2 },
        );
        assert_eq!(slice.total, 5);
        assert_eq!(slice.items, vec!["DanielNaroditsky", "GHANDEEVAM2003"]);
        assert_eq!(slice.total_pages, 3);
    }

    #[test]
    fn no_matches_gives_empty_slice() {
        let roster = roster();
        let slice = roster.select(
            &SearchQuery::new("carlsen"),
            Selection::Page { number: 1, size: 10 },
        );
        assert_eq!(slice.total, 0);
        assert!(slice.items.is_empty());
    }
}
