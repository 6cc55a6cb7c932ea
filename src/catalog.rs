use crate::entry::{CatalogEntry, EntryId};
use std::collections::HashSet;

/// Most entries the cold-start recommendation row will show.
const RECOMMENDATION_CAP: usize = 10;

/// Case-insensitive substring filter over entry titles. An empty query keeps
/// everything; a non-empty query never matches an entry without a title.
pub fn filter_by_title<'a>(catalog: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    if query.is_empty() {
        return catalog.iter().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|e| {
            e.title
                .as_deref()
                .map(|t| t.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

/// Entries inferred relevant to the viewer.
///
/// With nothing saved yet, the row falls back to "highly rated": entries
/// whose free-text rating contains a 9, capped at ten. The rating field is
/// prose, not a number, and the containment check is the contract. Once the
/// list has entries, every unsaved catalog entry sharing a genre family
/// with a saved one qualifies, in catalog order, uncapped.
pub fn recommendations<'a>(
    catalog: &'a [CatalogEntry],
    saved: &[CatalogEntry],
) -> Vec<&'a CatalogEntry> {
    if saved.is_empty() {
        return catalog
            .iter()
            .filter(|e| e.rating.as_deref().map(|r| r.contains('9')).unwrap_or(false))
            .take(RECOMMENDATION_CAP)
            .collect();
    }

    let families: HashSet<Option<&str>> = saved.iter().map(genre_family).collect();
    let saved_ids: HashSet<&Option<EntryId>> = saved.iter().map(|e| &e.id).collect();
    catalog
        .iter()
        .filter(|e| !saved_ids.contains(&e.id) && families.contains(&genre_family(e)))
        .collect()
}

// "SciFi Epic" and "SciFi Noir" share the "SciFi" family. Entries without
// a genre share the None family and match each other.
fn genre_family(entry: &CatalogEntry) -> Option<&str> {
    entry.genre.as_deref().and_then(|g| g.split(' ').next())
}

/// The viewer's saved list. Ephemeral; lives in memory only.
#[derive(Debug, Clone, Default)]
pub struct UserList {
    entries: Vec<CatalogEntry>,
}

impl UserList {
    pub fn new() -> Self {
        UserList::default()
    }

    /// Save the entry, or unsave it if already present. Membership is by
    /// identifier.
    pub fn toggle(&mut self, entry: &CatalogEntry) {
        if let Some(pos) = self.entries.iter().position(|e| e.id == entry.id) {
            self.entries.remove(pos);
        } else {
            self.entries.push(entry.clone());
        }
    }

    pub fn contains(&self, entry: &CatalogEntry) -> bool {
        self.entries.iter().any(|e| e.id == entry.id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fold a freshly saved record back into an in-memory view: replace the
/// entry carrying the same id, or prepend when the record is new to the
/// view. The repository does not push mutations; callers reconcile.
pub fn merge_saved(catalog: &mut Vec<CatalogEntry>, saved: CatalogEntry) {
    match catalog.iter_mut().find(|e| e.id == saved.id) {
        Some(slot) => *slot = saved,
        None => catalog.insert(0, saved),
    }
}

/// Drop the entry with `id` from an in-memory view.
pub fn drop_entry(catalog: &mut Vec<CatalogEntry>, id: &EntryId) {
    catalog.retain(|e| e.id.as_ref() != Some(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    fn entry(id: i64, title: &str, genre: &str, rating: &str) -> CatalogEntry {
        CatalogEntry {
            id: Some(EntryId::Num(id)),
            title: Some(title.to_string()),
            genre: Some(genre.to_string()),
            rating: Some(rating.to_string()),
            ..CatalogEntry::default()
        }
    }

    fn fixture() -> Vec<CatalogEntry> {
        vec![
            entry(1, "Static Horizon", "SciFi Epic", "9.1"),
            entry(2, "Glass Harbor", "Drama Crime", "8.4"),
            entry(3, "The Long Thaw", "SciFi Noir", "7.9"),
            entry(4, "Copper Lanes", "Comedy Heist", "6.5"),
        ]
    }

    #[test]
    fn empty_query_returns_everything() {
        let mut catalog = fixture();
        catalog.push(CatalogEntry {
            kind: EntryKind::Series,
            ..CatalogEntry::default()
        });
        assert_eq!(filter_by_title(&catalog, "").len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = fixture();
        let hits = filter_by_title(&catalog, "haRBor");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.as_deref(), Some("Glass Harbor"));
        assert!(filter_by_title(&catalog, "submarine").is_empty());
    }

    #[test]
    fn untitled_entries_never_match_a_nonempty_query() {
        let catalog = vec![CatalogEntry::default()];
        assert!(filter_by_title(&catalog, "x").is_empty());
        assert_eq!(filter_by_title(&catalog, "").len(), 1);
    }

    #[test]
    fn cold_start_recommends_ratings_containing_nine() {
        let catalog = fixture();
        let recs = recommendations(&catalog, &[]);
        let titles: Vec<_> = recs.iter().map(|e| e.title.as_deref().unwrap()).collect();
        // "9.1" and "7.9" contain the character; "8.4" and "6.5" do not.
        assert_eq!(titles, vec!["Static Horizon", "The Long Thaw"]);
    }

    #[test]
    fn cold_start_is_capped_at_ten() {
        let catalog: Vec<_> = (0..15).map(|i| entry(i, "T", "Genre", "9")).collect();
        assert_eq!(recommendations(&catalog, &[]).len(), 10);
    }

    #[test]
    fn saved_genres_drive_recommendations_and_exclude_saved_entries() {
        let catalog = fixture();
        let saved = vec![catalog[0].clone()];
        let recs = recommendations(&catalog, &saved);
        let titles: Vec<_> = recs.iter().map(|e| e.title.as_deref().unwrap()).collect();
        // Same "SciFi" family, minus the saved entry itself.
        assert_eq!(titles, vec!["The Long Thaw"]);
    }

    #[test]
    fn genreless_saved_entries_match_genreless_catalog_entries() {
        let blank = CatalogEntry {
            id: Some(EntryId::Num(9)),
            title: Some("Untagged".to_string()),
            ..CatalogEntry::default()
        };
        let other_blank = CatalogEntry {
            id: Some(EntryId::Num(10)),
            title: Some("Also Untagged".to_string()),
            ..CatalogEntry::default()
        };
        let catalog = vec![blank.clone(), other_blank.clone(), entry(1, "A", "Drama Epic", "8")];
        let recs = recommendations(&catalog, &[blank]);
        let titles: Vec<_> = recs.iter().map(|e| e.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["Also Untagged"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = UserList::new();
        let e = entry(1, "Static Horizon", "SciFi Epic", "9.1");
        list.toggle(&e);
        assert!(list.contains(&e));
        assert_eq!(list.entries().len(), 1);
        list.toggle(&e);
        assert!(!list.contains(&e));
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_appends_at_the_end() {
        let mut list = UserList::new();
        let a = entry(1, "A", "Drama Epic", "8");
        let b = entry(2, "B", "Drama Epic", "8");
        list.toggle(&a);
        list.toggle(&b);
        assert_eq!(list.entries()[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn merge_replaces_by_id_or_prepends() {
        let mut catalog = fixture();
        let mut updated = catalog[1].clone();
        updated.genre = Some("Drama".to_string());
        merge_saved(&mut catalog, updated);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[1].genre.as_deref(), Some("Drama"));

        let fresh = entry(99, "Fresh", "Comedy Heist", "9");
        merge_saved(&mut catalog, fresh);
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].title.as_deref(), Some("Fresh"));
    }

    #[test]
    fn drop_entry_removes_by_id() {
        let mut catalog = fixture();
        drop_entry(&mut catalog, &EntryId::Num(2));
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|e| e.id != Some(EntryId::Num(2))));
        // Unknown ids are a no-op.
        drop_entry(&mut catalog, &EntryId::Num(777));
        assert_eq!(catalog.len(), 3);
    }
}
