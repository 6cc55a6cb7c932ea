use crate::entry::{CatalogEntry, EntryId, EntryKind};
use serde_json::json;

/// Built-in catalog written to a fresh offline profile so the browsing
/// screens have something to show before the viewer adds anything.
pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: Some(EntryId::Num(1)),
            kind: EntryKind::Movie,
            title: Some("Static Horizon".to_string()),
            description: Some(
                "A deep-space salvage crew wakes a derelict ship that remembers them.".to_string(),
            ),
            genre: Some("SciFi Epic".to_string()),
            rating: Some("9.1".to_string()),
            duration: Some("2h 18m".to_string()),
            year: Some(2023),
            category: Some("Trending Now".to_string()),
            image: Some("https://picsum.photos/seed/marquee-1/600/900".to_string()),
            hero_image: Some("https://picsum.photos/seed/marquee-1h/1280/720".to_string()),
            status: Some("ready".to_string()),
            stream_id: Some("str-101".to_string()),
            views: Some("2.4M".to_string()),
            ..CatalogEntry::default()
        },
        CatalogEntry {
            id: Some(EntryId::Num(2)),
            kind: EntryKind::Series,
            title: Some("Glass Harbor".to_string()),
            description: Some(
                "Three families run the same smuggling pier across thirty years.".to_string(),
            ),
            genre: Some("Drama Crime".to_string()),
            rating: Some("8.7".to_string()),
            duration: Some("3 Seasons".to_string()),
            year: Some(2021),
            category: Some("Critically Acclaimed".to_string()),
            image: Some("https://picsum.photos/seed/marquee-2/600/900".to_string()),
            hero_image: Some("https://picsum.photos/seed/marquee-2h/1280/720".to_string()),
            status: Some("ready".to_string()),
            stream_id: Some("str-102".to_string()),
            views: Some("1.8M".to_string()),
            seasons: vec![
                json!({ "name": "Season 1", "episodes": 8 }),
                json!({ "name": "Season 2", "episodes": 8 }),
                json!({ "name": "Season 3", "episodes": 6 }),
            ],
        },
        CatalogEntry {
            id: Some(EntryId::Num(3)),
            kind: EntryKind::Movie,
            title: Some("The Long Thaw".to_string()),
            description: Some(
                "An arctic detective digs up a case the ice was supposed to keep.".to_string(),
            ),
            genre: Some("SciFi Noir".to_string()),
            rating: Some("7.9".to_string()),
            duration: Some("1h 52m".to_string()),
            year: Some(2019),
            category: Some("Hidden Gems".to_string()),
            image: Some("https://picsum.photos/seed/marquee-3/600/900".to_string()),
            status: Some("ready".to_string()),
            stream_id: Some("str-103".to_string()),
            views: Some("640K".to_string()),
            ..CatalogEntry::default()
        },
        CatalogEntry {
            id: Some(EntryId::Num(4)),
            kind: EntryKind::Movie,
            title: Some("Copper Lanes".to_string()),
            description: Some(
                "Five retired couriers plan one last ride through the old city.".to_string(),
            ),
            genre: Some("Comedy Heist".to_string()),
            rating: Some("6.8".to_string()),
            duration: Some("1h 41m".to_string()),
            year: Some(2022),
            category: Some("Feel Good".to_string()),
            image: Some("https://picsum.photos/seed/marquee-4/600/900".to_string()),
            status: Some("ready".to_string()),
            stream_id: Some("str-104".to_string()),
            views: Some("910K".to_string()),
            ..CatalogEntry::default()
        },
        CatalogEntry {
            id: Some(EntryId::Num(5)),
            kind: EntryKind::Series,
            title: Some("Night Cartographers".to_string()),
            description: Some(
                "A mapmaking guild charts streets that only exist after dark.".to_string(),
            ),
            genre: Some("Mystery Thriller".to_string()),
            rating: Some("9.3".to_string()),
            duration: Some("2 Seasons".to_string()),
            year: Some(2024),
            category: Some("Trending Now".to_string()),
            image: Some("https://picsum.photos/seed/marquee-5/600/900".to_string()),
            hero_image: Some("https://picsum.photos/seed/marquee-5h/1280/720".to_string()),
            status: Some("ready".to_string()),
            stream_id: Some("str-105".to_string()),
            views: Some("3.1M".to_string()),
            seasons: vec![
                json!({ "name": "Season 1", "episodes": 10 }),
                json!({ "name": "Season 2", "episodes": 10 }),
            ],
        },
        CatalogEntry {
            id: Some(EntryId::Num(6)),
            kind: EntryKind::Movie,
            title: Some("Paper Planets".to_string()),
            description: Some(
                "A sister folds her brother a solar system to bring him home.".to_string(),
            ),
            genre: Some("Animation Family".to_string()),
            rating: Some("8.9".to_string()),
            duration: Some("1h 36m".to_string()),
            year: Some(2020),
            category: Some("Family Night".to_string()),
            image: Some("https://picsum.photos/seed/marquee-6/600/900".to_string()),
            status: Some("ready".to_string()),
            stream_id: Some("str-106".to_string()),
            views: Some("1.1M".to_string()),
            ..CatalogEntry::default()
        },
    ]
}
