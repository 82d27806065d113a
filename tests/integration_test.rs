// Integration tests for kindred
use kindred::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn write_file(dir: &Path, name: &str, contents: &str) {
    let mut file = File::create(dir.join(name)).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}

/// Stage a game catalog where "Stardew Valley" has neighbors
/// [5, 12, 40] over a 41-row table.
fn stage_games(dir: &Path) {
    let mut csv = String::from("Name,Genres,Release date,About the game\n");
    for i in 0..=40 {
        csv.push_str(&format!(
            "Game {i},\"Indie, Simulation\",20{:02}-06-01,About game {i}\n",
            i % 26
        ));
    }
    write_file(dir, "games.csv", &csv);
    write_file(
        dir,
        "top_game_similarities.json",
        r#"{"Stardew Valley": [5, 12, 40], "Game 3": [0]}"#,
    );
}

fn stage_music(dir: &Path) {
    write_file(
        dir,
        "music.csv",
        concat!(
            "name,artists,Mood,release_date\n",
            "One Dance,\"['Drake', 'Wizkid', 'Kyla']\",\"Dance, Upbeat\",2016-04-05\n",
            "Work,\"['Rihanna', 'Drake']\",Energetic,2016-01-27\n",
            "Untitled Demo,not-a-list,,unknown\n",
        ),
    );
    write_file(
        dir,
        "top_music_similarities.json",
        r#"{"One Dance": [1, 2]}"#,
    );
}

#[test]
fn test_games_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    stage_games(tmp.path());
    let registry = CatalogRegistry::new(tmp.path());

    let records = registry
        .resolve(Domain::Games, "Stardew Valley", None)
        .unwrap();

    assert_eq!(records.len(), 3);
    let names: Vec<&str> = records
        .iter()
        .map(|r| r.get("name").unwrap().as_text().unwrap())
        .collect();
    assert_eq!(names, ["Game 5", "Game 12", "Game 40"]);

    let first = &records[0];
    assert_eq!(
        first.fields().map(|(name, _)| name).collect::<Vec<_>>(),
        ["name", "genres", "release_date", "description"]
    );
    assert_eq!(
        first.get("genres").unwrap().as_tags().unwrap(),
        ["Indie", "Simulation"]
    );
    assert_eq!(
        first.get("description").unwrap().as_text(),
        Some("About game 5")
    );
}

#[test]
fn test_unknown_and_blank_titles_resolve_empty() {
    let tmp = tempfile::tempdir().unwrap();
    stage_games(tmp.path());
    let registry = CatalogRegistry::new(tmp.path());

    assert!(registry
        .resolve(Domain::Games, "Undertale", None)
        .unwrap()
        .is_empty());
    assert!(registry
        .resolve(Domain::Games, "", None)
        .unwrap()
        .is_empty());
    // Exact match only: case differences are a miss.
    assert!(registry
        .resolve(Domain::Games, "stardew valley", None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_music_artist_normalization_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    stage_music(tmp.path());
    let registry = CatalogRegistry::new(tmp.path());

    let records = registry.resolve(Domain::Music, "One Dance", None).unwrap();
    assert_eq!(records.len(), 2);

    // Decoded list literal, joined for display.
    assert_eq!(
        records[0].get("artist").unwrap().as_text(),
        Some("Rihanna, Drake")
    );
    assert_eq!(
        records[0].get("mood").unwrap().as_tags().unwrap(),
        ["Energetic"]
    );

    // Malformed list falls back to the raw text; blank mood becomes an
    // empty tag list. The record itself still comes through.
    assert_eq!(
        records[1].get("artist").unwrap().as_text(),
        Some("not-a-list")
    );
    assert_eq!(records[1].get("mood").unwrap().as_tags(), Some(&[][..]));
}

#[test]
fn test_limit_truncates_preserving_rank() {
    let tmp = tempfile::tempdir().unwrap();
    stage_games(tmp.path());
    let registry = CatalogRegistry::new(tmp.path());

    let records = registry
        .resolve(Domain::Games, "Stardew Valley", Some(2))
        .unwrap();
    let names: Vec<&str> = records
        .iter()
        .map(|r| r.get("name").unwrap().as_text().unwrap())
        .collect();
    assert_eq!(names, ["Game 5", "Game 12"]);
}

#[test]
fn test_domains_are_independent() {
    let tmp = tempfile::tempdir().unwrap();
    stage_games(tmp.path());
    // Music artifacts are present but malformed.
    write_file(tmp.path(), "music.csv", "name,artists\nOne Dance");
    write_file(tmp.path(), "top_music_similarities.json", "{ broken");
    let registry = CatalogRegistry::new(tmp.path());

    assert!(registry.resolve(Domain::Music, "One Dance", None).is_err());
    assert_eq!(
        registry
            .resolve(Domain::Games, "Stardew Valley", None)
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn test_concurrent_first_access_loads_once() {
    let tmp = tempfile::tempdir().unwrap();
    stage_games(tmp.path());
    let registry = std::sync::Arc::new(CatalogRegistry::new(tmp.path()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                registry
                    .resolve(Domain::Games, "Stardew Valley", None)
                    .unwrap()
                    .len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
