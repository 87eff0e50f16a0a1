//! Integration tests for snapshot stores and the persisted record layout.

use chrono::{TimeZone, Utc};
use futsal_bracket_web::{
    add_goal, create_tournament, record_result, set_match_time, set_mvp, JsonFileStore,
    MemoryStore, Player, Team, Tournament, TournamentStore,
};
use std::time::Duration;
use uuid::Uuid;

fn played_tournament() -> Tournament {
    let teams: Vec<Team> = (0..5).map(|i| Team::new(format!("T{i}"), None)).collect();
    let players = vec![Player::new("Ana", teams[0].id), Player::new("Ben", teams[1].id)];
    let ana = players[0].id;
    let t = create_tournament("Cup", teams, players).unwrap();
    let t = record_result(t, "match-1", 2, 2, Some(4), Some(3));
    let t = set_match_time(t, "match-5", Utc.with_ymd_and_hms(2026, 10, 16, 17, 4, 31).unwrap());
    let t = add_goal(t, ana);
    set_mvp(t, ana)
}

#[test]
fn json_layout_uses_record_field_names() {
    let t = played_tournament();
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["totalRounds"], 3);
    assert!(json["currentRound"].is_number());
    let m = &json["matches"][4];
    assert!(m.get("team1Id").is_some());
    assert!(m.get("winnerId").is_some());
    assert!(m.get("nextMatchId").is_some());
    assert_eq!(m["matchTime"]["durationMinutes"], 60);
    assert_eq!(m["matchTime"]["date"], "2026-10-16T17:05:00Z");
    assert_eq!(json["matches"][7]["isThirdPlace"], true);
    assert_eq!(json["players"][0]["isMVP"], true);
    assert_eq!(json["players"][0]["teamId"], t.teams[0].id.to_string());
}

#[test]
fn json_file_store_round_trips() {
    let dir = std::env::temp_dir().join(format!("futsal-bracket-{}", Uuid::new_v4()));
    let store = JsonFileStore::new(&dir);
    assert_eq!(store.dir(), dir.as_path());
    let t = played_tournament();

    assert_eq!(store.load(t.id).unwrap(), None);
    store.save(&t).unwrap();
    assert!(dir.join(format!("{}.json", t.id)).exists());
    assert_eq!(store.load(t.id).unwrap(), Some(t.clone()));

    assert!(store.remove(t.id).unwrap());
    assert!(!store.remove(t.id).unwrap());
    assert_eq!(store.load(t.id).unwrap(), None);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn json_file_store_reports_corrupt_snapshots() {
    let dir = std::env::temp_dir().join(format!("futsal-bracket-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let id = Uuid::new_v4();
    std::fs::write(dir.join(format!("{}.json", id)), "{ not json").unwrap();
    let store = JsonFileStore::new(&dir);
    assert!(store.load(id).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn memory_store_saves_loads_and_evicts() {
    let store = MemoryStore::new();
    let t = played_tournament();
    store.save(&t).unwrap();
    assert_eq!(store.len().unwrap(), 1);
    assert_eq!(store.load(t.id).unwrap(), Some(t.clone()));
    assert_eq!(store.load(Uuid::new_v4()).unwrap(), None);

    assert_eq!(store.evict_idle(Duration::from_secs(3600)).unwrap(), 0);
    assert_eq!(store.evict_idle(Duration::ZERO).unwrap(), 1);
    assert!(store.is_empty().unwrap());

    store.save(&t).unwrap();
    assert!(store.remove(t.id).unwrap());
    assert!(!store.remove(t.id).unwrap());
}
