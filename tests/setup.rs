//! Integration tests for tournament setup, roster import, and lookups.

use futsal_bracket_web::{create_tournament, parse_roster, Player, Team, TournamentError};
use uuid::Uuid;

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i}"), None)).collect()
}

#[test]
fn create_rejects_bad_rosters() {
    assert_eq!(
        create_tournament("Cup", teams(1), vec![]).unwrap_err(),
        TournamentError::NotEnoughTeams { count: 1 }
    );

    let dup = vec![Team::new("Lions", None), Team::new("LIONS", None)];
    assert_eq!(
        create_tournament("Cup", dup, vec![]).unwrap_err(),
        TournamentError::DuplicateTeamName
    );

    let blank = vec![Team::new("Lions", None), Team::new("  ", None)];
    assert_eq!(
        create_tournament("Cup", blank, vec![]).unwrap_err(),
        TournamentError::EmptyName
    );

    let stray = Uuid::new_v4();
    let players = vec![Player::new("Ana", stray)];
    assert_eq!(
        create_tournament("Cup", teams(3), players).unwrap_err(),
        TournamentError::TeamNotFound(stray)
    );
}

#[test]
fn add_team_appends_without_touching_the_bracket() {
    let mut t = create_tournament("Cup", teams(4), vec![]).unwrap();
    let matches = t.matches.clone();
    let id = t.add_team("  Bears ", Some("bears.png".to_string())).unwrap();
    assert_eq!(t.teams.len(), 5);
    let bears = t.team(id).unwrap();
    assert_eq!(bears.name, "Bears");
    assert_eq!(bears.logo.as_deref(), Some("bears.png"));
    assert_eq!(t.matches, matches);

    assert_eq!(t.add_team("bears", None), Err(TournamentError::DuplicateTeamName));
    assert_eq!(t.add_team(" ", None), Err(TournamentError::EmptyName));
}

#[test]
fn add_player_requires_known_team() {
    let mut t = create_tournament("Cup", teams(2), vec![]).unwrap();
    let team = t.teams[0].id;
    let id = t.add_player(" Ana ", team).unwrap();
    let ana = t.player(id).unwrap();
    assert_eq!(ana.name, "Ana");
    assert_eq!(ana.goals, 0);
    assert!(!ana.is_mvp);
    assert_eq!(t.players_of_team(team).len(), 1);
    assert!(t.players_of_team(t.teams[1].id).is_empty());

    let stray = Uuid::new_v4();
    assert_eq!(t.add_player("Ben", stray), Err(TournamentError::TeamNotFound(stray)));
    assert_eq!(t.add_player("", team), Err(TournamentError::EmptyName));
}

#[test]
fn roster_csv_keeps_first_appearance_order() {
    let csv = "team,player,logo\n\
               Lions,Ana,lions.png\n\
               Tigers,Ben,\n\
               lions,Carl,\n\
               Bears,,\n";
    let roster = parse_roster(csv.as_bytes()).unwrap();
    let names: Vec<&str> = roster.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Lions", "Tigers", "Bears"]);
    assert_eq!(roster.teams[0].logo.as_deref(), Some("lions.png"));
    assert_eq!(roster.teams[1].logo, None);
    assert_eq!(roster.players.len(), 3);
    assert_eq!(roster.players[2].name, "Carl");
    assert_eq!(roster.players[2].team_id, roster.teams[0].id);

    let t = roster.into_tournament("Spring Cup").unwrap();
    assert_eq!(t.total_rounds, 2);
    assert_eq!(t.matches.iter().filter(|m| m.is_bye).count(), 1);
    assert_eq!(t.players_of_team(t.teams[0].id).len(), 2);
}

#[test]
fn roster_without_logo_column_parses() {
    let roster = parse_roster("team,player\nA,x\nB,y\n".as_bytes()).unwrap();
    assert_eq!(roster.teams.len(), 2);
    assert_eq!(roster.players.len(), 2);
}

#[test]
fn roster_rejects_blank_team() {
    let err = parse_roster("team,player\nA,x\n ,y\n".as_bytes()).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidRoster(ref msg) if msg.contains("line 3")));
}
