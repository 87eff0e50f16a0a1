//! Single binary web server: REST API over the bracket library, static files from /static.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, STATIC_DIR (default "static"), IDLE_HOURS (default 12).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use futsal_bracket_web::{
    add_goal, create_tournament, parse_roster, progress_percent, record_result, set_match_time,
    set_mvp, top_scorers, GameMatch, MemoryStore, Player, PlayerId, Team, TeamId, Tournament,
    TournamentError, TournamentId, TournamentStore, TOP_SCORERS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// All tournaments live in memory; idle ones are swept periodically.
type AppState = Data<MemoryStore>;

/// How often the idle sweeper runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct NewTeamBody {
    name: String,
    #[serde(default)]
    logo: Option<String>,
    /// Player names for this team.
    #[serde(default)]
    players: Vec<String>,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    /// Seed order.
    teams: Vec<NewTeamBody>,
}

#[derive(Deserialize)]
struct ImportQuery {
    name: String,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    #[serde(default)]
    logo: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddPlayerBody {
    name: String,
    team_id: TeamId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreBody {
    score1: u32,
    score2: u32,
    #[serde(default)]
    penalties1: Option<u32>,
    #[serde(default)]
    penalties2: Option<u32>,
}

#[derive(Deserialize)]
struct MatchTimeBody {
    date: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MvpBody {
    player_id: PlayerId,
}

#[derive(Deserialize)]
struct StatsQuery {
    #[serde(default)]
    top: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse<'a> {
    top_scorers: Vec<&'a Player>,
    progress_percent: u8,
    is_complete: bool,
    champion: Option<&'a Team>,
    third_place: Option<&'a Team>,
    mvp: Option<&'a Player>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/match-3/score)
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: String,
}

/// Path segments: tournament id and player id
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: PlayerId,
}

#[derive(Deserialize)]
struct TournamentRoundPath {
    id: TournamentId,
    round: u32,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn internal_error(e: TournamentError) -> HttpResponse {
    log::error!("{}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
}

/// Save a freshly created tournament and return it.
fn store_new(state: &AppState, created: Result<Tournament, TournamentError>) -> HttpResponse {
    let tournament = match created {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    match state.save(&tournament) {
        Ok(()) => HttpResponse::Ok().json(&tournament),
        Err(e) => internal_error(e),
    }
}

/// Load a tournament, apply a transform, save and return the result.
fn update<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(Tournament) -> Result<Tournament, TournamentError>,
{
    let tournament = match state.load(id) {
        Ok(Some(t)) => t,
        Ok(None) => return not_found(),
        Err(e) => return internal_error(e),
    };
    let tournament = match f(tournament) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    match state.save(&tournament) {
        Ok(()) => HttpResponse::Ok().json(&tournament),
        Err(e) => internal_error(e),
    }
}

/// Load a tournament for a read-only view.
fn view<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&Tournament) -> HttpResponse,
{
    match state.load(id) {
        Ok(Some(t)) => f(&t),
        Ok(None) => not_found(),
        Err(e) => internal_error(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "futsal-bracket-web",
    })
}

#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a tournament from teams in seed order, each with its player names.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut teams = Vec::with_capacity(body.teams.len());
    let mut players = Vec::new();
    for t in body.teams {
        let team = Team::new(t.name.trim(), t.logo.filter(|l| !l.trim().is_empty()));
        players.extend(
            t.players
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(|p| Player::new(p, team.id)),
        );
        teams.push(team);
    }
    store_new(&state, create_tournament(body.name, teams, players))
}

/// Create a tournament from a CSV roster body (`team,player[,logo]`).
#[post("/api/tournaments/import")]
async fn api_import_tournament(state: AppState, query: Query<ImportQuery>, body: String) -> HttpResponse {
    let created = parse_roster(body.as_bytes()).and_then(|r| r.into_tournament(query.name.as_str()));
    store_new(&state, created)
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    view(&state, path.id, |t| HttpResponse::Ok().json(t))
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.remove(path.id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => not_found(),
        Err(e) => internal_error(e),
    }
}

/// Add a team (does not enter the already generated bracket).
#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<AddTeamBody>) -> HttpResponse {
    let body = body.into_inner();
    update(&state, path.id, |mut t| {
        t.add_team(body.name, body.logo)?;
        Ok(t)
    })
}

#[post("/api/tournaments/{id}/players")]
async fn api_add_player(state: AppState, path: Path<TournamentPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    let body = body.into_inner();
    update(&state, path.id, |mut t| {
        t.add_player(body.name, body.team_id)?;
        Ok(t)
    })
}

/// Record a score (and optional shoot-out); the winner advances through the bracket.
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_record_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    update(&state, path.id, |t| {
        Ok(record_result(
            t,
            &path.match_id,
            body.score1,
            body.score2,
            body.penalties1,
            body.penalties2,
        ))
    })
}

/// Schedule a match; the time is snapped to five minutes.
#[put("/api/tournaments/{id}/matches/{match_id}/time")]
async fn api_set_match_time(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<MatchTimeBody>,
) -> HttpResponse {
    update(&state, path.id, |t| Ok(set_match_time(t, &path.match_id, body.date)))
}

#[get("/api/tournaments/{id}/rounds/{round}")]
async fn api_round_matches(state: AppState, path: Path<TournamentRoundPath>) -> HttpResponse {
    view(&state, path.id, |t| {
        let matches: Vec<&GameMatch> = t.matches_in_round(path.round);
        HttpResponse::Ok().json(matches)
    })
}

#[post("/api/tournaments/{id}/players/{player_id}/goals")]
async fn api_add_goal(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    update(&state, path.id, |t| Ok(add_goal(t, path.player_id)))
}

#[put("/api/tournaments/{id}/mvp")]
async fn api_set_mvp(state: AppState, path: Path<TournamentPath>, body: Json<MvpBody>) -> HttpResponse {
    update(&state, path.id, |t| Ok(set_mvp(t, body.player_id)))
}

/// Scorer table, progress, and podium.
#[get("/api/tournaments/{id}/stats")]
async fn api_stats(state: AppState, path: Path<TournamentPath>, query: Query<StatsQuery>) -> HttpResponse {
    let n = query.top.unwrap_or(TOP_SCORERS);
    view(&state, path.id, |t| {
        HttpResponse::Ok().json(StatsResponse {
            top_scorers: top_scorers(t, n),
            progress_percent: progress_percent(t),
            is_complete: t.is_complete(),
            champion: t.champion(),
            third_place: t.third_place_winner(),
            mvp: t.mvp(),
        })
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_idle_hours() -> u64 {
    12
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir());
    let idle_hours: u64 = std::env::var("IDLE_HOURS")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(default_idle_hours);
    let max_idle = Duration::from_secs(idle_hours * 3600);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(MemoryStore::new());

    // Background task: remove tournaments with no activity for IDLE_HOURS
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            match state_cleanup.evict_idle(max_idle) {
                Ok(0) => {}
                Ok(removed) => log::info!(
                    "Cleaned up {} inactive tournament(s) (no activity for {}h)",
                    removed,
                    idle_hours
                ),
                Err(e) => log::warn!("Idle cleanup failed: {}", e),
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_import_tournament)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_add_team)
            .service(api_add_player)
            .service(api_record_score)
            .service(api_set_match_time)
            .service(api_round_matches)
            .service(api_add_goal)
            .service(api_set_mvp)
            .service(api_stats)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn request_bodies_use_camel_case_keys() {
        let team = Uuid::new_v4();
        let body: AddPlayerBody =
            serde_json::from_value(serde_json::json!({ "name": "Ana", "teamId": team })).unwrap();
        assert_eq!((body.name.as_str(), body.team_id), ("Ana", team));

        let player = Uuid::new_v4();
        let body: MvpBody = serde_json::from_value(serde_json::json!({ "playerId": player })).unwrap();
        assert_eq!(body.player_id, player);

        assert!(serde_json::from_value::<MvpBody>(serde_json::json!({ "player_id": player })).is_err());
    }

    #[test]
    fn stats_response_uses_camel_case_keys() {
        let stats = StatsResponse {
            top_scorers: vec![],
            progress_percent: 50,
            is_complete: false,
            champion: None,
            third_place: None,
            mvp: None,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["topScorers"], serde_json::json!([]));
        assert_eq!(json["progressPercent"], 50);
        assert_eq!(json["isComplete"], false);
        assert_eq!(json["thirdPlace"], serde_json::Value::Null);
    }
}
