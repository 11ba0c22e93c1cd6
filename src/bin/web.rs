//! Web driver: step through games over a JSON API.
//! Run with: cargo run --bin web
//! Env: HOST and PORT (default 0.0.0.0:8080), GAME_SEED for games created without a seed.

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use district_tournament::{DistrictId, Game, GameConfig, GameId};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// A stored game and when a request last touched it.
struct GameEntry {
    game: Game,
    last_activity: Instant,
}

/// Games by id.
type AppState = Data<RwLock<HashMap<GameId, GameEntry>>>;

/// Games untouched for this long are swept.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateGameBody {
    /// Game input in the setup file layout.
    input: String,
    seed: Option<u64>,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

/// Path segments: game id and district id (e.g. /api/games/{id}/districts/{district_id})
#[derive(Deserialize)]
struct GameDistrictPath {
    id: GameId,
    district_id: DistrictId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "district-tournament",
    })
}

/// Create a game from input (returns its snapshot with id; client stores id for later requests).
#[post("/api/games")]
async fn api_create_game(
    state: AppState,
    default_config: Data<GameConfig>,
    body: Json<CreateGameBody>,
) -> HttpResponse {
    let config = GameConfig {
        seed: body.seed.unwrap_or(default_config.seed),
    };
    let game = match Game::setup(config, &body.input) {
        Ok(game) => game,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    log::info!(
        "game {} created from {} districts, {} unviable at setup (seed {})",
        game.id,
        game.districts().len(),
        game.eliminated().len(),
        config.seed
    );
    let id = game.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = g.entry(id).or_insert(GameEntry {
        game,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(entry.game.snapshot())
}

/// Get a game snapshot by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.game.snapshot())
        }
        None => not_found(),
    }
}

/// Play one round: select duelers, duel, return them, prune emptied districts.
#[post("/api/games/{id}/rounds")]
async fn api_play_round(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match entry.game.play_round() {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Look up a district still in the game.
#[get("/api/games/{id}/districts/{district_id}")]
async fn api_find_district(state: AppState, path: Path<GameDistrictPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match entry.game.find_district(path.district_id) {
        Some(district) => HttpResponse::Ok().json(district),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No district" })),
    }
}

/// Remove a district from the game and return its record (404 if it is not in the game).
#[delete("/api/games/{id}/districts/{district_id}")]
async fn api_eliminate_district(state: AppState, path: Path<GameDistrictPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match entry.game.eliminate_district(path.district_id) {
        Some(district) => {
            log::info!("game {}: district {} eliminated by request", path.id, district.id);
            HttpResponse::Ok().json(district)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No district" })),
    }
}

/// Where to listen and how to seed new games.
struct ServerConfig {
    host: String,
    port: u16,
    game: GameConfig,
}

impl ServerConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    /// HOST and PORT pick the bind address; GAME_SEED is read by [`GameConfig::from_env`].
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("PORT={:?} is not a port number, using {}", raw, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }),
            Err(_) => Self::DEFAULT_PORT,
        };
        Self {
            host,
            port,
            game: GameConfig::from_env(),
        }
    }
}

/// How often idle games are swept.
const SWEEP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Drop games idle past [`INACTIVITY_TIMEOUT`]. Returns how many were dropped.
fn sweep_idle_games(games: &mut HashMap<GameId, GameEntry>) -> usize {
    let before = games.len();
    games.retain(|id, entry| {
        let keep = entry.last_activity.elapsed() < INACTIVITY_TIMEOUT;
        if !keep {
            log::debug!("game {} idle after {} rounds, dropping", id, entry.game.rounds_played());
        }
        keep
    });
    before - games.len()
}

fn spawn_idle_sweeper(state: AppState) {
    actix_web::rt::spawn(async move {
        let mut ticks = actix_web::rt::time::interval(SWEEP_INTERVAL);
        loop {
            ticks.tick().await;
            let Ok(mut games) = state.write() else {
                log::warn!("game store lock poisoned, skipping idle sweep");
                continue;
            };
            let dropped = sweep_idle_games(&mut games);
            if dropped > 0 {
                log::info!("idle sweep dropped {} game(s), {} left", dropped, games.len());
            }
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!(
        "district tournament listening on {}:{}, new games seeded with {}",
        config.host,
        config.port,
        config.game.seed
    );

    let state: AppState = Data::new(RwLock::new(HashMap::new()));
    let default_config = Data::new(config.game);
    spawn_idle_sweeper(state.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(default_config.clone())
            .service(api_health)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_play_round)
            .service(api_find_district)
            .service(api_eliminate_district)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
