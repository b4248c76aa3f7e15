//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use placar_web::{adjust_points, start_game, CoinFace, CounterKind, GameId, GameSession, PlayerId};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-game entry: session data + last activity time (for auto-cleanup).
struct GameEntry {
    game: GameSession,
    last_activity: Instant,
}

/// In-memory state: many game sessions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<GameId, GameEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Spin phase of a coin flip before the result settles.
const FLIP_SPIN: Duration = Duration::from_secs(1);
/// How long the settled face stays on screen before it is hidden again.
const FACE_LINGER: Duration = Duration::from_secs(1);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RenamePlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct AdjustBody {
    player_id: PlayerId,
    counter: CounterKind,
    delta: i32,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

/// Path segments: game id and player id (e.g. /api/games/{id}/players/{player_id})
#[derive(Deserialize)]
struct GamePlayerPath {
    id: GameId,
    player_id: PlayerId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "placar-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new game session (returns it with id; client stores id for subsequent requests).
#[post("/api/games")]
async fn api_create_game(state: AppState) -> HttpResponse {
    let game = GameSession::new();
    let id = game.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        GameEntry {
            game,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().game)
}

/// Get a game by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.game)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

/// Add a player config with the next default name (game must be in Setup).
/// Adding beyond 8 players is a no-op and still returns the game.
#[post("/api/games/{id}/players")]
async fn api_add_player(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.game;
    match t.add_player_config() {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a player config by id (game must be in Setup; the first two stay).
#[delete("/api/games/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<GamePlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.game;
    match t.remove_player_config(path.player_id) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Rename a player config (game must be in Setup). The name is stored verbatim.
#[put("/api/games/{id}/players/{player_id}/name")]
async fn api_rename_player(
    state: AppState,
    path: Path<GamePlayerPath>,
    body: Json<RenamePlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.game;
    match t.update_player_name(path.player_id, body.name.clone()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Start the game (Setup -> Playing).
#[post("/api/games/{id}/start")]
async fn api_start_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.game;
    match start_game(t) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Adjust one counter for one player and evaluate win/loss. The response
/// carries the one-time winner signal for this adjustment.
#[post("/api/games/{id}/adjust")]
async fn api_adjust(state: AppState, path: Path<GamePath>, body: Json<AdjustBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.game;
    match adjust_points(t, body.player_id, body.counter, body.delta) {
        Ok(winner) => HttpResponse::Ok().json(serde_json::json!({ "game": t, "winner": winner })),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Restart: same players, starting counters, coin counters cleared.
#[post("/api/games/{id}/restart")]
async fn api_restart_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.game;
    match t.restart() {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Back to the setup screen: keep configs, drop the runtime roster.
#[post("/api/games/{id}/setup")]
async fn api_return_to_setup(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.game;
    match t.return_to_setup() {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Flip the coin: respond immediately with the spinning state, then settle
/// after the spin interval and hide the face after the linger interval.
/// A new flip supersedes any pending one via the generation token.
#[post("/api/games/{id}/coin/flip")]
async fn api_flip_coin(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let game_id = path.id;
    let generation;
    let response;
    {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        let entry = match g.get_mut(&game_id) {
            Some(e) => e,
            None => {
                return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" }))
            }
        };
        entry.last_activity = Instant::now();
        generation = entry.game.coin.begin();
        response = HttpResponse::Ok().json(&entry.game);
    }

    let state_bg = state.clone();
    actix_web::rt::spawn(async move {
        actix_web::rt::time::sleep(FLIP_SPIN).await;
        let face = CoinFace::flip(&mut rand::thread_rng());
        {
            let mut g = match state_bg.write() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            let entry = match g.get_mut(&game_id) {
                Some(e) => e,
                None => return,
            };
            if !entry.game.coin.settle(generation, face) {
                return;
            }
        }
        actix_web::rt::time::sleep(FACE_LINGER).await;
        let mut g = match state_bg.write() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        if let Some(entry) = g.get_mut(&game_id) {
            entry.game.coin.clear_face(generation);
        }
    });

    response
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<GameId, GameEntry>::new()));

    // Background task: every 30 minutes, remove games inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive game(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_rename_player)
            .service(api_start_game)
            .service(api_adjust)
            .service(api_restart_game)
            .service(api_return_to_setup)
            .service(api_flip_coin)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
