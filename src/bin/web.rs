//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Court layout via COURT_COUNT (playing courts) and NEXT_COURT_COUNT (staging courts).

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::Utc;
use court_manager_web::{
    board_to_csv, BoardId, BoardLayout, BoardRegistry, BoardView, CourtManager, DragDescriptor,
    DragOrigin, DropTarget, PlayerId,
};
use serde::Deserialize;
use std::sync::RwLock;
use std::time::Duration;

/// In-memory state: one board per session. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<BoardRegistry>>;

/// Inactivity threshold: boards not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Session key holding the board id.
const BOARD_SESSION_KEY: &str = "board_id";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct DragStartBody {
    player_id: PlayerId,
    origin: DragOrigin,
}

#[derive(Deserialize)]
struct DropBody {
    player_id: PlayerId,
    origin: DragOrigin,
    target: DropTarget,
}

/// Path segment: player id (e.g. /api/board/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

/// Board id remembered in this session, if any.
fn session_board_id(session: &Session) -> Option<BoardId> {
    match session.get::<BoardId>(BOARD_SESSION_KEY) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Unreadable board id in session: {}", e);
            None
        }
    }
}

/// Board for this session, created (and remembered in the session) if it has none
/// or its board expired. Only mutating handlers call this.
fn session_manager<'a>(registry: &'a mut BoardRegistry, session: &Session) -> &'a mut CourtManager {
    let existing = session_board_id(session);
    let (id, manager) = registry.get_or_create(existing);
    if existing != Some(id) {
        if let Err(e) = session.insert(BOARD_SESSION_KEY, id) {
            log::error!("Failed to store board id in session: {}", e);
        }
    }
    manager
}

fn board_view(manager: &CourtManager) -> HttpResponse {
    HttpResponse::Ok().json(BoardView::build(manager, Utc::now()))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "court-manager-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current board with derived elapsed times. Polled by the page every second.
/// A session without a board sees an empty one; nothing is stored until it mutates.
#[get("/api/board")]
async fn api_get_board(state: AppState, session: Session) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(session_board_id(&session)) {
        Some(manager) => board_view(manager),
        None => board_view(&g.fresh_manager()),
    }
}

/// Add a player to the waiting queue (name must not be blank).
#[post("/api/board/players")]
async fn api_add_player(
    state: AppState,
    session: Session,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let manager = session_manager(&mut g, &session);
    match manager.on_add_player(&body.name, Utc::now()) {
        Ok(_) => board_view(manager),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a player from the queue or their court. Unknown ids are ignored.
#[delete("/api/board/players/{player_id}")]
async fn api_remove_player(
    state: AppState,
    session: Session,
    path: Path<PlayerPath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let manager = session_manager(&mut g, &session);
    if manager.on_remove_player(path.player_id).is_none() {
        log::debug!("Remove of unknown player {} ignored", path.player_id);
    }
    board_view(manager)
}

/// Register the drag that just started.
#[post("/api/board/drag")]
async fn api_drag_start(
    state: AppState,
    session: Session,
    body: Json<DragStartBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let manager = session_manager(&mut g, &session);
    let body = body.into_inner();
    manager.on_drag_start(DragDescriptor {
        player_id: body.player_id,
        origin: body.origin,
    });
    board_view(manager)
}

/// Discard the in-flight drag (dropped outside any target).
#[delete("/api/board/drag")]
async fn api_drag_cancel(state: AppState, session: Session) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let manager = session_manager(&mut g, &session);
    manager.cancel_drag();
    board_view(manager)
}

/// Drop a dragged player onto the queue or a court. Rejected drops still answer 200.
#[post("/api/board/drop")]
async fn api_drop(
    state: AppState,
    session: Session,
    body: Json<DropBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let manager = session_manager(&mut g, &session);
    let body = body.into_inner();
    let descriptor = DragDescriptor {
        player_id: body.player_id,
        origin: body.origin,
    };
    manager.on_drop(&descriptor, &body.target, Utc::now());
    board_view(manager)
}

/// Download the board as CSV.
#[get("/api/board/export.csv")]
async fn api_export_csv(state: AppState, session: Session) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(session_board_id(&session)) {
        Some(manager) => csv_response(manager),
        None => csv_response(&g.fresh_manager()),
    }
}

fn csv_response(manager: &CourtManager) -> HttpResponse {
    match board_to_csv(manager.board(), Utc::now()) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"courts.csv\""))
            .body(bytes),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": "Export failed" }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Read a count from the environment, falling back to `default` when unset or invalid.
fn env_count(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let defaults = BoardLayout::default();
    let layout = BoardLayout {
        courts: env_count("COURT_COUNT", defaults.courts),
        next_courts: env_count("NEXT_COURT_COUNT", defaults.next_courts),
    };
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!(
        "Board layout: {} courts, {} staging courts",
        layout.courts,
        layout.next_courts
    );

    let state = Data::new(RwLock::new(BoardRegistry::new(layout)));
    // Sessions do not survive a restart; neither do boards.
    let session_key = Key::generate();

    // Background task: every 30 minutes, remove boards inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let removed = g.remove_idle(INACTIVITY_TIMEOUT);
            if removed > 0 {
                log::info!("Cleaned up {} inactive board(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(
                // Served over plain HTTP on a LAN/VPS, so the cookie must not require TLS.
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_board)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_drag_start)
            .service(api_drag_cancel)
            .service(api_drop)
            .service(api_export_csv)
            .service(Files::new("/static", "static"))
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
