use actix_web::{web, App, HttpServer, HttpResponse, Result, middleware};
use actix_web::cookie::Key;
use actix_files::Files;
use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use crate::error::BracketError;
use crate::form::PlayerSubmission;
use crate::schedule::TeamSide;
use crate::tracker::BracketTracker;

/// Session key for the per-client wins panel flag
const SHOW_WINS_KEY: &str = "show_wins";

pub struct AppState {
    pub tracker: Mutex<BracketTracker>,
}

impl AppState {
    pub fn new(tracker: BracketTracker) -> Self {
        Self {
            tracker: Mutex::new(tracker),
        }
    }
}

#[derive(Deserialize)]
pub struct MarkWinnerRequest {
    team: TeamSide,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkWinnerResponse {
    pub game_id: u32,
    pub winner: Option<TeamSide>,
}

#[derive(Serialize, Deserialize)]
pub struct PlayerWins {
    pub player: String,
    pub wins: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinsResponse {
    pub show_wins: bool,
    pub standings: Vec<PlayerWins>,
}

fn lock_tracker(state: &web::Data<AppState>) -> Result<MutexGuard<'_, BracketTracker>> {
    state
        .tracker
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("schedule state lock poisoned"))
}

fn show_wins(session: &Session) -> Result<bool> {
    Ok(session.get::<bool>(SHOW_WINS_KEY)?.unwrap_or(false))
}

// Current schedule endpoint
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let tracker = lock_tracker(&state)?;
    let schedule = tracker.schedule().ok_or(BracketError::NoSchedule)?;
    Ok(HttpResponse::Ok().json(schedule))
}

// Player form submission endpoint
async fn submit_players(
    req: web::Json<PlayerSubmission>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut tracker = lock_tracker(&state)?;
    let schedule = tracker.submit(&req)?;
    Ok(HttpResponse::Ok().json(schedule))
}

async fn reset_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut tracker = lock_tracker(&state)?;
    tracker.reset()?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

async fn toggle_colors(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut tracker = lock_tracker(&state)?;
    let schedule = tracker.toggle_colors()?;
    Ok(HttpResponse::Ok().json(schedule))
}

async fn mark_winner(
    game_id: web::Path<u32>,
    req: web::Json<MarkWinnerRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let game_id = game_id.into_inner();
    let mut tracker = lock_tracker(&state)?;
    let winner = tracker.mark_winner(game_id, req.team)?;
    Ok(HttpResponse::Ok().json(MarkWinnerResponse { game_id, winner }))
}

// Win tally endpoint; panel visibility comes from the client's session
async fn get_wins(state: web::Data<AppState>, session: Session) -> Result<HttpResponse> {
    let tracker = lock_tracker(&state)?;
    let standings = tracker
        .standings()?
        .into_iter()
        .map(|(player, wins)| PlayerWins { player, wins })
        .collect();

    Ok(HttpResponse::Ok().json(WinsResponse {
        show_wins: show_wins(&session)?,
        standings,
    }))
}

async fn toggle_wins_panel(session: Session) -> Result<HttpResponse> {
    let show = !show_wins(&session)?;
    session.insert(SHOW_WINS_KEY, show)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"showWins": show})))
}

const INDEX_HTML: &str = include_str!("../templates/index.html");

// HTML page handler
async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(INDEX_HTML))
}

/// Cookie-backed session used only for view state
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}

/// Registers the page and API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/api/schedule")
                .route(web::get().to(get_schedule))
                .route(web::post().to(submit_players))
                .route(web::delete().to(reset_schedule)),
        )
        .route("/api/schedule/toggle-colors", web::post().to(toggle_colors))
        .route("/api/games/{id}/winner", web::post().to(mark_winner))
        .route("/api/wins", web::get().to(get_wins))
        .route("/api/wins/toggle", web::post().to(toggle_wins_panel));
}

pub async fn start_server(port: u16, tracker: BracketTracker) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(tracker));
    let session_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(session_middleware(session_key.clone()))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
