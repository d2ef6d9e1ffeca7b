use std::sync::Arc;

use warp::Filter;

use wordle_types::{GameError, Player};

use crate::game_manager::GameService;

pub mod config;
pub mod game_manager;
pub mod word_source;

/// Identity headers set by the CLI client.
const ACTOR_LOGIN_HEADER: &str = "extendo-actorlogin";
const ACTOR_ID_HEADER: &str = "extendo-actorid";

pub fn create_routes(
    service: Arc<GameService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map({
        let service = service.clone();
        move || service.clone()
    });

    let player = warp::header::optional::<String>(ACTOR_LOGIN_HEADER)
        .and(warp::header::optional::<i64>(ACTOR_ID_HEADER))
        .map(|login: Option<String>, id: Option<i64>| Player::new(id, login));

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Current game, sanitized
    let status = warp::path!("wordle" / "status")
        .and(warp::get())
        .and(player.clone())
        .and(service_filter.clone())
        .and_then(handle_status_request);

    // Guess submission; the guess travels as the final path segment
    let guess = warp::path!("wordle" / String)
        .and(warp::post())
        .and(player)
        .and(service_filter)
        .and_then(handle_guess_request);

    health
        .or(status)
        .or(guess)
        .with(warp::log("wordle_server"))
}

async fn handle_status_request(
    player: Player,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.current_game(&player).await {
        Ok(Some(view)) => Ok(warp::reply::with_status(
            warp::reply::json(&view),
            warp::http::StatusCode::OK,
        )),
        Ok(None) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "No game running today"
            })),
            warp::http::StatusCode::NOT_FOUND,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_guess_request(
    guess: String,
    player: Player,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.submit_guess(&player, &guess).await {
        Ok(view) => Ok(warp::reply::with_status(
            warp::reply::json(&view),
            warp::http::StatusCode::OK,
        )),
        // A guess against a finished or stale game is a no-op: return the
        // game unchanged.
        Err(GameError::GameNotActive { game }) => Ok(warp::reply::with_status(
            warp::reply::json(&game),
            warp::http::StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

fn error_reply(err: GameError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match &err {
        GameError::InvalidInput { .. } => warp::http::StatusCode::BAD_REQUEST,
        GameError::GameNotActive { .. } => warp::http::StatusCode::CONFLICT,
        GameError::WordSourceUnavailable { .. } => warp::http::StatusCode::BAD_GATEWAY,
        GameError::StoreUnavailable { .. } => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    }
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": err.to_string()
        })),
        status,
    )
}
