//! Game-session HTTP routes under `/api/rooms/{room_id}`.
//!
//! Authentication lives outside this service, so actor ids arrive in the
//! request body.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::game_serde::target_or_zero;
use crate::domain::game_types::PlayerId;
use crate::domain::room::RoomMeta;
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::extractors::{ActionJson, RoomIdParam};
use crate::http::etag::{if_none_match_hits, room_etag};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct VoteBody {
    pub voter_id: PlayerId,
    pub target_id: PlayerId,
}

#[derive(Debug, Deserialize)]
pub struct AbilityBody {
    pub user_id: PlayerId,
    pub ability: String,
    /// `0` or absent means the ability is used without a target.
    #[serde(default, with = "target_or_zero")]
    pub target_id: Option<PlayerId>,
}

#[derive(Debug, Serialize)]
struct StartGameResponse {
    room: RoomMeta,
    players: usize,
}

#[derive(Debug, Serialize)]
struct RoomStateResponse {
    room: RoomMeta,
    state: GameState,
}

/// POST /api/rooms/{room_id}/start
async fn start_game(
    room_id: RoomIdParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let result = app_state.game_flow().start_game(room_id.0).await?;
    Ok(HttpResponse::Ok().json(StartGameResponse {
        players: result.state.assignments.len(),
        room: result.room,
    }))
}

/// POST /api/rooms/{room_id}/vote
async fn vote(
    room_id: RoomIdParam,
    body: ActionJson<VoteBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let record = app_state
        .game_flow()
        .vote(room_id.0, body.voter_id, body.target_id)
        .await?;
    Ok(HttpResponse::Created().json(record))
}

/// POST /api/rooms/{room_id}/ability
async fn use_ability(
    room_id: RoomIdParam,
    body: ActionJson<AbilityBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let record = app_state
        .game_flow()
        .use_ability(room_id.0, body.user_id, &body.ability, body.target_id)
        .await?;
    Ok(HttpResponse::Created().json(record))
}

/// POST /api/rooms/{room_id}/phase
///
/// Advances night to day, or day to the next night, and returns the room.
async fn advance_phase(
    room_id: RoomIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoomMeta>, AppError> {
    let room = app_state.game_flow().advance_phase(room_id.0).await?;
    Ok(web::Json(room))
}

/// GET /api/rooms/{room_id}/state
///
/// Full room and game state with an ETag from the store version. Answers
/// `304 Not Modified` when `If-None-Match` still matches.
async fn get_state(
    http_req: HttpRequest,
    room_id: RoomIdParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (room, state) = app_state.game_flow().get_state(room_id.0).await?;
    let etag = room_etag(room.id, room.version);

    let unchanged = http_req
        .headers()
        .get(IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| if_none_match_hits(value, &etag));
    if unchanged {
        return Ok(HttpResponse::NotModified()
            .insert_header((ETAG, etag))
            .finish());
    }

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, etag))
        .json(RoomStateResponse { room, state }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{room_id}/start").route(web::post().to(start_game)))
        .service(web::resource("/{room_id}/vote").route(web::post().to(vote)))
        .service(web::resource("/{room_id}/ability").route(web::post().to(use_ability)))
        .service(web::resource("/{room_id}/phase").route(web::post().to(advance_phase)))
        .service(web::resource("/{room_id}/state").route(web::get().to(get_state)));
}
