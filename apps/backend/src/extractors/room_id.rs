use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::game_types::RoomId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Room id from the `{room_id}` path segment.
///
/// Only the format is checked here; whether the room exists is decided by
/// the room store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomIdParam(pub RoomId);

fn parse_room_id(raw: Option<&str>) -> Result<RoomId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidRoomId, "Missing room_id parameter")
    })?;
    let room_id = raw.parse::<RoomId>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidRoomId, format!("Invalid room id: {raw}"))
    })?;
    if room_id == 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidRoomId,
            "Room id must be positive, got: 0",
        ));
    }
    Ok(room_id)
}

impl FromRequest for RoomIdParam {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_room_id(req.match_info().get("room_id")).map(RoomIdParam))
    }
}
