//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::{
        conversion::rooms_to_dto,
        http::{ErrorResponseDto, RoomDto},
    },
    ui::state::AppState,
    usecase::RoomOperationError,
};

type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);
type RoomsResult = Result<Json<Vec<RoomDto>>, ErrorResponse>;

/// Map a failed room operation to a client error
fn room_error_response(err: RoomOperationError) -> ErrorResponse {
    let status = match err {
        RoomOperationError::InvalidRoomRef(_) => StatusCode::BAD_REQUEST,
        RoomOperationError::RoomNotFound(_) => StatusCode::NOT_FOUND,
    };
    tracing::warn!("Rejected room operation ({}): {}", status, err);
    (status, Json(ErrorResponseDto::new(err.to_string())))
}

/// Decode a raw message body, rejecting non-UTF-8 payloads with a JSON error
fn decode_message_body(body: Bytes) -> Result<String, ErrorResponse> {
    String::from_utf8(body.to_vec()).map_err(|e| {
        let message = format!("Message body is not valid UTF-8: {}", e.utf8_error());
        tracing::warn!("Rejected message body: {}", message);
        (StatusCode::BAD_REQUEST, Json(ErrorResponseDto::new(message)))
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `GET /users`
pub async fn get_connections(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let connections = state.get_connections_usecase.execute().await;
    tracing::debug!("Listing {} connections", connections.len());
    Json(connections)
}

/// `POST /users/{address}`
pub async fn register_connection(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Json<Vec<String>> {
    Json(state.register_connection_usecase.execute(&address).await)
}

/// `GET /rooms`
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomDto>> {
    let rooms = state.get_rooms_usecase.execute().await;
    tracing::debug!("Listing {} rooms", rooms.len());
    Json(rooms_to_dto(rooms))
}

/// `POST /rooms/{name}`
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<Vec<RoomDto>> {
    Json(rooms_to_dto(state.create_room_usecase.execute(name).await))
}

/// `POST /invite/{room}/{user}`
pub async fn invite_user(
    State(state): State<Arc<AppState>>,
    Path((room_ref, user)): Path<(String, String)>,
) -> RoomsResult {
    state
        .invite_user_usecase
        .execute(&room_ref, user)
        .await
        .map(|rooms| Json(rooms_to_dto(rooms)))
        .map_err(room_error_response)
}

/// `POST /rooms/{room}/leave`
pub async fn leave_room(
    State(state): State<Arc<AppState>>,
    Path(room_ref): Path<String>,
) -> RoomsResult {
    state
        .leave_room_usecase
        .execute(&room_ref)
        .await
        .map(|rooms| Json(rooms_to_dto(rooms)))
        .map_err(room_error_response)
}

/// `POST /message/{room}/`
///
/// The raw request body is stored as the message, whatever its content type.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(room_ref): Path<String>,
    body: Bytes,
) -> RoomsResult {
    let body = decode_message_body(body)?;
    state
        .post_message_usecase
        .execute(&room_ref, body)
        .await
        .map(|rooms| Json(rooms_to_dto(rooms)))
        .map_err(room_error_response)
}
