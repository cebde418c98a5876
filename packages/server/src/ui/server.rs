//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{
    CreateRoomUseCase, GetConnectionsUseCase, GetRoomsUseCase, InviteUserUseCase,
    LeaveRoomUseCase, PostMessageUseCase, RegisterConnectionUseCase,
};

use super::{
    handler::{
        create_room, get_connections, get_rooms, health_check, invite_user, leave_room,
        post_message, register_connection,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Chat room HTTP server
///
/// This struct holds the usecases and builds the router that exposes them.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     register_connection_usecase,
///     get_connections_usecase,
///     create_room_usecase,
///     get_rooms_usecase,
///     invite_user_usecase,
///     leave_room_usecase,
///     post_message_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 8000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        register_connection_usecase: Arc<RegisterConnectionUseCase>,
        get_connections_usecase: Arc<GetConnectionsUseCase>,
        create_room_usecase: Arc<CreateRoomUseCase>,
        get_rooms_usecase: Arc<GetRoomsUseCase>,
        invite_user_usecase: Arc<InviteUserUseCase>,
        leave_room_usecase: Arc<LeaveRoomUseCase>,
        post_message_usecase: Arc<PostMessageUseCase>,
    ) -> Self {
        Self {
            state: Arc::new(AppState {
                register_connection_usecase,
                get_connections_usecase,
                create_room_usecase,
                get_rooms_usecase,
                invite_user_usecase,
                leave_room_usecase,
                post_message_usecase,
            }),
        }
    }

    /// Build the router with all endpoints, CORS and request tracing
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/health", get(health_check))
            // Connections
            .route("/users", get(get_connections))
            .route("/users/{address}", post(register_connection))
            // Rooms
            .route("/rooms", get(get_rooms))
            .route("/rooms/{room}", post(create_room))
            .route("/rooms/{room}/leave", post(leave_room))
            .route("/invite/{room}/{user}", post(invite_user))
            .route("/message/{room}", post(post_message))
            .route("/message/{room}/", post(post_message))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if there's an error during server execution.
    pub async fn serve(self, listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
        tracing::info!("Chat room server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Run the chat room server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;
        self.serve(listener).await
    }
}
