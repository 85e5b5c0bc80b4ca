use actix_web::web;

pub mod health;
pub mod rooms;

/// Register every route.
///
/// Shared by `main.rs` and the HTTP tests so both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Room routes: /api/rooms/{room_id}/**
    cfg.service(web::scope("/api/rooms").configure(rooms::configure_routes));
}
