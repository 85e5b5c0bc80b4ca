use actix_web::{web, App, HttpServer};
use backend::config::demo::demo_rooms_from_env;
use backend::config::ServerConfig;
use backend::infra::state::build_state;
use backend::middleware::RequestTrace;
use backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    let demo_rooms = match demo_rooms_from_env() {
        Ok(rooms) => rooms,
        Err(e) => {
            error!(error = %e, "Invalid demo room configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_env_config() {
        Ok(builder) => builder.with_demo_rooms(demo_rooms).build(),
        Err(e) => {
            error!(error = %e, "Invalid game configuration");
            std::process::exit(1);
        }
    };
    let config = app_state.game_flow().config();
    info!(
        host = %server.host,
        port = server.port,
        min_players = config.min_players,
        filler_role = %config.filler_role,
        seeded = config.rng_seed.is_some(),
        "Starting mafia backend"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
