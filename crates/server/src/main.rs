use log::info;
use server::config::Config;
use server::doc::ApiDoc;
use server::mail::Mailer;
use server::routes;
use server::state::AppState;
use server::utils::shutdown::shutdown_signal;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().expect("failed to load configuration");
    let db = database::db::connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    let mailer = Mailer::from_config(config.smtp.as_ref()).expect("failed to build mail transport");

    let listen_addr = config.listen_addr.clone();
    let state = AppState::new(db, config, mailer);

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        );

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listen address");
    info!("Running axum on http://{listen_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}
