pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::future::Future;

use axum::Router;
use leptos_axum::{file_and_error_handler, generate_route_list, LeptosRoutes};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tokio::net::TcpListener;
use tokio_stream::StreamExt;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use config::ServerConfig;
use error::ServerResult;
use state::AppState;

/// Build the complete router: JSON API on `/api/*`, Leptos SSR for everything else.
pub fn build_router(state: AppState) -> Router {
    let api: Router = api_routes().with_state(state.clone());

    // Unknown paths try a static file from site_root first, then render the 404 view
    let routes = generate_route_list(rx_web::app::App);
    debug!(count = routes.len(), "Leptos routes generated");
    let leptos: Router = Router::<AppState>::new()
        .leptos_routes(&state, routes, {
            let leptos_options = state.leptos_options.clone();
            move || rx_web::app::shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler::<AppState, _>(rx_web::app::shell))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(leptos)
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new().merge(routes::health::router())
}

/// Bind the configured address and serve until SIGINT or SIGTERM.
pub async fn serve(config: ServerConfig) -> ServerResult<()> {
    let addr = config.socket_addr()?;
    let state = AppState::new(config)?;

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "RxOS listening");

    let signals = Signals::new([SIGINT, SIGTERM])?;
    let handle = signals.handle();

    let result = run(listener, state, shutdown_signal(signals)).await;
    handle.close();
    result
}

/// Serve `state` on an already bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on the first signal delivered to `signals`.
pub async fn shutdown_signal(mut signals: Signals) {
    if let Some(signal) = signals.next().await {
        info!(signal, "Shutdown signal received, draining connections...");
    }
}
