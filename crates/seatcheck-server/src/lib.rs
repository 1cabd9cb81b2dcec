//! REST API for under-seat bag fit checks
//!
//! All endpoints live under `/api`. When a static directory is configured the
//! built front end is served for every other path, with `index.html` as the
//! client-side routing fallback.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        HeaderName, HeaderValue, Method, Uri,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, patch, post},
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use auth::USER_ID_HEADER;
use routes::{airlines, bag_check, bags, user_bags};

/// Build the application router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/airlines", get(airlines::list_airlines))
        .route("/airlines/{iata_code}", get(airlines::get_airline))
        .route("/bags", get(bags::list_bags).post(bags::create_bag))
        .route("/bags/search", get(bags::search_bags))
        .route(
            "/user/bags",
            get(user_bags::list_user_bags).post(user_bags::add_user_bag),
        )
        .route(
            "/user/bags/{id}",
            patch(user_bags::rename_user_bag).delete(user_bags::remove_user_bag),
        )
        .route("/bag-check", post(bag_check::check_bag))
        .route("/user/bag-checks", get(bag_check::list_bag_checks))
        .fallback(api_not_found)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)])
        .max_age(Duration::from_secs(60 * 60));

    let mut app = Router::new().nest("/api", api);

    if let Some(ref static_dir) = state.static_dir {
        info!(static_dir = %static_dir.display(), "serving static assets");
        let assets = ServeDir::new(static_dir)
            .fallback(ServeFile::new(static_dir.join("index.html")));
        app = app.fallback_service(assets).layer(middleware::from_fn_with_state(
            state.asset_max_age_secs,
            static_cache_control,
        ));
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unknown API paths never fall through to the front end
async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No API endpoint at {}", uri.path()))
}

/// Cache policy for the front end: the HTML shell is always revalidated,
/// fingerprinted assets are immutable.
async fn static_cache_control(State(max_age): State<u64>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    if path.starts_with("/api/") || response.headers().contains_key(CACHE_CONTROL) {
        return response;
    }

    let is_shell = path == "/"
        || path.ends_with(".html")
        || response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("text/html"));
    let value = if is_shell {
        HeaderValue::from_static("no-cache")
    } else {
        match HeaderValue::from_str(&format!("public, max-age={max_age}, immutable")) {
            Ok(value) => value,
            Err(_) => return response,
        }
    };
    response.headers_mut().insert(CACHE_CONTROL, value);
    response
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn start_server(state: AppState, addr: SocketAddr) -> seatcheck_types::Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
