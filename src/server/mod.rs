//! Dashboard API server: shared state, router assembly, serve loop.

pub mod extract;
pub mod routes;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::AuthService;
use crate::config::Config;
use crate::model::{
    Activity, Approval, MultimediaEvent, Notification, Participant, Venue,
};
use crate::roster::Roster;
use crate::seed;
use crate::session::SessionManager;
use crate::store::TableStore;

/// Everything the route handlers share. Rosters are seeded once at startup
/// and live only as long as the process; the store is the persisted part.
pub struct AppState {
    pub store: Arc<TableStore>,
    pub auth: AuthService,
    pub sessions: SessionManager,
    pub activities: Roster<Activity>,
    pub participants: Roster<Participant>,
    pub venues: Roster<Venue>,
    pub notifications: Roster<Notification>,
    pub multimedia: Roster<MultimediaEvent>,
    pub approvals: Roster<Approval>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Arc<Self>> {
        let store = Arc::new(TableStore::open(&config.data_dir)?);
        Ok(Arc::new(Self {
            auth: AuthService::new(store.clone()),
            store,
            sessions: SessionManager::new(),
            activities: Roster::new(seed::activities()),
            participants: Roster::new(seed::participants()),
            venues: Roster::new(seed::venues()),
            notifications: Roster::new(seed::notifications()),
            multimedia: Roster::new(seed::multimedia()),
            approvals: Roster::new(seed::approvals()),
        }))
    }
}

/// Assemble the full router over shared state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::auth::routes())
        .merge(routes::nav::routes())
        .merge(routes::dashboard::routes())
        .merge(routes::calendar::routes())
        .merge(routes::event_requests::routes())
        .merge(routes::participants::routes())
        .merge(routes::venues::routes())
        .merge(routes::multimedia::routes())
        .merge(routes::notifications::routes())
        .merge(routes::approvals::routes())
        .with_state(state)
        .layer(cors)
}

/// Run the dashboard API server.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(&config)?;
    let router = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    eprintln!("[server] listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
