use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{api, DbPool};

pub async fn run(pool: DbPool, port: u16) -> anyhow::Result<()> {
    // Initialize start time for uptime tracking
    api::health::init_start_time();

    let app = Router::new()
        .route("/health", get(api::health_handler))
        .nest("/charts", chart_routes())
        .merge(record_routes())
        .with_state(pool)
        // Chart endpoints are consumed by a separately hosted dashboard
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("campusorg server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn chart_routes() -> Router<DbPool> {
    Router::new()
        .route("/org-participation", get(api::charts::org_participation))
        .route("/student-programs", get(api::charts::student_programs))
        .route("/top-organizations", get(api::charts::top_organizations))
        .route("/member-trends", get(api::charts::member_trends))
        .route("/program-distribution", get(api::charts::program_distribution))
        .route("/incidents/severity", get(api::charts::severity_breakdown))
        .route("/incidents/monthly", get(api::charts::monthly_incidents))
        .route("/incidents/top-countries", get(api::charts::top_country_incidents))
        .route("/incidents/severity-monthly", get(api::charts::severity_monthly_incidents))
}

fn record_routes() -> Router<DbPool> {
    Router::new()
        .route("/colleges", get(api::colleges::list).post(api::colleges::create))
        .route(
            "/colleges/:id",
            get(api::colleges::show).put(api::colleges::update).delete(api::colleges::destroy),
        )
        .route("/programs", get(api::programs::list).post(api::programs::create))
        .route(
            "/programs/:id",
            get(api::programs::show).put(api::programs::update).delete(api::programs::destroy),
        )
        .route("/students", get(api::students::list).post(api::students::create))
        .route(
            "/students/:id",
            get(api::students::show).put(api::students::update).delete(api::students::destroy),
        )
        .route("/organizations", get(api::organizations::list).post(api::organizations::create))
        .route(
            "/organizations/:id",
            get(api::organizations::show)
                .put(api::organizations::update)
                .delete(api::organizations::destroy),
        )
        .route("/orgmembers", get(api::org_members::list).post(api::org_members::create))
        .route(
            "/orgmembers/:id",
            get(api::org_members::show)
                .put(api::org_members::update)
                .delete(api::org_members::destroy),
        )
}
