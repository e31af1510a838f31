mod env;

use std::net::SocketAddr;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hypr_transcribe_relay::RelayConfig;

use crate::env::Env;

fn main() -> anyhow::Result<()> {
    let env = Env::load().context("failed to read environment")?;

    let _sentry = sentry::init((
        env.server.sentry_dsn.clone(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(sentry::integrations::tracing::layer())
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(env))
}

async fn serve(env: Env) -> anyhow::Result<()> {
    let config = RelayConfig::from_env(&env.relay).context("invalid relay configuration")?;
    tracing::info!(
        api_base = %config.api_base,
        model = %config.model,
        body_limit = ?config.body_limit,
        "relay_configured"
    );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let app = Router::new()
        .route(
            "/openapi.json",
            get(|| async { Json(hypr_transcribe_relay::openapi()) }),
        )
        .merge(hypr_transcribe_relay::router(config)?)
        .layer(trace_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], env.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "server_listening");

    axum::serve(listener, app).await?;
    Ok(())
}
