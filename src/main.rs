// src/main.rs

// --- Declaração dos Módulos ---
mod db;
mod error;
mod models;
mod services;
mod state;
mod templates;
mod web;

// --- Imports ---
use crate::state::AppState;
use axum::serve;
use std::{env, net::SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_PORT: u16 = 3000;

/// `SEED_DATA=false` (ou 0/no/off) desliga os dados de exemplo.
fn seed_enabled() -> bool {
    env::var("SEED_DATA")
        .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"))
        .unwrap_or(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "catalogo_cursos=debug,tower_http=info,sqlx=warn".into()
        }))
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando catálogo de cursos...");

    // --- Configuração da Base de Dados ---
    let db_pool = match db::create_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao inicializar a base de dados: {}", e);
            return Err(anyhow::anyhow!("Falha ao conectar/migrar DB: {}", e));
        }
    };

    // --- Dados de exemplo (antes de aceitar pedidos) ---
    if seed_enabled() {
        services::seed_service::run(&db_pool)
            .await
            .map_err(|e| anyhow::anyhow!("Falha ao inserir dados de exemplo: {}", e))?;
    } else {
        tracing::info!("SEED_DATA desligado, dados de exemplo ignorados.");
    }

    let app_state = AppState { db_pool };

    // --- Configuração do Endereço e Listener ---
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("📡 Servidor escutando em http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener na porta {}: {}", port, e);
            return Err(e.into());
        }
    };

    let app = web::routes::create_router(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    tracing::info!("👂 Servidor pronto para aceitar conexões...");
    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    Ok(())
}
