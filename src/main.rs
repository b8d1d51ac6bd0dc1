// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use newsdesk::config::settings::Settings;
use newsdesk::domain::repositories::user_repository::AdminSeedOutcome;
use newsdesk::infrastructure::database::connection;
use newsdesk::presentation::routes::{self, AppServices};
use newsdesk::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting newsdesk...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize Prometheus Metrics
    newsdesk::infrastructure::metrics::init_metrics(&settings.metrics);

    // 4. Connect to database and run migrations
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");
    connection::run_migrations(db.as_ref()).await?;

    let seed_file = settings
        .seed
        .news_file
        .clone()
        .unwrap_or_else(|| "data/news.json".to_string());
    let services = AppServices::new(db.clone(), seed_file.clone());

    // 5. Bootstrap default data
    if settings.seed.seed_admin {
        let credentials = settings.admin.credentials();
        match services
            .bootstrap
            .seed_default_data(&credentials, settings.seed.seed_rss_sources)
            .await
        {
            Ok(report) => match report.admin {
                AdminSeedOutcome::Created(admin) => {
                    info!("Bootstrap created admin '{}'", admin.username)
                }
                AdminSeedOutcome::Skipped { existing_admins } => {
                    info!("Bootstrap found {} existing admins", existing_admins)
                }
            },
            Err(e) => warn!("Default data bootstrap failed: {}", e),
        }
    } else if settings.seed.seed_rss_sources {
        if let Err(e) = services.bootstrap.seed_rss_sources().await {
            warn!("Failed to seed default RSS sources: {}", e);
        }
    }

    if settings.seed.seed_on_start {
        match services.ingestion.seed_all_data(&seed_file).await {
            Ok(report) => info!(
                "Seed import finished: imported={}, skipped={}, skipped_entirely={}",
                report.imported, report.skipped, report.skipped_entirely
            ),
            Err(e) => warn!("Seed import from {} failed: {}", seed_file, e),
        }
    }

    // 6. Start HTTP server
    let app = routes::app(services);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
