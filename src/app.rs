//! Application bootstrap shared by the `shelf-app` binary and the CLI.

use anyhow::Context;
use axum::Router;
use shelf_db::Database;
use shelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules;

/// Registry holding every catalog module.
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Open the configured database.
pub async fn connect(settings: &Settings) -> anyhow::Result<Database> {
    Database::connect(&settings.database.url, settings.database.max_connections)
        .await
        .with_context(|| "failed to open catalog database")
}

/// Apply pending migrations for every module; returns how many ran.
pub async fn migrate(registry: &ModuleRegistry, db: &Database) -> anyhow::Result<usize> {
    let migrations = registry.collect_migrations();
    tracing::info!(total = migrations.len(), "applying module migrations");

    let applied = shelf_db::migrate(db, &migrations)
        .await
        .with_context(|| "failed to apply migrations")?;

    tracing::info!(applied, "migrations complete");
    Ok(applied)
}

/// Run init, migrations and start for every module.
pub async fn bring_up(
    registry: &ModuleRegistry,
    settings: &Settings,
    db: &Database,
) -> anyhow::Result<()> {
    let ctx = InitCtx { settings, db };

    registry.init_modules(&ctx).await?;
    migrate(registry, db).await?;
    registry.start_modules(&ctx).await
}

/// Bring every module up and assemble the HTTP router.
pub async fn prepare(
    registry: &ModuleRegistry,
    settings: &Settings,
    db: &Database,
) -> anyhow::Result<Router> {
    bring_up(registry, settings, db).await?;
    Ok(shelf_http::build_router(registry, settings, db))
}

/// Full service lifecycle: bring up, serve until shutdown, then stop modules.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let db = connect(settings).await?;
    let registry = registry();

    bring_up(&registry, settings, &db).await?;
    let served = shelf_http::start_server(&registry, settings, &db).await;

    registry.stop_modules().await?;
    db.close().await;
    served
}

/// Open the database, apply migrations, and close it again.
pub async fn migrate_only(settings: &Settings) -> anyhow::Result<usize> {
    let db = connect(settings).await?;
    let applied = migrate(&registry(), &db).await;
    db.close().await;
    applied
}
