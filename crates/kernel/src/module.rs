use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization and startup.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// A resource module: owns its store/service pair and contributes routes
/// mounted under `/{name}`.
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module; doubles as the mount path segment.
    fn name(&self) -> &'static str;

    /// Initialize the module. Called during application startup, before
    /// the HTTP server binds; index creation happens here.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// The Axum router for this module's routes.
    fn routes(&self) -> Router {
        Router::new()
    }

    /// OpenAPI specification fragment for this module as JSON, merged with
    /// other modules' fragments by the HTTP layer.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Start background work for this module. Called after init.
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources during shutdown.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
