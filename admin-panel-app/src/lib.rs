//! Platform-agnostic request-level rendering for admin panels.
//!
//! Provides `AppState` (config snapshot + composition services), `AppStateBuilder`
//! (adapter injection) and `ConfigHooks` (platform-specific reload callbacks).

use std::sync::Arc;

use tokio::sync::RwLock;

use admin_panel_core::error::{CoreError, CoreResult};
use admin_panel_core::services::{PageAssembler, PanelContentComposer, RenderOptions};
use admin_panel_core::traits::{Compressor, PanelRequest, PanelSource};
use admin_panel_core::types::{
    ButtonRegistry, Config, Html, Menu, Page, Panel, SystemInfo, UserModel,
};
use admin_panel_core::utils::minify::WhitespaceCompressor;

/// Platform-specific hooks around configuration changes.
///
/// Use `NoopConfigHooks` if nothing needs to react to a reload.
#[async_trait::async_trait]
pub trait ConfigHooks: Send + Sync {
    /// Called after a new config has been validated and published.
    async fn config_reloaded(&self, _previous: &Config, _current: &Config) {}

    /// Called when a reload is rejected; the previous config stays active.
    async fn config_rejected(&self, _candidate: &Config, _error: &CoreError) {}
}

/// No-op hooks for frontends that don't react to reloads.
pub struct NoopConfigHooks;

#[async_trait::async_trait]
impl ConfigHooks for NoopConfigHooks {}

/// Request-scoped inputs of a full page, resolved by the auth/menu/asset layers.
#[derive(Debug, Clone, Default)]
pub struct PageInputs {
    pub user: UserModel,
    pub menu: Menu,
    pub assets_list: Html,
    pub buttons: ButtonRegistry,
}

/// Whether a request gets the full page or only the pjax fragment
#[derive(Debug, Clone)]
pub enum RenderMode {
    Full(PageInputs),
    Pjax,
}

/// Platform-agnostic application state.
///
/// Every render call takes one config snapshot at entry and uses it for both
/// composition and assembly, so a concurrent reload is never observed half-applied.
pub struct AppState {
    config: RwLock<Arc<Config>>,
    composer: PanelContentComposer,
    assembler: PageAssembler,
    default_options: RenderOptions,
    hooks: Arc<dyn ConfigHooks>,
}

impl AppState {
    /// Current config snapshot
    pub async fn config(&self) -> Arc<Config> {
        Arc::clone(&*self.config.read().await)
    }

    /// Options used when a caller doesn't pass its own
    pub fn default_options(&self) -> RenderOptions {
        self.default_options
    }

    /// Validate and publish a new config.
    ///
    /// Renders already in flight keep the snapshot they started with.
    pub async fn reload_config(&self, config: Config) -> CoreResult<()> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected config reload: {e}");
            self.hooks.config_rejected(&config, &e).await;
            return Err(e);
        }

        let current = Arc::new(config);
        let previous = {
            let mut guard = self.config.write().await;
            std::mem::replace(&mut *guard, Arc::clone(&current))
        };
        log::info!("Config reloaded: title '{}'", current.title);
        self.hooks.config_reloaded(&previous, &current).await;
        Ok(())
    }

    /// Compose `panel` and assemble the full page around it.
    pub async fn render_page(
        &self,
        panel: Panel,
        inputs: PageInputs,
        options: RenderOptions,
    ) -> Page {
        let config = self.config().await;
        self.render_with(&config, panel, RenderMode::Full(inputs), options)
    }

    /// Compose `panel` for a pjax fragment response.
    pub async fn render_pjax(&self, panel: Panel, options: RenderOptions) -> Page {
        let config = self.config().await;
        self.render_with(&config, panel, RenderMode::Pjax, options)
    }

    /// Load the panel from `source`, then render it.
    pub async fn render_from_source(
        &self,
        source: &dyn PanelSource,
        request: &PanelRequest,
        mode: RenderMode,
        options: RenderOptions,
    ) -> CoreResult<Page> {
        let config = self.config().await;
        let panel = match source.get_panel(request).await {
            Ok(panel) => panel,
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Panel source failed for {}: {e}", request.path);
                } else {
                    log::error!("Panel source failed for {}: {e}", request.path);
                }
                return Err(e);
            }
        };
        Ok(self.render_with(&config, panel, mode, options))
    }

    fn render_with(
        &self,
        config: &Config,
        panel: Panel,
        mode: RenderMode,
        options: RenderOptions,
    ) -> Page {
        let panel = self.composer.compose(panel, &config.animation, options);
        match mode {
            RenderMode::Full(inputs) => self.assembler.assemble(
                inputs.user,
                inputs.menu,
                panel,
                config,
                inputs.assets_list,
                inputs.buttons,
            ),
            RenderMode::Pjax => self.assembler.assemble_panel(panel),
        }
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required
/// - `config`: resolved site configuration
///
/// # Optional
/// - `compressor`: defaults to `WhitespaceCompressor`
/// - `system`: defaults to the core crate version
/// - `production`: minify by default, defaults to `false`
/// - `hooks`: defaults to `NoopConfigHooks`
pub struct AppStateBuilder {
    config: Option<Config>,
    compressor: Option<Arc<dyn Compressor>>,
    system: Option<SystemInfo>,
    production: bool,
    hooks: Option<Arc<dyn ConfigHooks>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            compressor: None,
            system: None,
            production: false,
            hooks: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn compressor(mut self, compressor: Arc<dyn Compressor>) -> Self {
        self.compressor = Some(compressor);
        self
    }

    #[must_use]
    pub fn system(mut self, system: SystemInfo) -> Self {
        self.system = Some(system);
        self
    }

    #[must_use]
    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: Arc<dyn ConfigHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the config is missing or invalid.
    pub fn build(self) -> CoreResult<AppState> {
        let config = self
            .config
            .ok_or_else(|| CoreError::ValidationError("config is required".to_string()))?;
        config.validate()?;

        let compressor = self
            .compressor
            .unwrap_or_else(|| Arc::new(WhitespaceCompressor));
        let assembler = self
            .system
            .map_or_else(PageAssembler::new, PageAssembler::with_system);

        log::info!(
            "Admin panel ready: '{}' at '{}' (production: {})",
            config.title,
            config.prefix(),
            self.production
        );

        Ok(AppState {
            config: RwLock::new(Arc::new(config)),
            composer: PanelContentComposer::new(compressor),
            assembler,
            default_options: RenderOptions {
                production: self.production,
                suppress_animation: false,
            },
            hooks: self.hooks.unwrap_or_else(|| Arc::new(NoopConfigHooks)),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
