//! Workspace-to-screen mapping: style parameters and coordinate scaling
//! consumed by the block layout engine.

use anyhow::{Error, bail};
use log::debug;

/// Style parameters supplied by the hosting workspace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkspaceConfig {
    /// Minimum width of a rendered block, in view pixels.
    pub base_width: i32,
    /// Minimum height of a rendered block, in view pixels.
    pub base_height: i32,
    /// Global workspace-to-view scale factor.
    pub scale: f32,
    /// Color used to stroke block outlines (ARGB).
    pub outline_color: u32,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self { base_width: 80, base_height: 80, scale: 1.0, outline_color: 0xFF00_0000 }
    }
}

/// Helper for loading workspace configs and doing coordinate calculations.
#[derive(Debug, Clone)]
pub struct WorkspaceHelper {
    config: WorkspaceConfig,
}

impl WorkspaceHelper {
    /// Create a helper from a validated config.
    pub fn new(config: WorkspaceConfig) -> Result<Self, Error> {
        if config.base_width <= 0 || config.base_height <= 0 {
            bail!(
                "block base size must be positive, got {}x{}",
                config.base_width,
                config.base_height
            );
        }
        if !config.scale.is_finite() || config.scale <= 0.0 {
            bail!("workspace scale must be positive and finite, got {}", config.scale);
        }
        debug!(
            "workspace helper ready: base={}x{} scale={}",
            config.base_width, config.base_height, config.scale
        );
        Ok(Self { config })
    }

    /// Create a helper with the default style parameters.
    pub fn with_defaults() -> Self {
        Self { config: WorkspaceConfig::default() }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Minimum width of a rendered block.
    pub fn min_block_width(&self) -> i32 {
        self.config.base_width
    }

    /// Minimum height of a rendered block.
    pub fn min_block_height(&self) -> i32 {
        self.config.base_height
    }

    pub fn outline_color(&self) -> u32 {
        self.config.outline_color
    }

    /// Convert a workspace-unit length to view pixels.
    pub fn workspace_to_view(&self, units: i32) -> i32 {
        (units as f32 * self.config.scale).round() as i32
    }

    /// Convert a view-pixel length back to workspace units.
    pub fn view_to_workspace(&self, pixels: i32) -> i32 {
        (pixels as f32 / self.config.scale).round() as i32
    }
}
