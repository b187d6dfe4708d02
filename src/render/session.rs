//! Render session: state shared by every shortcode invocation in one page
//! build.
//!
//! The session owns the "assets already injected" flag and the per-component
//! instance counters used to keep element ids unique on the page.

use std::collections::HashMap;

use crate::config::settings::Settings;
use crate::render::assets;

/// State for one page build.
#[derive(Debug, Clone)]
pub struct RenderSession {
    settings: Settings,
    assets_injected: bool,
    instances: HashMap<&'static str, usize>,
}

impl RenderSession {
    /// Creates a fresh session.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            assets_injected: false,
            instances: HashMap::new(),
        }
    }

    /// Settings for this build.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the asset block has been handed out.
    #[must_use]
    pub const fn assets_injected(&self) -> bool {
        self.assets_injected
    }

    /// Returns the asset block the first time it is called in this session
    /// and `None` afterwards. Always `None` when injection is disabled.
    pub fn take_assets(&mut self) -> Option<String> {
        if self.assets_injected || !self.settings.inject_assets {
            return None;
        }
        self.assets_injected = true;
        tracing::debug!("injecting behavior and style block");
        Some(assets::asset_block())
    }

    /// Id prefix for the next instance of a component.
    ///
    /// The first instance gets `base` unchanged, later ones `base2`,
    /// `base3`, ...
    pub fn next_id_prefix(&mut self, base: &'static str) -> String {
        let count = self.instances.entry(base).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{base}{count}")
        }
    }
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
