//! Build-time game configuration
//!
//! `build.rs` turns game.toml into a `GameConfig` literal. It is checked
//! again at boot so a bad build can never start a broken match.

use defmt::*;
use volley_core::config::{GameConfig, SwitchMap};

include!(concat!(env!("OUT_DIR"), "/game_config.rs"));

/// Validated configuration, or the defaults if validation fails
pub fn load() -> GameConfig {
    match GAME_CONFIG.validate() {
        Ok(()) => {
            info!(
                "Game config: {}x{} court, first to {}",
                GAME_CONFIG.screen_width, GAME_CONFIG.screen_height, GAME_CONFIG.winning_score
            );
            GAME_CONFIG
        }
        Err(e) => {
            error!("Invalid game config ({}), using defaults", e);
            GameConfig::default()
        }
    }
}
