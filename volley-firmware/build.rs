//! Build script for volley-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates game.toml at compile time
//! - Generates the `GameConfig` literal the firmware boots with

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use volley_core::config::{GameConfig, SwitchMap};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read game.toml, falling back to defaults when it is absent
fn load_config() -> GameConfig {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");
    if !config_path.exists() {
        println!("cargo:warning=game.toml not found, using built-in defaults");
        return GameConfig::default();
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read game.toml", &e.to_string()),
    };

    let config: GameConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid game.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("game.toml failed validation", &format!("{:?}", e));
    }

    println!("cargo:warning=game.toml validated successfully");
    config
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| format!("║  {:<64} ║", truncate_line(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut a line to 64 characters, marking the cut with `...`
fn truncate_line(line: &str) -> String {
    if line.chars().count() <= 64 {
        return line.to_string();
    }
    let end = line.char_indices().nth(61).map_or(line.len(), |(i, _)| i);
    format!("{}...", &line[..end])
}

/// Write `game_config.rs` into OUT_DIR
fn generate_config(config: &GameConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("game_config.rs")).unwrap();
    f.write_all(render_config(config).as_bytes()).unwrap();
}

fn render_config(config: &GameConfig) -> String {
    format!(
        "/// Game configuration baked in from game.toml\n\
         pub const GAME_CONFIG: GameConfig = GameConfig {{\n\
         \x20   screen_width: {},\n\
         \x20   screen_height: {},\n\
         \x20   paddle_inset: {},\n\
         \x20   paddle_width: {},\n\
         \x20   paddle_height: {},\n\
         \x20   precision_paddle_height: {},\n\
         \x20   paddle_speed: {},\n\
         \x20   ball_size: {},\n\
         \x20   mega_ball_size: {},\n\
         \x20   initial_ball_velocity: {},\n\
         \x20   fast_ball_increment: {},\n\
         \x20   max_ball_speed: {},\n\
         \x20   winning_score: {},\n\
         \x20   switches: {},\n\
         }};\n",
        config.screen_width,
        config.screen_height,
        config.paddle_inset,
        config.paddle_width,
        config.paddle_height,
        config.precision_paddle_height,
        config.paddle_speed,
        config.ball_size,
        config.mega_ball_size,
        config.initial_ball_velocity,
        config.fast_ball_increment,
        config.max_ball_speed,
        config.winning_score,
        render_switches(&config.switches),
    )
}

fn render_switches(switches: &SwitchMap) -> String {
    format!(
        "SwitchMap {{ p1_up: {}, p1_down: {}, p2_up: {}, p2_down: {}, reverse1: {}, \
         reverse2: {}, mega_ball: {}, precision_pong: {}, fast_ball: {} }}",
        switches.p1_up,
        switches.p1_down,
        switches.p2_up,
        switches.p2_down,
        switches.reverse1,
        switches.reverse2,
        switches.mega_ball,
        switches.precision_pong,
        switches.fast_ball,
    )
}
