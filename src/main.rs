//! cube-viz: a 3x3x3 nested cube visualization
//!
//! Twenty-seven wireframe cubes of decreasing size sit on a grid, each
//! with a two-color pie chart showing its share. Axis labels carry option
//! dropdowns, clicking a pie slice opens an inspect modal, and a sidebar
//! checkbox toggles every pie at once.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod overlay;
mod pick;
mod render;
mod scene;
mod ui;

use std::sync::OnceLock;

use macroquad::prelude::*;

use app::{AppState, FrameInput};
use config::VizConfig;
use ui::MouseState;

/// Startup configuration, resolved once before the window opens
static STARTUP_CONFIG: OnceLock<VizConfig> = OnceLock::new();

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "cube-viz", version, about = "Nested cube visualization with pie chart overlays")]
struct Args {
    /// Configuration file (RON)
    #[arg(short, long, env = "CUBE_VIZ_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Start with the pie charts hidden
    #[arg(long)]
    hide_pies: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_config() -> VizConfig {
    use clap::Parser;

    // Initialize crash logging FIRST (before any other code)
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Some(path) = &args.config {
        if !path.is_file() {
            log::warn!("Config file {} not found, trying default locations", path.display());
        }
    }

    let candidates = config::config_candidates(args.config.as_deref());
    let mut config = match VizConfig::load_first(&candidates) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load configuration: {}, using defaults", e);
            VizConfig::default()
        }
    };
    if args.hide_pies {
        config.show_pie_charts = false;
    }

    if args.print_config {
        match config.to_ron() {
            Ok(text) => println!("{}", text),
            Err(e) => log::error!("Failed to serialize configuration: {}", e),
        }
        std::process::exit(0);
    }

    config
}

#[cfg(target_arch = "wasm32")]
fn resolve_config() -> VizConfig {
    // No filesystem or command line in the browser
    VizConfig::default()
}

fn startup_config() -> &'static VizConfig {
    STARTUP_CONFIG.get_or_init(resolve_config)
}

fn window_conf() -> Conf {
    let config = startup_config();
    Conf {
        window_title: format!("cube-viz v{}", VERSION),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn sample_input() -> FrameInput {
    let (x, y) = mouse_position();
    FrameInput {
        mouse: MouseState {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            scroll: mouse_wheel().1,
        },
        escape_pressed: is_key_pressed(KeyCode::Escape),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = startup_config().clone();
    log::info!("=== cube-viz v{} ===", VERSION);

    let mut app = AppState::new(config);

    loop {
        clear_background(ui::theme::BG_COLOR);
        app.frame(sample_input(), screen_width(), screen_height());
        next_frame().await;
    }
}
