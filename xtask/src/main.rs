//! Build automation tasks for cube-viz
//!
//! Usage:
//!   cargo xtask build-web        # Build WASM into dist/web
//!   cargo xtask package-web      # Zip dist/web for upload
//!   cargo xtask package-native   # Release binary plus sample config

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const CRATE_NAME: &str = "cube-viz";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for cube-viz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds DEV to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Build web and create a zip of dist/web
    PackageWeb,
    /// Build a native release into dist/native/<platform>
    PackageNative {
        /// Target platform: windows, macos, linux
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageWeb => package_web(),
        Commands::PackageNative { platform } => package_native(platform),
    }
}

/// Get the workspace root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Remove and recreate an output directory
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir).with_context(|| format!("Failed to clean {}", dir.display()))?;
    }
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(())
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "-p", CRATE_NAME]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", CRATE_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )
    .context("WASM binary missing after build")?;
    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))
        .context("web/index.html missing")?;

    // Download macroquad JS bundle
    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(
            "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
            &mq_js,
        )?;
    }

    if dev {
        println!("Applying DEV build modifications...");
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?;
        let index = index.replace("<title>cube-viz", "<title>[DEV] cube-viz");
        std::fs::write(&index_path, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Zip the web build
fn package_web() -> Result<()> {
    build_web(false)?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-web.zip", CRATE_NAME);
    let zip_path = dist.join(&zip_name);

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating web zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .arg("-r")
            .arg(format!("../{}", zip_name))
            .arg("."),
    )?;

    println!("Web package ready: dist/{}", zip_name);
    Ok(())
}

/// Native release build with a default config next to the binary
fn package_native(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = platform.unwrap_or_else(|| {
        if cfg!(target_os = "windows") {
            "windows".to_string()
        } else if cfg!(target_os = "macos") {
            "macos".to_string()
        } else {
            "linux".to_string()
        }
    });

    let dist = root.join(format!("dist/native/{}", platform));

    println!("Building native release for {}...", platform);
    fresh_dir(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "-p", CRATE_NAME]),
    )?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", CRATE_NAME)
    } else {
        CRATE_NAME.to_string()
    };
    let binary = dist.join(&binary_name);
    std::fs::copy(root.join("target/release").join(&binary_name), &binary)
        .context("Release binary missing after build")?;

    // The binary prints its resolved defaults; ship them as an editable config
    let output = Command::new(&binary)
        .arg("--print-config")
        .output()
        .context("Failed to run packaged binary")?;
    if output.status.success() {
        std::fs::write(dist.join("cube-viz.ron"), &output.stdout)?;
    } else {
        println!("Warning: could not generate cube-viz.ron");
    }

    println!("Native build complete: dist/native/{}/", platform);
    Ok(())
}
