//! Build automation tasks for Dapper Dasher
//!
//! Usage:
//!   cargo xtask build-web          # Build WASM into dist/web
//!   cargo xtask package-native     # Release build + assets into dist/native/<platform>

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN_NAME: &str = "dapper-dasher";
const MACROQUAD_JS_BUNDLE: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Dapper Dasher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM and the page that hosts it
    BuildWeb,
    /// Build a native release with its assets next to the binary
    PackageNative {
        /// Must match the host OS (windows, macos, linux); defaults to host
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb => build_web(),
        Commands::PackageNative { platform } => package_native(platform),
    }
}

/// Workspace root (parent of this crate)
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Empty `dir`, creating it if needed
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to clear {}", dir.display()))?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn build_web() -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "--bin", BIN_NAME]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BIN_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )
    .context("WASM binary missing after build")?;
    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))?;

    println!("Downloading {}...", MACROQUAD_JS_BUNDLE);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dist.join("mq_js_bundle.js"))
            .arg(MACROQUAD_JS_BUNDLE),
    )?;

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// `cargo build` only targets the host, so the platform must be the host's
fn resolve_platform(requested: Option<String>) -> Result<String> {
    let host = std::env::consts::OS;
    match requested {
        None => Ok(host.to_string()),
        Some(p) if p == host => Ok(p),
        Some(p) => anyhow::bail!(
            "Cannot package for {} on a {} host; run package-native on {}",
            p, host, p
        ),
    }
}

/// File name of the release binary cargo produces on this host
fn host_binary_name() -> String {
    if cfg!(windows) {
        format!("{}.exe", BIN_NAME)
    } else {
        BIN_NAME.to_string()
    }
}

fn package_native(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = resolve_platform(platform)?;
    let dist = root.join("dist/native").join(&platform);

    println!("Building native release for {}...", platform);
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BIN_NAME]),
    )?;

    fresh_dir(&dist)?;

    let binary = host_binary_name();
    std::fs::copy(root.join("target/release").join(&binary), dist.join(&binary))
        .with_context(|| format!("Release binary {} missing", binary))?;

    // Textures are loaded relative to the working directory
    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Native package ready: dist/native/{}/", platform);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_defaults_to_host() {
        assert_eq!(resolve_platform(None).unwrap(), std::env::consts::OS);
    }

    #[test]
    fn test_host_platform_accepted() {
        let host = std::env::consts::OS.to_string();
        assert_eq!(resolve_platform(Some(host.clone())).unwrap(), host);
    }

    #[test]
    fn test_foreign_platform_rejected() {
        let foreign = if cfg!(windows) { "linux" } else { "windows" };
        let err = resolve_platform(Some(foreign.to_string())).unwrap_err();
        assert!(err.to_string().contains(foreign));
    }

    #[test]
    fn test_binary_suffix_follows_host() {
        let name = host_binary_name();
        assert!(name.starts_with(BIN_NAME));
        assert_eq!(name.ends_with(".exe"), cfg!(windows));
    }
}
