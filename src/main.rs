// SPDX-License-Identifier: MIT
//
// swatch — the build-time color sync and image helper for the web starter.
//
// This is the binary that wires the crates together:
//
//   swatch-color → OKLCH string → uppercase sRGB hex, border radius scale
//   swatch-image → intrinsic image size → src / srcSet / sizes / width / height
//   swatch-sync  → style sheet :root colors → email config source blocks
//
// Subcommands:
//
//   swatch sync                      rewrite the email config from app.css
//   swatch convert "oklch(...)"...   print one hex per color
//   swatch srcset --src ... --width W --height H
//
// Every path and endpoint has an environment-variable fallback so the
// commands can run unchanged from package scripts and CI.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swatch_image::endpoint::DEFAULT_ENDPOINT;
use swatch_image::{ImageDescriptor, ResizeEndpoint, ResponsiveImageBuilder};
use swatch_sync::ColorMap;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate the email config's color and border radius blocks from
    /// the style sheet's `:root` custom properties.
    Sync {
        #[arg(long, env = "SWATCH_STYLESHEET", default_value = "src/styles/app.css")]
        stylesheet: PathBuf,

        #[arg(long, env = "SWATCH_CONFIG", default_value = "emails/tailwind.config.ts")]
        config: PathBuf,

        /// JSON array of `{ "var": ..., "path": ... }` replacing the
        /// built-in variable mapping.
        #[arg(long, env = "SWATCH_COLOR_MAP")]
        map: Option<PathBuf>,
    },

    /// Convert OKLCH colors to hex, one per line.
    Convert {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Print responsive image attributes as JSON.
    Srcset {
        #[arg(long)]
        src: String,

        /// Intrinsic width in pixels.
        #[arg(long)]
        width: u32,

        /// Intrinsic height in pixels.
        #[arg(long)]
        height: u32,

        #[arg(long)]
        sizes: Option<String>,

        #[arg(long)]
        quality: Option<u8>,

        #[arg(long, env = "SWATCH_IMAGE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Deployment environment. Absent or `development` means there is
        /// no resizing endpoint and the source is passed through.
        #[arg(long, env = "SWATCH_DEPLOY_ENV")]
        deploy_env: Option<String>,
    },
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sync {
            stylesheet,
            config,
            map,
        } => {
            let map = match map {
                Some(path) => ColorMap::load(&path)
                    .with_context(|| format!("loading color map {}", path.display()))?,
                None => ColorMap::default(),
            };

            let report = swatch_sync::sync(&stylesheet, &config, &map)
                .with_context(|| format!("syncing {} into {}", stylesheet.display(), config.display()))?;

            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Command::Convert { colors } => {
            for color in &colors {
                let hex = swatch_color::convert(color)?;
                debug!(%color, %hex, "converted");
                println!("{hex}");
            }
        }

        Command::Srcset {
            src,
            width,
            height,
            sizes,
            quality,
            endpoint,
            deploy_env,
        } => {
            let optimize = is_deployed(deploy_env.as_deref());
            let builder = ResponsiveImageBuilder::new()
                .with_template(ResizeEndpoint::new(endpoint))
                .optimize(optimize);

            let image = ImageDescriptor {
                src,
                width,
                height,
                sizes,
                quality,
            };
            let props = builder.build(&image)?;
            debug!(optimize, width = props.width, height = props.height, "built image props");
            println!("{}", serde_json::to_string_pretty(&props)?);
        }
    }

    Ok(())
}

/// Whether a resizing endpoint is available in `deploy_env`.
fn is_deployed(deploy_env: Option<&str>) -> bool {
    deploy_env.is_some_and(|env| !env.is_empty() && env != "development")
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args = Args::parse();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args.command) {
        eprintln!("swatch: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
