// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Geometry stage runner
//!
//! Loads a primitive scene, clips and decomposes it under a render state,
//! and writes the binned primitives as JSON.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, error, info};
use pspge::core::config::Config;
use pspge::core::error::Result;
use pspge::core::ge::{BinnedPrimitive, Clipper, PrimitiveLog, ShadeMode};
use pspge::core::scene::{binned_to_json, Scene};

/// PSP GE geometry stage
#[derive(Parser)]
#[command(name = "pspge")]
#[command(about = "Clip and decompose a PSP primitive scene", long_about = None)]
struct Args {
    /// Path to the scene file (.json)
    scene: PathBuf,

    /// Render-state config file (.toml); defaults to $PSPGE_CONFIG
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output file for binned primitives; stdout if omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Treat vertices as screen-space (through mode)
    #[arg(long)]
    through: bool,

    /// Enable depth clamping
    #[arg(long)]
    depth_clamp: bool,

    /// Use flat shading
    #[arg(long)]
    flat: bool,

    /// Enable clear mode
    #[arg(long)]
    clear: bool,

    /// Enable dithering
    #[arg(long)]
    dither: bool,

    /// Let through-mode rectangles take the binner fast path
    #[arg(long)]
    fast_path: bool,
}

impl Args {
    /// Config file, then command line flags on top
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::from_env()?,
        };

        let state = &mut config.render_state;
        state.through_mode |= self.through;
        state.depth_clamp |= self.depth_clamp;
        state.clear_mode |= self.clear;
        state.dither |= self.dither;
        if self.flat {
            state.shade_mode = ShadeMode::Flat;
        }

        Ok(config)
    }
}

fn summarize(primitives: &[BinnedPrimitive]) -> [usize; 5] {
    let mut counts = [0; 5];
    for primitive in primitives {
        let slot = match primitive {
            BinnedPrimitive::Point(_) => 0,
            BinnedPrimitive::Line(_) => 1,
            BinnedPrimitive::Triangle(_) => 2,
            BinnedPrimitive::ClearRect(_) => 3,
            BinnedPrimitive::FastRect(_) => 4,
        };
        counts[slot] += 1;
    }
    counts
}

fn run(args: &Args) -> Result<()> {
    let config = args.load_config()?;
    info!("Render state: {:?}", config.render_state);

    let scene = Scene::load(&args.scene)?;
    let vertices: usize = scene.primitives.iter().map(|p| p.vertex_count()).sum();
    info!(
        "Scene has {} primitives ({} vertices)",
        scene.primitives.len(),
        vertices
    );
    for (i, primitive) in scene.primitives.iter().enumerate() {
        debug!("#{}: {}", i, primitive.kind());
    }

    let clipper = Clipper::new(&config.render_state, &config.viewport);
    let mut log = PrimitiveLog::new().with_fast_path(args.fast_path);
    scene.run_into(&clipper, &mut log);

    let primitives = log.into_primitives();
    let [points, lines, triangles, clears, fast] = summarize(&primitives);
    info!(
        "Binned: {} points | {} lines | {} triangles | {} clear rects | {} fast rects",
        points, lines, triangles, clears, fast
    );

    let json = binned_to_json(&primitives)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote output to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn main() -> Result<()> {
    // Optional .env for PSPGE_CONFIG and RUST_LOG
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("pspge v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        return Err(e);
    }

    Ok(())
}
