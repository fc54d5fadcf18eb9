// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless pan demo.
//!
//! Builds a viewer over a handful of links, performs a short drag, releases
//! it and pumps coasting frames until the field comes to rest, printing one
//! line per frame.
//!
//! Tuning can be supplied as a JSON file with optional `viewport` and `pan`
//! objects; missing fields keep their defaults:
//!
//! ```json
//! { "viewport": { "cell_size": 160.0 }, "pan": { "friction": 0.9 } }
//! ```
//!
//! Run:
//! - `cargo run -p sphere_grid_demos`
//! - `cargo run -p sphere_grid_demos -- tuning.json`
//! - `RUST_LOG=sphere_grid_pan=debug cargo run -p sphere_grid_demos`

use std::error::Error;
use std::path::Path;

use kurbo::Point;
use serde::Deserialize;
use sphere_grid::{GridItem, ItemTransform, ViewportConfig};
use sphere_grid_pan::{ManualFrames, PanConfig};
use sphere_grid_viewer::{GridViewer, ItemHost, TileContext};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Tuning {
    viewport: ViewportConfig,
    pan: PanConfig,
}

impl Tuning {
    fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

struct Link {
    slug: &'static str,
    title: &'static str,
}

impl GridItem for Link {
    type Id = str;

    fn id(&self) -> &str {
        self.slug
    }
}

/// Remembers the front-most tile of the last render.
#[derive(Default)]
struct FrontTile {
    line: String,
    drawn: usize,
}

impl ItemHost<Link> for FrontTile {
    fn render(&mut self, item: &Link, transform: &ItemTransform, cx: &TileContext<'_>) {
        // Back-to-front order: the last call is the front-most tile.
        self.line = format!("{} [{}] {}", cx.key, item.title, transform.css());
        self.drawn += 1;
    }
}

fn links() -> Vec<Link> {
    [
        ("docs", "Documentation"),
        ("blog", "Blog"),
        ("repo", "Repository"),
        ("chat", "Chat"),
        ("news", "News"),
        ("wiki", "Wiki"),
        ("mail", "Mail"),
        ("maps", "Maps"),
    ]
    .into_iter()
    .map(|(slug, title)| Link { slug, title })
    .collect()
}

fn print_frame(label: &str, viewer: &GridViewer<Link, ManualFrames>) {
    let mut host = FrontTile::default();
    viewer.render(&mut host);
    let info = viewer.debug_info();
    println!(
        "{label:>8} | state {:?} | offset ({:8.2}, {:8.2}) | grid ({:5.1}, {:5.1}) | {} tiles | front {}",
        info.state,
        info.offset.x,
        info.offset.y,
        info.grid_position.x,
        info.grid_position.y,
        host.drawn,
        host.line,
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let tuning = match std::env::args_os().nth(1) {
        Some(path) => Tuning::load(Path::new(&path))?,
        None => Tuning::default(),
    };
    tracing::info!(?tuning, "starting headless pan demo");

    let mut viewer =
        GridViewer::from_configs(links(), tuning.viewport, tuning.pan, ManualFrames::new())?;
    print_frame("rest", &viewer);

    // Drag up and to the left over a few pointer moves.
    viewer.pointer_down(Point::new(400.0, 400.0));
    for step in 1..=4 {
        let offset = f64::from(step) * 30.0;
        viewer.pointer_move(Point::new(400.0 - offset, 400.0 - offset / 2.0));
        print_frame("drag", &viewer);
    }
    viewer.pointer_up();

    let mut frame = 0_u32;
    while let Some(handle) = viewer.frames_mut().next_due() {
        viewer.on_frame(handle);
        frame += 1;
        if frame % 10 == 0 {
            print_frame(&format!("coast {frame}"), &viewer);
        }
    }
    print_frame("settled", &viewer);
    tracing::info!(frames = frame, "coasting finished");

    Ok(())
}
