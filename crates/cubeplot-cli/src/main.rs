//! cubeplot CLI - render projected cube snapshots to primitive lists
//!
//! Reads a snapshot (JSON) and options (TOML or JSON) and writes the
//! resulting primitives as JSON for a plotting surface.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cubeplot_render::{
    AxisTagScheme, CubeSnapshot, RenderOptions, Renderer, SceneOptions, FACES,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cubeplot")]
#[command(about = "Render projected cube snapshots as 2D primitive lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a snapshot to a JSON primitive list
    Render {
        #[command(flatten)]
        input: RenderInput,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the bounding box of a render
    Bounds {
        #[command(flatten)]
        input: RenderInput,
    },
    /// Print the cube face table
    Faces,
    /// Print an options file with every feature enabled
    Defaults,
}

#[derive(Args)]
struct RenderInput {
    /// Snapshot file (.json)
    #[arg(short, long)]
    snapshot: PathBuf,
    /// Options file (.toml or .json); every optional feature is off without one
    #[arg(long)]
    options: Option<PathBuf>,
    /// Tag each axis line as x-/y-/z-<name> instead of sharing x-<name>
    #[arg(long)]
    per_axis_tags: bool,
}

impl RenderInput {
    fn renderer(&self) -> Result<Renderer> {
        let snapshot = CubeSnapshot::load(&self.snapshot)
            .with_context(|| format!("loading snapshot {}", self.snapshot.display()))?;

        let mut options = match &self.options {
            Some(path) => SceneOptions::load(path)
                .with_context(|| format!("loading options {}", path.display()))?,
            None => SceneOptions::default(),
        };
        if self.per_axis_tags {
            options.axis_tags = AxisTagScheme::PerAxis;
        }

        Ok(Renderer::new(snapshot, RenderOptions::from(options)))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            pretty,
            output,
        } => {
            render(&input, pretty, output.as_deref())?;
        }
        Commands::Bounds { input } => {
            let bounds = input.renderer()?.render_bounds();
            let center = bounds.center();
            println!(
                "({:.3}, {:.3}) to ({:.3}, {:.3})  [{:.3} x {:.3}]  center ({:.3}, {:.3})",
                bounds.min_x,
                bounds.min_y,
                bounds.max_x,
                bounds.max_y,
                bounds.width(),
                bounds.height(),
                center.x,
                center.y
            );
        }
        Commands::Faces => {
            for (i, face) in FACES.iter().enumerate() {
                println!("plane-{i}: {face:?}");
            }
        }
        Commands::Defaults => {
            let text = toml::to_string_pretty(&SceneOptions::example())
                .context("serializing example options")?;
            print!("{text}");
        }
    }

    Ok(())
}

fn render(input: &RenderInput, pretty: bool, output: Option<&Path>) -> Result<()> {
    let primitives = input.renderer()?.render();
    log::info!("rendered {} primitives", primitives.len());

    let json = if pretty {
        serde_json::to_string_pretty(&primitives)?
    } else {
        serde_json::to_string(&primitives)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
