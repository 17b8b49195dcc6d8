use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sketchpad::Config;
use sketchpad::draw::Canvas;
use sketchpad::input::InputState;
use sketchpad::script;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand drawing surface with undo/redo stroke history")]
struct Cli {
    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON Lines event script and write the resulting raster as PNG
    Replay {
        /// Event script (one input event per line)
        script: PathBuf,

        /// Output PNG path
        #[arg(long, short = 'o', value_name = "PNG", default_value = "sketch.png")]
        output: PathBuf,

        /// Canvas width in CSS pixels (overrides config)
        #[arg(long, value_name = "PX")]
        width: Option<f64>,

        /// Canvas height in CSS pixels (overrides config)
        #[arg(long, value_name = "PX")]
        height: Option<f64>,

        /// Device pixel ratio (overrides config)
        #[arg(long, value_name = "RATIO")]
        dpr: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No subcommand: show usage
        println!("sketchpad: Freehand drawing surface with undo/redo stroke history");
        println!();
        println!("Usage:");
        println!("  sketchpad replay <SCRIPT> [-o OUT.png]   Replay an event script to a PNG");
        println!("  sketchpad --help                         Show help");
        println!();
        println!("Script lines look like:");
        println!(r#"  {{"event":"pointer-down","client_x":10,"client_y":10}}"#);
        println!(r#"  {{"event":"pointer-move","client_x":40,"client_y":25}}"#);
        println!(r#"  {{"event":"pointer-up"}}"#);
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match command {
        Command::Replay {
            script,
            output,
            width,
            height,
            dpr,
        } => {
            if let Some(width) = width {
                config.canvas.width = width;
            }
            if let Some(height) = height {
                config.canvas.height = height;
            }
            if let Some(dpr) = dpr {
                config.canvas.device_pixel_ratio = dpr;
            }
            config.validate_and_clamp();

            let events = script::load_script(&script)?;
            let viewport = config.viewport();

            let mut canvas = Canvas::from_viewport(&viewport).context("Failed to create canvas")?;
            let mut state = InputState::from_config(&config, viewport);
            let summary = script::replay(events, &mut state, &mut canvas)?;

            canvas
                .write_png(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!(
                "{} strokes ({} redoable) -> {}",
                summary.committed,
                summary.redoable,
                output.display()
            );
        }
    }

    Ok(())
}
