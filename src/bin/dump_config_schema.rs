use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Prints the JSON schema of the sketchpad config file.
#[derive(Parser, Debug)]
#[command(name = "dump_config_schema")]
struct Args {
    /// Write the schema to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let schema = serde_json::to_string_pretty(&sketchpad::Config::json_schema())?;

    match args.output {
        Some(path) => std::fs::write(&path, schema + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.display()))?,
        None => println!("{schema}"),
    }
    Ok(())
}
