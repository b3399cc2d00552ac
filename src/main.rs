use std::path::PathBuf;

use anyhow::Context;
use argbind::args::{default_registry, Args};
use argbind::config::SchemaFile;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "argbind", version, about = "Bind flag arguments to a declared schema")]
struct Cli {
    /// Schema file (default: <config dir>/argbind/schema.toml)
    #[arg(long, short = 's', value_name = "PATH")]
    schema: Option<PathBuf>,

    /// List registered value kinds and exit
    #[arg(long)]
    kinds: bool,

    /// Arguments to parse, given after `--`
    #[arg(last = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    argbind::logging::init_tracing();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let registry = default_registry();

    if cli.kinds {
        for kind in registry.kinds() {
            println!("{}", kind);
        }
        return Ok(());
    }

    let schema_file = match &cli.schema {
        Some(path) => SchemaFile::load_from(path),
        None => SchemaFile::load(),
    }
    .context("Failed to load schema")?;

    tracing::debug!("Parsing {} arguments", cli.args.len());
    let options = Args::new(registry).parse(&schema_file.to_schema(), &cli.args)?;

    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
