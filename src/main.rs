use clap::{Parser, Subcommand};
use items_manifest::config::{self, ManifestConfig};
use items_manifest::types::CollisionPolicy;
use items_manifest::{generate, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "items-manifest")]
#[command(about = "Generate a JavaScript manifest of image assets per category")]
#[command(long_about = "\
Generate a JavaScript manifest of image assets per category

Every directory under the root becomes a category named after the
directory, listing the .png/.jpg/.jpeg/.gif files it directly contains.
Directories named `items` are not categories themselves.

  items/
  ├── weapons/
  │   ├── sword.png        → \"weapons\": [\"sword.png\"]
  │   └── notes.txt        (ignored)
  └── armor/               → \"armor\": []

Output is written as `const itemsStructure = {...};`.

Run 'items-manifest gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (default: items-manifest.toml in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory to scan [default: items]
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Generated file [default: items_structure.js]
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Behavior when two directories share a name
    #[arg(long, value_enum, global = true)]
    collision: Option<CollisionPolicy>,

    /// Sort directory listings by name
    #[arg(long, global = true)]
    sorted: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and write the manifest (the default)
    Generate,
    /// Scan and list categories without writing anything
    Check,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Generate) {
        Command::Generate => {
            let config = resolve_config(&cli)?;
            let manifest = scan::build_with(&config.root_path(), &config.scan_options())?;
            let text = generate::serialize(&manifest)?;
            generate::write(&text, &config.output_path())?;
            output::print_success(&config.output_path());
        }
        Command::Check => {
            let config = resolve_config(&cli)?;
            let manifest = scan::build_with(&config.root_path(), &config.scan_options())?;
            output::print_check_output(&manifest, &config.root_path());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` controls the level (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file (if any) and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<ManifestConfig, config::ConfigError> {
    let cwd = std::env::current_dir()?;
    let mut config = config::load_config(cli.config.as_deref(), &cwd)?;

    if let Some(root) = &cli.root {
        config.root = root.to_string_lossy().into_owned();
    }
    if let Some(output) = &cli.output {
        config.output = output.to_string_lossy().into_owned();
    }
    if let Some(collision) = cli.collision {
        config.collision = collision;
    }
    if cli.sorted {
        config.sorted = true;
    }

    config.validate()?;
    Ok(config)
}
