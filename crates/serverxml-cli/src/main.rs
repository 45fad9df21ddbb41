use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use serverxml::{Builder, Element, Kind, MarkupConfig, Outputter, Registry, RenderConfig};

#[derive(Debug, Parser)]
#[command(
    name = "serverxml",
    version,
    about = "Format and inspect server.xml configuration files"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite a document in canonical form
    Fmt {
        #[command(flatten)]
        input: InputArgs,
        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
        /// Escape markup characters in attribute values and text
        #[arg(long)]
        escape: bool,
    },
    /// Fail unless the document is already in canonical form
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the features enabled by the document
    Features {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List every recognized element tag
    Tags,
}

#[derive(Debug, ClapArgs)]
struct InputArgs {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Maximum element nesting depth (0 or anything above 512 means 512)
    #[arg(long, default_value_t = MarkupConfig::default().max_depth)]
    max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = MarkupConfig::default().max_size)]
    max_size: usize,
}

impl InputArgs {
    fn build(&self) -> Result<(String, Element)> {
        let source = read_input(&self.input)?;
        let config = MarkupConfig::new(self.max_depth, self.max_size);
        let root = Builder::new()?
            .with_config(config)
            .build(&source)
            .with_context(|| format!("failed to build {}", self.describe()))?;
        Ok((source, root))
    }

    fn describe(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Fmt {
            input,
            output,
            escape,
        } => {
            let (_, root) = input.build()?;
            let rendered = Outputter::with_config(RenderConfig { escape }).render(&root);
            write_output(&output, format!("{rendered}\n").as_bytes())?;
        }
        Command::Check { input } => {
            let (source, root) = input.build()?;
            let rendered = Outputter::new().render(&root);
            if rendered != source.trim_end_matches(['\r', '\n']) {
                bail!("{} is not in canonical form", input.describe());
            }
            info!("{} is canonical", input.describe());
        }
        Command::Features { input } => {
            let (_, root) = input.build()?;
            let manager = match root.kind() {
                Kind::FeatureManager => &root,
                _ => root.require(Kind::FeatureManager)?,
            };
            let mut listing = String::new();
            for feature in manager.list_features() {
                listing.push_str(feature);
                listing.push('\n');
            }
            write_output(&None, listing.as_bytes())?;
        }
        Command::Tags => {
            let mut listing = String::new();
            for tag in Registry::global()?.tags() {
                listing.push_str(tag);
                listing.push('\n');
            }
            write_output(&None, listing.as_bytes())?;
        }
    }

    Ok(())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
