use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phenopackets_core::config::{presence_policy_from_env_value, schema_version_from_env_value};
use phenopackets_core::constants::{CONFIG_FILE_ENV, PRESENCE_ENV, SCHEMA_VERSION_ENV};
use phenopackets_core::corpus::corpus;
use phenopackets_core::{CoreConfig, Format, PhenopacketService, RecordKind};
use phenopackets_schema::{PresencePolicy, SchemaVersion};

#[derive(Parser)]
#[command(name = "phenopackets")]
#[command(about = "Convert, check and hash phenopacket records in JSON and YAML")]
struct Cli {
    /// YAML configuration file (defaults to $PHENOPACKETS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Scalar presence policy: explicit-only or include-defaults
    #[arg(long, global = true)]
    presence: Option<PresencePolicy>,
    /// Schema version that governs decoding
    #[arg(long, global = true)]
    schema_version: Option<SchemaVersion>,
    #[command(subcommand)]
    command: Commands,
}

/// Where a record comes from and how to read it.
#[derive(clap::Args)]
struct Input {
    /// Input file, or `-` for standard input
    input: PathBuf,
    /// Root record type
    #[arg(long, default_value = "phenopacket")]
    kind: RecordKind,
    /// Input format (inferred from the file extension when omitted)
    #[arg(long)]
    from: Option<Format>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a record between JSON and YAML
    Convert {
        #[command(flatten)]
        input: Input,
        /// Output format (inferred from --output, otherwise the opposite of the input)
        #[arg(long)]
        to: Option<Format>,
        /// Output file (defaults to standard output)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print a record as a labeled YAML snippet
    Snippet {
        #[command(flatten)]
        input: Input,
        /// Root key of the snippet (defaults to the configured label or the record kind)
        #[arg(long)]
        label: Option<String>,
    },
    /// Print the canonical SHA-256 of a record
    Hash {
        #[command(flatten)]
        input: Input,
    },
    /// Check that a record decodes
    Validate {
        #[command(flatten)]
        input: Input,
    },
    /// Round-trip the built-in sample corpus and print each sample's canonical hash
    Verify {
        /// Only verify the named sample
        #[arg(long)]
        sample: Option<String>,
    },
}

/// Resolve configuration once: file, then environment, then command-line flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<CoreConfig> {
    layer_config(
        cli,
        std::env::var(PRESENCE_ENV).ok(),
        std::env::var(SCHEMA_VERSION_ENV).ok(),
    )
}

/// Each layer overrides only the settings it names; blank environment values name nothing.
fn layer_config(
    cli: &Cli,
    presence_env: Option<String>,
    schema_version_env: Option<String>,
) -> anyhow::Result<CoreConfig> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from));

    let file = match config_path {
        Some(path) => CoreConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => CoreConfig::default(),
    };

    let presence = match presence_env.filter(|value| !value.trim().is_empty()) {
        Some(value) => presence_policy_from_env_value(Some(value))
            .with_context(|| format!("reading {PRESENCE_ENV}"))?,
        None => file.presence_policy(),
    };
    let schema_version = match schema_version_env.filter(|value| !value.trim().is_empty()) {
        Some(value) => schema_version_from_env_value(Some(value))
            .with_context(|| format!("reading {SCHEMA_VERSION_ENV}"))?,
        None => file.schema_version(),
    };

    Ok(CoreConfig::new(
        cli.presence.unwrap_or(presence),
        cli.schema_version.unwrap_or(schema_version),
        file.yaml_label().map(str::to_owned),
    )?)
}

fn read_input(input: &Input) -> anyhow::Result<(String, Format)> {
    let is_stdin = input.input.as_os_str() == "-";
    let format = match (input.from, is_stdin) {
        (Some(format), _) => format,
        (None, true) => bail!("--from is required when reading standard input"),
        (None, false) => Format::from_path(&input.input)?,
    };

    let text = if is_stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading standard input")?;
        text
    } else {
        std::fs::read_to_string(&input.input)
            .with_context(|| format!("reading {}", input.input.display()))?
    };
    Ok((text, format))
}

fn output_format(to: Option<Format>, output: Option<&Path>, from: Format) -> anyhow::Result<Format> {
    Ok(match (to, output) {
        (Some(format), _) => format,
        (None, Some(path)) => Format::from_path(path)?,
        (None, None) => match from {
            Format::Json => Format::Yaml,
            Format::Yaml => Format::Json,
        },
    })
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Entry point for the phenopackets command-line tool.
///
/// # Environment Variables
/// - `PHENOPACKETS_CONFIG`: YAML configuration file
/// - `PHENOPACKETS_PRESENCE`: presence policy when no configuration file is given
/// - `PHENOPACKETS_SCHEMA_VERSION`: schema version when no configuration file is given
/// - `RUST_LOG`: log filter (default directive `phenopackets=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("phenopackets=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(
        presence = %config.presence_policy(),
        schema_version = %config.schema_version(),
        "configuration resolved"
    );
    let service = PhenopacketService::new(config);

    match cli.command {
        Commands::Convert { input, to, output } => {
            let (text, from) = read_input(&input)?;
            let to = output_format(to, output.as_deref(), from)?;
            let converted = with_newline(service.convert(input.kind, &text, from, to)?);
            match output {
                Some(path) => std::fs::write(&path, converted)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{converted}"),
            }
        }
        Commands::Snippet { input, label } => {
            let (text, from) = read_input(&input)?;
            let record = service.decode_kind(input.kind, &text, from)?;
            let label = label.unwrap_or_else(|| service.label_for(input.kind).to_owned());
            print!("{}", service.labeled_yaml(&label, record.as_ref())?);
        }
        Commands::Hash { input } => {
            let (text, from) = read_input(&input)?;
            println!("{}", service.hash(input.kind, &text, from)?);
        }
        Commands::Validate { input } => {
            let (text, from) = read_input(&input)?;
            service.validate(input.kind, &text, from)?;
            println!("{}: valid {}", input.input.display(), input.kind);
        }
        Commands::Verify { sample } => {
            let policy = service.config().presence_policy();
            let samples: Vec<_> = corpus()?
                .into_iter()
                .filter(|candidate| sample.as_deref().is_none_or(|name| candidate.name == name))
                .collect();
            if samples.is_empty() {
                bail!("no sample named '{}'", sample.unwrap_or_default());
            }

            let mut failures = 0usize;
            for sample in &samples {
                match sample.verify(policy) {
                    Ok(report) => println!("{}  {}", report.hash, sample.name),
                    Err(err) => {
                        failures += 1;
                        tracing::error!(sample = sample.name, "{err}");
                    }
                }
            }
            if failures > 0 {
                bail!("{failures} of {} samples failed to round-trip", samples.len());
            }
        }
    }

    Ok(())
}
