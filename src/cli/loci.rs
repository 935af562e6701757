use clap::{Args, Subcommand};

use crate::catalog::registry::LocusRegistry;
use crate::cli::{OutputFormat, SchemeName};
use crate::core::locus::Locus;

#[derive(Args)]
pub struct LociArgs {
    #[command(subcommand)]
    pub command: LociCommands,
}

#[derive(Subcommand)]
pub enum LociCommands {
    /// List loci and their synonyms
    List {
        /// Only list loci of this scheme, in scheme order
        #[arg(long, value_enum)]
        scheme: Option<SchemeName>,
    },

    /// Resolve locus names to canonical ids
    Resolve {
        /// Locus names in any naming system (e.g. ETR-D, MIRU-04, QUB11b)
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Execute loci subcommand
///
/// # Errors
///
/// Returns an error if the registry cannot be built, output fails, or a name
/// does not resolve.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LociArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = LocusRegistry::embedded()?;

    if verbose {
        eprintln!("Loaded locus registry with {} loci", registry.len());
    }

    match args.command {
        LociCommands::List { scheme } => run_list(registry, scheme, format),
        LociCommands::Resolve { names } => run_resolve(registry, &names, format),
    }
}

fn run_list(
    registry: &LocusRegistry,
    scheme: Option<SchemeName>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let loci: Vec<&Locus> = match scheme {
        Some(name) => name
            .scheme()
            .iter()
            .map(|id| {
                registry
                    .get(id)
                    .ok_or_else(|| anyhow::anyhow!("Scheme locus '{id}' is not in the registry"))
            })
            .collect::<anyhow::Result<_>>()?,
        None => registry.loci().iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            for locus in &loci {
                println!("{:<6} {}", locus.id.as_str(), locus.synonyms.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&loci)?);
        }
        OutputFormat::Tsv => {
            println!("id\tsynonyms");
            for locus in &loci {
                println!("{}\t{}", locus.id, locus.synonyms.join(","));
            }
        }
    }

    Ok(())
}

fn run_resolve(
    registry: &LocusRegistry,
    names: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let resolved: Vec<(&str, Option<&Locus>)> = names
        .iter()
        .map(|name| (name.as_str(), registry.get(name)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (name, locus) in &resolved {
                match locus {
                    Some(locus) => println!("{name}\t{}", locus.id),
                    None => println!("{name}\t(unknown)"),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = resolved
                .iter()
                .map(|(name, locus)| {
                    serde_json::json!({
                        "name": name,
                        "id": locus.map(|l| l.id.as_str()),
                        "synonyms": locus.map(|l| &l.synonyms),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tid");
            for (name, locus) in &resolved {
                println!("{name}\t{}", locus.map_or("", |l| l.id.as_str()));
            }
        }
    }

    let unknown: Vec<&str> = resolved
        .iter()
        .filter(|(_, locus)| locus.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !unknown.is_empty() {
        anyhow::bail!("Unknown locus name(s): {}", unknown.join(", "));
    }

    Ok(())
}
