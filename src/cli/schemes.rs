use clap::Args;

use crate::catalog::registry::LocusRegistry;
use crate::cli::{OutputFormat, SchemeName};
use crate::core::scheme::{Scheme, ALL_SCHEMES};

#[derive(Args)]
pub struct SchemesArgs {
    /// Show only this scheme
    #[arg(value_enum)]
    pub scheme: Option<SchemeName>,
}

/// Execute schemes subcommand
///
/// # Errors
///
/// Returns an error if the registry cannot be built or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SchemesArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let registry = LocusRegistry::embedded()?;
    let schemes: Vec<&Scheme> = match args.scheme {
        Some(name) => vec![name.scheme()],
        None => ALL_SCHEMES.to_vec(),
    };

    match format {
        OutputFormat::Text => print_text_schemes(registry, &schemes),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schemes)?),
        OutputFormat::Tsv => {
            println!("scheme\tposition\tlocus");
            for scheme in &schemes {
                for (i, id) in scheme.iter().enumerate() {
                    println!("{}\t{}\t{id}", scheme.name, i + 1);
                }
            }
        }
    }

    Ok(())
}

fn print_text_schemes(registry: &LocusRegistry, schemes: &[&Scheme]) {
    for (i, scheme) in schemes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({} loci)", scheme.name, scheme.len());
        for (position, id) in scheme.iter().enumerate() {
            let synonyms = registry
                .get(id)
                .map(|locus| locus.synonyms.join(", "))
                .unwrap_or_default();
            println!("  {:>2}. {id:<6} {synonyms}", position + 1);
        }
    }
}
