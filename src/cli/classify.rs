use anyhow::Context;
use clap::Args;

use crate::catalog::registry::LocusRegistry;
use crate::cli::{describe_record, OutputFormat, ProfileInputArgs, SchemeName};
use crate::core::profile::GenotypeProfile;
use crate::core::types::Lineage;
use crate::lineage;
use crate::parsing::interchange::InterchangeRecord;

#[derive(Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: ProfileInputArgs,

    /// Scheme of the input strings (inferred from length by default)
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeName>,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or a string cannot be decoded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = LocusRegistry::embedded()?;
    let config = args.input.profile_config()?;
    let records = args.input.records()?;
    let scheme = args.scheme.map(SchemeName::scheme);
    let classifier = lineage::provisional()?;

    if verbose {
        eprintln!(
            "Classifying {} profile(s) with rule set '{}'",
            records.len(),
            classifier.rule_set().name
        );
        for rule in classifier.unsatisfiable_rules() {
            eprintln!("Rule for {} can never match", rule.lineage);
        }
    }

    let mut calls: Vec<(InterchangeRecord, Lineage)> = Vec::with_capacity(records.len());
    for record in records {
        let mut profile = GenotypeProfile::with_config(registry, config);
        profile
            .decode(&record.value, scheme)
            .with_context(|| format!("Failed to decode {}", describe_record(&record)))?;
        let lineage = classifier.classify(&profile);
        calls.push((record, lineage));
    }

    match format {
        OutputFormat::Text => {
            for (record, lineage) in &calls {
                println!("{}\t{}\t{}", record.display_name(), lineage.prefix(), lineage);
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = calls
                .iter()
                .map(|(record, lineage)| {
                    serde_json::json!({
                        "label": record.label,
                        "input": record.value,
                        "lineage": lineage,
                        "label_text": lineage.label(),
                        "prefix": lineage.prefix().to_string(),
                        "called": lineage.is_known(),
                        "verified": classifier.is_verified(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("label\tinput\tprefix\tlineage");
            for (record, lineage) in &calls {
                println!(
                    "{}\t{}\t{}\t{}",
                    record.label.as_deref().unwrap_or(""),
                    record.value,
                    lineage.prefix(),
                    lineage
                );
            }
        }
    }

    Ok(())
}
