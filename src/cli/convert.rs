use anyhow::Context;
use clap::Args;

use crate::catalog::registry::LocusRegistry;
use crate::cli::{describe_record, OutputFormat, ProfileInputArgs, SchemeName};
use crate::core::profile::GenotypeProfile;
use crate::core::scheme::Scheme;
use crate::core::types::RepeatCount;
use crate::parsing::interchange::InterchangeRecord;

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: ProfileInputArgs,

    /// Scheme of the input strings (inferred from length by default:
    /// 15 characters = nmrl15, 24 characters = nmrl24)
    #[arg(long, value_enum)]
    pub from: Option<SchemeName>,

    /// Scheme to write
    #[arg(long, value_enum, default_value = "nmrl24")]
    pub to: SchemeName,
}

/// A converted record
struct Conversion {
    record: InterchangeRecord,
    encoded: String,
    counts: Vec<Option<RepeatCount>>,
    ambiguous: usize,
}

/// Execute convert subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or a string cannot be decoded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ConvertArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = LocusRegistry::embedded()?;
    let config = args.input.profile_config()?;
    let records = args.input.records()?;
    let from = args.from.map(SchemeName::scheme);
    let to = args.to.scheme();

    if verbose {
        eprintln!(
            "Converting {} profile(s) from {} to {}",
            records.len(),
            from.map_or("length-inferred scheme", |s| s.name),
            to.name
        );
    }

    let mut conversions = Vec::with_capacity(records.len());
    for record in records {
        let mut profile = GenotypeProfile::with_config(registry, config);
        profile
            .decode(&record.value, from)
            .with_context(|| format!("Failed to decode {}", describe_record(&record)))?;

        let encoded = profile.encode(Some(to))?;
        let counts = profile.to_array(Some(to))?;
        let ambiguous = counts.iter().filter(|v| v.is_none()).count();
        conversions.push(Conversion {
            record,
            encoded,
            counts,
            ambiguous,
        });
    }

    match format {
        OutputFormat::Text => print_text_conversions(&conversions, to),
        OutputFormat::Json => print_json_conversions(&conversions, to)?,
        OutputFormat::Tsv => print_tsv_conversions(&conversions),
    }

    Ok(())
}

fn format_counts(counts: &[Option<RepeatCount>]) -> String {
    counts
        .iter()
        .map(|v| v.map_or_else(|| "NA".to_string(), |c| c.to_string()))
        .collect::<Vec<_>>()
        .join(",")
}

fn print_text_conversions(conversions: &[Conversion], to: &Scheme) {
    for conversion in conversions {
        if let Some(label) = &conversion.record.label {
            println!("{label}");
        }
        println!("  Input:  {}", conversion.record.value);
        println!("  {}: {}", to.name, conversion.encoded);
        println!("  Counts: {}", format_counts(&conversion.counts));
        if conversion.ambiguous > 0 {
            println!("  Ambiguous loci: {}/{}", conversion.ambiguous, to.len());
        }
    }
}

fn print_json_conversions(conversions: &[Conversion], to: &Scheme) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = conversions
        .iter()
        .map(|c| {
            serde_json::json!({
                "label": c.record.label,
                "input": c.record.value,
                "scheme": to.name,
                "output": c.encoded,
                "loci": to.loci,
                "counts": c.counts,
                "ambiguous_loci": c.ambiguous,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_conversions(conversions: &[Conversion]) {
    println!("label\tinput\toutput\tcounts");
    for c in conversions {
        println!(
            "{}\t{}\t{}\t{}",
            c.record.label.as_deref().unwrap_or(""),
            c.record.value,
            c.encoded,
            format_counts(&c.counts),
        );
    }
}
