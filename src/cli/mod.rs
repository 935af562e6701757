//! Command-line interface for tb-typing.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **loci**: List the locus catalog or resolve locus names
//! - **schemes**: Show typing schemes and their locus order
//! - **convert**: Re-encode interchange strings under another scheme
//! - **classify**: Call the lineage of interchange strings
//!
//! ## Usage
//!
//! ```text
//! # Which locus is ETR-D?
//! tb-typing loci resolve ETR-D QUB11b
//!
//! # Expand a 15-locus string to the 24-locus layout
//! tb-typing convert 3481096A2C22806
//!
//! # Reorder into MIRU-VNTRplus order, JSON output
//! tb-typing convert 3481096A2C22806 --to vntrplus24 --format json
//!
//! # Classify a file of labelled strings
//! tb-typing classify --input strains.tsv
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::profile::ProfileConfig;
use crate::core::scheme::{self, Scheme};
use crate::parsing::interchange::{parse_interchange_file, InterchangeRecord};

pub mod classify;
pub mod convert;
pub mod loci;
pub mod schemes;

#[derive(Parser)]
#[command(name = "tb-typing")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Translate MIRU-VNTR locus names and interchange strings")]
#[command(
    long_about = "tb-typing works with MIRU-VNTR typing data for M. tuberculosis.\n\nIt provides:\n- Resolution of locus names across MIRU, ETR, Mtub/QUB and position naming\n- Conversion of profiles between 15- and 24-locus interchange strings\n- A provisional lineage call from locus values"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List loci or resolve locus names
    Loci(loci::LociArgs),

    /// Show typing schemes
    Schemes(schemes::SchemesArgs),

    /// Convert interchange strings between schemes
    Convert(convert::ConvertArgs),

    /// Call the lineage of interchange strings
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Scheme names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemeName {
    Nmrl24,
    Nmrl15,
    Vntrplus24,
    Vntrplus15,
    Etr,
    Miru,
    Vntr,
    Aux,
}

impl SchemeName {
    #[must_use]
    pub fn scheme(self) -> &'static Scheme {
        match self {
            Self::Nmrl24 => &scheme::NMRL_24,
            Self::Nmrl15 => &scheme::NMRL_15,
            Self::Vntrplus24 => &scheme::VNTRPLUS_24,
            Self::Vntrplus15 => &scheme::VNTRPLUS_15,
            Self::Etr => &scheme::ETR,
            Self::Miru => &scheme::MIRU,
            Self::Vntr => &scheme::VNTR,
            Self::Aux => &scheme::AUX,
        }
    }
}

/// Where interchange strings come from, and how to read them
#[derive(clap::Args)]
pub struct ProfileInputArgs {
    /// Interchange strings (e.g. 3481096A2C22806). Strings that start with
    /// the ambiguous symbol '-' go after `--`
    pub profiles: Vec<String>,

    /// File with one interchange string per line, optionally `label<TAB>string`.
    /// Use '-' for stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Symbol for loci with an unknown repeat count
    #[arg(long, default_value = "-")]
    pub ambiguous_symbol: char,
}

impl ProfileInputArgs {
    /// Command-line strings first, then records from `--input`
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, or if no
    /// interchange strings were given at all.
    pub fn records(&self) -> anyhow::Result<Vec<InterchangeRecord>> {
        let mut records: Vec<InterchangeRecord> = self
            .profiles
            .iter()
            .map(|s| InterchangeRecord::new(s.trim()))
            .collect();

        if let Some(path) = &self.input {
            records.extend(parse_interchange_file(path)?);
        }

        if records.is_empty() {
            anyhow::bail!("No interchange strings given (pass them as arguments or with --input)");
        }
        Ok(records)
    }

    /// # Errors
    ///
    /// Returns an error if the ambiguous symbol clashes with the value alphabet.
    pub fn profile_config(&self) -> anyhow::Result<ProfileConfig> {
        Ok(ProfileConfig::with_ambiguous_symbol(self.ambiguous_symbol)?)
    }
}

/// Name used to refer to a record in messages
pub(crate) fn describe_record(record: &InterchangeRecord) -> String {
    if record.line > 0 {
        format!("'{}' (line {})", record.display_name(), record.line)
    } else {
        format!("'{}'", record.display_name())
    }
}
