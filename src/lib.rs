//! # tb-typing
//!
//! A library for handling MIRU-VNTR typing data of *Mycobacterium tuberculosis*.
//!
//! Strain typing counts tandem repeats at a set of loci. The same loci have been
//! published under several names ("580", "MIRU-04" and "ETR-D" are one locus),
//! and profiles are exchanged as fixed-width strings whose layout depends on
//! the typing scheme. `tb-typing` translates between locus names, reads and
//! writes interchange strings, and makes a coarse lineage call.
//!
//! ## Features
//!
//! - **Name resolution**: Any published locus name, regardless of case or separators
//! - **Interchange strings**: 15- and 24-locus layouts, plus named groupings
//! - **Profiles**: Per-locus repeat counts with explicit unknown values
//! - **Lineage calls**: Ordered rule tables over locus values
//!
//! ## Example
//!
//! ```rust
//! use tb_typing::{GenotypeProfile, LocusRegistry};
//! use tb_typing::core::scheme::NMRL_15;
//!
//! let registry = LocusRegistry::embedded().unwrap();
//! assert_eq!(registry.resolve("ETR-D").unwrap().as_str(), "580");
//!
//! let mut profile = GenotypeProfile::new(registry);
//! profile.decode("3481096A2C22806", None).unwrap();
//! assert_eq!(profile.get("MIRU-04").unwrap(), Some(1));
//!
//! // Loci missing from the 15-locus string are written as '-'
//! assert_eq!(profile.encode(None).unwrap(), "3481096A2C22806---------");
//! assert_eq!(profile.encode(Some(&NMRL_15)).unwrap(), "3481096A2C22806");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Locus registry and name resolution
//! - [`core`]: Core data types for loci, schemes, and profiles
//! - [`lineage`]: Rule-based lineage classification
//! - [`parsing`]: Reading batches of interchange strings
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod lineage;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::registry::{resolve, LocusRegistry, RegistryError};
pub use core::allele::{AlleleValue, ValueError};
pub use core::profile::{GenotypeProfile, ProfileConfig, ProfileError};
pub use core::scheme::Scheme;
pub use core::types::*;
pub use lineage::{classify, LineageClassifier};
