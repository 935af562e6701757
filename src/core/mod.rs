//! Core data types for MIRU-VNTR typing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Locus`](locus::Locus): a locus and the names it is published under
//! - [`Scheme`](scheme::Scheme): an ordered list of loci that fixes string layout
//! - [`GenotypeProfile`](profile::GenotypeProfile): one repeat count per locus
//! - [`LocusId`](types::LocusId), [`RepeatCount`](types::RepeatCount),
//!   [`Lineage`](types::Lineage): shared value types
//!
//! ## Interchange Strings
//!
//! A profile is exchanged as a fixed-width string with one character per
//! locus, in scheme order:
//!
//! | Count   | Character |
//! |---------|-----------|
//! | unknown | `-`       |
//! | 0-9     | `0`-`9`   |
//! | 10-35   | `A`-`Z`   |
//!
//! The 15-locus layout is `NMRL_15` and the 24-locus layout is `NMRL_24`,
//! whose first 15 loci are those of `NMRL_15`.

pub mod allele;
pub mod locus;
pub mod profile;
pub mod scheme;
pub mod types;
