//! Locus registry: canonical locus ids and the names they go by.
//!
//! MIRU-VNTR loci have been published under several naming systems (locus
//! position, MIRU number, ETR letter, Mtub/QUB identifiers). The registry
//! maps every known name, after normalization, to exactly one canonical id.
//! A name is normalized by trimming it, lowercasing it, and dropping
//! whitespace, hyphens and underscores, so `"MIRU-04"`, `"miru04"` and
//! `" Miru_04 "` are the same name.
//!
//! ## Embedded Registry
//!
//! The built-in registry holds the 24 loci of the standard typing sets and is
//! built once per process on first use. Construction fails if two different
//! loci would share a normalized name.
//!
//! ## Example
//!
//! ```rust
//! use tb_typing::catalog::registry::LocusRegistry;
//!
//! let registry = LocusRegistry::embedded().unwrap();
//! assert_eq!(registry.resolve("ETR-D").unwrap().as_str(), "580");
//! assert_eq!(registry.resolve("MIRU-04").unwrap().as_str(), "580");
//! ```
//!
//! ## Custom Registries
//!
//! ```rust
//! use tb_typing::catalog::registry::LocusRegistry;
//! use tb_typing::core::locus::Locus;
//!
//! let registry = LocusRegistry::build(vec![
//!     Locus::new("2165").with_synonyms(["ETR-A"]),
//!     Locus::new("2461").with_synonyms(["ETR-B"]),
//! ])
//! .unwrap();
//! assert_eq!(registry.len(), 2);
//! ```

pub mod registry;
