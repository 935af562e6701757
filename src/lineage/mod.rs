//! Lineage (phylotype) calls from MIRU-VNTR profiles.
//!
//! A [`RuleSet`](rules::RuleSet) is an ordered list of rules. Each rule is a
//! conjunction of tests on single loci (exact value, membership in a set, or
//! a lower bound). The first rule whose tests all pass decides the lineage;
//! if none pass the result is [`Lineage::Unknown`]. A test on a locus whose
//! count is unknown always fails.
//!
//! ## Rule Tables
//!
//! The only built-in table, [`PROVISIONAL_RULES`](rules::PROVISIONAL_RULES),
//! is carried over unchanged from a legacy tool and is flagged as
//! unverified. Its Beijing rule contradicts itself and can never match. Use
//! [`LineageClassifier::new`] with a checked table before relying on calls.
//!
//! ## Example
//!
//! ```rust
//! use tb_typing::{GenotypeProfile, Lineage};
//! use tb_typing::lineage::classify;
//!
//! let mut profile = GenotypeProfile::standard().unwrap();
//! profile.decode("3481096A2C22806", None).unwrap();
//! assert_eq!(classify(&profile).unwrap(), Lineage::Eai);
//! ```

pub mod classifier;
pub mod rules;

use std::sync::OnceLock;

pub use classifier::LineageClassifier;

use crate::catalog::registry::{LocusRegistry, RegistryError};
use crate::core::profile::GenotypeProfile;
use crate::core::types::Lineage;

static PROVISIONAL: OnceLock<Result<LineageClassifier, RegistryError>> = OnceLock::new();

/// The built-in rule table over the built-in registry, built on first use
///
/// # Errors
///
/// Returns the registry construction error, or `RegistryError::UnknownLocus`
/// if a rule names a locus the registry lacks.
pub fn provisional() -> Result<&'static LineageClassifier, RegistryError> {
    let registry = LocusRegistry::embedded()?;
    PROVISIONAL
        .get_or_init(|| LineageClassifier::new(registry, rules::PROVISIONAL_RULES))
        .as_ref()
        .map_err(Clone::clone)
}

/// Classify a profile with the built-in rule table
///
/// Profiles over the built-in registry share one classifier; any other
/// registry gets a classifier of its own for this call.
///
/// # Errors
///
/// Returns `RegistryError::UnknownLocus` if the profile's registry lacks a
/// locus the rules refer to.
pub fn classify(profile: &GenotypeProfile<'_>) -> Result<Lineage, RegistryError> {
    let embedded = LocusRegistry::embedded()?;
    if std::ptr::eq(profile.registry(), embedded) {
        return Ok(provisional()?.classify(profile));
    }
    let classifier = LineageClassifier::new(profile.registry(), rules::PROVISIONAL_RULES)?;
    Ok(classifier.classify(profile))
}
