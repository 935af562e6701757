use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::core::locus::{normalize_name, Locus, LOCI};
use crate::core::types::LocusId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown locus: '{0}'")]
    UnknownLocus(String),

    #[error("Locus name collision: '{key}' refers to both {first} and {second}")]
    Collision {
        key: String,
        first: LocusId,
        second: LocusId,
    },

    #[error("Duplicate locus id: {0}")]
    DuplicateLocus(LocusId),

    #[error("Locus {locus} has a name with no usable characters: '{synonym}'")]
    EmptyName { locus: LocusId, synonym: String },
}

static EMBEDDED: OnceLock<Result<LocusRegistry, RegistryError>> = OnceLock::new();

/// Catalog of loci with a lookup from every normalized name to its locus
#[derive(Debug, Clone)]
pub struct LocusRegistry {
    /// All loci, in catalog order; a locus' position is its slot
    loci: Vec<Locus>,

    /// Index: canonical id -> slot
    id_to_slot: HashMap<LocusId, usize>,

    /// Index: normalized name -> slot
    name_to_slot: HashMap<String, usize>,
}

impl LocusRegistry {
    /// The built-in MIRU-VNTR registry, built on first use and shared
    ///
    /// # Errors
    ///
    /// Returns the construction error if the built-in table is inconsistent.
    pub fn embedded() -> Result<&'static Self, RegistryError> {
        EMBEDDED
            .get_or_init(|| Self::build(LOCI.iter().map(Locus::from)))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Build a registry, checking that no two loci share a name
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Collision` when two names of different loci
    /// normalize to the same key, `RegistryError::DuplicateLocus` when an id
    /// is repeated, or `RegistryError::EmptyName` when a name normalizes to
    /// nothing.
    pub fn build<I>(loci: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Locus>,
    {
        let mut registry = Self {
            loci: Vec::new(),
            id_to_slot: HashMap::new(),
            name_to_slot: HashMap::new(),
        };

        for locus in loci {
            registry.add_locus(locus)?;
        }

        debug!(
            "Built locus registry: {} loci, {} names",
            registry.loci.len(),
            registry.name_to_slot.len()
        );
        Ok(registry)
    }

    fn add_locus(&mut self, locus: Locus) -> Result<(), RegistryError> {
        let slot = self.loci.len();

        if self.id_to_slot.contains_key(&locus.id) {
            return Err(RegistryError::DuplicateLocus(locus.id));
        }

        for name in locus.names() {
            let key = normalize_name(name);
            if key.is_empty() {
                return Err(RegistryError::EmptyName {
                    locus: locus.id.clone(),
                    synonym: name.to_string(),
                });
            }
            match self.name_to_slot.get(&key) {
                // The same locus may list two spellings of one name
                Some(&existing) if existing == slot => {}
                Some(&existing) => {
                    return Err(RegistryError::Collision {
                        key,
                        first: self.loci[existing].id.clone(),
                        second: locus.id.clone(),
                    });
                }
                None => {
                    self.name_to_slot.insert(key, slot);
                }
            }
        }

        self.id_to_slot.insert(locus.id.clone(), slot);
        self.loci.push(locus);
        Ok(())
    }

    /// Resolve any name of a locus to its canonical id
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` if the normalized name is not known.
    pub fn resolve(&self, name: &str) -> Result<&LocusId, RegistryError> {
        self.slot_of(name).map(|slot| &self.loci[slot].id)
    }

    /// Storage slot for any name of a locus
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` if the normalized name is not known.
    pub fn slot_of(&self, name: &str) -> Result<usize, RegistryError> {
        self.name_to_slot
            .get(&normalize_name(name))
            .copied()
            .ok_or_else(|| RegistryError::UnknownLocus(name.to_string()))
    }

    /// Storage slot for a canonical id, without name normalization
    #[must_use]
    pub fn slot_of_id(&self, id: &str) -> Option<usize> {
        self.id_to_slot.get(&LocusId::new(id)).copied()
    }

    /// Get a locus by any of its names
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Locus> {
        self.slot_of(name).ok().map(|slot| &self.loci[slot])
    }

    /// All loci in slot order
    #[must_use]
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    /// Canonical ids in slot order
    pub fn ids(&self) -> impl Iterator<Item = &LocusId> {
        self.loci.iter().map(|locus| &locus.id)
    }

    /// Number of loci in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    /// Check if registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }
}

/// Resolve a locus name against the built-in registry
///
/// ```
/// use tb_typing::catalog::registry::resolve;
///
/// assert_eq!(resolve("MIRU-04").unwrap().as_str(), "580");
/// assert_eq!(resolve("etr d").unwrap().as_str(), "580");
/// ```
///
/// # Errors
///
/// Returns `RegistryError::UnknownLocus` if the name is not known.
pub fn resolve(name: &str) -> Result<&'static LocusId, RegistryError> {
    LocusRegistry::embedded()?.resolve(name)
}
