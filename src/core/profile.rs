use thiserror::Error;
use tracing::debug;

use crate::catalog::registry::{LocusRegistry, RegistryError};
use crate::core::allele::{
    char_to_count, count_to_char, validate_ambiguous_symbol, AlleleValue, ValueError,
    AMBIGUOUS_SYMBOL,
};
use crate::core::scheme::Scheme;
use crate::core::types::{LocusId, RepeatCount};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("Length mismatch: scheme {scheme} has {expected} loci but the string has {found} characters")]
    LengthMismatch {
        scheme: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Cannot infer scheme for a {0}-character string: expected 15 or 24 characters")]
    AmbiguousSchemeInference(usize),
}

/// Settings shared by every profile operation.
///
/// The ambiguous symbol can only be set through
/// [`ProfileConfig::with_ambiguous_symbol`], which keeps it out of the value
/// alphabet:
///
/// ```compile_fail
/// use tb_typing::ProfileConfig;
///
/// let config = ProfileConfig { ambiguous_symbol: '5' };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Symbol written for, and read as, an unknown repeat count
    ambiguous_symbol: char,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            ambiguous_symbol: AMBIGUOUS_SYMBOL,
        }
    }
}

impl ProfileConfig {
    /// # Errors
    ///
    /// Returns `ValueError::InvalidAmbiguousSymbol` for a digit or uppercase letter.
    pub fn with_ambiguous_symbol(symbol: char) -> Result<Self, ValueError> {
        Ok(Self {
            ambiguous_symbol: validate_ambiguous_symbol(symbol)?,
        })
    }

    #[must_use]
    pub fn ambiguous_symbol(&self) -> char {
        self.ambiguous_symbol
    }
}

/// Repeat counts for every locus in a registry.
///
/// A profile always holds exactly one value per registry locus; `None` marks
/// a locus whose count is unknown. Loci can be read and written under any of
/// their names.
///
/// ```
/// use tb_typing::GenotypeProfile;
/// use tb_typing::core::scheme::NMRL_15;
///
/// let mut profile = GenotypeProfile::standard().unwrap();
/// profile.decode("3481096A2C22806", None).unwrap();
/// assert_eq!(profile.get("ETR-A").unwrap(), Some(3));
/// assert_eq!(profile.get("miru-16").unwrap(), Some(10));
/// assert_eq!(profile.encode(Some(&NMRL_15)).unwrap(), "3481096A2C22806");
/// ```
#[derive(Debug, Clone)]
pub struct GenotypeProfile<'r> {
    registry: &'r LocusRegistry,
    values: Vec<Option<RepeatCount>>,
    config: ProfileConfig,
}

impl PartialEq for GenotypeProfile<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry)
            && self.values == other.values
            && self.config == other.config
    }
}

impl Eq for GenotypeProfile<'_> {}

impl<'r> GenotypeProfile<'r> {
    /// Create a profile with every locus ambiguous
    #[must_use]
    pub fn new(registry: &'r LocusRegistry) -> Self {
        Self::with_config(registry, ProfileConfig::default())
    }

    #[must_use]
    pub fn with_config(registry: &'r LocusRegistry, config: ProfileConfig) -> Self {
        Self {
            registry,
            values: vec![None; registry.len()],
            config,
        }
    }

    /// Decode an interchange string into a new profile
    ///
    /// # Errors
    ///
    /// See [`GenotypeProfile::decode`].
    pub fn from_interchange(
        registry: &'r LocusRegistry,
        s: &str,
        scheme: Option<&Scheme>,
    ) -> Result<Self, ProfileError> {
        Self::from_interchange_with_config(registry, s, scheme, ProfileConfig::default())
    }

    /// Decode an interchange string written with a non-default config
    ///
    /// # Errors
    ///
    /// See [`GenotypeProfile::decode`].
    pub fn from_interchange_with_config(
        registry: &'r LocusRegistry,
        s: &str,
        scheme: Option<&Scheme>,
        config: ProfileConfig,
    ) -> Result<Self, ProfileError> {
        let mut profile = Self::with_config(registry, config);
        profile.decode(s, scheme)?;
        Ok(profile)
    }

    #[must_use]
    pub fn registry(&self) -> &'r LocusRegistry {
        self.registry
    }

    #[must_use]
    pub fn config(&self) -> ProfileConfig {
        self.config
    }

    /// Repeat count of a locus, by any of its names
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` if the name does not resolve.
    pub fn get(&self, name: &str) -> Result<Option<RepeatCount>, ProfileError> {
        let slot = self.registry.slot_of(name)?;
        Ok(self.values[slot])
    }

    /// Repeat count stored in a registry slot
    #[must_use]
    pub fn value_at(&self, slot: usize) -> Option<RepeatCount> {
        self.values.get(slot).copied().flatten()
    }

    /// Set a locus, by any of its names, from a symbol or a raw count
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` for an unknown name, or a
    /// `ValueError` if the value cannot be stored.
    pub fn set(&mut self, name: &str, value: impl Into<AlleleValue>) -> Result<(), ProfileError> {
        let slot = self.registry.slot_of(name)?;
        self.values[slot] = value.into().resolve(self.config.ambiguous_symbol)?;
        Ok(())
    }

    /// Mark a locus as ambiguous
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` if the name does not resolve.
    pub fn clear(&mut self, name: &str) -> Result<(), ProfileError> {
        let slot = self.registry.slot_of(name)?;
        self.values[slot] = None;
        Ok(())
    }

    /// Mark every locus as ambiguous
    pub fn reset(&mut self) {
        self.values.fill(None);
    }

    /// True if any locus has no known count
    #[must_use]
    pub fn is_ambiguous_anywhere(&self) -> bool {
        self.values.iter().any(Option::is_none)
    }

    /// Ids of loci with no known count, in registry order
    pub fn ambiguous_loci(&self) -> impl Iterator<Item = &'r LocusId> + '_ {
        let registry = self.registry;
        self.values
            .iter()
            .zip(registry.ids())
            .filter(|(value, _)| value.is_none())
            .map(|(_, id)| id)
    }

    /// (id, count) for every locus in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&'r LocusId, Option<RepeatCount>)> + '_ {
        let registry = self.registry;
        registry.ids().zip(self.values.iter().copied())
    }

    /// Replace the contents with the values of an interchange string.
    ///
    /// With no scheme, a 15-character string is read as `NMRL_15` and a
    /// 24-character string as `NMRL_24`. Every locus is reset to ambiguous
    /// before the string is applied. The profile is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::AmbiguousSchemeInference` if no scheme is given
    /// and the length is neither 15 nor 24, `ProfileError::LengthMismatch` if
    /// the length differs from the given scheme, or a `ValueError` for a
    /// character outside the alphabet.
    pub fn decode(&mut self, s: &str, scheme: Option<&Scheme>) -> Result<(), ProfileError> {
        let len = s.chars().count();
        let scheme = match scheme {
            Some(scheme) if scheme.len() != len => {
                return Err(ProfileError::LengthMismatch {
                    scheme: scheme.name,
                    expected: scheme.len(),
                    found: len,
                });
            }
            Some(scheme) => scheme,
            None => {
                Scheme::infer_from_length(len).ok_or(ProfileError::AmbiguousSchemeInference(len))?
            }
        };

        let slots = self.slots(scheme)?;
        let symbol = self.config.ambiguous_symbol;
        let decoded = s
            .chars()
            .map(|c| char_to_count(c, symbol))
            .collect::<Result<Vec<_>, _>>()?;

        self.reset();
        for (slot, value) in slots.into_iter().zip(decoded) {
            self.values[slot] = value;
        }

        debug!("Decoded '{}' using scheme {}", s, scheme.name);
        Ok(())
    }

    /// Encode as an interchange string, in `NMRL_24` order by default
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` if the scheme names a locus
    /// missing from this profile's registry.
    pub fn encode(&self, scheme: Option<&Scheme>) -> Result<String, ProfileError> {
        let symbol = self.config.ambiguous_symbol;
        self.to_array(scheme)?
            .into_iter()
            .map(|value| count_to_char(value, symbol).map_err(ProfileError::from))
            .collect()
    }

    /// Repeat counts in scheme order, `NMRL_24` by default
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` if the scheme names a locus
    /// missing from this profile's registry.
    pub fn to_array(&self, scheme: Option<&Scheme>) -> Result<Vec<Option<RepeatCount>>, ProfileError> {
        let scheme = scheme.unwrap_or(Scheme::default_scheme());
        Ok(self
            .slots(scheme)?
            .into_iter()
            .map(|slot| self.values[slot])
            .collect())
    }

    fn slots(&self, scheme: &Scheme) -> Result<Vec<usize>, ProfileError> {
        scheme
            .iter()
            .map(|id| {
                self.registry
                    .slot_of_id(id)
                    .ok_or_else(|| ProfileError::from(RegistryError::UnknownLocus(id.to_string())))
            })
            .collect()
    }
}

impl GenotypeProfile<'static> {
    /// Create an empty profile over the built-in registry
    ///
    /// # Errors
    ///
    /// Returns the registry construction error, if any.
    pub fn standard() -> Result<Self, RegistryError> {
        Ok(Self::new(LocusRegistry::embedded()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locus::Locus;
    use crate::core::scheme::{ALL_SCHEMES, AUX, ETR, NMRL_15, NMRL_24, VNTRPLUS_24};

    const SAMPLE: &str = "3481096A2C22806";

    fn decoded(s: &str) -> GenotypeProfile<'static> {
        let mut profile = GenotypeProfile::standard().unwrap();
        profile.decode(s, None).unwrap();
        profile
    }

    #[test]
    fn test_new_profile_is_fully_ambiguous() {
        let profile = GenotypeProfile::standard().unwrap();
        assert!(profile.is_ambiguous_anywhere());
        assert_eq!(profile.ambiguous_loci().count(), 24);
        assert!(profile.iter().all(|(_, value)| value.is_none()));
    }

    #[test]
    fn test_get_and_set_through_synonyms() {
        let mut profile = GenotypeProfile::standard().unwrap();
        assert_eq!(profile.get("ETR-D").unwrap(), None);

        profile.set("ETR-D", 5_i64).unwrap();
        assert_eq!(profile.get("etrd").unwrap(), Some(5));
        assert_eq!(profile.get("580").unwrap(), Some(5));
        assert_eq!(profile.get("MIRU-04").unwrap(), Some(5));
        assert_eq!(profile.get("MIRU-4").unwrap(), Some(5));

        profile.set("miru_4", 'B').unwrap();
        assert_eq!(profile.get("ETR-D").unwrap(), Some(11));
    }

    #[test]
    fn test_set_symbol_and_count() {
        let mut profile = GenotypeProfile::standard().unwrap();
        profile.set("VNTR-4156", 5_i64).unwrap();
        assert_eq!(profile.get("VNTR-4156").unwrap(), Some(5));
        profile.set("VNTR-4156", 'A').unwrap();
        assert_eq!(profile.get("QUB4156").unwrap(), Some(10));
        profile.set("VNTR-4156", 'Z').unwrap();
        assert_eq!(profile.get("4156").unwrap(), Some(35));
        profile.set("VNTR-4156", 0_i64).unwrap();
        assert_eq!(profile.get("4156").unwrap(), Some(0));
        profile.set("VNTR-4156", '-').unwrap();
        assert_eq!(profile.get("4156").unwrap(), None);
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut profile = GenotypeProfile::standard().unwrap();
        assert_eq!(
            profile.set("ETR-A", -1_i64),
            Err(ProfileError::Value(ValueError::NegativeCount(-1)))
        );
        assert_eq!(
            profile.set("ETR-A", 36_i64),
            Err(ProfileError::Value(ValueError::CountOutOfRange(36)))
        );
        assert_eq!(
            profile.set("ETR-A", 'a'),
            Err(ProfileError::Value(ValueError::InvalidSymbol('a')))
        );
        assert_eq!(profile.get("ETR-A").unwrap(), None);
    }

    #[test]
    fn test_unknown_locus() {
        let mut profile = GenotypeProfile::standard().unwrap();
        let expected = ProfileError::Registry(RegistryError::UnknownLocus("ETR-Z".to_string()));
        assert_eq!(profile.get("ETR-Z"), Err(expected.clone()));
        assert_eq!(profile.set("ETR-Z", 3_i64), Err(expected.clone()));
        assert_eq!(profile.clear("ETR-Z"), Err(expected));
    }

    #[test]
    fn test_decode_15_locus_string() {
        let profile = decoded(SAMPLE);
        assert_eq!(profile.get("etr-a").unwrap(), Some(3));
        assert_eq!(profile.get("miru-40").unwrap(), Some(6));
        assert_eq!(profile.get("miru-16").unwrap(), Some(10));
        assert_eq!(
            profile.to_array(Some(&NMRL_15)).unwrap(),
            [3, 4, 8, 1, 0, 9, 6, 10, 2, 12, 2, 2, 8, 0, 6].map(Some).to_vec()
        );
    }

    #[test]
    fn test_encode_defaults_to_24_locus_layout() {
        let profile = decoded(SAMPLE);
        assert_eq!(profile.encode(Some(&NMRL_15)).unwrap(), SAMPLE);
        assert_eq!(profile.encode(None).unwrap(), format!("{SAMPLE}---------"));

        let array = profile.to_array(None).unwrap();
        assert_eq!(array.len(), 24);
        assert!(array[15..].iter().all(Option::is_none));
    }

    #[test]
    fn test_decode_24_locus_string() {
        let s = "3481096A2C228061-2345678";
        let profile = decoded(s);
        assert_eq!(profile.encode(None).unwrap(), s);
        assert_eq!(profile.get("VNTR-424").unwrap(), Some(1));
        assert_eq!(profile.get("Mtub21").unwrap(), None);
        assert_eq!(profile.get("QUB4156").unwrap(), Some(8));
        assert!(profile.is_ambiguous_anywhere());
    }

    #[test]
    fn test_round_trip_every_scheme() {
        let alphabet: Vec<char> = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-".chars().collect();
        for scheme in ALL_SCHEMES {
            let s: String = (0..scheme.len())
                .map(|i| alphabet[(i * 7 + scheme.len()) % alphabet.len()])
                .collect();
            let mut profile = GenotypeProfile::standard().unwrap();
            profile.decode(&s, Some(scheme)).unwrap();
            assert_eq!(profile.encode(Some(scheme)).unwrap(), s, "scheme {}", scheme.name);
        }
    }

    #[test]
    fn test_decode_resets_previous_values() {
        let mut profile = decoded("ZZZZZZZZZZZZZZZZZZZZZZZZ");
        assert!(!profile.is_ambiguous_anywhere());

        profile.decode("12345", Some(&ETR)).unwrap();
        assert_eq!(profile.encode(Some(&ETR)).unwrap(), "12345");
        assert_eq!(profile.ambiguous_loci().count(), 19);
        assert_eq!(profile.get("MIRU-02").unwrap(), None);
    }

    #[test]
    fn test_decode_without_scheme_requires_known_length() {
        let mut profile = GenotypeProfile::standard().unwrap();
        assert_eq!(
            profile.decode("3481096A2C", None),
            Err(ProfileError::AmbiguousSchemeInference(10))
        );
        assert_eq!(
            profile.decode("", None),
            Err(ProfileError::AmbiguousSchemeInference(0))
        );
    }

    #[test]
    fn test_decode_length_mismatch() {
        let mut profile = GenotypeProfile::standard().unwrap();
        assert_eq!(
            profile.decode(SAMPLE, Some(&NMRL_24)),
            Err(ProfileError::LengthMismatch {
                scheme: "NMRL_24",
                expected: 24,
                found: 15,
            })
        );
    }

    #[test]
    fn test_failed_decode_leaves_profile_unchanged() {
        let mut profile = decoded(SAMPLE);
        let before = profile.clone();
        assert_eq!(
            profile.decode("3481096A2C2280x", None),
            Err(ProfileError::Value(ValueError::InvalidSymbol('x')))
        );
        assert_eq!(profile, before);
    }

    #[test]
    fn test_to_array_follows_scheme_order() {
        let profile = decoded(SAMPLE);
        let array = profile.to_array(Some(&VNTRPLUS_24)).unwrap();
        assert_eq!(array.len(), VNTRPLUS_24.len());
        for (id, value) in VNTRPLUS_24.iter().zip(&array) {
            assert_eq!(profile.get(id).unwrap(), *value);
        }
        assert_eq!(profile.to_array(Some(&AUX)).unwrap(), vec![None; 9]);
    }

    #[test]
    fn test_custom_ambiguous_symbol() {
        let registry = LocusRegistry::embedded().unwrap();
        let config = ProfileConfig::with_ambiguous_symbol('.').unwrap();
        let mut profile = GenotypeProfile::with_config(registry, config);
        profile.decode("3481096A2C22.06", None).unwrap();
        assert_eq!(profile.get("MIRU-27").unwrap(), None);
        assert_eq!(profile.encode(None).unwrap(), "3481096A2C22.06.........");
        assert!(profile.decode("3481096A2C22-06", None).is_err());
        assert!(ProfileConfig::with_ambiguous_symbol('7').is_err());
    }

    #[test]
    fn test_config_rejects_symbols_from_the_value_alphabet() {
        for symbol in ['0', '5', '9', 'A', 'Z'] {
            assert_eq!(
                ProfileConfig::with_ambiguous_symbol(symbol),
                Err(ValueError::InvalidAmbiguousSymbol(symbol)),
                "symbol '{symbol}'"
            );
        }
        assert_eq!(ProfileConfig::default().ambiguous_symbol(), '-');
    }

    #[test]
    fn test_custom_symbol_keeps_counts_and_ambiguity_apart() {
        let registry = LocusRegistry::embedded().unwrap();
        let config = ProfileConfig::with_ambiguous_symbol('?').unwrap();
        let mut profile = GenotypeProfile::with_config(registry, config);
        for id in NMRL_15.iter() {
            profile.set(id, 5_i64).unwrap();
        }
        profile.clear("ETR-A").unwrap();

        let encoded = profile.encode(Some(&NMRL_15)).unwrap();
        assert_eq!(encoded, "?55555555555555");

        let decoded =
            GenotypeProfile::from_interchange_with_config(registry, &encoded, None, config)
                .unwrap();
        assert_eq!(decoded.get("ETR-A").unwrap(), None);
        assert_eq!(decoded.get("ETR-B").unwrap(), Some(5));
        assert_eq!(decoded, profile);
    }

    #[test]
    fn test_from_interchange_with_config() {
        let registry = LocusRegistry::embedded().unwrap();
        let config = ProfileConfig::with_ambiguous_symbol('.').unwrap();
        let profile = GenotypeProfile::from_interchange_with_config(
            registry,
            "3481096A2C22.06",
            Some(&NMRL_15),
            config,
        )
        .unwrap();
        assert_eq!(profile.config(), config);
        assert_eq!(profile.get("3007").unwrap(), None);
        assert_eq!(profile.encode(Some(&NMRL_15)).unwrap(), "3481096A2C22.06");

        // The default symbol is an invalid character under this config
        assert!(GenotypeProfile::from_interchange_with_config(
            registry,
            "3481096A2C22-06",
            None,
            config
        )
        .is_err());
    }

    #[test]
    fn test_scheme_locus_missing_from_registry() {
        let registry = LocusRegistry::build(vec![Locus::new("2165").with_synonyms(["ETR-A"])])
            .unwrap();
        let mut profile = GenotypeProfile::new(&registry);
        profile.set("ETR-A", 4_i64).unwrap();
        assert_eq!(
            profile.encode(Some(&ETR)),
            Err(ProfileError::Registry(RegistryError::UnknownLocus(
                "2461".to_string()
            )))
        );
    }

    #[test]
    fn test_from_interchange() {
        let registry = LocusRegistry::embedded().unwrap();
        let profile = GenotypeProfile::from_interchange(registry, SAMPLE, Some(&NMRL_15)).unwrap();
        assert_eq!(profile, decoded(SAMPLE));
        assert_eq!(profile.value_at(registry.slot_of("ETR-C").unwrap()), Some(8));
        assert_eq!(profile.value_at(999), None);
    }
}
