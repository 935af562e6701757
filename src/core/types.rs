use serde::Serialize;

/// Number of tandem repeats observed at a locus
pub type RepeatCount = u8;

/// Canonical identifier for a locus in the registry (e.g. "580", "2163b")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LocusId(pub String);

impl LocusId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for LocusId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocusId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Coarse phylogenetic lineage (phylotype) of a strain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lineage {
    Beijing,
    EuroAmerican,
    Cas,
    Eai,
    Bovis,
    Africanum,
    Microti,
    /// No rule matched
    Unknown,
}

impl Lineage {
    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beijing => "I (Beijing)",
            Self::EuroAmerican => "II (Euro-american)",
            Self::Cas => "III (CAS)",
            Self::Eai => "IV (EAI)",
            Self::Bovis => "M. bovis",
            Self::Africanum => "M. africanum",
            Self::Microti => "M. microti",
            Self::Unknown => "unknown lineage",
        }
    }

    /// One-letter code used when prefixing strain identifiers
    #[must_use]
    pub fn prefix(self) -> char {
        match self {
            Self::Beijing => 'B',
            Self::EuroAmerican => 'E',
            Self::Cas => 'C',
            Self::Eai => 'A',
            Self::Bovis => 'V',
            Self::Africanum => 'F',
            Self::Microti => 'M',
            Self::Unknown => 'U',
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Lineage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lineage_prefixes_are_unique() {
        let lineages = [
            Lineage::Beijing,
            Lineage::EuroAmerican,
            Lineage::Cas,
            Lineage::Eai,
            Lineage::Bovis,
            Lineage::Africanum,
            Lineage::Microti,
            Lineage::Unknown,
        ];
        let prefixes: HashSet<char> = lineages.iter().map(|l| l.prefix()).collect();
        assert_eq!(prefixes.len(), lineages.len());
    }

    #[test]
    fn test_lineage_labels() {
        assert_eq!(Lineage::Beijing.to_string(), "I (Beijing)");
        assert_eq!(Lineage::Eai.label(), "IV (EAI)");
        assert_eq!(Lineage::Unknown.prefix(), 'U');
        assert!(!Lineage::Unknown.is_known());
        assert!(Lineage::Microti.is_known());
    }

    #[test]
    fn test_locus_id_compares_with_str() {
        let id = LocusId::new("2163b");
        assert_eq!(id, "2163b");
        assert_eq!(id.as_str(), "2163b");
        assert_eq!(id.to_string(), "2163b");
    }
}
