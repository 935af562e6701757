use serde::Serialize;

use crate::core::types::LocusId;

/// Static definition of a locus: canonical id plus every name it is known by
#[derive(Debug, Clone, Copy)]
pub struct LocusDef {
    pub id: &'static str,
    pub synonyms: &'static [&'static str],
}

/// The 24 MIRU-VNTR loci used for M. tuberculosis typing.
///
/// The canonical id is the locus position; it is also accepted as a name.
///
/// | Locus | MIRU    | ETR   | Other               |
/// |-------|---------|-------|---------------------|
/// | 154   | MIRU-02 |       |                     |
/// | 424   |         |       | VNTR-424, Mtub04    |
/// | 577   |         | ETR-C |                     |
/// | 580   | MIRU-04 | ETR-D |                     |
/// | 3007  | MIRU-27 |       | QUB5                |
/// | 3192  | MIRU-31 | ETR-E |                     |
/// | 4156  |         |       | VNTR-4156, QUB4156  |
#[rustfmt::skip]
pub const LOCI: &[LocusDef] = &[
    LocusDef { id: "154", synonyms: &["MIRU-02", "MIRU-2"] },
    LocusDef { id: "424", synonyms: &["VNTR-424", "Mtub04", "Mtub4"] },
    LocusDef { id: "577", synonyms: &["ETR-C"] },
    LocusDef { id: "580", synonyms: &["MIRU-04", "MIRU-4", "ETR-D"] },
    LocusDef { id: "802", synonyms: &["MIRU-40"] },
    LocusDef { id: "960", synonyms: &["MIRU-10"] },
    LocusDef { id: "1644", synonyms: &["MIRU-16"] },
    LocusDef { id: "1955", synonyms: &["VNTR-1955", "Mtub21"] },
    LocusDef { id: "2059", synonyms: &["MIRU-20"] },
    LocusDef { id: "2163b", synonyms: &["VNTR-2163b", "QUB11b"] },
    LocusDef { id: "2165", synonyms: &["ETR-A"] },
    LocusDef { id: "2347", synonyms: &["VNTR-2347", "Mtub29"] },
    LocusDef { id: "2401", synonyms: &["VNTR-2401", "Mtub30"] },
    LocusDef { id: "2461", synonyms: &["ETR-B"] },
    LocusDef { id: "2531", synonyms: &["MIRU-23"] },
    LocusDef { id: "2687", synonyms: &["MIRU-24"] },
    LocusDef { id: "2996", synonyms: &["MIRU-26"] },
    LocusDef { id: "3007", synonyms: &["MIRU-27", "QUB5"] },
    LocusDef { id: "3171", synonyms: &["VNTR-3171", "Mtub34"] },
    LocusDef { id: "3192", synonyms: &["MIRU-31", "ETR-E"] },
    LocusDef { id: "3690", synonyms: &["VNTR-3690", "Mtub39"] },
    LocusDef { id: "4052", synonyms: &["VNTR-4052", "QUB26"] },
    LocusDef { id: "4156", synonyms: &["VNTR-4156", "QUB4156"] },
    LocusDef { id: "4348", synonyms: &["MIRU-39"] },
];

/// A locus and the names it is known by
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locus {
    /// Canonical identifier
    pub id: LocusId,

    /// Alternative names, excluding the canonical id itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl Locus {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: LocusId::new(id),
            synonyms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }

    /// All names that resolve to this locus, canonical id first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

impl From<&LocusDef> for Locus {
    fn from(def: &LocusDef) -> Self {
        Locus::new(def.id).with_synonyms(def.synonyms.iter().copied())
    }
}

/// Reduce a locus name to its lookup key.
///
/// Surrounding whitespace is trimmed, the name is lowercased, and any
/// whitespace, hyphen or underscore separators are dropped.
///
/// ```
/// use tb_typing::core::locus::normalize_name;
///
/// assert_eq!(normalize_name("ETR-D"), "etrd");
/// assert_eq!(normalize_name(" MIRU_04 "), "miru04");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !is_separator(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("ETR-D"), "etrd");
        assert_eq!(normalize_name(" MIRU_04 "), "miru04");
        assert_eq!(normalize_name("VNTR - 2163b"), "vntr2163b");
        assert_eq!(normalize_name("Mtub\t21"), "mtub21");
        assert_eq!(normalize_name("--__"), "");
    }

    #[test]
    fn test_normalize_name_is_idempotent() {
        for def in LOCI {
            for name in std::iter::once(&def.id).chain(def.synonyms.iter()) {
                let once = normalize_name(name);
                assert_eq!(normalize_name(&once), once, "not idempotent for '{name}'");
            }
        }
        let messy = "  Q-U_B 1 1-b ";
        assert_eq!(normalize_name(&normalize_name(messy)), normalize_name(messy));
    }

    #[test]
    fn test_normalize_name_ignores_case_and_separators() {
        let variants = ["MIRU-04", "miru04", "Miru_04", " MIRU 04", "m-i-r-u-0-4"];
        for v in variants {
            assert_eq!(normalize_name(v), "miru04", "variant '{v}'");
        }
    }

    #[test]
    fn test_loci_table_has_24_loci() {
        assert_eq!(LOCI.len(), 24);
        assert!(LOCI.iter().all(|def| !def.synonyms.is_empty()));
    }

    #[test]
    fn test_locus_names_start_with_id() {
        let locus = Locus::from(&LOCI[3]);
        let names: Vec<&str> = locus.names().collect();
        assert_eq!(names, vec!["580", "MIRU-04", "MIRU-4", "ETR-D"]);
    }
}
