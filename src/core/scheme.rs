//! Typing schemes: named, ordered lists of loci.
//!
//! A scheme fixes which locus sits at each position of an interchange string
//! or value array. Two layouts are used for interchange (`NMRL_15` and
//! `NMRL_24`); the rest are groupings that are handy for display or for
//! exchanging partial profiles.

use serde::Serialize;

use crate::core::locus::normalize_name;

/// An ordered sequence of canonical locus ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub name: &'static str,
    pub loci: &'static [&'static str],
}

impl Scheme {
    /// Number of loci (and characters in an interchange string)
    #[must_use]
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.loci.iter().copied()
    }

    /// Scheme used when none is given for serialization
    #[must_use]
    pub fn default_scheme() -> &'static Scheme {
        &NMRL_24
    }

    /// Guess the scheme of an interchange string from its length.
    ///
    /// Only the two interchange layouts are considered.
    #[must_use]
    pub fn infer_from_length(len: usize) -> Option<&'static Scheme> {
        match len {
            15 => Some(&NMRL_15),
            24 => Some(&NMRL_24),
            _ => None,
        }
    }

    /// Look up a scheme by name, ignoring case and separators
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Scheme> {
        let key = normalize_name(name);
        ALL_SCHEMES
            .iter()
            .copied()
            .find(|scheme| normalize_name(scheme.name) == key)
    }
}

/// Exact tandem repeats A-E
pub const ETR: Scheme = Scheme {
    name: "ETR",
    loci: &["2165", "2461", "577", "580", "3192"],
};

/// The 12 classic MIRU loci
pub const MIRU: Scheme = Scheme {
    name: "MIRU",
    loci: &[
        "154", "580", "960", "1644", "2059", "2531", "2687", "2996", "3007", "3192", "4348", "802",
    ],
};

/// ETR A-E followed by the MIRU loci not already covered by ETR-D and ETR-E
pub const VNTR: Scheme = Scheme {
    name: "VNTR",
    loci: &[
        "2165", "2461", "577", "580", "3192", "154", "960", "1644", "2059", "2531", "2687", "2996",
        "3007", "4348", "802",
    ],
};

/// Auxiliary VNTR loci that extend the 15-locus layout to 24
pub const AUX: Scheme = Scheme {
    name: "AUX",
    loci: &[
        "424", "1955", "2163b", "2347", "2401", "3171", "3690", "4052", "4156",
    ],
};

/// 15-locus interchange layout
pub const NMRL_15: Scheme = Scheme {
    name: "NMRL_15",
    loci: VNTR.loci,
};

/// 24-locus interchange layout: `NMRL_15` followed by `AUX`
pub const NMRL_24: Scheme = Scheme {
    name: "NMRL_24",
    loci: &[
        "2165", "2461", "577", "580", "3192", "154", "960", "1644", "2059", "2531", "2687", "2996",
        "3007", "4348", "802", "424", "1955", "2163b", "2347", "2401", "3171", "3690", "4052",
        "4156",
    ],
};

/// MIRU-VNTRplus 15-locus set, in position order
pub const VNTRPLUS_15: Scheme = Scheme {
    name: "VNTRPLUS_15",
    loci: &[
        "424", "577", "580", "802", "960", "1644", "1955", "2163b", "2165", "2401", "2996",
        "3192", "3690", "4052", "4156",
    ],
};

/// MIRU-VNTRplus 24-locus set, in position order
pub const VNTRPLUS_24: Scheme = Scheme {
    name: "VNTRPLUS_24",
    loci: &[
        "154", "424", "577", "580", "802", "960", "1644", "1955", "2059", "2163b", "2165", "2347",
        "2401", "2461", "2531", "2687", "2996", "3007", "3171", "3192", "3690", "4052", "4156",
        "4348",
    ],
};

pub const ALL_SCHEMES: &[&Scheme] = &[
    &NMRL_24,
    &NMRL_15,
    &VNTRPLUS_24,
    &VNTRPLUS_15,
    &ETR,
    &MIRU,
    &VNTR,
    &AUX,
];
