use serde::Serialize;

use crate::core::allele::MAX_REPEAT_COUNT;
use crate::core::types::{Lineage, RepeatCount};

use LocusTest::{AtLeast, Equals, OneOf};

/// A test applied to the repeat count of a single locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocusTest {
    Equals(RepeatCount),
    OneOf(&'static [RepeatCount]),
    AtLeast(RepeatCount),
}

impl LocusTest {
    /// Whether a known count passes the test
    #[must_use]
    pub fn admits(self, count: RepeatCount) -> bool {
        match self {
            Self::Equals(v) => count == v,
            Self::OneOf(values) => values.contains(&count),
            Self::AtLeast(v) => count >= v,
        }
    }

    /// Whether a possibly unknown count passes; unknown never passes
    #[must_use]
    pub fn matches(self, value: Option<RepeatCount>) -> bool {
        value.is_some_and(|count| self.admits(count))
    }
}

impl std::fmt::Display for LocusTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equals(v) => write!(f, "= {v}"),
            Self::OneOf(values) => {
                let values: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "in {{{}}}", values.join(", "))
            }
            Self::AtLeast(v) => write!(f, ">= {v}"),
        }
    }
}

/// One locus test; `locus` may be any registered name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub locus: &'static str,
    pub test: LocusTest,
}

const fn cond(locus: &'static str, test: LocusTest) -> Condition {
    Condition { locus, test }
}

/// A conjunction of conditions that, when all pass, assigns a lineage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineageRule {
    pub lineage: Lineage,
    pub conditions: &'static [Condition],
}

/// An ordered list of rules; the first rule that matches wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub name: &'static str,
    /// Whether the table has been checked against a published reference
    pub verified: bool,
    pub rules: &'static [LineageRule],
}

/// Check whether some count in the encodable range passes every test
#[must_use]
pub fn tests_are_satisfiable(tests: &[LocusTest]) -> bool {
    (0..=MAX_REPEAT_COUNT).any(|count| tests.iter().all(|test| test.admits(count)))
}

/// Phylotype rules as carried over from the legacy typing tool.
///
/// Not verified. The Beijing rule requires MIRU-39 to be both 3 and 1 and so
/// can never match; the remaining thresholds have not been checked against
/// a published MIRU-VNTR lineage key.
pub const PROVISIONAL_RULES: RuleSet = RuleSet {
    name: "provisional",
    verified: false,
    rules: &[
        LineageRule {
            lineage: Lineage::Beijing,
            conditions: &[
                cond("miru-39", Equals(3)),
                cond("etr-a", Equals(4)),
                cond("etr-c", Equals(4)),
                cond("miru-39", Equals(1)),
            ],
        },
        LineageRule {
            lineage: Lineage::EuroAmerican,
            conditions: &[
                cond("miru-16", OneOf(&[1, 2, 3])),
                cond("miru-39", Equals(2)),
                cond("etr-b", OneOf(&[1, 2])),
            ],
        },
        LineageRule {
            lineage: Lineage::Cas,
            conditions: &[cond("miru-23", Equals(5)), cond("etr-c", Equals(2))],
        },
        LineageRule {
            lineage: Lineage::Eai,
            conditions: &[cond("miru-24", Equals(2)), cond("miru-26", Equals(2))],
        },
        LineageRule {
            lineage: Lineage::Bovis,
            conditions: &[
                cond("miru-10", Equals(2)),
                cond("miru-40", Equals(2)),
                cond("etr-c", Equals(5)),
            ],
        },
        LineageRule {
            lineage: Lineage::Africanum,
            conditions: &[
                cond("miru-10", AtLeast(4)),
                cond("miru-23", Equals(4)),
                cond("miru-26", OneOf(&[3, 4, 5])),
                cond("etr-a", AtLeast(4)),
            ],
        },
        LineageRule {
            lineage: Lineage::Microti,
            conditions: &[
                cond("miru-23", Equals(4)),
                cond("miru-40", Equals(2)),
                cond("etr-A", AtLeast(8)),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::LocusTest::{AtLeast, Equals, OneOf};
    use super::*;

    #[test]
    fn test_locus_test_admits() {
        assert!(Equals(3).admits(3));
        assert!(!Equals(3).admits(4));
        assert!(OneOf(&[1, 2]).admits(2));
        assert!(!OneOf(&[1, 2]).admits(0));
        assert!(AtLeast(4).admits(4));
        assert!(AtLeast(4).admits(35));
        assert!(!AtLeast(4).admits(3));
    }

    #[test]
    fn test_unknown_count_never_matches() {
        assert!(!Equals(0).matches(None));
        assert!(!OneOf(&[0, 1, 2]).matches(None));
        assert!(!AtLeast(0).matches(None));
        assert!(AtLeast(0).matches(Some(0)));
    }

    #[test]
    fn test_satisfiability() {
        assert!(tests_are_satisfiable(&[AtLeast(4), OneOf(&[3, 4, 5])]));
        assert!(!tests_are_satisfiable(&[Equals(3), Equals(1)]));
        assert!(!tests_are_satisfiable(&[AtLeast(36)]));
        assert!(tests_are_satisfiable(&[]));
    }

    #[test]
    fn test_locus_test_display() {
        assert_eq!(Equals(2).to_string(), "= 2");
        assert_eq!(OneOf(&[1, 2, 3]).to_string(), "in {1, 2, 3}");
        assert_eq!(AtLeast(8).to_string(), ">= 8");
    }

    #[test]
    fn test_provisional_rules_cover_each_named_lineage_once() {
        assert!(!PROVISIONAL_RULES.verified);
        let lineages: Vec<Lineage> = PROVISIONAL_RULES.rules.iter().map(|r| r.lineage).collect();
        assert_eq!(
            lineages,
            vec![
                Lineage::Beijing,
                Lineage::EuroAmerican,
                Lineage::Cas,
                Lineage::Eai,
                Lineage::Bovis,
                Lineage::Africanum,
                Lineage::Microti,
            ]
        );
    }
}
