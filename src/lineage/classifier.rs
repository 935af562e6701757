use tracing::{debug, warn};

use crate::catalog::registry::{LocusRegistry, RegistryError};
use crate::core::profile::GenotypeProfile;
use crate::core::types::{Lineage, LocusId};
use crate::lineage::rules::{tests_are_satisfiable, LineageRule, LocusTest, RuleSet};

/// A rule with every locus name resolved to its canonical id
#[derive(Debug, Clone)]
struct ResolvedRule {
    rule: &'static LineageRule,
    tests: Vec<(LocusId, LocusTest)>,
    satisfiable: bool,
}

impl ResolvedRule {
    fn matches(&self, profile: &GenotypeProfile<'_>) -> bool {
        let registry = profile.registry();
        self.tests.iter().all(|(id, test)| {
            let value = registry
                .slot_of_id(id.as_str())
                .and_then(|slot| profile.value_at(slot));
            test.matches(value)
        })
    }
}

/// Assigns a lineage to a profile using an ordered rule set
#[derive(Debug, Clone)]
pub struct LineageClassifier {
    rule_set: RuleSet,
    rules: Vec<ResolvedRule>,
}

impl LineageClassifier {
    /// Resolve the locus names of every rule against a registry
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLocus` if a rule names a locus the
    /// registry does not know.
    pub fn new(registry: &LocusRegistry, rule_set: RuleSet) -> Result<Self, RegistryError> {
        let mut rules = Vec::with_capacity(rule_set.rules.len());

        for rule in rule_set.rules {
            let tests = rule
                .conditions
                .iter()
                .map(|condition| Ok((registry.resolve(condition.locus)?.clone(), condition.test)))
                .collect::<Result<Vec<_>, RegistryError>>()?;
            let satisfiable = Self::is_satisfiable(&tests);
            if !satisfiable {
                debug!(
                    "Rule for {} in rule set '{}' can never match",
                    rule.lineage, rule_set.name
                );
            }
            rules.push(ResolvedRule {
                rule,
                tests,
                satisfiable,
            });
        }

        if !rule_set.verified {
            warn!(
                "Lineage rule set '{}' is unverified; lineage calls are provisional",
                rule_set.name
            );
        }

        Ok(Self { rule_set, rules })
    }

    /// Every test on the same locus must admit a common count
    fn is_satisfiable(tests: &[(LocusId, LocusTest)]) -> bool {
        tests.iter().all(|(id, _)| {
            let same_locus: Vec<LocusTest> = tests
                .iter()
                .filter(|(other, _)| other == id)
                .map(|(_, test)| *test)
                .collect();
            tests_are_satisfiable(&same_locus)
        })
    }

    /// First lineage whose rule matches, or `Lineage::Unknown`
    #[must_use]
    pub fn classify(&self, profile: &GenotypeProfile<'_>) -> Lineage {
        self.rules
            .iter()
            .find(|resolved| resolved.matches(profile))
            .map_or(Lineage::Unknown, |resolved| resolved.rule.lineage)
    }

    #[must_use]
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.rule_set.verified
    }

    /// Rules that no profile can satisfy
    pub fn unsatisfiable_rules(&self) -> impl Iterator<Item = &'static LineageRule> + '_ {
        self.rules
            .iter()
            .filter(|resolved| !resolved.satisfiable)
            .map(|resolved| resolved.rule)
    }
}
