//! In-memory search and field filters over the sales representative list.
//!
//! Both passes use case-insensitive substring containment and keep the
//! relative order of their input.

use crate::domain::sales_rep::SalesRep;

/// Field-level filters applied after the free-text search. Blank entries are
/// inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub role: Option<String>,
    pub region: Option<String>,
    pub skills: Option<String>,
}

impl FilterCriteria {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    /// Returns `true` when no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.role, &self.region, &self.skills]
            .into_iter()
            .all(|value| active_needle(value).is_none())
    }

    fn matches(&self, rep: &SalesRep) -> bool {
        let name = active_needle(&self.name);
        let role = active_needle(&self.role);
        let region = active_needle(&self.region);
        let skills = active_needle(&self.skills);

        name.is_none_or(|needle| contains_folded(rep.name.as_str(), &needle))
            && role.is_none_or(|needle| contains_folded(&rep.role, &needle))
            && region.is_none_or(|needle| contains_folded(&rep.region, &needle))
            && skills.is_none_or(|needle| {
                rep.skills
                    .iter()
                    .any(|skill| contains_folded(skill, &needle))
            })
    }
}

/// Lower-cased needle for a present, non-blank criterion.
fn active_needle(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Keeps records whose name, role, region, or any skill contains `term`.
/// A missing or blank term keeps everything.
pub fn search(records: Vec<SalesRep>, term: Option<&str>) -> Vec<SalesRep> {
    let Some(needle) = term
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
    else {
        return records;
    };

    records
        .into_iter()
        .filter(|rep| {
            contains_folded(rep.name.as_str(), &needle)
                || contains_folded(&rep.role, &needle)
                || contains_folded(&rep.region, &needle)
                || rep
                    .skills
                    .iter()
                    .any(|skill| contains_folded(skill, &needle))
        })
        .collect()
}

/// Keeps records satisfying every active criterion.
pub fn filter(records: Vec<SalesRep>, criteria: &FilterCriteria) -> Vec<SalesRep> {
    if criteria.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|rep| criteria.matches(rep))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{SalesRepId, SalesRepName};

    fn rep(id: i64, name: &str, role: &str, region: &str, skills: &[&str]) -> SalesRep {
        SalesRep::new(
            SalesRepId::new(id).unwrap(),
            SalesRepName::new(name).unwrap(),
            role,
            region,
        )
        .with_skills(skills.iter().copied())
    }

    fn sample() -> Vec<SalesRep> {
        vec![
            rep(
                1,
                "John Doe",
                "Senior Sales Rep",
                "North America",
                &["Negotiation", "CRM Software", "Product Knowledge"],
            ),
            rep(
                2,
                "Jane Smith",
                "Sales Manager",
                "Europe",
                &["Team Leadership", "Strategic Planning", "CRM Software"],
            ),
            rep(3, "Ken Ito", "Account Manager", "Asia", &["Cold Calling"]),
        ]
    }

    fn names(reps: &[SalesRep]) -> Vec<&str> {
        reps.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_search_is_identity() {
        assert_eq!(search(sample(), None), sample());
        assert_eq!(search(sample(), Some("")), sample());
        assert_eq!(search(sample(), Some("   ")), sample());
    }

    #[test]
    fn search_matches_each_field() {
        assert_eq!(names(&search(sample(), Some("john"))), vec!["John Doe"]);
        assert_eq!(
            names(&search(sample(), Some("manager"))),
            vec!["Jane Smith", "Ken Ito"]
        );
        assert_eq!(names(&search(sample(), Some("europe"))), vec!["Jane Smith"]);
        assert_eq!(
            names(&search(sample(), Some("crm"))),
            vec!["John Doe", "Jane Smith"]
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(search(sample(), Some("JOHN")), search(sample(), Some("john")));
        assert_eq!(search(sample(), Some("cOLD")).len(), 1);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(search(sample(), Some("zzz")).is_empty());
    }

    #[test]
    fn empty_criteria_is_identity() {
        assert!(FilterCriteria::default().is_empty());
        assert!(FilterCriteria::default().name(" ").is_empty());
        assert_eq!(filter(sample(), &FilterCriteria::default()), sample());
    }

    #[test]
    fn criteria_combine_with_and() {
        let criteria = FilterCriteria::default().role("Manager").region("Europe");

        assert_eq!(names(&filter(sample(), &criteria)), vec!["Jane Smith"]);
    }

    #[test]
    fn skills_criterion_matches_any_entry() {
        let criteria = FilterCriteria::default().skills("leadership");
        assert_eq!(names(&filter(sample(), &criteria)), vec!["Jane Smith"]);

        let criteria = FilterCriteria::default().skills("software");
        assert_eq!(
            names(&filter(sample(), &criteria)),
            vec!["John Doe", "Jane Smith"]
        );
    }

    #[test]
    fn name_criterion_does_not_look_at_other_fields() {
        let criteria = FilterCriteria::default().name("europe");
        assert!(filter(sample(), &criteria).is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let mut reversed = sample();
        reversed.reverse();
        let criteria = FilterCriteria::default().role("manager");

        assert_eq!(
            names(&filter(reversed, &criteria)),
            vec!["Ken Ito", "Jane Smith"]
        );
    }
}
