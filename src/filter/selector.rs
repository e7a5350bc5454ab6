// src/filter/selector.rs

//! Additive/subtractive selection over the kubeconfig contexts.

use super::Filter;

/// Filters split into the ones that admit contexts and the ones that veto
/// them. Relative order inside each group is the order given on the
/// command line.
#[derive(Debug, Clone, Default)]
pub struct Selector<'f> {
    additive: Vec<&'f Filter>,
    subtractive: Vec<&'f Filter>,
}

impl<'f> Selector<'f> {
    pub fn new(filters: &'f [Filter]) -> Self {
        let (additive, subtractive) = filters.iter().partition(|f| f.is_additive());
        Self {
            additive,
            subtractive,
        }
    }

    /// Whether a single context survives the filters.
    ///
    /// With no additive filters every context is admitted; a subtractive
    /// match always wins over an additive one.
    pub fn accepts(&self, name: &str) -> bool {
        let include = self.additive.is_empty() || self.additive.iter().any(|f| f.matches(name));
        let exclude = self.subtractive.iter().any(|f| f.matches(name));
        include && !exclude
    }

    /// Keep the accepted candidates, in their original order.
    pub fn select<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<String> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| self.accepts(name))
            .map(str::to_string)
            .collect()
    }
}

/// Apply `filters` to `candidates`. Pure: the same inputs always give the
/// same ordered output.
pub fn select<S: AsRef<str>>(candidates: &[S], filters: &[Filter]) -> Vec<String> {
    Selector::new(filters).select(candidates)
}
