//! Feature extractor port for linear value approximation

use std::hash::Hash;

use crate::learning::FeatureVector;

/// Maps a `(state, action)` pair to a sparse set of named numeric signals.
pub trait FeatureExtractor<S, A> {
    /// Feature name type.
    type Key: Clone + Eq + Hash;

    fn features(&self, state: &S, action: &A) -> FeatureVector<Self::Key>;
}

/// One indicator feature per `(state, action)` pair.
///
/// With this extractor approximate Q-learning stores exactly one weight per
/// pair and behaves like the tabular learner.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl<S, A> FeatureExtractor<S, A> for IdentityExtractor
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    type Key = (S, A);

    fn features(&self, state: &S, action: &A) -> FeatureVector<(S, A)> {
        let mut features = FeatureVector::new();
        features.insert((state.clone(), action.clone()), 1.0);
        features
    }
}
