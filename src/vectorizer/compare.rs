use num::Float;

use crate::vectorizer::TermVector;

/// dot product
/// d(a, b) = Σ(a_i * b_i)
///
/// Terms present in only one vector multiply by an implicit zero, so only
/// the shared terms are visited. They are summed in term order, which makes
/// `dot(a, b)` and `dot(b, a)` bit-identical.
pub fn dot<N>(a: &TermVector<N>, b: &TermVector<N>) -> N
where
    N: Float,
{
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut shared: Vec<(&str, N)> = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| (term, wa * wb)))
        .collect();
    shared.sort_unstable_by(|x, y| x.0.cmp(y.0));
    shared.into_iter().fold(N::zero(), |acc, (_, p)| acc + p)
}

/// cosine similarity
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// Returns exactly zero when either vector has zero magnitude.
/// With negative idf weights the result can fall below zero.
pub fn cosine_similarity<N>(a: &TermVector<N>, b: &TermVector<N>) -> N
where
    N: Float,
{
    let denom = a.magnitude() * b.magnitude();
    if denom == N::zero() || !denom.is_finite() {
        return N::zero();
    }
    dot(a, b) / denom
}
