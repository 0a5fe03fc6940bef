use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// A ranked candidate: gap id and its similarity as a whole percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub id: u64,
    /// 0..=100
    pub score: u8,
}

/// One scored candidate before selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    pub id: u64,
    /// raw cosine similarity
    pub similarity: f64,
    /// `round(similarity * 100)` clamped to 0..=100
    pub percentage: u8,
}

impl HitEntry {
    pub fn new(id: u64, similarity: f64) -> Self {
        Self {
            id,
            similarity,
            percentage: to_percentage(similarity),
        }
    }
}

/// Convert a raw similarity to a percentage in 0..=100
/// Negative and non-finite scores map to 0.
#[inline]
pub fn to_percentage(similarity: f64) -> u8 {
    let pct = (similarity * 100.0).round();
    if !pct.is_finite() {
        return 0;
    }
    num::clamp(pct, 0.0, 100.0) as u8
}

/// Structure to hold scored candidates while they are filtered and ranked
/// Entries stay in corpus order until sorted.
#[derive(Clone, Default, PartialEq)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Keep entries whose percentage reaches `threshold * 100`
    pub fn retain_threshold(&mut self, threshold: f64) -> &mut Self {
        let min = threshold * 100.0;
        self.list.retain(|hit| f64::from(hit.percentage) >= min);
        self
    }

    /// Sort results by descending percentage
    /// The sort is stable: equal percentages keep their corpus order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        self
    }

    /// Keep at most `len` entries
    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.list.truncate(len);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn into_results(self) -> Vec<SimilarityResult> {
        self.list
            .into_iter()
            .map(|hit| SimilarityResult { id: hit.id, score: hit.percentage })
            .collect()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6} ({}%)", hit.id, hit.similarity, hit.percentage)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>2}. gap #{} {:>3}%", rank + 1, hit.id, hit.percentage)?;
        }
        Ok(())
    }
}
