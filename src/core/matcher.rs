use crate::core::{
    explain::match_explanation,
    rooms::suggest_room,
    scoring::{breakdown, compatibility_score},
};
use crate::models::{Profile, RoomMatch, ScoringWeights};
use rand::Rng;
use thiserror::Error;

/// Errors that can occur during matching
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no candidates available for applicant {0}")]
    NoCandidates(String),
}

/// Main matching orchestrator
///
/// Scores an applicant against every resident in the pool and picks the
/// single best match, then assembles the explanation, room suggestion and
/// per-dimension breakdown for it.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Overall compatibility score (0-100) between two profiles
    pub fn score(&self, a: &Profile, b: &Profile) -> u8 {
        compatibility_score(a, b, &self.weights)
    }

    /// Find the best match for an applicant in the resident pool
    ///
    /// Pool entries sharing the applicant's id are excluded. Selection
    /// only updates on strict improvement, so ties resolve to the first
    /// entry in pool order. An empty pool after self-exclusion is an
    /// error rather than an arbitrary result.
    ///
    /// The RNG is used only for the suggested room label; pass a seeded
    /// generator for reproducible output.
    pub fn best_match<R: Rng + ?Sized>(
        &self,
        applicant: &Profile,
        pool: &[Profile],
        rng: &mut R,
    ) -> Result<RoomMatch, MatchError> {
        let mut best: Option<(&Profile, u8)> = None;

        for resident in pool.iter().filter(|p| p.id != applicant.id) {
            let score = self.score(applicant, resident);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((resident, score)),
            }
        }

        let (matched, score) =
            best.ok_or_else(|| MatchError::NoCandidates(applicant.id.clone()))?;

        let explanation = match_explanation(applicant, matched);
        let suggested_room = suggest_room(rng, applicant, matched);
        let match_details = breakdown(applicant, matched);

        Ok(RoomMatch {
            matched_user: matched.clone(),
            compatibility_score: score,
            suggested_room,
            explanation,
            match_details,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
