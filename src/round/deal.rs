//! Dealing a round: pick a term, gather distractors, shuffle.

use smallvec::SmallVec;

use crate::catalog::{TermCatalog, TermEntry};
use crate::core::{DistractorPolicy, EngineError, Result, RoundConfig, RoundRng};

/// Candidate definitions for one round.
///
/// Inline storage covers the default five candidates without allocating.
pub type Candidates = SmallVec<[String; 5]>;

/// Deal one round from the catalog.
///
/// Fails with `InsufficientCatalog` instead of dealing fewer candidates
/// than the configuration asks for.
pub(super) fn deal(
    catalog: &TermCatalog,
    config: &RoundConfig,
    rng: &mut RoundRng,
) -> Result<(TermEntry, Candidates)> {
    let required = config.candidate_count();
    let available = catalog.size();
    if available < required {
        return Err(EngineError::InsufficientCatalog {
            required,
            available,
        });
    }

    let picked = rng.gen_index(available).ok_or(EngineError::EmptyCatalog)?;
    let term = catalog.all()[picked].clone();

    let others: Vec<&TermEntry> = catalog
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != picked)
        .map(|(_, e)| e)
        .collect();

    let mut candidates: Candidates = match config.distractor_policy {
        DistractorPolicy::Positional => others
            .iter()
            .take(config.distractor_count)
            .map(|e| e.definition.clone())
            .collect(),
        DistractorPolicy::Sampled => rng
            .sample_indices(others.len(), config.distractor_count)
            .into_iter()
            .map(|i| others[i].definition.clone())
            .collect(),
    };

    candidates.push(term.definition.clone());
    rng.shuffle(&mut candidates);

    Ok((term, candidates))
}
