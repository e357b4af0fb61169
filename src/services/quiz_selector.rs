use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::Question;

/// Outcome of drawing the next quiz question from a candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPick<'a> {
    Next(&'a Question),
    /// Every candidate has already been asked.
    Exhausted,
    /// The pool held no questions at all.
    NoCandidates,
}

/// Picks a question from `pool` uniformly at random, skipping any id in
/// `previous_ids`.
pub fn select_quiz_question<'a, R>(
    pool: &'a [Question],
    previous_ids: &[i64],
    rng: &mut R,
) -> QuizPick<'a>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return QuizPick::NoCandidates;
    }

    let seen: HashSet<i64> = previous_ids.iter().copied().collect();
    let unseen: Vec<&Question> = pool.iter().filter(|q| !seen.contains(&q.id)).collect();

    match unseen.choose(rng) {
        Some(question) => QuizPick::Next(*question),
        None => QuizPick::Exhausted,
    }
}
