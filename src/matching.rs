//! Match/rank engine
//!
//! Scores a free-text query against a question title and produces an integer
//! relevance measure in [0, 100]. The scoring strategy sits behind the
//! `Matcher` trait so it can be swapped without touching callers; the contract
//! is the score range and comparative ordering, not a specific formula.

use std::cmp::Reverse;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::questions::Question;

/// Pure relevance scorer: no hidden state, no dependency on prior calls
pub trait Matcher {
    /// Score `query` against a question's title; 100 is a near-exact match,
    /// 0 means no detectable relation
    fn score(&self, query: &str, question: &Question) -> u8;
}

/// Default strategy: per-token skim fuzzy matching against the title
///
/// Each whitespace token of the query is matched independently, which makes
/// the measure tolerant of word order. A token's raw skim score is normalized
/// by its self-match score, so 100 means every token matched about as well as
/// it matches itself.
pub struct TitleMatcher {
    matcher: SkimMatcherV2,
}

impl Default for TitleMatcher {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }
}

impl Matcher for TitleMatcher {
    fn score(&self, query: &str, question: &Question) -> u8 {
        let title = question.title.to_lowercase();
        let query = query.to_lowercase();
        let tokens: Vec<&str> = query.split_whitespace().collect();

        // an empty query has no detectable relation to anything
        if tokens.is_empty() {
            return 0;
        }

        let mut total = 0.0f64;
        for token in &tokens {
            let ceiling = self.matcher.fuzzy_match(token, token).unwrap_or(0);
            if ceiling <= 0 {
                continue;
            }
            let hit = self.matcher.fuzzy_match(&title, token).unwrap_or(0).max(0);
            total += (hit as f64 / ceiling as f64).min(1.0);
        }

        ((total / tokens.len() as f64) * 100.0).round() as u8
    }
}

/// A question paired with its relevance score for one suggest invocation
#[derive(Debug)]
pub struct ScoredQuestion<'a> {
    pub score: u8,
    pub question: &'a Question,
}

/// Threshold below which a question is not considered relevant
pub const RELEVANCE_THRESHOLD: u8 = 50;

/// Score every question, keep those scoring above the threshold, and order by
/// descending score with ties broken by original collection order
pub fn rank<'a>(
    questions: &'a [Question],
    query: &str,
    matcher: &dyn Matcher,
) -> Vec<ScoredQuestion<'a>> {
    let mut scored: Vec<ScoredQuestion<'a>> = questions
        .iter()
        .map(|question| ScoredQuestion {
            score: matcher.score(query, question),
            question,
        })
        .collect();

    scored.retain(|s| s.score > RELEVANCE_THRESHOLD);
    // stable sort keeps collection order for equal scores
    scored.sort_by_key(|s| Reverse(s.score));
    scored
}
