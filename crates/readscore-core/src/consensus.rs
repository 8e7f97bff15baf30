//! Consensus grade estimates.
//!
//! [`Readability::text_standard`] lets eight grade-level formulas vote on
//! integer grades and reports the most common one. [`Readability::text_median`]
//! takes the median of the same eight scores without bucketing.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::formulas::Formula;
use crate::math::{legacy_round, median};
use crate::readability::Readability;

/// Formulas that take part in both consensus estimates, in voting order.
pub const CONSENSUS_FORMULAS: [Formula; 8] = [
    Formula::FleschKincaidGrade,
    Formula::FleschReadingEaseGrade,
    Formula::SmogIndex,
    Formula::ColemanLiauIndex,
    Formula::AutomatedReadabilityIndex,
    Formula::DaleChallGrade,
    Formula::LinsearWriteFormula,
    Formula::GunningFog,
];

/// How to pick a winner when several grades share the highest vote count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TieBreak {
    /// The tied grade whose first vote came last wins.
    #[default]
    LastSeen,
    /// The tied grade whose first vote came first wins.
    FirstSeen,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastSeen => f.write_str("last-seen"),
            Self::FirstSeen => f.write_str("first-seen"),
        }
    }
}

/// Votes received by one distinct grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GradeTally {
    /// The grade voted for.
    pub grade: f64,
    /// How many votes it received.
    pub votes: usize,
}

/// Outcome of a consensus vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Consensus {
    /// The winning grade.
    pub grade: f64,
    /// Every vote cast, in order.
    pub votes: Vec<f64>,
    /// Distinct grades in first-seen order with their counts.
    pub tallies: Vec<GradeTally>,
}

impl Consensus {
    /// Tally `votes` and pick the most common grade.
    ///
    /// An empty vote list yields grade `0.0`.
    pub fn from_votes(votes: Vec<f64>, tie_break: TieBreak) -> Self {
        let mut tallies: Vec<GradeTally> = Vec::new();
        for &vote in &votes {
            match tallies.iter_mut().find(|tally| tally.grade == vote) {
                Some(tally) => tally.votes += 1,
                None => tallies.push(GradeTally {
                    grade: vote,
                    votes: 1,
                }),
            }
        }

        let mut winner: Option<&GradeTally> = None;
        for tally in &tallies {
            let replace = match (winner, tie_break) {
                (None, _) => true,
                (Some(best), TieBreak::LastSeen) => tally.votes >= best.votes,
                (Some(best), TieBreak::FirstSeen) => tally.votes > best.votes,
            };
            if replace {
                winner = Some(tally);
            }
        }
        let grade = winner.map_or(0.0, |tally| tally.grade);

        Self {
            grade,
            votes,
            tallies,
        }
    }

    /// Human label such as `"7th and 8th grade"`.
    pub fn label(&self) -> String {
        grade_label(self.grade)
    }
}

/// Ordinal suffix for a grade number.
///
/// Only 1, 2 and 3 get special suffixes; 11, 21 and negatives all get "th".
pub const fn grade_suffix(grade: i64) -> &'static str {
    match grade {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render a grade as a two-grade span ending at `floor(grade)`.
pub fn grade_label(grade: f64) -> String {
    let lower = grade.floor() as i64 - 1;
    let upper = lower + 1;
    format!(
        "{lower}{} and {upper}{} grade",
        grade_suffix(lower),
        grade_suffix(upper)
    )
}

/// A consensus grade, as a number or as a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TextStandard {
    /// The winning grade.
    Float(f64),
    /// The winning grade as a span such as `"7th and 8th grade"`.
    Label(String),
}

impl fmt::Display for TextStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(grade) => write!(f, "{grade}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// Rounded-down and rounded-up integer votes for a fractional score.
fn vote_pair(score: f64) -> [f64; 2] {
    // Adding 0.0 turns -0.0 into 0.0 so both tally together.
    [legacy_round(score, 0).floor() + 0.0, score.ceil() + 0.0]
}

impl Readability {
    /// The eight consensus formula scores, in [`CONSENSUS_FORMULAS`] order.
    pub fn median_components(&self, text: &str) -> [f64; 8] {
        CONSENSUS_FORMULAS.map(|formula| self.score(formula, text))
    }

    /// Every vote cast for `text`.
    ///
    /// The Flesch reading-ease grade votes once with its mapped value; every
    /// other formula votes for its rounded score and its ceiling.
    pub fn grade_votes(&self, text: &str) -> Vec<f64> {
        let mut votes = Vec::with_capacity(15);
        for (formula, score) in CONSENSUS_FORMULAS
            .into_iter()
            .zip(self.median_components(text))
        {
            if formula == Formula::FleschReadingEaseGrade {
                votes.push(score + 0.0);
            } else {
                votes.extend(vote_pair(score));
            }
        }
        votes
    }

    /// Run the consensus vote using this engine's tie-break rule.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn consensus(&self, text: &str) -> Consensus {
        let consensus = Consensus::from_votes(self.grade_votes(text), self.tie_break());
        tracing::debug!(
            grade = consensus.grade,
            distinct = consensus.tallies.len(),
            "consensus vote"
        );
        consensus
    }

    /// Most common grade across the consensus formulas.
    pub fn text_standard(&self, text: &str, float_output: bool) -> TextStandard {
        let consensus = self.consensus(text);
        if float_output {
            TextStandard::Float(consensus.grade)
        } else {
            TextStandard::Label(consensus.label())
        }
    }

    /// Median of the eight consensus formula scores.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn text_median(&self, text: &str) -> f64 {
        median(&self.median_components(text))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dictionaries::{EasyWords, SyllableOracle};

    struct EverythingEasy;

    impl EasyWords for EverythingEasy {
        fn contains(&self, _word: &str) -> bool {
            true
        }
    }

    struct OnePerWord;

    impl SyllableOracle for OnePerWord {
        fn estimate(&self, text: &str) -> usize {
            text.split_whitespace().count()
        }
    }

    /// Grades 4 and 2 both get four votes; 4 is seen first.
    const TIED: &str = "aaaa; bbbb; cccc; ddddd eeeee";

    fn stub_engine(tie_break: TieBreak) -> Readability {
        Readability::default()
            .with_easy_words(Arc::new(EverythingEasy))
            .with_syllable_oracle(Arc::new(OnePerWord))
            .with_tie_break(tie_break)
    }

    #[test]
    fn tied_components() {
        let engine = stub_engine(TieBreak::LastSeen);
        assert_eq!(
            engine.median_components(TIED),
            [-1.9, 16.0, 0.0, 3.8, 4.6, 4.0, 1.5, 2.0]
        );
    }

    #[test]
    fn tie_goes_to_last_seen_by_default() {
        let engine = stub_engine(TieBreak::default());
        let consensus = engine.consensus(TIED);
        assert_eq!(consensus.votes.len(), 15);
        assert_eq!(
            consensus.tallies,
            vec![
                GradeTally { grade: -3.0, votes: 1 },
                GradeTally { grade: -1.0, votes: 1 },
                GradeTally { grade: 16.0, votes: 1 },
                GradeTally { grade: 0.0, votes: 2 },
                GradeTally { grade: 4.0, votes: 4 },
                GradeTally { grade: 5.0, votes: 2 },
                GradeTally { grade: 2.0, votes: 4 },
            ]
        );
        assert_eq!(consensus.grade, 2.0);
        assert_eq!(
            engine.text_standard(TIED, false),
            TextStandard::Label("1st and 2nd grade".into())
        );
    }

    #[test]
    fn first_seen_tie_break() {
        let engine = stub_engine(TieBreak::FirstSeen);
        assert_eq!(engine.text_standard(TIED, true), TextStandard::Float(4.0));
        assert_eq!(
            engine.text_standard(TIED, false).to_string(),
            "3rd and 4th grade"
        );
    }

    #[test]
    fn median_of_tied_components() {
        let engine = stub_engine(TieBreak::LastSeen);
        assert!((engine.text_median(TIED) - 2.9).abs() < 1e-9);
    }

    #[test]
    fn synthetic_votes() {
        let votes = vec![7.0, 8.0, 8.0, 7.0, 9.0];
        assert_eq!(Consensus::from_votes(votes.clone(), TieBreak::LastSeen).grade, 8.0);
        assert_eq!(Consensus::from_votes(votes, TieBreak::FirstSeen).grade, 7.0);
        assert_eq!(Consensus::from_votes(vec![], TieBreak::LastSeen).grade, 0.0);
        assert_eq!(
            Consensus::from_votes(vec![3.0, 3.0, 5.0], TieBreak::LastSeen).grade,
            3.0
        );
    }

    #[test]
    fn negative_zero_tallies_with_zero() {
        let pair = vote_pair(-0.0);
        assert!(pair.iter().all(|vote| vote.is_sign_positive()));
        let consensus = Consensus::from_votes(pair.to_vec(), TieBreak::LastSeen);
        assert_eq!(consensus.tallies.len(), 1);
        assert_eq!(consensus.tallies[0].votes, 2);
        assert!(consensus.grade.is_sign_positive());
    }

    #[test]
    fn vote_pairs() {
        assert_eq!(vote_pair(7.4), [7.0, 8.0]);
        assert_eq!(vote_pair(7.5), [8.0, 8.0]);
        assert_eq!(vote_pair(-1.9), [-3.0, -1.0]);
        assert_eq!(vote_pair(4.0), [4.0, 4.0]);
    }

    #[test]
    fn suffixes_are_literal() {
        assert_eq!(grade_suffix(1), "st");
        assert_eq!(grade_suffix(2), "nd");
        assert_eq!(grade_suffix(3), "rd");
        assert_eq!(grade_suffix(4), "th");
        assert_eq!(grade_suffix(11), "th");
        assert_eq!(grade_suffix(21), "th");
        assert_eq!(grade_suffix(0), "th");
        assert_eq!(grade_suffix(-1), "th");
    }

    #[test]
    fn labels_span_two_grades() {
        assert_eq!(grade_label(8.0), "7th and 8th grade");
        assert_eq!(grade_label(8.5), "7th and 8th grade");
        assert_eq!(grade_label(3.0), "2nd and 3rd grade");
        assert_eq!(grade_label(22.0), "21th and 22th grade");
    }

    #[test]
    fn label_shape_for_real_text() {
        let engine = Readability::default();
        let text = "The cat sat on the mat. The dog ran fast.";
        assert_eq!(engine.text_standard(text, true), TextStandard::Float(2.0));
        assert_eq!(
            engine.text_standard(text, false).to_string(),
            "1st and 2nd grade"
        );
        assert!((engine.text_median(text) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn empty_text_votes_for_zero() {
        let engine = Readability::default();
        assert_eq!(engine.text_standard("", true), TextStandard::Float(0.0));
        assert_eq!(engine.text_median(""), 0.0);
    }

    #[test]
    fn text_standard_serializes_untagged() {
        let float = serde_json::to_string(&TextStandard::Float(7.0)).unwrap();
        assert_eq!(float, "7.0");
        let label = serde_json::to_string(&TextStandard::Label("6th and 7th grade".into())).unwrap();
        assert_eq!(label, "\"6th and 7th grade\"");
    }
}
