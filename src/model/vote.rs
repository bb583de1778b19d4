//! Divisions (recorded votes).

use super::line::{line_ranges, Line};
use super::SectionId;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Marker that opens the question of a division.
pub const DIVISION_MARKER: &str = "Division:";

/// Marker between the division label and the question itself.
pub const QUESTION_PUT_MARKER: &str = "Question put—";

/// Declared tally in an `AYES, 48:` or `NOES, 41:` heading.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DECLARED_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:AYES|NOES),\s*(\d+)\s*:").expect("valid regex"));

/// How a question or resolution is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    /// In favour
    Affirmative,
    /// Against
    Negative,
}

/// Whether the motion was carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The motion was agreed to
    Agreed,
    /// The motion was negatived
    Negatived,
}

/// The parts of a division, in the order they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VotePhase {
    /// `Division: Question put—...`
    Question,
    /// `AYES, n:` and the names that follow
    Yes,
    /// `NOES, n:` and the names that follow
    No,
    /// `Pair: ...`
    Pair,
    /// `Resolved in the affirmative.`
    Resolution,
    /// `Motion agreed to.`
    Outcome,
}

impl VotePhase {
    /// All phases in print order.
    pub const ALL: [VotePhase; 6] = [
        VotePhase::Question,
        VotePhase::Yes,
        VotePhase::No,
        VotePhase::Pair,
        VotePhase::Resolution,
        VotePhase::Outcome,
    ];

    /// Phases that may directly follow this one.
    ///
    /// Pairs are optional, so the resolution can follow the noes.
    pub fn successors(self) -> &'static [VotePhase] {
        match self {
            VotePhase::Question => &[VotePhase::Yes],
            VotePhase::Yes => &[VotePhase::No],
            VotePhase::No => &[VotePhase::Pair, VotePhase::Resolution],
            VotePhase::Pair => &[VotePhase::Resolution],
            VotePhase::Resolution => &[VotePhase::Outcome],
            VotePhase::Outcome => &[],
        }
    }
}

/// A division: the question, the ayes, the noes, pairs, resolution and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    /// Owning section
    #[serde(skip)]
    pub section: SectionId,

    /// e.g. `Division: Question put—That the motion be agreed to.`
    pub question: Vec<Line>,

    /// Ayes heading and names
    pub yes: Vec<Line>,

    /// Noes heading and names
    pub no: Vec<Line>,

    /// Pairs
    pub pair: Vec<Line>,

    /// e.g. `Resolved in the affirmative.`
    pub resolution: Vec<Line>,

    /// e.g. `Motion agreed to.`
    pub outcome: Vec<Line>,
}

impl Vote {
    /// Create an empty division in a section.
    pub fn new(section: SectionId) -> Self {
        Self {
            section,
            question: Vec::new(),
            yes: Vec::new(),
            no: Vec::new(),
            pair: Vec::new(),
            resolution: Vec::new(),
            outcome: Vec::new(),
        }
    }

    /// Lines collected for a phase.
    pub fn lines(&self, phase: VotePhase) -> &[Line] {
        match phase {
            VotePhase::Question => &self.question,
            VotePhase::Yes => &self.yes,
            VotePhase::No => &self.no,
            VotePhase::Pair => &self.pair,
            VotePhase::Resolution => &self.resolution,
            VotePhase::Outcome => &self.outcome,
        }
    }

    pub(crate) fn push(&mut self, phase: VotePhase, line: Line) {
        let buffer = match phase {
            VotePhase::Question => &mut self.question,
            VotePhase::Yes => &mut self.yes,
            VotePhase::No => &mut self.no,
            VotePhase::Pair => &mut self.pair,
            VotePhase::Resolution => &mut self.resolution,
            VotePhase::Outcome => &mut self.outcome,
        };
        buffer.push(line);
    }

    /// The latest phase holding any lines, or the question when nothing has been collected.
    pub fn current_phase(&self) -> VotePhase {
        VotePhase::ALL
            .iter()
            .rev()
            .copied()
            .find(|&phase| !self.lines(phase).is_empty())
            .unwrap_or(VotePhase::Question)
    }

    /// Check if the outcome line has been seen.
    pub fn is_complete(&self) -> bool {
        !self.outcome.is_empty()
    }

    /// The question with the division markers removed.
    pub fn question_text(&self) -> Option<String> {
        let text = self
            .question
            .iter()
            .map(Line::normalised_no_whitespace)
            .collect::<Vec<_>>()
            .join(" ");
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let cleaned = text
            .replace(DIVISION_MARKER, "")
            .replace(QUESTION_PUT_MARKER, "");
        Some(cleaned.trim().to_string())
    }

    /// Whether the question is framed as agreeing to something.
    pub fn question_phrasing(&self) -> Option<Response> {
        let text = self.question_text()?;
        if text.contains("be agreed to") {
            Some(Response::Affirmative)
        } else {
            Some(Response::Negative)
        }
    }

    /// How the division was resolved.
    pub fn resolution(&self) -> Option<Response> {
        if self.resolution.iter().any(|l| l.contains_word("affirmative")) {
            Some(Response::Affirmative)
        } else if self.resolution.iter().any(|l| l.contains_word("negatived")) {
            Some(Response::Negative)
        } else {
            None
        }
    }

    /// Whether the motion was carried, once an outcome line exists.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.outcome.is_empty() {
            None
        } else if self.outcome.iter().any(|l| l.contains("agreed to")) {
            Some(Outcome::Agreed)
        } else {
            Some(Outcome::Negatived)
        }
    }

    /// Tally printed in the ayes heading.
    pub fn declared_yes_count(&self) -> Option<u32> {
        declared_count(&self.yes)
    }

    /// Tally printed in the noes heading.
    pub fn declared_no_count(&self) -> Option<u32> {
        declared_count(&self.no)
    }
}

fn declared_count(lines: &[Line]) -> Option<u32> {
    let heading = lines.first()?;
    DECLARED_COUNT
        .captures(heading.normalised_no_whitespace())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (yes: {} no: {} pair: {}) - {:?} - {:?}",
            line_ranges(&self.question),
            self.question_text().unwrap_or_default(),
            line_ranges(&self.yes),
            line_ranges(&self.no),
            line_ranges(&self.pair),
            self.resolution(),
            self.outcome()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, number: usize) -> Line {
        Line::new(text, number, Some(number), 1)
    }

    fn sample_vote() -> Vote {
        let mut vote = Vote::new(SectionId(0));
        vote.push(
            VotePhase::Question,
            line("        Division: Question put—That the motion be agreed to.\n", 1),
        );
        vote.push(VotePhase::Yes, line("AYES, 48:\n", 2));
        vote.push(VotePhase::Yes, line("Bailey, Boyd, Brown\n", 3));
        vote.push(VotePhase::No, line("NOES, 41:\n", 4));
        vote.push(VotePhase::No, line("Andrew, Bates\n", 5));
        vote.push(VotePhase::Resolution, line("        Resolved in the affirmative.\n", 6));
        vote.push(VotePhase::Outcome, line("        Motion agreed to.\n", 7));
        vote
    }

    #[test]
    fn test_question_text_strips_markers() {
        let vote = sample_vote();
        assert_eq!(
            vote.question_text().as_deref(),
            Some("That the motion be agreed to.")
        );
        assert_eq!(vote.question_phrasing(), Some(Response::Affirmative));
    }

    #[test]
    fn test_question_phrasing_negative() {
        let mut vote = Vote::new(SectionId(0));
        vote.push(
            VotePhase::Question,
            line("        Division: Question put—That the amendment be disagreed with.\n", 1),
        );
        assert_eq!(vote.question_phrasing(), Some(Response::Negative));
    }

    #[test]
    fn test_resolution_and_outcome() {
        let vote = sample_vote();
        assert_eq!(vote.resolution(), Some(Response::Affirmative));
        assert_eq!(vote.outcome(), Some(Outcome::Agreed));
        assert!(vote.is_complete());

        let mut negatived = Vote::new(SectionId(0));
        negatived.push(VotePhase::Resolution, line("        Question negatived.\n", 1));
        negatived.push(VotePhase::Outcome, line("Motion negatived.\n", 2));
        assert_eq!(negatived.resolution(), Some(Response::Negative));
        assert_eq!(negatived.outcome(), Some(Outcome::Negatived));
    }

    #[test]
    fn test_empty_vote_accessors() {
        let vote = Vote::new(SectionId(0));
        assert_eq!(vote.question_text(), None);
        assert_eq!(vote.question_phrasing(), None);
        assert_eq!(vote.resolution(), None);
        assert_eq!(vote.outcome(), None);
        assert_eq!(vote.current_phase(), VotePhase::Question);
    }

    #[test]
    fn test_current_phase_follows_latest_buffer() {
        let vote = sample_vote();
        assert_eq!(vote.current_phase(), VotePhase::Outcome);

        let mut partial = Vote::new(SectionId(0));
        partial.push(VotePhase::Question, line("Division: Question put—x\n", 1));
        partial.push(VotePhase::Yes, line("AYES, 2:\n", 2));
        assert_eq!(partial.current_phase(), VotePhase::Yes);
    }

    #[test]
    fn test_declared_counts() {
        let vote = sample_vote();
        assert_eq!(vote.declared_yes_count(), Some(48));
        assert_eq!(vote.declared_no_count(), Some(41));
        assert_eq!(Vote::new(SectionId(0)).declared_yes_count(), None);
    }

    #[test]
    fn test_successors_allow_skipping_pairs() {
        assert_eq!(
            VotePhase::No.successors(),
            &[VotePhase::Pair, VotePhase::Resolution]
        );
        assert!(VotePhase::Outcome.successors().is_empty());
    }
}
