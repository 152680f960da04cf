//! Answer validation.
//!
//! Three independent judgments over a learner's submission: which candidate
//! they picked, which theorem they claimed, and which vertex correspondence
//! they stated. The statement check works on geometric roles: the target and
//! every candidate carry independently randomized label permutations, so a
//! label-to-label comparison would be wrong. The claimed mapping is instead
//! compared against `chosen.labels . target.labels^-1`, which sends each
//! target label to the label the candidate shows at the structurally
//! matching vertex slot.

use crate::perm::Perm3;
use crate::problem::{Theorem, Triangle, TriangleId};

/// Outcome of the triangle-choice judgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleJudgment {
    Correct,
    Incorrect,
    Missing,
}

/// Outcome of the claimed-theorem judgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoremJudgment {
    Correct,
    Incorrect,
}

/// Outcome of the congruence-statement judgment. `NotApplicable` when no
/// triangle was chosen or the chosen one is not the provable candidate; a
/// correspondence is only meaningful against the correct choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementJudgment {
    Correct,
    Incorrect,
    NotApplicable,
}

/// Full verdict for one submission.
#[derive(Clone, Debug)]
pub struct Verdict {
    pub triangle: TriangleJudgment,
    pub theorem: TheoremJudgment,
    pub statement: StatementJudgment,
    /// Feedback lines in presentation order: triangle note, theorem note,
    /// statement note, then the success note.
    pub messages: Vec<String>,
    /// All three judgments correct.
    pub success: bool,
    pub expected_theorem: Theorem,
    /// The correspondence that would have been right, computed against the
    /// chosen triangle when it is the provable one, else against the known
    /// correct candidate.
    pub expected_statement: Option<Perm3>,
}

/// The label mapping a fully correct statement must claim.
///
/// Both triangles were built from the same positional geometry, so the
/// geometric-role correspondence is slot-to-slot; what differs is each
/// triangle's own random relabeling. Inverting the target's permutation
/// finds the slot behind each target label, and applying the candidate's
/// permutation reads off the label it shows there.
pub fn expected_correspondence(target: &Triangle, other: &Triangle) -> Perm3 {
    other.labels.compose(target.labels.invert())
}

/// Judge a submission. All three judgments are always computed; none
/// short-circuits the others.
pub fn validate(
    chosen: Option<&Triangle>,
    claimed: Perm3,
    claimed_theorem: Theorem,
    expected_theorem: Theorem,
    correct_choice: &Triangle,
    target: &Triangle,
) -> Verdict {
    let mut messages = Vec::new();

    let triangle = match chosen {
        None => {
            messages.push("No triangle selected.".to_string());
            TriangleJudgment::Missing
        }
        Some(t) if t.id == TriangleId::Correct => TriangleJudgment::Correct,
        Some(t) => {
            if t.id == TriangleId::Unprovable {
                messages.push(
                    "Triangle is congruent, but markings are insufficient for proof.".to_string(),
                );
            } else {
                messages.push("Triangle is not congruent.".to_string());
            }
            TriangleJudgment::Incorrect
        }
    };

    let theorem = if claimed_theorem == expected_theorem {
        TheoremJudgment::Correct
    } else {
        messages.push(format!(
            "Incorrect theorem. This setup requires {expected_theorem}."
        ));
        TheoremJudgment::Incorrect
    };

    let statement = match chosen {
        Some(t) if triangle == TriangleJudgment::Correct => {
            if claimed == expected_correspondence(target, t) {
                StatementJudgment::Correct
            } else {
                messages.push(
                    "Congruence statement incorrect. Check vertex correspondence.".to_string(),
                );
                StatementJudgment::Incorrect
            }
        }
        Some(_) => {
            messages.push("Cannot match vertices for incorrect triangle.".to_string());
            StatementJudgment::NotApplicable
        }
        None => StatementJudgment::NotApplicable,
    };

    let success = triangle == TriangleJudgment::Correct
        && theorem == TheoremJudgment::Correct
        && statement == StatementJudgment::Correct;
    if success {
        messages.push("Correct! Valid congruence proof.".to_string());
    }

    let expected_statement = match chosen {
        Some(t) if t.id == TriangleId::Correct => Some(expected_correspondence(target, t)),
        _ => Some(expected_correspondence(target, correct_choice)),
    };

    Verdict {
        triangle,
        theorem,
        statement,
        messages,
        success,
        expected_theorem,
        expected_statement,
    }
}
