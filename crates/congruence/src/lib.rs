//! Core engine for randomized triangle-congruence exercises.
//!
//! Two collaborating pieces:
//! - `problem`: for a randomly drawn congruence theorem (SSS, SAS, ASA, HL),
//!   constructs a reference triangle, one exact congruent copy, one
//!   congruent-but-underspecified decoy, and two non-congruent distractors,
//!   each with theorem-appropriate markings and an independently randomized
//!   vertex-label permutation.
//! - `validate`: judges a learner's three-part answer (triangle choice,
//!   claimed theorem, claimed vertex correspondence) against the generated
//!   ground truth, undoing both triangles' label permutations via
//!   `perm::Perm3`.
//!
//! Rendering, gesture handling, and progression UI are external consumers of
//! the records produced here; nothing in this crate draws or holds shared
//! mutable state. Every random draw routes through a seeded `StdRng`, so
//! generated rounds are reproducible from their replay tokens.

pub mod geom;
pub mod perm;
pub mod problem;
pub mod score;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 2D coordinate in local display units (scale ~60-160).
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{angles_deg, congruent_shape, construct_asa, construct_sas, side_lengths};
    pub use crate::perm::Perm3;
    pub use crate::problem::{
        GenerateError, GeneratorParams, MarkingStyle, Problem, ProblemGenerator, ProblemSample,
        SeedReplay, Theorem, Triangle, TriangleId,
    };
    pub use crate::score::ScorePolicy;
    pub use crate::validate::{
        validate, StatementJudgment, TheoremJudgment, TriangleJudgment, Verdict,
    };
    pub use crate::Point;
}
