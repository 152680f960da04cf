//! Problem data model and generation.
//!
//! Purpose
//! - Define the immutable triangle and problem records the renderer and the
//!   validator consume.
//! - House the per-theorem marking/perturbation table (`rules`) and the
//!   reproducible generator (`gen`).
//!
//! Lifecycle
//! - One generator call builds a full round (target plus four shuffled
//!   choices) atomically; nothing here mutates a triangle afterwards.
//!   Interactive rotation/flip/relabeling during play is display-only state
//!   owned by the caller.

pub mod rules;

mod gen;

pub use gen::{GenerateError, GeneratorParams, ProblemGenerator, ProblemSample, SeedReplay};

use crate::perm::Perm3;
use crate::Point;
use std::fmt;

/// Congruence theorem justifying a proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theorem {
    Sss,
    Sas,
    Asa,
    Hl,
}

impl Theorem {
    pub const ALL: [Theorem; 4] = [Theorem::Sss, Theorem::Sas, Theorem::Asa, Theorem::Hl];
}

impl fmt::Display for Theorem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theorem::Sss => "SSS",
            Theorem::Sas => "SAS",
            Theorem::Asa => "ASA",
            Theorem::Hl => "HL",
        };
        f.write_str(s)
    }
}

/// Identity of a triangle within one round. The generator produces exactly
/// this set; consumers must not assume other ids exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleId {
    Target,
    Correct,
    Unprovable,
    Distractor1,
    Distractor2,
}

/// Color group for a marked side or angle sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    Red,
    Blue,
    Amber,
}

/// Fixed palette: element k always belongs to group k, visible or not, so
/// matching marks share a color across triangles.
pub const PALETTE: [ColorTag; 3] = [ColorTag::Red, ColorTag::Blue, ColorTag::Amber];

/// Which geometric facts the renderer shows as given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkingStyle {
    /// Side k joins vertex k and vertex k+1 (mod 3).
    pub visible_sides: [bool; 3],
    /// Angle k sits at vertex k.
    pub visible_angles: [bool; 3],
    pub side_colors: [ColorTag; 3],
    pub angle_colors: [ColorTag; 3],
    /// Right-angle marker at this vertex, if any.
    pub right_angle_vertex: Option<usize>,
}

/// One displayed triangle: positional geometry plus display-only state.
#[derive(Clone, Debug)]
pub struct Triangle {
    pub id: TriangleId,
    /// Positional vertex slots; display labels come from `labels`, never
    /// from slot order.
    pub vertices: [Point; 3],
    /// Initial display rotation in degrees, baked in at generation time and
    /// distinct from any rotation the learner applies interactively.
    pub display_rotation: f64,
    pub display_flipped: bool,
    pub marking: MarkingStyle,
    /// Ground truth, independent of whether the markings can prove it.
    pub congruent_to_target: bool,
    /// Positional slot to display label, drawn independently per triangle.
    pub labels: Perm3,
}

/// A full generated round: target, shuffled choices, and the theorem the
/// marked givens justify.
#[derive(Clone, Debug)]
pub struct Problem {
    pub target: Triangle,
    pub choices: [Triangle; 4],
    pub theorem: Theorem,
}

impl Problem {
    /// Look a choice up by id (the target is not a choice).
    pub fn choice(&self, id: TriangleId) -> Option<&Triangle> {
        self.choices.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests;
