//! Reproducible problem generation.
//!
//! Model
//! - A master RNG hands each round its own sub-seed; any emitted round can
//!   be rebuilt from that sub-seed alone via `regenerate`, and
//!   `generate_single` is the pure entry point for tests.
//! - Per round: draw a theorem, sample family-appropriate base parameters,
//!   construct the reference geometry once, then derive the four choices
//!   (exact copy, underspecified decoy, two perturbed distractors) from the
//!   rules table before a uniform shuffle.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;

use super::rules::{self, DistractorRule, PerturbOp, Slot};
use super::{MarkingStyle, Problem, Theorem, Triangle, TriangleId};
use crate::geom;
use crate::perm::Perm3;
use crate::Point;

/// Error type for problem generation.
#[derive(Debug)]
pub enum GenerateError {
    InvalidParams { reason: String },
    DegenerateTriangle { reason: String },
}

impl GenerateError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateTriangle {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::DegenerateTriangle { reason } => write!(f, "degenerate triangle: {reason}"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Sampling ranges for base measurements. The defaults keep every draw far
/// from degeneracy even after the distractor perturbations (largest angle
/// offset is +30 degrees).
#[derive(Clone, Copy, Debug)]
pub struct GeneratorParams {
    /// SSS/SAS side lengths (sides 0 and 2).
    pub side_min: f64,
    pub side_max: f64,
    /// SSS/SAS included angle at vertex 0, degrees.
    pub included_angle_min: f64,
    pub included_angle_max: f64,
    /// ASA base angles at vertices 0 and 1, degrees.
    pub asa_angle_min: f64,
    pub asa_angle_max: f64,
    /// ASA included side (side 0).
    pub asa_side_min: f64,
    pub asa_side_max: f64,
    /// HL leg lengths.
    pub leg_min: f64,
    pub leg_max: f64,
    /// Retries in `generate_next` when a draw lands degenerate.
    pub max_attempts: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            side_min: 80.0,
            side_max: 120.0,
            included_angle_min: 45.0,
            included_angle_max: 115.0,
            asa_angle_min: 40.0,
            asa_angle_max: 70.0,
            asa_side_min: 100.0,
            asa_side_max: 140.0,
            leg_min: 70.0,
            leg_max: 110.0,
            max_attempts: 16,
        }
    }
}

impl GeneratorParams {
    fn validate(&self) -> Result<(), GenerateError> {
        let ranges = [
            ("side", self.side_min, self.side_max),
            (
                "included_angle",
                self.included_angle_min,
                self.included_angle_max,
            ),
            ("asa_angle", self.asa_angle_min, self.asa_angle_max),
            ("asa_side", self.asa_side_min, self.asa_side_max),
            ("leg", self.leg_min, self.leg_max),
        ];
        for (name, lo, hi) in ranges {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(GenerateError::invalid(format!("{name} range must be finite")));
            }
            if lo <= 0.0 {
                return Err(GenerateError::invalid(format!(
                    "{name} range must be positive"
                )));
            }
            if lo > hi {
                return Err(GenerateError::invalid(format!(
                    "{name} range must satisfy min <= max"
                )));
            }
        }
        // The SSS/SAS distractor shifts the included angle by +30 degrees.
        if self.included_angle_max + 30.0 >= 180.0 {
            return Err(GenerateError::invalid(
                "included angle range leaves no room for perturbed draws",
            ));
        }
        // ASA distractors shift one angle by up to +30; both rays must still
        // converge.
        if 2.0 * self.asa_angle_max + 30.0 >= 180.0 {
            return Err(GenerateError::invalid(
                "asa angle range leaves no room for a perturbed apex",
            ));
        }
        if self.max_attempts == 0 {
            return Err(GenerateError::invalid("max_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Replay token storing the sub-seed that regenerates the same round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReplay {
    pub seed: u64,
}

/// A generated round plus replay metadata.
#[derive(Clone, Debug)]
pub struct ProblemSample {
    pub problem: Problem,
    pub params: GeneratorParams,
    pub replay: SeedReplay,
}

/// Reproducible problem source.
pub struct ProblemGenerator {
    params: GeneratorParams,
    master_rng: StdRng,
}

impl ProblemGenerator {
    pub fn new(params: GeneratorParams, seed: u64) -> Result<Self, GenerateError> {
        params.validate()?;
        Ok(Self {
            params,
            master_rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Next round from the stream, retrying fresh sub-seeds on a degenerate
    /// draw.
    pub fn generate_next(&mut self) -> Result<ProblemSample, GenerateError> {
        let attempts = self.params.max_attempts.max(1);
        for _ in 0..attempts {
            let sub_seed = self.master_rng.next_u64();
            match Self::generate_single(&self.params, sub_seed) {
                Ok(problem) => {
                    return Ok(ProblemSample {
                        problem,
                        params: self.params,
                        replay: SeedReplay { seed: sub_seed },
                    })
                }
                Err(GenerateError::DegenerateTriangle { .. }) => continue,
                Err(err) => return Err(err),
            }
        }
        Err(GenerateError::degenerate(
            "no valid draw within max_attempts",
        ))
    }

    /// Rebuild the exact round an earlier `generate_next` emitted.
    pub fn regenerate(&self, replay: &SeedReplay) -> Result<Problem, GenerateError> {
        Self::generate_single(&self.params, replay.seed)
    }

    /// Build one full round from a single seed. Pure: the same params and
    /// seed always give the same round.
    pub fn generate_single(params: &GeneratorParams, seed: u64) -> Result<Problem, GenerateError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let theorem = Theorem::ALL[rng.gen_range(0..Theorem::ALL.len())];
        let rule = rules::rule_for(theorem);
        let base = sample_base(params, theorem, &mut rng);

        let vertices = base.construct().ok_or_else(|| {
            GenerateError::degenerate("base parameters produced a degenerate triangle")
        })?;

        let target = Triangle {
            id: TriangleId::Target,
            vertices,
            display_rotation: 0.0,
            display_flipped: false,
            marking: rule.given.to_style(),
            congruent_to_target: true,
            labels: Perm3::sample(&mut rng),
        };

        let correct = placed(
            &mut rng,
            TriangleId::Correct,
            vertices,
            rule.given.to_style(),
            true,
        );
        let unprovable = placed(
            &mut rng,
            TriangleId::Unprovable,
            vertices,
            rule.insufficient.to_style(),
            true,
        );
        let d1 = build_distractor(
            &mut rng,
            &base,
            &vertices,
            TriangleId::Distractor1,
            &rule.distractors[0],
        )?;
        let d2 = build_distractor(
            &mut rng,
            &base,
            &vertices,
            TriangleId::Distractor2,
            &rule.distractors[1],
        )?;

        // Uniform shuffle so screen position carries no signal.
        let mut choices = [correct, unprovable, d1, d2];
        choices.shuffle(&mut rng);

        Ok(Problem {
            target,
            choices,
            theorem,
        })
    }
}

/// Construction parameters in family order.
#[derive(Clone, Copy, Debug)]
enum BaseParams {
    /// (side 0, included angle at vertex 0 in degrees, side 2). SSS and SAS
    /// draw the angle; HL fixes it at 90 so first/last act as the legs.
    SasLike { first: f64, middle: f64, last: f64 },
    /// (angle at vertex 0 in degrees, side 0, angle at vertex 1 in degrees).
    AsaLike { first: f64, middle: f64, last: f64 },
}

impl BaseParams {
    fn construct(&self) -> Option<[Point; 3]> {
        match *self {
            BaseParams::SasLike {
                first,
                middle,
                last,
            } => geom::construct_sas(first, middle, last),
            BaseParams::AsaLike {
                first,
                middle,
                last,
            } => geom::construct_asa(first, middle, last),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut f64 {
        let (BaseParams::SasLike {
            first,
            middle,
            last,
        }
        | BaseParams::AsaLike {
            first,
            middle,
            last,
        }) = self;
        match slot {
            Slot::First => first,
            Slot::Middle => middle,
            Slot::Last => last,
        }
    }

    /// Apply a perturbation program; `None` when an op does not fit the
    /// parameter family.
    fn perturbed(&self, ops: &[PerturbOp]) -> Option<BaseParams> {
        let mut out = *self;
        for op in ops {
            match *op {
                PerturbOp::Offset { slot, delta } => *out.slot_mut(slot) += delta,
                PerturbOp::Scale { slot, factor } => *out.slot_mut(slot) *= factor,
                PerturbOp::ResplitHypotenuse { first_leg_factor } => {
                    let BaseParams::SasLike { first, last, .. } = out else {
                        return None;
                    };
                    let hyp = first.hypot(last);
                    let new_first = first * first_leg_factor;
                    let rest = hyp * hyp - new_first * new_first;
                    if rest <= 0.0 {
                        return None;
                    }
                    out = BaseParams::SasLike {
                        first: new_first,
                        middle: 90.0,
                        last: rest.sqrt(),
                    };
                }
            }
        }
        Some(out)
    }
}

fn sample_base<R: Rng>(params: &GeneratorParams, theorem: Theorem, rng: &mut R) -> BaseParams {
    match theorem {
        Theorem::Sss | Theorem::Sas => BaseParams::SasLike {
            first: rng.gen_range(params.side_min..=params.side_max),
            middle: rng.gen_range(params.included_angle_min..=params.included_angle_max),
            last: rng.gen_range(params.side_min..=params.side_max),
        },
        Theorem::Asa => BaseParams::AsaLike {
            first: rng.gen_range(params.asa_angle_min..=params.asa_angle_max),
            middle: rng.gen_range(params.asa_side_min..=params.asa_side_max),
            last: rng.gen_range(params.asa_angle_min..=params.asa_angle_max),
        },
        Theorem::Hl => BaseParams::SasLike {
            first: rng.gen_range(params.leg_min..=params.leg_max),
            middle: 90.0,
            last: rng.gen_range(params.leg_min..=params.leg_max),
        },
    }
}

/// Wrap geometry in a choice triangle with its own random display rotation,
/// flip, and label permutation.
fn placed<R: Rng>(
    rng: &mut R,
    id: TriangleId,
    vertices: [Point; 3],
    marking: MarkingStyle,
    congruent: bool,
) -> Triangle {
    Triangle {
        id,
        vertices,
        display_rotation: rng.gen_range(0..360) as f64,
        display_flipped: rng.gen_bool(0.5),
        marking,
        congruent_to_target: congruent,
        labels: Perm3::sample(rng),
    }
}

fn build_distractor<R: Rng>(
    rng: &mut R,
    base: &BaseParams,
    target_vertices: &[Point; 3],
    id: TriangleId,
    rule: &DistractorRule,
) -> Result<Triangle, GenerateError> {
    let perturbed = base.perturbed(rule.perturb).ok_or_else(|| {
        GenerateError::degenerate("perturbation does not apply to this parameter family")
    })?;
    let vertices = perturbed.construct().ok_or_else(|| {
        GenerateError::degenerate("perturbed parameters produced a degenerate triangle")
    })?;
    // The perturbations are chosen to change the metric; reject the rare
    // draw where the perturbed shape still matches within tolerance.
    if geom::congruent_shape(target_vertices, &vertices, 1e-3) {
        return Err(GenerateError::degenerate(
            "distractor draw matched the target shape",
        ));
    }
    Ok(placed(rng, id, vertices, rule.marks.to_style(), false))
}
