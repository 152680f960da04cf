//! Per-theorem marking and distractor rules.
//!
//! The four theorems differ only in data: which givens are marked on the
//! target and its exact copy, which insufficient subset the unprovable decoy
//! shows, and how each distractor perturbs the base parameters. One table
//! keeps those facts in a single place; construction, styling, and
//! distractor generation all read it, and a fifth theorem would be a table
//! edit rather than new branching.

use super::{ColorTag, MarkingStyle, Theorem, PALETTE};

/// Visibility subset without colors; expanded via `to_style`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkSpec {
    pub sides: [bool; 3],
    pub angles: [bool; 3],
    pub right_angle_vertex: Option<usize>,
}

impl MarkSpec {
    pub fn to_style(self) -> MarkingStyle {
        MarkingStyle {
            visible_sides: self.sides,
            visible_angles: self.angles,
            side_colors: PALETTE,
            angle_colors: PALETTE,
            right_angle_vertex: self.right_angle_vertex,
        }
    }
}

/// Which base parameter a perturbation touches, in family order (see
/// `gen::BaseParams`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    First,
    Middle,
    Last,
}

/// One edit to the base parameters. Programs are short slices so a
/// distractor can combine edits.
#[derive(Clone, Copy, Debug)]
pub enum PerturbOp {
    /// Add `delta` (degrees for angle slots, length units otherwise).
    Offset { slot: Slot, delta: f64 },
    /// Multiply the slot by `factor`.
    Scale { slot: Slot, factor: f64 },
    /// Right triangles only: keep the hypotenuse, rescale the first leg by
    /// `first_leg_factor`, and solve the second leg from the Pythagorean
    /// identity.
    ResplitHypotenuse { first_leg_factor: f64 },
}

/// Recipe for one non-congruent distractor.
#[derive(Clone, Copy, Debug)]
pub struct DistractorRule {
    pub perturb: &'static [PerturbOp],
    pub marks: MarkSpec,
}

/// Everything theorem-specific the generator needs.
#[derive(Clone, Copy, Debug)]
pub struct TheoremRule {
    pub theorem: Theorem,
    /// Markings on the target and the correct copy: exactly the theorem's
    /// givens.
    pub given: MarkSpec,
    /// Markings on the congruent-but-unprovable decoy.
    pub insufficient: MarkSpec,
    pub distractors: [DistractorRule; 2],
}

const NONE: [bool; 3] = [false, false, false];

pub const RULES: [TheoremRule; 4] = [
    TheoremRule {
        theorem: Theorem::Sss,
        given: MarkSpec {
            sides: [true, true, true],
            angles: NONE,
            right_angle_vertex: None,
        },
        // SSA: two sides plus the non-included angle.
        insufficient: MarkSpec {
            sides: [true, false, true],
            angles: [false, true, false],
            right_angle_vertex: None,
        },
        distractors: [
            DistractorRule {
                perturb: &[PerturbOp::Offset {
                    slot: Slot::Middle,
                    delta: 30.0,
                }],
                marks: MarkSpec {
                    sides: [true, false, true],
                    angles: NONE,
                    right_angle_vertex: None,
                },
            },
            DistractorRule {
                perturb: &[
                    PerturbOp::Offset {
                        slot: Slot::Middle,
                        delta: -20.0,
                    },
                    PerturbOp::Scale {
                        slot: Slot::Last,
                        factor: 0.8,
                    },
                ],
                marks: MarkSpec {
                    sides: [true, false, false],
                    angles: NONE,
                    right_angle_vertex: None,
                },
            },
        ],
    },
    TheoremRule {
        theorem: Theorem::Sas,
        given: MarkSpec {
            sides: [true, false, true],
            angles: [true, false, false],
            right_angle_vertex: None,
        },
        // Same two sides, but the non-included angle instead of the
        // included one: SSA again, shared deliberately with SSS.
        insufficient: MarkSpec {
            sides: [true, false, true],
            angles: [false, true, false],
            right_angle_vertex: None,
        },
        distractors: [
            DistractorRule {
                perturb: &[PerturbOp::Offset {
                    slot: Slot::Middle,
                    delta: 30.0,
                }],
                marks: MarkSpec {
                    sides: [true, false, true],
                    angles: NONE,
                    right_angle_vertex: None,
                },
            },
            DistractorRule {
                perturb: &[PerturbOp::Scale {
                    slot: Slot::Last,
                    factor: 0.6,
                }],
                marks: MarkSpec {
                    sides: [true, false, false],
                    angles: [true, false, false],
                    right_angle_vertex: None,
                },
            },
        ],
    },
    TheoremRule {
        theorem: Theorem::Asa,
        given: MarkSpec {
            sides: [true, false, false],
            angles: [true, true, false],
            right_angle_vertex: None,
        },
        // AAA: all angles, no side.
        insufficient: MarkSpec {
            sides: NONE,
            angles: [true, true, true],
            right_angle_vertex: None,
        },
        distractors: [
            DistractorRule {
                perturb: &[PerturbOp::Offset {
                    slot: Slot::Last,
                    delta: 25.0,
                }],
                marks: MarkSpec {
                    sides: [true, false, false],
                    angles: [true, false, false],
                    right_angle_vertex: None,
                },
            },
            DistractorRule {
                perturb: &[PerturbOp::Offset {
                    slot: Slot::First,
                    delta: 30.0,
                }],
                marks: MarkSpec {
                    sides: [true, false, false],
                    angles: [false, true, false],
                    right_angle_vertex: None,
                },
            },
        ],
    },
    TheoremRule {
        theorem: Theorem::Hl,
        given: MarkSpec {
            sides: [true, true, false],
            angles: NONE,
            right_angle_vertex: Some(0),
        },
        // Same hypotenuse and leg, but without the right-angle marker the
        // pair proves nothing.
        insufficient: MarkSpec {
            sides: [true, true, false],
            angles: NONE,
            right_angle_vertex: None,
        },
        distractors: [
            DistractorRule {
                perturb: &[PerturbOp::Scale {
                    slot: Slot::Last,
                    factor: 1.5,
                }],
                marks: MarkSpec {
                    sides: [true, false, false],
                    angles: NONE,
                    right_angle_vertex: Some(0),
                },
            },
            DistractorRule {
                perturb: &[PerturbOp::ResplitHypotenuse {
                    first_leg_factor: 0.7,
                }],
                marks: MarkSpec {
                    sides: [false, true, false],
                    angles: NONE,
                    right_angle_vertex: Some(0),
                },
            },
        ],
    },
];

pub fn rule_for(theorem: Theorem) -> &'static TheoremRule {
    match theorem {
        Theorem::Sss => &RULES[0],
        Theorem::Sas => &RULES[1],
        Theorem::Asa => &RULES[2],
        Theorem::Hl => &RULES[3],
    }
}
