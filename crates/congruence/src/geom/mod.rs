//! Plane geometry for exercise triangles.
//!
//! Purpose
//! - Construct vertex triples from the measurement sets the congruence
//!   theorems hand out (SAS-style and ASA-style), recentered so the shape
//!   stays inside a fixed display viewport.
//! - Measure sides, angles, and area for defensive checks and tests.
//!
//! Conventions
//! - Vertices are positional slots 0,1,2 fixed at construction time. Side k
//!   joins vertex k and vertex k+1 (mod 3); angle k sits at vertex k.
//!   Display labels are a separate concern (`crate::perm`).

mod construct;
mod measure;

pub use construct::{construct_asa, construct_sas};
pub use measure::{angles_deg, area, congruent_shape, side_lengths};
