//! Structural scoring model
//!
//! Scores a primitive shape against structure-type modifiers to decide
//! pass/fail under a given load. Every derived metric is a deterministic
//! function of two table lookups and two scalar inputs.

mod tables;

pub use tables::{BaseStats, PrimitiveShape, StructureType, TypeModifiers};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Diameter at which the base-stats table applies unscaled
pub const REFERENCE_DIAMETER: f64 = 200.0;

/// Derived metrics for one scoring call
///
/// Strength and efficiency are percentages, loads are in kg, and
/// `load_ratio` is the applied load relative to `max_load`, clamped to 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub strength: f64,
    pub max_load: f64,
    pub material: f64,
    pub efficiency: f64,
    pub failure_point: f64,
    pub failed: bool,
    pub load_ratio: f64,
}

impl Stats {
    /// Verdict derived from the `failed` flag
    #[inline]
    pub fn verdict(&self) -> Verdict {
        if self.failed {
            Verdict::Failure
        } else {
            Verdict::Pass
        }
    }
}

/// Pass/fail outcome of a scoring call, `"pass"`/`"failure"` on the wire
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Failure,
}

impl Verdict {
    /// Wire string for this verdict
    pub const fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Failure => "failure",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full result of a scoring call: the stats plus the derived verdict
///
/// The verdict duplicates `stats.failed` for caller convenience; it is
/// derived once, not recomputed independently.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisReport {
    pub stats: Stats,
    pub sim_result: Verdict,
}

#[inline]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the stats for a shape/structure combination under a load
///
/// `diameter` (mm) scales every size-dependent metric through
/// `diam_factor = diameter / REFERENCE_DIAMETER`; efficiency is
/// diameter-independent. `weight` (kg) only feeds the failure check:
/// the structure fails when `weight * 100` exceeds the rounded `max_load`.
/// A `max_load` of zero (e.g. zero diameter) is guarded: `load_ratio` is 1,
/// never a division fault.
pub fn calc_stats(
    shape: PrimitiveShape,
    structure_type: StructureType,
    diameter: f64,
    weight: f64,
) -> Stats {
    let base = shape.base_stats();
    let modifiers = structure_type.modifiers();
    let diam_factor = diameter / REFERENCE_DIAMETER;

    let max_load = (base.max_load * modifiers.max_load * diam_factor).round();
    let applied_load = weight * 100.0;

    Stats {
        strength: round1(base.strength * modifiers.strength * diam_factor),
        max_load,
        material: round2(base.material * modifiers.material * diam_factor),
        efficiency: round1(base.efficiency * modifiers.efficiency),
        failure_point: (base.failure_point * modifiers.max_load * diam_factor).round(),
        failed: applied_load > max_load,
        load_ratio: if max_load > 0.0 {
            f64::min(1.0, applied_load / max_load)
        } else {
            1.0
        },
    }
}

/// Score a structure from string selectors
///
/// This is the lookup boundary: `shape` and `structure_type` must be keys in
/// the fixed tables, and an unknown key fails fast rather than silently
/// defaulting, since a wrong table entry would corrupt every derived metric.
///
/// # Example
///
/// ```
/// use structure_lab::*;
///
/// let report = analyze_structure("Cube", "Solid", 200.0, 50.0)?;
/// assert_eq!(report.stats.max_load, 6800.0);
/// assert_eq!(report.sim_result, Verdict::Pass);
/// # Ok::<(), StructureError>(())
/// ```
pub fn analyze_structure(
    shape: &str,
    structure_type: &str,
    diameter: f64,
    weight: f64,
) -> Result<AnalysisReport> {
    let shape = PrimitiveShape::from_str(shape)?;
    let structure_type = StructureType::from_str(structure_type)?;

    let stats = calc_stats(shape, structure_type, diameter, weight);
    Ok(AnalysisReport {
        stats,
        sim_result: stats.verdict(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructureError;

    #[test]
    fn test_reference_cube_solid() {
        // At the reference diameter the solid cube reproduces its base stats
        let stats = calc_stats(PrimitiveShape::Cube, StructureType::Solid, 200.0, 10.0);

        assert_eq!(stats.strength, 78.0);
        assert_eq!(stats.max_load, 6800.0);
        assert_eq!(stats.material, 2.4);
        assert_eq!(stats.efficiency, 72.0);
        assert_eq!(stats.failure_point, 7200.0);
        assert!(!stats.failed);
    }

    #[test]
    fn test_diameter_scaling() {
        // Half the reference diameter halves every size-dependent metric
        let stats = calc_stats(PrimitiveShape::Cube, StructureType::Solid, 100.0, 10.0);

        assert_eq!(stats.strength, 39.0);
        assert_eq!(stats.max_load, 3400.0);
        assert_eq!(stats.material, 1.2);
        assert_eq!(stats.failure_point, 3600.0);
        // Efficiency is diameter-independent
        assert_eq!(stats.efficiency, 72.0);
    }

    #[test]
    fn test_honeycomb_modifiers() {
        let stats = calc_stats(PrimitiveShape::Pyramid, StructureType::Honeycomb, 200.0, 1.0);

        assert_eq!(stats.strength, round1(92.0 * 0.88));
        assert_eq!(stats.max_load, (4200.0_f64 * 0.82).round());
        assert_eq!(stats.material, round2(1.8 * 0.55));
        assert_eq!(stats.efficiency, round1(88.0 * 1.28));
        assert_eq!(stats.failure_point, (5100.0_f64 * 0.82).round());
    }

    #[test]
    fn test_failure_threshold() {
        // weight * 100 = 6801 exceeds the cube's max load of 6800
        let stats = calc_stats(PrimitiveShape::Cube, StructureType::Solid, 200.0, 68.01);
        assert_eq!(stats.max_load, 6800.0);
        assert!(stats.failed);
        assert_eq!(stats.verdict(), Verdict::Failure);
        assert_eq!(stats.load_ratio, 1.0);
    }

    #[test]
    fn test_pass_at_exact_limit() {
        // weight * 100 = 6800 does not exceed 6800
        let stats = calc_stats(PrimitiveShape::Cube, StructureType::Solid, 200.0, 68.0);
        assert!(!stats.failed);
        assert_eq!(stats.verdict(), Verdict::Pass);
        assert_eq!(stats.load_ratio, 1.0);
    }

    #[test]
    fn test_load_ratio_partial() {
        let stats = calc_stats(PrimitiveShape::Cube, StructureType::Solid, 200.0, 34.0);
        assert_eq!(stats.load_ratio, 0.5);
    }

    #[test]
    fn test_zero_diameter_division_guard() {
        let stats = calc_stats(PrimitiveShape::Sphere, StructureType::Mesh, 0.0, 5.0);

        assert_eq!(stats.max_load, 0.0);
        assert_eq!(stats.load_ratio, 1.0);
        assert!(stats.failed);
    }

    #[test]
    fn test_analyze_structure_report() {
        let report = analyze_structure("Cube", "Solid", 200.0, 68.01).unwrap();
        assert!(report.stats.failed);
        assert_eq!(report.sim_result, Verdict::Failure);
        assert_eq!(report.sim_result.as_str(), "failure");

        let report = analyze_structure("Cube", "Solid", 200.0, 68.0).unwrap();
        assert!(!report.stats.failed);
        assert_eq!(report.sim_result, Verdict::Pass);
    }

    #[test]
    fn test_unknown_keys_fail_fast() {
        let err = analyze_structure("Tesseract", "Solid", 200.0, 10.0).unwrap_err();
        assert!(matches!(err, StructureError::UnknownShape(_)));

        let err = analyze_structure("Cube", "Lattice", 200.0, 10.0).unwrap_err();
        assert!(matches!(err, StructureError::UnknownStructureType(_)));
    }

    #[test]
    fn test_determinism() {
        let a = calc_stats(PrimitiveShape::Cylinder, StructureType::Bone, 173.0, 21.5);
        let b = calc_stats(PrimitiveShape::Cylinder, StructureType::Bone, 173.0, 21.5);
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_wire_format() {
        let report = analyze_structure("Cone", "Honeycomb", 200.0, 100.0).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["sim_result"], "failure");
        assert_eq!(json["stats"]["failed"], true);
        assert!(json["stats"]["max_load"].is_number());
    }
}
