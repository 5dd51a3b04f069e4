// ─────────────────────────────────────────────────────────────────────
// SCPN Spin Filter — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Unit of the swept axis on the neutron chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisUnit {
    Wavelength,
    Energy,
}

/// Spacing of the spectrum sweep samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepScale {
    Linear,
    Log10,
}

/// Committed He-3 cell decay parameters.
///
/// `relaxation_time_h` should be > 0; this is not enforced. T1 = 0 drives
/// the decay exponent to -inf and the series carries the resulting 0/NaN
/// points, matching the lenient float semantics of the whole core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CellParams {
    /// Initial He-3 polarization [%], 0-100 scale by convention, not clamped.
    pub initial_polarization_pct: f64,
    /// Relaxation time constant T1 [hours].
    pub relaxation_time_h: f64,
}

/// Committed neutron-beam parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NeutronParams {
    /// Gas thickness (number density × path length) [amagat·cm].
    pub gas_thickness_amagat_cm: f64,
    /// He-3 polarization [%], 0-100 scale.
    pub he3_polarization_pct: f64,
    /// Representative incident value in the unit selected by `axis_unit`
    /// (Å for wavelength, meV for energy).
    pub incident_value: f64,
    /// Unit of `incident_value` and of the neutron-chart sweep axis.
    pub axis_unit: XAxisUnit,
}

/// Axis range of one chart. Bounds are kept as free-form text exactly as
/// entered and parsed at use; unparseable text reads as 0.0. xMin < xMax is
/// not enforced, a reversed range is swept reversed rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisRange {
    pub x_min: String,
    pub x_max: String,
    pub y_min: String,
    pub y_max: String,
}

impl AxisRange {
    pub fn new(x_min: &str, x_max: &str, y_min: &str, y_max: &str) -> Self {
        AxisRange {
            x_min: x_min.to_string(),
            x_max: x_max.to_string(),
            y_min: y_min.to_string(),
            y_max: y_max.to_string(),
        }
    }

    pub fn x_min_value(&self) -> f64 {
        crate::state::parse_lenient(&self.x_min)
    }

    pub fn x_max_value(&self) -> f64 {
        crate::state::parse_lenient(&self.x_max)
    }

    pub fn y_min_value(&self) -> f64 {
        crate::state::parse_lenient(&self.y_min)
    }

    pub fn y_max_value(&self) -> f64 {
        crate::state::parse_lenient(&self.y_max)
    }
}

/// Complete session preset: both committed parameter sets plus the axis
/// ranges of the two charts. Loadable from a JSON preset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub cell: CellParams,
    pub neutron: NeutronParams,
    pub spectrum_scale: SweepScale,
    pub cell_range: AxisRange,
    pub neutron_range: AxisRange,
}

impl Default for CellParams {
    fn default() -> Self {
        CellParams {
            initial_polarization_pct: 70.0,
            relaxation_time_h: 100.0,
        }
    }
}

impl Default for NeutronParams {
    fn default() -> Self {
        NeutronParams {
            gas_thickness_amagat_cm: 10.0,
            he3_polarization_pct: 70.0,
            incident_value: 1.8,
            axis_unit: XAxisUnit::Wavelength,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cell: CellParams::default(),
            neutron: NeutronParams::default(),
            spectrum_scale: SweepScale::Linear,
            cell_range: AxisRange::new("0", "200", "0", "100"),
            neutron_range: AxisRange::new("0.1", "10", "0", "120"),
        }
    }
}

impl SessionConfig {
    /// Load a session preset from a JSON file.
    pub fn from_file(path: &str) -> crate::error::SpinFilterResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
