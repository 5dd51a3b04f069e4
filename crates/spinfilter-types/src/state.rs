// ─────────────────────────────────────────────────────────────────────
// SCPN Spin Filter — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-tier parameter state: free-form edit drafts plus the committed
//! session, joined by explicit atomic commit transitions.
//!
//! The drafts hold text exactly as entered; nothing the user types is
//! rejected. Committed values only change when a commit method replaces
//! the whole sub-object, never one field at a time.

use crate::config::{AxisRange, CellParams, NeutronParams, SessionConfig, XAxisUnit};

/// Lenient numeric parse: malformed or empty text reads as 0.0.
/// Deliberate policy of the calibration tool, not input validation.
pub fn parse_lenient(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// One sample of the calculation engine. Flat record, transient: every
/// series is recomputed wholesale on any parameter or range change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub time: f64,
    pub wavelength: f64,
    pub energy: f64,
    pub he3_polarization: f64,
    pub neutron_polarization: f64,
    pub neutron_transmission: f64,
    pub figure_of_merit: f64,
}

/// Edit buffer for the He-3 cell parameters.
#[derive(Debug, Clone)]
pub struct CellDraft {
    pub initial_polarization: String,
    pub relaxation_time: String,
}

impl CellDraft {
    fn from_params(params: &CellParams) -> Self {
        CellDraft {
            initial_polarization: params.initial_polarization_pct.to_string(),
            relaxation_time: params.relaxation_time_h.to_string(),
        }
    }

    fn to_params(&self) -> CellParams {
        CellParams {
            initial_polarization_pct: parse_lenient(&self.initial_polarization),
            relaxation_time_h: parse_lenient(&self.relaxation_time),
        }
    }
}

/// Edit buffer for the neutron-beam parameters.
#[derive(Debug, Clone)]
pub struct NeutronDraft {
    pub gas_thickness: String,
    pub he3_polarization: String,
    pub incident_value: String,
    pub axis_unit: XAxisUnit,
}

impl NeutronDraft {
    fn from_params(params: &NeutronParams) -> Self {
        NeutronDraft {
            gas_thickness: params.gas_thickness_amagat_cm.to_string(),
            he3_polarization: params.he3_polarization_pct.to_string(),
            incident_value: params.incident_value.to_string(),
            axis_unit: params.axis_unit,
        }
    }

    fn to_params(&self) -> NeutronParams {
        NeutronParams {
            gas_thickness_amagat_cm: parse_lenient(&self.gas_thickness),
            he3_polarization_pct: parse_lenient(&self.he3_polarization),
            incident_value: parse_lenient(&self.incident_value),
            axis_unit: self.axis_unit,
        }
    }
}

/// Holds the committed session and the two edit drafts.
///
/// Cell and neutron parameters are committed independently; axis range
/// edits bypass the drafts and take effect immediately.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    committed: SessionConfig,
    pub cell_draft: CellDraft,
    pub neutron_draft: NeutronDraft,
}

impl ParameterStore {
    /// Start a session from hard-coded defaults.
    pub fn new() -> Self {
        Self::from_config(SessionConfig::default())
    }

    pub fn from_config(config: SessionConfig) -> Self {
        let cell_draft = CellDraft::from_params(&config.cell);
        let neutron_draft = NeutronDraft::from_params(&config.neutron);
        ParameterStore {
            committed: config,
            cell_draft,
            neutron_draft,
        }
    }

    /// Absent preset falls back to defaults.
    pub fn from_optional_config(config: Option<SessionConfig>) -> Self {
        Self::from_config(config.unwrap_or_default())
    }

    pub fn committed(&self) -> &SessionConfig {
        &self.committed
    }

    /// Atomically replace the committed cell parameters with the parsed
    /// draft. The neutron side is untouched.
    pub fn commit_cell(&mut self) {
        self.committed.cell = self.cell_draft.to_params();
    }

    /// Atomically replace the committed neutron parameters with the parsed
    /// draft. The cell side is untouched.
    pub fn commit_neutron(&mut self) {
        self.committed.neutron = self.neutron_draft.to_params();
    }

    /// Range edits take effect immediately, no commit step.
    pub fn set_cell_range(&mut self, range: AxisRange) {
        self.committed.cell_range = range;
    }

    pub fn set_neutron_range(&mut self, range: AxisRange) {
        self.committed.neutron_range = range;
    }

    pub fn set_spectrum_scale(&mut self, scale: crate::config::SweepScale) {
        self.committed.spectrum_scale = scale;
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
