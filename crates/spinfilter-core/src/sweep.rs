// ─────────────────────────────────────────────────────────────────────
// SCPN Spin Filter — Sweep Sampling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Resampling of the formula engine into plottable series.
//!
//! Two charts, two sweeps. The cell chart sweeps time and shows the
//! decaying He-3 polarization with the neutron quantities it would give
//! at one fixed incident wavelength. The neutron chart sweeps wavelength
//! or energy at fixed committed He-3 polarization and thickness.

use ndarray::Array1;
use spinfilter_types::config::{
    AxisRange, CellParams, NeutronParams, SessionConfig, SweepScale, XAxisUnit,
};
use spinfilter_types::state::DataPoint;

use crate::formulas::{
    energy_from_wavelength, figure_of_merit, he3_decay, neutron_polarization,
    neutron_transmission, wavelength_from_energy,
};

/// Intervals of the time sweep (101 samples inclusive of both ends).
const TIME_INTERVALS: usize = 100;

/// Samples of the spectrum sweep (200 intervals).
const SPECTRUM_POINTS: usize = 201;

/// Lower bound applied to the sweep minimum in log mode.
const LOG_SWEEP_FLOOR: f64 = 0.1;

/// Both chart series of one session, recomputed wholesale.
#[derive(Debug, Clone)]
pub struct SessionSeries {
    pub cell: Vec<DataPoint>,
    pub neutron: Vec<DataPoint>,
}

/// Incident wavelength implied by the committed neutron parameters.
fn representative_wavelength(neutron: &NeutronParams) -> f64 {
    match neutron.axis_unit {
        XAxisUnit::Wavelength => neutron.incident_value,
        XAxisUnit::Energy => wavelength_from_energy(neutron.incident_value),
    }
}

/// Sample the He-3 decay curve over the cell chart's time range [hours].
///
/// 101 points at `x_min + i·(x_max-x_min)/100`, so both endpoints are hit
/// exactly with no accumulation drift. The companion neutron quantities
/// track the decaying polarization at the single committed wavelength.
pub fn time_sweep(cell: &CellParams, neutron: &NeutronParams, range: &AxisRange) -> Vec<DataPoint> {
    let lambda = representative_wavelength(neutron);
    let energy = energy_from_wavelength(lambda);
    let thickness = neutron.gas_thickness_amagat_cm;

    let times = Array1::linspace(range.x_min_value(), range.x_max_value(), TIME_INTERVALS + 1);
    times
        .iter()
        .map(|&t| {
            let he3_pct = he3_decay(t, cell.initial_polarization_pct, cell.relaxation_time_h);
            let p_he = he3_pct / 100.0;
            DataPoint {
                time: t,
                wavelength: lambda,
                energy,
                he3_polarization: he3_pct,
                neutron_polarization: neutron_polarization(lambda, p_he, thickness),
                neutron_transmission: neutron_transmission(lambda, p_he, thickness),
                figure_of_merit: figure_of_merit(lambda, p_he, thickness),
            }
        })
        .collect()
}

/// Sample the neutron chart over its wavelength-or-energy range.
///
/// 201 points, linear or log10-spaced. Only the incident energy varies;
/// He-3 polarization and thickness stay at their committed values. A
/// reversed range sweeps reversed; it is not rejected.
pub fn spectrum_sweep(
    neutron: &NeutronParams,
    scale: SweepScale,
    range: &AxisRange,
) -> Vec<DataPoint> {
    let xs = match scale {
        SweepScale::Linear => {
            Array1::linspace(range.x_min_value(), range.x_max_value(), SPECTRUM_POINTS)
        }
        SweepScale::Log10 => {
            let x_min = range.x_min_value().max(LOG_SWEEP_FLOOR);
            let x_max = range.x_max_value();
            Array1::linspace(x_min.log10(), x_max.log10(), SPECTRUM_POINTS)
                .mapv(|exponent| 10f64.powf(exponent))
        }
    };

    let p_he = neutron.he3_polarization_pct / 100.0;
    let thickness = neutron.gas_thickness_amagat_cm;

    xs.iter()
        .map(|&x| {
            let (lambda, energy) = match neutron.axis_unit {
                XAxisUnit::Wavelength => (x, energy_from_wavelength(x)),
                XAxisUnit::Energy => (wavelength_from_energy(x), x),
            };
            DataPoint {
                time: 0.0,
                wavelength: lambda,
                energy,
                he3_polarization: neutron.he3_polarization_pct,
                neutron_polarization: neutron_polarization(lambda, p_he, thickness),
                neutron_transmission: neutron_transmission(lambda, p_he, thickness),
                figure_of_merit: figure_of_merit(lambda, p_he, thickness),
            }
        })
        .collect()
}

/// Recompute both chart series from one committed session.
pub fn resample(session: &SessionConfig) -> SessionSeries {
    SessionSeries {
        cell: time_sweep(&session.cell, &session.neutron, &session.cell_range),
        neutron: spectrum_sweep(
            &session.neutron,
            session.spectrum_scale,
            &session.neutron_range,
        ),
    }
}
