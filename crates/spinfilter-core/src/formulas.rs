// ─────────────────────────────────────────────────────────────────────
// SCPN Spin Filter — Formulas
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form spin-filter formulas.
//!
//! All functions are pure f64 maps with IEEE semantics: T1 = 0, λ = 0 or
//! E = 0 produce inf/NaN that flow into the series rather than errors. A
//! bad sample must not abort a whole chart.
//!
//! Percent convention: `he3_decay` takes and returns percent (0-100);
//! the neutron formulas take He-3 polarization as a fraction (0-1) and
//! return percent.

use spinfilter_types::constants::{
    BARN_TO_CM2, ENERGY_WAVELENGTH_CONST, LAMBDA_REF_ANGSTROM, N_HE3_AMAGAT, SIGMA0_BARN,
};

/// Absorption rate constant n·σ(λ)·(barn→cm²) [1/(amagat·cm)].
///
/// The cross-section scales linearly with wavelength from its 1.8 Å
/// reference value (1/v absorber).
pub fn common_factor(lambda_angstrom: f64) -> f64 {
    let sigma_barn = SIGMA0_BARN * (lambda_angstrom / LAMBDA_REF_ANGSTROM);
    N_HE3_AMAGAT * sigma_barn * BARN_TO_CM2
}

/// Exponential He-3 relaxation: P(t) = P0 · exp(-t/T1).
///
/// `t_hours` and `t1_hours` share the hour unit. Result carries the unit
/// of `p0_percent`. Negative t is not rejected.
pub fn he3_decay(t_hours: f64, p0_percent: f64, t1_hours: f64) -> f64 {
    p0_percent * (-t_hours / t1_hours).exp()
}

/// Neutron beam polarization after the cell [%], range (-100, 100).
pub fn neutron_polarization(lambda_angstrom: f64, p_he_fraction: f64, thickness_amagat_cm: f64) -> f64 {
    (common_factor(lambda_angstrom) * p_he_fraction * thickness_amagat_cm).tanh() * 100.0
}

/// Neutron transmission through the cell [%].
pub fn neutron_transmission(lambda_angstrom: f64, p_he_fraction: f64, thickness_amagat_cm: f64) -> f64 {
    let factor = common_factor(lambda_angstrom) * thickness_amagat_cm;
    (-factor).exp() * (factor * p_he_fraction).cosh() * 100.0
}

/// Figure of merit Pn²·T [%], the combined spin-filter efficiency metric.
pub fn figure_of_merit(lambda_angstrom: f64, p_he_fraction: f64, thickness_amagat_cm: f64) -> f64 {
    let pn = neutron_polarization(lambda_angstrom, p_he_fraction, thickness_amagat_cm) / 100.0;
    let t = neutron_transmission(lambda_angstrom, p_he_fraction, thickness_amagat_cm) / 100.0;
    pn * pn * t * 100.0
}

/// E[meV] = 81.81 / λ[Å]².
pub fn energy_from_wavelength(lambda_angstrom: f64) -> f64 {
    ENERGY_WAVELENGTH_CONST / (lambda_angstrom * lambda_angstrom)
}

/// λ[Å] = sqrt(81.81 / E[meV]). Exact inverse of `energy_from_wavelength`.
pub fn wavelength_from_energy(energy_mev: f64) -> f64 {
    (ENERGY_WAVELENGTH_CONST / energy_mev).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_factor_reference_point() {
        // At the 1.8 Å reference the linear scaling drops out exactly.
        let expected = N_HE3_AMAGAT * SIGMA0_BARN * BARN_TO_CM2;
        assert_eq!(common_factor(LAMBDA_REF_ANGSTROM), expected);
    }

    #[test]
    fn test_common_factor_linear_in_wavelength() {
        let f1 = common_factor(1.8);
        let f2 = common_factor(3.6);
        assert!(
            (f2 - 2.0 * f1).abs() < 1e-12,
            "Cross-section should double with wavelength: {f1} vs {f2}"
        );
    }

    #[test]
    fn test_decay_at_zero_is_exact() {
        assert_eq!(he3_decay(0.0, 70.0, 100.0), 70.0);
        assert_eq!(he3_decay(0.0, 12.345, 7.0), 12.345);
    }

    #[test]
    fn test_decay_toward_zero() {
        let p = he3_decay(300.0, 70.0, 100.0);
        assert!(p > 0.0 && p < 70.0, "Decay should stay in (0, P0): {p}");
        assert!((p - 70.0 * (-3.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_decay_zero_t1_propagates_ieee() {
        // T1 = 0 is not rejected: exp(-inf) = 0 for t > 0, NaN at t = 0/0.
        assert_eq!(he3_decay(5.0, 70.0, 0.0), 0.0);
        assert!(he3_decay(0.0, 70.0, 0.0).is_nan());
        assert!(he3_decay(-5.0, 70.0, 0.0).is_infinite());
    }

    #[test]
    fn test_unpolarized_cell_gives_zero_beam_polarization() {
        assert_eq!(neutron_polarization(1.8, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_unpolarized_cell_transmission_is_pure_absorption() {
        let d = 10.0;
        let expected = (-common_factor(1.8) * d).exp() * 100.0;
        assert!((neutron_transmission(1.8, 0.0, d) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_polarized_cell_transmits_more() {
        // cosh(x) >= 1, so polarized He-3 always beats the unpolarized cell.
        let bare = neutron_transmission(1.8, 0.0, 10.0);
        let polarized = neutron_transmission(1.8, 0.7, 10.0);
        assert!(
            polarized > bare,
            "Polarized transmission should exceed unpolarized: {polarized} vs {bare}"
        );
    }

    #[test]
    fn test_reference_scenario() {
        // Documented constant set: n = 2.687e19, σ0 = 5333 barn, 1e-24,
        // λ = 1.8 Å, P_He = 0.70, d = 10 amagat·cm.
        let factor = common_factor(1.8);
        assert!((factor - 0.14329771).abs() < 1e-9, "factor = {factor}");

        let pn = neutron_polarization(1.8, 0.70, 10.0);
        let expected_pn = (factor * 0.70 * 10.0).tanh() * 100.0;
        assert_eq!(pn, expected_pn);
        assert!((pn - 76.3).abs() < 0.1, "Pn = {pn}");

        let t = neutron_transmission(1.8, 0.70, 10.0);
        let expected_t = (-factor * 10.0).exp() * (factor * 10.0 * 0.70).cosh() * 100.0;
        assert_eq!(t, expected_t);

        let fom = figure_of_merit(1.8, 0.70, 10.0);
        let expected_fom = (expected_pn / 100.0).powi(2) * (expected_t / 100.0) * 100.0;
        assert!((fom - expected_fom).abs() < 1e-12);
    }

    #[test]
    fn test_polarization_monotone_in_opacity() {
        let low = neutron_polarization(1.8, 0.3, 10.0);
        let high = neutron_polarization(1.8, 0.9, 10.0);
        assert!(high > low, "tanh is monotone in P_He·d: {low} vs {high}");
    }

    #[test]
    fn test_energy_wavelength_known_point() {
        // 1.8 Å ↔ 25.25 meV.
        let e = energy_from_wavelength(1.8);
        assert!((e - 81.81 / 3.24).abs() < 1e-12);
        assert!((wavelength_from_energy(e) - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_wavelength_propagates_infinity() {
        assert!(energy_from_wavelength(0.0).is_infinite());
        assert!(wavelength_from_energy(0.0).is_infinite());
        assert_eq!(common_factor(0.0), 0.0);
    }

    #[test]
    fn test_figure_of_merit_saturates_with_thickness() {
        // FOM rises from zero, peaks, then transmission loss wins.
        let thin = figure_of_merit(1.8, 0.7, 0.1);
        let mid = figure_of_merit(1.8, 0.7, 10.0);
        let thick = figure_of_merit(1.8, 0.7, 200.0);
        assert!(mid > thin, "FOM should grow from thin cells: {thin} vs {mid}");
        assert!(mid > thick, "FOM should fall for opaque cells: {mid} vs {thick}");
    }
}
