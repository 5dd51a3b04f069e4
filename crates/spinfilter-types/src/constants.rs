// ─────────────────────────────────────────────────────────────────────
// SCPN Spin Filter — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants for the He-3 neutron spin-filter model.
//!
//! Historical revisions of the calibration tool carried several mutually
//! inconsistent constant sets (molar-volume density, hard-coded density,
//! flat number density) and mixed atm·cm with amagat·cm thickness. This
//! is the single authoritative set: flat number density per amagat, gas
//! thickness in amagat·cm everywhere.

/// He-3 number density per cm³ at 1 amagat.
pub const N_HE3_AMAGAT: f64 = 2.687e19;

/// He-3 neutron absorption cross-section at the reference wavelength [barn].
pub const SIGMA0_BARN: f64 = 5333.0;

/// Barn to cm² conversion.
pub const BARN_TO_CM2: f64 = 1e-24;

/// Reference wavelength of the linear cross-section scaling [Å].
pub const LAMBDA_REF_ANGSTROM: f64 = 1.8;

/// Neutron energy-wavelength relation constant: E[meV] = 81.81 / λ[Å]².
pub const ENERGY_WAVELENGTH_CONST: f64 = 81.81;
