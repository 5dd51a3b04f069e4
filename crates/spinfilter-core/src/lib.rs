// ─────────────────────────────────────────────────────────────────────
// SCPN Spin Filter — Calculation Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Calculation core for He-3 neutron spin-filter calibration:
//! closed-form polarization/transmission formulas, sweep sampling for the
//! two calibration charts, and the CSV calibration-log codec.

pub mod export;
pub mod formulas;
pub mod sweep;
