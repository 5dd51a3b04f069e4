// ─────────────────────────────────────────────────────────────────────
// SCPN Spin Filter — Calibration Log Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! CSV calibration-log codec for measured He-3 polarization points.
//!
//! The log shape is fixed: one header line, then `time,polarization`
//! rows, ASCII, comma-separated. Import is forgiving: the header is
//! skipped and rows that fail numeric parse are discarded, so a log
//! hand-edited in a spreadsheet still loads.

use std::io::Write;

use spinfilter_types::error::SpinFilterResult;
use spinfilter_types::state::DataPoint;

/// Header line of every calibration log.
pub const CSV_HEADER: &str = "Time (min),Polarization (%)";

/// One measured or computed calibration point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationRecord {
    pub time_min: f64,
    pub polarization_pct: f64,
}

/// Flatten a computed decay series into calibration records.
/// Sweep time is in hours; the log convention is minutes.
pub fn records_from_series(points: &[DataPoint]) -> Vec<CalibrationRecord> {
    points
        .iter()
        .map(|p| CalibrationRecord {
            time_min: p.time * 60.0,
            polarization_pct: p.he3_polarization,
        })
        .collect()
}

/// Render records as a calibration log.
pub fn export_csv(records: &[CalibrationRecord]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for record in records {
        csv.push_str(&format!(
            "{},{}\n",
            record.time_min, record.polarization_pct
        ));
    }
    csv
}

/// Parse a calibration log. The first line is the header and is skipped;
/// any later row that does not parse as two numbers is dropped.
pub fn import_csv(text: &str) -> Vec<CalibrationRecord> {
    text.lines()
        .skip(1)
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<CalibrationRecord> {
    let mut fields = line.split(',');
    let time_min = fields.next()?.trim().parse::<f64>().ok()?;
    let polarization_pct = fields.next()?.trim().parse::<f64>().ok()?;
    Some(CalibrationRecord {
        time_min,
        polarization_pct,
    })
}

/// Merge imported records into an existing sequence and re-sort the whole
/// sequence ascending by time.
pub fn merge_records(existing: &mut Vec<CalibrationRecord>, imported: Vec<CalibrationRecord>) {
    existing.extend(imported);
    existing.sort_by(|a, b| a.time_min.total_cmp(&b.time_min));
}

/// Write a calibration log to disk.
pub fn save_csv(path: &str, records: &[CalibrationRecord]) -> SpinFilterResult<()> {
    let csv = export_csv(records);
    let mut file = std::fs::File::create(path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Read a calibration log from disk.
pub fn load_csv(path: &str) -> SpinFilterResult<Vec<CalibrationRecord>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(import_csv(&contents))
}
