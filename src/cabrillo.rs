//! Cabrillo v3.0 report rendering and file export.
//!
//! The report body is pure string rendering and is testable on its own;
//! file placement and naming live in the thin `write_report*` wrappers.
//! All lines end in CRLF, as the submission robots expect.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{
    contact::ContactRecord,
    contest::CABRILLO_NAME,
    scoring,
    station::{ContestSettings, StationProfile},
};

const CABRILLO_VERSION: &str = "3.0";

/// Errors surfaced by report export.
#[derive(Debug)]
pub enum ExportError {
    /// Writing the report file failed.
    Io {
        /// Target path of the failed write.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// No home directory could be resolved for the default output location.
    NoHomeDir,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            ExportError::NoHomeDir => write!(f, "no home directory for report output"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
            ExportError::NoHomeDir => None,
        }
    }
}

/// Result alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Column justification for fixed-width QSO fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
}

/// One column of the QSO line grammar.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column name, for diagnostics and tests.
    pub name: &'static str,
    /// Minimum rendered width; wider values are emitted whole.
    pub width: usize,
    /// Which side gets the padding.
    pub justify: Justify,
    /// Whether a single-space separator follows this column.
    pub space_after: bool,
}

/// QSO line columns in emit order. The sent exchange is glued directly to
/// the remote call, everything else is space-separated.
pub const QSO_FIELDS: [FieldSpec; 9] = [
    FieldSpec { name: "freq", width: 5, justify: Justify::Right, space_after: true },
    FieldSpec { name: "mode", width: 0, justify: Justify::Left, space_after: true },
    FieldSpec { name: "date", width: 0, justify: Justify::Left, space_after: true },
    FieldSpec { name: "time", width: 0, justify: Justify::Left, space_after: true },
    FieldSpec { name: "prefix", width: 13, justify: Justify::Left, space_after: true },
    FieldSpec { name: "sent-exchange", width: 9, justify: Justify::Left, space_after: false },
    FieldSpec { name: "call", width: 13, justify: Justify::Left, space_after: true },
    FieldSpec { name: "exchange", width: 3, justify: Justify::Left, space_after: true },
    FieldSpec { name: "section", width: 6, justify: Justify::Left, space_after: false },
];

/// Pads `value` to the column's minimum width. Never truncates.
pub fn pad(value: &str, spec: &FieldSpec) -> String {
    match spec.justify {
        Justify::Left => format!("{value:<width$}", width = spec.width),
        Justify::Right => format!("{value:>width$}", width = spec.width),
    }
}

/// Maps a logged mode string onto its Cabrillo spelling: `LSB` and `USB`
/// collapse to `SSB`, everything else passes through unchanged.
pub fn cabrillo_mode(mode: &str) -> &str {
    match mode {
        "LSB" | "USB" => "SSB",
        other => other,
    }
}

/// Renders one QSO line through the [`QSO_FIELDS`] table.
pub fn qso_line(contact: &ContactRecord, settings: &ContestSettings) -> String {
    let values = [
        contact.freq_khz.to_string(),
        cabrillo_mode(&contact.mode).to_string(),
        date_part(&contact.ts).to_string(),
        time_part(&contact.ts),
        contact.prefix.clone(),
        settings.sent_exchange.to_ascii_uppercase(),
        contact.call.clone(),
        contact.exchange.clone(),
        contact.section.clone(),
    ];

    let mut line = String::from("QSO: ");
    for (value, spec) in values.iter().zip(QSO_FIELDS.iter()) {
        line.push_str(&pad(value, spec));
        if spec.space_after {
            line.push(' ');
        }
    }
    line
}

// The timestamp is stored as `YYYY-MM-DD HH:MM:SS`; date and time are
// slices of it, not parsed dates.
fn date_part(ts: &str) -> &str {
    ts.get(..10).unwrap_or(ts)
}

fn time_part(ts: &str) -> String {
    let hours = ts.get(11..13).unwrap_or("");
    let minutes = ts.get(14..16).unwrap_or("");
    format!("{hours}{minutes}")
}

/// Renders the complete Cabrillo report, CRLF line endings included.
///
/// `contacts` must already be ordered ascending by timestamp; QSO lines are
/// emitted in input order. The claimed score is recomputed here from the
/// same contact list.
pub fn render_report(
    station: &StationProfile,
    settings: &ContestSettings,
    contacts: &[ContactRecord],
    operators: &[String],
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("START-OF-LOG: {CABRILLO_VERSION}"));
    lines.push(format!("CREATED-BY: vhflog v{}", env!("CARGO_PKG_VERSION")));
    lines.push(format!("CONTEST: {CABRILLO_NAME}"));
    if !station.club.is_empty() {
        lines.push(format!("CLUB: {}", station.club.to_ascii_uppercase()));
    }
    lines.push(format!("CALLSIGN: {}", station.call));
    lines.push(format!("LOCATION: {}", station.arrl_section));
    lines.push(format!("CATEGORY-OPERATOR: {}", settings.operator_category));
    lines.push(format!("CATEGORY-ASSISTED: {}", settings.assisted_category));
    lines.push(format!("CATEGORY-BAND: {}", settings.band_category));
    lines.push(format!("CATEGORY-MODE: {}", settings.mode_category));
    lines.push(format!("CATEGORY-TRANSMITTER: {}", settings.transmitter_category));
    if settings.has_overlay() {
        lines.push(format!("CATEGORY-OVERLAY: {}", settings.overlay_category));
    }
    lines.push(format!("GRID-LOCATOR: {}", station.grid_square));
    lines.push(format!("CATEGORY-POWER: {}", settings.power_category));
    lines.push(format!(
        "CLAIMED-SCORE: {}",
        scoring::claimed_score(&station.grid_square, contacts)
    ));

    let mut ops = format!("@{}", station.call);
    for operator in operators {
        ops.push_str(", ");
        ops.push_str(operator);
    }
    lines.push(format!("OPERATORS: {ops}"));

    lines.push(format!("NAME: {}", station.name));
    lines.push(format!("ADDRESS: {}", station.street1));
    lines.push(format!("ADDRESS-CITY: {}", station.city));
    lines.push(format!("ADDRESS-STATE-PROVINCE: {}", station.state));
    lines.push(format!("ADDRESS-POSTALCODE: {}", station.zip));
    lines.push(format!("ADDRESS-COUNTRY: {}", station.country));
    lines.push(format!("EMAIL: {}", station.email));

    for contact in contacts {
        lines.push(qso_line(contact, settings));
    }
    lines.push("END-OF-LOG:".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// Writes the report into `dir` under the fixed
/// `<CALL>_<CONTEST-ID>_<timestamp>.log` name and returns the path.
pub fn write_report_to(
    dir: &Path,
    station: &StationProfile,
    settings: &ContestSettings,
    contacts: &[ContactRecord],
    operators: &[String],
) -> ExportResult<PathBuf> {
    let path = dir.join(report_file_name(station));
    log::debug!(
        "writing {} contacts to {}",
        contacts.len(),
        path.display()
    );
    let report = render_report(station, settings, contacts, operators);
    if let Err(source) = fs::write(&path, report.as_bytes()) {
        log::error!("cabrillo export failed: {source}, writing to {}", path.display());
        return Err(ExportError::Io { path, source });
    }
    Ok(path)
}

/// Writes the report into the user's home directory. The file name is not
/// caller-configurable.
pub fn write_report(
    station: &StationProfile,
    settings: &ContestSettings,
    contacts: &[ContactRecord],
    operators: &[String],
) -> ExportResult<PathBuf> {
    let home = dirs::home_dir().ok_or(ExportError::NoHomeDir)?;
    write_report_to(&home, station, settings, contacts, operators)
}

fn report_file_name(station: &StationProfile) -> String {
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!(
        "{}_{}_{}.log",
        station.call.to_ascii_uppercase(),
        CABRILLO_NAME,
        stamp
    )
}
