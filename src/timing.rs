//! Solve timing: records, penalties, the usual statistics and the export format.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cases::PllGroup;
use crate::error::ImportError;

/// Penalty attached to a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Penalty {
    /// No penalty
    #[default]
    #[serde(rename = "OK")]
    Ok,
    /// Two seconds added
    #[serde(rename = "+2")]
    PlusTwo,
    /// Did not finish
    #[serde(rename = "DNF")]
    Dnf,
}

/// One timed solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRecord {
    /// Unique id of the record.
    pub id: String,
    /// Id of the case that was solved.
    pub case_id: String,
    /// Group of that case.
    pub group: PllGroup,
    /// Raw time, before the penalty.
    pub time_ms: f64,
    /// Penalty for the solve.
    pub penalty: Penalty,
    /// When the solve happened, in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl SolveRecord {
    /// The time with the penalty applied, `None` for a DNF.
    pub fn effective_ms(&self) -> Option<f64> {
        apply_penalty(self.time_ms, self.penalty)
    }
}

/// Summary statistics over a list of solves. Each is `None` if there isn't enough data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingStats {
    /// Mean of all finished solves.
    pub average: Option<f64>,
    /// Median of all finished solves.
    pub median: Option<f64>,
    /// Average of the last 5.
    pub ao5: Option<f64>,
    /// Average of the last 12.
    pub ao12: Option<f64>,
    /// Best finished solve.
    pub pb: Option<f64>,
}

/// The time counted for a solve with `penalty`.
pub fn apply_penalty(time_ms: f64, penalty: Penalty) -> Option<f64> {
    match penalty {
        Penalty::Ok => Some(time_ms),
        Penalty::PlusTwo => Some(time_ms + 2000.0),
        Penalty::Dnf => None,
    }
}

fn finished_times(records: &[SolveRecord]) -> Vec<f64> {
    records
        .iter()
        .filter_map(SolveRecord::effective_ms)
        .filter(|t| t.is_finite())
        .collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Average of the last `n` solves, dropping the best and the worst.
///
/// A single DNF counts as the worst solve and is dropped. With more than one DNF, fewer than `n`
/// solves, or fewer than three finished solves in the window there is no average.
pub fn compute_ao_n(records: &[SolveRecord], n: usize) -> Option<f64> {
    if records.len() < n {
        return None;
    }
    let window = &records[records.len() - n..];

    let dnfs = window.iter().filter(|r| r.effective_ms().is_none()).count();
    if dnfs > 1 {
        return None;
    }

    let mut finished: Vec<f64> = window.iter().filter_map(SolveRecord::effective_ms).collect();
    if finished.len() < 3 {
        return None;
    }
    finished.sort_by(f64::total_cmp);
    // The best is always dropped. The worst is the DNF if there is one, and it is already gone.
    let worst = if dnfs == 1 { finished.len() } else { finished.len() - 1 };
    mean(&finished[1..worst])
}

/// Compute every statistic at once.
pub fn compute_stats(records: &[SolveRecord]) -> TimingStats {
    let times = finished_times(records);
    TimingStats {
        average: mean(&times),
        median: median(&times),
        ao5: compute_ao_n(records, 5),
        ao12: compute_ao_n(records, 12),
        pb: times.iter().copied().reduce(f64::min),
    }
}

/// Format a time for display: `-` for nothing, `12.34` below a minute and `1:02.50` above.
pub fn format_time(ms: Option<f64>) -> String {
    let Some(ms) = ms.filter(|ms| ms.is_finite()) else {
        return "-".to_owned();
    };

    // Round to centiseconds before splitting off the minutes.
    let centis = (ms / 10.0).round();
    let minutes = (centis / 6000.0).floor();
    let seconds = (centis - minutes * 6000.0) / 100.0;
    if minutes > 0.0 {
        format!("{minutes}:{seconds:05.2}")
    } else {
        format!("{seconds:.2}")
    }
}

/// Restricts which solves [`filter_solves`] keeps. `None` fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveFilter {
    /// Only solves of this case.
    pub case_id: Option<String>,
    /// Only solves in this group.
    pub group: Option<PllGroup>,
}

/// The solves matching `filter`, in their original order.
pub fn filter_solves(solves: &[SolveRecord], filter: &SolveFilter) -> Vec<SolveRecord> {
    solves
        .iter()
        .filter(|s| filter.case_id.as_ref().map_or(true, |id| *id == s.case_id))
        .filter(|s| filter.group.map_or(true, |g| g == s.group))
        .cloned()
        .collect()
}

/// Current version of [`ExportPayload`].
pub const EXPORT_VERSION: u32 = 1;

/// Exported solves, as written to and read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Format version, currently [`EXPORT_VERSION`].
    pub version: u32,
    /// When the export was made, as an RFC 3339 timestamp.
    pub exported_at: String,
    /// The solves.
    pub solves: Vec<SolveRecord>,
}

/// Wrap `solves` for export, stamped with the current time.
pub fn build_export_payload(solves: Vec<SolveRecord>) -> ExportPayload {
    ExportPayload {
        version: EXPORT_VERSION,
        exported_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        solves,
    }
}

/// Read solves from JSON. Both a full [`ExportPayload`] and a bare array of solves are
/// accepted.
pub fn parse_export_payload(json: &str) -> Result<Vec<SolveRecord>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let solves = match value {
        serde_json::Value::Array(solves) => serde_json::Value::Array(solves),
        serde_json::Value::Object(mut map) => match map.remove("solves") {
            Some(solves @ serde_json::Value::Array(_)) => solves,
            _ => return Err(ImportError::UnrecognisedShape),
        },
        _ => return Err(ImportError::UnrecognisedShape),
    };

    Ok(serde_json::from_value(solves)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(time_ms: f64, penalty: Penalty) -> SolveRecord {
        SolveRecord {
            id: format!("{time_ms}"),
            case_id: "T".to_owned(),
            group: PllGroup::Mixed,
            time_ms,
            penalty,
            timestamp: 0,
        }
    }

    fn solves(times: &[f64]) -> Vec<SolveRecord> {
        times.iter().map(|&t| solve(t, Penalty::Ok)).collect()
    }

    #[test]
    fn penalties() {
        assert_eq!(apply_penalty(1000.0, Penalty::Ok), Some(1000.0));
        assert_eq!(apply_penalty(1000.0, Penalty::PlusTwo), Some(3000.0));
        assert_eq!(apply_penalty(1000.0, Penalty::Dnf), None);
    }

    #[test]
    fn ao5_drops_best_and_worst() {
        let records = solves(&[9000.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0]);
        // Last five are 1..5 seconds, 1 and 5 dropped.
        assert_eq!(compute_ao_n(&records, 5), Some(3000.0));
        assert_eq!(compute_ao_n(&records[..4], 5), None);
    }

    #[test]
    fn ao5_with_dnfs() {
        let mut records = solves(&[1000.0, 2000.0, 3000.0, 4000.0]);
        records.push(solve(500.0, Penalty::Dnf));
        assert_eq!(compute_ao_n(&records, 5), Some(3000.0));

        records[0].penalty = Penalty::Dnf;
        assert_eq!(compute_ao_n(&records, 5), None);
    }

    #[test]
    fn ao5_with_plus_two() {
        let mut records = solves(&[1000.0, 2000.0, 3000.0, 4000.0, 5000.0]);
        records[0].penalty = Penalty::PlusTwo;
        assert_eq!(compute_ao_n(&records, 5), Some(10000.0 / 3.0));
    }

    #[test]
    fn stats() {
        let mut records = solves(&[4000.0, 2000.0, 3000.0, 1000.0]);
        records.push(solve(100.0, Penalty::Dnf));
        let stats = compute_stats(&records);
        assert_eq!(stats.average, Some(2500.0));
        assert_eq!(stats.median, Some(2500.0));
        assert_eq!(stats.pb, Some(1000.0));
        assert_eq!(stats.ao5, Some(3000.0));
        assert_eq!(stats.ao12, None);

        assert_eq!(compute_stats(&[]), TimingStats::default());
        assert_eq!(compute_stats(&solves(&[3.0, 1.0, 2.0])).median, Some(2.0));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_time(None), "-");
        assert_eq!(format_time(Some(f64::NAN)), "-");
        assert_eq!(format_time(Some(1234.0)), "1.23");
        assert_eq!(format_time(Some(0.0)), "0.00");
        assert_eq!(format_time(Some(62_500.0)), "1:02.50");
        assert_eq!(format_time(Some(125_000.0)), "2:05.00");
        assert_eq!(format_time(Some(119_996.0)), "2:00.00");
        assert_eq!(format_time(Some(59_996.0)), "1:00.00");
        assert_eq!(format_time(Some(59_994.0)), "59.99");
    }

    #[test]
    fn filtering() {
        let mut records = solves(&[1000.0, 2000.0, 3000.0]);
        records[1].case_id = "H".to_owned();
        records[1].group = PllGroup::Epll;

        let by_case = filter_solves(
            &records,
            &SolveFilter {
                case_id: Some("T".to_owned()),
                group: None,
            },
        );
        assert_eq!(by_case.len(), 2);

        let by_group = filter_solves(
            &records,
            &SolveFilter {
                case_id: None,
                group: Some(PllGroup::Epll),
            },
        );
        assert_eq!(by_group, [records[1].clone()]);
        assert_eq!(filter_solves(&records, &SolveFilter::default()), records);
    }

    #[test]
    fn export_round_trip() {
        let records = solves(&[1000.0, 2500.0]);
        let payload = build_export_payload(records.clone());
        assert_eq!(payload.version, EXPORT_VERSION);
        assert!(payload.exported_at.ends_with('Z'));

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"caseId\":\"T\""));
        assert_eq!(parse_export_payload(&json).unwrap(), records);
    }

    #[test]
    fn import_bare_array() {
        let json = r#"[{"id": "a", "caseId": "H", "group": "EPLL", "timeMs": 1500, "penalty": "+2", "timestamp": 1700000000000}]"#;
        let records = parse_export_payload(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].penalty, Penalty::PlusTwo);
        assert_eq!(records[0].effective_ms(), Some(3500.0));
    }

    #[test]
    fn import_rejects_other_shapes() {
        assert!(matches!(
            parse_export_payload(r#"{"version": 1}"#),
            Err(ImportError::UnrecognisedShape)
        ));
        assert!(matches!(
            parse_export_payload("42"),
            Err(ImportError::UnrecognisedShape)
        ));
        assert!(matches!(
            parse_export_payload("not json"),
            Err(ImportError::Json(_))
        ));
        assert!(matches!(
            parse_export_payload(r#"[{"id": "a"}]"#),
            Err(ImportError::Json(_))
        ));
    }
}
