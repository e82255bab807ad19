use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;
use tempora_types::{Confidence, TemporaError};

const TABLE_CSV: &str = include_str!("tdistribution.csv");

// Row used for every degree of freedom above 120 (normal limit).
const NORMAL_LIMIT_DOF: i32 = 121;

#[derive(Debug, Deserialize)]
struct Row {
    dof: i32,
    crit90: f64,
    crit95: f64,
    crit99: f64,
    crit999: f64,
}

#[derive(Debug)]
struct TTable {
    rows: BTreeMap<i32, Row>,
}

impl TTable {
    fn lookup(&self, dof: i32, confidence: Confidence) -> Option<f64> {
        let row = self.rows.get(&dof)?;
        Some(match confidence {
            Confidence::C90 => row.crit90,
            Confidence::C95 => row.crit95,
            Confidence::C99 => row.crit99,
            Confidence::C99p9 => row.crit999,
        })
    }
}

static T_TABLE: LazyLock<Result<TTable, TemporaError>> = LazyLock::new(load_table);

fn load_table() -> Result<TTable, TemporaError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(TABLE_CSV.as_bytes());
    let mut rows = BTreeMap::new();
    for record in reader.deserialize::<Row>() {
        let row = record.map_err(|e| TemporaError::computation("t-distribution table", e))?;
        rows.insert(row.dof, row);
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(rows = rows.len(), "loaded t-distribution table");
    Ok(TTable { rows })
}

/// Row of the critical-value table used for `dof` degrees of freedom.
///
/// Values up to 30 and exactly 120 map to themselves; larger values fall back
/// to the nearest tabulated row below (30, 40, 50, 60, 80, 100), and anything
/// beyond 120 uses the normal-limit row. Non-positive input maps to 0.
#[must_use]
pub const fn map_degrees_of_freedom(dof: i32) -> i32 {
    match dof {
        i32::MIN..=0 => 0,
        1..=30 | 120 => dof,
        31..=39 => 30,
        40..=49 => 40,
        50..=59 => 50,
        60..=79 => 60,
        80..=99 => 80,
        100..=119 => 100,
        _ => NORMAL_LIMIT_DOF,
    }
}

/// Two-sided Student-t critical value.
///
/// Non-positive `dof` returns `f64::MAX`, which no statistic can exceed.
///
/// # Errors
/// Returns `Computation` if the embedded table failed to load or lacks the mapped row.
pub fn t_critical(dof: i32, confidence: Confidence) -> Result<f64, TemporaError> {
    if dof <= 0 {
        return Ok(f64::MAX);
    }
    let table = T_TABLE.as_ref().map_err(Clone::clone)?;
    let mapped = map_degrees_of_freedom(dof);
    table.lookup(mapped, confidence).ok_or_else(|| {
        TemporaError::computation(
            "t-distribution table",
            format!("no row for {mapped} degrees of freedom"),
        )
    })
}

/// `true` if `|(sample_mean - population_mean) / population_stdev|` exceeds the
/// critical value for `population_size - 1` degrees of freedom.
///
/// A zero deviation compares NaN or infinity against the critical value, so a
/// value equal to the mean is never different and any other value always is.
///
/// # Errors
/// Returns `Computation` when the critical value is unavailable.
pub fn sample_mean_is_statistically_different(
    sample_mean: f64,
    population_mean: f64,
    population_size: usize,
    population_stdev: f64,
    confidence: Confidence,
) -> Result<bool, TemporaError> {
    let dof = i32::try_from(population_size).map_or(i32::MAX, |n| n - 1);
    let critical = t_critical(dof, confidence).map_err(|e| e.within("t-test"))?;
    Ok(((sample_mean - population_mean) / population_stdev).abs() > critical)
}
