use crate::core::calculator::TripCalculator;
use crate::domain::model::TripRequest;
use crate::domain::ports::{DistanceLookup, TransportCatalog};
use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One input line: `origin,destination,transport,people`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRow {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub transport: Option<String>,
    pub people: Option<String>,
}

impl From<TripRow> for TripRequest {
    fn from(row: TripRow) -> Self {
        Self {
            origin: row.origin,
            destination: row.destination,
            transport_id: row.transport,
            // Unparseable counts are treated as missing.
            people: row.people.and_then(|p| p.trim().parse::<i64>().ok()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultRow {
    pub origin: String,
    pub destination: String,
    pub transport: String,
    pub people: String,
    pub distance: String,
    pub transport_per_person: String,
    pub human_per_person: String,
    pub emission_per_person: String,
    pub emission: String,
    pub total_kg: Option<f64>,
    pub trees_to_offset: Option<u64>,
    pub error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Calculates every row of `input` and writes one result row per trip to `output`.
///
/// Rejected trips are written with their validation message in the `error`
/// column; only malformed CSV or I/O failures abort the run.
pub fn run_batch<D, T, R, W>(calculator: &TripCalculator<D, T>, input: R, output: W) -> Result<BatchSummary>
where
    D: DistanceLookup,
    T: TransportCatalog,
    R: Read,
    W: Write,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (line, row) in reader.deserialize::<TripRow>().enumerate() {
        let request = TripRequest::from(row?);
        summary.processed += 1;

        let result = match calculator.calculate(&request) {
            Ok(report) => {
                summary.succeeded += 1;
                ResultRow {
                    origin: report.origin,
                    destination: report.destination,
                    transport: report.transport,
                    people: report.people.to_string(),
                    distance: report.distance,
                    transport_per_person: report.transport_per_person,
                    human_per_person: report.human_per_person,
                    emission_per_person: report.emission_per_person,
                    emission: report.emission,
                    total_kg: Some(report.total_kg),
                    trees_to_offset: Some(report.trees_to_offset),
                    error: String::new(),
                }
            }
            Err(CalcError::ValidationError { message }) => {
                summary.failed += 1;
                tracing::warn!("Row {}: {}", line + 1, message);
                ResultRow {
                    origin: request.origin.unwrap_or_default(),
                    destination: request.destination.unwrap_or_default(),
                    transport: request.transport_id.unwrap_or_default(),
                    people: request.people.map(|p| p.to_string()).unwrap_or_default(),
                    error: message,
                    ..ResultRow::default()
                }
            }
            Err(e) => return Err(e),
        };

        writer.serialize(result)?;
    }

    writer.flush()?;
    tracing::info!(
        "Batch finished: {} processed, {} succeeded, {} failed",
        summary.processed,
        summary.succeeded,
        summary.failed
    );
    Ok(summary)
}
