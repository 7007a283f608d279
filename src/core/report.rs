use crate::domain::model::TripReport;
use crate::utils::error::Result;

/// Plain-text result panel. The per-person split is only shown when the report asks for it.
pub fn render_text(report: &TripReport) -> String {
    let per_person = if report.show_detailed {
        format!(
            "Per person\n  Transport:  {}\n  Breathing:  {}\n  Total:      {}\n",
            report.transport_per_person, report.human_per_person, report.emission_per_person
        )
    } else {
        "Per person:   0 kg CO₂\n".to_string()
    };

    let trees = if report.trees_to_offset > 0 {
        format!("Trees needed to offset in a year: {}\n", report.trees_to_offset)
    } else {
        String::new()
    };

    format!(
        "Origin:       {}\nDestination:  {}\nDistance:     {}\nTransport:    {}\nPeople:       {}\n{}Total:        {}\n{}",
        report.origin,
        report.destination,
        report.distance,
        report.transport,
        report.people,
        per_person,
        report.emission,
        trees
    )
}

pub fn render_json(report: &TripReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
