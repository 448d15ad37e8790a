//! `search` and `details` commands.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use placesearch_client::display::{detail_lines, failure_message, ListEntry, ListIcon};
use placesearch_client::{
    DetailQuery, OperationOutcome, PlaceDetail, PlacesService, PredictionQuery, PredictionRecord,
};

pub(crate) struct SearchArgs {
    pub(crate) input: String,
    pub(crate) place_type: String,
    pub(crate) region: String,
    pub(crate) select: Option<usize>,
}

pub(crate) async fn run_search(
    service: &PlacesService,
    args: SearchArgs,
    save_icon: Option<&Path>,
) -> anyhow::Result<()> {
    let query = PredictionQuery::new(args.input.as_str())?
        .with_type_filter(&args.place_type)
        .with_region_filter(&args.region);

    let mut result = None;
    service
        .search_predictions(
            query,
            || eprintln!("Fetching predictions in background..."),
            |outcome| result = Some(outcome),
        )
        .await;
    let records = finish(result)?;

    println!("Predictions ({})", args.input);
    print!("{}", render_predictions(&records));

    let Some(position) = args.select else {
        return Ok(());
    };
    let record = select_prediction(&records, position)?;
    println!();
    run_details(service, &record.place_id, save_icon).await
}

pub(crate) async fn run_details(
    service: &PlacesService,
    place_id: &str,
    save_icon: Option<&Path>,
) -> anyhow::Result<()> {
    let query = DetailQuery::new(place_id)?;

    let mut result = None;
    service
        .fetch_detail(
            query,
            || eprintln!("Fetching place details in background..."),
            |outcome| result = Some(outcome),
        )
        .await;
    let detail = finish(result)?;

    for line in detail_lines(&detail) {
        println!("{line}");
    }
    if let Some(path) = save_icon {
        save_place_icon(&detail, path)?;
    }
    Ok(())
}

/// Turns a delivered outcome into the command result, with the
/// user-facing message for failures.
fn finish<T>(result: Option<OperationOutcome<T>>) -> anyhow::Result<T> {
    match result {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => {
            tracing::error!(kind = err.kind().as_str(), error = %err, "query failed");
            Err(anyhow::anyhow!(failure_message(&err)))
        }
        None => anyhow::bail!("query finished without an outcome"),
    }
}

fn render_predictions(records: &[PredictionRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let entry = ListEntry::from(record);
        let glyph = match entry.icon {
            ListIcon::Pin => '*',
        };
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{glyph} {:>2}. {}\n       {}",
            i + 1,
            entry.caption,
            entry.subheader
        );
    }
    out
}

fn select_prediction(
    records: &[PredictionRecord],
    position: usize,
) -> anyhow::Result<&PredictionRecord> {
    position
        .checked_sub(1)
        .and_then(|index| records.get(index))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "--select {position} is out of range ({} predictions)",
                records.len()
            )
        })
}

fn save_place_icon(detail: &PlaceDetail, path: &Path) -> anyhow::Result<()> {
    let Some(icon) = &detail.icon else {
        eprintln!("Place has no icon; nothing written.");
        return Ok(());
    };
    icon.image
        .save(path)
        .with_context(|| format!("failed to write icon to {}", path.display()))?;
    eprintln!("Icon written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use placesearch_client::{PlacesError, ServiceStatus};

    use super::*;

    fn record(description: &str, place_id: &str, types: &[&str]) -> PredictionRecord {
        PredictionRecord {
            description: description.to_string(),
            id: format!("legacy-{place_id}"),
            place_id: place_id.to_string(),
            reference: format!("ref-{place_id}"),
            types: types.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn renders_numbered_predictions() {
        let records = vec![
            record("Karlsruhe, Deutschland", "a", &["Gegend", "political"]),
            record("Karlsruher Straße", "b", &[]),
        ];
        let out = render_predictions(&records);
        assert_eq!(
            out,
            "*  1. Karlsruhe, Deutschland\n       [Gegend, political]\n*  2. Karlsruher Straße\n       []\n"
        );
    }

    #[test]
    fn select_is_one_based() {
        let records = vec![record("A", "a", &[]), record("B", "b", &[])];
        assert_eq!(select_prediction(&records, 2).unwrap().place_id, "b");
        assert!(select_prediction(&records, 0).is_err());
        assert!(select_prediction(&records, 3).is_err());
    }

    #[test]
    fn failure_uses_user_facing_message() {
        let outcome: OperationOutcome<()> = Err(PlacesError::RemoteStatus {
            status: ServiceStatus::ZeroResults,
            message: ServiceStatus::ZeroResults.message().to_string(),
        });
        let err = finish(Some(outcome)).unwrap_err();
        assert_eq!(err.to_string(), "No results, try again.");
    }

    #[test]
    fn missing_outcome_is_an_error() {
        assert!(finish::<()>(None).is_err());
    }
}
