use crate::mvu::error::AppError;
use crate::score::ScorecardTable;

pub const CSV_FILE_NAME: &str = "golf_scorecard.csv";

/// Delimited export of the scorecard: the header row, then the player's
/// name and eighteen cells per row. Unset holes are empty cells.
///
/// # Errors
///
/// Returns `AppError::Export` if the csv writer fails.
pub fn to_csv(table: &ScorecardTable) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        let cells = std::iter::once(row.player.clone()).chain(
            row.holes
                .iter()
                .map(|score| score.map(|s| s.to_string()).unwrap_or_default()),
        );
        writer.write_record(cells)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}
