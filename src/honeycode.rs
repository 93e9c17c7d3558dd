use aws_sdk_honeycode::types::{CellInput, Filter, UpdateRowData};
use tracing::warn;

use crate::config::Config;
use crate::error::HandlerError;

/// Column (by display name) that holds the MQTT client id of the device
/// paired with each row.
const CLIENT_ID_COLUMN: &str = "IoT";

/// Value written into the status column. Fixed; the event never supplies it.
const CLEANED: &str = "Cleaned";

/// The Honeycode table tracking cleaning status, one row per room.
///
/// Wraps the SDK client together with the identifiers addressing the table.
/// Rows are provisioned by hand in the workbook; this client only ever reads
/// and updates them.
#[derive(Debug)]
pub struct StatusTable {
    client: aws_sdk_honeycode::Client,
    config: Config,
}

impl StatusTable {
    pub fn new(client: aws_sdk_honeycode::Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Find the row whose client id column equals `client_id` and return its
    /// row id. The first match wins; zero matches is an error.
    pub async fn find_row(&self, client_id: &str) -> Result<String, HandlerError> {
        let filter = Filter::builder()
            .formula(filter_formula(&self.config.table_name, client_id))
            .build()?;

        let result = self
            .client
            .query_table_rows()
            .workbook_id(&self.config.workbook_id)
            .table_id(&self.config.table_id)
            .filter_formula(filter)
            .send()
            .await?;

        let rows = result.rows();
        if rows.len() > 1 {
            warn!(
                "{} rows match client id {}, updating the first",
                rows.len(),
                client_id
            );
        }

        let row = rows
            .first()
            .ok_or_else(|| HandlerError::NoMatchingRow(client_id.to_string()))?;

        Ok(row.row_id().to_string())
    }

    /// Write the cleaned marker into the status column of `row_id`.
    pub async fn mark_cleaned(&self, row_id: &str) -> Result<(), HandlerError> {
        let update = UpdateRowData::builder()
            .row_id(row_id)
            .cells_to_update(
                &self.config.status_column_id,
                CellInput::builder().fact(CLEANED).build(),
            )
            .build()?;

        let result = self
            .client
            .batch_update_table_rows()
            .workbook_id(&self.config.workbook_id)
            .table_id(&self.config.table_id)
            .rows_to_update(update)
            .send()
            .await?;

        for failed in result.failed_batch_items() {
            warn!("row {} was not updated: {}", failed.id(), failed.error_message());
        }

        Ok(())
    }
}

/// Server-side filter selecting rows by equality on the client id column.
/// The `%` placeholder is substituted by Honeycode with the trailing
/// argument.
fn filter_formula(table_name: &str, client_id: &str) -> String {
    format!(
        r#"=Filter({table},"{table}[{column}]=%","{id}")"#,
        table = table_name,
        column = CLIENT_ID_COLUMN,
        id = client_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_references_the_table_by_name() {
        assert_eq!(
            r#"=Filter(Rooms,"Rooms[IoT]=%","0123456789abcdef01")"#,
            filter_formula("Rooms", "0123456789abcdef01")
        );
    }
}
