use lambda_runtime::LambdaEvent;
use serde::Serialize;
use tracing::info;

use crate::error::HandlerError;
use crate::honeycode::StatusTable;
use crate::shadow::ShadowUpdate;

const SUCCESS_BODY: &str = "SUCCESS";

/// Response shape expected by the invoking IoT rule.
#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Handle one shadow update: look up the row paired with the reporting
/// device and mark it cleaned.
#[tracing::instrument(skip(table))]
pub async fn process_event(
    event: LambdaEvent<ShadowUpdate>,
    table: &StatusTable,
) -> Result<Response, HandlerError> {
    let client_id = event.payload.client_id();
    info!("device {} reported a finished cleaning run", client_id);

    let row_id = table.find_row(client_id).await?;
    table.mark_cleaned(&row_id).await?;
    info!("marked row {} as cleaned", row_id);

    Ok(Response {
        status_code: 200,
        body: SUCCESS_BODY.into(),
    })
}
