use serde::Deserialize;

/// Device shadow update document, as delivered by the IoT rule.
///
/// Real documents also carry `metadata`, `version` and `timestamp` along
/// with the other reported fields; serde drops whatever is not declared
/// here.
#[derive(Debug, Deserialize)]
pub struct ShadowUpdate {
    pub state: ShadowState,
}

#[derive(Debug, Deserialize)]
pub struct ShadowState {
    pub reported: ReportedState,
}

#[derive(Debug, Deserialize)]
pub struct ReportedState {
    /// MQTT client id of the device that reported a finished cleaning run.
    #[serde(rename = "clientidStatus")]
    pub client_id: String,
}

impl ShadowUpdate {
    pub fn client_id(&self) -> &str {
        &self.state.reported.client_id
    }
}
