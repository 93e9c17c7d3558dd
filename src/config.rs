use std::env;

use crate::error::HandlerError;

/// Addressing for the Honeycode table this function writes to.
///
/// Every id here is an opaque resource id provisioned by hand in the
/// workbook; none of them can be discovered at runtime, so all of them must
/// be supplied through the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub workbook_id: String,
    pub table_id: String,
    /// Display name of the table. Honeycode filter formulas reference tables
    /// by name, not by resource id.
    pub table_name: String,
    /// Column that receives the cleaned marker.
    pub status_column_id: String,
}

fn env_required(key: &'static str) -> Result<String, HandlerError> {
    env::var(key).map_err(|_| HandlerError::MissingConfig(key))
}

impl Config {
    pub fn from_env() -> Result<Self, HandlerError> {
        Ok(Self {
            workbook_id: env_required("HONEYCODE_WORKBOOK_ID")?,
            table_id: env_required("HONEYCODE_TABLE_ID")?,
            table_name: env_required("HONEYCODE_TABLE_NAME")?,
            status_column_id: env_required("HONEYCODE_STATUS_COLUMN_ID")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "HONEYCODE_WORKBOOK_ID",
        "HONEYCODE_TABLE_ID",
        "HONEYCODE_TABLE_NAME",
        "HONEYCODE_STATUS_COLUMN_ID",
    ];

    // Single test so the process-wide environment is only touched from one
    // place while the harness runs tests in parallel.
    #[test]
    fn from_env_requires_every_identifier() {
        for var in VARS {
            env::set_var(var, "test-value");
        }

        let config = Config::from_env().expect("fully populated environment");
        assert_eq!("test-value", config.workbook_id);
        assert_eq!("test-value", config.status_column_id);

        env::remove_var("HONEYCODE_TABLE_NAME");
        let err = Config::from_env().expect_err("missing table name");
        assert!(matches!(
            err,
            HandlerError::MissingConfig("HONEYCODE_TABLE_NAME")
        ));

        for var in VARS {
            env::remove_var(var);
        }
    }
}
