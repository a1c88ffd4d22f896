use anyhow::Context;

use crate::model::BatchFailureMode;

#[derive(Debug, Clone)]
pub struct Config {
    /// The DynamoDB table file statuses are written to
    pub dynamo_table_name: String,

    /// How a failing message affects the rest of its batch
    pub batch_failure_mode: BatchFailureMode,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let dynamo_table_name = lookup("DYNAMO_TABLE_NAME")
            .filter(|name| !name.is_empty())
            .context("DYNAMO_TABLE_NAME must be provided")?;

        let batch_failure_mode = match lookup("BATCH_FAILURE_MODE") {
            Some(mode) => mode
                .parse::<BatchFailureMode>()
                .with_context(|| format!("BATCH_FAILURE_MODE {mode} is not recognized"))?,
            None => BatchFailureMode::default(),
        };

        Ok(Config {
            dynamo_table_name,
            batch_failure_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn requires_table_name() {
        let err = config_from(&[]).unwrap_err();
        assert_eq!(err.to_string(), "DYNAMO_TABLE_NAME must be provided");

        assert!(config_from(&[("DYNAMO_TABLE_NAME", "")]).is_err());
    }

    #[test]
    fn defaults_to_fail_fast() {
        let config = config_from(&[("DYNAMO_TABLE_NAME", "file-status")]).unwrap();

        assert_eq!(config.dynamo_table_name, "file-status");
        assert_eq!(config.batch_failure_mode, BatchFailureMode::FailFast);
    }

    #[test]
    fn reads_failure_mode() {
        let config = config_from(&[
            ("DYNAMO_TABLE_NAME", "file-status"),
            ("BATCH_FAILURE_MODE", "report_item_failures"),
        ])
        .unwrap();

        assert_eq!(
            config.batch_failure_mode,
            BatchFailureMode::ReportItemFailures
        );
    }

    #[test]
    fn rejects_unknown_failure_mode() {
        let err = config_from(&[
            ("DYNAMO_TABLE_NAME", "file-status"),
            ("BATCH_FAILURE_MODE", "retry_forever"),
        ])
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "BATCH_FAILURE_MODE retry_forever is not recognized"
        );
    }
}
