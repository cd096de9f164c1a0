//! Option sets for every console select, loaded from the embedded JSON document.

use console_ui::SelectOptionSpec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_OPTIONS: &str = include_str!("options.json");

#[derive(Debug, Error)]
/// Console configuration failures.
pub enum ConfigError {
    /// The option document is not valid JSON for [`ConsoleOptionSets`].
    #[error("invalid console option sets: {0}")]
    Parse(#[from] serde_json::Error),
    /// A named option set has no entries.
    #[error("option set `{0}` is empty")]
    EmptySet(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Every option list the console renders.
pub struct ConsoleOptionSets {
    /// Order fulfilment states for the orders filter.
    pub order_status: Vec<SelectOptionSpec>,
    /// Delivery channels for marketing campaigns.
    pub marketing_channel: Vec<SelectOptionSpec>,
    /// Campaign templates.
    pub campaign_type: Vec<SelectOptionSpec>,
    /// Store regions.
    pub region: Vec<SelectOptionSpec>,
    /// Settlement currencies.
    pub currency: Vec<SelectOptionSpec>,
}

impl ConsoleOptionSets {
    /// Parses and validates an option document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::EmptySet`] when
    /// any list is empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let sets: Self = serde_json::from_str(raw)?;
        sets.validate()?;
        Ok(sets)
    }

    /// Option sets shipped with the console.
    ///
    /// # Errors
    ///
    /// See [`ConsoleOptionSets::from_json`].
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_OPTIONS)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sets = [
            ("order_status", &self.order_status),
            ("marketing_channel", &self.marketing_channel),
            ("campaign_type", &self.campaign_type),
            ("region", &self.region),
            ("currency", &self.currency),
        ];
        match sets.into_iter().find(|(_, options)| options.is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptySet(name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_sets_parse() {
        let sets = ConsoleOptionSets::embedded().expect("embedded options");
        assert_eq!(sets.region.len(), 2);
        assert_eq!(sets.region[0], SelectOptionSpec::new("east", "Eastern"));
        assert_eq!(sets.order_status[0].value.as_deref(), Some("pending"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ConsoleOptionSets::from_json("{ not json").expect_err("malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid console option sets"));
    }

    #[test]
    fn empty_set_is_rejected() {
        let raw = r#"{
            "order_status": [{ "value": "paid", "label": "Paid" }],
            "marketing_channel": [{ "value": "email", "label": "Email" }],
            "campaign_type": [],
            "region": [{ "value": "east", "label": "Eastern" }],
            "currency": [{ "value": "usd", "label": "US dollar" }]
        }"#;
        let err = ConsoleOptionSets::from_json(raw).expect_err("empty set");
        assert_eq!(err.to_string(), "option set `campaign_type` is empty");
    }
}
