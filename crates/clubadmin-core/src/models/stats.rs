use serde::{Deserialize, Serialize};

use super::de::deserialize_decimal;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TransactionSummary {
    pub total_transactions: i64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub total_amount: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub average_amount: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub max_amount: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub min_amount: String,
}

impl Default for TransactionSummary {
    fn default() -> Self {
        Self {
            total_transactions: 0,
            total_amount: "0.00".to_string(),
            average_amount: "0.00".to_string(),
            max_amount: "0.00".to_string(),
            min_amount: "0.00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct MonthlyUserStatistic {
    pub month: u32,
    pub total: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SubscriptionStatistics {
    pub total_subscriptions: i64,
    pub active_subscriptions: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct WalletBalance {
    #[serde(default)]
    pub balance: f64,
}

/// Everything the home screen shows
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    pub wallet: WalletBalance,
    pub transactions: TransactionSummary,
    pub monthly_users: Vec<MonthlyUserStatistic>,
    pub subscriptions: SubscriptionStatistics,
}

impl Dashboard {
    /// (label, total) points for the monthly sign-up chart
    pub fn monthly_series(&self) -> Vec<(String, i64)> {
        self.monthly_users
            .iter()
            .map(|stat| (format!("Month {}", stat.month), stat.total))
            .collect()
    }

    pub fn inactive_subscriptions(&self) -> i64 {
        (self.subscriptions.total_subscriptions - self.subscriptions.active_subscriptions).max(0)
    }
}
