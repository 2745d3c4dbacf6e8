use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::deserialize_decimal;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(rename = "paymentIntentId", default)]
    pub payment_intent_id: Option<String>,
    #[serde(rename = "refundStatus", default)]
    pub refund_status: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of `transaction/all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TransactionPage {
    #[serde(default)]
    pub rows: Vec<Transaction>,
    #[serde(default)]
    pub count: u64,
}

impl TransactionPage {
    /// Number of pages needed for `count` rows at `limit` per page
    pub fn page_count(&self, limit: u32) -> u64 {
        if limit == 0 {
            return 0;
        }
        self.count.div_ceil(u64::from(limit))
    }
}
