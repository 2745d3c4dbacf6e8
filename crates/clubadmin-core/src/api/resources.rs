//! Resource endpoints consumed by the admin screens.
//!
//! Shapes are owned by the backend; these methods only name the paths and
//! the payload types.

use serde::Serialize;

use crate::models::{
    Club, MonthlyUserStatistic, NewClubAccount, NewSport, Plan, PlanInput, Sport,
    SubscriptionStatistics, TransactionPage, TransactionSummary, User, WalletBalance,
};

use super::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct PageQuery {
    page: u32,
    limit: u32,
}

impl ApiClient {
    // ===== Clubs =====

    pub async fn fetch_clubs(&self) -> Result<Vec<Club>, ApiError> {
        self.get("club/all").await
    }

    /// Register a club manager account (the "Add Club" form)
    pub async fn register_club(
        &self,
        account: &NewClubAccount,
    ) -> Result<serde_json::Value, ApiError> {
        self.post("auth/register", account).await
    }

    // ===== Users =====

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("user/all").await
    }

    // ===== Sports =====

    pub async fn fetch_sports(&self) -> Result<Vec<Sport>, ApiError> {
        self.get("sport/all").await
    }

    pub async fn add_sport(&self, sport: &NewSport) -> Result<Sport, ApiError> {
        self.post("sport/add", sport).await
    }

    pub async fn delete_sport(&self, id: i64) -> Result<(), ApiError> {
        self.delete::<serde_json::Value>(&format!("sport/delete/{}", id))
            .await
            .map(|_| ())
    }

    // ===== Plans =====

    pub async fn fetch_plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.get("plan/all").await
    }

    pub async fn add_plan(&self, plan: &PlanInput) -> Result<Plan, ApiError> {
        self.post("plan/add", plan).await
    }

    pub async fn update_plan(&self, id: i64, plan: &PlanInput) -> Result<(), ApiError> {
        self.put::<serde_json::Value, _>(&format!("plan/update/{}", id), plan)
            .await
            .map(|_| ())
    }

    pub async fn delete_plan(&self, id: i64) -> Result<(), ApiError> {
        self.delete::<serde_json::Value>(&format!("plan/delete/{}", id))
            .await
            .map(|_| ())
    }

    // ===== Transactions =====

    pub async fn fetch_transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<TransactionPage, ApiError> {
        self.get_with_query("transaction/all", &PageQuery { page, limit })
            .await
    }

    pub async fn fetch_transaction_summary(&self) -> Result<TransactionSummary, ApiError> {
        self.get("transaction/summary").await
    }

    // ===== Dashboard aggregates =====

    pub async fn fetch_monthly_user_statistics(
        &self,
    ) -> Result<Vec<MonthlyUserStatistic>, ApiError> {
        self.get("user/monthly-statistics").await
    }

    pub async fn fetch_subscription_statistics(&self) -> Result<SubscriptionStatistics, ApiError> {
        self.get("subscription/statistics").await
    }

    pub async fn fetch_wallet(&self) -> Result<WalletBalance, ApiError> {
        self.get("wallet").await
    }
}

