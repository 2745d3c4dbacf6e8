//! Admin facade used by the front ends.
//!
//! `AdminApp` owns the core services (config, session guard, gateway) and
//! routes every call through the `Reporter`, so a front end only has to
//! render data and never has to remember to show an error.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::api::{ApiClient, ApiError, Freshness};
use crate::auth::{Route, SessionGuard, SessionState, TokenStore};
use crate::config::Config;
use crate::models::{
    Club, Dashboard, NewClubAccount, NewSport, Plan, PlanInput, Sport, TransactionPage, User,
};
use crate::notify::{Notifier, Reporter};

pub struct AdminApp {
    pub config: Config,
    pub guard: Arc<SessionGuard>,
    pub api: ApiClient,
    reporter: Reporter,
    freshness: Freshness,
}

impl AdminApp {
    pub fn new(
        config: Config,
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> anyhow::Result<Self> {
        let api = ApiClient::new(&config, store.clone())?;
        let guard = Arc::new(SessionGuard::new(store, api.clone()));
        debug!(base_url = api.base_url(), "Admin app ready");

        Ok(Self {
            config,
            guard,
            api,
            reporter: Reporter::new(notifier),
            freshness: Freshness::new(),
        })
    }

    /// Build with the credential store the config selects
    pub fn from_config(config: Config, notifier: Arc<dyn Notifier>) -> anyhow::Result<Self> {
        let store = config.token_store()?;
        Self::new(config, store, notifier)
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn navigate(&self, route: Route) -> Route {
        self.guard.resolve(route)
    }

    pub fn is_authenticated(&self) -> bool {
        self.guard.is_authenticated()
    }

    pub fn session_state(&self) -> SessionState {
        self.guard.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.guard.subscribe()
    }

    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), ApiError> {
        self.reporter.report(self.guard.login(identifier, secret).await)?;
        self.reporter.success("Signed in");
        Ok(())
    }

    pub fn logout(&self) {
        self.guard.logout();
        self.reporter.info("Signed out");
    }

    // =========================================================================
    // Loading
    // =========================================================================

    fn reported<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ref e) = result {
            if e.is_unauthorized() {
                self.guard.check();
            }
        }
        self.reporter.report(result)
    }

    /// Run a load for `key`. Failures are always reported; a success is
    /// dropped (`Ok(None)`) if a newer load for the same key already landed.
    async fn load<T, F>(&self, key: &str, fetch: F) -> Result<Option<T>, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.freshness.begin(key);
        let value = self.reported(fetch.await)?;
        Ok(self.freshness.complete(&ticket).then_some(value))
    }

    pub async fn clubs(&self) -> Result<Option<Vec<Club>>, ApiError> {
        self.load("clubs", self.api.fetch_clubs()).await
    }

    pub async fn users(&self) -> Result<Option<Vec<User>>, ApiError> {
        self.load("users", self.api.fetch_users()).await
    }

    pub async fn sports(&self) -> Result<Option<Vec<Sport>>, ApiError> {
        self.load("sports", self.api.fetch_sports()).await
    }

    pub async fn plans(&self) -> Result<Option<Vec<Plan>>, ApiError> {
        self.load("plans", self.api.fetch_plans()).await
    }

    pub async fn transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Option<TransactionPage>, ApiError> {
        self.load("transactions", self.api.fetch_transactions(page, limit))
            .await
    }

    pub async fn dashboard(&self) -> Result<Option<Dashboard>, ApiError> {
        let api = &self.api;
        self.load("dashboard", async move {
            let (wallet, transactions, monthly_users, subscriptions) = futures::try_join!(
                api.fetch_wallet(),
                api.fetch_transaction_summary(),
                api.fetch_monthly_user_statistics(),
                api.fetch_subscription_statistics()
            )?;
            Ok::<_, ApiError>(Dashboard {
                wallet,
                transactions,
                monthly_users,
                subscriptions,
            })
        })
        .await
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub async fn add_club(&self, account: &NewClubAccount) -> Result<(), ApiError> {
        self.reported(self.api.register_club(account).await)?;
        self.reporter.success("Club added successfully!");
        Ok(())
    }

    pub async fn add_sport(&self, name: &str) -> Result<Sport, ApiError> {
        let sport = NewSport {
            name: name.to_string(),
        };
        let created = self.reported(self.api.add_sport(&sport).await)?;
        self.reporter.success("Sport added successfully!");
        Ok(created)
    }

    pub async fn delete_sport(&self, id: i64) -> Result<(), ApiError> {
        self.reported(self.api.delete_sport(id).await)?;
        self.reporter.success("Sport deleted successfully!");
        Ok(())
    }

    pub async fn add_plan(&self, plan: &PlanInput) -> Result<Plan, ApiError> {
        let created = self.reported(self.api.add_plan(plan).await)?;
        self.reporter.success("Plan added successfully!");
        Ok(created)
    }

    pub async fn update_plan(&self, id: i64, plan: &PlanInput) -> Result<(), ApiError> {
        self.reported(self.api.update_plan(id, plan).await)?;
        self.reporter.success("Plan updated successfully!");
        Ok(())
    }

    pub async fn delete_plan(&self, id: i64) -> Result<(), ApiError> {
        self.reported(self.api.delete_plan(id).await)?;
        self.reporter.success("Plan deleted successfully!");
        Ok(())
    }
}
