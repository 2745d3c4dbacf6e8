//! Data models for the club platform's resources.
//!
//! - `Club`, `NewClubAccount`: clubs and club-manager registration
//! - `User`, `UserRole`: platform accounts
//! - `Sport`, `Plan`: catalog entries the admin edits
//! - `Transaction`, `TransactionPage`: paginated payment history
//! - Dashboard aggregates: `TransactionSummary`, `MonthlyUserStatistic`,
//!   `SubscriptionStatistics`, `WalletBalance`

mod de;

pub mod club;
pub mod plan;
pub mod sport;
pub mod stats;
pub mod transaction;
pub mod user;

pub use club::{Club, NewClubAccount, CLUB_MANAGER_ROLE_ID};
pub use plan::{Plan, PlanInput};
pub use sport::{NewSport, Sport};
pub use stats::{
    Dashboard, MonthlyUserStatistic, SubscriptionStatistics, TransactionSummary, WalletBalance,
};
pub use transaction::{Transaction, TransactionPage};
pub use user::{User, UserRole};
