//! Plain-text tables for command output.

use clubadmin_core::models::{Club, Dashboard, Plan, Sport, TransactionPage, User};
use clubadmin_core::utils::{format_date, format_money, format_phone, truncate_string};

/// Widest a free-text column is allowed to get
const TEXT_COLUMN_WIDTH: usize = 28;

pub fn clubs(clubs: &[Club]) -> String {
    let mut out = format!("{:<6} {:<28} {:<28} {:<8}\n", "ID", "Name", "Location", "Status");
    for club in clubs {
        out.push_str(&format!(
            "{:<6} {:<28} {:<28} {:<8}\n",
            club.id,
            truncate_string(&club.name, TEXT_COLUMN_WIDTH),
            truncate_string(club.location.as_deref().unwrap_or("-"), TEXT_COLUMN_WIDTH),
            club.status_label(),
        ));
    }
    out.push_str(&format!("{} clubs\n", clubs.len()));
    out
}

pub fn users(users: &[User]) -> String {
    let mut out = format!(
        "{:<6} {:<20} {:<28} {:<16} {:<8} {:<9} {:<12}\n",
        "ID", "Username", "Email", "Phone", "Type", "Verified", "Joined"
    );
    for user in users {
        out.push_str(&format!(
            "{:<6} {:<20} {:<28} {:<16} {:<8} {:<9} {:<12}\n",
            user.id,
            truncate_string(&user.username, 20),
            truncate_string(&user.email, TEXT_COLUMN_WIDTH),
            user.phone_number.as_deref().map(format_phone).unwrap_or_else(|| "-".to_string()),
            user.role().to_string(),
            if user.is_verified { "yes" } else { "no" },
            format_date(user.created_at.as_ref()),
        ));
    }
    out.push_str(&format!("{} users\n", users.len()));
    out
}

pub fn sports(sports: &[Sport]) -> String {
    let mut out = format!("{:<6} {:<28}\n", "ID", "Name");
    for sport in sports {
        out.push_str(&format!(
            "{:<6} {:<28}\n",
            sport.id,
            truncate_string(&sport.name, TEXT_COLUMN_WIDTH)
        ));
    }
    out
}

pub fn plans(plans: &[Plan]) -> String {
    let mut out = format!("{:<6} {:<28} {:>10} {:>8}\n", "ID", "Name", "Price", "Days");
    for plan in plans {
        out.push_str(&format!(
            "{:<6} {:<28} {:>10} {:>8}\n",
            plan.id,
            truncate_string(&plan.name, TEXT_COLUMN_WIDTH),
            format_money(&plan.price),
            plan.duration,
        ));
    }
    out
}

pub fn transactions(page: &TransactionPage, page_number: u32, limit: u32) -> String {
    let mut out = format!(
        "{:<8} {:>10} {:<14} {:<12} {:<28} {:<10} {:<12}\n",
        "User", "Amount", "Type", "Status", "Payment intent", "Refund", "Created"
    );
    for tx in &page.rows {
        out.push_str(&format!(
            "{:<8} {:>10} {:<14} {:<12} {:<28} {:<10} {:<12}\n",
            tx.user_id,
            format_money(&tx.amount),
            truncate_string(&tx.kind, 14),
            truncate_string(&tx.status, 12),
            truncate_string(tx.payment_intent_id.as_deref().unwrap_or("-"), TEXT_COLUMN_WIDTH),
            tx.refund_status.as_deref().unwrap_or("-"),
            format_date(tx.created_at.as_ref()),
        ));
    }
    out.push_str(&format!(
        "page {} of {} ({} transactions)\n",
        page_number,
        page.page_count(limit).max(1),
        page.count
    ));
    out
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let tx = &dashboard.transactions;
    let subs = &dashboard.subscriptions;

    let mut out = String::new();
    out.push_str(&format!("Wallet balance        {:.2}\n", dashboard.wallet.balance));
    out.push_str(&format!("Transactions          {}\n", tx.total_transactions));
    out.push_str(&format!("  total               {}\n", format_money(&tx.total_amount)));
    out.push_str(&format!("  average             {}\n", format_money(&tx.average_amount)));
    out.push_str(&format!(
        "  max / min           {} / {}\n",
        format_money(&tx.max_amount),
        format_money(&tx.min_amount)
    ));
    out.push_str(&format!(
        "Subscriptions         {} ({} active, {} inactive)\n",
        subs.total_subscriptions,
        subs.active_subscriptions,
        dashboard.inactive_subscriptions()
    ));
    out.push_str(&format!("Subscription revenue  {:.2}\n", subs.revenue));

    let series = dashboard.monthly_series();
    if !series.is_empty() {
        out.push_str("New users per month\n");
        for (label, total) in series {
            out.push_str(&format!("  {:<10} {}\n", label, total));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubadmin_core::models::{MonthlyUserStatistic, SubscriptionStatistics};

    #[test]
    fn test_clubs_table() {
        let rows = vec![Club {
            id: 3,
            name: "Harbour Rowing".to_string(),
            description: None,
            location: None,
            pic: None,
            is_blocked: false,
            user_id: Some(8),
        }];
        let table = clubs(&rows);
        assert!(table.contains("Harbour Rowing"));
        assert!(table.contains("Active"));
        assert!(table.ends_with("1 clubs\n"));
    }

    #[test]
    fn test_transactions_footer() {
        let page = TransactionPage { rows: vec![], count: 0 };
        assert!(transactions(&page, 1, 10).ends_with("page 1 of 1 (0 transactions)\n"));
    }

    #[test]
    fn test_dashboard_lists_months() {
        let data = Dashboard {
            monthly_users: vec![MonthlyUserStatistic { month: 3, total: 12 }],
            subscriptions: SubscriptionStatistics {
                total_subscriptions: 5,
                active_subscriptions: 2,
                revenue: 99.0,
            },
            ..Dashboard::default()
        };
        let text = dashboard(&data);
        assert!(text.contains("Month 3"));
        assert!(text.contains("(2 active, 3 inactive)"));
        assert!(text.contains("Subscription revenue  99.00"));
    }
}
