// web_app/admin.rs - Admin dashboard logic
//
// Status badges, the product search box on the Products tab, overview
// cards, and "N minutes ago" timestamps for the activity feed.

use chrono::NaiveDateTime;

use crate::web_app::format::format_yen;
use crate::web_app::model::admin::*;

/// Badge colour class for a status in an admin table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Muted,
    Warning,
    Primary,
    Secondary,
    Destructive,
}

impl StatusTone {
    /// Variant name understood by the `Badge` component
    pub fn badge_variant(&self) -> &'static str {
        match self {
            StatusTone::Success => "green",
            StatusTone::Muted => "gray",
            StatusTone::Warning => "yellow",
            StatusTone::Primary => "blue",
            StatusTone::Secondary => "purple",
            StatusTone::Destructive => "red",
        }
    }
}

/// Anything shown as a status badge in an admin table
pub trait StatusBadge {
    fn tone(&self) -> StatusTone;
    fn label(&self) -> &'static str;
}

impl StatusBadge for ProductStatus {
    fn tone(&self) -> StatusTone {
        match self {
            ProductStatus::Active => StatusTone::Success,
            ProductStatus::Inactive => StatusTone::Muted,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }
}

impl StatusBadge for OrderStatus {
    fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Pending => StatusTone::Warning,
            OrderStatus::Processing => StatusTone::Primary,
            OrderStatus::Shipped => StatusTone::Secondary,
            OrderStatus::Delivered => StatusTone::Success,
            OrderStatus::Cancelled => StatusTone::Destructive,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

// Roles borrow the order and product tones: admin reads as "processing",
// a regular user as "active"
impl StatusBadge for UserRole {
    fn tone(&self) -> StatusTone {
        match self {
            UserRole::Admin => OrderStatus::Processing.tone(),
            UserRole::User => ProductStatus::Active.tone(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// Products tab search: case-insensitive substring on name or category
pub fn filter_admin_products<'a>(rows: &'a [AdminProduct], term: &str) -> Vec<&'a AdminProduct> {
    let needle = term.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            needle.is_empty()
                || row.name.to_lowercase().contains(&needle)
                || row.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The four cards across the top of the Overview tab
pub fn overview_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total Users",
            value: group_thousands(stats.total_users),
        },
        StatCard {
            title: "Products",
            value: group_thousands(stats.total_products),
        },
        StatCard {
            title: "Orders",
            value: group_thousands(stats.total_orders),
        },
        StatCard {
            title: "Revenue",
            value: format_yen(stats.revenue),
        },
    ]
}

fn group_thousands(n: u32) -> String {
    format_yen(n.into()).trim_start_matches('¥').to_string()
}

/// Coarse elapsed time, e.g. "2 minutes ago", "1 hour ago"
///
/// Times at or after `now` read as "just now".
pub fn relative_time(now: NaiveDateTime, at: NaiveDateTime) -> String {
    let elapsed = now.signed_duration_since(at);
    let (amount, unit) = if elapsed.num_days() > 0 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_role_tones_follow_statuses() {
        assert_eq!(UserRole::Admin.tone(), StatusTone::Primary);
        assert_eq!(UserRole::User.tone(), StatusTone::Success);
        assert_eq!(UserRole::Admin.label(), "admin");
    }

    #[test]
    fn test_order_badge_variants() {
        assert_eq!(OrderStatus::Pending.tone().badge_variant(), "yellow");
        assert_eq!(OrderStatus::Delivered.tone().badge_variant(), "green");
        assert_eq!(OrderStatus::Cancelled.tone().badge_variant(), "red");
        assert_eq!(ProductStatus::Inactive.tone().badge_variant(), "gray");
    }

    #[test]
    fn test_relative_time_units() {
        let now = noon();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(
            relative_time(now, now - chrono::Duration::seconds(30)),
            "just now"
        );
        assert_eq!(
            relative_time(now, now - chrono::Duration::minutes(2)),
            "2 minutes ago"
        );
        assert_eq!(
            relative_time(now, now - chrono::Duration::minutes(60)),
            "1 hour ago"
        );
        assert_eq!(
            relative_time(now, now - chrono::Duration::days(3)),
            "3 days ago"
        );
        assert_eq!(
            relative_time(now, now + chrono::Duration::minutes(5)),
            "just now"
        );
    }

    #[test]
    fn test_overview_cards() {
        let stats = DashboardStats {
            total_users: 1247,
            total_products: 89,
            total_orders: 567,
            revenue: Decimal::from(45670),
        };
        let cards = overview_cards(&stats);
        assert_eq!(cards[0].value, "1,247");
        assert_eq!(cards[1].value, "89");
        assert_eq!(cards[3].title, "Revenue");
        assert_eq!(cards[3].value, "¥45,670");
    }
}
