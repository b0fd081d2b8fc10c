// fixtures/tables/admin.rs
//
// Mock tables for the admin back-office. Nothing here is editable; the
// dashboard only displays and filters these rows.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::fixtures::Fixture;
use crate::web_app::model::admin::{
    ActivityEntry, AdminProduct, AdminUser, DashboardStats, Order, OrderStatus, ProductStatus,
    UserRole,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The moment the mock activity feed is rendered against
pub fn activity_reference_time() -> NaiveDateTime {
    at(date(2024, 8, 5), 12, 0)
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_users: 1247,
        total_products: 89,
        total_orders: 567,
        revenue: Decimal::from(45670),
    }
}

pub struct AdminProductsTable;

impl Fixture for AdminProductsTable {
    type Row = AdminProduct;

    fn rows() -> Vec<AdminProduct> {
        let row = |id: &str, name: &str, price: i64, category: &str, stock: u32, status| {
            AdminProduct {
                id: id.to_string(),
                name: name.to_string(),
                price: Decimal::from(price),
                category: category.to_string(),
                stock,
                status,
            }
        };

        vec![
            row("1", "Premium Digital Camera", 899, "Electronics", 15, ProductStatus::Active),
            row("2", "Wireless Earbuds Pro", 199, "Audio", 42, ProductStatus::Active),
            row("3", "Smart Fitness Watch", 299, "Wearables", 8, ProductStatus::Inactive),
            row("4", "Gaming Mechanical Keyboard", 149, "Gaming", 23, ProductStatus::Active),
        ]
    }
}

pub struct AdminUsersTable;

impl Fixture for AdminUsersTable {
    type Row = AdminUser;

    fn rows() -> Vec<AdminUser> {
        let row = |id: &str, name: &str, email: &str, role, join_date, orders| AdminUser {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            join_date,
            orders,
        };

        vec![
            row("1", "Hiroshi Tanaka", "hiroshi@email.com", UserRole::User, date(2024, 1, 15), 5),
            row("2", "Yuki Sato", "yuki@email.com", UserRole::Admin, date(2023, 12, 1), 12),
            row("3", "Akira Yamamoto", "akira@email.com", UserRole::User, date(2024, 2, 20), 3),
        ]
    }
}

pub struct OrdersTable;

impl Fixture for OrdersTable {
    type Row = Order;

    fn rows() -> Vec<Order> {
        let row = |id: &str, customer: &str, total: i64, status, date, items| Order {
            id: id.to_string(),
            customer: customer.to_string(),
            total: Decimal::from(total),
            status,
            date,
            items,
        };

        vec![
            row("1001", "Hiroshi Tanaka", 1299, OrderStatus::Delivered, date(2024, 8, 1), 2),
            row("1002", "Yuki Sato", 599, OrderStatus::Processing, date(2024, 8, 3), 1),
            row("1003", "Akira Yamamoto", 399, OrderStatus::Shipped, date(2024, 8, 4), 3),
        ]
    }
}

pub struct ActivityTable;

impl Fixture for ActivityTable {
    type Row = ActivityEntry;

    fn rows() -> Vec<ActivityEntry> {
        let today = date(2024, 8, 5);
        let row = |action: &str, actor: &str, when| ActivityEntry {
            action: action.to_string(),
            actor: actor.to_string(),
            at: when,
        };

        vec![
            row("New order received", "Hiroshi Tanaka", at(today, 11, 58)),
            row("Product updated", "Admin", at(today, 11, 0)),
            row("User registered", "Yuki Sato", at(today, 9, 0)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_tables_sizes() {
        assert_eq!(AdminProductsTable::rows().len(), 4);
        assert_eq!(AdminUsersTable::rows().len(), 3);
        assert_eq!(OrdersTable::rows().len(), 3);
        assert_eq!(ActivityTable::rows().len(), 3);
    }

    #[test]
    fn test_activity_precedes_reference_time() {
        let now = activity_reference_time();
        for entry in ActivityTable::rows() {
            assert!(entry.at <= now, "{} is in the future", entry.action);
        }
    }

    #[test]
    fn test_dates_are_real() {
        let default_date = NaiveDate::default();
        for user in AdminUsersTable::rows() {
            assert_ne!(user.join_date, default_date);
        }
        for order in OrdersTable::rows() {
            assert_ne!(order.date, default_date);
        }
    }
}
