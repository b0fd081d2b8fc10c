// web_app/model/admin.rs - Row types for the admin back-office
//
// The admin dashboard only ever shows mock data, so these are plain
// read-only records.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::web_app::error::ParseError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Products,
    Users,
    Orders,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Products,
        AdminTab::Users,
        AdminTab::Orders,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Products => "products",
            AdminTab::Users => "users",
            AdminTab::Orders => "orders",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Products => "Products",
            AdminTab::Users => "Users",
            AdminTab::Orders => "Orders",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AdminTab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminTab::ALL
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| ParseError::UnknownAdminTab(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Product row in the admin inventory table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminProduct {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
    pub status: ProductStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub join_date: NaiveDate,
    pub orders: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub total: Decimal,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub items: u32,
}

/// Headline numbers on the overview tab
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u32,
    pub total_products: u32,
    pub total_orders: u32,
    pub revenue: Decimal,
}

/// Overview card: title plus already formatted value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub actor: String,
    pub at: NaiveDateTime,
}
