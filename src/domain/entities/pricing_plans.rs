use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::pricing_plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = pricing_plans)]
pub struct PricingPlanEntity {
    pub id: i64,
    pub name: String,
    pub price_minor: i32,
    pub billing_period: String,
    pub features: serde_json::Value,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<i64>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pricing_plans)]
pub struct InsertPricingPlanEntity {
    pub name: String,
    pub price_minor: i32,
    pub billing_period: String,
    pub features: serde_json::Value,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = pricing_plans)]
pub struct EditPricingPlanEntity {
    pub name: Option<String>,
    pub price_minor: Option<i32>,
    pub billing_period: Option<String>,
    pub features: Option<serde_json::Value>,
    pub is_popular: Option<bool>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<i64>,
}
