use serde::{Deserialize, Serialize};

use crate::domain::entities::pricing_plans::PricingPlanEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePricingPlanModel {
    pub name: String,
    pub price_minor: i32,
    pub billing_period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditPricingPlanModel {
    pub name: Option<String>,
    pub price_minor: Option<i32>,
    pub billing_period: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_popular: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingPlanDto {
    pub id: i64,
    pub name: String,
    pub price_minor: i32,
    pub billing_period: String,
    pub features: Vec<String>,
    pub is_popular: bool,
}

impl From<PricingPlanEntity> for PricingPlanDto {
    fn from(value: PricingPlanEntity) -> Self {
        let features = serde_json::from_value(value.features).unwrap_or_default();
        Self {
            id: value.id,
            name: value.name,
            price_minor: value.price_minor,
            billing_period: value.billing_period,
            features,
            is_popular: value.is_popular,
        }
    }
}
