use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::formats::pos_datetime;
use crate::catalog::{Category, Size};

/// One sold unit on a POS transaction. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub transaction_id: String,
    pub order_id: String,
    #[serde(with = "pos_datetime")]
    pub transaction_datetime: NaiveDateTime,
    pub category_name: Category,
    pub item_name: String,
    pub variation_name: String,
    pub size: Option<Size>,
    pub milk_type: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
    /// JSON array of modifier strings, e.g. `["Decaf","2 sugar"]`.
    pub modifiers: String,
    pub employee_id: String,
    pub payment_method: String,
    pub customer_name: Option<String>,
    pub location_id: String,
}

impl LineItem {
    /// Decoded modifier list.
    pub fn modifier_list(&self) -> crate::Result<Vec<String>> {
        Ok(serde_json::from_str(&self.modifiers)?)
    }
}
