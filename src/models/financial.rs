use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BalanceSheetRow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: NaiveDate,
    #[serde(rename = "Balance Sheet Type")]
    pub sheet_type: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub Category")]
    pub sub_category: String,
    #[serde(rename = "Balance Sheet Values")]
    pub value: f64,
}

// ---------------------------------------------------------------------------
// CashFlowRow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: NaiveDate,
    #[serde(rename = "Cash Flow Type")]
    pub flow_type: String,
    #[serde(rename = "Cash Flow Category")]
    pub category: String,
    #[serde(rename = "Cash Flow Sub Category")]
    pub sub_category: String,
    #[serde(rename = "Cash Flow Values")]
    pub value: f64,
}

// ---------------------------------------------------------------------------
// ExpenseRow: company expenses and income statement share this layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    #[serde(rename = "Month")]
    pub month: NaiveDate,
    #[serde(rename = "Expense Category")]
    pub category: String,
    #[serde(rename = "Expense Items")]
    pub item: String,
    #[serde(rename = "Expense Values")]
    pub value: f64,
}

// ---------------------------------------------------------------------------
// ChannelRevenueRow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRevenueRow {
    /// e.g. `Oct 2025`.
    #[serde(rename = "Month & Year")]
    pub month_year: String,
    #[serde(rename = "First Date")]
    pub first_date: NaiveDate,
    #[serde(rename = "Channel")]
    pub channel: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sales Values")]
    pub value: f64,
}
