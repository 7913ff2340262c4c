use crate::models::TemplateRecord;

/// Indentation added per hierarchy level in the display column.
pub const INDENT: &str = "    ";

/// Header row background.
pub const HEADER_FILL: u32 = 0x1F4E78;
/// Background of every other data row, starting with the first.
pub const BAND_FILL: u32 = 0xD9E1F2;
pub const PLAIN_FILL: u32 = 0xFFFFFF;

/// Background of the data row at `position` (0-based, header excluded).
pub fn row_fill(position: usize) -> u32 {
    if position % 2 == 0 {
        BAND_FILL
    } else {
        PLAIN_FILL
    }
}

/// What a template row represents. Styling is decided from this tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Top-level heading ("Assets", "Operations").
    Section,
    /// Sub-heading grouping detail lines ("Current Assets", "Cash paid for").
    Group,
    /// A detail line.
    Line,
    /// A total or ratio; carries a summary label and a summary index.
    Summary,
    /// Spacer.
    Blank,
}

impl RowKind {
    pub fn is_bold(&self) -> bool {
        matches!(self, RowKind::Section | RowKind::Summary)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateRow {
    pub kind: RowKind,
    pub level: usize,
    pub label: &'static str,
    /// Overrides the normalized label when it differs from `label`.
    pub normalized: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    /// Key into [`crate::config::output_files`].
    pub file_key: &'static str,
    pub sheet_name: &'static str,
    pub headers: [&'static str; 5],
    pub column_widths: [f64; 5],
    pub rows: &'static [TemplateRow],
}

impl TemplateSpec {
    /// Expand the declared rows into worksheet records. Row indices start at
    /// 1 and summary indices are assigned to summary rows in order.
    pub fn records(&self) -> Vec<TemplateRecord> {
        let mut summary_index = 0u32;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let normalized = row.normalized.unwrap_or(row.label);
                let (summary, index) = if row.kind == RowKind::Summary {
                    summary_index += 1;
                    (row.label.to_string(), Some(summary_index))
                } else {
                    (String::new(), None)
                };
                TemplateRecord {
                    row_index: i as u32 + 1,
                    kind: row.kind,
                    item: format!("{}{}", INDENT.repeat(row.level), row.label),
                    summary,
                    normalized: normalized.to_string(),
                    summary_index: index,
                }
            })
            .collect()
    }
}

const fn row(kind: RowKind, level: usize, label: &'static str) -> TemplateRow {
    TemplateRow { kind, level, label, normalized: None }
}

const fn section(label: &'static str) -> TemplateRow {
    row(RowKind::Section, 0, label)
}

const fn group(level: usize, label: &'static str) -> TemplateRow {
    row(RowKind::Group, level, label)
}

const fn item(level: usize, label: &'static str) -> TemplateRow {
    row(RowKind::Line, level, label)
}

const fn total(level: usize, label: &'static str) -> TemplateRow {
    row(RowKind::Summary, level, label)
}

const BLANK: TemplateRow = row(RowKind::Blank, 0, "");

// ---------------------------------------------------------------------------
// Balance sheet
// ---------------------------------------------------------------------------

pub static BALANCE_SHEET_TEMPLATE: TemplateSpec = TemplateSpec {
    file_key: "balance_sheet_template",
    sheet_name: "BS Template",
    headers: [
        "Row Index",
        "Balance Sheet Items",
        "Summary Items",
        "Balance Sheet Normalized",
        "Summary Index",
    ],
    column_widths: [12.0, 40.0, 25.0, 40.0, 15.0],
    rows: &[
        section("Assets"),
        group(1, "Current Assets"),
        item(2, "Cash"),
        item(2, "Accounts receivable"),
        item(2, "Inventory"),
        item(2, "Prepaid expenses"),
        item(2, "Short-term investments"),
        total(1, "Total current assets"),
        group(1, "Fixed (Long-Term) Assets"),
        item(2, "Long-term investments"),
        item(2, "Property, plant, and equipment"),
        item(2, "(Less accumulated depreciation)"),
        item(2, "Intangible assets"),
        total(1, "Total fixed assets"),
        group(1, "Other Assets"),
        item(2, "Deferred income tax"),
        item(2, "Other"),
        total(1, "Total Other Assets"),
        BLANK,
        total(0, "Total Assets"),
        BLANK,
        section("Liabilities and Owner's Equity"),
        group(1, "Current Liabilities"),
        item(2, "Accounts payable"),
        item(2, "Short-term loans"),
        item(2, "Income taxes payable"),
        item(2, "Accrued salaries and wages"),
        item(2, "Unearned revenue"),
        item(2, "Current portion of long-term debt"),
        total(1, "Total current liabilities"),
        group(1, "Long-Term Liabilities"),
        item(2, "Long-term debt"),
        item(2, "Deferred income tax"),
        item(2, "Other"),
        total(1, "Total long-term liabilities"),
        group(1, "Owner's Equity"),
        item(2, "Owner's investment"),
        item(2, "Retained earnings"),
        item(2, "Other"),
        total(1, "Total owner's equity"),
        BLANK,
        total(0, "Total Liabilities and Owner's Equity"),
        BLANK,
        section("Common Financial Ratios"),
        total(1, "Debt Ratio (Total Liabilities / Total Assets)"),
        total(1, "Current Ratio (Current Assets / Current Liabilities)"),
        total(1, "Working Capital (Current Assets - Current Liabilities)"),
        total(1, "Assets-to-Equity Ratio (Total Assets / Owner's Equity)"),
        total(1, "Debt-to-Equity Ratio (Total Liabilities / Owner's Equity)"),
    ],
};

// ---------------------------------------------------------------------------
// Cash flow
// ---------------------------------------------------------------------------

pub static CASH_FLOW_TEMPLATE: TemplateSpec = TemplateSpec {
    file_key: "cash_flow_template",
    sheet_name: "CF Template",
    headers: [
        "Row Index",
        "Cash Flow Items",
        "Cash Flow Summary Items",
        "Cash Flow Normalized",
        "Summary Index",
    ],
    column_widths: [12.0, 45.0, 35.0, 45.0, 15.0],
    rows: &[
        section("Operations"),
        item(1, "Cash receipts from customers"),
        group(1, "Cash paid for"),
        item(2, "Inventory purchases"),
        TemplateRow {
            kind: RowKind::Line,
            level: 2,
            label: "General operating expenses",
            normalized: Some("General operating and administrative expenses"),
        },
        item(2, "Wage expenses"),
        item(1, "Interest"),
        item(1, "Income taxes"),
        total(0, "Net Cash Flow from Operations"),
        BLANK,
        section("Investing Activities"),
        group(1, "Cash receipts from"),
        item(2, "Sale of property and equipment"),
        item(2, "Collection of principal on loans"),
        item(2, "Sale of investment securities"),
        group(1, "Cash paid for"),
        item(2, "Purchase of property and equipment"),
        item(2, "Making loans to other entities"),
        item(2, "Purchase of investment securities"),
        total(0, "Net Cash Flow from Investing Activities"),
        BLANK,
        section("Financing Activities"),
        group(1, "Cash receipts from"),
        item(2, "Issuance of stock"),
        item(2, "Borrowing"),
        group(1, "Cash paid for"),
        item(2, "Repurchase of stock (treasury stock)"),
        item(2, "Repayment of loans"),
        item(2, "Dividends"),
        total(0, "Net Cash Flow from Financing Activities"),
        BLANK,
        total(0, "Net Increase in Cash"),
        BLANK,
        total(0, "Cash at Beginning of Year"),
        total(0, "Cash at End of Year"),
    ],
};

// ---------------------------------------------------------------------------
// Income statement
// ---------------------------------------------------------------------------

pub static INCOME_STATEMENT_TEMPLATE: TemplateSpec = TemplateSpec {
    file_key: "income_statement_template",
    sheet_name: "IS Template",
    headers: [
        "Row Index",
        "Income Statement Items",
        "Summary 1",
        "Items (Normalized)",
        "Summary Index",
    ],
    column_widths: [12.0, 35.0, 25.0, 35.0, 15.0],
    rows: &[
        item(1, "Total Sales Revenue"),
        item(1, "Catering Revenue"),
        item(1, "Delivery Revenue"),
        item(1, "Wholesale Revenue"),
        total(0, "Total Revenues"),
        BLANK,
        item(1, "Coffee Beans"),
        item(1, "Milk & Dairy"),
        item(1, "Food Ingredients"),
        item(1, "Packaging & Supplies"),
        item(1, "Inventory Adjustments"),
        total(0, "Total COGS"),
        BLANK,
        total(0, "Total Gross Profit"),
        total(0, "Gross Profit %"),
        BLANK,
        item(1, "Rent"),
        item(1, "Utilities"),
        item(1, "Salaries & Wages"),
        item(1, "Marketing & Advertising"),
        item(1, "Supplies"),
        item(1, "Equipment Maintenance"),
        item(1, "Insurance"),
        item(1, "Professional Services"),
        item(1, "Depreciation"),
        item(1, "Other Operating Expenses"),
        BLANK,
        total(0, "Total Other Expenses"),
        BLANK,
        total(0, "Total Net Profit"),
        total(0, "Net Profit %"),
    ],
};

pub static TEMPLATES: [&TemplateSpec; 3] = [
    &BALANCE_SHEET_TEMPLATE,
    &CASH_FLOW_TEMPLATE,
    &INCOME_STATEMENT_TEMPLATE,
];
