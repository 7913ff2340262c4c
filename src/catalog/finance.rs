// ---------------------------------------------------------------------------
// Balance sheet
// ---------------------------------------------------------------------------

/// How a balance sheet line moves from one month to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceBehaviour {
    /// Independent each month: `base * (1 + uniform(-variation, variation))`.
    Varied { base: f64, variation: f64 },
    /// Running total, lowered every month by the fixed asset depreciation.
    AccumulatedDepreciation,
    /// Running total, raised every month by a sampled profit.
    RetainedEarnings,
    /// Running balance, paid down every month, never below zero.
    LongTermLoan,
}

#[derive(Debug, Clone, Copy)]
pub struct BalanceLine {
    pub sheet_type: &'static str,
    pub category: &'static str,
    pub sub_category: &'static str,
    pub behaviour: BalanceBehaviour,
    /// Monthly depreciation charged against this asset.
    pub monthly_depreciation: f64,
}

pub const ACCUMULATED_DEPRECIATION_OPENING: f64 = -30_000.0;
pub const RETAINED_EARNINGS_OPENING: f64 = 50_000.0;
pub const MONTHLY_PROFIT_RANGE: (f64, f64) = (5_000.0, 15_000.0);
pub const LONG_TERM_LOAN_OPENING: f64 = 50_000.0;
pub const LOAN_REPAYMENT_RANGE: (f64, f64) = (500.0, 1_000.0);

const fn varied(
    sheet_type: &'static str,
    category: &'static str,
    sub_category: &'static str,
    base: f64,
    variation: f64,
) -> BalanceLine {
    BalanceLine {
        sheet_type,
        category,
        sub_category,
        behaviour: BalanceBehaviour::Varied { base, variation },
        monthly_depreciation: 0.0,
    }
}

const fn fixed_asset(sub_category: &'static str, base: f64, monthly_depreciation: f64) -> BalanceLine {
    BalanceLine {
        sheet_type: "Assets",
        category: "Fixed Assets",
        sub_category,
        behaviour: BalanceBehaviour::Varied { base, variation: 0.05 },
        monthly_depreciation,
    }
}

const fn running(
    sheet_type: &'static str,
    category: &'static str,
    sub_category: &'static str,
    behaviour: BalanceBehaviour,
) -> BalanceLine {
    BalanceLine {
        sheet_type,
        category,
        sub_category,
        behaviour,
        monthly_depreciation: 0.0,
    }
}

pub static BALANCE_SHEET: &[BalanceLine] = &[
    varied("Assets", "Current Assets", "Cash", 50_000.0, 0.20),
    varied("Assets", "Current Assets", "Accounts Receivable", 5_000.0, 0.30),
    varied("Assets", "Current Assets", "Inventory", 8_000.0, 0.15),
    varied("Assets", "Current Assets", "Prepaid Expenses", 2_000.0, 0.25),
    fixed_asset("Equipment", 120_000.0, 2_000.0),
    fixed_asset("Furniture & Fixtures", 40_000.0, 500.0),
    fixed_asset("Leasehold Improvements", 80_000.0, 1_000.0),
    running(
        "Assets",
        "Fixed Assets",
        "Accumulated Depreciation",
        BalanceBehaviour::AccumulatedDepreciation,
    ),
    varied("Liabilities", "Current Liabilities", "Accounts Payable", 6_000.0, 0.25),
    varied("Liabilities", "Current Liabilities", "Accrued Expenses", 3_000.0, 0.30),
    varied("Liabilities", "Current Liabilities", "Short-term Loans", 15_000.0, 0.10),
    varied("Liabilities", "Current Liabilities", "Credit Card Payable", 2_000.0, 0.40),
    running(
        "Liabilities",
        "Long-term Liabilities",
        "Long-term Loans",
        BalanceBehaviour::LongTermLoan,
    ),
    varied("Liabilities", "Long-term Liabilities", "Lease Obligations", 20_000.0, 0.05),
    varied("Equity", "Owner's Equity", "Owner's Capital", 100_000.0, 0.02),
    running(
        "Equity",
        "Owner's Equity",
        "Retained Earnings",
        BalanceBehaviour::RetainedEarnings,
    ),
];

/// Amount added to accumulated depreciation (as a negative) every month.
pub fn monthly_depreciation_total() -> f64 {
    BALANCE_SHEET.iter().map(|l| l.monthly_depreciation).sum()
}

// ---------------------------------------------------------------------------
// Cash flow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Inflow,
    Outflow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowAmount {
    /// Occurs every month around a base amount.
    Recurring { base: f64, variation: f64 },
    /// Occurs with probability `frequency` in a month, sized within a range.
    Occasional { frequency: f64, low: f64, high: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct CashFlowLine {
    pub flow_type: &'static str,
    pub category: &'static str,
    pub sub_category: &'static str,
    pub direction: FlowDirection,
    pub amount: FlowAmount,
}

const fn recurring(
    flow_type: &'static str,
    category: &'static str,
    sub_category: &'static str,
    direction: FlowDirection,
    base: f64,
    variation: f64,
) -> CashFlowLine {
    CashFlowLine {
        flow_type,
        category,
        sub_category,
        direction,
        amount: FlowAmount::Recurring { base, variation },
    }
}

const fn occasional(
    flow_type: &'static str,
    category: &'static str,
    sub_category: &'static str,
    direction: FlowDirection,
    frequency: f64,
    range: (f64, f64),
) -> CashFlowLine {
    CashFlowLine {
        flow_type,
        category,
        sub_category,
        direction,
        amount: FlowAmount::Occasional { frequency, low: range.0, high: range.1 },
    }
}

use FlowDirection::{Inflow, Outflow};

pub static CASH_FLOW: &[CashFlowLine] = &[
    recurring("Operating", "Cash from Sales", "Sales Revenue", Inflow, 100_000.0, 0.15),
    recurring("Operating", "Cash Paid to Suppliers", "Inventory Purchases", Outflow, 35_000.0, 0.20),
    recurring("Operating", "Cash Paid to Employees", "Salaries & Wages", Outflow, 20_000.0, 0.10),
    recurring("Operating", "Cash Paid for Operating Expenses", "Rent & Utilities", Outflow, 15_000.0, 0.15),
    recurring("Operating", "Interest Received", "Interest Income", Inflow, 100.0, 0.50),
    recurring("Operating", "Interest Paid", "Interest Expense", Outflow, 300.0, 0.30),
    recurring("Operating", "Taxes Paid", "Income Tax", Outflow, 2_000.0, 0.25),
    occasional("Investing", "Equipment Purchases", "Coffee Machines", Outflow, 0.10, (5_000.0, 25_000.0)),
    occasional("Investing", "Furniture Purchases", "Furniture & Fixtures", Outflow, 0.15, (2_000.0, 10_000.0)),
    occasional("Investing", "Property Improvements", "Leasehold Improvements", Outflow, 0.05, (2_000.0, 10_000.0)),
    occasional("Financing", "Loan Proceeds", "Business Loans", Inflow, 0.05, (20_000.0, 50_000.0)),
    recurring("Financing", "Loan Repayments", "Principal Payments", Outflow, 1_000.0, 0.20),
    occasional("Financing", "Owner Contributions", "Capital Contributions", Inflow, 0.08, (5_000.0, 20_000.0)),
    occasional("Financing", "Dividends Paid", "Owner Distributions", Outflow, 0.20, (3_000.0, 8_000.0)),
];

// ---------------------------------------------------------------------------
// Company expenses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct ExpenseCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub base_range: (f64, f64),
    pub variation: f64,
    /// Probability that an item is not incurred in a given month.
    pub skip_chance: f64,
}

pub static EXPENSE_CATEGORIES: &[ExpenseCategory] = &[
    ExpenseCategory {
        name: "Rent",
        items: &[
            "Store Rent - LOC-001",
            "Store Rent - LOC-002",
            "Store Rent - LOC-003",
            "Store Rent - LOC-004",
        ],
        base_range: (8_000.0, 12_000.0),
        variation: 0.02,
        skip_chance: 0.0,
    },
    ExpenseCategory {
        name: "Utilities",
        items: &["Electricity", "Water", "Gas", "Internet & Phone"],
        base_range: (500.0, 1_500.0),
        variation: 0.15,
        skip_chance: 0.0,
    },
    ExpenseCategory {
        name: "Salaries & Wages",
        items: &[
            "Barista Wages",
            "FOH Wages",
            "Kitchen Staff Wages",
            "Manager Salaries",
            "Overtime",
        ],
        base_range: (15_000.0, 25_000.0),
        variation: 0.10,
        skip_chance: 0.0,
    },
    ExpenseCategory {
        name: "Marketing & Advertising",
        items: &[
            "Social Media Ads",
            "Print Advertising",
            "Promotional Materials",
            "Events & Sponsorships",
        ],
        base_range: (500.0, 2_000.0),
        variation: 0.30,
        skip_chance: 0.0,
    },
    ExpenseCategory {
        name: "Supplies",
        items: &["Cleaning Supplies", "Office Supplies", "Paper Products", "Disposables"],
        base_range: (300.0, 800.0),
        variation: 0.20,
        skip_chance: 0.0,
    },
    ExpenseCategory {
        name: "Equipment Maintenance",
        items: &["Coffee Machine Service", "Equipment Repairs", "Maintenance Contracts"],
        base_range: (200.0, 1_000.0),
        variation: 0.25,
        skip_chance: 0.30,
    },
    ExpenseCategory {
        name: "Insurance",
        items: &[
            "Public Liability Insurance",
            "Property Insurance",
            "Workers Compensation",
        ],
        base_range: (400.0, 800.0),
        variation: 0.05,
        skip_chance: 0.0,
    },
    ExpenseCategory {
        name: "Professional Services",
        items: &["Accounting Services", "Legal Services", "Consulting"],
        base_range: (300.0, 1_200.0),
        variation: 0.20,
        skip_chance: 0.40,
    },
    ExpenseCategory {
        name: "Other Operating Expenses",
        items: &["Bank Fees", "Licenses & Permits", "Training", "Uniforms", "Miscellaneous"],
        base_range: (200.0, 600.0),
        variation: 0.25,
        skip_chance: 0.0,
    },
];

// ---------------------------------------------------------------------------
// Channel revenues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Channel {
    pub name: &'static str,
    pub category: &'static str,
    pub base_daily: f64,
}

pub const CHANNEL_VARIATION: f64 = 0.15;

pub static CHANNELS: &[Channel] = &[
    Channel { name: "POS", category: "In-Store", base_daily: 10_000.0 },
    Channel { name: "Delivery", category: "Delivery", base_daily: 1_200.0 },
    Channel { name: "Catering", category: "Catering", base_daily: 500.0 },
    Channel { name: "Wholesale", category: "Wholesale", base_daily: 150.0 },
];

// ---------------------------------------------------------------------------
// Income statement
// ---------------------------------------------------------------------------

/// Where an income statement figure comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IncomeBasis {
    /// The same month's revenue for a sales channel.
    Channel(&'static str),
    /// A share of the month's in-store sales revenue.
    SalesShare(f64, f64),
    /// A flat amount in a range.
    Flat(f64, f64),
    /// Incurred with probability `chance`, zero otherwise.
    Occasional { chance: f64, low: f64, high: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct IncomeLine {
    pub category: &'static str,
    pub item: &'static str,
    pub basis: IncomeBasis,
}

/// Final multiplicative jitter applied to every income statement figure.
pub const INCOME_JITTER: (f64, f64) = (0.95, 1.05);

/// Channel whose revenue anchors the cost-of-goods shares.
pub const SALES_CHANNEL: &str = "POS";

const fn line(category: &'static str, item: &'static str, basis: IncomeBasis) -> IncomeLine {
    IncomeLine { category, item, basis }
}

use IncomeBasis::{Flat, SalesShare};

pub static INCOME_STATEMENT: &[IncomeLine] = &[
    line("Revenue", "Total Sales Revenue", IncomeBasis::Channel("POS")),
    line("Revenue", "Catering Revenue", IncomeBasis::Channel("Catering")),
    line("Revenue", "Delivery Revenue", IncomeBasis::Channel("Delivery")),
    line("Revenue", "Wholesale Revenue", IncomeBasis::Channel("Wholesale")),
    line("Cost of Goods Sold", "Coffee Beans", SalesShare(0.12, 0.18)),
    line("Cost of Goods Sold", "Milk & Dairy", SalesShare(0.08, 0.12)),
    line("Cost of Goods Sold", "Food Ingredients", SalesShare(0.15, 0.22)),
    line("Cost of Goods Sold", "Packaging & Supplies", SalesShare(0.03, 0.05)),
    line("Cost of Goods Sold", "Inventory Adjustments", Flat(-500.0, 500.0)),
    line("Operating Expenses", "Rent", Flat(32_000.0, 40_000.0)),
    line("Operating Expenses", "Utilities", Flat(2_000.0, 4_000.0)),
    line("Operating Expenses", "Salaries & Wages", Flat(18_000.0, 25_000.0)),
    line("Operating Expenses", "Marketing & Advertising", Flat(1_000.0, 2_500.0)),
    line("Operating Expenses", "Supplies", Flat(1_200.0, 2_000.0)),
    line(
        "Operating Expenses",
        "Equipment Maintenance",
        IncomeBasis::Occasional { chance: 0.7, low: 500.0, high: 1_500.0 },
    ),
    line("Operating Expenses", "Insurance", Flat(1_600.0, 2_400.0)),
    line(
        "Operating Expenses",
        "Professional Services",
        IncomeBasis::Occasional { chance: 0.6, low: 600.0, high: 1_500.0 },
    ),
    line("Operating Expenses", "Depreciation", Flat(2_000.0, 3_000.0)),
    line("Operating Expenses", "Other Operating Expenses", Flat(800.0, 1_500.0)),
    line(
        "Other Income/Expenses",
        "Interest Income",
        IncomeBasis::Occasional { chance: 0.3, low: 50.0, high: 200.0 },
    ),
    line("Other Income/Expenses", "Interest Expense", Flat(200.0, 500.0)),
    line(
        "Other Income/Expenses",
        "Other Income",
        IncomeBasis::Occasional { chance: 0.4, low: 100.0, high: 400.0 },
    ),
    line(
        "Other Income/Expenses",
        "Other Expenses",
        IncomeBasis::Occasional { chance: 0.5, low: 100.0, high: 300.0 },
    ),
];
