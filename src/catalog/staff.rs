use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub id: &'static str,
    /// Transactions generated per operating day.
    pub daily_transactions: usize,
    pub flagship: bool,
}

pub static LOCATIONS: &[Location] = &[
    Location { id: "LOC-001", daily_transactions: 385, flagship: true },
    Location { id: "LOC-002", daily_transactions: 154, flagship: false },
    Location { id: "LOC-003", daily_transactions: 154, flagship: false },
    Location { id: "LOC-004", daily_transactions: 77, flagship: false },
];

// ---------------------------------------------------------------------------
// Till staff (POS attribution)
// ---------------------------------------------------------------------------

/// Part of the trading day a till operator covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TillShift {
    /// 06:00 to 11:59.
    Morning,
    /// 12:00 to 14:30.
    Afternoon,
    AllDay,
}

pub static TILL_STAFF: &[(&str, TillShift)] = &[
    ("EMP-001", TillShift::Morning),
    ("EMP-002", TillShift::Morning),
    ("EMP-003", TillShift::Morning),
    ("EMP-004", TillShift::Afternoon),
    ("EMP-005", TillShift::Afternoon),
    ("EMP-006", TillShift::AllDay),
    ("EMP-007", TillShift::AllDay),
];

/// Credited with a sale when nobody else is eligible.
pub const DEFAULT_TILL_EMPLOYEE: &str = "EMP-001";

// ---------------------------------------------------------------------------
// Rostered staff
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Barista,
    #[serde(rename = "Front of House")]
    FrontOfHouse,
    Kitchen,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Barista => "Barista",
            Role::FrontOfHouse => "Front of House",
            Role::Kitchen => "Kitchen",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkPattern {
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
}

impl WorkPattern {
    /// Most shifts allowed in any trailing 7-day window.
    pub fn weekly_cap(&self) -> usize {
        match self {
            WorkPattern::FullTime => 5,
            WorkPattern::PartTime => 3,
        }
    }

    /// Chance of taking a shift while under the weekly cap.
    pub fn availability(&self) -> f64 {
        match self {
            WorkPattern::FullTime => 0.8,
            WorkPattern::PartTime => 0.5,
        }
    }
}

/// Consecutive working days after which an employee must rest.
pub const MAX_CONSECUTIVE_DAYS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct StaffMember {
    pub id: &'static str,
    pub role: Role,
    pub pay_rate: (f64, f64),
    /// First entry is the home location.
    pub locations: &'static [&'static str],
    pub pattern: WorkPattern,
    /// Kitchen staff never move between sites.
    pub fixed_location: Option<&'static str>,
}

impl StaffMember {
    pub fn primary_location(&self) -> &'static str {
        self.locations.first().copied().unwrap_or("")
    }

    pub fn can_work_at(&self, location: &str) -> bool {
        match self.fixed_location {
            Some(fixed) => fixed == location,
            None => self.locations.contains(&location),
        }
    }
}

const BARISTA_PAY: (f64, f64) = (30.00, 33.00);
const FOH_PAY: (f64, f64) = (26.00, 33.00);
const KITCHEN_PAY: (f64, f64) = (28.50, 33.00);

macro_rules! staff {
    ($id:expr, $role:expr, $pay:expr, [$($loc:expr),+], $pattern:expr) => {
        StaffMember {
            id: $id,
            role: $role,
            pay_rate: $pay,
            locations: &[$($loc),+],
            pattern: $pattern,
            fixed_location: None,
        }
    };
}

macro_rules! kitchen {
    ($id:expr, $loc:expr) => {
        StaffMember {
            id: $id,
            role: Role::Kitchen,
            pay_rate: KITCHEN_PAY,
            locations: &[$loc],
            pattern: WorkPattern::FullTime,
            fixed_location: Some($loc),
        }
    };
}

pub static STAFF: &[StaffMember] = &[
    // Baristas
    staff!("EMP-001", Role::Barista, BARISTA_PAY, ["LOC-001", "LOC-002"], WorkPattern::FullTime),
    staff!("EMP-002", Role::Barista, BARISTA_PAY, ["LOC-001", "LOC-003"], WorkPattern::FullTime),
    staff!("EMP-004", Role::Barista, BARISTA_PAY, ["LOC-001"], WorkPattern::FullTime),
    staff!("EMP-007", Role::Barista, BARISTA_PAY, ["LOC-002", "LOC-004"], WorkPattern::FullTime),
    staff!("EMP-009", Role::Barista, BARISTA_PAY, ["LOC-003"], WorkPattern::PartTime),
    staff!("EMP-012", Role::Barista, BARISTA_PAY, ["LOC-004"], WorkPattern::PartTime),
    staff!("EMP-016", Role::Barista, BARISTA_PAY, ["LOC-002", "LOC-003"], WorkPattern::PartTime),
    // Front of house
    staff!("EMP-003", Role::FrontOfHouse, FOH_PAY, ["LOC-001"], WorkPattern::FullTime),
    staff!("EMP-006", Role::FrontOfHouse, FOH_PAY, ["LOC-001", "LOC-002"], WorkPattern::FullTime),
    staff!("EMP-008", Role::FrontOfHouse, FOH_PAY, ["LOC-001"], WorkPattern::FullTime),
    staff!("EMP-010", Role::FrontOfHouse, FOH_PAY, ["LOC-002"], WorkPattern::FullTime),
    staff!("EMP-013", Role::FrontOfHouse, FOH_PAY, ["LOC-003"], WorkPattern::FullTime),
    staff!("EMP-015", Role::FrontOfHouse, FOH_PAY, ["LOC-004"], WorkPattern::FullTime),
    staff!("EMP-017", Role::FrontOfHouse, FOH_PAY, ["LOC-003", "LOC-004"], WorkPattern::PartTime),
    staff!("EMP-018", Role::FrontOfHouse, FOH_PAY, ["LOC-002", "LOC-003"], WorkPattern::PartTime),
    // Kitchen
    kitchen!("EMP-005", "LOC-001"),
    kitchen!("EMP-011", "LOC-002"),
    kitchen!("EMP-014", "LOC-003"),
    kitchen!("EMP-019", "LOC-004"),
];

pub fn find_staff(id: &str) -> Option<&'static StaffMember> {
    STAFF.iter().find(|s| s.id == id)
}

// ---------------------------------------------------------------------------
// Staffing templates
// ---------------------------------------------------------------------------

/// Start/end pattern of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftShape {
    /// Starts 06:00-07:15, ends 14:00-15:00.
    Opening,
    /// Starts 08:00-09:30, ends 14:00-16:00.
    Mid,
    /// Starts 10:00-11:30, ends 14:00 or 14:30.
    PartTime,
    /// Fixed 06:30-14:00.
    Kitchen,
}

/// How a slot chooses among eligible employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Random,
    /// The first eligible employee in staff-list order.
    First,
}

#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub role: Role,
    pub shape: ShiftShape,
    pub count: usize,
    pub pick: Pick,
    /// Only filled while the location has fewer than this many shifts of
    /// `role` on the day.
    pub cap: Option<usize>,
}

/// Slots that are staffed together with a given probability.
#[derive(Debug, Clone, Copy)]
pub struct SlotGroup {
    pub chance: f64,
    pub slots: &'static [Slot],
}

#[derive(Debug, Clone, Copy)]
pub struct StaffingTemplate {
    pub groups: &'static [SlotGroup],
}

impl StaffingTemplate {
    /// Largest number of shifts the template can produce in a day.
    pub fn max_shifts(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.slots.iter())
            .map(|s| s.count)
            .sum()
    }
}

const fn slot(role: Role, shape: ShiftShape, count: usize) -> Slot {
    Slot { role, shape, count, pick: Pick::Random, cap: None }
}

pub static FLAGSHIP_TEMPLATE: StaffingTemplate = StaffingTemplate {
    groups: &[
        SlotGroup {
            chance: 1.0,
            slots: &[
                slot(Role::FrontOfHouse, ShiftShape::Opening, 1),
                slot(Role::Barista, ShiftShape::Opening, 2),
            ],
        },
        // Peak coverage
        SlotGroup {
            chance: 0.7,
            slots: &[
                slot(Role::FrontOfHouse, ShiftShape::Mid, 1),
                slot(Role::Barista, ShiftShape::Mid, 1),
            ],
        },
        SlotGroup {
            chance: 1.0,
            slots: &[Slot {
                role: Role::Kitchen,
                shape: ShiftShape::Kitchen,
                count: 1,
                pick: Pick::First,
                cap: None,
            }],
        },
        // Closing
        SlotGroup {
            chance: 1.0,
            slots: &[
                Slot {
                    role: Role::FrontOfHouse,
                    shape: ShiftShape::Mid,
                    count: 1,
                    pick: Pick::Random,
                    cap: Some(2),
                },
                Slot {
                    role: Role::Barista,
                    shape: ShiftShape::Mid,
                    count: 1,
                    pick: Pick::Random,
                    cap: Some(3),
                },
            ],
        },
    ],
};

pub static SATELLITE_TEMPLATE: StaffingTemplate = StaffingTemplate {
    groups: &[
        SlotGroup {
            chance: 1.0,
            slots: &[
                slot(Role::FrontOfHouse, ShiftShape::Opening, 1),
                slot(Role::Barista, ShiftShape::Opening, 1),
                Slot {
                    role: Role::Kitchen,
                    shape: ShiftShape::Kitchen,
                    count: 1,
                    pick: Pick::First,
                    cap: None,
                },
            ],
        },
        // Peak coverage
        SlotGroup {
            chance: 0.3,
            slots: &[slot(Role::FrontOfHouse, ShiftShape::PartTime, 1)],
        },
    ],
};

pub fn staffing_template(location: &Location) -> &'static StaffingTemplate {
    if location.flagship {
        &FLAGSHIP_TEMPLATE
    } else {
        &SATELLITE_TEMPLATE
    }
}

pub static SHIFT_NOTES: &[&str] = &[
    "Opening shift",
    "Closing shift",
    "Peak hour coverage",
    "Training new staff",
    "Lunch rush support",
    "Covering for colleague",
    "Manager on duty",
    "Stock delivery",
    "Deep clean",
    "Morning prep",
    "Mid-shift",
    "Part-time",
    "Student shift",
    "",
];

// ---------------------------------------------------------------------------
// Name pools
// ---------------------------------------------------------------------------

pub static FIRST_NAMES: &[&str] = &[
    "Jack", "Oliver", "William", "Noah", "Thomas", "James", "Lachlan", "Ethan", "Cooper",
    "Riley", "Liam", "Harrison", "Mitchell", "Hamish", "Angus", "Charlotte", "Olivia", "Amelia",
    "Isla", "Mia", "Ava", "Grace", "Chloe", "Sophie", "Emily", "Matilda", "Ruby", "Zoe",
    "Hannah", "Jessica", "Georgia", "Lily", "Ella", "Isabella", "Sienna", "Harper",
];

pub static LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Johnson", "White", "Martin",
    "Anderson", "Thompson", "Nguyen", "Thomas", "Walker", "Harris", "Lee", "Ryan", "Robinson",
    "Kelly", "King", "Davis", "Wright", "Evans", "Roberts", "Green", "Hall", "Wood", "Jackson",
    "Clarke", "Patel",
];
