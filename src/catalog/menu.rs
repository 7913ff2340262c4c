use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category / Size
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Hot Drinks")]
    HotDrinks,
    #[serde(rename = "Iced Drinks")]
    IcedDrinks,
    #[serde(rename = "Food")]
    Food,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::HotDrinks => "Hot Drinks",
            Category::IcedDrinks => "Iced Drinks",
            Category::Food => "Food",
        }
    }

    pub fn is_drink(&self) -> bool {
        matches!(self, Category::HotDrinks | Category::IcedDrinks)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl Size {
    pub fn name(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Large => "large",
        }
    }
}

// ---------------------------------------------------------------------------
// MenuItem
// ---------------------------------------------------------------------------

/// Price range for one size option. `size: None` covers sizeless variants.
#[derive(Debug, Clone, Copy)]
pub struct PriceBand {
    pub size: Option<Size>,
    pub low: f64,
    pub high: f64,
}

/// How the modifiers of a line item are chosen.
#[derive(Debug, Clone, Copy)]
pub enum ModifierRule {
    /// Never modified.
    None,
    /// Uniform pick from a fixed list of combinations.
    Uniform(&'static [&'static [&'static str]]),
    /// Espresso-bar rules: machiatos get the "Topped up" options, a long
    /// machiato strongly prefers them.
    HotCoffee,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub category: Category,
    pub name: &'static str,
    pub variants: &'static [&'static str],
    /// Relative popularity of each variant; uniform when absent.
    pub variant_weights: Option<&'static [f64]>,
    pub sizes: &'static [Option<Size>],
    pub prices: &'static [PriceBand],
    pub takes_milk: bool,
    pub modifiers: ModifierRule,
}

impl MenuItem {
    pub fn price_band(&self, size: Option<Size>) -> Option<&PriceBand> {
        self.prices.iter().find(|band| band.size == size)
    }
}

/// Sold without size and served only in the filter window.
pub const BATCH_FILTER_COFFEE: &str = "Batch/Filter Coffee";

/// Variants that are always served black.
pub const BLACK_VARIANTS: &[&str] = &["Espresso", "Long Black", BATCH_FILTER_COFFEE];

pub const LONG_MACHIATO: &str = "Long Machiato";

pub static CATEGORY_WEIGHTS: &[(Category, f64)] = &[
    (Category::HotDrinks, 0.65),
    (Category::IcedDrinks, 0.20),
    (Category::Food, 0.15),
];

/// Item popularity within Iced Drinks; other categories pick items uniformly.
pub static ICED_DRINK_WEIGHTS: &[(&str, f64)] = &[
    ("Iced Coffee", 17.0),
    ("Iced Juice", 13.0),
    ("Signature Beverage", 9.0),
    ("Iced Tea", 5.0),
];

pub static MILK_TYPES: &[(&str, f64)] = &[
    ("full cream", 0.60),
    ("oat", 0.15),
    ("almond", 0.10),
    ("soy", 0.08),
    ("skinny", 0.05),
    ("lactose free", 0.02),
];

pub static PAYMENT_METHODS: &[(&str, f64)] = &[("card", 0.97), ("cash", 0.03)];

pub static HOT_COFFEE_MODIFIERS: &[&[&str]] = &[
    &["Decaf"],
    &["1 sugar"],
    &["2 sugar"],
    &["3 sugar"],
    &["Very hot"],
    &["Decaf", "2 sugar"],
    &["Very hot", "1 sugar"],
    &[],
];

pub static MACHIATO_MODIFIERS: &[&[&str]] = &[
    &["Decaf"],
    &["1 sugar"],
    &["2 sugar"],
    &["3 sugar"],
    &["Very hot"],
    &["Decaf", "2 sugar"],
    &["Very hot", "1 sugar"],
    &["Topped up"],
    &["Topped up", "Decaf"],
    &[],
];

pub static LONG_MACHIATO_MODIFIERS: &[(&[&str], f64)] = &[
    (&["Topped up"], 5.0),
    (&["Topped up", "Decaf"], 3.0),
    (&["Topped up", "1 sugar"], 2.0),
    (&["Topped up", "2 sugar"], 2.0),
    (&["Topped up", "Very hot"], 1.0),
];

const SMALL_LARGE: &[Option<Size>] = &[Some(Size::Small), Some(Size::Large)];
const SIZELESS: &[Option<Size>] = &[None];

macro_rules! sizeless {
    ($low:expr, $high:expr) => {
        &[PriceBand { size: None, low: $low, high: $high }]
    };
}

macro_rules! sized {
    (($sl:expr, $sh:expr), ($ll:expr, $lh:expr)) => {
        &[
            PriceBand { size: Some(Size::Small), low: $sl, high: $sh },
            PriceBand { size: Some(Size::Large), low: $ll, high: $lh },
        ]
    };
}

pub static MENU: &[MenuItem] = &[
    MenuItem {
        category: Category::HotDrinks,
        name: "Hot Coffee",
        variants: &[
            "Flat White",
            "Long Black",
            "Long Machiato",
            "Cappuccino",
            "Latte",
            "Mocha",
            "Espresso",
            "Chai",
            "Matcha",
            "Dirty Chai",
            "Short Machiato",
            "Hot Chocolate",
            BATCH_FILTER_COFFEE,
        ],
        variant_weights: Some(&[23.0, 18.0, 16.0, 14.0, 12.0, 10.0, 8.0, 6.0, 5.0, 4.0, 2.0, 1.0, 3.0]),
        sizes: SMALL_LARGE,
        prices: &[
            PriceBand { size: Some(Size::Small), low: 4.00, high: 5.50 },
            PriceBand { size: Some(Size::Large), low: 4.80, high: 6.20 },
            PriceBand { size: None, low: 3.50, high: 4.50 },
        ],
        takes_milk: true,
        modifiers: ModifierRule::HotCoffee,
    },
    MenuItem {
        category: Category::IcedDrinks,
        name: "Signature Beverage",
        variants: &["Mont Blanc", "Coconut Matcha", "Orange Matcha", "Jasmine Matcha"],
        variant_weights: None,
        sizes: SMALL_LARGE,
        prices: sized!((7.00, 8.00), (8.50, 9.50)),
        takes_milk: true,
        modifiers: ModifierRule::Uniform(&[&[], &["1 sugar"], &["2 sugar"]]),
    },
    MenuItem {
        category: Category::HotDrinks,
        name: "Hot Tea",
        variants: &["Perfect Peach", "Chamomile", "Peppermint", "Honey Lemon"],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(2.00, 2.50),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::IcedDrinks,
        name: "Iced Coffee",
        variants: &["Iced White", "Iced Black", "Iced Mocha", "Iced Chocolate", "Iced Matcha"],
        variant_weights: None,
        sizes: SMALL_LARGE,
        prices: sized!((5.00, 6.00), (5.80, 7.00)),
        takes_milk: true,
        modifiers: ModifierRule::Uniform(&[&["1 sugar"], &["2 sugar"], &[]]),
    },
    MenuItem {
        category: Category::IcedDrinks,
        name: "Iced Juice",
        variants: &["Orange Juice"],
        variant_weights: None,
        sizes: SMALL_LARGE,
        prices: sized!((5.00, 6.00), (5.80, 7.00)),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::IcedDrinks,
        name: "Iced Tea",
        variants: &["Iced Tea"],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(2.00, 2.50),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::Food,
        name: "Muffin",
        variants: &[
            "Blueberry Muffin",
            "Double Chocolate Chip Muffin",
            "Banana Nut Muffin",
            "Apple Cinnamon Muffin",
            "Plain Muffin",
        ],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(2.50, 3.50),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::Food,
        name: "Croissant",
        variants: &["Regular Croissant", "Chocolate Croissant", "Ham & Swiss Croissant"],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(3.50, 4.50),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::Food,
        name: "French Toast",
        variants: &[
            "Regular French Toast",
            "Nutella & Strawberries French Toast",
            "Coconut Cream French Toast",
        ],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(9.99, 13.00),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::Food,
        name: "Eggs Benedict",
        variants: &[
            "Eggs Benedict - White English Muffin",
            "Eggs Benedict - Whole Wheat English Muffin",
        ],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(13.50, 13.50),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::Food,
        name: "Pancakes",
        variants: &["Regular Pancakes"],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(7.99, 7.99),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::Food,
        name: "Coffee Cake",
        variants: &["Regular Coffee Cake"],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(3.50, 3.50),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
    MenuItem {
        category: Category::Food,
        name: "Granola",
        variants: &["Regular Granola", "Berry Granola", "Chocolate Granola", "Honey Granola"],
        variant_weights: None,
        sizes: SIZELESS,
        prices: sizeless!(4.50, 6.50),
        takes_milk: false,
        modifiers: ModifierRule::None,
    },
];

/// Menu items belonging to a category, in menu order.
pub fn items_in(category: Category) -> Vec<&'static MenuItem> {
    MENU.iter().filter(|item| item.category == category).collect()
}

/// Look up a menu item by name.
pub fn find_item(name: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.name == name)
}
