use std::collections::BTreeMap;

/// Sentinel selection meaning a field contributes no constraint.
pub const WILDCARD: &str = "Any";

/// The filter dimensions offered on the housing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    Bed,
    Bath,
    ApplicationFees,
    Kitchen,
    Bathroom,
    Parking,
    Mobility,
    AgeRequirement,
    IncomeRequirement,
    Pets,
}

impl FilterField {
    pub const ALL: [FilterField; 10] = [
        FilterField::Bed,
        FilterField::Bath,
        FilterField::ApplicationFees,
        FilterField::Kitchen,
        FilterField::Bathroom,
        FilterField::Parking,
        FilterField::Mobility,
        FilterField::AgeRequirement,
        FilterField::IncomeRequirement,
        FilterField::Pets,
    ];

    /// Wire key, matching the source document field names.
    pub const fn key(self) -> &'static str {
        match self {
            FilterField::Bed => "bed",
            FilterField::Bath => "bath",
            FilterField::ApplicationFees => "applicationFees",
            FilterField::Kitchen => "kitchen",
            FilterField::Bathroom => "bathroom",
            FilterField::Parking => "parking",
            FilterField::Mobility => "mobility",
            FilterField::AgeRequirement => "ageRequirement",
            FilterField::IncomeRequirement => "incomeRequirement",
            FilterField::Pets => "pets",
        }
    }

    /// Label shown by the selection UI.
    pub const fn label(self) -> &'static str {
        match self {
            FilterField::Bed => "Bed",
            FilterField::Bath => "Bath",
            FilterField::ApplicationFees => "Application Fees",
            FilterField::Kitchen => "Kitchen",
            FilterField::Bathroom => "Bathroom",
            FilterField::Parking => "Parking",
            FilterField::Mobility => "General Accessibility",
            FilterField::AgeRequirement => "Age Requirement",
            FilterField::IncomeRequirement => "Income Requirement",
            FilterField::Pets => "Pets",
        }
    }

    /// Closed option set offered for the field, wildcard excluded. Options
    /// are case-preserved exactly as presented to the user.
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            FilterField::Bed => &["1", "2", "3", "4+"],
            FilterField::Bath => &["1", "2", "3+"],
            FilterField::ApplicationFees => &["Yes", "No"],
            FilterField::Kitchen | FilterField::Mobility => &[
                "Front Controls on Stove/Cook-top",
                "Non digital Kitchen appliances",
            ],
            FilterField::Bathroom => &[
                "Accessible Height Toilet",
                "Bath Grab Bars or Reinforcements",
                "Toilet Grab",
                "Walk-in Shower",
                "Lever Handles on Doors and Faucets",
            ],
            FilterField::Parking => &["off street", "infront of unit", "on street"],
            FilterField::AgeRequirement | FilterField::IncomeRequirement | FilterField::Pets => {
                &["yes", "no"]
            }
        }
    }

    /// Resolve a wire key. Unrecognized keys resolve to `None` so a stray
    /// field in a selection update stays inert instead of failing.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().find(|field| field.key() == key).copied()
    }
}

/// Current state of one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    Any,
    Choice(String),
}

/// One screen session's filter state.
///
/// Every field starts at the wildcard and is mutated one (field, value) pair
/// at a time by discrete selection events. Only active (non-wildcard)
/// selections are held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    selections: BTreeMap<FilterField, String>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure reducer: the configuration after one selection event. Selecting
    /// the wildcard clears the field.
    #[must_use]
    pub fn with(mut self, field: FilterField, selection: &str) -> Self {
        self.select(field, selection);
        self
    }

    /// In-place form of [`FilterConfig::with`].
    pub fn select(&mut self, field: FilterField, selection: &str) {
        if selection.trim().eq_ignore_ascii_case(WILDCARD) {
            self.selections.remove(&field);
        } else {
            self.selections.insert(field, selection.to_string());
        }
    }

    /// Return every field to the wildcard, as on screen entry.
    pub fn reset(&mut self) {
        self.selections.clear();
    }

    pub fn selection(&self, field: FilterField) -> FilterSelection {
        match self.selections.get(&field) {
            Some(choice) => FilterSelection::Choice(choice.clone()),
            None => FilterSelection::Any,
        }
    }

    /// Active (field, selected value) pairs.
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.selections
            .iter()
            .map(|(field, choice)| (*field, choice.as_str()))
    }

    pub fn is_all_any(&self) -> bool {
        self.selections.is_empty()
    }

    /// Build a configuration from loose (key, value) pairs such as HTTP
    /// query parameters. Unrecognized keys are dropped.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::new();
        for (key, value) in pairs {
            if let Some(field) = FilterField::from_key(key) {
                config.select(field, value);
            }
        }
        config
    }
}
