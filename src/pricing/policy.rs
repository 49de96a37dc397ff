//! Pricing policy handed to the model as its system instruction.
//!
//! The tables here are the only place the tariff lives. They are rendered
//! into the system prompt and used to spot request values that fall
//! outside the known vocabulary; the service itself never computes a price.

/// Base fare band in rupees, chosen by city/zone.
pub const BASE_FARE: (u32, u32) = (50, 100);

/// Per-kilometre rate band in rupees.
pub const PER_KM_RATE: (u32, u32) = (10, 15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteCategory {
    HouseholdOrganic,
    PlasticPaper,
    EWaste,
    MedicalChemical,
    Construction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityTier {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Standard,
    Fast,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleSize {
    Auto,
    MiniTruck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorAccess {
    Ground,
    First,
    Second,
    ThirdPlus,
    Elevator,
}

/// Lowercase and keep only alphanumerics and `+`, so `"E-Waste"`,
/// `"e_waste"` and `"ewaste"` all compare equal.
fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '+')
        .flat_map(char::to_lowercase)
        .collect()
}

impl WasteCategory {
    pub const ALL: [Self; 5] = [
        Self::HouseholdOrganic,
        Self::PlasticPaper,
        Self::EWaste,
        Self::MedicalChemical,
        Self::Construction,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "household" | "organic" | "householdorganic" | "general" => {
                Some(Self::HouseholdOrganic)
            }
            "plastic" | "paper" | "plasticpaper" | "recyclable" | "recyclables" => {
                Some(Self::PlasticPaper)
            }
            "ewaste" | "electronic" | "electronics" => Some(Self::EWaste),
            "medical" | "chemical" | "medicalchemical" | "hazardous" => {
                Some(Self::MedicalChemical)
            }
            "construction" | "debris" | "constructiondebris" => Some(Self::Construction),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HouseholdOrganic => "Household/Organic",
            Self::PlasticPaper => "Plastic/Paper",
            Self::EWaste => "E-Waste",
            Self::MedicalChemical => "Medical/Chemical",
            Self::Construction => "Construction",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::HouseholdOrganic => 1.0,
            Self::PlasticPaper => 1.1,
            Self::EWaste => 1.5,
            Self::MedicalChemical => 2.0,
            Self::Construction => 1.3,
        }
    }

    fn handling_note(self) -> Option<&'static str> {
        match self {
            Self::EWaste => Some("hazardous handling"),
            Self::MedicalChemical => Some("special disposal"),
            Self::Construction => Some("heavy"),
            Self::HouseholdOrganic | Self::PlasticPaper => None,
        }
    }
}

impl QuantityTier {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "small" | "s" => Some(Self::Small),
            "medium" | "m" => Some(Self::Medium),
            "large" | "l" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    pub fn extent(self) -> &'static str {
        match self {
            Self::Small => "1-2 bags",
            Self::Medium => "3-5 bags",
            Self::Large => "6+ bags or >50kg",
        }
    }

    pub fn surcharge_pct(self) -> u32 {
        match self {
            Self::Small => 0,
            Self::Medium => 20,
            Self::Large => 40,
        }
    }
}

impl Urgency {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Fast, Self::Emergency];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "standard" | "normal" | "regular" => Some(Self::Standard),
            "fast" | "express" | "priority" => Some(Self::Fast),
            "emergency" | "urgent" | "immediate" => Some(Self::Emergency),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Fast => "Fast",
            Self::Emergency => "Emergency",
        }
    }

    pub fn surcharge_pct(self) -> u32 {
        match self {
            Self::Standard => 0,
            Self::Fast => 30,
            Self::Emergency => 60,
        }
    }
}

impl VehicleSize {
    pub const ALL: [Self; 2] = [Self::Auto, Self::MiniTruck];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "auto" | "autorickshaw" | "rickshaw" => Some(Self::Auto),
            "minitruck" | "truck" | "mini" => Some(Self::MiniTruck),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::MiniTruck => "Mini Truck",
        }
    }

    /// Flat surcharge band in rupees on top of the base fare.
    pub fn surcharge(self) -> (u32, u32) {
        match self {
            Self::Auto => (0, 0),
            Self::MiniTruck => (100, 200),
        }
    }
}

impl FloorAccess {
    pub const ALL: [Self; 5] = [
        Self::Ground,
        Self::First,
        Self::Second,
        Self::ThirdPlus,
        Self::Elevator,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "ground" | "groundfloor" | "0" | "g" => Some(Self::Ground),
            "1" | "1st" | "first" | "1stfloor" | "firstfloor" => Some(Self::First),
            "2" | "2nd" | "second" | "2ndfloor" | "secondfloor" => Some(Self::Second),
            "3+" | "3" | "3rd" | "3rd+" | "third" | "3rdfloor" | "thirdfloor" => {
                Some(Self::ThirdPlus)
            }
            "elevator" | "lift" => Some(Self::Elevator),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ground => "Ground",
            Self::First => "1st",
            Self::Second => "2nd",
            Self::ThirdPlus => "3+",
            Self::Elevator => "Elevator",
        }
    }

    /// Fee adjustment in rupees; the elevator discount is negative.
    pub fn fee_delta(self) -> i32 {
        match self {
            Self::Ground => 0,
            Self::First => 20,
            Self::Second => 40,
            Self::ThirdPlus => 60,
            Self::Elevator => -10,
        }
    }
}

fn signed_rupees(delta: i32) -> String {
    if delta < 0 {
        format!("-₹{}", delta.unsigned_abs())
    } else {
        format!("+₹{}", delta)
    }
}

fn join<T: Copy>(items: &[T], render: impl Fn(T) -> String) -> String {
    items
        .iter()
        .map(|item| render(*item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the tariff tables into the instruction message sent with every
/// estimate request.
pub fn system_prompt() -> String {
    let mut lines = vec![
        "You are an AI pricing engine for a waste management service. \
         Calculate fair pricing based on:"
            .to_string(),
        String::new(),
        "BASE PRICING RULES:".to_string(),
        format!(
            "- Base fare: ₹{}-{} (depends on city/zone)",
            BASE_FARE.0, BASE_FARE.1
        ),
        format!("- Distance: ₹{}-{} per km", PER_KM_RATE.0, PER_KM_RATE.1),
        format!(
            "- Urgency: {}",
            join(&Urgency::ALL, |u| if u.surcharge_pct() == 0 {
                format!("{} (0%)", u.label())
            } else {
                format!("{} (+{}%)", u.label(), u.surcharge_pct())
            })
        ),
        format!(
            "- Vehicle: {}",
            join(&VehicleSize::ALL, |v| match v.surcharge() {
                (0, 0) => format!("{} (base)", v.label()),
                (low, high) => format!("{} (+₹{}-{})", v.label(), low, high),
            })
        ),
        format!(
            "- Floor/Stairs: {}",
            join(&FloorAccess::ALL, |f| if f.fee_delta() == 0 {
                format!("{} (0%)", f.label())
            } else {
                format!("{} ({})", f.label(), signed_rupees(f.fee_delta()))
            })
        ),
        String::new(),
        "CATEGORY MULTIPLIERS:".to_string(),
    ];

    lines.extend(WasteCategory::ALL.iter().map(|category| {
        match category.handling_note() {
            Some(note) => format!(
                "- {}: {:.1}x ({})",
                category.label(),
                category.multiplier(),
                note
            ),
            None => format!("- {}: {:.1}x", category.label(), category.multiplier()),
        }
    }));

    lines.push(String::new());
    lines.push("QUANTITY IMPACT:".to_string());
    lines.extend(QuantityTier::ALL.iter().map(|tier| {
        if tier.surcharge_pct() == 0 {
            format!("- {} ({}): base", tier.label(), tier.extent())
        } else {
            format!(
                "- {} ({}): +{}%",
                tier.label(),
                tier.extent(),
                tier.surcharge_pct()
            )
        }
    }));

    lines.push(String::new());
    lines.push(
        "Calculate min, max, and recommended price. Provide breakdown and assumptions."
            .to_string(),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("e-waste", WasteCategory::EWaste)]
    #[case("E Waste", WasteCategory::EWaste)]
    #[case("ewaste", WasteCategory::EWaste)]
    #[case("household", WasteCategory::HouseholdOrganic)]
    #[case("Plastic/Paper", WasteCategory::PlasticPaper)]
    #[case("medical_chemical", WasteCategory::MedicalChemical)]
    #[case("construction", WasteCategory::Construction)]
    fn test_category_labels(#[case] label: &str, #[case] expected: WasteCategory) {
        assert_eq!(WasteCategory::from_label(label), Some(expected));
    }

    #[rstest]
    #[case("3+", FloorAccess::ThirdPlus)]
    #[case("3rd+", FloorAccess::ThirdPlus)]
    #[case("ground", FloorAccess::Ground)]
    #[case("1st", FloorAccess::First)]
    #[case("2", FloorAccess::Second)]
    #[case("Elevator", FloorAccess::Elevator)]
    fn test_floor_labels(#[case] label: &str, #[case] expected: FloorAccess) {
        assert_eq!(FloorAccess::from_label(label), Some(expected));
    }

    #[rstest]
    #[case("mini-truck", Some(VehicleSize::MiniTruck))]
    #[case("mini_truck", Some(VehicleSize::MiniTruck))]
    #[case("auto", Some(VehicleSize::Auto))]
    #[case("helicopter", None)]
    fn test_vehicle_labels(#[case] label: &str, #[case] expected: Option<VehicleSize>) {
        assert_eq!(VehicleSize::from_label(label), expected);
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(WasteCategory::from_label("spaceship parts"), None);
        assert_eq!(Urgency::from_label(""), None);
        assert_eq!(QuantityTier::from_label("huge"), None);
    }

    #[rstest]
    #[case(Urgency::Standard, 0)]
    #[case(Urgency::Fast, 30)]
    #[case(Urgency::Emergency, 60)]
    fn test_urgency_surcharges(#[case] urgency: Urgency, #[case] pct: u32) {
        assert_eq!(urgency.surcharge_pct(), pct);
    }

    #[test]
    fn test_tariff_values() {
        assert_eq!(WasteCategory::EWaste.multiplier(), 1.5);
        assert_eq!(WasteCategory::MedicalChemical.multiplier(), 2.0);
        assert_eq!(QuantityTier::Large.surcharge_pct(), 40);
        assert_eq!(FloorAccess::Elevator.fee_delta(), -10);
        assert_eq!(VehicleSize::MiniTruck.surcharge(), (100, 200));
    }

    #[test]
    fn test_system_prompt_renders_every_table() {
        let prompt = system_prompt();

        assert!(prompt.starts_with("You are an AI pricing engine for a waste management service."));
        assert!(prompt.contains("- Base fare: ₹50-100 (depends on city/zone)"));
        assert!(prompt.contains("- Distance: ₹10-15 per km"));
        assert!(prompt.contains("- Urgency: Standard (0%), Fast (+30%), Emergency (+60%)"));
        assert!(prompt.contains("- Vehicle: Auto (base), Mini Truck (+₹100-200)"));
        assert!(prompt.contains(
            "- Floor/Stairs: Ground (0%), 1st (+₹20), 2nd (+₹40), 3+ (+₹60), Elevator (-₹10)"
        ));
        assert!(prompt.contains("- Household/Organic: 1.0x\n"));
        assert!(prompt.contains("- E-Waste: 1.5x (hazardous handling)"));
        assert!(prompt.contains("- Medical/Chemical: 2.0x (special disposal)"));
        assert!(prompt.contains("- Construction: 1.3x (heavy)"));
        assert!(prompt.contains("- Small (1-2 bags): base"));
        assert!(prompt.contains("- Medium (3-5 bags): +20%"));
        assert!(prompt.contains("- Large (6+ bags or >50kg): +40%"));
        assert!(prompt.ends_with("Provide breakdown and assumptions."));
    }

    #[test]
    fn test_system_prompt_sections_are_blank_line_separated() {
        let prompt = system_prompt();

        assert!(prompt.contains("based on:\n\nBASE PRICING RULES:\n- Base fare"));
        assert!(prompt.contains("Elevator (-₹10)\n\nCATEGORY MULTIPLIERS:\n- Household"));
        assert!(prompt.contains("(heavy)\n\nQUANTITY IMPACT:\n- Small"));
        assert!(prompt.contains("+40%\n\nCalculate min, max, and recommended price."));
        assert!(!prompt.ends_with('\n'));
        assert_eq!(prompt.lines().count(), 22);
    }
}
