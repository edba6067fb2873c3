//! Expense category value object
//!
//! Closed set of 38 spending categories. Wire names are the snake_case
//! variant names; display labels and group headers match the expense page.

use serde::{Deserialize, Serialize};

/// Spending category for a transaction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    // Taxes
    TaxPayments,
    // Housing
    RentMortgage,
    Utilities,
    HousingFees,
    RentersInsurance,
    Moving,
    // Daily life
    #[default]
    Groceries,
    HealthMedical,
    TransportParking,
    Gas,
    CarFees,
    CarMaintenance,
    // Purchases
    Clothing,
    LifeInsurance,
    Legal,
    HomeGoods,
    Technology,
    TechSubscriptions,
    // Personal
    PersonalCare,
    EducationOffice,
    Pets,
    // Social
    DiningOut,
    PartyHosting,
    Travel,
    FunMoney,
    EntertainmentSubscriptions,
    // Giving
    Charity,
    Gifts,
    FamilySupport,
    // Savings
    SavingsIra,
    SavingsMedical,
    SavingsComputer,
    SavingsWedding,
    SavingsCarDown,
    SavingsHomeDown,
    SavingsEmergencyFund,
    // Debt
    DebtRepayment,
    Other,
}

impl ExpenseCategory {
    /// All categories, grouped display order
    pub const ALL: [ExpenseCategory; 38] = [
        ExpenseCategory::TaxPayments,
        ExpenseCategory::RentMortgage,
        ExpenseCategory::Utilities,
        ExpenseCategory::HousingFees,
        ExpenseCategory::RentersInsurance,
        ExpenseCategory::Moving,
        ExpenseCategory::Groceries,
        ExpenseCategory::HealthMedical,
        ExpenseCategory::TransportParking,
        ExpenseCategory::Gas,
        ExpenseCategory::CarFees,
        ExpenseCategory::CarMaintenance,
        ExpenseCategory::Clothing,
        ExpenseCategory::LifeInsurance,
        ExpenseCategory::Legal,
        ExpenseCategory::HomeGoods,
        ExpenseCategory::Technology,
        ExpenseCategory::TechSubscriptions,
        ExpenseCategory::PersonalCare,
        ExpenseCategory::EducationOffice,
        ExpenseCategory::Pets,
        ExpenseCategory::DiningOut,
        ExpenseCategory::PartyHosting,
        ExpenseCategory::Travel,
        ExpenseCategory::FunMoney,
        ExpenseCategory::EntertainmentSubscriptions,
        ExpenseCategory::Charity,
        ExpenseCategory::Gifts,
        ExpenseCategory::FamilySupport,
        ExpenseCategory::SavingsIra,
        ExpenseCategory::SavingsMedical,
        ExpenseCategory::SavingsComputer,
        ExpenseCategory::SavingsWedding,
        ExpenseCategory::SavingsCarDown,
        ExpenseCategory::SavingsHomeDown,
        ExpenseCategory::SavingsEmergencyFund,
        ExpenseCategory::DebtRepayment,
        ExpenseCategory::Other,
    ];

    /// Human label for tables and pickers
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::TaxPayments => "Tax Payments (if not WH)",
            ExpenseCategory::RentMortgage => "Rent / Mortgage",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::HousingFees => "Housing Fees",
            ExpenseCategory::RentersInsurance => "Renter's Insurance",
            ExpenseCategory::Moving => "Moving",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::HealthMedical => "Health / Medical",
            ExpenseCategory::TransportParking => "Transport / Parking",
            ExpenseCategory::Gas => "Gas",
            ExpenseCategory::CarFees => "Car Fees / Registration",
            ExpenseCategory::CarMaintenance => "Car Maintenance",
            ExpenseCategory::Clothing => "Clothing",
            ExpenseCategory::LifeInsurance => "Life Insurance",
            ExpenseCategory::Legal => "Legal",
            ExpenseCategory::HomeGoods => "Home Goods",
            ExpenseCategory::Technology => "Technology",
            ExpenseCategory::TechSubscriptions => "Tech Subscriptions",
            ExpenseCategory::PersonalCare => "Personal Care",
            ExpenseCategory::EducationOffice => "Education / Office",
            ExpenseCategory::Pets => "Pets",
            ExpenseCategory::DiningOut => "Dining Out",
            ExpenseCategory::PartyHosting => "Party Hosting",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::FunMoney => "Fun Money",
            ExpenseCategory::EntertainmentSubscriptions => "Entertainment Subscriptions",
            ExpenseCategory::Charity => "Charity",
            ExpenseCategory::Gifts => "Gifts",
            ExpenseCategory::FamilySupport => "Family Support",
            ExpenseCategory::SavingsIra => "IRA Contributions",
            ExpenseCategory::SavingsMedical => "Medical Procedure",
            ExpenseCategory::SavingsComputer => "New Computer",
            ExpenseCategory::SavingsWedding => "Wedding",
            ExpenseCategory::SavingsCarDown => "Car Down Payment",
            ExpenseCategory::SavingsHomeDown => "Home Down Payment",
            ExpenseCategory::SavingsEmergencyFund => "Emergency Fund",
            ExpenseCategory::DebtRepayment => "Credit Card Balance",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Group header the category appears under
    pub fn group(&self) -> &'static str {
        match self {
            ExpenseCategory::TaxPayments => "Taxes",
            ExpenseCategory::RentMortgage
            | ExpenseCategory::Utilities
            | ExpenseCategory::HousingFees
            | ExpenseCategory::RentersInsurance
            | ExpenseCategory::Moving => "Housing",
            ExpenseCategory::Groceries
            | ExpenseCategory::HealthMedical
            | ExpenseCategory::TransportParking
            | ExpenseCategory::Gas
            | ExpenseCategory::CarFees
            | ExpenseCategory::CarMaintenance => "Daily Life",
            ExpenseCategory::Clothing
            | ExpenseCategory::LifeInsurance
            | ExpenseCategory::Legal
            | ExpenseCategory::HomeGoods
            | ExpenseCategory::Technology
            | ExpenseCategory::TechSubscriptions => "Purchases",
            ExpenseCategory::PersonalCare
            | ExpenseCategory::EducationOffice
            | ExpenseCategory::Pets => "Personal",
            ExpenseCategory::DiningOut
            | ExpenseCategory::PartyHosting
            | ExpenseCategory::Travel
            | ExpenseCategory::FunMoney
            | ExpenseCategory::EntertainmentSubscriptions => "Social",
            ExpenseCategory::Charity | ExpenseCategory::Gifts | ExpenseCategory::FamilySupport => {
                "Giving"
            }
            ExpenseCategory::SavingsIra
            | ExpenseCategory::SavingsMedical
            | ExpenseCategory::SavingsComputer
            | ExpenseCategory::SavingsWedding
            | ExpenseCategory::SavingsCarDown
            | ExpenseCategory::SavingsHomeDown
            | ExpenseCategory::SavingsEmergencyFund => "Savings",
            ExpenseCategory::DebtRepayment => "Debt",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn is_savings(&self) -> bool {
        self.group() == "Savings"
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // wire name, e.g. "rent_mortgage"
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json.trim_matches('"'))
    }
}
