//! Seed data for a fresh snapshot
//!
//! The schedule checklist and the emergency fund scenario set ship
//! pre-populated. `reset_emergency_fund_scenarios` and the onboarding
//! reset restore the scenario seed verbatim.

use std::collections::BTreeSet;

use crate::domain::entities::{EmergencyFundScenario, ScheduleItem};
use crate::domain::value_objects::Frequency;

fn item(id: &str, frequency: Frequency, task: &str) -> ScheduleItem {
    ScheduleItem {
        id: id.to_string(),
        frequency,
        task: task.to_string(),
        my_dates: String::new(),
        is_custom: false,
        completed_dates: BTreeSet::new(),
        helper_text: None,
    }
}

fn item_with_hint(id: &str, frequency: Frequency, task: &str, hint: &str) -> ScheduleItem {
    ScheduleItem {
        helper_text: Some(hint.to_string()),
        ..item(id, frequency, task)
    }
}

/// The 22 built-in schedule rows
pub fn schedule_items() -> Vec<ScheduleItem> {
    use Frequency::{Annually, Monthly, Quarterly, WeeklyBiweekly};

    vec![
        item("s1", WeeklyBiweekly, "Review budget, update transactions"),
        item_with_hint(
            "s2",
            WeeklyBiweekly,
            "Pay off credit card balance",
            "Pay before the closing date to keep utilization low. CFPB recommends staying under 30%.",
        ),
        item("s3", WeeklyBiweekly, "Review and track hours worked"),
        item("s4", Monthly, "Pay minimum monthly payments on all debts"),
        item("s5", Monthly, "Pay monthly bills (rent, utilities, etc.)"),
        item("s6", Monthly, "Review, download, and save paycheck"),
        item("s7", Monthly, "Track net worth"),
        item("s8", Monthly, "Submit employee timesheet"),
        // the one row that ships with suggested dates
        ScheduleItem {
            my_dates: "Apr 15 / Jun 15 / Sep 15 / Jan 15".to_string(),
            ..item("s9", Quarterly, "Pay estimated quarterly taxes")
        },
        item("s10", Quarterly, "Download and save BruinBill Activity PDF"),
        item("s11", Quarterly, "Check credit card rewards and maximize"),
        item_with_hint(
            "s12",
            Quarterly,
            "Check credit report at annualcreditreport.com",
            "Post-COVID you can check weekly at annualcreditreport.com.",
        ),
        item("s13", Annually, "FAFSA application"),
        item("s14", Annually, "Download and check 1098T"),
        item("s15", Annually, "File taxes"),
        item_with_hint(
            "s16",
            Annually,
            "Invest in retirement accounts",
            "Consider lump sum vs. dollar-cost averaging based on your timeline.",
        ),
        item("s17", Annually, "Rebalance investment portfolio"),
        item("s18", Annually, "Review long-term financial goals"),
        item("s19", Annually, "Review all insurance plans"),
        item(
            "s20",
            Annually,
            "Review employee benefits / employer financial planning services",
        ),
        item("s21", Annually, "Verify and download employment contracts"),
        item("s22", Annually, "Review lease and other contracts"),
    ]
}

fn scenario(
    id: &str,
    label: &str,
    example_hint: &str,
    enabled: bool,
    amount: f64,
) -> EmergencyFundScenario {
    EmergencyFundScenario {
        id: id.to_string(),
        label: label.to_string(),
        example_hint: example_hint.to_string(),
        enabled,
        amount,
    }
}

/// The fixed scenario set; only job loss starts enabled
pub fn emergency_fund_scenarios() -> Vec<EmergencyFundScenario> {
    vec![
        scenario(
            "ef1",
            "Job Loss / Loss of Income",
            "Example: 6 months of living expenses",
            true,
            12000.0,
        ),
        scenario(
            "ef2",
            "Unexpected Car Repairs",
            "Example: $500–$2,000",
            false,
            0.0,
        ),
        scenario(
            "ef3",
            "Unexpected Home Repairs / Accommodations",
            "Example: $1,000–$5,000",
            false,
            0.0,
        ),
        scenario(
            "ef4",
            "Medical Costs (Deductible)",
            "Example: Your insurance deductible amount",
            false,
            0.0,
        ),
        scenario(
            "ef5",
            "Medical Costs (Out-of-Pocket Maximum)",
            "Example: Your plan's out-of-pocket max",
            false,
            0.0,
        ),
        scenario(
            "ef6",
            "Unexpected Travel Costs",
            "Example: Round-trip flight + 1 week hotel",
            false,
            0.0,
        ),
        scenario(
            "ef7",
            "Family Member Emergency",
            "Example: 1 month of family member's living expenses",
            false,
            0.0,
        ),
        scenario(
            "ef8",
            "Rent / Utility Increases or Overlap",
            "Example: 2 weeks of current rent",
            false,
            0.0,
        ),
        scenario(
            "ef9",
            "Insurance Policy Increases",
            "Example: Estimated annual increase",
            false,
            0.0,
        ),
        scenario(
            "ef10",
            "Moving Expenses",
            "Example: First + last month rent + movers",
            false,
            0.0,
        ),
        scenario(
            "ef11",
            "\"Leaving the Country\" Fund",
            "Example: Flights + 3 months living abroad",
            false,
            0.0,
        ),
    ]
}
