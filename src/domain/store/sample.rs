//! Demonstration dataset loaded by `load_sample_data`
//!
//! A worked example of a grad-student budget: three goals, twenty
//! accounts, a quarter of transactions, comparison tables and four
//! income streams. Account rows are stamped with the caller's today so
//! the data always looks freshly updated.

use crate::domain::entities::{
    Account, AccountKind, ExpenseSettings, Goal, IncomeStream, InstitutionRow, SecurityReference,
    SmartPlan, Transaction,
};
use crate::domain::value_objects::{
    CardKind, ExpenseCategory, GoalKind, IncomeKind, InstitutionKind, Timeframe,
};

pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "g1".to_string(),
            timeframe: Timeframe::Short,
            kind: GoalKind::Savings,
            title: "Build Emergency Fund".to_string(),
            description: "Build a 1-month emergency fund of $3,000".to_string(),
            target_amount: 3000.0,
            current_amount: 1800.0,
            target_date: "2024-06-30".to_string(),
            linked_account_id: None,
            smart: SmartPlan {
                specific: "Build a 1-month emergency fund of $3,000".to_string(),
                measurable: "Reach $3,000 in my Ally savings account".to_string(),
                achievable: "Save $200/month for 6 months; currently have $1,800".to_string(),
                relevant: "Provides a financial safety net for unexpected expenses".to_string(),
                time_bound: "By the end of June 2024".to_string(),
            },
            created_at: "2024-01-01".to_string(),
            completed_at: None,
        },
        Goal {
            id: "g2".to_string(),
            timeframe: Timeframe::Mid,
            kind: GoalKind::DebtPayoff,
            title: "Pay Off Citi Card".to_string(),
            description: "Pay off the Citi Custom Cash card balance including interest".to_string(),
            target_amount: 7200.0,
            current_amount: 5000.0,
            target_date: "2027-01-01".to_string(),
            linked_account_id: None,
            smart: SmartPlan {
                specific: "Pay off the Citi Custom Cash card — $7,200 total with interest"
                    .to_string(),
                measurable: "Balance reaches $0".to_string(),
                achievable: "$200/month extra payment over ~3 years".to_string(),
                relevant: "Eliminating 25.24% APR debt is the highest-return move I can make"
                    .to_string(),
                time_bound: "Beginning of 2027".to_string(),
            },
            created_at: "2024-01-01".to_string(),
            completed_at: None,
        },
        Goal {
            id: "g3".to_string(),
            timeframe: Timeframe::Long,
            kind: GoalKind::Savings,
            title: "Car Down Payment".to_string(),
            description: "Save $6,000 for a car down payment".to_string(),
            target_amount: 6000.0,
            current_amount: 0.0,
            target_date: "2029-01-01".to_string(),
            linked_account_id: None,
            smart: SmartPlan {
                specific: "Save $6,000 for a car down payment".to_string(),
                measurable: "$6,000 in a dedicated savings account".to_string(),
                achievable: "$100/month once emergency fund and CC are handled".to_string(),
                relevant: "Current car is aging; need to plan ahead".to_string(),
                time_bound: "Beginning of 2029".to_string(),
            },
            created_at: "2024-01-01".to_string(),
            completed_at: None,
        },
    ]
}

fn account(
    id: &str,
    institution: &str,
    nickname: &str,
    balance: f64,
    today: &str,
    kind: AccountKind,
) -> Account {
    Account {
        id: id.to_string(),
        institution: institution.to_string(),
        nickname: nickname.to_string(),
        last_four: None,
        balance,
        notes: None,
        last_updated: today.to_string(),
        kind,
    }
}

fn cash(subtype: &str, apy: Option<f64>) -> AccountKind {
    AccountKind::Cash {
        subtype: subtype.to_string(),
        apy,
    }
}

fn investment(subtype: &str, allocation_mix: &str) -> AccountKind {
    AccountKind::Investment {
        subtype: subtype.to_string(),
        allocation_mix: Some(allocation_mix.to_string()),
    }
}

fn loan(subtype: &str, apr: f64, minimum_payment: f64, due_date: Option<u32>) -> AccountKind {
    AccountKind::Loan {
        subtype: subtype.to_string(),
        apr,
        minimum_payment,
        due_date,
    }
}

pub fn accounts(today: &str) -> Vec<Account> {
    vec![
        // Cash
        Account {
            last_four: Some("4821".to_string()),
            ..account("a1", "Ally Bank", "Checking", 25.0, today, cash("Checking", None))
        },
        Account {
            last_four: Some("6204".to_string()),
            ..account(
                "a2",
                "Ally Bank",
                "Savings",
                400.0,
                today,
                cash("High-Yield Savings", Some(4.35)),
            )
        },
        Account {
            last_four: Some("9103".to_string()),
            notes: Some("12-month CD".to_string()),
            ..account("a3", "Discover", "CD", 1000.0, today, cash("CD", Some(5.3)))
        },
        account("a4", "Wallet", "Cash", 30.0, today, cash("Cash", None)),
        Account {
            last_four: Some("7712".to_string()),
            notes: Some("$12 monthly fee — close this account".to_string()),
            ..account("a5", "Chase", "Checking", 88.0, today, cash("Checking", None))
        },
        // Investments
        Account {
            last_four: Some("0041".to_string()),
            ..account(
                "a6",
                "Fidelity",
                "DCP",
                500.0,
                today,
                investment("DCP (Pre-Tax)", "70/30"),
            )
        },
        Account {
            last_four: Some("0042".to_string()),
            ..account(
                "a7",
                "Fidelity",
                "Roth IRA",
                10.0,
                today,
                investment("Roth IRA", "90/10"),
            )
        },
        Account {
            last_four: Some("2211".to_string()),
            notes: Some("Previous employer — includes employer match".to_string()),
            ..account("a8", "TIAA", "403(b)", 2000.0, today, investment("403(b)", "80/20"))
        },
        Account {
            last_four: Some("5530".to_string()),
            ..account(
                "a9",
                "Vanguard",
                "Brokerage",
                1000.0,
                today,
                investment("Brokerage", "100/0"),
            )
        },
        account(
            "a10",
            "Robinhood",
            "Stocks",
            200.0,
            today,
            AccountKind::Investment {
                subtype: "Brokerage".to_string(),
                allocation_mix: None,
            },
        ),
        account(
            "a11",
            "Acorns",
            "Round-ups",
            100.0,
            today,
            AccountKind::Investment {
                subtype: "Brokerage".to_string(),
                allocation_mix: None,
            },
        ),
        // Loans
        Account {
            notes: Some("In deferment".to_string()),
            ..account(
                "a12",
                "US Dept of Education",
                "Student Loan (Sub)",
                2000.0,
                today,
                loan("Federal Subsidized", 5.5, 0.0, None),
            )
        },
        account(
            "a13",
            "US Dept of Education",
            "Student Loan (Unsub)",
            1000.0,
            today,
            loan("Federal Unsubsidized", 5.5, 0.0, None),
        ),
        account(
            "a14",
            "Honda Financial",
            "Auto Loan (Civic)",
            6870.0,
            today,
            loan("Auto", 11.35, 489.0, Some(15)),
        ),
        Account {
            notes: Some("ER visit 6/8/23 — 0% interest".to_string()),
            ..account(
                "a15",
                "UCLA Health",
                "Medical Bill",
                400.0,
                today,
                loan("Medical", 0.0, 50.0, None),
            )
        },
        // Credit cards
        Account {
            last_four: Some("4892".to_string()),
            ..account(
                "a16",
                "Citi",
                "Custom Cash",
                5000.0,
                today,
                AccountKind::CreditCard {
                    subtype: CardKind::Standard,
                    apr: 25.24,
                    credit_limit: 5000.0,
                    minimum_payment: 35.0,
                    payment_due_date: Some(8),
                    closing_date: Some(16),
                    annual_fee: None,
                    foreign_transaction_fee: None,
                    rewards: Some("5% on top spend category".to_string()),
                },
            )
        },
        Account {
            last_four: Some("3311".to_string()),
            ..account(
                "a17",
                "Synchrony / Amazon",
                "Amazon Prime",
                25.0,
                today,
                AccountKind::CreditCard {
                    subtype: CardKind::CoBranded,
                    apr: 29.99,
                    credit_limit: 1200.0,
                    minimum_payment: 25.0,
                    payment_due_date: None,
                    closing_date: None,
                    annual_fee: None,
                    foreign_transaction_fee: None,
                    rewards: Some("5% back on Amazon".to_string()),
                },
            )
        },
        Account {
            last_four: Some("0072".to_string()),
            ..account(
                "a18",
                "Discover",
                "Discover It",
                89.0,
                today,
                AccountKind::CreditCard {
                    subtype: CardKind::Standard,
                    apr: 29.24,
                    credit_limit: 2500.0,
                    minimum_payment: 25.0,
                    payment_due_date: None,
                    closing_date: None,
                    annual_fee: None,
                    foreign_transaction_fee: None,
                    rewards: Some("5% rotating categories, 1% all else".to_string()),
                },
            )
        },
        Account {
            last_four: Some("6601".to_string()),
            notes: Some("Mom's account — I'm an authorized user".to_string()),
            ..account(
                "a19",
                "Chase",
                "Southwest (AU)",
                0.0,
                today,
                AccountKind::CreditCard {
                    subtype: CardKind::AuthorizedUser,
                    apr: 27.99,
                    credit_limit: 5000.0,
                    minimum_payment: 0.0,
                    payment_due_date: None,
                    closing_date: None,
                    annual_fee: Some(149.0),
                    foreign_transaction_fee: None,
                    rewards: None,
                },
            )
        },
        Account {
            last_four: Some("8834".to_string()),
            ..account(
                "a20",
                "Chase",
                "Freedom Unlimited",
                0.0,
                today,
                AccountKind::CreditCard {
                    subtype: CardKind::Standard,
                    apr: 0.0,
                    credit_limit: 3000.0,
                    minimum_payment: 0.0,
                    payment_due_date: None,
                    closing_date: None,
                    annual_fee: None,
                    foreign_transaction_fee: None,
                    rewards: Some("0% intro APR for 15 months, 1.5% cash back".to_string()),
                },
            )
        },
    ]
}

fn txn(
    id: &str,
    date: &str,
    description: &str,
    category: ExpenseCategory,
    amount: f64,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        category,
        amount,
        account_id: None,
    }
}

pub fn transactions() -> Vec<Transaction> {
    use ExpenseCategory::{
        CarFees, Clothing, DiningOut, EntertainmentSubscriptions, Gas, Groceries, HealthMedical,
        HomeGoods, RentMortgage,
    };

    vec![
        txn("t1", "2023-10-01", "Rent", RentMortgage, 1509.83),
        txn("t2", "2023-10-02", "Trader Joes", Groceries, 63.13),
        txn("t3", "2023-10-05", "Chevron", Gas, 48.56),
        txn("t4", "2023-10-07", "Honda payment", CarFees, 489.0),
        txn("t5", "2023-10-10", "Whole Foods", Groceries, 108.49),
        txn("t6", "2023-10-12", "UCLA Student Health", HealthMedical, 25.0),
        txn("t7", "2023-10-15", "Spotify", EntertainmentSubscriptions, 9.99),
        txn("t8", "2023-10-18", "Bruin Plate (dining)", DiningOut, 32.5),
        txn("t9", "2023-10-20", "Shell", Gas, 45.31),
        txn("t10", "2023-10-22", "Amazon", HomeGoods, 47.82),
        txn("t11", "2023-11-01", "Rent", RentMortgage, 1509.83),
        txn("t12", "2023-11-03", "Ralphs", Groceries, 94.2),
        txn("t13", "2023-11-05", "Honda payment", CarFees, 489.0),
        txn("t14", "2023-11-08", "Costco Gas", Gas, 52.08),
        txn("t15", "2023-11-15", "Netflix", EntertainmentSubscriptions, 15.49),
        txn("t16", "2023-11-20", "Target", Clothing, 68.44),
        txn("t17", "2023-11-24", "Thanksgiving dinner", DiningOut, 87.3),
        txn("t18", "2023-12-01", "Rent", RentMortgage, 1509.83),
        txn("t19", "2023-12-05", "Honda payment", CarFees, 489.0),
        txn("t20", "2023-12-07", "Trader Joes", Groceries, 71.55),
    ]
}

pub fn expense_settings() -> ExpenseSettings {
    ExpenseSettings {
        start_date: "2023-10-01".to_string(),
        end_date: "2023-12-31".to_string(),
        monthly_goal: 3150.0,
    }
}

fn bank(
    id: &str,
    name: &str,
    fees_minimums: &str,
    checking_apy: &str,
    savings_apy: &str,
    cd_6mo: &str,
    cd_12mo: &str,
    cd_24mo: &str,
    pros: &str,
    cons: &str,
    is_currently_used: bool,
) -> InstitutionRow {
    InstitutionRow {
        id: id.to_string(),
        name: name.to_string(),
        kind: InstitutionKind::Bank,
        fees_minimums: fees_minimums.to_string(),
        checking_apy: checking_apy.to_string(),
        savings_apy: savings_apy.to_string(),
        cd_6mo: cd_6mo.to_string(),
        cd_12mo: cd_12mo.to_string(),
        cd_24mo: cd_24mo.to_string(),
        pros: pros.to_string(),
        cons: cons.to_string(),
        is_currently_used,
    }
}

pub fn institutions() -> Vec<InstitutionRow> {
    vec![
        bank(
            "i1",
            "Ally Bank",
            "No fees, no minimums",
            "0.10",
            "4.35",
            "5.00",
            "5.25",
            "4.10",
            "Great rates, no fees, easy transfers",
            "No physical branches",
            true,
        ),
        bank(
            "i2",
            "Marcus by Goldman Sachs",
            "No fees",
            "",
            "4.50",
            "5.10",
            "5.15",
            "4.25",
            "High savings APY",
            "Savings only, no checking",
            false,
        ),
        bank(
            "i3",
            "Chase Bank",
            "$12/mo (waivable)",
            "0.01",
            "0.01",
            "0.01",
            "0.01",
            "0.01",
            "Huge ATM network, branches everywhere",
            "Near-zero APY on savings",
            true,
        ),
        bank(
            "i4",
            "Discover Bank",
            "No fees",
            "1.00",
            "4.25",
            "4.70",
            "4.70",
            "4.25",
            "Good rates, 1% cash back on debit",
            "Limited ATM network",
            false,
        ),
    ]
}

pub fn securities() -> Vec<SecurityReference> {
    let security = |id: &str, ticker: &str, name: &str, expense_ratio: &str, notes: &str| {
        SecurityReference {
            id: id.to_string(),
            ticker: ticker.to_string(),
            name: name.to_string(),
            expense_ratio: expense_ratio.to_string(),
            notes: notes.to_string(),
        }
    };

    vec![
        security("sec1", "VOO", "Vanguard S&P 500 ETF", "0.03", "Core US large-cap holding"),
        security(
            "sec2",
            "VTSAX",
            "Vanguard Total Stock Market",
            "0.04",
            "Broadest US market exposure",
        ),
        security(
            "sec3",
            "FZILX",
            "Fidelity ZERO International",
            "0.00",
            "Free international index fund",
        ),
    ]
}

pub fn income_streams() -> Vec<IncomeStream> {
    let stream = |id: &str, name: &str, kind: IncomeKind, is_active: bool| IncomeStream {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        is_active,
    };

    vec![
        stream("is1", "Neurology GSR", IncomeKind::W2, true),
        stream("is2", "Financial Wellness! (Hourly)", IncomeKind::Hourly, true),
        stream("is3", "NRSA Fellowship", IncomeKind::Fellowship, true),
        stream(
            "is4",
            "GPB Fellowship Incentive Program",
            IncomeKind::Scholarship,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts() {
        assert_eq!(goals().len(), 3);
        assert_eq!(accounts("2024-01-15").len(), 20);
        assert_eq!(transactions().len(), 20);
        assert_eq!(institutions().len(), 4);
        assert_eq!(securities().len(), 3);
        assert_eq!(income_streams().len(), 4);
    }

    #[test]
    fn test_sample_accounts_stamped_with_today() {
        let accounts = accounts("2024-03-09");
        assert!(accounts.iter().all(|a| a.last_updated == "2024-03-09"));
    }

    #[test]
    fn test_sample_category_split() {
        let accounts = accounts("2024-01-15");
        let cash = accounts
            .iter()
            .filter(|a| matches!(a.kind, AccountKind::Cash { .. }))
            .count();
        let investments = accounts
            .iter()
            .filter(|a| matches!(a.kind, AccountKind::Investment { .. }))
            .count();
        let loans = accounts
            .iter()
            .filter(|a| matches!(a.kind, AccountKind::Loan { .. }))
            .count();
        let cards = accounts
            .iter()
            .filter(|a| matches!(a.kind, AccountKind::CreditCard { .. }))
            .count();

        assert_eq!((cash, investments, loans, cards), (5, 6, 4, 5));
    }

    #[test]
    fn test_sample_transactions_have_no_account_links() {
        assert!(transactions().iter().all(|t| t.account_id.is_none()));
    }
}
