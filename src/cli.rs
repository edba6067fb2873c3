use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Waypoint - guided personal finance workbook
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'waypoint' without arguments for the interactive menu.")]
pub struct Cli {
    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Guided first-run setup
    Onboard,

    /// Net worth, cash, and monthly spending at a glance
    Summary,

    /// Savings, debt, and milestone goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Cash, investment, loan, and credit card accounts
    Accounts {
        #[command(subcommand)]
        action: Option<AccountsAction>,
    },

    /// Spending log and monthly budget
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Income streams, paychecks, and estimated taxes
    Income {
        #[command(subcommand)]
        action: Option<IncomeAction>,
    },

    /// Net worth history and growth goal
    #[command(name = "networth")]
    NetWorth {
        #[command(subcommand)]
        action: Option<NetWorthAction>,
    },

    /// Recurring financial maintenance checklist
    Schedule {
        #[command(subcommand)]
        action: Option<ScheduleAction>,
    },

    /// Institution, fund, and credit card reference sheets
    Institutions {
        #[command(subcommand)]
        action: Option<InstitutionsAction>,
    },

    /// Emergency fund target builder
    Fund {
        #[command(subcommand)]
        action: Option<FundAction>,
    },

    /// Load the sample dataset into the workbook
    Sample,

    /// Wipe the workbook and restart onboarding
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalsAction {
    /// List goals with progress (default)
    List,

    /// Add a goal interactively
    Add,

    /// Delete a goal
    Delete {
        /// Goal ID (prompts when omitted)
        id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountsAction {
    /// List accounts grouped by category (default)
    List,

    /// Add an account interactively
    Add,

    /// Delete an account
    Delete {
        /// Account ID (prompts when omitted)
        id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExpensesAction {
    /// Recent transactions and category totals (default)
    List,

    /// Record a transaction interactively
    Add,

    /// Delete a transaction
    Delete {
        /// Transaction ID (prompts when omitted)
        id: Option<String>,
    },

    /// Set the tracking window and monthly spending goal
    Budget,
}

#[derive(Subcommand, Debug)]
pub enum IncomeAction {
    /// Streams, recent paychecks, and estimated taxes (default)
    List,

    /// Add an income stream interactively
    Add,

    /// Delete an income stream
    Delete {
        /// Stream ID (prompts when omitted)
        id: Option<String>,
    },

    /// Record a paycheck and check the net against withholdings
    Paycheck,

    /// Record an estimated tax payment
    Tax,
}

#[derive(Subcommand, Debug)]
pub enum NetWorthAction {
    /// Monthly entries with growth deltas (default)
    List,

    /// Record a month-end snapshot interactively
    Record,

    /// Set the monthly growth goal
    Goal {
        /// New goal amount (prompts when omitted)
        amount: Option<f64>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID (prompts when omitted)
        id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleAction {
    /// Checklist grouped by frequency (default)
    List,

    /// Mark a task done (or undone) for today
    Toggle {
        /// Task ID (prompts when omitted)
        id: Option<String>,
    },

    /// Edit the personal dates note on a task
    Dates {
        /// Task ID (prompts when omitted)
        id: Option<String>,
    },

    /// Add a custom task
    Add,

    /// Delete a custom task
    Delete {
        /// Task ID (prompts when omitted)
        id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum InstitutionsAction {
    /// Institutions, funds, and card comparisons (default)
    List,

    /// Add a reference row interactively
    Add,

    /// Delete a reference row
    Delete {
        /// Row ID (prompts when omitted)
        id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FundAction {
    /// Scenario list and combined target (default)
    List,

    /// Toggle a scenario on or off
    Toggle {
        /// Scenario ID (prompts when omitted)
        id: Option<String>,
    },

    /// Set a scenario amount
    Amount {
        /// Scenario ID (prompts when omitted)
        id: Option<String>,

        /// New amount (prompts when omitted)
        amount: Option<f64>,
    },

    /// Restore the built-in scenario list
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["waypoint"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_summary() {
        let cli = Cli::try_parse_from(["waypoint", "summary"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Summary)));
    }

    #[test]
    fn test_cli_parse_goals_defaults_to_no_action() {
        let cli = Cli::try_parse_from(["waypoint", "goals"]).unwrap();
        if let Some(Commands::Goals { action }) = cli.command {
            assert!(action.is_none());
        } else {
            panic!("Expected Goals command");
        }
    }

    #[test]
    fn test_cli_parse_goals_delete_with_id() {
        let cli = Cli::try_parse_from(["waypoint", "goals", "delete", "g1"]).unwrap();
        if let Some(Commands::Goals {
            action: Some(GoalsAction::Delete { id }),
        }) = cli.command
        {
            assert_eq!(id.as_deref(), Some("g1"));
        } else {
            panic!("Expected Goals delete command");
        }
    }

    #[test]
    fn test_cli_parse_networth() {
        let cli = Cli::try_parse_from(["waypoint", "networth"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::NetWorth { .. })));
    }

    #[test]
    fn test_cli_parse_networth_goal_amount() {
        let cli = Cli::try_parse_from(["waypoint", "networth", "goal", "250"]).unwrap();
        if let Some(Commands::NetWorth {
            action: Some(NetWorthAction::Goal { amount }),
        }) = cli.command
        {
            assert_eq!(amount, Some(250.0));
        } else {
            panic!("Expected NetWorth goal command");
        }
    }

    #[test]
    fn test_cli_parse_schedule_toggle() {
        let cli = Cli::try_parse_from(["waypoint", "schedule", "toggle", "s7"]).unwrap();
        if let Some(Commands::Schedule {
            action: Some(ScheduleAction::Toggle { id }),
        }) = cli.command
        {
            assert_eq!(id.as_deref(), Some("s7"));
        } else {
            panic!("Expected Schedule toggle command");
        }
    }

    #[test]
    fn test_cli_parse_fund_amount() {
        let cli = Cli::try_parse_from(["waypoint", "fund", "amount", "ef2", "450.5"]).unwrap();
        if let Some(Commands::Fund {
            action: Some(FundAction::Amount { id, amount }),
        }) = cli.command
        {
            assert_eq!(id.as_deref(), Some("ef2"));
            assert_eq!(amount, Some(450.5));
        } else {
            panic!("Expected Fund amount command");
        }
    }

    #[test]
    fn test_cli_parse_income_paycheck() {
        let cli = Cli::try_parse_from(["waypoint", "income", "paycheck"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Income {
                action: Some(IncomeAction::Paycheck),
            })
        ));
    }

    #[test]
    fn test_cli_parse_reset() {
        let cli = Cli::try_parse_from(["waypoint", "reset"]).unwrap();
        if let Some(Commands::Reset { yes }) = cli.command {
            assert!(!yes);
        } else {
            panic!("Expected Reset command");
        }
    }

    #[test]
    fn test_cli_parse_reset_yes() {
        let cli = Cli::try_parse_from(["waypoint", "reset", "--yes"]).unwrap();
        if let Some(Commands::Reset { yes }) = cli.command {
            assert!(yes);
        } else {
            panic!("Expected Reset command");
        }
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["waypoint", "--color", "never", "summary"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_color_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["waypoint", "summary", "--color", "always"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Always)));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["waypoint", "-vv", "summary"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Summary)));
    }

    #[test]
    fn test_cli_parse_onboard() {
        let cli = Cli::try_parse_from(["waypoint", "onboard"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Onboard)));
    }

    #[test]
    fn test_cli_parse_sample() {
        let cli = Cli::try_parse_from(["waypoint", "sample"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sample)));
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        let result = Cli::try_parse_from(["waypoint", "budgets"]);
        assert!(result.is_err());
    }
}
