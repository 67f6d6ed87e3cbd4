use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use financing::report::{early_payoff_notice, summary_rows};
use financing::{run_financing, Financing, LoanParameters};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::process;

/// Compare paying a loan on schedule with paying it down using a fixed
/// monthly budget.
#[derive(Parser, Debug)]
#[command(name = "financing", version)]
struct Cli {
    /// Property value
    #[arg(long, default_value_t = 250000.)]
    property_value: f64,

    /// Down payment
    #[arg(long, default_value_t = 120000.)]
    down_payment: f64,

    /// Contractual term in months
    #[arg(long, default_value_t = 360)]
    term_months: u32,

    /// Annual effective rate as a fraction (0.1166 = 11.66%)
    #[arg(long, default_value_t = 0.1166)]
    annual_rate: f64,

    /// Monthly budget available for installment plus extra amortization
    #[arg(long, default_value_t = 3000.)]
    extra_budget: f64,

    /// Due date of the first installment (YYYY-MM-DD)
    #[arg(long)]
    first_payment_date: Option<NaiveDate>,

    /// Also list every installment of a schedule
    #[arg(long, value_enum)]
    installments: Option<ScheduleKind>,

    /// Print the result as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScheduleKind {
    Baseline,
    Accelerated,
}

impl Cli {
    fn loan_parameters(&self) -> LoanParameters {
        let params = LoanParameters::new(
            self.property_value,
            self.down_payment,
            self.term_months,
            self.annual_rate,
            self.extra_budget,
        );
        match self.first_payment_date {
            Some(date) => params.with_first_payment_date(date),
            None => params,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(cli.log_level()).init()?;

    let financing = run_financing(&cli.loan_parameters())?;

    #[cfg(feature = "serde")]
    if cli.json {
        println!("{}", to_json(&financing, cli.installments)?);
        return Ok(());
    }

    show_summary(&financing);
    if let Some(kind) = cli.installments {
        println!();
        show_installments(&financing, kind);
    }
    Ok(())
}

fn show_summary(financing: &Financing) {
    if let Some(notice) = financing.early_payoff() {
        println!("{}", early_payoff_notice(&notice));
        println!();
    }

    let rows = summary_rows(financing.summary());
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        let padding = width - label.chars().count();
        println!("{}{}  {}", label, " ".repeat(padding), value);
    }
}

fn show_installments(financing: &Financing, kind: ScheduleKind) {
    let installments = match kind {
        ScheduleKind::Baseline => financing.baseline(),
        ScheduleKind::Accelerated => financing.accelerated(),
    };
    for inst in installments {
        println!("{}", inst);
    }
}

#[cfg(feature = "serde")]
fn to_json(
    financing: &Financing,
    installments: Option<ScheduleKind>,
) -> Result<String, serde_json::Error> {
    let mut out = serde_json::json!({
        "summary": financing.summary(),
        "early_payoff": financing.early_payoff(),
    });
    match installments {
        Some(ScheduleKind::Baseline) => {
            out["installments"] = serde_json::to_value(financing.baseline())?
        }
        Some(ScheduleKind::Accelerated) => {
            out["installments"] = serde_json::to_value(financing.accelerated())?
        }
        None => {}
    }
    serde_json::to_string_pretty(&out)
}

// verifies that result types can cross thread boundaries
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<financing::Installment>();
    is_normal::<financing::FinancingSummary>();
    is_normal::<Financing>();
}

#[test]
fn cli_defaults_match_reference_loan() {
    let cli = Cli::parse_from(["financing"]);
    assert_eq!(
        cli.loan_parameters(),
        LoanParameters::new(250000., 120000., 360, 0.1166, 3000.)
    );
    assert_eq!(cli.log_level(), LevelFilter::Warn);

    let cli = Cli::parse_from([
        "financing",
        "--term-months",
        "12",
        "--first-payment-date",
        "2024-04-01",
        "-vv",
    ]);
    assert_eq!(cli.loan_parameters().term_months, 12);
    assert_eq!(
        cli.loan_parameters().first_payment_date,
        NaiveDate::from_ymd_opt(2024, 4, 1)
    );
    assert_eq!(cli.log_level(), LevelFilter::Debug);
}
