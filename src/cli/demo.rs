use std::path::Path;

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::Result;
use crate::models::{Amount, Expense, MonthKey};

struct SeedExpense {
    day: u32,
    category: &'static str,
    amount: f64,
}

const MONTHLY: &[SeedExpense] = &[
    SeedExpense { day: 1, category: "Rent", amount: 1150.00 },
    SeedExpense { day: 4, category: "Groceries", amount: 214.37 },
    SeedExpense { day: 9, category: "Transport", amount: 62.00 },
    SeedExpense { day: 15, category: "Groceries", amount: 188.90 },
    SeedExpense { day: 21, category: "Dining", amount: 54.25 },
    SeedExpense { day: 28, category: "Utilities", amount: 97.60 },
];

/// Clamp a day to the last valid day of the given year/month.
fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let last_day = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap())
        .pred_opt()
        .unwrap()
        .day();
    day.min(last_day)
}

fn make_date(year: i32, month: u32, day: u32) -> String {
    let d = clamp_day(year, month, day);
    format!("{d:02}-{month:02}-{year:04}")
}

/// Build six months of sample expenses ending at the current month.
fn generate_expenses() -> Vec<Expense> {
    let today = Local::now().date_naive();
    let mut records = Vec::new();

    for i in 0..6u32 {
        let target = today - Months::new(5 - i);
        for seed in MONTHLY {
            // Small deterministic variation so month totals actually move
            let vary = 1.0 + ((i % 4) as f64 - 1.0) * 0.05;
            let amount = if seed.category == "Rent" {
                seed.amount
            } else {
                (seed.amount * vary * 100.0).round() / 100.0
            };
            records.push(Expense {
                date: make_date(target.year(), target.month(), seed.day),
                category: seed.category.to_string(),
                amount: Amount::Numeric(amount),
            });
        }
    }
    records
}

pub fn run(ledger: Option<&Path>) -> Result<()> {
    let store = super::resolve_store(ledger);

    // Idempotency guard
    let existing = store.load()?;
    if !existing.is_empty() {
        println!(
            "Ledger already has {} records; demo data not loaded.",
            existing.len()
        );
        return Ok(());
    }

    let records = generate_expenses();
    store.replace(&records)?;

    let current_month = MonthKey::from_date(Local::now().date_naive()).label();
    println!("Demo data loaded!");
    println!("  Records: {}", records.len());
    println!();
    println!("Try these next:");
    println!("  tally summary");
    println!("  tally month {current_month}");
    println!("  tally export expenses.xlsx");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_expenses_count() {
        assert_eq!(generate_expenses().len(), 6 * MONTHLY.len());
    }

    #[test]
    fn test_dates_are_valid_and_span_six_months() {
        let records = generate_expenses();
        let mut months = std::collections::BTreeSet::new();
        for record in &records {
            let parsed = record.parsed_date();
            assert!(parsed.is_ok(), "invalid date: {}", record.date);
            months.insert(record.month_key().unwrap());
        }
        assert_eq!(months.len(), 6);
    }

    #[test]
    fn test_clamp_day_handles_short_months() {
        assert_eq!(clamp_day(2024, 2, 28), 28);
        assert_eq!(clamp_day(2023, 2, 28), 28);
        assert_eq!(clamp_day(2024, 4, 31), 30);
        assert_eq!(clamp_day(2024, 12, 31), 31);
    }
}
