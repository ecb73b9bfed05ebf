use crate::db::migrate::applied_count;
use crate::db::pool::DbPool;
use crate::db::store::{load_month, stored_months};
use crate::errors::AppResult;
use crate::models::time_field::TimeField;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Migrations applied:{} {}",
        CYAN,
        RESET,
        applied_count(&pool.conn)?
    );

    //
    // 2) STORED MONTHS
    //
    let months = stored_months(pool)?;
    println!(
        "{}• Stored months:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        months.len(),
        RESET
    );

    let fmt_first = months
        .first()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = months
        .last()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Month range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 3) DAYS WITH AN ENTRY TIME
    //
    let mut recorded = 0;
    for m in &months {
        if let Some(days) = load_month(pool, m)? {
            recorded += days
                .iter()
                .filter(|d| d.get(TimeField::Entry).is_some())
                .count();
        }
    }
    println!("{}• Recorded days:{} {}", CYAN, RESET, recorded);

    println!();
    Ok(())
}
