use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{aggregate_extra_duration, day_extra};
use crate::core::session::MonthSession;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::month_key::Direction;
use crate::models::time_field::TimeField;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RED, RESET, color_for_extra, colorize_in_out, colorize_optional};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month, prev, next } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut session = MonthSession::open(&pool, resolve_month(month)?, cfg)?;

        if *prev {
            session.change_month(&pool, Direction::Prev)?;
        } else if *next {
            session.change_month(&pool, Direction::Next)?;
        }

        print_month(&session);
    }

    Ok(())
}

fn print_month(session: &MonthSession) {
    header(session.month().label());

    let mut table = Table::new(vec![
        Column::new("Day", 14),
        Column::new("Entry", 5),
        Column::new("Lunch start", 5),
        Column::new("Lunch end", 5),
        Column::new("Exit", 5),
        Column::new("Extra", 5),
    ]);

    for day in session.days() {
        let extra = match day_extra(day, session.standard_minutes()) {
            Ok(e) => format!("{}{}{}", color_for_extra(&e), e, RESET),
            Err(_) => format!("{RED}invalid{RESET}"),
        };

        table.add_row(vec![
            format!("{} {}", day.date.format("%a"), day.date_str()),
            colorize_in_out(&day.time_str(TimeField::Entry), true),
            colorize_optional(&day.time_str(TimeField::LunchStart)),
            colorize_optional(&day.time_str(TimeField::LunchEnd)),
            colorize_in_out(&day.time_str(TimeField::Exit), false),
            extra,
        ]);
    }

    print!("{}", table.render());

    match aggregate_extra_duration(session.days(), session.standard_minutes()) {
        Ok(total) => println!("\nTotal extra hours: {}", total),
        Err(e) => warning(format!("Total not available: {}", e)),
    }
}
