use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        info: show_info,
    } = cmd
    {
        if *migrate {
            // plain connection: DbPool::new would migrate silently
            let conn = Connection::open(&cfg.database)?;
            info("Running migrations…");
            let applied = run_pending_migrations(&conn)?;
            if applied.is_empty() {
                success("Database schema is up to date.");
            }
            for v in applied {
                success(format!("Migration applied: {}", v));
            }
        }

        if *show_info {
            let pool = DbPool::new(&cfg.database)?;
            stats::print_db_info(&pool, &cfg.database)?;
        }
    }

    Ok(())
}
