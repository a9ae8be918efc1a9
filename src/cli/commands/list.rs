use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionLog;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::parse_date_or_today;
use crate::utils::formatting::{bold, secs2hms};
use crate::utils::secs2hm;
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let day = parse_date_or_today(date.as_deref())?;
        let log = SessionLog::load(cfg.log_path())?;
        let sessions = log.sessions_on(day);

        if sessions.is_empty() {
            info(format!("No sessions on {}", day.format("%Y-%m-%d")));
            return Ok(());
        }

        println!("{}\n", bold(&format!("Sessions on {}", day.format("%A %Y-%m-%d"))));

        let mut table = Table::new(vec![
            Column::new("#"),
            Column::new("Start"),
            Column::new("End"),
            Column::new("Duration"),
        ]);

        let mut total = 0;
        for (i, iv) in sessions.iter().enumerate() {
            let secs = iv.rounded_seconds();
            total += secs;
            table.add_row(vec![
                (i + 1).to_string(),
                iv.start().with_timezone(&Local).format("%H:%M:%S").to_string(),
                iv.end().with_timezone(&Local).format("%H:%M:%S").to_string(),
                secs2hms(secs),
            ]);
        }

        print!("{}", table.render());
        println!("\nTotal: {}", secs2hm(total));
    }

    Ok(())
}
