use anyhow::Result;
use chrono::Local;
use daylee_core::Daylee;
use daylee_core::month::YearMonth;

use crate::render::Render;

pub fn run(daylee: &Daylee, month: Option<&str>, offset: i32) -> Result<()> {
    let today = Local::now().date_naive();

    let month = match month {
        Some(m) => m.parse::<YearMonth>()?,
        None => YearMonth::containing(today),
    }
    .offset(offset);

    let grid = daylee.month_grid(month, today);
    println!("{}", grid.render());

    if daylee.session().is_none() {
        println!();
        println!("  No family calendar yet. Run `daylee create` or `daylee join` to add events.");
    }

    Ok(())
}
