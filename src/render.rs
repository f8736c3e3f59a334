//! Terminal rendering for daylee-core types.

use chrono::Datelike;
use daylee_core::assistant::{Message, Sender};
use daylee_core::grid::{GridCell, MAX_VISIBLE_EVENTS, MonthGrid, WEEKDAY_HEADERS};
use daylee_core::{Event, FamilySession};
use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Characters per grid column.
const CELL_WIDTH: usize = 12;

/// Day number, the visible events, then the overflow summary.
const CELL_LINES: usize = 1 + MAX_VISIBLE_EVENTS + 1;

impl Render for MonthGrid<'_> {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("  {}", self.month.title().bold()));
        lines.push(String::new());

        let header: Vec<String> = WEEKDAY_HEADERS.iter().map(|h| fit(h)).collect();
        lines.push(format!("  {}", header.join(" ").dimmed()));

        let rule = "─".repeat((CELL_WIDTH + 1) * WEEKDAY_HEADERS.len() - 1);
        for week in self.weeks() {
            lines.push(format!("  {}", rule.dimmed()));
            for line in 0..CELL_LINES {
                let row: Vec<String> = week.iter().map(|cell| render_cell_line(cell, line)).collect();
                lines.push(format!("  {}", row.join(" ")));
            }
        }

        lines.join("\n")
    }
}

/// One text line of one cell, padded to the column width.
fn render_cell_line(cell: &GridCell, line: usize) -> String {
    if line == 0 {
        let day = fit(&cell.date.day().to_string());
        return if cell.is_today {
            day.blue().bold().reversed().to_string()
        } else if cell.in_month {
            day.bold().to_string()
        } else {
            day.dimmed().to_string()
        };
    }

    if let Some(event) = cell.visible_events().get(line - 1) {
        let title = fit(&event.title);
        return if cell.in_month {
            title.cyan().to_string()
        } else {
            title.dimmed().to_string()
        };
    }

    if line == CELL_LINES - 1 {
        if let Some(more) = cell.overflow_label() {
            return fit(&more).dimmed().to_string();
        }
    }

    fit("")
}

/// Pad or truncate `text` to exactly one column, measured in terminal
/// cells so wide characters such as emoji and CJK line up.
fn fit(text: &str) -> String {
    let width = text.width();
    if width <= CELL_WIDTH {
        return format!("{text}{}", " ".repeat(CELL_WIDTH - width));
    }

    let mut cut = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > CELL_WIDTH - 1 {
            break;
        }
        cut.push(c);
        used += w;
    }
    format!("{cut}…{}", " ".repeat(CELL_WIDTH - 1 - used))
}

impl Render for Event {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);
        let when = format!("{} {}", self.date.format("%a %b %-d %Y"), self.time_label());
        let members = format!("[{}]", self.members.join(", "));

        let mut line = format!("{} {}  {} {}", id.dimmed(), when, self.title.bold(), members.dimmed());
        if let Some(description) = &self.description {
            line.push_str(&format!("\n      {}", description.italic()));
        }
        line
    }
}

impl Render for FamilySession {
    fn render(&self) -> String {
        format!(
            "📅 {}\n   Family code: {}\n   Signed in as: {}",
            self.name.bold(),
            self.code.to_string().green(),
            self.current_user.cyan()
        )
    }
}

impl Render for Message {
    fn render(&self) -> String {
        match self.sender {
            Sender::User => format!("  {} {}", "You:".bold(), self.text),
            Sender::Assistant => {
                let indented = self.text.replace('\n', "\n      ");
                format!("  {} {}", "🤖".bold(), indented)
            }
        }
    }
}
