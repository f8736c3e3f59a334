//! Reply text for each intent.
//!
//! Everything here is deterministic: the caller supplies the flavor line.

use std::fmt::Write;

use crate::assistant::intent::{Day, Intent};
use crate::event::Event;

/// Most events listed by a schedule summary.
pub const SCHEDULE_LIMIT: usize = 5;

const EXAMPLE_QUESTIONS: &str = "- \"Can I play with friends on Saturday?\"\n\
- \"What's my schedule for this week?\"\n\
- \"Do I have time tomorrow?\"";

/// Opening message of a conversation with `user`.
pub fn greeting(user: &str) -> String {
    format!(
        "Hi {user}! I'm your family calendar AI assistant. You can ask me things like:\n\
- \"Can I play with friends on Saturday?\"\n\
- \"What's my schedule for next week?\"\n\
- \"Do I have time for a movie tomorrow?\""
    )
}

/// Build the reply for `intent` over the user's events.
pub fn compose(intent: &Intent, events: &[&Event], flavor: &str) -> String {
    match intent {
        Intent::Availability { day } => availability(*day, events, flavor),
        Intent::ScheduleSummary => schedule_summary(events, flavor),
        Intent::Fallback => fallback(flavor),
    }
}

fn availability(day: Day, events: &[&Event], flavor: &str) -> String {
    let on_day: Vec<&Event> = events.iter().copied().filter(|e| day.matches(e)).collect();

    if on_day.is_empty() {
        return format!("Great! You're free on {day}! {flavor}");
    }

    let mut reply = format!("On {day}, you have {} event(s):\n", on_day.len());
    for event in &on_day {
        let _ = write!(
            reply,
            "\n📅 {} at {}\n   For: {}",
            event.title,
            event.time_label(),
            event.members.join(", ")
        );
    }
    let _ = write!(
        reply,
        "\n\nYou might have some free time, but check the schedule above. {flavor}"
    );
    reply
}

fn schedule_summary(events: &[&Event], flavor: &str) -> String {
    if events.is_empty() {
        return format!("You don't have any events scheduled. You're all free! {flavor}");
    }

    let mut reply = String::from("Here are your upcoming events:\n");
    for event in events.iter().take(SCHEDULE_LIMIT) {
        let _ = write!(
            reply,
            "\n📅 {}\n   {} at {}",
            event.title,
            event.date.format("%b %d, %Y"),
            event.time_label()
        );
    }
    let _ = write!(reply, "\n\n{flavor}");
    reply
}

/// Help text listing the kinds of questions that are understood.
pub fn fallback(flavor: &str) -> String {
    format!(
        "I can help you check your schedule and see if you have free time for activities. Ask me:\n\
{EXAMPLE_QUESTIONS}\n\n{flavor}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NewEvent, parse_time};
    use chrono::{NaiveDate, Weekday};

    const FLAVOR: &str = "🌤️ Partly cloudy with mild temperatures.";

    fn event(id: u64, title: &str, y: i32, m: u32, d: u32, time: &str) -> Event {
        NewEvent::new(title, NaiveDate::from_ymd_opt(y, m, d).unwrap())
            .at(parse_time(time).unwrap())
            .for_members(["Ava", "Ben"])
            .into_event(id)
            .unwrap()
    }

    #[test]
    fn free_day_reply() {
        let reply = compose(
            &Intent::Availability {
                day: Day::Weekday(Weekday::Sat),
            },
            &[],
            FLAVOR,
        );
        assert_eq!(reply, format!("Great! You're free on saturday! {FLAVOR}"));
    }

    #[test]
    fn busy_day_lists_title_time_and_members() {
        // 2026-03-04 is a Wednesday, 2026-03-05 a Thursday
        let soccer = event(1, "Soccer", 2026, 3, 4, "16:00");
        let piano = event(2, "Piano", 2026, 3, 5, "17:30");

        let reply = compose(
            &Intent::Availability {
                day: Day::Weekday(Weekday::Wed),
            },
            &[&soccer, &piano],
            FLAVOR,
        );

        assert_eq!(
            reply,
            format!(
                "On wednesday, you have 1 event(s):\n\n📅 Soccer at 16:00\n   For: Ava, Ben\n\n\
You might have some free time, but check the schedule above. {FLAVOR}"
            )
        );
    }

    #[test]
    fn tomorrow_lists_every_event() {
        let a = event(1, "Soccer", 2026, 3, 4, "16:00");
        let b = event(2, "Piano", 2027, 8, 9, "17:30");

        let reply = compose(&Intent::Availability { day: Day::Tomorrow }, &[&a, &b], FLAVOR);

        assert!(reply.starts_with("On tomorrow, you have 2 event(s):"));
        assert!(reply.contains("Soccer at 16:00"));
        assert!(reply.contains("Piano at 17:30"));
    }

    #[test]
    fn schedule_lists_first_five_in_stored_order() {
        let events: Vec<Event> = (1..=7)
            .map(|i| event(i, &format!("Event {i}"), 2026, 3, 10 - i as u32, "08:00"))
            .collect();
        let refs: Vec<&Event> = events.iter().collect();

        let reply = compose(&Intent::ScheduleSummary, &refs, FLAVOR);

        assert!(reply.starts_with("Here are your upcoming events:\n"));
        assert_eq!(reply.matches("📅").count(), SCHEDULE_LIMIT);
        let positions: Vec<usize> = (1..=5)
            .map(|i| reply.find(&format!("Event {i}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!reply.contains("Event 6"));
        assert!(!reply.contains("Event 7"));
        assert!(reply.contains("Mar 09, 2026 at 08:00"));
        assert!(reply.ends_with(&format!("\n\n{FLAVOR}")));
    }

    #[test]
    fn empty_schedule() {
        let reply = compose(&Intent::ScheduleSummary, &[], FLAVOR);
        assert_eq!(
            reply,
            format!("You don't have any events scheduled. You're all free! {FLAVOR}")
        );
    }

    #[test]
    fn fallback_lists_examples() {
        let reply = compose(&Intent::Fallback, &[], FLAVOR);
        assert!(reply.starts_with("I can help you check your schedule"));
        assert!(reply.contains("\"Can I play with friends on Saturday?\""));
        assert!(reply.ends_with(FLAVOR));
    }

    #[test]
    fn greeting_names_the_user() {
        assert!(greeting("Ava").starts_with("Hi Ava! I'm your family calendar AI assistant."));
    }
}
