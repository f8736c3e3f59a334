//! Scripted schedule assistant.
//!
//! Not a model: a free-text question is classified into an [`Intent`] by a
//! short list of keyword rules and answered from the user's own events.
//! Each reply ends with a random flavor line.

mod conversation;
mod flavor;
mod intent;
mod reply;

pub use conversation::{Conversation, Message, Sender};
pub use flavor::{FLAVOR_LINES, pick_flavor};
pub use intent::{Day, Intent, RULES, Rule, classify};
pub use reply::{SCHEDULE_LIMIT, compose, greeting};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::event::Event;

/// Answers questions about a user's events.
///
/// The only state is the random source for flavor lines; a reply is
/// otherwise a pure function of the query and the events.
#[derive(Debug, Clone)]
pub struct Assistant<R = ChaCha8Rng> {
    rng: R,
}

impl Assistant<ChaCha8Rng> {
    /// Reproducible flavor lines for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }
}

impl Default for Assistant<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> Assistant<R> {
    pub fn with_rng(rng: R) -> Self {
        Assistant { rng }
    }

    /// Answer `query` from `events`, the events that include the user.
    pub fn reply(&mut self, query: &str, events: &[&Event]) -> String {
        let intent = classify(query);
        self.respond(&intent, events)
    }

    pub fn respond(&mut self, intent: &Intent, events: &[&Event]) -> String {
        let flavor = pick_flavor(&mut self.rng);
        compose(intent, events, flavor)
    }

    /// The help reply, used when there is nothing to answer from.
    pub fn fallback(&mut self) -> String {
        self.respond(&Intent::Fallback, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NewEvent, parse_time};
    use chrono::NaiveDate;

    fn flavor_for_seed(seed: u64) -> &'static str {
        pick_flavor(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    fn flavor_count(reply: &str) -> usize {
        FLAVOR_LINES.iter().map(|line| reply.matches(line).count()).sum()
    }

    #[test]
    fn free_saturday_with_no_events() {
        let mut assistant = Assistant::seeded(5);
        let reply = assistant.reply("Can I play on Saturday?", &[]);

        assert_eq!(
            reply,
            format!("Great! You're free on saturday! {}", flavor_for_seed(5))
        );
        assert_eq!(flavor_count(&reply), 1);
    }

    #[test]
    fn wednesday_soccer_is_listed() {
        // 2026-03-04 is a Wednesday
        let soccer = NewEvent::new("Soccer", NaiveDate::from_ymd_opt(2026, 3, 4).unwrap())
            .at(parse_time("16:00").unwrap())
            .for_member("Ava")
            .into_event(1)
            .unwrap();

        let mut assistant = Assistant::seeded(9);
        let reply = assistant.reply("Can I go out on Wednesday?", &[&soccer]);

        assert!(reply.contains("Soccer"));
        assert!(reply.contains("16:00"));
        assert_eq!(flavor_count(&reply), 1);
    }

    #[test]
    fn schedule_never_lists_more_than_five() {
        let events: Vec<Event> = (1..=7)
            .map(|i| {
                NewEvent::new(format!("Event {i}"), NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
                    .for_member("Ava")
                    .into_event(i)
                    .unwrap()
            })
            .collect();
        let refs: Vec<&Event> = events.iter().collect();

        let reply = Assistant::seeded(1).reply("what's my schedule", &refs);

        assert_eq!(reply.matches("📅").count(), 5);
        assert!(reply.contains("Event 5"));
        assert!(!reply.contains("Event 6"));
    }

    #[test]
    fn same_seed_gives_identical_replies() {
        let a = Assistant::seeded(77).reply("hello?", &[]);
        let b = Assistant::seeded(77).reply("hello?", &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_appends_one_flavor_line() {
        let reply = Assistant::seeded(3).fallback();
        assert!(reply.starts_with("I can help you check your schedule"));
        assert!(reply.ends_with(flavor_for_seed(3)));
        assert_eq!(flavor_count(&reply), 1);
    }
}
