//! Flavor lines.
//!
//! One of these is tacked onto every assistant reply. They read like a
//! weather forecast but are picked at random and say nothing about actual
//! weather.

use rand::Rng;

pub const FLAVOR_LINES: [&str; 5] = [
    "⚠️ There might be rain tomorrow. You may want to plan indoor activities.",
    "☀️ It will be sunny and warm. Great day for outdoor activities!",
    "❄️ Cold weather expected. Dress warmly!",
    "💨 Windy conditions expected tomorrow.",
    "🌤️ Partly cloudy with mild temperatures.",
];

/// Pick a flavor line uniformly at random.
pub fn pick_flavor<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FLAVOR_LINES[rng.random_range(0..FLAVOR_LINES.len())]
}
