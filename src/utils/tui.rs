use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the assistant is "thinking".
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&[".  ", ".. ", "...", "   "])
        .template("  {msg}{spinner}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Show a spinner for `delay`, then clear it.
pub async fn think(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    let spinner = create_spinner("Thinking".to_string());
    tokio::time::sleep(delay).await;
    spinner.finish_and_clear();
}
