//! Status lines in the site generator's logger layout
//!
//! Each line is a topic right-aligned to a fixed column, a space, and the
//! message:
//!
//! ```text
//! Microblog setup complete: Collection 'notes' configured
//!   Created micropost: _notes/2024-01-02-15-04-05.md
//! ```

use console::Style;

/// Width the topic is right-aligned to
const TOPIC_WIDTH: usize = 20;

fn styled_line(style: &Style, topic: &str, message: &str) -> String {
    let padding = TOPIC_WIDTH.saturating_sub(console::measure_text_width(topic));
    format!("{}{} {message}", " ".repeat(padding), style.apply_to(topic))
}

/// Print an informational line to stdout
pub fn info(topic: &str, message: &str) {
    println!("{}", styled_line(&Style::new().green(), topic, message));
}

/// Print an error line to stderr
pub fn error(topic: &str, message: &str) {
    eprintln!(
        "{}",
        styled_line(&Style::new().for_stderr().red().bold(), topic, message)
    );
}
