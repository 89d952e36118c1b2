//! Output formatting for CLI

use std::fmt;

use crate::grid::{Direction, GridWorld};

const RULE_WIDTH: usize = 60;

/// Print a section header framed by `=` rules
pub fn print_section(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}\n{title}\n{rule}");
}

pub fn print_subsection(title: &str) {
    println!("\n{title}\n{}", "-".repeat(RULE_WIDTH / 2));
}

/// Group the digits of a count in threes: `12345` becomes `12,345`.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Print an indented `key: value` line with aligned values
pub fn print_kv(key: &str, value: impl fmt::Display) {
    println!("  {:<20} {value}", format!("{key}:"));
}

/// Render a grid world with one arrow per cell showing `policy`.
///
/// Walls print as `#`, exits as `+` or `-`, and cells without a policy as `.`.
pub fn render_policy<F>(world: &GridWorld, policy: F) -> String
where
    F: Fn((usize, usize)) -> Option<Direction>,
{
    let mut out = String::new();
    for row in 0..world.height() {
        out.push_str("  ");
        for column in 0..world.width() {
            let cell = (row, column);
            let symbol = if world.is_wall(cell) {
                '#'
            } else if let Some(reward) = world.exit_reward(cell) {
                if reward >= 0.0 { '+' } else { '-' }
            } else {
                match policy(cell) {
                    Some(Direction::North) => '^',
                    Some(Direction::South) => 'v',
                    Some(Direction::East) => '>',
                    Some(Direction::West) => '<',
                    Some(Direction::Stop) | None => '.',
                }
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
