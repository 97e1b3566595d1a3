use std::io::{stdout, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use crossterm::{
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
};
use figlet_rs::FIGfont;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};

use crate::core::templates;
use crate::error::DashgenError;

/// Print the inline dashgen banner
pub fn print_banner() {
    let mut out = stdout();

    let _ = queue!(
        out,
        SetForegroundColor(CtColor::Magenta),
        Print("🎨 "),
        SetForegroundColor(CtColor::Blue),
        Print("dashgen"),
        ResetColor,
        Print("\n"),
    );
    let _ = out.flush();
}

/// Print ASCII art banner
pub fn print_ascii_banner(animations: bool) {
    let font = FIGfont::standard().unwrap();
    let figure = font.convert("dashgen");

    if let Some(fig) = figure {
        let fig_string = fig.to_string();
        let lines: Vec<&str> = fig_string.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            let color = match i % 5 {
                0 => CtColor::Magenta,
                1 => CtColor::Blue,
                2 => CtColor::Cyan,
                3 => CtColor::Green,
                _ => CtColor::Yellow,
            };
            let _ = execute!(
                stdout(),
                SetForegroundColor(color),
                Print(format!("    {}\n", line)),
                ResetColor
            );
        }
    }

    print_border(animations);
}

fn print_border(animations: bool) {
    let border_chars = "▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱▰▱";
    let width = 80;

    for i in 0..3 {
        let color = match i {
            0 => CtColor::Magenta,
            1 => CtColor::Blue,
            _ => CtColor::Cyan,
        };

        let _ = execute!(
            stdout(),
            SetForegroundColor(color),
            Print(format!(
                "    {}\n",
                border_chars.chars().take(width).collect::<String>()
            )),
            ResetColor
        );
        if animations {
            thread::sleep(Duration::from_millis(50));
        }
    }
}

/// Print success message
pub fn print_success(message: &str) {
    let _ = execute!(
        stdout(),
        SetForegroundColor(CtColor::Green),
        Print("✅ "),
        Print(message),
        Print("\n"),
        ResetColor
    );
}

/// Print warning message
pub fn print_warning(message: &str) {
    let _ = execute!(
        stdout(),
        SetForegroundColor(CtColor::Yellow),
        Print("⚠️  "),
        Print(message),
        Print("\n"),
        ResetColor
    );
}

/// Print error message
pub fn print_error(error: &DashgenError) {
    let _ = execute!(
        stdout(),
        SetForegroundColor(CtColor::Red),
        Print("❌ "),
        Print(&format!("{}", error)),
        Print("\n"),
        ResetColor
    );
}

/// Print info message
pub fn print_info(message: &str) {
    let _ = execute!(
        stdout(),
        SetForegroundColor(CtColor::Blue),
        Print("ℹ️  "),
        Print(message),
        Print("\n"),
        ResetColor
    );
}

/// Print the generation header for a run against `root`
pub fn print_generate_header(root: &Path) {
    let _ = execute!(
        stdout(),
        Print("\n"),
        SetForegroundColor(CtColor::Magenta),
        Print("▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰\n"),
        SetForegroundColor(CtColor::Cyan),
        Print("    🎨 Generating Smart Home Dashboard with shadcn/ui\n"),
        ResetColor
    );

    let _ = execute!(
        stdout(),
        SetForegroundColor(CtColor::White),
        Print("    📍 Target: "),
        SetForegroundColor(CtColor::Yellow),
        Print(format!("{}\n", root.display())),
        SetForegroundColor(CtColor::Magenta),
        Print("▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰\n"),
        ResetColor,
        Print("\n")
    );
}

/// Print the fixed closing block of follow-up instructions
pub fn print_next_steps() {
    let _ = execute!(
        stdout(),
        Print("\n"),
        SetForegroundColor(CtColor::Cyan),
        Print("📦 Next steps:\n"),
        ResetColor
    );

    for step in templates::NEXT_STEPS {
        let _ = execute!(
            stdout(),
            SetForegroundColor(CtColor::Green),
            Print(format!("{}\n", step)),
            ResetColor
        );
    }
}

/// Print a unified diff for a file that was overwritten with new content.
/// Unchanged lines are suppressed.
pub fn print_overwrite_diff(path: &str, old: &str, new: &str) {
    println!("    {} {}", "~".yellow(), path.dimmed());

    let diff = TextDiff::from_lines(old, new);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("    {}{}", "-".red(), change),
            ChangeTag::Insert => print!("    {}{}", "+".green(), change),
            ChangeTag::Equal => {}
        }
    }
}

/// Create a progress bar with a specific style
pub fn create_progress_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
            .unwrap()
            .tick_strings(&[
                "▰▱▱▱▱▱▱▱▱▱",
                "▰▰▱▱▱▱▱▱▱▱",
                "▰▰▰▱▱▱▱▱▱▱",
                "▰▰▰▰▱▱▱▱▱▱",
                "▰▰▰▰▰▱▱▱▱▱",
                "▰▰▰▰▰▰▱▱▱▱",
                "▰▰▰▰▰▰▰▱▱▱",
                "▰▰▰▰▰▰▰▰▱▱",
                "▰▰▰▰▰▰▰▰▰▱",
                "▰▰▰▰▰▰▰▰▰▰",
            ]),
    );
    pb.set_message(message.to_string());
    pb
}
