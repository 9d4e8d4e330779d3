use std::io::{BufRead, Write};

use colored::*;
use primer_common::{config::Config, success};
use primer_core::shapes::Circle;

use crate::terminal::{format, print, prompt::{self, Console}};

pub fn circle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: Option<usize>,
    cfg: &Config,
) -> anyhow::Result<Vec<Circle>> {
    let count: usize = match count {
        Some(count) => count,
        None => console.ask_until("Enter the number of circles:", prompt::parse_count)?,
    };

    let mut circles: Vec<Circle> = Vec::new();
    for idx in 0..count {
        let circle: Circle = console.ask_until("Enter the radius of the circle:", parse_circle)?;
        print_circle(idx + 1, &circle, cfg);
        circles.push(circle);
    }

    print_summary(&circles, cfg);
    Ok(circles)
}

fn parse_circle(answer: &str) -> Result<Circle, String> {
    let radius: f64 = prompt::parse_number(answer)?;
    Circle::new(radius).map_err(|e| format!("ValueError: {e}"))
}

fn print_circle(idx: usize, circle: &Circle, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    print::tree_head(idx, &format::heading(circle));
    print::as_tree_one_level(format::circle_to_details(circle, cfg.precision));
}

fn print_summary(circles: &[Circle], cfg: &Config) {
    let total_area: f64 = circles.iter().map(Circle::area).sum();
    let count: ColoredString = format!("{} circles", circles.len()).bold().green();
    let area: ColoredString = format::decimal(total_area, cfg.precision).bold().yellow();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&format!("{count} measured, total area {area}"));
        }
        _ => success!("{count} measured, total area {area}"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
