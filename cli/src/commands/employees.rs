use std::io::{BufRead, Write};
use std::path::Path;

use colored::*;
use primer_common::error::{RosterError, ValueError};
use primer_common::{config::Config, info, success, warn};
use primer_core::staff::{Employee, IdSequence, JobTitles, Roster};
use rand::Rng;

use crate::mprint;
use crate::terminal::{format, print, prompt::{self, Console}};

pub fn employees<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    titles_path: &Path,
    count: Option<usize>,
    rng: &mut G,
    cfg: &Config,
) -> anyhow::Result<Roster> {
    let titles: JobTitles = JobTitles::load(titles_path)?;
    info!("Loaded {} job titles from {}", titles.len(), titles_path.display());

    let count: usize = match count {
        Some(count) => count,
        None => console.ask_until("Enter the number of employees to add:", prompt::parse_count)?,
    };

    let mut roster: Roster = Roster::new(titles, IdSequence::new());
    for _ in 0..count {
        hire_one(console, &mut roster, rng)?;
    }

    print_roster(&roster, cfg);
    Ok(roster)
}

/// Asks for names until one is accepted by the roster.
fn hire_one<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    roster: &mut Roster,
    rng: &mut G,
) -> anyhow::Result<()> {
    loop {
        let name: String = console.ask("Enter employee name:")?;
        match roster.hire(&name, rng).map(Employee::id) {
            Ok(id) => {
                success!("Employee {} added with id {id}", roster.len());
                return Ok(());
            }
            Err(RosterError::Value(e @ ValueError::InvalidArgument(_))) => {
                warn!("{e}. Please try again.")
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_roster(roster: &Roster, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    print::header("Roster", cfg.quiet);
    for (idx, employee) in roster.employees().iter().enumerate() {
        print::tree_head(idx + 1, employee.name());
        print::as_tree_one_level(format::employee_to_details(employee));
        if idx + 1 != roster.len() {
            mprint!();
        }
    }

    let total: u64 = roster
        .employees()
        .iter()
        .map(|employee| u64::from(employee.salary()))
        .sum();
    let hired: ColoredString = format!("{} employees", roster.len()).bold().green();
    let payroll: ColoredString = total.to_string().bold().yellow();

    print::fat_separator();
    print::centerln(&format!("{hired} hired, payroll {payroll}"));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
