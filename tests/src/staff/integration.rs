#![cfg(test)]
use primer_common::error::RosterError;
use primer_core::staff::{Employee, IdSequence, JobTitles, Roster, SALARY_RANGE};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;

fn titles_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

/// Builds a roster from a titles file and checks every generated employee.
#[test]
fn roster_from_titles_file() -> anyhow::Result<()> {
    let file = titles_file(&["Software Engineer", "Data Analyst", "Product Manager"]);
    let titles = JobTitles::load(file.path())?;
    let listed: Vec<String> = titles.iter().map(String::from).collect();

    let mut roster = Roster::new(titles, IdSequence::new());
    let mut rng = StdRng::seed_from_u64(2024);

    for name in ["Ada", "Alan", "Grace", "Edsger", "Barbara"] {
        roster.hire(name, &mut rng)?;
    }

    let ids: Vec<u32> = roster.employees().iter().map(Employee::id).collect();
    assert_eq!(ids, vec![1001, 1002, 1003, 1004, 1005]);

    for employee in roster.employees() {
        assert!(SALARY_RANGE.contains(&employee.salary()));
        assert!(listed.iter().any(|title| title == employee.designation()));
    }

    Ok(())
}

#[test]
fn empty_titles_file_is_rejected() {
    let file = titles_file(&[]);
    assert!(matches!(
        JobTitles::load(file.path()),
        Err(RosterError::NoTitles { .. })
    ));
}

#[test]
fn each_roster_uses_its_own_sequence() {
    let titles = JobTitles::from_text("Clerk").unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let mut first = Roster::new(titles.clone(), IdSequence::starting_at(5000));
    first.hire("Ada", &mut rng).unwrap();

    let mut second = Roster::new(titles, IdSequence::starting_at(9000));
    let employee = second.hire("Alan", &mut rng).unwrap();

    assert_eq!(employee.id(), 9001);
    assert_eq!(employee.designation(), "Clerk");
    assert_eq!(first.employees()[0].id(), 5001);
}

#[test]
fn employee_display_lists_every_field() {
    let mut ids = IdSequence::new();
    let employee = Employee::hire("Ada", 50_000, "Engineer", &mut ids).unwrap();
    let text = employee.to_string();

    for line in [
        "Name: Ada",
        "Salary: 50000",
        "Designation: Engineer",
        "Employee ID: 1001",
    ] {
        assert!(text.contains(line), "missing '{line}' in {text}");
    }
}
