mod commands;
mod terminal;

use commands::{CommandLine, Commands, calc, circle, employees, rectangle};
use primer_common::config::Config;
use terminal::{logging, print, prompt::Console};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let mut console = Console::stdio();

    match commands.command {
        Commands::Circle { count } => {
            print::header("circle calculator", cfg.quiet);
            circle::circle(&mut console, count, &cfg)?;
        }
        Commands::Calc => {
            print::header("simple calculator", cfg.quiet);
            calc::calc(&mut console, &cfg)?;
        }
        Commands::Rectangle { width, height } => {
            print::header("rectangle", cfg.quiet);
            rectangle::rectangle(width, height, &cfg);
        }
        Commands::Employees { titles, count } => {
            print::header("random job generator", cfg.quiet);
            employees::employees(&mut console, &titles, count, &mut rand::rng(), &cfg)?;
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
