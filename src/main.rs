use chrono::Local;
use clap::Parser;
use moodlog::application::clear_entries::clear_entries;
use moodlog::application::init::init;
use moodlog::application::list_entries::list_entries;
use moodlog::application::{ConfigService, DashboardService, EntryDraft, LogEntryService};
use moodlog::cli::{format_dashboard, format_entry_list, Cli, Commands};
use moodlog::domain::entry::parse_entry_date;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Log {
            logic_emotion,
            energy_direction,
            control_flow,
            stability,
            note,
            date,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = LogEntryService::new(repo);

            let draft = EntryDraft {
                date_ref: date,
                logic_emotion,
                energy_direction,
                control_flow,
                stability,
                note,
            };
            let entry = service.execute(&draft, Local::now().date_naive())?;
            println!("Logged entry for {}", entry.date);
            Ok(())
        }
        Some(Commands::Stats) => {
            let repo = FileSystemRepository::discover()?;
            let service = DashboardService::new(repo);

            let dashboard = service.execute(Local::now().date_naive())?;
            print!("{}", format_dashboard(&dashboard));
            Ok(())
        }
        Some(Commands::List { from, to, limit }) => {
            let repo = FileSystemRepository::discover()?;

            let from = parse_filter_date(from)?;
            let to = parse_filter_date(to)?;
            let entries = list_entries(&repo, from, to, limit);
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("window_days = {}", config.window_days);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: window_days, created");
                Ok(())
            }
        }
        Some(Commands::Clear { force }) => {
            let repo = FileSystemRepository::discover()?;

            if !force {
                return Err(MoodlogError::Config(
                    "Refusing to delete all entries without --force".to_string(),
                ));
            }
            clear_entries(&repo)?;
            println!("All entries cleared");
            Ok(())
        }
        None => {
            println!("moodlog - Terminal mood and self-tracking log");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Parse an optional YYYY-MM-DD list filter
fn parse_filter_date(
    input: Option<String>,
) -> Result<Option<chrono::NaiveDate>, MoodlogError> {
    match input {
        None => Ok(None),
        Some(s) => parse_entry_date(&s)
            .map(Some)
            .ok_or(MoodlogError::InvalidDate(s)),
    }
}
