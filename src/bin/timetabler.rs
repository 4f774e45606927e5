use chrono::{Datelike, Local};
use env_logger::Env;
use std::io;
use std::process::ExitCode;
use timetabler::{Session, TrackerConfig, export_assignments_to_csv};

fn print_help() {
    println!(
        "Usage:\n  timetabler                   Run the daily check-in\n  timetabler export <path>     Write assignments to a CSV file\n  timetabler help              Show this help\n\nEnvironment:\n  TIMETABLER_DATA_DIR          Directory holding the data files (default .)\n  TIMETABLER_ASSIGNMENTS_FILE  Assignment JSON file (default assignments.json)\n  TIMETABLER_TIMETABLE_FILE    Timetable file (default timetable.json)\n  TIMETABLER_SQLITE_FILE       SQLite database (default assignments.db)\n  TIMETABLER_STORE             json or sqlite (default json)"
    );
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = TrackerConfig::from_env()?;
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None => {
            let store = config.open_store()?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), Local::now().weekday());
            session.run(&config.timetable_path, store.as_ref())?;
        }
        Some("export") => {
            let Some(path) = args.next() else {
                return Err("usage: timetabler export <path>".into());
            };
            let store = config.open_store()?;
            let assignments = store.load_assignments()?.into_assignments();
            export_assignments_to_csv(&assignments, &path)?;
            println!("Exported {} assignments to {}", assignments.len(), path);
        }
        Some("help" | "-h" | "--help") => print_help(),
        Some(other) => return Err(format!("unknown command '{other}' (try 'help')").into()),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
