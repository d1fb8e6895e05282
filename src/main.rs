use baby_names::config::Settings;
use baby_names::session::{self, SessionError, WELCOME_MESSAGE};
use baby_names::terminal::Terminal;
use baby_names::logging;
use std::io;
use tracing::{error, info};

fn run() -> Result<(), SessionError> {
    let settings = Settings::load()?;
    logging::init(&settings.logging);

    println!("{}", WELCOME_MESSAGE);

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());

    let db = session::open_user_db(&mut terminal, &settings)?;
    let names = session::open_names(&mut terminal, &settings, &mut rand::thread_rng())?;
    info!("Loaded {} candidate names", names.len());

    let (mut user, partner) = session::identify(&mut terminal, &db)?;
    session::rate_names(&mut terminal, &db, &mut user, &partner, &names)?;

    Ok(())
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    if let Err(e) = run() {
        error!("Session aborted: {}", e);
        println!("{}", e);
        std::process::exit(1);
    }
}
