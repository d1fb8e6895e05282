use baby_names::config::Settings;
use baby_names::session::{self, SessionError, WELCOME_MESSAGE};
use baby_names::terminal::Terminal;
use baby_names::logging;
use std::io;
use tracing::error;

fn run() -> Result<(), SessionError> {
    let settings = Settings::load()?;
    logging::init(&settings.logging);

    println!("{}", WELCOME_MESSAGE);

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());

    let db = session::open_user_db(&mut terminal, &settings)?;
    session::reset_pair(&mut terminal, &db)?;

    Ok(())
}

fn main() {
    dotenv::dotenv().ok();

    if let Err(e) = run() {
        error!("Reset aborted: {}", e);
        println!("{}", e);
        std::process::exit(1);
    }
}
