use clap::Subcommand;
use studyclock_core::{format_clock, format_study};

#[derive(Subcommand)]
pub enum FormatAction {
    /// Seconds as MM:SS
    Clock {
        seconds: u32,
    },
    /// Minutes as "Hh Mm"
    Study {
        minutes: u64,
    },
}

pub fn run(action: FormatAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FormatAction::Clock { seconds } => println!("{}", format_clock(seconds)),
        FormatAction::Study { minutes } => println!("{}", format_study(minutes)),
    }
    Ok(())
}
