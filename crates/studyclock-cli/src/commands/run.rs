use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use clap::Args;
use studyclock_core::timer::{check_rest_minutes, check_work_minutes};
use studyclock_core::{format_clock, format_study, Event, SessionClock, StudySession, TitleSlot};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use crate::title::TerminalTitle;

#[derive(Args)]
pub struct RunArgs {
    /// Work minutes for this run (1-60, defaults to config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub work: Option<u32>,
    /// Rest minutes for this run (1-30, defaults to config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub rest: Option<u32>,
    /// Do not blink the terminal title on phase changes
    #[arg(long)]
    pub no_blink: bool,
    /// Start each phase as soon as the previous one ends
    #[arg(long)]
    pub autostart: bool,
}

/// A line typed while the timer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Start,
    Pause,
    Toggle,
    Reset,
    Work(u32),
    Rest(u32),
    Status,
    Quit,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = words.next().unwrap_or("toggle");
        let arg = words.next();

        let minutes = |arg: Option<&str>| -> Result<u32, String> {
            arg.ok_or_else(|| format!("'{cmd}' needs a number of minutes"))?
                .parse::<u32>()
                .map_err(|e| format!("invalid minutes: {e}"))
        };

        match cmd.to_ascii_lowercase().as_str() {
            "s" | "start" => Ok(Input::Start),
            "p" | "pause" => Ok(Input::Pause),
            "t" | "toggle" => Ok(Input::Toggle),
            "r" | "reset" => Ok(Input::Reset),
            "w" | "work" => check_work_minutes(minutes(arg)?)
                .map(Input::Work)
                .map_err(|e| e.to_string()),
            "b" | "rest" => check_rest_minutes(minutes(arg)?)
                .map(Input::Rest)
                .map_err(|e| e.to_string()),
            "?" | "status" => Ok(Input::Status),
            "q" | "quit" | "exit" => Ok(Input::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.work, args.rest);
    let title = TerminalTitle::new(config.notifications.original_title.clone());
    let session = StudySession::new(config.clock(), title)
        .with_notifications(config.notifications.enabled && !args.no_blink);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(drive(session, args.autostart))
}

async fn drive(
    mut session: StudySession<TerminalTitle>,
    autostart: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!(
        "commands: [s]tart [p]ause [t]oggle (empty line) [r]eset, \
         w <min>, b <min>, ? status, [q]uit"
    );
    tracing::info!(
        work_secs = session.clock().work_duration_secs(),
        rest_secs = session.clock().rest_duration_secs(),
        "timer ready"
    );

    if autostart {
        session.clock_mut().start();
    }
    render(session.clock())?;

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    // One advance per tick; late ticks are not made up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let tick = session.tick();
                if let Some(event) = session.transition_event(tick.advance) {
                    finish_line()?;
                    print_event(&event)?;
                    if autostart {
                        session.clock_mut().start();
                    }
                }
                render(session.clock())?;
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match line.parse::<Input>() {
                        Ok(Input::Quit) => break,
                        Ok(input) => {
                            let event = apply(&mut session, input);
                            if let (Input::Status, Some(snapshot)) = (input, event) {
                                finish_line()?;
                                println!("{}", serde_json::to_string(&snapshot)?);
                            }
                            render(session.clock())?;
                        }
                        Err(e) => eprintln!("{e}"),
                    },
                    None => {
                        tracing::debug!("stdin closed, ticking until interrupted");
                        stdin_open = false;
                    }
                }
            }
            _ = &mut ctrl_c => {
                tracing::debug!("interrupted");
                break;
            }
        }
    }

    finish_line()?;
    let mut title = session.shutdown();
    title.restore_original();
    Ok(())
}

/// Apply a typed command to the clock, returning what it produced.
///
/// Pause and toggle are ignored while the clock sits running at 00:00, so
/// the next tick still performs the transition and counts the session.
fn apply<S: TitleSlot>(session: &mut StudySession<S>, input: Input) -> Option<Event> {
    let clock = session.clock_mut();
    let at_boundary = clock.is_running() && clock.remaining_secs() == 0;
    let event = match input {
        Input::Start => clock.start(),
        Input::Pause | Input::Toggle if at_boundary => {
            tracing::debug!("ignoring pause at 00:00, transition pending");
            None
        }
        Input::Pause => clock.pause(),
        Input::Toggle => clock.toggle(),
        Input::Reset => Some(clock.reset()),
        Input::Work(minutes) => Some(clock.configure_work(minutes)),
        Input::Rest(minutes) => Some(clock.configure_rest(minutes)),
        Input::Status => Some(clock.snapshot()),
        Input::Quit => None,
    };
    if let Some(event) = &event {
        tracing::debug!(?event, "command applied");
    }
    event
}

/// One-line status, redrawn in place.
pub fn status_line(clock: &SessionClock) -> String {
    format!(
        "{:<12} {}  {:<7} | studied {} | sessions {}",
        clock.phase().label(),
        format_clock(clock.remaining_secs()),
        if clock.is_running() { "running" } else { "paused" },
        format_study(clock.total_study_minutes()),
        clock.completed_sessions(),
    )
}

fn render(clock: &SessionClock) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "\r\x1b[2K{}", status_line(clock))?;
    out.flush()
}

fn finish_line() -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out)
}

fn print_event(event: &Event) -> std::io::Result<()> {
    if let Event::PhaseCompleted { message, .. } = event {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{message}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyclock_core::{MemoryTitle, Phase};

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!("s".parse::<Input>(), Ok(Input::Start));
        assert_eq!("PAUSE".parse::<Input>(), Ok(Input::Pause));
        assert_eq!("".parse::<Input>(), Ok(Input::Toggle));
        assert_eq!("reset".parse::<Input>(), Ok(Input::Reset));
        assert_eq!("w 45".parse::<Input>(), Ok(Input::Work(45)));
        assert_eq!("rest 10".parse::<Input>(), Ok(Input::Rest(10)));
        assert_eq!("q".parse::<Input>(), Ok(Input::Quit));
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        assert!("work 61".parse::<Input>().is_err());
        assert!("rest 31".parse::<Input>().is_err());
        assert!("work".parse::<Input>().is_err());
        assert!("work ten".parse::<Input>().is_err());
        assert!("dance".parse::<Input>().is_err());
    }

    #[test]
    fn apply_drives_clock() {
        let mut session = StudySession::new(SessionClock::new(), MemoryTitle::default());
        apply(&mut session, Input::Work(10));
        assert_eq!(session.clock().remaining_secs(), 600);
        apply(&mut session, Input::Toggle);
        assert!(session.clock().is_running());
        session.tick();
        apply(&mut session, Input::Pause);
        assert_eq!(session.clock().remaining_secs(), 599);
        apply(&mut session, Input::Reset);
        assert_eq!(session.clock().remaining_secs(), 600);
        assert_eq!(session.clock().phase(), Phase::Work);
    }

    #[test]
    fn pause_at_zero_keeps_pending_transition() {
        let mut session =
            StudySession::new(SessionClock::with_minutes(1, 1), MemoryTitle::default());
        apply(&mut session, Input::Start);
        for _ in 0..60 {
            session.tick();
        }
        assert_eq!(session.clock().remaining_secs(), 0);

        assert!(apply(&mut session, Input::Toggle).is_none());
        assert!(apply(&mut session, Input::Pause).is_none());
        assert!(session.clock().is_running());

        assert!(session.tick().advance.is_transition());
        assert_eq!(session.clock().phase(), Phase::Rest);
        assert_eq!(session.clock().completed_sessions(), 1);
        assert_eq!(session.clock().total_study_secs(), 60);

        apply(&mut session, Input::Reset);
        assert_eq!(session.clock().completed_sessions(), 1);
    }

    #[test]
    fn status_returns_snapshot() {
        let mut session = StudySession::new(SessionClock::new(), MemoryTitle::default());
        match apply(&mut session, Input::Status) {
            Some(Event::StateSnapshot { clock, running, .. }) => {
                assert_eq!(clock, "25:00");
                assert!(!running);
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn status_line_shows_clock_and_totals() {
        let clock = SessionClock::new();
        let line = status_line(&clock);
        assert!(line.starts_with("Work Session"));
        assert!(line.contains("25:00"));
        assert!(line.contains("paused"));
        assert!(line.contains("studied 0m"));
        assert!(line.contains("sessions 0"));
    }
}
