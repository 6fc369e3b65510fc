use clap::Args;
use studyclock_core::{Blink, Event, MemoryTitle, StudySession};

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of one-second ticks to feed
    #[arg(long)]
    pub ticks: u32,
    /// Work minutes (1-60, defaults to config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub work: Option<u32>,
    /// Rest minutes (1-30, defaults to config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub rest: Option<u32>,
    /// Leave the clock paused instead of starting it before the first tick
    #[arg(long)]
    pub paused: bool,
    /// Start each phase as soon as the previous one ends
    #[arg(long)]
    pub autostart: bool,
}

/// Prints one JSON event per line: every transition, then a final snapshot.
pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.work, args.rest);
    let title = MemoryTitle::new(config.notifications.original_title.clone());
    let mut session = StudySession::new(config.clock(), title)
        .with_notifications(config.notifications.enabled);

    if !args.paused {
        session.clock_mut().start();
    }

    let mut blinks = 0u32;
    for _ in 0..args.ticks {
        let tick = session.tick();
        if tick.blink == Blink::Message {
            blinks += 1;
        }
        if let Some(event) = session.transition_event(tick.advance) {
            println!("{}", serde_json::to_string(&event)?);
            if args.autostart {
                session.clock_mut().start();
            }
        }
    }

    tracing::debug!(
        ticks = args.ticks,
        blinks,
        title = session.blinker().slot().displayed(),
        "simulation finished"
    );
    let snapshot: Event = session.clock().snapshot();
    println!("{}", serde_json::to_string(&snapshot)?);
    Ok(())
}
