use clap::Parser;
use padgames::games::{ColorChanger, PixelPaint, TicTacToe};
use padgames::{GameManager, PadEvent, PadPosition, PadRegistry, Settings};
use std::sync::mpsc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "padgames")]
#[command(about = "Small games for the Launchpad Mini MK3")]
#[command(version)]
struct Args {
    /// Substring of the MIDI output port name
    #[arg(long)]
    output_port: Option<String>,

    /// Substring of the MIDI input port name
    #[arg(long)]
    input_port: Option<String>,

    /// Milliseconds between two frames of the scrolling intro
    #[arg(long)]
    scroll_ms: Option<u64>,

    /// Milliseconds per phase of the win flash
    #[arg(long)]
    flash_ms: Option<u64>,

    /// Number of win flashes
    #[arg(long)]
    flashes: Option<u8>,

    /// Text scrolled when tic-tac-toe starts
    #[arg(long)]
    title: Option<String>,

    /// Row of the control-column pad that switches games
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    switch_row: Option<u8>,
}

impl Args {
    fn into_settings(self) -> Settings {
        let mut settings = Settings::default();
        if let Some(keyword) = self.output_port {
            settings.output_port_keyword = keyword;
        }
        if let Some(keyword) = self.input_port {
            settings.input_port_keyword = keyword;
        }
        if let Some(ms) = self.scroll_ms {
            settings.scroll_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.flash_ms {
            settings.flash_interval = Duration::from_millis(ms);
        }
        if let Some(flashes) = self.flashes {
            settings.flash_count = flashes;
        }
        if let Some(title) = self.title {
            settings.intro_title = title;
        }
        if let Some(row) = self.switch_row {
            settings.switch_pad = PadPosition::new(row, 9);
        }
        settings
    }
}

enum Event {
    Pad(PadEvent),
    Shutdown,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Args::parse().into_settings();
    log::debug!("Running with settings: {:?}", settings);

    let output = padgames::mini_mk3::Output::guess(&settings.output_port_keyword)?;
    let mut manager = GameManager::with_switch_pad(PadRegistry::new(output), settings.switch_pad);
    manager.add_game(ColorChanger::new());
    manager.add_game(PixelPaint::new());
    manager.add_game(TicTacToe::new(&settings));

    let (sender, receiver) = mpsc::channel();

    let pad_sender = sender.clone();
    let _input = padgames::listen(&settings.input_port_keyword, move |event| {
        // Fails only once the dispatcher is gone, at which point we're shutting down anyway
        let _ = pad_sender.send(Event::Pad(event));
    })?;

    ctrlc::set_handler(move || {
        let _ = sender.send(Event::Shutdown);
    })?;

    manager.registry_mut().clear_all();
    manager.start_current();
    log::info!("Ready. Press the side pad in row {} to switch games", settings.switch_pad.row);

    for event in receiver.iter() {
        match event {
            Event::Pad(event) => manager.handle_event(event),
            Event::Shutdown => break,
        }
    }

    log::info!("Shutting down");
    manager.registry_mut().clear_all();

    Ok(())
}
