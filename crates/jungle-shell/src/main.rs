use tracing_subscriber::EnvFilter;

use jungle_jumper::config::JumperConfig;
use jungle_shell::Shell;
use jungle_shell::audio::SilentMusic;
use jungle_shell::config::ShellConfig;
use jungle_shell::replay::{self, ReplayStep};

/// Frames to run when no script is given: ten seconds at 60 Hz.
const IDLE_FRAMES: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let jumper = JumperConfig::load();
    let shell_config = ShellConfig::load();
    let mut shell = Shell::new(&jumper, shell_config, SilentMusic::default())?;

    let steps = match std::env::args().nth(1) {
        Some(path) => {
            let script = std::fs::read_to_string(&path)?;
            let steps = replay::parse_script(&script)?;
            tracing::info!(path = %path, steps = steps.len(), "Loaded replay script");
            steps
        },
        None => vec![ReplayStep::idle(IDLE_FRAMES)],
    };

    let start = shell.menu().start_button().center();
    shell.on_mouse_down(start);

    let summary = replay::run(&mut shell, &steps);
    let player = shell.level().player().rect();
    tracing::info!(
        frames = summary.frames,
        seconds = summary.seconds(shell.tick_rate()),
        jumps = summary.jumps,
        caught = summary.caught,
        resets = shell.level().resets(),
        x = player.x,
        y = player.y,
        state = ?shell.state(),
        "Replay finished"
    );
    Ok(())
}
