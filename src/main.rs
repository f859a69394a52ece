//! Headless driver: runs a scripted session against a simulated 60 Hz clock
//! and logs the resulting state.

use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use bloch::challenge::ChallengeLevel;
use bloch::state::{Gate, NoiseChannel};
use bloch::{BlochError, BlochSphere, Options};
use clap::Parser;
use web_time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(name = "bloch", about = "Animated Bloch-sphere engine, headless")]
struct Cli {
    /// Options preset (TOML). Missing fields use defaults.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Print the options JSON schema and exit.
    #[arg(long)]
    schema: bool,

    /// Gates to apply in order, e.g. `h,s,x`. Each starts once the previous
    /// rotation has finished.
    #[arg(long, value_delimiter = ',')]
    gates: Vec<Gate>,

    /// Noise channel applied at start, e.g. `depolarizing:0.3`.
    #[arg(long)]
    channel: Option<NoiseChannel>,

    /// Switch the dephasing drive on.
    #[arg(long)]
    dephase: bool,

    /// Drive frequency slider value.
    #[arg(long)]
    drive_frequency: Option<f32>,

    /// Animate T1 relaxation with this time constant (seconds).
    #[arg(long)]
    t1: Option<f32>,

    /// Animate T2 relaxation with this time constant (seconds).
    #[arg(long)]
    t2: Option<f32>,

    /// Start challenge mode at this level.
    #[arg(long)]
    challenge: Option<ChallengeLevel>,

    /// Seed for random challenge markers.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u32,
}

const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BlochError> {
    if cli.schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())
            .map_err(|e| BlochError::OptionsParse(e.to_string()))?;
        writeln!(std::io::stdout(), "{schema}")?;
        return Ok(());
    }

    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut sphere = BlochSphere::new(options, (800, 600));
    if let Some(seed) = cli.seed {
        sphere.seed(seed);
    }
    setup(&mut sphere, cli);

    let mut gates: VecDeque<Gate> = cli.gates.iter().copied().collect();
    let mut now = Instant::now();
    for frame in 0..cli.frames {
        if sphere.gate_controls_enabled() {
            if let Some(gate) = gates.pop_front() {
                log::info!("frame {frame}: {gate}");
                let _ = sphere.apply_gate(gate);
            }
        }
        now += FRAME;
        let _ = sphere.tick(now);
        for notice in sphere.drain_notices() {
            log::info!("frame {frame}: {notice}");
        }
    }

    if !gates.is_empty() {
        log::warn!(
            "{} gate(s) not applied; increase --frames",
            gates.len()
        );
    }
    report(&sphere);
    Ok(())
}

fn setup(sphere: &mut BlochSphere, cli: &Cli) {
    if let Some(level) = cli.challenge {
        sphere.start_challenge(level);
    }
    if let Some(channel) = cli.channel {
        sphere.apply_channel(channel);
    }
    match (cli.t1, cli.t2) {
        (Some(t1), Some(t2)) => {
            let _ = sphere.animate_t1_t2(t1, t2);
        }
        (Some(t1), None) => {
            let _ = sphere.animate_t1(t1);
        }
        (None, Some(t2)) => {
            let _ = sphere.animate_t2(t2);
        }
        (None, None) => {}
    }
    if let Some(frequency) = cli.drive_frequency {
        sphere.set_drive_frequency(frequency);
    }
    if cli.dephase {
        sphere.start_dephasing();
    }
}

fn report(sphere: &BlochSphere) {
    let tip = sphere.arrow_tip();
    let deformation = sphere.deformation();
    log::info!("orientation {:?}", sphere.orientation());
    log::info!("arrow tip ({:.3}, {:.3}, {:.3})", tip.x, tip.y, tip.z);
    log::info!(
        "deformation scale ({:.3}, {:.3}, {:.3}) offset {:.3}",
        deformation.scale.x,
        deformation.scale.y,
        deformation.scale.z,
        deformation.offset_y
    );
    log::info!("trace points {}", sphere.trace().len());
    if let Some(level) = sphere.challenge().level() {
        log::info!(
            "challenge {level}: {} marker(s) left",
            sphere.challenge().markers().len()
        );
    }
}
