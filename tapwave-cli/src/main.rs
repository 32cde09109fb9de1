#[macro_use]
extern crate tracing;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use structopt::StructOpt;
use tapwave_core::config::Config;
use tapwave_core::map::Map;
use tapwave_core::state::JudgmentEngine;
use tapwave_core::timing::{Timestamp, TimestampDifference};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

mod config;
mod input;
mod session;
mod summary;

use session::Session;
use summary::Summary;

#[derive(StructOpt)]
#[structopt(name = "tapwave", about = "Plays a beatmap from a replay or autoplay.")]
struct Opt {
    /// Path to a YAML config with hit windows, score values and hit radius.
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Path to a YAML replay to play back.
    #[structopt(long, parse(from_os_str), conflicts_with = "autoplay")]
    replay: Option<PathBuf>,

    /// Click every object exactly on time.
    #[structopt(long)]
    autoplay: bool,

    /// Clock step in milliseconds.
    #[structopt(long, default_value = "16")]
    tick: i32,

    /// Stop when the game clock reaches this time in milliseconds, even if the map is not
    /// finished. Time spent paused doesn't count.
    #[structopt(long)]
    until: Option<i32>,

    /// Write the map as YAML to this path and exit.
    #[structopt(long, parse(from_os_str))]
    export: Option<PathBuf>,

    /// Log more (-v for debug, -vv for trace).
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Path to a YAML map. Plays the built-in demo map if not set.
    #[structopt(parse(from_os_str))]
    map: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(level)
        .init();

    info!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    let config = match &opt.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let map = match &opt.map {
        Some(path) => load_map(path)?,
        None => {
            debug!("no map given, using the demo map");
            tapwave_map::demo(tapwave_map::DEMO_CENTER)
        }
    };

    if let Some(path) = &opt.export {
        let file =
            File::create(path).with_context(|| format!("error creating {}", path.display()))?;
        tapwave_map::to_writer(BufWriter::new(file), &map.into())
            .with_context(|| format!("error writing map to {}", path.display()))?;
        info!("exported map to {}", path.display());
        return Ok(());
    }

    let engine = JudgmentEngine::new(&map, config);

    let inputs = match &opt.replay {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("error opening {}", path.display()))?;
            input::read_replay(BufReader::new(file))
                .with_context(|| format!("error reading replay {}", path.display()))?
        }
        None if opt.autoplay => input::autoplay(engine.objects()),
        None => Vec::new(),
    };

    let until = match opt.until {
        Some(until) => Timestamp::from_millis(until),
        None => Session::default_until(&engine),
    };

    info!(
        title = map.title.as_deref().unwrap_or("<untitled>"),
        objects = engine.objects().len(),
        inputs = inputs.len(),
        "starting session"
    );

    let mut session = Session::new(engine);
    session.run(&inputs, TimestampDifference::from_millis(opt.tick), until);

    info!(
        clock = session.engine.clock().0,
        finished = session.engine.is_finished(),
        "session ended"
    );

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    write!(stdout, "{}", Summary::new(&session.engine))?;
    stdout.flush()?;

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("error opening {}", path.display()))?;
    let config_file = config::from_reader(BufReader::new(file))
        .with_context(|| format!("error parsing config {}", path.display()))?;
    Config::try_from(config_file)
        .map_err(|err| anyhow!("invalid config {}: {}", path.display(), err))
}

fn load_map(path: &Path) -> anyhow::Result<Map> {
    let file = File::open(path).with_context(|| format!("error opening {}", path.display()))?;
    let map_file = tapwave_map::from_reader(BufReader::new(file))
        .with_context(|| format!("error parsing map {}", path.display()))?;
    Ok(map_file.into())
}
