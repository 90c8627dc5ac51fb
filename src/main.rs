//! Command-line front end: load or generate contribution data, report it on
//! the console, and render the animation.

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use contrib_shooter::animator::Animator;
use contrib_shooter::console;
use contrib_shooter::graph::ContributionGraph;
use contrib_shooter::output::resolve_output;
use contrib_shooter::strategy::strategy_from_name;

#[derive(Parser, Debug)]
#[command(name = "contrib-shooter")]
#[command(about = "Render a contribution grid as an animated space-shooter GIF")]
struct Cli {
    /// Contribution data JSON file (as produced by --raw-output)
    #[arg(long, short = 'i', conflicts_with = "demo")]
    input: Option<PathBuf>,

    /// Generate a random demo grid instead of reading a data file
    #[arg(long)]
    demo: bool,

    /// Save the loaded or generated data to a JSON file
    #[arg(long)]
    raw_output: Option<PathBuf>,

    /// Animation output path
    #[arg(long, short = 'o', default_value = "contributions.gif")]
    output: PathBuf,

    /// Targeting strategy: column, row or random
    #[arg(long, short = 's', default_value = "random")]
    strategy: String,

    /// Frames per second
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Cap on the number of generated frames
    #[arg(long)]
    max_frames: Option<usize>,

    /// Stamp a small watermark label into each frame
    #[arg(long)]
    watermark: bool,

    /// Seed for all randomness, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let graph = match &cli.input {
        Some(path) => ContributionGraph::from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None if cli.demo => ContributionGraph::demo(&mut rng),
        None => bail!("either --input <file> or --demo is required"),
    };

    let mut out = stdout();
    console::print_stats(&mut out, &graph)?;
    console::print_graph(&mut out, &graph)?;

    if let Some(path) = &cli.raw_output {
        graph
            .save(path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        println!("data saved to {}", path.display());
    }

    if cli.fps > 50 {
        // Browsers clamp GIF frame delays below 20 ms to ~100 ms.
        log::warn!(
            "fps {} gives a {} ms GIF delay; browsers may clamp it",
            cli.fps,
            1000 / cli.fps
        );
    }

    let strategy = strategy_from_name(&cli.strategy)?;
    let provider = resolve_output(&cli.output)?;
    let animator = Animator::new(graph, strategy, cli.fps, cli.watermark);

    let mut frames = animator.frames_with_rng(cli.max_frames, rng);
    let encoded = provider.encode(&mut frames, animator.frame_duration_ms())?;
    provider.write(&encoded)?;
    println!("animation saved to {}", cli.output.display());
    Ok(())
}
