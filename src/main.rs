//! Headless CLI driver for the Game of Life simulation engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use game_of_life_sim::{
    config::{CliOverrides, Settings},
    engine::{MismatchPolicy, StepClock},
    noise::{GradientNoise, NoiseSource, WhiteNoise},
    simulation_from_settings,
    snapshot::{create_example_snapshots, SnapshotStore},
    utils::{ColorOutput, GridFormatter},
};
use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Toroidal Game of Life simulation engine")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NoiseKind {
    /// Coherent gradient noise: clustered, organic populations
    Gradient,
    /// Uncorrelated per-cell noise: uniform static
    White,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance a grid through generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Snapshot to start from (noise-randomized when omitted)
        #[arg(short, long)]
        load: Option<String>,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 100)]
        generations: u64,

        /// Save the final state under this snapshot name
        #[arg(short, long)]
        save: Option<String>,

        /// Pace generations with the configured step interval
        #[arg(long)]
        realtime: bool,

        /// Print every generation instead of only the final state
        #[arg(long)]
        print_each: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Populate a grid from seeded noise and save it as a snapshot
    Randomize {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Noise seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Aliveness threshold (overrides config)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Noise source to sample
        #[arg(long, value_enum, default_value = "gradient")]
        noise: NoiseKind,

        /// Name for the saved snapshot
        #[arg(short, long, default_value = "randomized")]
        name: String,
    },

    /// Print a stored snapshot
    Show {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Snapshot name
        #[arg(short, long)]
        name: String,

        /// Add coordinate rulers
        #[arg(long)]
        coords: bool,
    },

    /// List stored snapshots
    List {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Create configuration and example snapshots
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            load,
            generations,
            save,
            realtime,
            print_each,
            verbose,
        } => run_command(config, load, generations, save, realtime, print_each, verbose),
        Commands::Randomize {
            config,
            seed,
            threshold,
            noise,
            name,
        } => randomize_command(config, seed, threshold, noise, name),
        Commands::Show {
            config,
            name,
            coords,
        } => show_command(config, name, coords),
        Commands::List { config } => list_command(config),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from the given path, falling back to defaults when the
/// file does not exist
fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn noise_seed(settings: &Settings, cli_seed: Option<u64>) -> u64 {
    cli_seed
        .or(settings.randomize.seed)
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..100))
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    config_path: PathBuf,
    load: Option<String>,
    generations: u64,
    save: Option<String>,
    realtime: bool,
    print_each: bool,
    verbose: bool,
) -> Result<()> {
    let settings = load_settings(&config_path)?;
    settings
        .validate()
        .context("Configuration validation failed")?;

    let store = SnapshotStore::new(&settings.storage.snapshot_directory);
    let mut simulation = simulation_from_settings(&settings)?;

    match load {
        Some(ref name) => {
            let grid = store
                .load(name, settings.grid.edge_behavior)
                .with_context(|| format!("Failed to load snapshot '{}'", name))?;

            if verbose && (grid.width != settings.grid.width || grid.height != settings.grid.height)
            {
                println!(
                    "{}",
                    ColorOutput::warning(&format!(
                        "Snapshot is {}x{}, resizing simulation",
                        grid.width, grid.height
                    ))
                );
            }

            // The driver adopts whatever dimensions the snapshot carries
            simulation
                .restore(grid, MismatchPolicy::Resize)
                .context("Failed to restore snapshot")?;
            println!(
                "{}",
                ColorOutput::info(&format!("📂 Loaded snapshot '{}'", name))
            );
        }
        None => {
            let seed = noise_seed(&settings, None);
            let noise = GradientNoise::with_frequency(seed, settings.randomize.frequency);
            simulation.randomize_with_threshold(&noise, settings.randomize.threshold);
            println!(
                "{}",
                ColorOutput::info(&format!("🎲 Randomized grid (seed {})", seed))
            );
        }
    }

    if verbose {
        println!("Configuration:");
        println!(
            "  Grid: {}x{} ({:?} edges)",
            settings.grid.width, settings.grid.height, settings.grid.edge_behavior
        );
        println!("  Step interval: {}ms", settings.simulation.step_interval_ms);
        println!("  Snapshot dir: {}", store.root().display());
        println!();
    }

    let start_time = Instant::now();

    if realtime {
        let interval = Duration::from_millis(settings.simulation.step_interval_ms);
        let mut clock = StepClock::new(interval);
        let mut last = Instant::now();
        let mut done = 0u64;

        while done < generations {
            std::thread::sleep(Duration::from_millis(5));
            let now = Instant::now();
            let due = clock.advance_due(now - last);
            last = now;

            for _ in 0..due {
                if done >= generations {
                    break;
                }
                simulation.advance();
                done += 1;

                if print_each {
                    println!("{}", GridFormatter::format_status(&simulation));
                    println!("{}", GridFormatter::format_grid_compact(simulation.grid()));
                }
            }
        }
    } else {
        for _ in 0..generations {
            simulation.advance();

            if print_each {
                println!("{}", GridFormatter::format_status(&simulation));
                println!("{}", GridFormatter::format_grid_compact(simulation.grid()));
            }
        }
    }

    let elapsed = start_time.elapsed();

    if !print_each {
        println!("{}", GridFormatter::format_grid_compact(simulation.grid()));
    }
    println!("{}", GridFormatter::format_status(&simulation));
    println!(
        "{}",
        ColorOutput::success(&format!(
            "✅ Advanced {} generation(s) in {:.3}s",
            generations,
            elapsed.as_secs_f64()
        ))
    );

    if let Some(ref name) = save {
        let path = store
            .save(&simulation, name)
            .with_context(|| format!("Failed to save snapshot '{}'", name))?;
        println!(
            "{}",
            ColorOutput::success(&format!("💾 Saved to {}", path.display()))
        );
    }

    Ok(())
}

fn randomize_command(
    config_path: PathBuf,
    seed: Option<u64>,
    threshold: Option<f64>,
    noise_kind: NoiseKind,
    name: String,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        threshold,
        seed,
        ..Default::default()
    };
    settings.merge_with_cli(&cli_overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let seed = noise_seed(&settings, seed);
    let noise: Box<dyn NoiseSource> = match noise_kind {
        NoiseKind::Gradient => Box::new(GradientNoise::with_frequency(
            seed,
            settings.randomize.frequency,
        )),
        NoiseKind::White => Box::new(WhiteNoise::new(seed)),
    };

    let mut simulation = simulation_from_settings(&settings)?;
    simulation.randomize_with_threshold(noise.as_ref(), settings.randomize.threshold);

    println!(
        "{}",
        ColorOutput::info(&format!(
            "🎲 Randomized {}x{} grid (seed {}, threshold {})",
            simulation.width(),
            simulation.height(),
            seed,
            settings.randomize.threshold
        ))
    );
    println!("{}", GridFormatter::format_status(&simulation));

    let store = SnapshotStore::new(&settings.storage.snapshot_directory);
    let path = store
        .save(&simulation, &name)
        .with_context(|| format!("Failed to save snapshot '{}'", name))?;

    println!(
        "{}",
        ColorOutput::success(&format!("💾 Saved to {}", path.display()))
    );

    Ok(())
}

fn show_command(config_path: PathBuf, name: String, coords: bool) -> Result<()> {
    let settings = load_settings(&config_path)?;
    let store = SnapshotStore::new(&settings.storage.snapshot_directory);

    let grid = store
        .load(&name, settings.grid.edge_behavior)
        .with_context(|| format!("Failed to load snapshot '{}'", name))?;

    println!("Snapshot '{}' ({}x{}):", name, grid.width, grid.height);
    if coords {
        println!("{}", GridFormatter::format_grid_with_coords(&grid));
    } else {
        println!("{}", GridFormatter::format_grid_compact(&grid));
    }
    println!("Living cells: {}", grid.living_count());

    Ok(())
}

fn list_command(config_path: PathBuf) -> Result<()> {
    let settings = load_settings(&config_path)?;
    let store = SnapshotStore::new(&settings.storage.snapshot_directory);

    let mut names = store.list().context("Failed to list snapshots")?;
    // Enumeration order is filesystem-dependent; sort for display
    names.sort();

    if names.is_empty() {
        println!(
            "No snapshots in {}",
            settings.storage.snapshot_directory.display()
        );
        return Ok(());
    }

    println!(
        "{} snapshot(s) in {}:",
        names.len(),
        settings.storage.snapshot_directory.display()
    );
    for name in names {
        println!("  {}", name);
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    // Default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut small_config = Settings::default();
    small_config.grid.width = 40;
    small_config.grid.height = 20;
    small_config.to_file(&examples_dir.join("small.yaml"))?;

    let mut dead_edges_config = Settings::default();
    dead_edges_config.grid.edge_behavior = game_of_life_sim::EdgeBehavior::Dead;
    dead_edges_config.to_file(&examples_dir.join("dead_edges.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    // Starter snapshots
    let settings = Settings::default();
    let store = SnapshotStore::new(directory.join(&settings.storage.snapshot_directory));
    create_example_snapshots(&store).context("Failed to create example snapshots")?;
    println!("Created example snapshots in: {}", store.root().display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --load double_gliders --generations 50");
    println!("3. Run: cargo run -- randomize --seed 42");

    Ok(())
}
