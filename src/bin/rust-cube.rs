use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use rust_cube::cards::{load_catalog, CatalogIndex};
use rust_cube::compose::{
    adjust_pool, all_commanders, build_half_decks, commander_cube, finish_decks,
    jumpstart_commanders, parse_half_decks, random_cube, render_half_decks,
    render_jumpstart_decks, select_commanders, RecipeConfigs, ALL_COMMANDERS_HEADER,
};
use rust_cube::core::PoolRng;
use rust_cube::synergy::{EdhrecProvider, StaticProvider, SynergyProvider};
use rust_cube::text::{
    find_lists, read_names, read_sections, render_list, render_sections, winner_first,
};

#[derive(Parser)]
#[command(name = "rust-cube")]
#[command(about = "Cube, pool and jumpstart deck assembly", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// MTGJSON AllPrintings file
    #[arg(long, global = true, default_value = "AllPrintings.json")]
    catalog: PathBuf,

    /// RNG seed; a random one is chosen and logged when absent
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file overriding recipe settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate the 100-card pool using last round's decklists
    Pool(PoolArgs),

    /// Build a sectioned random cube
    #[command(name = "random-cube")]
    RandomCube(OutputArgs),

    /// Build a commander-seeded cube
    #[command(name = "commander-cube")]
    CommanderCube(CubeArgs),

    /// Deal jumpstart commanders to players and draft rounds
    Select(SelectArgs),

    /// Build half decks for paired commanders, then add lands
    #[command(name = "half-decks")]
    HalfDecks(HalfDeckArgs),

    /// Add landbase lands and basics to a half-deck file
    #[command(name = "add-lands")]
    AddLands(AddLandsArgs),

    /// List every commander-eligible card
    Commanders(OutputArgs),

    /// List jumpstart commanders by color
    #[command(name = "jumpstart-commanders")]
    JumpstartCommanders(OutputArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (defaults per command)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PoolArgs {
    /// Directory holding the decklist files
    #[arg(long, default_value = ".")]
    decklists: PathBuf,

    /// Winning decklist; defaults to the first decklist by file name
    #[arg(long)]
    winner: Option<PathBuf>,

    #[arg(long, short, default_value = "1AdjustedCardPool.txt")]
    output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Classic,
    Hipster,
}

#[derive(Args)]
struct ProviderArgs {
    /// Skip synergy lookups entirely
    #[arg(long)]
    offline: bool,

    /// Synergy provider base URL
    #[arg(long)]
    provider_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[derive(Args)]
struct CubeArgs {
    #[arg(long, value_enum, default_value = "classic")]
    preset: Preset,

    /// Commander list to draw from
    #[arg(long, default_value = "2AllCommanders.txt")]
    commanders: PathBuf,

    /// Staples placed in the cube first (classic preset)
    #[arg(long)]
    staples: Option<PathBuf>,

    #[command(flatten)]
    provider: ProviderArgs,

    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct SelectArgs {
    #[arg(long, default_value = "3AllJumpstartCommanders.txt")]
    commanders: PathBuf,

    #[arg(long, short, default_value = "3CommanderSelection.txt")]
    output: PathBuf,
}

#[derive(Args)]
struct HalfDeckArgs {
    #[arg(long, default_value = "3CommanderSelection.txt")]
    selection: PathBuf,

    #[arg(long, short, default_value = "3CommanderHalfDecks.txt")]
    output: PathBuf,

    /// Stop after writing half decks
    #[arg(long)]
    no_lands: bool,

    #[command(flatten)]
    lands: LandArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

#[derive(Args)]
struct LandArgs {
    /// Landbase file with one section per color label
    #[arg(long, default_value = "3Landbases.txt")]
    landbases: PathBuf,

    /// Finished deck file
    #[arg(long, default_value = "3JumpstartDecks.txt")]
    decks_output: PathBuf,
}

#[derive(Args)]
struct AddLandsArgs {
    #[arg(long, default_value = "3CommanderHalfDecks.txt")]
    half_decks: PathBuf,

    #[command(flatten)]
    lands: LandArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let configs = match &cli.config {
        Some(path) => RecipeConfigs::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RecipeConfigs::default(),
    };

    let rng = match cli.seed {
        Some(seed) => PoolRng::new(seed),
        None => PoolRng::from_entropy(),
    };
    log::info!("seed {}", rng.seed());

    match &cli.command {
        Commands::Pool(args) => run_pool(&cli, &configs, args, rng),
        Commands::RandomCube(args) => {
            let catalog = open_catalog(&cli.catalog)?;
            let sections = random_cube(&catalog, &configs.random_cube, rng);
            write_output(&output_or(args, "4RandomCube.txt"), &render_sections(&sections))
        }
        Commands::CommanderCube(args) => run_commander_cube(&cli, &configs, args, rng),
        Commands::Select(args) => {
            let commanders = read_list(&args.commanders)?;
            let selection = select_commanders(&commanders, &configs.selection, rng)?;
            write_output(&args.output, &render_sections(&selection.to_sections()))
        }
        Commands::HalfDecks(args) => run_half_decks(&cli, &configs, args, rng),
        Commands::AddLands(args) => {
            let catalog = open_catalog(&cli.catalog)?;
            let text = fs::read_to_string(&args.half_decks)
                .with_context(|| format!("Failed to read {}", args.half_decks.display()))?;
            run_add_lands(&catalog, &configs, &text, &args.lands, rng)
        }
        Commands::Commanders(args) => {
            let catalog = open_catalog(&cli.catalog)?;
            let names = all_commanders(&catalog);
            let path = output_or(args, "2AllCommanders.txt");
            write_output(&path, &render_list(Some(ALL_COMMANDERS_HEADER), &names))
        }
        Commands::JumpstartCommanders(args) => {
            let catalog = open_catalog(&cli.catalog)?;
            let sections = jumpstart_commanders(&catalog);
            let path = output_or(args, "3AllJumpstartCommanders.txt");
            write_output(&path, &render_sections(&sections))
        }
    }
}

fn run_pool(cli: &Cli, configs: &RecipeConfigs, args: &PoolArgs, rng: PoolRng) -> Result<()> {
    let catalog = open_catalog(&cli.catalog)?;
    let mut paths = find_lists(&args.decklists, &configs.pool.decklist_prefix)
        .with_context(|| format!("Failed to list {}", args.decklists.display()))?;
    if let Some(winner) = &args.winner {
        paths = winner_first(paths, winner);
    }
    if let Some(first) = paths.first() {
        log::info!("winning decklist: {}", first.display());
    }

    let decklists = paths
        .iter()
        .map(|path| read_list(path))
        .collect::<Result<Vec<_>>>()?;
    let outcome = adjust_pool(&catalog, &decklists, &configs.pool, rng);
    log::info!(
        "pool has {} cards ({} kept)",
        outcome.cards.len(),
        outcome.kept
    );
    write_output(
        &args.output,
        &render_list(Some(&configs.pool.header), &outcome.cards),
    )
}

fn run_commander_cube(
    cli: &Cli,
    configs: &RecipeConfigs,
    args: &CubeArgs,
    rng: PoolRng,
) -> Result<()> {
    let catalog = open_catalog(&cli.catalog)?;
    let config = match args.preset {
        Preset::Classic => &configs.classic_cube,
        Preset::Hipster => &configs.hipster_cube,
    };
    let commanders = read_list(&args.commanders)?;
    let staples = match &args.staples {
        Some(path) => read_list(path)?,
        None => {
            if config.include_staples {
                log::warn!("no staples list given; the cube starts from commanders only");
            }
            Vec::new()
        }
    };

    let provider = open_provider(&args.provider)?;
    let outcome = commander_cube(&catalog, provider.as_ref(), &commanders, &staples, config, rng)?;
    if outcome.fetch_failures > 0 {
        log::warn!(
            "{} of {} commanders had no synergy data",
            outcome.fetch_failures,
            outcome.commanders.len()
        );
    }

    let default_name = match args.preset {
        Preset::Classic => "2Cube.txt",
        Preset::Hipster => "2CubeHipster.txt",
    };
    let path = args.output.clone().unwrap_or_else(|| PathBuf::from(default_name));
    write_output(&path, &render_list(None, &outcome.cards))
}

fn run_half_decks(
    cli: &Cli,
    configs: &RecipeConfigs,
    args: &HalfDeckArgs,
    mut rng: PoolRng,
) -> Result<()> {
    let catalog = open_catalog(&cli.catalog)?;
    let commanders = read_list(&args.selection)?;
    let provider = open_provider(&args.provider)?;

    let pairs = build_half_decks(
        &catalog,
        provider.as_ref(),
        &commanders,
        &configs.half_decks,
        rng.fork(),
    )?;
    let text = render_half_decks(&pairs);
    write_output(&args.output, &text)?;

    if args.no_lands {
        return Ok(());
    }
    run_add_lands(&catalog, configs, &text, &args.lands, rng.fork())
}

fn run_add_lands(
    catalog: &CatalogIndex,
    configs: &RecipeConfigs,
    half_decks: &str,
    args: &LandArgs,
    rng: PoolRng,
) -> Result<()> {
    let landbases = read_sections(&args.landbases)
        .with_context(|| format!("Failed to read {}", args.landbases.display()))?;
    let pairs = parse_half_decks(half_decks);
    let decks = finish_decks(catalog, &landbases, &pairs, &configs.lands, rng);
    write_output(&args.decks_output, &render_jumpstart_decks(&decks))
}

fn open_catalog(path: &Path) -> Result<CatalogIndex> {
    load_catalog(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

fn open_provider(args: &ProviderArgs) -> Result<Box<dyn SynergyProvider>> {
    if args.offline {
        log::info!("offline: synergy lookups disabled");
        return Ok(Box::new(StaticProvider::new()));
    }
    let timeout = Duration::from_secs(args.timeout_secs);
    let base_url = args
        .provider_url
        .clone()
        .unwrap_or_else(|| EdhrecProvider::DEFAULT_BASE_URL.to_string());
    let provider = EdhrecProvider::with_base_url(base_url, timeout)
        .context("Failed to build HTTP client")?;
    Ok(Box::new(provider))
}

fn read_list(path: &Path) -> Result<Vec<String>> {
    read_names(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn output_or(args: &OutputArgs, default_name: &str) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_name))
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
