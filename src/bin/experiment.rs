use clap::{Parser, Subcommand};
use lakesearch::{
    environment::{GenerationParameters, GridEnvironment, Placement, DEFAULT_LIFE_LIMIT},
    experiment::{
        write_results_to_path, ConfigError, ExperimentConfig, ExperimentError, Harness, Scenario,
        ScenarioName,
    },
    search::{
        search_engines::{SearchEngineName, SearchOptions, SearchResult, DEFAULT_DEPTH_LIMIT},
        validate, HeuristicName, Verbosity,
    },
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Compare search algorithms on randomly generated frozen lakes.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every algorithm under every cost scenario on a series of generated
    /// environments and write one CSV row per run.
    Sweep {
        #[arg(help = "The TOML experiment config, defaults apply if omitted", long = "config")]
        config: Option<PathBuf>,
        #[arg(
            help = "The output CSV file",
            short = 'o',
            long = "output",
            default_value = "results.csv"
        )]
        output: PathBuf,
        #[arg(help = "Override the number of environments", long = "runs")]
        runs: Option<usize>,
        #[arg(help = "Override the side length of the environments", long = "size")]
        size: Option<usize>,
        #[arg(help = "Override the seed of the first environment", long = "seed")]
        seed: Option<u64>,
        #[arg(help = "Override the number of worker threads", short = 'j', long = "jobs")]
        jobs: Option<usize>,
    },
    /// Generate a single environment, solve it with one algorithm and print
    /// the map and the plan.
    Solve {
        #[arg(long = "size", default_value_t = 10)]
        size: usize,
        #[arg(long = "freeze-probability", default_value_t = 0.92)]
        freeze_probability: f64,
        #[arg(long = "seed", default_value_t = 0)]
        seed: u64,
        #[arg(value_enum, long = "placement", default_value_t = Placement::Corners)]
        placement: Placement,
        #[arg(
            value_enum,
            help = "The search algorithm to use",
            short = 'a',
            long = "algorithm",
            default_value_t = SearchEngineName::AStar
        )]
        algorithm: SearchEngineName,
        #[arg(long = "depth-limit", default_value_t = DEFAULT_DEPTH_LIMIT)]
        depth_limit: usize,
        #[arg(value_enum, long = "heuristic", default_value_t = HeuristicName::WeightedManhattan)]
        heuristic: HeuristicName,
        #[arg(value_enum, long = "scenario", default_value_t = ScenarioName::Uniform)]
        scenario: ScenarioName,
        #[arg(long = "life-limit", default_value_t = DEFAULT_LIFE_LIMIT)]
        life_limit: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let outcome = match cli.command {
        Commands::Sweep {
            config,
            output,
            runs,
            size,
            seed,
            jobs,
        } => sweep(config, output, runs, size, seed, jobs),
        Commands::Solve {
            size,
            freeze_probability,
            seed,
            placement,
            algorithm,
            depth_limit,
            heuristic,
            scenario,
            life_limit,
        } => {
            let parameters = GenerationParameters::new(size, freeze_probability)
                .with_life_limit(life_limit)
                .with_placement(placement);
            let options = SearchOptions::default()
                .with_depth_limit(depth_limit)
                .with_life_limit(Some(life_limit))
                .with_seed(seed)
                .with_heuristic(heuristic);
            solve(&parameters, seed, algorithm, &options, &scenario.into())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn sweep(
    config_path: Option<PathBuf>,
    output: PathBuf,
    runs: Option<usize>,
    size: Option<usize>,
    seed: Option<u64>,
    jobs: Option<usize>,
) -> Result<(), ExperimentError> {
    let mut config = match config_path {
        Some(path) => ExperimentConfig::from_path(&path)?,
        None => ExperimentConfig::default(),
    };
    config.runs = runs.unwrap_or(config.runs);
    config.size = size.unwrap_or(config.size);
    config.seed = seed.unwrap_or(config.seed);
    config.jobs = jobs.unwrap_or(config.jobs);

    let harness = Harness::new(config)?;
    let results = harness.run()?;
    write_results_to_path(&output, &results)
}

fn solve(
    parameters: &GenerationParameters,
    seed: u64,
    algorithm: SearchEngineName,
    options: &SearchOptions,
    scenario: &Scenario,
) -> Result<(), ExperimentError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let environment = GridEnvironment::generate_with(parameters, &mut rng)
        .map_err(ConfigError::from)?;
    info!(
        size = environment.size(),
        freeze_probability = environment.freeze_probability(),
        holes = environment.num_holes(),
        "generated environment"
    );
    println!("{}\n", environment);

    let mut engine = algorithm.create(options);
    let (result, statistics) = engine.search(&environment, &scenario.costs);
    info!(
        expanded_nodes = statistics.expanded_nodes(),
        generated_nodes = statistics.generated_nodes(),
        duration = %humantime::format_duration(statistics.elapsed()),
    );

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            match validate(&plan, &environment) {
                Ok(()) => info!("plan is valid"),
                Err(e) => {
                    error!("plan is invalid: {}", e);
                    return Ok(());
                }
            }
            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
            println!("Plan cost ({}): {}", scenario.name, plan.cost(&scenario.costs));
        }
        _ => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
        }
    }
    Ok(())
}
