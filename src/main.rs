use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use startup_seer::analysis::AnalysisClient;
use startup_seer::scoring::{PredictionResult, ScoringConfig};
use startup_seer::startup::{
    FounderExperience, FundingAmount, Industry, ProductStage, StartupDescription, TargetMarket,
    TeamSize,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

/// Competition level the prediction form starts at
const DEFAULT_COMPETITION_LEVEL: u8 = 50;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Predict a startup's chance of success
    Predict(PredictArgs),
    /// Send a business PDF to the analysis service and print its assessment
    Analyze {
        /// PDF containing the business plan, financials, or company profile
        pdf: PathBuf,

        /// Print the service's JSON answer instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
struct PredictArgs {
    /// Startup description file (YAML or JSON). Repeat to score several at once.
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    #[arg(long)]
    company_name: Option<String>,

    /// tech, healthcare, finance, ecommerce, education, manufacturing, service, other
    #[arg(long)]
    industry: Option<String>,

    /// Four-digit year (defaults to the current year)
    #[arg(long)]
    founding_year: Option<String>,

    /// solo, 2-5, 6-10, 11-20, 21-50, 50+
    #[arg(long)]
    team_size: Option<String>,

    /// first-time, prev-failed, prev-success, industry-expert, serial
    #[arg(long)]
    founder_experience: Option<String>,

    /// bootstrap, angel, seed, seriesA, seriesB
    #[arg(long)]
    funding_amount: Option<String>,

    /// idea, mvp, beta, launched, growth
    #[arg(long)]
    product_stage: Option<String>,

    /// b2c, b2b, b2b2c, c2c, enterprise, government
    #[arg(long)]
    target_market: Option<String>,

    /// 0 (no competition) to 100 (saturated market), defaults to 50
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    competition_level: Option<u8>,

    /// How the company makes money (5-500 characters)
    #[arg(long)]
    business_model: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Skip the simulated model latency
    #[arg(long)]
    no_delay: bool,
}

#[derive(Parser, Debug)]
#[command(name = "startup-seer")]
#[command(about = "Startup success prediction and business PDF analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/startup-seer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Base URL of the PDF analysis service
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    startup_seer::logging::init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config = match startup_seer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = startup_seer::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let code = match cli.command {
        Commands::Predict(args) => run_predict(args, scoring).await,
        Commands::Analyze { pdf, json } => {
            let api_url = startup_seer::config::resolve_api_url(cli.api_url.as_deref(), &config);
            run_analyze(pdf, json, &api_url).await
        }
    };

    std::process::exit(code);
}

async fn run_predict(args: PredictArgs, mut scoring: ScoringConfig) -> i32 {
    let start_time = Instant::now();

    let descriptions = if args.files.is_empty() {
        match description_from_flags(&args, chrono::Utc::now().year()) {
            Ok(desc) => vec![(String::from("command line"), desc)],
            Err(errors) => {
                eprintln!("Missing startup details:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                eprintln!("Pass every field as a flag, or use --file <FILE>.");
                return EXIT_INPUT;
            }
        }
    } else {
        let mut loaded = Vec::new();
        for path in &args.files {
            match startup_seer::startup::load_description(path) {
                Ok(desc) => loaded.push((path.display().to_string(), desc)),
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    return EXIT_INPUT;
                }
            }
        }
        loaded
    };

    let mut any_invalid = false;
    for (source, desc) in &descriptions {
        if let Err(errors) = startup_seer::startup::validate_description(desc) {
            eprintln!("Invalid startup description ({}):", source);
            for error in errors {
                eprintln!("  - {}", error);
            }
            any_invalid = true;
        }
    }
    if any_invalid {
        return EXIT_INPUT;
    }

    if args.no_delay {
        scoring.latency = Some("0s".to_string());
    }
    debug!(
        "Scoring {} description(s) with {:?} simulated latency",
        descriptions.len(),
        scoring.latency()
    );

    // Predict concurrently; the simulated latency of each overlaps the others
    let mut futures = FuturesUnordered::new();
    for (index, (_, desc)) in descriptions.iter().enumerate() {
        let scoring = &scoring;
        futures.push(async move {
            let result = startup_seer::scoring::predict_with_latency(desc, scoring).await;
            (index, result)
        });
    }

    let mut results: Vec<Option<PredictionResult>> = vec![None; descriptions.len()];
    while let Some((index, result)) = futures.next().await {
        info!(
            "{}: score {} ({} confidence)",
            descriptions[index].1.company_name, result.score, result.confidence
        );
        results[index] = Some(result);
    }
    let results: Vec<PredictionResult> = results.into_iter().flatten().collect();

    if args.json {
        let rendered = if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])
        } else {
            serde_json::to_string_pretty(&results)
        };
        match rendered {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to render JSON: {}", e);
                return EXIT_INPUT;
            }
        }
    } else {
        let use_colors = startup_seer::output::should_use_colors();
        for (i, ((_, desc), result)) in descriptions.iter().zip(&results).enumerate() {
            if i > 0 {
                println!();
            }
            println!(
                "{}",
                startup_seer::output::format_prediction(&desc.company_name, result, use_colors)
            );
            if tracing::enabled!(tracing::Level::DEBUG) {
                let breakdown = startup_seer::scoring::score_breakdown(desc, &scoring);
                println!();
                println!("{}", startup_seer::output::format_breakdown(&breakdown));
            }
        }
    }

    debug!(
        "Scored {} startup(s) in {:?}",
        results.len(),
        start_time.elapsed()
    );
    EXIT_SUCCESS
}

async fn run_analyze(pdf: PathBuf, json: bool, api_url: &str) -> i32 {
    let start_time = Instant::now();

    let client = match AnalysisClient::new(api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            return EXIT_NETWORK;
        }
    };
    debug!("Analysis endpoint: {}", client.endpoint());

    let response = match client.analyze_pdf(&pdf).await {
        Ok(r) => r,
        Err(e) if e.is_client_validation() => {
            eprintln!("Error: {}", e);
            return EXIT_INPUT;
        }
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            return EXIT_NETWORK;
        }
    };

    if json {
        match serde_json::to_string_pretty(&response) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to render JSON: {}", e);
                return EXIT_NETWORK;
            }
        }
    } else {
        let use_colors = startup_seer::output::should_use_colors();
        println!(
            "{}",
            startup_seer::output::format_analysis(&response, use_colors)
        );
    }

    debug!("Analysis finished in {:?}", start_time.elapsed());
    EXIT_SUCCESS
}

/// Build a description from individual flags. Reports every missing flag.
/// Unrecognized categorical values pass through as `Unknown` for the
/// validator to report.
fn description_from_flags(
    args: &PredictArgs,
    current_year: i32,
) -> Result<StartupDescription, Vec<String>> {
    let mut missing = Vec::new();
    let mut require = |value: &Option<String>, flag: &str| -> String {
        match value {
            Some(v) => v.clone(),
            None => {
                missing.push(format!("--{} is required", flag));
                String::new()
            }
        }
    };

    let company_name = require(&args.company_name, "company-name");
    let industry = require(&args.industry, "industry");
    let team_size = require(&args.team_size, "team-size");
    let founder_experience = require(&args.founder_experience, "founder-experience");
    let funding_amount = require(&args.funding_amount, "funding-amount");
    let product_stage = require(&args.product_stage, "product-stage");
    let target_market = require(&args.target_market, "target-market");
    let business_model = require(&args.business_model, "business-model");

    if !missing.is_empty() {
        return Err(missing);
    }

    Ok(StartupDescription {
        company_name,
        industry: Industry::parse(&industry),
        founding_year: args
            .founding_year
            .clone()
            .unwrap_or_else(|| current_year.to_string()),
        team_size: TeamSize::parse(&team_size),
        founder_experience: FounderExperience::parse(&founder_experience),
        funding_amount: FundingAmount::parse(&funding_amount),
        product_stage: ProductStage::parse(&product_stage),
        target_market: TargetMarket::parse(&target_market),
        competition_level: args
            .competition_level
            .unwrap_or(DEFAULT_COMPETITION_LEVEL),
        business_model,
    })
}
