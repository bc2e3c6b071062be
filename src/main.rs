// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use image_search::utils::logging::{format_error, format_success, format_warning};
use image_search::utils::RequestSpinner;
use image_search::{
    Config, FormVariant, HealthReport, HtmlExporter, HttpSearchClient, ImageFile, JsonExporter,
    OperationTimer, QueryType, ResultsRenderer, SearchController, SubmitOutcome, Validator,
    ViewModel,
};
use image_search::render::terminal::render_list;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};

const SLOW_SEARCH_THRESHOLD: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(name = "image_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Text and image similarity search client", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a search and print the result grid
    Search {
        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        image: Option<PathBuf>,

        #[arg(short = 'q', long, value_enum, default_value_t = QueryType::Text)]
        query_type: QueryType,

        /// Text/image blend weight
        #[arg(short, long)]
        weight: Option<f64>,

        #[arg(long)]
        use_pca: bool,

        /// Number of PCA components
        #[arg(long, value_name = "NUM")]
        components: Option<f64>,

        /// Overrides the form variant from the config file
        #[arg(long, value_enum)]
        variant: Option<FormVariant>,

        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },

    /// Render a saved search response without contacting the server
    Render {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },

    /// Check that the search service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    image_search::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    let succeeded = match cli.command {
        Commands::Search {
            text,
            image,
            query_type,
            weight,
            use_pca,
            components,
            variant,
            html,
            json,
        } => {
            let input = SearchInput {
                text,
                image,
                query_type,
                weight,
                use_pca,
                components,
            };
            cmd_search(&config, input, variant, html.as_deref(), json.as_deref(), cli.color)
                .await?
        }
        Commands::Render { input, html } => cmd_render(&config, &input, html.as_deref())?,
        Commands::Health => cmd_health(&config).await?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

struct SearchInput {
    text: Option<String>,
    image: Option<PathBuf>,
    query_type: QueryType,
    weight: Option<f64>,
    use_pca: bool,
    components: Option<f64>,
}

async fn cmd_search(
    config: &Config,
    input: SearchInput,
    variant: Option<FormVariant>,
    html: Option<&Path>,
    json: Option<&Path>,
    show_spinner: bool,
) -> Result<bool> {
    for path in [html, json].into_iter().flatten() {
        Validator::validate_output_path(path)?;
    }

    let mut form_config = config.form.clone();
    if let Some(variant) = variant {
        form_config.variant = variant;
    }

    let renderer = ResultsRenderer::new(config.server.image_base_url());
    let mut controller = SearchController::new(&form_config, renderer);

    controller.set_query_type(input.query_type);
    controller.set_use_pca(input.use_pca);
    if let Some(text) = input.text {
        controller.set_text_query(text);
    }
    if let Some(path) = input.image {
        Validator::validate_image_path(&path)?;
        let file = ImageFile::from_path(&path)
            .with_context(|| format!("Failed to read image {}", path.display()))?;
        info!("Attached {} ({} bytes, {})", file.name, file.len(), file.mime);
        controller.on_file_change(Some(file));
    }
    if let Some(weight) = input.weight {
        controller.on_weight_input(weight);
    }
    if let Some(components) = input.components {
        controller.on_components_input(components);
    }

    let client =
        HttpSearchClient::new(&config.server).context("Failed to create search client")?;
    info!("Searching via {}", client.search_url());

    let timer = OperationTimer::new("search");
    let spinner = RequestSpinner::start("Searching", show_spinner);
    let outcome = controller.submit(&client).await;
    spinner.finish();
    timer.warn_if_slow(SLOW_SEARCH_THRESHOLD);

    let succeeded = match outcome? {
        SubmitOutcome::Rendered { count, .. } => {
            timer.finish_with_count(count);
            println!("{}", render_list(&controller.view().results, config.render.results_limit));
            println!("{}", format_success("Search complete"));
            true
        }
        SubmitOutcome::Rejected(_) | SubmitOutcome::Failed { .. } => {
            if let Some(message) = controller.view().error.shown() {
                eprintln!("{}", format_error(message));
            }
            false
        }
        SubmitOutcome::Stale { seq } => {
            eprintln!("{}", format_warning(&format!("Search #{} was superseded", seq)));
            false
        }
    };

    if let Some(path) = json {
        JsonExporter::new(true).export(&controller.view().results, path)?;
    }
    if let Some(path) = html {
        HtmlExporter::default().export(controller.view(), path)?;
    }

    Ok(succeeded)
}

fn cmd_render(config: &Config, input: &Path, html: Option<&Path>) -> Result<bool> {
    info!("Rendering saved response from {}", input.display());

    let response = JsonExporter::load(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let renderer = ResultsRenderer::new(config.server.image_base_url());
    let view_model = ViewModel {
        results: renderer.render(&response.results),
        ..ViewModel::default()
    };

    println!("{}", render_list(&view_model.results, config.render.results_limit));

    if let Some(path) = html {
        Validator::validate_output_path(path)?;
        HtmlExporter::default().export(&view_model, path)?;
        println!("{}", format_success(&format!("Wrote {}", path.display())));
    }

    Ok(true)
}

async fn cmd_health(config: &Config) -> Result<bool> {
    let client =
        HttpSearchClient::new(&config.server).context("Failed to create search client")?;

    let report = HealthReport::new(config.server.base_url.clone(), vec![client.ping().await]);
    print!("{}", report.format());

    Ok(report.is_healthy())
}
