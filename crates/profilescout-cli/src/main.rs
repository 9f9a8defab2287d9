use std::fs::OpenOptions;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use profilescout_api::GitHubClient;
use profilescout_core::{
    providers::GitHubProvider, AccountResolver, ColumnKey, Config, Handle, PageOutcome,
    RepositoryList, SortSpec, PAGE_SIZE_CHOICES,
};
use profilescout_tui::{App, Services};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod output;

#[derive(Parser)]
#[command(name = "profilescout")]
#[command(version, about = "Look up a GitHub user and browse their repositories", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GitHub token, only needed to get past the anonymous rate limit
    #[arg(long, env = "GITHUB_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive profile and repository browser (the default)
    Tui {
        /// Username to look up right away
        handle: Option<String>,
    },
    /// Print a profile and one page of its repositories
    Show(ShowArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// GitHub username, without the @
    handle: String,

    /// Column to sort by (defaults to the configured initial sort)
    #[arg(long, value_enum)]
    sort: Option<SortColumn>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Rows per page: 5, 10, 15 or 20
    #[arg(long, value_parser = parse_page_size)]
    page_size: Option<NonZeroUsize>,

    /// Page to print, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Fetch every repository instead of just the first batch
    #[arg(long)]
    all: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortColumn {
    Name,
    Stars,
}

impl From<SortColumn> for ColumnKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => ColumnKey::Name,
            SortColumn::Stars => ColumnKey::Stars,
        }
    }
}

fn parse_page_size(value: &str) -> Result<NonZeroUsize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;

    match NonZeroUsize::new(size) {
        Some(size) if PAGE_SIZE_CHOICES.contains(&size.get()) => Ok(size),
        _ => Err(format!("page size must be one of {:?}", PAGE_SIZE_CHOICES)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { handle: None });

    // The TUI owns the terminal, so its logs go to a file
    match command {
        Commands::Tui { .. } => init_file_logging()?,
        Commands::Show(_) => init_stderr_logging(),
    }

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(token) = cli.token {
        config.github.token = Some(token);
    }

    let services = build_services(&config)?;

    match command {
        Commands::Tui { handle } => {
            tracing::info!("Starting TUI");
            let app = App::new(
                config.list_options(),
                config.ui.initial_sort(),
                config.ui.error_timeout(),
            );
            profilescout_tui::run_tui(app, services, handle).await
        }
        Commands::Show(args) => show(&config, &services, args).await,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "profilescout=info".into())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_file_logging() -> anyhow::Result<()> {
    // No data dir, no logs
    let Some(data_dir) = dirs::data_local_dir() else {
        return Ok(());
    };

    let log_dir = data_dir.join("profilescout");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    let log_path = log_dir.join("profilescout.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

fn build_services(config: &Config) -> anyhow::Result<Services> {
    let client = GitHubClient::with_base_url(
        config.github.token.clone(),
        config.github.api_url.clone(),
        config.network.timeout(),
    )
    .context("Failed to build GitHub client")?
    .with_retry_config(config.network.retry_config());

    if !client.has_token() {
        tracing::debug!("No GitHub token configured, using the anonymous rate limit");
    }

    let provider = Arc::new(GitHubProvider::new(client));
    Ok(Services {
        resolver: AccountResolver::new(provider.clone()),
        pages: provider,
    })
}

async fn show(config: &Config, services: &Services, args: ShowArgs) -> anyhow::Result<()> {
    let handle = Handle::from_input(&args.handle)?;
    let account = services.resolver.resolve(&handle).await?;

    let mut options = config.list_options();
    if let Some(size) = args.page_size {
        options.default_page_size = size;
    }

    let sort = match args.sort {
        Some(column) if args.desc => Some(SortSpec::descending(column.into())),
        Some(column) => Some(SortSpec::ascending(column.into())),
        None => config.ui.initial_sort(),
    };

    let mut list = RepositoryList::new(options);
    let first = list.reset(account);
    list.set_sort(sort);

    if args.all {
        list.load_remaining(services.pages.as_ref(), first).await?;
    } else {
        let response = first.execute(services.pages.as_ref()).await;
        if let PageOutcome::Failed(e) = list.apply_page(response) {
            return Err(e.into());
        }
    }

    let page = isize::try_from(args.page.saturating_sub(1)).unwrap_or(isize::MAX);
    list.goto_page(page);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output::page_json(&list))?);
    } else {
        if let Some(account) = list.account() {
            print!("{}", output::render_profile(account));
        }
        println!();
        print!("{}", output::render_page(&list));
    }

    Ok(())
}
