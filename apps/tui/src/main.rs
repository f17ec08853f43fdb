use clap::Parser;
use color_eyre::Result;

use finhealth_dash::api::ApiClient;
use finhealth_dash::app::{App, AppActions};
use finhealth_dash::cli::CliArgs;
use finhealth_dash::config::init_app_config;
use finhealth_dash::{event, logging, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config();

    // Without a terminal on stdout there is nothing to draw on.
    if args.wants_headless() || !is_terminal() {
        logging::init_stderr_logging(config.debug)?;
        return event::run_headless(&args, &config).await;
    }

    logging::init_file_logging(&config.log_file, config.debug)?;
    tracing::info!(api_url = %config.api_url, "starting dashboard");

    let client = ApiClient::new(config.api_url.clone(), config.timeout);
    let (actions, mut events) = AppActions::new(client);

    let mut app = App::new(config.latest_year);
    app.api_url.clone_from(&config.api_url);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, &actions, &mut events).await;
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
