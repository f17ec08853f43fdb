use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "finhealth-dash", version, about = "Financial health dashboard")]
pub struct CliArgs {
    /// Run without the terminal UI and print results
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the analysis backend base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the request timeout
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Company to analyze (headless)
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,

    /// Fiscal year to analyze (headless, defaults to the most recent year)
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Report code: 11014, 11013, 11012, 11011 or q3, half, annual, q1
    #[arg(long, value_name = "CODE")]
    pub report: Option<String>,

    /// Search companies by name and exit
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Maximum number of search results
    #[arg(long, value_name = "N", default_value_t = crate::api::DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,

    /// Check backend health and exit
    #[arg(long)]
    pub health: bool,
}

impl CliArgs {
    /// Whether any flag asks for a one-shot run instead of the dashboard.
    pub const fn wants_headless(&self) -> bool {
        self.headless || self.health || self.search.is_some() || self.company.is_some()
    }

    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("FINHEALTH_API_URL", url);
        }
        if let Some(timeout) = self.timeout {
            std::env::set_var("FINHEALTH_API_TIMEOUT_SECS", timeout.to_string());
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
