use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::Serialize;

use crate::api::{AnalysisRequest, AnalysisResponse, ApiClient, Company};
use crate::app::form::MIN_SEARCH_CHARS;
use crate::cli::CliArgs;
use crate::config::AppConfig;
use crate::domain::{classify_label, grade_tier, ReportCode};

#[derive(Debug, Serialize)]
struct HeadlessHealth<'a> {
    api_url: &'a str,
    healthy: bool,
}

#[derive(Debug, Serialize)]
struct HeadlessIndicator {
    category: String,
    name: String,
    value: f64,
    tier: &'static str,
    label: &'static str,
    color: String,
}

#[derive(Debug, Serialize)]
struct HeadlessScore {
    category: String,
    score: f64,
}

#[derive(Debug, Serialize)]
struct HeadlessRadar {
    overall_score: f64,
    grade: String,
    grade_color: String,
    scores: Vec<HeadlessScore>,
}

#[derive(Debug, Serialize)]
struct HeadlessReport {
    company_name: String,
    year: String,
    report_code: String,
    success: bool,
    message: String,
    indicators: Vec<HeadlessIndicator>,
    radar: Option<HeadlessRadar>,
}

fn build_report(request: &AnalysisRequest, response: &AnalysisResponse) -> HeadlessReport {
    let indicators = response
        .report()
        .map(|data| {
            data.indices
                .iter()
                .map(|index| {
                    let interpretation = classify_label(&index.category_label, index.value);
                    HeadlessIndicator {
                        category: index.category_label.clone(),
                        name: index.indicator_name.clone(),
                        value: index.value,
                        tier: interpretation.tier.as_str(),
                        label: interpretation.label,
                        color: interpretation.tier.hex(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let radar = response.radar().map(|radar| HeadlessRadar {
        overall_score: radar.overall_score,
        grade: radar.grade.clone(),
        grade_color: grade_tier(&radar.grade).hex(),
        scores: radar
            .points()
            .into_iter()
            .map(|(category, score)| HeadlessScore {
                category: category.to_string(),
                score,
            })
            .collect(),
    });

    HeadlessReport {
        company_name: response
            .report()
            .map_or_else(|| request.company_name.clone(), |d| d.company_name.clone()),
        year: response
            .report()
            .map_or_else(|| request.year.clone(), |d| d.year.clone()),
        report_code: request.report_code.clone(),
        success: response.success,
        message: response.message.clone(),
        indicators,
        radar,
    }
}

fn format_report(report: &HeadlessReport) -> String {
    let mut lines = vec![
        format!(
            "Financial Health: {} ({}년, report {})",
            report.company_name, report.year, report.report_code
        ),
        "=".repeat(40),
    ];

    if !report.message.is_empty() {
        lines.push(report.message.clone());
    }
    if !report.success {
        return lines.join("\n");
    }

    if let Some(radar) = &report.radar {
        lines.push(String::new());
        lines.push(format!(
            "Overall: {:.1}점  Grade: {}",
            radar.overall_score, radar.grade
        ));
        for score in &radar.scores {
            lines.push(format!("- {}: {:.1}점 / 100점", score.category, score.score));
        }
    }

    let mut current_category: Option<&str> = None;
    for indicator in &report.indicators {
        if current_category != Some(indicator.category.as_str()) {
            lines.push(String::new());
            lines.push(format!("[{}]", indicator.category));
            current_category = Some(indicator.category.as_str());
        }
        lines.push(format!(
            "- {}: {:.2} {}",
            indicator.name, indicator.value, indicator.label
        ));
    }

    if report.indicators.is_empty() {
        lines.push(String::new());
        lines.push("No indicators returned for this period.".to_string());
    }

    lines.join("\n")
}

fn format_companies(query: &str, companies: &[Company]) -> String {
    let mut lines = vec![format!("Companies matching \"{query}\": {}", companies.len())];
    lines.extend(
        companies
            .iter()
            .map(|company| format!("- {} ({})", company.name, company.code)),
    );
    lines.join("\n")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

async fn run_health(client: &ApiClient, json: bool) -> Result<()> {
    let healthy = client.health_check().await;
    if json {
        print_json(&HeadlessHealth {
            api_url: client.base_url(),
            healthy,
        })?;
    } else {
        let status = if healthy { "healthy" } else { "unreachable" };
        println!("Backend {}: {status}", client.base_url());
    }

    if healthy {
        Ok(())
    } else {
        Err(eyre!("Backend at {} is not healthy", client.base_url()))
    }
}

async fn run_search(client: &ApiClient, query: &str, limit: usize, json: bool) -> Result<()> {
    let query = query.trim();
    if query.chars().count() < MIN_SEARCH_CHARS {
        return Err(eyre!(
            "Search needs at least {MIN_SEARCH_CHARS} characters, got \"{query}\""
        ));
    }

    let companies = client.search(query, limit).await?;
    tracing::info!(query, results = companies.len(), "search finished");

    if json {
        print_json(&companies)
    } else {
        println!("{}", format_companies(query, &companies));
        Ok(())
    }
}

fn analysis_request(args: &CliArgs, config: &AppConfig, company: &str) -> Result<AnalysisRequest> {
    let company = company.trim();
    if company.is_empty() {
        return Err(eyre!("Company name must not be empty"));
    }

    let report = match args.report.as_deref() {
        Some(code) => ReportCode::parse(code).ok_or_else(|| eyre!("Unknown report code: {code}"))?,
        None => ReportCode::default(),
    };
    let year = args.year.unwrap_or(config.latest_year);

    Ok(AnalysisRequest::new(company, year, report))
}

async fn run_analysis(client: &ApiClient, request: &AnalysisRequest, json: bool) -> Result<()> {
    tracing::info!(company = %request.company_name, year = %request.year, "running analysis");
    let response = client.analyze(request).await?;
    let report = build_report(request, &response);

    if json {
        print_json(&report)?;
    } else {
        println!("{}", format_report(&report));
    }

    if response.success {
        Ok(())
    } else {
        Err(eyre!("Analysis unavailable: {}", response.message))
    }
}

/// Run the requested one-shot operations without the terminal UI.
pub async fn run_headless(args: &CliArgs, config: &AppConfig) -> Result<()> {
    let client = ApiClient::new(config.api_url.clone(), config.timeout);
    let mut ran = false;

    if args.health {
        run_health(&client, args.json).await?;
        ran = true;
    }

    if let Some(query) = &args.search {
        run_search(&client, query, args.limit, args.json).await?;
        ran = true;
    }

    if let Some(company) = &args.company {
        let request = analysis_request(args, config, company)?;
        run_analysis(&client, &request, args.json).await?;
        ran = true;
    }

    if !ran {
        println!("{}", CliArgs::help_text());
        return Err(eyre!(
            "Nothing to do: pass --company, --search or --health, or run in a terminal"
        ));
    }

    Ok(())
}
