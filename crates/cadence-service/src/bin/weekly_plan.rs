use cadence_core::config::{ReportLabels, load_config};
use cadence_service::plan::{build_weekly_plan, render_weekly_report};
use cadence_store::catalog::FileCatalogStore;
use tracing_subscriber::EnvFilter;

async fn run(path: &str, week: Option<&str>, labels: &ReportLabels) -> anyhow::Result<String> {
    let catalog = FileCatalogStore::new(path).load_existing().await?;
    let plan = build_weekly_plan(&catalog.definitions, week)?;

    for issue in plan.issues() {
        eprintln!("warning: {} ({}): {}", issue.name, issue.definition_id, issue.issue);
    }

    Ok(render_weekly_report(&plan, labels))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: weekly_plan <catalog.json> [YYYY-[W]ww]");
        std::process::exit(2);
    };
    let week = args.next();

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    match run(&path, week.as_deref(), &settings.report).await {
        Ok(report) => {
            print!("{report}");
        }
        Err(err) => {
            eprintln!("Failed to build weekly plan: {err}");
            std::process::exit(1);
        }
    }
}
