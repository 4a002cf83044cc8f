use crate::infra::{advisor_service, parse_data_type};
use clap::Args;
use crypto_selector::advisor::{
    AdvisorService, ComparisonSet, ExploreFilters, KindFilter, RecommendationReport,
    RequirementsProfile, SortOrder,
};
use crypto_selector::catalog::{AlgorithmKey, Catalog, DataType, StandardKey, UseCaseKey};
use crypto_selector::config::AppConfig;
use crypto_selector::error::AppError;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Load catalog documents from this directory instead of the embedded catalog
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RequirementArgs {
    /// Kind of data to protect (text, image, video, audio, binary, keys)
    #[arg(long, value_parser = parse_data_type)]
    pub(crate) data_type: Option<DataType>,
    /// Security priority from 1 (basic) to 10 (maximum)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub(crate) security: Option<u8>,
    /// Performance priority from 1 (relaxed) to 10 (critical)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub(crate) performance: Option<u8>,
    /// Use-case preset (e.g. payment-processing); its priorities replace the sliders
    #[arg(long)]
    pub(crate) use_case: Option<String>,
    /// Required compliance standard; repeat for several
    #[arg(long)]
    pub(crate) compliance: Vec<String>,
    /// Penalize algorithms that are not quantum resistant
    #[arg(long)]
    pub(crate) quantum: bool,
}

impl RequirementArgs {
    /// Sliders are applied before the use case so a preset always wins.
    pub(crate) fn profile(&self, catalog: &Catalog) -> RequirementsProfile {
        let mut profile = RequirementsProfile::default();
        profile.set_data_type(self.data_type);
        if let Some(security) = self.security {
            profile.set_security_priority(security);
        }
        if let Some(performance) = self.performance {
            profile.set_performance_priority(performance);
        }
        if let Some(use_case) = &self.use_case {
            profile.select_use_case(Some(UseCaseKey::new(use_case.as_str())), catalog);
        }
        for standard in &self.compliance {
            profile.set_compliance(StandardKey::new(standard.as_str()), true);
        }
        profile.set_quantum_concern(self.quantum);
        profile
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    #[command(flatten)]
    pub(crate) requirements: RequirementArgs,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Algorithm key, e.g. AES or ChaCha20
    pub(crate) key: String,
    #[command(flatten)]
    pub(crate) requirements: RequirementArgs,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ExploreArgs {
    /// Case-insensitive match against algorithm keys and names
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// all, symmetric, or asymmetric
    #[arg(long = "type", default_value = "all")]
    pub(crate) kind: KindFilter,
    /// name-asc, name-desc, security-desc, or performance-desc
    #[arg(long, default_value = "name-asc")]
    pub(crate) sort: SortOrder,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Algorithm keys; only the first four distinct keys are compared
    #[arg(required = true, num_args = 1..)]
    pub(crate) keys: Vec<String>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Load catalog documents from this directory instead of the embedded catalog
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
}

fn load_service(catalog_dir: Option<&Path>) -> Result<AdvisorService, AppError> {
    let config = AppConfig::load()?;
    Ok(advisor_service(&config.advisor, catalog_dir)?)
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = load_service(args.output.catalog_dir.as_deref())?;
    let profile = args.requirements.profile(service.catalog());
    let report = service.recommend(&profile)?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_profile(&profile);
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = load_service(args.output.catalog_dir.as_deref())?;
    let profile = args.requirements.profile(service.catalog());
    let key = AlgorithmKey::new(args.key);

    let Some(assessment) = service.assess(&key, &profile)? else {
        println!("Unknown algorithm '{key}'. Run `crypto-selector explore` to list the catalog.");
        return Ok(());
    };

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    render_profile(&profile);
    println!("\n{key}: score {}", assessment.card.score);
    for component in &assessment.card.components {
        println!(
            "- {:?}: {:+.1} ({})",
            component.factor, component.points, component.notes
        );
    }
    if let Some(disqualification) = &assessment.card.disqualification {
        println!("Disqualified: {}", disqualification.summary());
    }
    println!("Reasoning: {}", assessment.reasoning);
    Ok(())
}

pub(crate) fn run_explore(args: ExploreArgs) -> Result<(), AppError> {
    let service = load_service(args.output.catalog_dir.as_deref())?;
    let filters = ExploreFilters {
        search: args.search,
        kind: args.kind,
        sort: args.sort,
    };
    let summaries = service.explore(&filters);

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No algorithms match the current filters");
        return Ok(());
    }

    println!("Algorithm catalog ({} shown)", summaries.len());
    for summary in &summaries {
        let marker = if summary.deprecated {
            " [deprecated]"
        } else {
            ""
        };
        println!(
            "- {} ({}), {} | security {}/10 | performance {}/10 | introduced {}{}",
            summary.key,
            summary.name,
            summary.kind.label(),
            summary.security_level,
            summary.performance_score,
            summary.year_introduced,
            marker
        );
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let service = load_service(args.output.catalog_dir.as_deref())?;
    let requested = args.keys.len();
    let set = ComparisonSet::from_keys(args.keys.into_iter().map(AlgorithmKey::new));
    let table = service.compare(&set);

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if requested > set.len() {
        println!(
            "Comparing {} of {} requested algorithms (duplicates dropped, at most 4)",
            set.len(),
            requested
        );
    }

    let header: Vec<&str> = table.algorithms.iter().map(AlgorithmKey::as_str).collect();
    println!("{:<20} | {}", "Property", header.join(" | "));
    for row in &table.rows {
        println!("{:<20} | {}", row.label, row.values.join(" | "));
    }

    for highlight in &table.highlights {
        println!("\n{}", highlight.algorithm);
        for strength in &highlight.strengths {
            println!("  + {strength}");
        }
        for weakness in &highlight.weaknesses {
            println!("  - {weakness}");
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = load_service(args.catalog_dir.as_deref())?;

    println!("Crypto selector demo");
    let scenarios = [
        (
            "Card payments under PCI-DSS",
            RequirementArgs {
                data_type: Some(DataType::Text),
                use_case: Some("payment-processing".to_string()),
                compliance: vec!["PCI-DSS".to_string()],
                ..RequirementArgs::default()
            },
        ),
        (
            "Battery-powered sensors",
            RequirementArgs {
                data_type: Some(DataType::Binary),
                use_case: Some("iot-devices".to_string()),
                ..RequirementArgs::default()
            },
        ),
        (
            "Quantum-safe key exchange",
            RequirementArgs {
                data_type: Some(DataType::Keys),
                use_case: Some("key-exchange".to_string()),
                compliance: vec!["NIST-PQC".to_string()],
                quantum: true,
                ..RequirementArgs::default()
            },
        ),
    ];

    let mut finalists = ComparisonSet::new();
    for (title, requirements) in &scenarios {
        println!("\n== {title} ==");
        let profile = requirements.profile(service.catalog());
        render_profile(&profile);
        let report = service.recommend(&profile)?;
        render_report(&report);
        if let Some(best) = report.recommendations.first() {
            finalists.add(best.key.clone());
        }
    }

    if finalists.len() > 1 {
        let table = service.compare(&finalists);
        println!("\n== Best matches side by side ==");
        for row in &table.rows {
            println!("{:<20} | {}", row.label, row.values.join(" | "));
        }
    }

    Ok(())
}

fn render_profile(profile: &RequirementsProfile) {
    let data_type = profile
        .data_type
        .map(|data_type| format!("{data_type} ({})", data_type.examples()))
        .unwrap_or_else(|| "any".to_string());
    let use_case = profile
        .use_case
        .as_ref()
        .map(UseCaseKey::spaced)
        .unwrap_or_else(|| "none".to_string());
    let compliance: Vec<&str> = profile.compliance.iter().map(StandardKey::as_str).collect();

    println!("Data type: {data_type}");
    println!(
        "Security priority {}/10 | Performance priority {}/10 | Use case: {}",
        profile.security_priority, profile.performance_priority, use_case
    );
    println!(
        "Compliance: {} | Quantum concern: {}",
        if compliance.is_empty() {
            "none".to_string()
        } else {
            compliance.join(", ")
        },
        if profile.quantum_concern { "yes" } else { "no" }
    );
}

fn render_report(report: &RecommendationReport) {
    if report.no_strong_match {
        println!("\nNo algorithm matched strongly enough. Try relaxing the requirements.");
        return;
    }

    println!("\nRecommendations");
    for (rank, view) in report.recommendations.iter().enumerate() {
        let badge = if view.best_match { " (best match)" } else { "" };
        println!(
            "{}. {} - {} [{}] {}% match{}",
            rank + 1,
            view.key,
            view.name,
            view.kind.label(),
            view.display_score,
            badge
        );
        println!("   {}", view.reasoning);
        for strength in &view.strengths {
            println!("   + {strength}");
        }
        for weakness in &view.weaknesses {
            println!("   - {weakness}");
        }
    }
}
