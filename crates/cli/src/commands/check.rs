use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::*;
use keisho_checkers::{
    AnalysisContext, CheckEngine, CheckReport, CheckerRegistryBuilder, GraphBuilder, ProjectInfo,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckGapArgs {
    /// Contract records: a JSON file or a directory of JSON files
    #[arg(short, long)]
    pub project: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

pub fn execute(args: CheckGapArgs) -> Result<()> {
    let records = super::load_contract_records(&args.project)?;

    if args.verbose {
        println!("Loaded {} contract record(s)", records.len());
    }

    let graph = GraphBuilder::new().add_records(records).build()?;
    let mut context = AnalysisContext::new(graph);
    context.set_project_info(ProjectInfo {
        name: args
            .project
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("project")
            .to_string(),
        path: Some(args.project.to_string_lossy().to_string()),
    });

    if args.verbose && context.classification().upgradeable.is_empty() {
        println!("No upgradeable base contracts in project");
    }

    let registry = CheckerRegistryBuilder::new().with_defaults().build();
    let engine = CheckEngine::new().with_checkers(registry.enabled());
    let report = engine.run(&context)?;

    output_report(&report, args.format, args.verbose)?;

    // Violations drive the exit code so CI gates can consume the tool.
    if !report.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn output_report(report: &CheckReport, format: OutputFormat, verbose: bool) -> Result<()> {
    match format {
        OutputFormat::Console => {
            if report.is_empty() {
                println!("{}", "No violations found".green());
            } else {
                println!(
                    "{}",
                    "[!] Missing gap on upgradeable contracts:".yellow().bold()
                );
                for finding in report.findings() {
                    let contract = finding.contract.as_deref().unwrap_or("<unknown>");
                    let bases = finding.responsible_bases().join(", ");
                    println!(" - {} ({})", contract, bases);

                    if verbose {
                        println!("   {} {}", finding.severity.emoji(), finding.title);
                        println!("   {}", finding.description);
                        if let Some(ref path) = finding.source_path {
                            println!("   Source: {}", path);
                        }
                    }
                }
            }
            println!("{}", "[+] Done".green());
        }
        OutputFormat::Json => {
            println!("{}", report.to_json()?);
        }
        OutputFormat::Markdown => {
            println!("{}", report.to_markdown());
        }
    }
    Ok(())
}
