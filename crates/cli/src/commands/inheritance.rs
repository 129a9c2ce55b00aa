use anyhow::Result;
use clap::Args;
use colored::*;
use keisho_checkers::{find_paths, GraphBuilder};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InheritanceArgs {
    /// Contract records: a JSON file or a directory of JSON files
    #[arg(short, long)]
    pub project: PathBuf,

    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[arg(value_name = "DESTINATION")]
    pub destination: String,
}

pub fn execute(args: InheritanceArgs) -> Result<()> {
    let records = super::load_contract_records(&args.project)?;
    let graph = GraphBuilder::new().add_records(records).build()?;

    match find_paths(&graph, &args.source, &args.destination) {
        Ok(paths) => {
            if paths.is_empty() {
                println!(
                    "No inheritance chain from '{}' to '{}'",
                    args.source, args.destination
                );
            } else {
                println!(
                    "{}",
                    format!("Found {} inheritance chain(s):", paths.len())
                        .bright_blue()
                        .bold()
                );
                for path in &paths {
                    println!("{}\n", path.render(&graph));
                }
            }
        }
        // Reported, not fatal: an empty enumeration with the missing
        // names named, so a typo is distinguishable from absence.
        Err(e) => println!("{} {}", "[x]".red(), e),
    }

    println!("{}", "[+] Done".green());
    Ok(())
}
