use kerfkit::{init_logging, load_material_library, run_job, JobConfig, BUILD_DATE, VERSION};
use std::path::{Path, PathBuf};

fn usage() {
    eprintln!("kerfkit {} ({})", VERSION, BUILD_DATE);
    eprintln!("Usage: kerfkit <job-file> [output-dir]");
    eprintln!("  job-file    .json or .toml job description");
    eprintln!("  output-dir  overrides output.directory from the job file");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 || args[1] == "-h" || args[1] == "--help" {
        usage();
        std::process::exit(2);
    }

    init_logging()?;

    let mut config = JobConfig::load_with_materials(Path::new(&args[1]), &load_material_library())?;
    if let Some(dir) = args.get(2) {
        config.output.directory = PathBuf::from(dir);
    }

    let outcome = run_job(&config)?;
    println!("{}", outcome.report);

    for warning in outcome.parameters.warnings() {
        println!("Warning: {warning}");
    }

    println!();
    println!("Exported files:");
    for (format, path) in &outcome.files {
        println!("  {format}: {}", path.display());
    }

    Ok(())
}
