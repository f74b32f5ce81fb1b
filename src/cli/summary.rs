use crate::cli::{AtlasArgs, OutputFormat};
use crate::collection::{assemble_files, AssembleOptions};

/// Execute the summary subcommand: one line per (region, species) pair,
/// followed by its attached images sorted by sequence number.
///
/// # Errors
///
/// Returns an error if the annotation table or image directory cannot be
/// read.
pub fn run(args: &AtlasArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = AssembleOptions {
        report_unmatched: verbose,
        ..AssembleOptions::default()
    };
    let assembly = assemble_files(&args.har_csv, &args.img_dir, &options)?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&assembly.regions)?);
        return Ok(());
    }

    for region in assembly.regions.iter() {
        for (species, record) in &region.species_data {
            println!("{} {species}", region.id);
            for (num, path) in &record.images {
                println!("  {num:2}: {}", path.display());
            }
        }
    }

    if verbose {
        for diagnostic in &assembly.diagnostics {
            eprintln!("{diagnostic}");
        }
    }
    Ok(())
}
