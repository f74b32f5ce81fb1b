use crate::cli::{AtlasArgs, OutputFormat};
use crate::collection::{assemble_files, AssembleOptions, Assembly};
use crate::core::config::GenomeUrlTable;
use crate::core::region::Region;

/// Execute the report subcommand.
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

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assembly)?);
        }
        OutputFormat::Text => {
            print_text(&assembly, &GenomeUrlTable::default());
        }
    }
    Ok(())
}

fn print_text(assembly: &Assembly, genome_urls: &GenomeUrlTable) {
    for region in assembly.regions.iter() {
        print_region(region, genome_urls);
    }

    if assembly.diagnostics.is_empty() {
        println!("No skipped inputs.");
    } else {
        println!("Skipped inputs: {}", assembly.diagnostics.len());
        for diagnostic in &assembly.diagnostics {
            println!("  - {diagnostic}");
        }
    }
}

fn print_region(region: &Region, genome_urls: &GenomeUrlTable) {
    println!("{} (id {})", region.display_name, region.id);
    if !region.species_difference.is_empty() {
        println!("  difference: {}", region.species_difference);
    }
    let aliases: Vec<String> = region
        .aliases
        .iter()
        .map(|a| match a {
            Some(id) => id.to_string(),
            None => "?".to_string(),
        })
        .collect();
    if !aliases.is_empty() {
        println!("  aliases: {}", aliases.join(", "));
    }
    if let Some(bracketed) = &region.bracketed_genes {
        println!("  bracketed genes: {bracketed}");
    }

    for (species, record) in &region.species_data {
        println!("  {species}: {}", record.genome_coords);
        if let Some(url) = genome_urls.url_for(species, &record.genome_coords) {
            println!("    browse: {url}");
        }
        if let Some(stage) = &record.stage {
            println!("    stage: {stage}");
        }
        for domain in &record.consistent_activity_domains {
            println!("    consistent: {} ({})", domain.name, domain.positive_count);
        }
        for domain in &record.suggestive_activity_domains {
            println!("    suggestive: {} ({})", domain.name, domain.positive_count);
        }
        if !record.expression.is_empty() {
            println!("    expression: {}", record.expression);
        }
        if !record.images.is_empty() {
            println!("    images: {}", record.images.len());
        }
    }
    println!();
}
