//! End-to-end assembly tests over real files on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use har_atlas::collection::{assemble_files, assemble_text, AssembleOptions};
use har_atlas::core::config::SpeciesCodeTable;
use har_atlas::{RegionId, SkipReason};

const EXTENDED_CSV: &str = "\
ID,Aliases,Human-Chimp Difference,Species,Coordinates (hg19 or panTro4),Consistent Activity Domains (# pos),Suggestive Activity Domains (# pos),Expression,Stage,Genes within 1 Mb (distance to TSS)
2xHAR.123,HAR4; ANC99,13 substitutions,Human,chr2:100-200,Forebrain (3); Limb (12),none,weak,E11.5,\"GENEA (-500000), GENEB (-20000), GENEC (15000)\"
HAR123,,13 substitutions,Chimp,chr2a:90-190,none,Heart (4),none,E11.5,None
HAR.5,,2 substitutions,Human,chr9:1-50,none,none,strong,E11.5,\"GENEA (100), GENEB (200)\"
garbled-id,,,Human,chr1:1-2,none,none,,,
";

#[test]
fn test_full_ingestion_reconciles_rows_and_images() {
    let paths = vec![
        PathBuf::from("123_hg01_004L.tif"),
        PathBuf::from("123_pt02_001L.tif"),
        PathBuf::from("999_hg01_004L.tif"), // unknown region
        PathBuf::from("123_xx01_004L.tif"), // unknown species code
        PathBuf::from("thumbs.db"),         // silently unmatched
    ];
    let assembly = assemble_text(EXTENDED_CSV, &paths, &AssembleOptions::default()).unwrap();

    // Two labels normalize to region 123, one to region 5, one is skipped
    assert_eq!(assembly.regions.len(), 2);

    let region = assembly.regions.get(RegionId(123)).unwrap();
    assert_eq!(region.display_name, "2xHAR.123");
    assert_eq!(region.species_data.len(), 2);
    assert_eq!(
        region.resolved_aliases().collect::<Vec<_>>(),
        vec![RegionId(4)]
    );
    assert_eq!(region.aliases.len(), 2); // ANC99 kept as a placeholder

    // Closest upstream = max negative, closest downstream = min positive
    let bracketed = region.bracketed_genes.as_ref().unwrap();
    assert_eq!(bracketed.upstream, "GENEB");
    assert_eq!(bracketed.downstream, "GENEC");

    let human = &region.species_data["human"];
    assert_eq!(human.stage.as_deref(), Some("E11.5"));
    assert_eq!(human.consistent_activity_domains.len(), 2);
    assert_eq!(human.images[&4], PathBuf::from("123_hg01_004L.tif"));
    let chimp = &region.species_data["chimp"];
    assert_eq!(chimp.images[&1], PathBuf::from("123_pt02_001L.tif"));

    // Region 5 has only downstream genes: unbracketed, one diagnostic
    let five = assembly.regions.get(RegionId(5)).unwrap();
    assert!(five.bracketed_genes.is_none());

    let reasons: Vec<SkipReason> = assembly.diagnostics.iter().map(|d| d.reason).collect();
    assert_eq!(
        reasons,
        vec![
            SkipReason::NoUpstreamGene,
            SkipReason::UnrecognizedIdentifier,
            SkipReason::UnknownRegionReference,
            SkipReason::UnknownSpeciesCode,
        ]
    );
    assert_eq!(assembly.diagnostics[0].raw, "HAR.5");
    assert_eq!(assembly.diagnostics[1].raw, "garbled-id");
}

#[test]
fn test_last_write_wins_follows_supplied_order() {
    let csv = "\
ID,Aliases,Human-Chimp Difference,Species,Coordinates (hg19 or panTro4),Consistent Activity Domains (# pos),Suggestive Activity Domains (# pos),Expression
HAR.5,,,Human,chr9:1-50,none,none,
";
    let forward = vec![
        PathBuf::from("a/5_hg01_002L.tif"),
        PathBuf::from("b/5_hg01_002L.tif"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let options = AssembleOptions::default();
    let first = assemble_text(csv, &forward, &options).unwrap();
    let second = assemble_text(csv, &reversed, &options).unwrap();

    let images =
        |assembly: &har_atlas::Assembly| -> BTreeMap<u32, PathBuf> {
            assembly.regions.get(RegionId(5)).unwrap().species_data["human"]
                .images
                .clone()
        };

    assert_eq!(images(&first)[&2], PathBuf::from("b/5_hg01_002L.tif"));
    assert_eq!(images(&second)[&2], PathBuf::from("a/5_hg01_002L.tif"));
}

#[test]
fn test_assemble_files_walks_directory_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("annotations.csv");
    fs::write(
        &csv_path,
        "ID,Aliases,Human-Chimp Difference,Species,Coordinates (hg19 or panTro4),Consistent Activity Domains (# pos),Suggestive Activity Domains (# pos),Expression\n\
         HAR.7,,,Human,chr3:10-20,none,none,\n",
    )
    .unwrap();

    // Same (region, species, sequence) in two directories; the
    // lexicographically later path must win regardless of creation order
    let img_dir = dir.path().join("scans");
    fs::create_dir_all(img_dir.join("late")).unwrap();
    fs::create_dir_all(img_dir.join("early")).unwrap();
    fs::write(img_dir.join("late/7_hg01_001L.tif"), b"").unwrap();
    fs::write(img_dir.join("early/7_hg01_001L.tif"), b"").unwrap();

    let assembly = assemble_files(&csv_path, &img_dir, &AssembleOptions::default()).unwrap();
    let region = assembly.regions.get(RegionId(7)).unwrap();
    assert_eq!(
        region.species_data["human"].images[&1],
        img_dir.join("late/7_hg01_001L.tif")
    );
}

#[test]
fn test_custom_species_table_is_honored() {
    let csv = "\
ID,Aliases,Human-Chimp Difference,Species,Coordinates (hg19 or panTro4),Consistent Activity Domains (# pos),Suggestive Activity Domains (# pos),Expression
HAR.8,,,Mouse,chr5:1-2,none,none,
";
    let mut codes = BTreeMap::new();
    codes.insert("mm".to_string(), "mouse".to_string());
    let options = AssembleOptions {
        species_codes: SpeciesCodeTable::new(codes),
        report_unmatched: false,
    };

    let paths = vec![
        PathBuf::from("8_mm01_003L.tif"),
        PathBuf::from("8_hg01_003L.tif"), // default table replaced, hg now unknown
    ];
    let assembly = assemble_text(csv, &paths, &options).unwrap();

    let region = assembly.regions.get(RegionId(8)).unwrap();
    assert!(region.species_data["mouse"].images.contains_key(&3));
    assert_eq!(assembly.diagnostics.len(), 1);
    assert_eq!(assembly.diagnostics[0].reason, SkipReason::UnknownSpeciesCode);
}

#[test]
fn test_headerless_table_is_a_hard_failure() {
    use har_atlas::collection::AssembleError;

    let result = assemble_text("Foo,Bar\n1,2\n3,4\n", &[], &AssembleOptions::default());
    match result {
        Err(AssembleError::InvalidTable(err)) => {
            assert!(err.to_string().contains("missing required column"));
        }
        other => panic!("expected InvalidTable, got {other:?}"),
    }
}

#[test]
fn test_collection_usable_after_error_laden_run() {
    // Every row and image rejected: empty but usable collection
    let csv = "\
ID,Aliases,Human-Chimp Difference,Species,Coordinates (hg19 or panTro4),Consistent Activity Domains (# pos),Suggestive Activity Domains (# pos),Expression
not-a-har,,,Human,chr1:1-2,none,none,
";
    let paths = vec![PathBuf::from("999_hg01_001L.tif")];
    let assembly = assemble_text(csv, &paths, &AssembleOptions::default()).unwrap();

    assert!(assembly.regions.is_empty());
    assert_eq!(assembly.diagnostics.len(), 2);
}

#[test]
fn test_json_round_trip_of_assembly() {
    let paths = vec![PathBuf::from("123_hg01_004L.tif")];
    let assembly = assemble_text(EXTENDED_CSV, &paths, &AssembleOptions::default()).unwrap();

    let json = serde_json::to_string(&assembly).unwrap();
    let back: har_atlas::Assembly = serde_json::from_str(&json).unwrap();
    assert_eq!(back.regions, assembly.regions);
    assert_eq!(back.diagnostics, assembly.diagnostics);
}
