use housing_stats::core::classifier::classify_houses;
use housing_stats::core::aggregator::count_categories;
use housing_stats::core::loader::load_houses;
use housing_stats::{
    Category, CategoryThresholds, EtlEngine, EtlError, HousingPipeline, LocalStorage,
    OutputFormat, StaticConfig, TomlConfig,
};
use std::fs;
use tempfile::TempDir;

const HEADER: &str =
    "area_id,house_address,floor_count,heating_house_type,heating_value,area_residential,population\n";

fn write_input(dir: &TempDir, name: &str, rows: &[&str]) {
    let mut content = HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.path().join(name), content).unwrap();
}

fn run_with(dir: &TempDir, config: StaticConfig) -> housing_stats::Result<String> {
    let storage = LocalStorage::new(dir.path());
    let pipeline = HousingPipeline::new(storage, config);
    EtlEngine::new(pipeline).run()
}

#[test]
fn test_end_to_end_text_report() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "housing_data.csv",
        &[
            "1,Lenina 1,3,central,100.0,240.0,12",
            "2,Mira 7,9,individual,80.0,900.0,60",
            "3,Sadovaya 15,22,central,300.0,4000.0,150",
            "4,Lesnaya 2,4,central,90.0,150.0,15",
        ],
    );

    let report = run_with(&temp_dir, StaticConfig::default()).unwrap();

    let expected = "Number of houses in each category:\n \
                    Category: Low-rise. Count: 2.\n \
                    Category: Mid-rise. Count: 1.\n \
                    Category: High-rise. Count: 1.\n\
                    \n\
                    The house with the minimum average residential area per resident is located at:\n \
                    Lesnaya 2\n";
    assert_eq!(report, expected);
}

#[test]
fn test_one_house_per_category_counts_one_each() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "housing_data.csv",
        &[
            "1,Low 1,2,central,1.0,100.0,5",
            "2,Mid 1,12,central,1.0,100.0,5",
            "3,High 1,30,central,1.0,100.0,5",
        ],
    );

    let storage = LocalStorage::new(temp_dir.path());
    let houses = load_houses(&storage, "housing_data.csv").unwrap();
    let counts = count_categories(classify_houses(&houses, &CategoryThresholds::default()).unwrap());

    assert_eq!(counts.len(), 3);
    assert!(counts.values().all(|&count| count == 1));
    assert_eq!(counts[&Category::HighRise], 1);
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "district.csv",
        &["1,A,5,central,1.0,50.0,10", "2,B,17,central,1.0,20.0,10"],
    );

    let config = StaticConfig {
        input_file: "district.csv".to_string(),
        output_format: OutputFormat::Json,
        ..StaticConfig::default()
    };
    let report = run_with(&temp_dir, config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(value["total_records"], 2);
    assert_eq!(value["category_counts"]["Low-rise"], 1);
    assert_eq!(value["category_counts"]["High-rise"], 1);
    assert_eq!(value["min_area_per_resident"]["house_address"], "B");
    assert_eq!(value["min_area_per_resident"]["area_per_resident"], 2.0);
}

#[test]
fn test_toml_thresholds_change_classification() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "houses.csv",
        &["1,A,4,central,1.0,50.0,10", "2,B,12,central,1.0,20.0,10"],
    );
    let config_path = temp_dir.path().join("housing.toml");
    fs::write(
        &config_path,
        r#"
[source]
input_file = "houses.csv"

[classification]
max_low_rise_floors = 3
min_mid_rise_floors = 4
max_mid_rise_floors = 9
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path)
        .unwrap()
        .with_fallbacks("housing_data.csv", OutputFormat::Text);
    let storage = LocalStorage::new(temp_dir.path());
    let report = EtlEngine::new(HousingPipeline::new(storage, config))
        .run()
        .unwrap();

    assert!(report.contains("Category: Mid-rise. Count: 1."));
    assert!(report.contains("Category: High-rise. Count: 1."));
    assert!(!report.contains("Low-rise"));
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = run_with(&temp_dir, StaticConfig::default());
    assert!(matches!(result, Err(EtlError::IoError(_))));
}

#[test]
fn test_malformed_row_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "housing_data.csv",
        &["1,A,5,central,1.0,50.0,10", "2,B,seven,central,1.0,20.0,10"],
    );

    match run_with(&temp_dir, StaticConfig::default()) {
        Err(EtlError::ParseError { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("floor_count"));
        }
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_non_positive_floor_count_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "housing_data.csv",
        &["1,A,5,central,1.0,50.0,10", "2,B,-3,central,1.0,20.0,10"],
    );

    assert!(matches!(
        run_with(&temp_dir, StaticConfig::default()),
        Err(EtlError::InvalidFloorCount { floor_count: -3 })
    ));
}

#[test]
fn test_zero_population_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "housing_data.csv",
        &["1,A,5,central,1.0,50.0,10", "2,Vacant,7,central,1.0,20.0,0"],
    );

    match run_with(&temp_dir, StaticConfig::default()) {
        Err(EtlError::DivisionByZero { address }) => assert_eq!(address, "Vacant"),
        other => panic!("expected DivisionByZero, got {:?}", other),
    }
}

#[test]
fn test_header_only_file_is_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, "housing_data.csv", &[]);

    let result = run_with(&temp_dir, StaticConfig::default());
    assert!(matches!(result, Err(EtlError::EmptyInput)));
}
