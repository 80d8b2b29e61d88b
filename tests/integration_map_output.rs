//! Integration tests for map rendering and exports
//!
//! These tests run the plot command against temporary ADIF files and check
//! the HTML map, CSV and GeoJSON written to disk.

use adimap::Error;
use adimap::cli::args::Args;
use adimap::cli::commands::shared::apply_cli_overrides;
use adimap::cli::commands::{PlotSummary, plot::run_plot};
use adimap::config::Config;
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LOG: &str = concat!(
    "Sample log\n<ADIF_VER:5>3.1.4<EOH>\n",
    "<CALL:5>K1ABC<QSO_DATE:8>20250101<TIME_ON:4>1234<BAND:3>20m<MODE:3>FT8<GRIDSQUARE:4>FN20<EOR>\n",
    "<CALL:6>DL1XYZ<QSO_DATE:8>20250102<TIME_ON:4>0815<BAND:3>40m<MODE:2>CW<LAT:7>48.500N<LON:8>011.000E<EOR>\n",
    "<CALL:4>W2CD<BAND:3>20m<MODE:3>SSB<EOR>\n",
);

fn write_log(dir: &TempDir, contents: &[u8]) -> String {
    let path = dir.path().join("log.adi");
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn run(dir: &TempDir, log: &[u8], extra: &[&str]) -> adimap::Result<PlotSummary> {
    let adi = write_log(dir, log);
    let out = dir.path().join("map.html");
    let out = out.to_str().unwrap();

    let mut argv = vec!["adimap", adi.as_str(), "--out", out];
    argv.extend_from_slice(extra);
    let args = Args::try_parse_from(argv).unwrap();

    let mut config = Config::default();
    apply_cli_overrides(&mut config, &args);
    run_plot(&args, &config)
}

#[test]
fn test_writes_map_and_reports_counts() {
    let dir = TempDir::new().unwrap();
    let summary = run(&dir, LOG.as_bytes(), &["--title", "Test Log"]).unwrap();

    assert_eq!(summary.plotted, 2);
    assert_eq!(summary.skipped, 1);
    assert!(summary.exports.is_empty());
    assert_eq!(
        summary.message(),
        format!(
            "Saved map with 2 QSOs to {}. Skipped 1 record(s) without coordinates.",
            dir.path().join("map.html").display()
        )
    );

    let html = fs::read_to_string(dir.path().join("map.html")).unwrap();
    assert!(html.contains("<title>Test Log</title>"));
    assert!(html.contains("K1ABC"));
    assert!(html.contains("DL1XYZ"));
    assert!(!html.contains("W2CD"));
    assert!(html.contains("<div><b>Total QSOs:</b> 2</div>"));
}

#[test]
fn test_exports() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("qsos.csv");
    let geojson_path = dir.path().join("qsos.geojson");

    let summary = run(
        &dir,
        LOG.as_bytes(),
        &[
            "--export-csv",
            csv_path.to_str().unwrap(),
            "--export-geojson",
            geojson_path.to_str().unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(summary.exports, vec![csv_path.clone(), geojson_path.clone()]);

    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("BAND,CALL,GRIDSQUARE,LAT,LON,MODE,QSO_DATE,TIME_ON")
    );
    assert_eq!(
        lines.next(),
        Some("20m,K1ABC,FN20,,,FT8,20250101,1234")
    );
    assert_eq!(lines.count(), 1);

    let geojson: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&geojson_path).unwrap()).unwrap();
    assert_eq!(geojson["type"], "FeatureCollection");
    assert_eq!(geojson["features"].as_array().unwrap().len(), 2);
    assert_eq!(
        geojson["features"][1]["geometry"]["coordinates"],
        serde_json::json!([11.0, 48.5])
    );
    assert_eq!(geojson["features"][1]["properties"]["CALL"], "DL1XYZ");
}

#[test]
fn test_nothing_plottable_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let result = run(&dir, b"<CALL:4>W2CD<EOR><CALL:4>K3EF<EOR>", &[]);

    assert!(matches!(
        result,
        Err(Error::NoPlottableRecords { total_records: 2 })
    ));
    assert!(!Path::new(&dir.path().join("map.html")).exists());
}

#[test]
fn test_home_only_map() {
    let dir = TempDir::new().unwrap();
    let summary = run(&dir, b"<CALL:4>W2CD<EOR>", &["--home-grid", "JN58"]).unwrap();

    assert_eq!(summary.plotted, 0);
    assert_eq!(summary.skipped, 1);

    let html = fs::read_to_string(dir.path().join("map.html")).unwrap();
    assert!(html.contains("\"home\":[48.5,11.0]"));
}

#[test]
fn test_invalid_home_grid() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir, LOG.as_bytes(), &["--home-grid", "XX"]).unwrap_err();

    assert!(matches!(err, Error::InvalidHome { .. }));
    assert!(err.to_string().contains("Could not parse home grid"));
}

#[test]
fn test_home_lat_lon_out_of_range() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir, LOG.as_bytes(), &["--home-lat", "95", "--home-lon", "0"]).unwrap_err();

    assert!(err.to_string().contains("Home lat/lon out of range"));
}

#[test]
fn test_latin1_log() {
    let dir = TempDir::new().unwrap();
    let mut log = b"<CALL:5>F1ABC<QTH:8>Besan".to_vec();
    log.push(0xE7);
    log.extend_from_slice(b"on<GRIDSQUARE:4>JN27<EOR>");
    let csv_path = dir.path().join("qsos.csv");

    run(&dir, &log, &["--export-csv", csv_path.to_str().unwrap()]).unwrap();

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("Besançon"));
}

#[test]
fn test_band_layers_in_output() {
    let dir = TempDir::new().unwrap();
    run(&dir, LOG.as_bytes(), &["--layers-by-band", "--heatmap-by-band"]).unwrap();

    let html = fs::read_to_string(dir.path().join("map.html")).unwrap();
    assert!(html.contains("\"name\":\"Band: 20M\""));
    assert!(html.contains("\"name\":\"Heatmap: 40M\""));
    assert!(html.contains("<b>Modes</b>"));
}
