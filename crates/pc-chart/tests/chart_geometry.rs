use pc_chart::*;
use pc_project::{ChartConfig, IsoSetDef, IsolineKind, from_yaml_str, load_yaml};
use pc_psychro::saturation_humidity_ratio;
use std::path::Path;

fn every_family() -> ChartConfig {
    ChartConfig {
        isos: vec![
            IsoSetDef::new(IsolineKind::RelativeHumidity, vec![0.1, 0.5, 0.9, 1.0]),
            IsoSetDef::new(IsolineKind::WetBulb, vec![5.0, 15.0, 25.0, 35.0]),
            IsoSetDef::new(IsolineKind::Enthalpy, vec![10.0, 50.0, 90.0, 130.0]),
            IsoSetDef::new(IsolineKind::SpecificVolume, vec![0.78, 0.84, 0.90, 0.95]),
            IsoSetDef::new(IsolineKind::MoistureQuantity, vec![0.005, 0.02, 0.05]),
            IsoSetDef::new(IsolineKind::DewPoint, vec![0.0, 10.0, 30.0]),
        ],
        ..ChartConfig::default()
    }
}

#[test]
fn isolines_stay_at_or_below_saturation() {
    let config = every_family();
    let geometry = build_chart(&config).unwrap();
    let p = config.chart.pressure;

    assert!(!geometry.isolines.is_empty());
    for iso in &geometry.isolines {
        for &[t, w] in &iso.curve.points {
            let w_sat = saturation_humidity_ratio(t, p);
            assert!(
                w <= w_sat,
                "{} {} at T={t}: W={w} above saturation {w_sat}",
                iso.family,
                iso.value
            );
            assert!(w >= 0.0 && w.is_finite());
        }
    }
}

#[test]
fn every_family_is_drawn() {
    let geometry = build_chart(&every_family()).unwrap();
    for kind in IsolineKind::ALL {
        assert!(geometry.family(kind).count() > 0, "no {kind} isolines");
    }
}

#[test]
fn percent_humidity_labels_have_no_float_noise() {
    let config = from_yaml_str(
        "isos:\n  - name: relative_humidity\n    values: [55, 57, 7]\n",
    )
    .unwrap();
    let geometry = build_chart(&config).unwrap();
    let labels: Vec<&str> = geometry
        .family(IsolineKind::RelativeHumidity)
        .map(|iso| iso.curve.label.as_str())
        .collect();
    assert_eq!(labels, ["55 % RH", "57 % RH", "7 % RH"]);
}

#[test]
fn zones_are_closed() {
    let config = from_yaml_str(
        r#"
zones:
  - name: box
    t_range: [18, 24]
    rh_range: [30, 70]
  - name: curved
    t_range: [20, 28]
    rh_range: [40, 60]
    follow_rh: true
  - name: wedge
    vertices: [[20, 40], [30, 40], [30, 60]]
"#,
    )
    .unwrap();
    let geometry = build_chart(&config).unwrap();
    assert_eq!(geometry.zones.len(), 3);
    for zone in &geometry.zones {
        assert!(zone.is_closed(), "zone {} not closed", zone.name);
    }
}

#[test]
fn demo_config_builds_and_round_trips() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/comfort.yaml");
    let config = load_yaml(&path).unwrap();
    let geometry = build_chart(&config).unwrap();

    assert_eq!(geometry.title, "Barn climate");
    assert_eq!(geometry.family(IsolineKind::DewPoint).count(), 0);
    assert_eq!(geometry.points.len(), 2);
    assert!(geometry.points[1].hli.is_some());

    let out = std::env::temp_dir().join("pc_chart_roundtrip").join("chart.json");
    save_geometry(&out, &geometry).unwrap();
    let loaded = load_geometry(&out).unwrap();
    assert_eq!(geometry.summary(), loaded.summary());
    for (a, b) in geometry.isolines.iter().zip(&loaded.isolines) {
        assert_eq!(a.curve.label, b.curve.label);
        assert_eq!(a.curve.points.len(), b.curve.points.len());
        for (pa, pb) in a.curve.points.iter().zip(&b.curve.points) {
            assert!((pa[0] - pb[0]).abs() <= 1e-12 && (pa[1] - pb[1]).abs() <= 1e-12);
        }
    }
    assert_eq!(geometry.zones.len(), loaded.zones.len());
    assert_eq!(geometry.points[0].label, loaded.points[0].label);
}

#[test]
fn boiling_chart_needs_explicit_axis() {
    let mut config = ChartConfig::default();
    config.chart.t_max = 120.0;
    assert!(matches!(build_chart(&config), Err(ChartError::Psychro(_))));

    config.chart.y_max = Some(0.2);
    let geometry = build_chart(&config).unwrap();
    // Samples past the boiling point are dropped from the saturation curve.
    assert!(geometry.saturation.points.len() < config.chart.samples);
}

fn demo_geometry(dpi: u32) -> ChartGeometry {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/comfort.yaml");
    let mut config = load_yaml(&path).unwrap();
    config.chart.dpi = dpi;
    build_chart(&config).unwrap()
}

#[test]
fn png_output_is_sized_by_dpi() {
    let geometry = demo_geometry(40);
    let out = std::env::temp_dir().join("pc_chart_render").join("demo.png");
    save_chart(&out, &geometry).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((width, height), (480, 280));
    assert_eq!((width, height), render::figure_size(40));
}

#[test]
fn svg_output_carries_labels() {
    let mut geometry = demo_geometry(72);
    geometry.style = Some("ggplot".to_string());
    let out = std::env::temp_dir().join("pc_chart_render").join("demo.svg");
    save_chart(&out, &geometry).unwrap();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Barn climate"));
    assert!(svg.contains("Dry-bulb temperature"));
    assert!(svg.contains("Comfort"));
    assert!(svg.contains("Morning"));
}

#[test]
fn json_extension_keeps_geometry() {
    let geometry = demo_geometry(150);
    let out = std::env::temp_dir().join("pc_chart_render").join("demo.json");
    save_chart(&out, &geometry).unwrap();
    assert_eq!(load_geometry(&out).unwrap().summary(), geometry.summary());
}
