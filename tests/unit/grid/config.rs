use super::*;

#[test]
fn empty_object_yields_hero_defaults() {
    let cfg = GridConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, GridConfig::default());
    assert_eq!(cfg.dims(true), GridDims::new(9, 4));
    assert_eq!(cfg.dims(false), GridDims::new(3, 4));
    assert_eq!(cfg.tile_count, 10);
    assert_eq!(cfg.transform, TransformParams::GRID_ENTRANCE);
    assert_eq!(cfg.desktop_query(), MediaQuery::MinWidth(1024.0));
}

#[test]
fn partial_json_overrides_selected_fields() {
    let cfg = GridConfig::from_json_str(
        r#"{
            "images": ["/a.jpg", "/b.jpg"],
            "columns_desktop": 6,
            "spring": {"stiffness": 120, "damping": 14}
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.images.len(), 2);
    assert_eq!(cfg.dims(true), GridDims::new(6, 4));
    assert_eq!(cfg.spring.mass, 1.0);
    assert_eq!(cfg.spring.stiffness, 120.0);
}

#[test]
fn zero_dimensions_are_rejected() {
    let err = GridConfig::from_json_str(r#"{"rows_mobile": 0}"#).unwrap_err();
    assert!(err.to_string().contains("rows_mobile"));
}

#[test]
fn bad_spring_and_stagger_are_rejected() {
    let cfg = GridConfig {
        stagger_step_secs: -0.1,
        ..GridConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = GridConfig {
        spring: Spring {
            stiffness: 0.0,
            damping: 18.0,
            mass: 1.0,
        },
        ..GridConfig::default()
    };
    assert!(cfg.validate().unwrap_err().to_string().contains("spring"));
}

#[test]
fn unknown_fields_and_bad_json_are_serde_errors() {
    let err = GridConfig::from_json_str(r#"{"colums_desktop": 4}"#).unwrap_err();
    assert!(matches!(err, GridError::Serde(_)));
    let err = GridConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, GridError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = GridConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn oversized_grids_are_rejected() {
    let cfg = GridConfig {
        columns_mobile: 65536,
        rows_mobile: 65536,
        ..GridConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, GridError::Validation(_)));
    assert!(err.to_string().contains("mobile grid 65536x65536"));

    let at_limit = GridConfig {
        columns_desktop: 64,
        rows_desktop: 64,
        ..GridConfig::default()
    };
    assert_eq!(at_limit.dims(true).total_cells(), GridConfig::MAX_CELLS);
    assert!(at_limit.validate().is_ok());
}
