use pdf_compose::*;

#[test]
fn test_form_fields_defaults() {
    let options = LayoutOptions::from_form_fields(None, None, None).unwrap();
    assert_eq!(options, LayoutOptions::default());
    assert_eq!(options.mode, LayoutMode::Single);
    assert_eq!(options.border_width, 3);
    assert_eq!(options.border_color, BorderColor::Black);
    assert_eq!(options.paper_size, PaperSize::A4);
}

#[test]
fn test_form_fields_empty_strings_are_unset() {
    let options = LayoutOptions::from_form_fields(Some(""), Some("  "), Some("")).unwrap();
    assert_eq!(options, LayoutOptions::default());
}

#[test]
fn test_form_fields_parsed() {
    let options =
        LayoutOptions::from_form_fields(Some("Double"), Some("12"), Some("GRAY")).unwrap();
    assert_eq!(options.mode, LayoutMode::Double);
    assert_eq!(options.border_width, 12);
    assert_eq!(options.border_color, BorderColor::Gray);
}

#[test]
fn test_form_fields_zero_border() {
    let options = LayoutOptions::from_form_fields(None, Some("0"), None).unwrap();
    assert_eq!(options.border_width, 0);
}

#[test]
fn test_form_fields_unknown_color_is_black() {
    let options = LayoutOptions::from_form_fields(None, None, Some("chartreuse")).unwrap();
    assert_eq!(options.border_color, BorderColor::Black);
}

#[test]
fn test_form_fields_invalid_border() {
    for bad in ["-1", "three", "2.5"] {
        match LayoutOptions::from_form_fields(None, Some(bad), None) {
            Err(ComposeError::Config(msg)) => assert!(msg.contains("Border size")),
            other => panic!("Expected Config error for {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_form_fields_unknown_layout_is_single() {
    for layout in ["triple", "spread", "single"] {
        let options = LayoutOptions::from_form_fields(Some(layout), None, None).unwrap();
        assert_eq!(options.mode, LayoutMode::Single, "{}", layout);
    }
}

#[test]
fn test_validation_paper_size() {
    let mut options = LayoutOptions::default();
    assert!(options.validate().is_ok());

    options.paper_size = PaperSize::Custom {
        width_mm: 0.0,
        height_mm: 297.0,
    };
    assert!(options.validate().is_err());

    options.paper_size = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 150.0,
    };
    assert!(options.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = LayoutOptions {
        mode: LayoutMode::Double,
        border_width: 7,
        border_color: BorderColor::Blue,
        paper_size: PaperSize::Letter,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = LayoutOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "mode": "double", "border_color": "red" }"#).unwrap();

    let loaded = LayoutOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.mode, LayoutMode::Double);
    assert_eq!(loaded.border_color, BorderColor::Red);
    assert_eq!(loaded.border_width, 3);
    assert_eq!(loaded.paper_size, PaperSize::A4);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_options_resolves_names_like_form_fields() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();

    std::fs::write(temp_file.path(), r#"{ "border_color": "purple" }"#).unwrap();
    let loaded = LayoutOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.border_color, BorderColor::Black);

    std::fs::write(
        temp_file.path(),
        r#"{ "mode": "Double", "border_color": "Red" }"#,
    )
    .unwrap();
    let loaded = LayoutOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.mode, LayoutMode::Double);
    assert_eq!(loaded.border_color, BorderColor::Red);

    std::fs::write(temp_file.path(), r#"{ "mode": "triple" }"#).unwrap();
    let loaded = LayoutOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.mode, LayoutMode::Single);
}
