//! Tests for loading piezas.toml.

use piezas::{PiezasConfig, RenderStyle, Session};
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
moves = [3, 0, 0, 1, 1, 2, 3, 2, 2, 3, 1, 0]
render = "compact"
log_filter = "debug"
"#
    )
    .unwrap();

    let config = PiezasConfig::from_file(file.path()).unwrap();
    assert_eq!(config.moves().len(), 12);
    assert_eq!(*config.render(), RenderStyle::Compact);
    assert_eq!(config.log_filter(), "debug");

    let session = Session::replay(config.moves());
    assert_eq!(config.render().render(session.game()), "OXXO/XXOX/OOOX");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PiezasConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_unknown_render_style_is_error() {
    let err = PiezasConfig::from_toml("render = \"fancy\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
