use figtokens_core::{Node, ZeroChannels};
use figtokens_theme::{
    generate_theme, NamedColor, NamingError, Theme, ThemeGenerator, ThemeOptions, TokenValue,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const DOCUMENT: &str = include_str!("fixtures/document.json");

fn fixture() -> Node {
    Node::from_json_str(DOCUMENT).expect("fixture is valid json")
}

fn numbers(values: &[f64]) -> Vec<TokenValue> {
    values.iter().copied().map(TokenValue::number).collect()
}

#[test]
fn generates_colors() {
    let theme = generate_theme(&fixture()).unwrap();
    let colors: Vec<(&str, &str)> = theme
        .colors
        .iter()
        .map(|(name, color)| (name.as_str(), color.as_str()))
        .collect();

    assert_eq!(
        colors,
        vec![
            ("white", "#ffffff"),
            ("tomato", "#ff6347"),
            ("coral", "#ff7f50"),
            ("orchid", "#da70d6"),
            ("skyBlue", "#87ceeb"),
            ("khaki", "#f0e68c"),
        ]
    );
}

#[test]
fn generates_radii() {
    let theme = generate_theme(&fixture()).unwrap();
    assert_eq!(
        theme.radii,
        vec![TokenValue::text("12px 4px 12px 4px"), TokenValue::number(4.0)]
    );
}

#[test]
fn generates_typography() {
    let theme = generate_theme(&fixture()).unwrap();
    assert_eq!(theme.line_heights, numbers(&[1.2]));
    assert_eq!(theme.font_weights, numbers(&[400.0, 500.0, 700.0]));
    assert_eq!(theme.font_sizes, numbers(&[12.0, 14.0, 72.0]));
    assert_eq!(
        theme.letter_spacings,
        vec![TokenValue::text("-0.04em"), TokenValue::number(0.0)]
    );
}

#[test]
fn generates_box_shadows() {
    let theme = generate_theme(&fixture()).unwrap();
    assert_eq!(
        theme.box_shadows,
        vec![
            "0 4px 4px rgba(0,0,0,0.25)".to_string(),
            "inset 0 2px 4px rgba(0,0,0,0.25)".to_string(),
        ]
    );
}

#[test]
fn generation_is_idempotent() {
    let file = fixture();
    assert_eq!(generate_theme(&file).unwrap(), generate_theme(&file).unwrap());
}

#[test]
fn serializes_like_a_styled_system_theme() {
    let theme = generate_theme(&fixture()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&theme.to_json_pretty().unwrap()).unwrap();

    assert_eq!(value["fontWeights"], json!([400, 500, 700]));
    assert_eq!(value["letterSpacings"], json!(["-0.04em", 0]));
    assert_eq!(value["radii"], json!(["12px 4px 12px 4px", 4]));
    assert_eq!(value["colors"]["skyBlue"], json!("#87ceeb"));

    let back: Theme = serde_json::from_value(value).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn empty_document_yields_empty_theme() {
    let file = Node::from(json!({"document": {"children": []}}));
    assert_eq!(generate_theme(&file).unwrap(), Theme::default());
}

#[test]
fn stub_namer_is_used_for_every_color() {
    let generator = ThemeGenerator::new(|color: &str| {
        Ok::<_, NamingError>(NamedColor::new(format!("Swatch {}", &color[1..]), color))
    });
    let theme = generator.generate(&fixture()).unwrap();

    assert_eq!(theme.colors.len(), 6);
    assert_eq!(
        theme.colors.get("swatchFfffff").map(String::as_str),
        Some("#ffffff")
    );
}

#[test]
fn accepting_zero_channels_adds_black_and_shadow_colors() {
    let options = ThemeOptions {
        zero_channels: ZeroChannels::Accept,
        ..ThemeOptions::default()
    };
    let generator = ThemeGenerator::with_options(figtokens_theme::PaletteNamer::builtin(), options);
    let theme = generator.generate(&fixture()).unwrap();

    // solid black and the translucent shadow color both resolve to "Black";
    // the shadow is seen later and wins
    assert_eq!(theme.colors.len(), 7);
    assert_eq!(
        theme.colors.get("black").map(String::as_str),
        Some("rgba(0,0,0,0.25)")
    );
    assert_eq!(theme.colors.keys().last().map(String::as_str), Some("black"));
}

#[test]
fn legacy_options_match_default_output_for_wide_channels() {
    let default = generate_theme(&fixture()).unwrap();
    let legacy = ThemeGenerator::with_options(
        figtokens_theme::PaletteNamer::builtin(),
        ThemeOptions::legacy(),
    )
    .generate(&fixture())
    .unwrap();
    assert_eq!(legacy, default);
}

#[test]
fn malformed_text_node_surfaces_error() {
    let file = Node::from(json!({
        "document": {
            "children": [{
                "type": "CANVAS",
                "children": [{"type": "TEXT", "style": {"fontSize": 12}}]
            }]
        }
    }));
    let err = generate_theme(&file).unwrap_err();
    assert!(err.to_string().contains("lineHeightPercent"), "{err}");
}
