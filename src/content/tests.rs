//! Tests for content decoding.

use super::*;

#[test]
fn test_branding_full_document() {
    let json = r#"{
        "brand": {
            "organizationName": "Kids Play",
            "logo": { "title": "assets/logo.png", "favicon": "assets/favicon.ico" },
            "email": "hello@kids.example",
            "mobile": "+1 555 0100",
            "slogan": "Learn by playing",
            "socialMedia": { "youtube": "https://youtube.com/k", "x": "https://x.com/k" }
        }
    }"#;
    let cfg: BrandingConfig = serde_json::from_str(json).unwrap();
    let brand = cfg.brand.unwrap();

    assert_eq!(brand.organization_name.as_deref(), Some("Kids Play"));
    assert_eq!(
        brand.logo.unwrap().favicon.as_deref(),
        Some("assets/favicon.ico")
    );
    assert_eq!(brand.mobile.as_deref(), Some("+1 555 0100"));

    let keys: Vec<&String> = brand.social_media.as_ref().unwrap().keys().collect();
    assert_eq!(keys, vec!["youtube", "x"]);
}

#[test]
fn test_branding_missing_brand_section() {
    let cfg: BrandingConfig = serde_json::from_str("{}").unwrap();
    assert!(cfg.brand.is_none());
}

#[test]
fn test_branding_null_fields_are_absent() {
    let cfg: BrandingConfig =
        serde_json::from_str(r#"{"brand": {"email": null, "logo": null}}"#).unwrap();
    let brand = cfg.brand.unwrap();
    assert!(brand.email.is_none());
    assert!(brand.logo.is_none());
}

#[test]
fn test_theme_text_light_is_camel_case() {
    let cfg: ThemeConfig = serde_json::from_str(
        r##"{"theme": {"colors": {"textLight": "#999"}, "font": {"family": "Comic Neue"}}}"##,
    )
    .unwrap();
    let theme = cfg.theme.unwrap();
    assert_eq!(theme.colors.unwrap().text_light.as_deref(), Some("#999"));
    assert_eq!(theme.font.unwrap().family.as_deref(), Some("Comic Neue"));
}

#[test]
fn test_games_document() {
    let json = r#"{
        "site": { "title": "Fun Zone", "tagline": "Play and learn", "countdownTarget": "2030-01-01T00:00:00Z" },
        "games": [
            { "id": 7, "name": "Shapes", "description": "Find shapes", "difficulty": "Easy", "thumbnail": "", "url": "/shapes" },
            { "id": "colors", "name": "Colors" }
        ]
    }"#;
    let cfg: GamesConfig = serde_json::from_str(json).unwrap();
    let site = cfg.site.unwrap();
    assert_eq!(site.countdown_target.as_deref(), Some("2030-01-01T00:00:00Z"));

    let games = cfg.games.unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, Some(GameId::Number(7)));
    assert_eq!(games[1].id, Some(GameId::Text("colors".into())));
    assert!(games[1].description.is_none());
}

#[test]
fn test_games_entry_without_name_still_decodes() {
    let cfg: GamesConfig = serde_json::from_str(r#"{"games": [{"id": 1}]}"#).unwrap();
    assert!(cfg.games.unwrap()[0].name.is_none());
}

#[test]
fn test_default_games() {
    let games = default_games();
    let names: Vec<_> = games.iter().map(|g| g.name.as_deref().unwrap()).collect();
    assert_eq!(names, vec!["Math Adventure", "Word Quest"]);
    assert_eq!(games[1].difficulty.as_deref(), Some("Medium"));
    assert_eq!(games[0].url.as_deref(), Some("#"));
}

#[test]
fn test_present_filters_empty() {
    assert_eq!(present(&Some("a".into())), Some("a"));
    assert_eq!(present(&Some(String::new())), None);
    assert_eq!(present(&None), None);
}

#[test]
fn test_game_id_display() {
    assert_eq!(GameId::Number(3).to_string(), "3");
    assert_eq!(GameId::Text("x".into()).to_string(), "x");
}
