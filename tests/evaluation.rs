use carport_roi::evaluation::{Evaluation, Severity};
use carport_roi::i18n::{Catalog, Language};
use carport_roi::tiles::{ModelTiles, TileError, TileStyle};

#[test]
fn band_boundaries_belong_to_the_better_band() {
    let cases = [
        (0.5, Evaluation::Excellent),
        (2.0, Evaluation::Excellent),
        (2.01, Evaluation::VeryGood),
        (4.0, Evaluation::VeryGood),
        (4.01, Evaluation::Good),
        (6.0, Evaluation::Good),
        (6.01, Evaluation::Acceptable),
        (8.0, Evaluation::Acceptable),
        (8.01, Evaluation::Poor),
        (40.0, Evaluation::Poor),
    ];
    for (years, expected) in cases {
        assert_eq!(Evaluation::for_roi_years(years), expected, "roi={years}");
    }
}

#[test]
fn degenerate_payback_values() {
    assert_eq!(Evaluation::for_roi_years(-3.0), Evaluation::Excellent);
    assert_eq!(Evaluation::for_roi_years(f64::INFINITY), Evaluation::Poor);
    assert_eq!(Evaluation::for_roi_years(f64::NEG_INFINITY), Evaluation::Excellent);
    assert_eq!(Evaluation::for_roi_years(f64::NAN), Evaluation::Poor);
}

#[test]
fn severity_colors() {
    assert_eq!(Evaluation::Excellent.severity(), Severity::Green);
    assert_eq!(Evaluation::VeryGood.severity(), Severity::Green);
    assert_eq!(Evaluation::Good.severity(), Severity::Amber);
    assert_eq!(Evaluation::Acceptable.severity(), Severity::Amber);
    assert_eq!(Evaluation::Poor.severity(), Severity::Orange);
    assert_eq!(Severity::Green.color(), "#07ff01");
    assert_eq!(Severity::Amber.color(), "#ffbf00");
    assert_eq!(Severity::Orange.color(), "#ff6a00");
}

#[test]
fn messages_come_from_the_language_pack() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let en = &catalog.messages(Language::En).charging.evaluation;
    assert_eq!(
        Evaluation::Excellent.message(en),
        "Excellent investment with fast ROI!"
    );
    assert_eq!(
        Evaluation::Poor.message(en),
        "Consider more charging sessions for better ROI."
    );
    for lang in Language::ALL {
        let texts = &catalog.messages(lang).charging.evaluation;
        assert!(texts.iter().all(|t| !t.is_empty()), "{lang}");
    }
}

#[test]
fn tiles_start_on_the_first_model() {
    assert!(ModelTiles::new(0).is_none());
    let tiles = ModelTiles::new(3).expect("tiles");
    assert_eq!(tiles.active(), 0);
    assert_eq!(tiles.style(0), TileStyle::ACTIVE);
    assert_eq!(tiles.style(1), TileStyle::INACTIVE);
    assert_eq!(ModelTiles::target_name(1), "carport-option-1");
}

#[test]
fn exactly_one_tile_is_active_after_any_selection() {
    let mut tiles = ModelTiles::new(4).expect("tiles");
    for index in [3, 1, 1, 0, 2] {
        tiles.select(index).expect("in range");
        assert_eq!(tiles.states().filter(|active| *active).count(), 1);
        assert!(tiles.is_active(index));
    }
    assert_eq!(
        tiles.select(4),
        Err(TileError::OutOfRange { index: 4, len: 4 })
    );
    assert_eq!(tiles.active(), 2);
}
