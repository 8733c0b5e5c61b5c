use approx::assert_relative_eq;
use carport_roi::i18n::Catalog;
use carport_roi::solar::{self, SolarCalcInput, SolarError};
use carport_roi::surface::{MemoryPage, Outcome};
use proptest::prelude::*;

fn solar_page(lang: &str, spots: &str, power: &str, price: &str) -> MemoryPage {
    MemoryPage::new()
        .with_language(lang)
        .with_field(solar::FIELD_PARKING_SPOTS, spots)
        .with_field(solar::FIELD_SOLAR_POWER, power)
        .with_field(solar::FIELD_ELECTRICITY_PRICE, price)
        .with_targets(&[
            solar::TARGET_ANNUAL_SAVINGS,
            solar::TARGET_ROI_YEARS,
            solar::TARGET_ANNUAL_ENERGY,
            solar::TARGET_CO2_REDUCTION,
            solar::TARGET_RESULT,
        ])
}

#[test]
fn ten_spots_reference_case() {
    let input = SolarCalcInput::new(10.0, 5.0, 5.0).expect("valid input");
    let res = solar::compute(&input);
    assert_relative_eq!(res.total_area, 150.0);
    assert_relative_eq!(res.daily_energy_production, 135.0, max_relative = 1e-12);
    assert_relative_eq!(res.annual_energy_production, 49_275.0, max_relative = 1e-12);
    assert_relative_eq!(res.annual_savings, 246_375.0, max_relative = 1e-12);
    assert_relative_eq!(res.total_installation_cost, 750_000.0);
    assert_relative_eq!(res.roi_years, 3.044_140_030_441_400_3, max_relative = 1e-9);
    assert_relative_eq!(res.annual_co2_reduction, 24_637.5, max_relative = 1e-12);
}

#[test]
fn submit_renders_english_results() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = solar_page("en", "10", "5", "5");
    let outcome = solar::submit(&mut page, &catalog);
    assert!(outcome.is_rendered());
    assert_eq!(page.text(solar::TARGET_ANNUAL_SAVINGS), Some("$246,375"));
    assert_eq!(page.text(solar::TARGET_ROI_YEARS), Some("3 years"));
    assert_eq!(page.text(solar::TARGET_ANNUAL_ENERGY), Some("49,275 kWh"));
    assert_eq!(page.text(solar::TARGET_CO2_REDUCTION), Some("24,638 kg"));
    assert!(page.target(solar::TARGET_RESULT).map_or(false, |t| t.visible));
    assert!(page.alerts().is_empty());
}

#[test]
fn submit_renders_czech_and_german_money() {
    let catalog = Catalog::builtin().expect("builtin packs");

    let mut cs = solar_page("cs", "10", "5", "5");
    solar::submit(&mut cs, &catalog);
    assert_eq!(cs.text(solar::TARGET_ANNUAL_SAVINGS), Some("246\u{a0}375 Kč"));
    assert_eq!(cs.text(solar::TARGET_ROI_YEARS), Some("3 let"));

    let mut de = solar_page("de-AT", "10", "5", "5");
    solar::submit(&mut de, &catalog);
    assert_eq!(de.text(solar::TARGET_ANNUAL_SAVINGS), Some("246.375 €"));
    assert_eq!(de.text(solar::TARGET_ROI_YEARS), Some("3 Jahre"));
}

#[test]
fn unknown_page_language_falls_back_to_czech() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = solar_page("fr", "10", "5", "5");
    solar::submit(&mut page, &catalog);
    assert_eq!(page.text(solar::TARGET_ROI_YEARS), Some("3 let"));
}

#[test]
fn invalid_number_alerts_without_writing() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = solar_page("en", "10", "abc", "5");
    let outcome = solar::submit(&mut page, &catalog);
    assert_eq!(
        outcome,
        Outcome::Rejected(SolarError::InvalidInput {
            field: solar::FIELD_SOLAR_POWER
        })
    );
    assert_eq!(page.writes(), 0);
    assert_eq!(page.alerts().len(), 1);
    assert!(!page.target(solar::TARGET_RESULT).map_or(true, |t| t.visible));
}

#[test]
fn empty_field_is_invalid() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = solar_page("cs", "", "5", "5");
    let outcome = solar::submit(&mut page, &catalog);
    assert!(matches!(outcome, Outcome::Rejected(_)));
    assert_eq!(page.writes(), 0);
}

#[test]
fn missing_form_field_aborts_silently() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = solar_page("en", "10", "5", "5");
    page.remove_field(solar::FIELD_SOLAR_POWER);
    let outcome = solar::submit(&mut page, &catalog);
    assert_eq!(
        outcome,
        Outcome::Aborted {
            missing: vec![solar::FIELD_SOLAR_POWER]
        }
    );
    assert_eq!(page.writes(), 0);
    assert!(page.alerts().is_empty());
}

#[test]
fn missing_result_element_aborts_before_writing() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = MemoryPage::new()
        .with_language("en")
        .with_field(solar::FIELD_PARKING_SPOTS, "10")
        .with_field(solar::FIELD_SOLAR_POWER, "5")
        .with_field(solar::FIELD_ELECTRICITY_PRICE, "5")
        .with_targets(&[solar::TARGET_ANNUAL_SAVINGS, solar::TARGET_ROI_YEARS]);
    let outcome = solar::submit(&mut page, &catalog);
    assert!(matches!(outcome, Outcome::Aborted { .. }));
    assert_eq!(page.writes(), 0);
}

#[test]
fn zero_savings_means_infinite_payback() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = solar_page("en", "10", "5", "0");
    let res = solar::submit(&mut page, &catalog)
        .rendered()
        .expect("rendered");
    assert!(res.roi_years.is_infinite());
    assert_eq!(page.text(solar::TARGET_ROI_YEARS), Some("∞ years"));
    assert_eq!(page.text(solar::TARGET_ANNUAL_SAVINGS), Some("$0"));
}

#[test]
fn negative_savings_keep_sign_after_currency_prefix() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = solar_page("en", "10", "5", "-5");
    let res = solar::submit(&mut page, &catalog)
        .rendered()
        .expect("rendered");
    assert!(res.annual_savings < 0.0);
    assert_eq!(page.text(solar::TARGET_ANNUAL_SAVINGS), Some("$-246,375"));
    assert_eq!(page.text(solar::TARGET_ROI_YEARS), Some("∞ years"));

    let mut cs = solar_page("cs", "10", "5", "-5");
    solar::submit(&mut cs, &catalog);
    assert_eq!(cs.text(solar::TARGET_ANNUAL_SAVINGS), Some("-246\u{a0}375 Kč"));
}

#[test]
fn zero_spots_produces_zero_everything_and_infinite_payback() {
    let res = solar::compute(&SolarCalcInput::new(0.0, 5.0, 5.0).expect("valid input"));
    assert_eq!(res.annual_savings, 0.0);
    assert_eq!(res.total_installation_cost, 0.0);
    assert!(res.roi_years.is_infinite());
}

#[test]
fn non_finite_input_is_rejected() {
    assert!(SolarCalcInput::new(f64::NAN, 5.0, 5.0).is_err());
    assert!(SolarCalcInput::new(10.0, f64::INFINITY, 5.0).is_err());
}

proptest! {
    #[test]
    fn savings_grow_with_every_input(
        spots in 1.0f64..500.0,
        power in 0.5f64..10.0,
        price in 0.1f64..20.0,
        bump in 1.01f64..3.0,
    ) {
        let base = solar::compute(&SolarCalcInput::new(spots, power, price).unwrap());
        let more_spots = solar::compute(&SolarCalcInput::new(spots * bump, power, price).unwrap());
        let more_sun = solar::compute(&SolarCalcInput::new(spots, power * bump, price).unwrap());
        let dearer = solar::compute(&SolarCalcInput::new(spots, power, price * bump).unwrap());
        prop_assert!(more_spots.annual_savings > base.annual_savings);
        prop_assert!(more_spots.total_installation_cost > base.total_installation_cost);
        let cost_ratio = more_spots.total_installation_cost / base.total_installation_cost;
        let savings_ratio = more_spots.annual_savings / base.annual_savings;
        prop_assert!((cost_ratio - bump).abs() <= 1e-9 * bump);
        prop_assert!((savings_ratio - bump).abs() <= 1e-9 * bump);
        prop_assert!(more_sun.annual_savings > base.annual_savings);
        prop_assert!(dearer.annual_savings > base.annual_savings);
        prop_assert!(more_sun.roi_years < base.roi_years);
        prop_assert!(dearer.roi_years < base.roi_years);
    }

    #[test]
    fn payback_does_not_depend_on_spot_count(
        spots in 1.0f64..500.0,
        power in 0.5f64..10.0,
        price in 0.1f64..20.0,
    ) {
        let one = solar::compute(&SolarCalcInput::new(1.0, power, price).unwrap());
        let many = solar::compute(&SolarCalcInput::new(spots, power, price).unwrap());
        prop_assert!((one.roi_years - many.roi_years).abs() <= 1e-9 * one.roi_years);
    }
}
