//! 언어별 숫자 표기 회귀 테스트.
use carport_roi::formatting::{
    format_affixed, format_number, format_wrapped, Affix, NumberStyle, Precision,
};
use carport_roi::i18n::{Catalog, Language};

fn cs() -> NumberStyle {
    NumberStyle::new("\u{a0}", ",")
}

fn en() -> NumberStyle {
    NumberStyle::new(",", ".")
}

fn de() -> NumberStyle {
    NumberStyle::new(".", ",")
}

#[test]
fn whole_numbers_are_grouped_per_language() {
    assert_eq!(format_number(246_375.0, Precision::WHOLE, &en()), "246,375");
    assert_eq!(format_number(246_375.0, Precision::WHOLE, &cs()), "246\u{a0}375");
    assert_eq!(format_number(1_073_100.0, Precision::WHOLE, &de()), "1.073.100");
    assert_eq!(format_number(999.0, Precision::WHOLE, &en()), "999");
    assert_eq!(format_number(0.0, Precision::WHOLE, &en()), "0");
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(format_number(24_637.5, Precision::WHOLE, &en()), "24,638");
    assert_eq!(format_number(-2.5, Precision::WHOLE, &en()), "-3");
    assert_eq!(format_number(0.25, Precision::EXACTLY_ONE, &en()), "0.3");
}

#[test]
fn fraction_digits_follow_precision() {
    // 소수 한 자리까지, 뒤쪽 0 생략
    assert_eq!(format_number(3.045, Precision::UP_TO_ONE, &en()), "3");
    assert_eq!(format_number(3.26, Precision::UP_TO_ONE, &cs()), "3,3");
    // 항상 소수 한 자리
    assert_eq!(format_number(0.466, Precision::EXACTLY_ONE, &cs()), "0,5");
    assert_eq!(format_number(2.0, Precision::EXACTLY_ONE, &de()), "2,0");
    assert_eq!(format_number(0.04, Precision::EXACTLY_ONE, &en()), "0.0");
}

#[test]
fn sign_precedes_currency_prefix() {
    let euro = Affix::prefix("€");
    assert_eq!(
        format_affixed(-2940.0, Precision::WHOLE, &en(), &euro),
        "-€2,940"
    );
    let kc = Affix::suffix("\u{a0}Kč");
    assert_eq!(
        format_affixed(-2940.0, Precision::WHOLE, &cs(), &kc),
        "-2\u{a0}940\u{a0}Kč"
    );
}

#[test]
fn wrapped_affix_stays_outside_the_sign() {
    let dollar = Affix::prefix("$");
    assert_eq!(
        format_wrapped(-246_375.0, Precision::WHOLE, &en(), &dollar),
        "$-246,375"
    );
    assert_eq!(
        format_wrapped(246_375.0, Precision::WHOLE, &en(), &dollar),
        "$246,375"
    );
    assert_eq!(
        format_wrapped(3.26, Precision::UP_TO_ONE, &de(), &Affix::suffix(" Jahre")),
        "3,3 Jahre"
    );
}

#[test]
fn non_finite_values_have_fixed_spelling() {
    assert_eq!(format_number(f64::NAN, Precision::WHOLE, &en()), "NaN");
    assert_eq!(format_number(f64::INFINITY, Precision::UP_TO_ONE, &cs()), "∞");
    assert_eq!(
        format_affixed(f64::NEG_INFINITY, Precision::EXACTLY_ONE, &de(), &Affix::default()),
        "-∞"
    );
}

#[test]
fn builtin_packs_carry_expected_number_styles() {
    let catalog = Catalog::builtin().expect("builtin packs");
    assert_eq!(catalog.messages(Language::Cs).number, cs());
    assert_eq!(catalog.messages(Language::En).number, en());
    assert_eq!(catalog.messages(Language::De).number, de());

    let de_pack = catalog.messages(Language::De);
    assert_eq!(
        format_affixed(
            2940.0,
            Precision::WHOLE,
            &de_pack.number,
            &de_pack.charging.money_eur
        ),
        "2.940\u{a0}€"
    );
}
