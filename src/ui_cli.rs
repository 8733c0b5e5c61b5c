use std::io::{self, Write};

use crate::app::{AppError, Session};
use crate::charging::{self, ChargingCalcResult, ChargingError, ChargingWidget};
use crate::contact::{ContactError, ContactMessage};
use crate::i18n::{CliMessages, Language, Messages};
use crate::solar::{self, SolarCalcResult, SolarError};
use crate::surface::{MemoryPage, Outcome};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Solar,
    Charging,
    Contact,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(m: &CliMessages) -> Result<MenuChoice, AppError> {
    println!("{}", m.title);
    println!("{}", m.menu_solar);
    println!("{}", m.menu_charging);
    println!("{}", m.menu_contact);
    println!("{}", m.menu_settings);
    println!("{}", m.menu_exit);
    loop {
        let sel = read_line(&m.prompt_menu_select)?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Solar),
            "2" => return Ok(MenuChoice::Charging),
            "3" => return Ok(MenuChoice::Contact),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", m.invalid_selection),
        }
    }
}

/// 태양광 계산 메뉴. 입력 문자열은 그대로 폼에 넣어 계산기 검증을 거친다.
pub fn handle_solar(session: &Session) -> Result<(), AppError> {
    let m = &session.messages().cli;
    println!("{}", m.solar_heading);
    let spots = read_line(&m.prompt_parking_spots)?;
    let power = read_line(&m.prompt_solar_power)?;
    let price = read_line(&m.prompt_electricity_price)?;
    crate::app::run_solar(session, spots.trim(), power.trim(), price.trim());
    Ok(())
}

/// 충전 계산 메뉴. 항목을 바꿀 때마다 즉시 다시 계산해 보여준다.
pub fn handle_charging(session: &Session) -> Result<(), AppError> {
    let messages = session.messages();
    let m = &messages.cli;
    println!("{}", m.charging_heading);

    let mut page = session.charging_page();
    let (mut widget, outcome) =
        ChargingWidget::init(&mut page, &session.catalog, session.model_count());
    print_charging(&mut page, &outcome, messages);

    loop {
        println!("{}", m.charging_options);
        let sel = read_line(&m.prompt_menu_select)?;
        let outcome = match sel.trim() {
            "1" => {
                let raw = read_line(&m.prompt_model)?;
                match raw.trim().parse::<usize>() {
                    Ok(index) => widget.select_model(index, &mut page, &session.catalog),
                    Err(_) => {
                        println!("{}", m.invalid_selection);
                        continue;
                    }
                }
            }
            "2" => edit_field(&widget, &mut page, session, charging::FIELD_AC_CHARGINGS, &m.prompt_ac)?,
            "3" => edit_field(&widget, &mut page, session, charging::FIELD_DC_CHARGINGS, &m.prompt_dc)?,
            "4" => edit_field(
                &widget,
                &mut page,
                session,
                charging::FIELD_ELECTRICITY_PRICE,
                &m.prompt_grid_price,
            )?,
            "0" => return Ok(()),
            _ => {
                println!("{}", m.invalid_selection);
                continue;
            }
        };
        print_charging(&mut page, &outcome, messages);
    }
}

fn edit_field(
    widget: &ChargingWidget,
    page: &mut MemoryPage,
    session: &Session,
    field: &str,
    prompt: &str,
) -> Result<Outcome<ChargingCalcResult, ChargingError>, AppError> {
    let value = read_line(prompt)?;
    page.set_field(field, value.trim());
    Ok(widget.input_changed(field, page, &session.catalog))
}

/// 문의 폼 메뉴.
pub fn handle_contact(session: &Session) -> Result<(), AppError> {
    let m = &session.messages().cli;
    println!("{}", m.contact_heading);
    let name = read_line(&m.prompt_name)?;
    let email = read_line(&m.prompt_email)?;
    let message = read_line(&m.prompt_message)?;
    crate::app::run_contact(session, &name, &email, &message);
    Ok(())
}

/// 설정 메뉴. 표시 언어를 바꾼다.
pub fn handle_settings(session: &mut Session) -> Result<(), AppError> {
    let m = &session.messages().cli;
    println!("{}", m.settings_heading);
    println!("{} {}", m.settings_current_language, session.language);
    println!("{}", m.settings_options);
    let sel = read_line(&m.settings_prompt_change)?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let language = match sel.trim() {
        "1" => Language::Cs,
        "2" => Language::En,
        "3" => Language::De,
        _ => {
            println!("{}", m.settings_invalid);
            return Ok(());
        }
    };
    session.language = language;
    session.config.language = language.as_code().to_string();
    println!("{} {}", session.messages().cli.settings_saved, language);
    Ok(())
}

/// 태양광 계산 결과 또는 경고를 출력한다.
pub fn print_solar(
    page: &mut MemoryPage,
    outcome: &Outcome<SolarCalcResult, SolarError>,
    messages: &Messages,
) {
    let m = &messages.cli;
    print_alerts(page);
    match outcome {
        Outcome::Rendered(_) => print_targets(
            page,
            &[
                (&m.label_annual_savings, solar::TARGET_ANNUAL_SAVINGS),
                (&m.label_roi_years, solar::TARGET_ROI_YEARS),
                (&m.label_annual_energy, solar::TARGET_ANNUAL_ENERGY),
                (&m.label_co2_reduction, solar::TARGET_CO2_REDUCTION),
            ],
        ),
        Outcome::Aborted { missing } => print_missing(m, missing),
        Outcome::Rejected(_) => {}
    }
}

/// 충전 계산 결과 또는 경고를 출력한다.
pub fn print_charging(
    page: &mut MemoryPage,
    outcome: &Outcome<ChargingCalcResult, ChargingError>,
    messages: &Messages,
) {
    let m = &messages.cli;
    print_alerts(page);
    match outcome {
        Outcome::Rendered(_) => print_targets(
            page,
            &[
                (&m.label_daily_income, charging::TARGET_DAILY_INCOME),
                (&m.label_annual_income, charging::TARGET_ANNUAL_INCOME),
                (&m.label_roi_years, charging::TARGET_ROI_YEARS),
                (&m.label_total_income_30_years, charging::TARGET_TOTAL_INCOME_30_YEARS),
                (&m.label_evaluation, charging::TARGET_EVALUATION),
            ],
        ),
        Outcome::Aborted { missing } => print_missing(m, missing),
        Outcome::Rejected(_) => {}
    }
}

/// 문의 폼 처리 결과(경고 메시지)를 출력한다.
pub fn print_contact(
    page: &mut MemoryPage,
    outcome: &Outcome<ContactMessage, ContactError>,
    messages: &Messages,
) {
    print_alerts(page);
    if let Outcome::Aborted { missing } = outcome {
        print_missing(&messages.cli, missing);
    }
}

fn print_targets(page: &MemoryPage, rows: &[(&String, &str)]) {
    for (label, target) in rows {
        if let Some(text) = page.text(target) {
            println!("  {label} {text}");
        }
    }
}

fn print_alerts(page: &mut MemoryPage) {
    for alert in page.take_alerts() {
        println!("! {alert}");
    }
}

fn print_missing(m: &CliMessages, missing: &[&'static str]) {
    println!("{} {}", m.elements_missing, missing.join(", "));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}
