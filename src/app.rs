use crate::charging::{self, ChargingWidget};
use crate::config::{Config, ConfigError};
use crate::contact;
use crate::i18n::{Catalog, I18nError, Language, Messages};
use crate::solar;
use crate::surface::MemoryPage;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 언어팩 로드 오류
    I18n(I18nError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::I18n(e) => write!(f, "언어팩 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<I18nError> for AppError {
    fn from(value: I18nError) -> Self {
        AppError::I18n(value)
    }
}

/// 실행 중 공유하는 설정, 메시지 카탈로그, 활성 언어.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub catalog: Catalog,
    pub language: Language,
}

impl Session {
    pub fn new(config: Config, catalog: Catalog, language: Language) -> Self {
        Self {
            config,
            catalog,
            language,
        }
    }

    pub fn messages(&self) -> &Messages {
        self.catalog.messages(self.language)
    }

    /// 태양광 계산기 폼을 흉내 낸 페이지.
    pub fn solar_page(&self, parking_spots: &str, solar_power: &str, price: &str) -> MemoryPage {
        MemoryPage::new()
            .with_language(self.language.as_code())
            .with_field(solar::FIELD_PARKING_SPOTS, parking_spots)
            .with_field(solar::FIELD_SOLAR_POWER, solar_power)
            .with_field(solar::FIELD_ELECTRICITY_PRICE, price)
            .with_targets(&[
                solar::TARGET_ANNUAL_SAVINGS,
                solar::TARGET_ROI_YEARS,
                solar::TARGET_ANNUAL_ENERGY,
                solar::TARGET_CO2_REDUCTION,
                solar::TARGET_RESULT,
            ])
    }

    /// 설정의 페이지 속성과 슬라이더 초기값으로 충전 계산기 페이지를 만든다.
    pub fn charging_page(&self) -> MemoryPage {
        let c = &self.config.charging;
        MemoryPage::new()
            .with_language(self.language.as_code())
            .with_field(charging::ATTR_CURRENCY, c.currency.as_attr())
            .with_field(charging::ATTR_PRICING, c.pricing.as_attr())
            .with_field(charging::ATTR_MODEL_PRICES, &self.config.model_prices_attr())
            .with_field(charging::FIELD_AC_CHARGINGS, &c.ac_chargings.to_string())
            .with_field(charging::FIELD_DC_CHARGINGS, &c.dc_chargings.to_string())
            .with_field(charging::FIELD_ELECTRICITY_PRICE, &c.grid_price.to_string())
            .with_targets(&[
                charging::TARGET_DAILY_INCOME,
                charging::TARGET_ANNUAL_INCOME,
                charging::TARGET_ROI_YEARS,
                charging::TARGET_TOTAL_INCOME_30_YEARS,
                charging::TARGET_EVALUATION,
            ])
    }

    pub fn contact_page(&self, name: &str, email: &str, message: &str) -> MemoryPage {
        MemoryPage::new()
            .with_language(self.language.as_code())
            .with_field(contact::FIELD_NAME, name)
            .with_field(contact::FIELD_EMAIL, email)
            .with_field(contact::FIELD_MESSAGE, message)
    }

    pub fn model_count(&self) -> usize {
        self.config.charging.model_prices.len()
    }
}

/// 태양광 계산을 한 번 실행하고 결과를 출력한다.
pub fn run_solar(
    session: &Session,
    parking_spots: &str,
    solar_power: &str,
    price: &str,
) -> MemoryPage {
    let mut page = session.solar_page(parking_spots, solar_power, price);
    let outcome = solar::submit(&mut page, &session.catalog);
    ui_cli::print_solar(&mut page, &outcome, session.messages());
    page
}

/// 충전 계산을 한 번 실행하고 결과를 출력한다.
pub fn run_charging(
    session: &Session,
    model: usize,
    ac: Option<&str>,
    dc: Option<&str>,
    grid_price: Option<&str>,
) -> MemoryPage {
    let mut page = session.charging_page();
    let fields = [
        (charging::FIELD_AC_CHARGINGS, ac),
        (charging::FIELD_DC_CHARGINGS, dc),
        (charging::FIELD_ELECTRICITY_PRICE, grid_price),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            page.set_field(field, value);
        }
    }
    let (mut widget, outcome) =
        ChargingWidget::init(&mut page, &session.catalog, session.model_count());
    let outcome = if model == 0 {
        outcome
    } else {
        widget.select_model(model, &mut page, &session.catalog)
    };
    ui_cli::print_charging(&mut page, &outcome, session.messages());
    page
}

/// 문의 폼을 검증하고 결과 메시지를 출력한다.
pub fn run_contact(session: &Session, name: &str, email: &str, message: &str) -> MemoryPage {
    let mut page = session.contact_page(name, email, message);
    let outcome = contact::submit(&mut page, &session.catalog);
    ui_cli::print_contact(&mut page, &outcome, session.messages());
    page
}

/// 대화형 메뉴 루프를 실행한다.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    loop {
        let choice = ui_cli::main_menu(&session.messages().cli)?;
        match choice {
            MenuChoice::Solar => ui_cli::handle_solar(session)?,
            MenuChoice::Charging => ui_cli::handle_charging(session)?,
            MenuChoice::Contact => ui_cli::handle_contact(session)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(session)?;
                session.config.save()?;
            }
            MenuChoice::Exit => {
                session.config.save()?;
                println!("{}", session.messages().cli.app_exit);
                break;
            }
        }
    }
    Ok(())
}
