//! 주차장 태양광 카포트의 설치비, 발전량, 절감액, 회수기간, CO2 저감량 계산.

use tracing::{debug, error, warn};

use crate::formatting::{format_wrapped, Precision};
use crate::i18n::{Catalog, Messages};
use crate::surface::{bind_fields, bind_targets, Binding, Outcome, Page};

/// 주차면 하나당 면적 [m²]
pub const AREA_PER_SPOT_M2: f64 = 15.0;
/// 패널 효율 (18%)
pub const PANEL_EFFICIENCY: f64 = 0.18;
/// 설치비 [통화/m²]
pub const INSTALLATION_COST_PER_M2: f64 = 5000.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
/// CO2 배출 계수 [kg/kWh]
pub const CO2_KG_PER_KWH: f64 = 0.5;

pub const FIELD_PARKING_SPOTS: &str = "parking-spots";
pub const FIELD_SOLAR_POWER: &str = "solar-power";
pub const FIELD_ELECTRICITY_PRICE: &str = "electricity-price";

pub const TARGET_ANNUAL_SAVINGS: &str = "annual-savings";
pub const TARGET_ROI_YEARS: &str = "roi-years";
pub const TARGET_ANNUAL_ENERGY: &str = "annual-energy";
pub const TARGET_CO2_REDUCTION: &str = "co2-reduction";
pub const TARGET_RESULT: &str = "roi-result";

const FIELDS: [&str; 3] = [FIELD_PARKING_SPOTS, FIELD_SOLAR_POWER, FIELD_ELECTRICITY_PRICE];
const TARGETS: [&str; 5] = [
    TARGET_ANNUAL_SAVINGS,
    TARGET_ROI_YEARS,
    TARGET_ANNUAL_ENERGY,
    TARGET_CO2_REDUCTION,
    TARGET_RESULT,
];

/// 태양광 계산 입력 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolarError {
    /// 숫자가 아니거나 유한하지 않은 값
    InvalidInput { field: &'static str },
}

impl std::fmt::Display for SolarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolarError::InvalidInput { field } => write!(f, "`{field}` 값이 올바른 숫자가 아님"),
        }
    }
}

impl std::error::Error for SolarError {}

/// 검증된 태양광 계산 입력. 모든 값은 유한하다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalcInput {
    /// 주차면 수
    pub parking_spots: f64,
    /// 일사량 계수 [kWh/m²/일]
    pub solar_power: f64,
    /// 전기 단가 [통화/kWh]
    pub electricity_price: f64,
}

impl SolarCalcInput {
    pub fn new(
        parking_spots: f64,
        solar_power: f64,
        electricity_price: f64,
    ) -> Result<Self, SolarError> {
        Ok(Self {
            parking_spots: finite(FIELD_PARKING_SPOTS, parking_spots)?,
            solar_power: finite(FIELD_SOLAR_POWER, solar_power)?,
            electricity_price: finite(FIELD_ELECTRICITY_PRICE, electricity_price)?,
        })
    }

    /// 폼 필드 문자열(주차면, 일사량, 단가 순)을 해석한다.
    pub fn from_fields(values: &[String; 3]) -> Result<Self, SolarError> {
        Self::new(
            parse_number(FIELD_PARKING_SPOTS, &values[0])?,
            parse_number(FIELD_SOLAR_POWER, &values[1])?,
            parse_number(FIELD_ELECTRICITY_PRICE, &values[2])?,
        )
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, SolarError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolarError::InvalidInput { field })
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, SolarError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| SolarError::InvalidInput { field })
}

/// 태양광 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalcResult {
    /// 총 면적 [m²]
    pub total_area: f64,
    /// 일 발전량 [kWh]
    pub daily_energy_production: f64,
    /// 연 발전량 [kWh]
    pub annual_energy_production: f64,
    /// 연간 절감액 [통화]
    pub annual_savings: f64,
    /// 총 설치비 [통화]
    pub total_installation_cost: f64,
    /// 회수기간 [년]. 절감액이 0 이하이면 무한대.
    pub roi_years: f64,
    /// 연간 CO2 저감량 [kg]
    pub annual_co2_reduction: f64,
}

/// 태양광 카포트 경제성을 계산한다.
pub fn compute(input: &SolarCalcInput) -> SolarCalcResult {
    let total_area = input.parking_spots * AREA_PER_SPOT_M2;
    let daily_energy_production = total_area * input.solar_power * PANEL_EFFICIENCY;
    let annual_energy_production = daily_energy_production * DAYS_PER_YEAR;
    let annual_savings = annual_energy_production * input.electricity_price;
    let total_installation_cost = total_area * INSTALLATION_COST_PER_M2;
    let roi_years = if annual_savings > 0.0 {
        total_installation_cost / annual_savings
    } else {
        f64::INFINITY
    };
    SolarCalcResult {
        total_area,
        daily_energy_production,
        annual_energy_production,
        annual_savings,
        total_installation_cost,
        roi_years,
        annual_co2_reduction: annual_energy_production * CO2_KG_PER_KWH,
    }
}

/// 화면에 표시할 현지화 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarDisplay {
    pub annual_savings: String,
    pub roi_years: String,
    pub annual_energy: String,
    pub co2_reduction: String,
}

impl SolarDisplay {
    /// 단위와 통화 기호는 숫자 바깥에 붙는다. 음수 절감액은 `$-246,375`처럼 표시된다.
    pub fn render(result: &SolarCalcResult, messages: &Messages) -> Self {
        let style = &messages.number;
        let m = &messages.solar;
        Self {
            annual_savings: format_wrapped(result.annual_savings, Precision::WHOLE, style, &m.money),
            roi_years: format_wrapped(result.roi_years, Precision::UP_TO_ONE, style, &m.years),
            annual_energy: format_wrapped(
                result.annual_energy_production,
                Precision::WHOLE,
                style,
                &m.energy,
            ),
            co2_reduction: format_wrapped(
                result.annual_co2_reduction,
                Precision::WHOLE,
                style,
                &m.co2,
            ),
        }
    }
}

/// 폼 제출 처리. 필드를 읽어 계산하고 결과 영역에 표시한다.
pub fn submit<P: Page>(page: &mut P, catalog: &Catalog) -> Outcome<SolarCalcResult, SolarError> {
    let values = match bind_fields(&*page, FIELDS) {
        Binding::Bound(values) => values,
        Binding::Absent(missing) => {
            error!(?missing, "solar calculator form fields not found");
            return Outcome::Aborted { missing };
        }
    };

    let messages = catalog.messages(page.language());
    let input = match SolarCalcInput::from_fields(&values) {
        Ok(input) => input,
        Err(err) => {
            warn!(%err, "solar calculator input rejected");
            page.alert(&messages.solar.invalid_input);
            return Outcome::Rejected(err);
        }
    };

    let result = compute(&input);
    debug!(?input, ?result, "solar ROI computed");

    let [savings, years, energy, co2, container] = match bind_targets(&*page, TARGETS) {
        Binding::Bound(targets) => targets,
        Binding::Absent(missing) => {
            error!(?missing, "solar calculator result elements not found");
            return Outcome::Aborted { missing };
        }
    };

    let display = SolarDisplay::render(&result, messages);
    page.write_text(savings, &display.annual_savings);
    page.write_text(years, &display.roi_years);
    page.write_text(energy, &display.annual_energy);
    page.write_text(co2, &display.co2_reduction);
    page.set_visible(container, true);
    Outcome::Rendered(result)
}
