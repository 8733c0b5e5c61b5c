//! 모델별 전기차 충전 카포트의 수익/회수기간 계산과 실시간 재계산 바인딩.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::evaluation::{Evaluation, Severity};
use crate::formatting::{format_affixed, Affix, Precision};
use crate::i18n::{Catalog, Language, Messages};
use crate::surface::{bind_fields, bind_targets, Binding, Outcome, Page};
use crate::tiles::ModelTiles;

/// 충전 1회 평균 전력량 [kWh]. 통화와 무관하다.
pub const AVERAGE_CHARGE_KWH: f64 = 70.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const INCOME_HORIZON_YEARS: f64 = 30.0;

pub const FIELD_MODEL: &str = "carport-model";
pub const FIELD_AC_CHARGINGS: &str = "ac-chargings";
pub const FIELD_DC_CHARGINGS: &str = "dc-chargings";
pub const FIELD_ELECTRICITY_PRICE: &str = "electricity-price";
pub const ATTR_CURRENCY: &str = "data-currency";
pub const ATTR_PRICING: &str = "data-pricing";
pub const ATTR_MODEL_PRICES: &str = "data-model-prices";

pub const TARGET_DAILY_INCOME: &str = "daily-income";
pub const TARGET_ANNUAL_INCOME: &str = "annual-income";
pub const TARGET_ROI_YEARS: &str = "roi-years";
pub const TARGET_TOTAL_INCOME_30_YEARS: &str = "total-income-30-years";
pub const TARGET_EVALUATION: &str = "roi-evaluation";

/// 슬라이더 입력과 그 값을 그대로 보여주는 출력 요소의 짝.
pub const RANGE_MIRRORS: [(&str, &str); 3] = [
    (FIELD_AC_CHARGINGS, "ac-chargings-value"),
    (FIELD_DC_CHARGINGS, "dc-chargings-value"),
    (FIELD_ELECTRICITY_PRICE, "electricity-price-value"),
];

const TARGETS: [&str; 4] = [
    TARGET_DAILY_INCOME,
    TARGET_ANNUAL_INCOME,
    TARGET_ROI_YEARS,
    TARGET_TOTAL_INCOME_30_YEARS,
];

/// 충전 요금표 선택자.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingSchema {
    Czk,
    #[default]
    Eur,
}

impl PricingSchema {
    /// 페이지 속성 값을 해석한다. `czk`가 아니면 EUR 요금표.
    pub fn from_attr(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("czk") {
            PricingSchema::Czk
        } else {
            PricingSchema::Eur
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            PricingSchema::Czk => "czk",
            PricingSchema::Eur => "eur",
        }
    }
}

/// 결과 표시 통화.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Czk,
    #[default]
    Eur,
}

impl Currency {
    pub fn from_attr(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("czk") {
            Currency::Czk
        } else {
            Currency::Eur
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            Currency::Czk => "czk",
            Currency::Eur => "eur",
        }
    }

    /// 표시 언어. CZK는 항상 체코어, EUR는 독일어 페이지면 독일어, 그 외 영어.
    pub fn display_language(&self, page: Language) -> Language {
        match (self, page) {
            (Currency::Czk, _) => Language::Cs,
            (Currency::Eur, Language::De) => Language::De,
            (Currency::Eur, _) => Language::En,
        }
    }

    fn affix<'a>(&self, messages: &'a Messages) -> &'a Affix {
        match self {
            Currency::Czk => &messages.charging.money_czk,
            Currency::Eur => &messages.charging.money_eur,
        }
    }
}

/// kWh당 충전 판매 단가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    pub ac_per_kwh: f64,
    pub dc_per_kwh: f64,
}

impl RateTable {
    pub fn for_schema(schema: PricingSchema) -> Self {
        match schema {
            PricingSchema::Czk => RateTable {
                ac_per_kwh: 10.0,
                dc_per_kwh: 16.0,
            },
            PricingSchema::Eur => RateTable {
                ac_per_kwh: 0.4,
                dc_per_kwh: 0.64,
            },
        }
    }
}

/// 충전 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargingError {
    /// 숫자가 아닌 입력
    InvalidNumber { field: &'static str },
    /// 모델 가격 목록(JSON 배열) 해석 실패
    ModelPrices(String),
    /// 모델 번호가 가격 목록 범위를 벗어남
    ModelOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for ChargingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChargingError::InvalidNumber { field } => write!(f, "`{field}` 값이 올바른 숫자가 아님"),
            ChargingError::ModelPrices(e) => write!(f, "모델 가격 목록 해석 실패: {e}"),
            ChargingError::ModelOutOfRange { index, len } => {
                write!(f, "모델 {index} 범위 초과 (모델 {len}개)")
            }
        }
    }
}

impl std::error::Error for ChargingError {}

/// 충전 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargingCalcInput {
    pub model_index: usize,
    pub ac_chargings_per_day: u32,
    pub dc_chargings_per_day: u32,
    /// 계통 전기 단가 [통화/kWh]
    pub grid_electricity_price: f64,
    pub pricing: PricingSchema,
}

impl ChargingCalcInput {
    /// 충전 횟수와 단가 문자열을 해석한다.
    pub fn parse(
        model_index: usize,
        ac: &str,
        dc: &str,
        grid_price: &str,
        pricing: PricingSchema,
    ) -> Result<Self, ChargingError> {
        Ok(Self {
            model_index,
            ac_chargings_per_day: parse_count(FIELD_AC_CHARGINGS, ac)?,
            dc_chargings_per_day: parse_count(FIELD_DC_CHARGINGS, dc)?,
            grid_electricity_price: parse_price(grid_price)?,
            pricing,
        })
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, ChargingError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ChargingError::InvalidNumber { field })
}

fn parse_price(raw: &str) -> Result<f64, ChargingError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ChargingError::InvalidNumber {
            field: FIELD_ELECTRICITY_PRICE,
        })
}

fn parse_model_index(raw: &str) -> Result<usize, ChargingError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ChargingError::InvalidNumber { field: FIELD_MODEL })
}

/// 페이지 속성의 모델 가격 목록(JSON 배열)을 해석한다.
pub fn parse_model_prices(raw: &str) -> Result<Vec<f64>, ChargingError> {
    serde_json::from_str(raw).map_err(|e| ChargingError::ModelPrices(e.to_string()))
}

/// 충전 계산 결과. 일 수익이 음수이면 회수기간도 음수로 그대로 남는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargingCalcResult {
    pub daily_profit: f64,
    pub annual_income: f64,
    pub roi_years: f64,
    pub total_income_in_30_years: f64,
}

/// 충전 수익과 회수기간을 계산한다.
pub fn compute(
    input: &ChargingCalcInput,
    model_prices: &[f64],
) -> Result<ChargingCalcResult, ChargingError> {
    let model_price =
        *model_prices
            .get(input.model_index)
            .ok_or(ChargingError::ModelOutOfRange {
                index: input.model_index,
                len: model_prices.len(),
            })?;
    let rates = RateTable::for_schema(input.pricing);
    let ac = f64::from(input.ac_chargings_per_day);
    let dc = f64::from(input.dc_chargings_per_day);

    let daily_electricity_cost = (ac + dc) * AVERAGE_CHARGE_KWH * input.grid_electricity_price;
    let daily_revenue =
        ac * AVERAGE_CHARGE_KWH * rates.ac_per_kwh + dc * AVERAGE_CHARGE_KWH * rates.dc_per_kwh;
    let daily_profit = daily_revenue - daily_electricity_cost;
    let annual_income = daily_profit * DAYS_PER_YEAR;

    Ok(ChargingCalcResult {
        daily_profit,
        annual_income,
        roi_years: model_price / annual_income,
        total_income_in_30_years: annual_income * INCOME_HORIZON_YEARS,
    })
}

/// 화면에 표시할 현지화 문자열과 평가.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargingDisplay {
    pub daily_income: String,
    pub annual_income: String,
    pub roi_years: String,
    pub total_income_30_years: String,
    pub evaluation: Evaluation,
    pub evaluation_text: String,
}

impl ChargingDisplay {
    /// `messages`는 `Currency::display_language`로 고른 언어의 묶음이어야 한다.
    pub fn render(result: &ChargingCalcResult, currency: Currency, messages: &Messages) -> Self {
        let style = &messages.number;
        let money = currency.affix(messages);
        let evaluation = Evaluation::for_roi_years(result.roi_years);
        Self {
            daily_income: format_affixed(result.daily_profit, Precision::WHOLE, style, money),
            annual_income: format_affixed(result.annual_income, Precision::WHOLE, style, money),
            roi_years: format_affixed(
                result.roi_years,
                Precision::EXACTLY_ONE,
                style,
                &Affix::default(),
            ),
            total_income_30_years: format_affixed(
                result.total_income_in_30_years,
                Precision::WHOLE,
                style,
                money,
            ),
            evaluation,
            evaluation_text: evaluation
                .message(&messages.charging.evaluation)
                .to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.evaluation.severity()
    }
}

/// 충전 ROI 계산기의 화면 바인딩. 입력이 바뀔 때마다 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargingWidget {
    tiles: Option<ModelTiles>,
}

impl ChargingWidget {
    /// 슬라이더 값 표시를 초기화하고, 타일이 있으면 첫 번째를 선택한 뒤 한 번 계산한다.
    /// `tile_count`가 0이면 `carport-model` 필드(선택 상자)에서 모델 번호를 읽는다.
    pub fn init<P: Page>(
        page: &mut P,
        catalog: &Catalog,
        tile_count: usize,
    ) -> (Self, Outcome<ChargingCalcResult, ChargingError>) {
        let widget = Self {
            tiles: ModelTiles::new(tile_count),
        };
        for (field, _) in RANGE_MIRRORS {
            mirror_range(page, field);
        }
        widget.paint_tiles(page);
        let outcome = widget.recalculate(page, catalog);
        (widget, outcome)
    }

    pub fn tiles(&self) -> Option<&ModelTiles> {
        self.tiles.as_ref()
    }

    /// 모델 타일 선택. 다른 타일은 모두 비활성화된다.
    pub fn select_model<P: Page>(
        &mut self,
        index: usize,
        page: &mut P,
        catalog: &Catalog,
    ) -> Outcome<ChargingCalcResult, ChargingError> {
        let Some(tiles) = self.tiles.as_mut() else {
            error!(index, "model tiles not found");
            return Outcome::Aborted {
                missing: vec!["carport-option"],
            };
        };
        if let Err(err) = tiles.select(index) {
            warn!(%err, "model tile selection rejected");
            let len = tiles.len();
            let lang = page_currency(&*page).display_language(page.language());
            page.alert(&catalog.messages(lang).charging.invalid_input);
            return Outcome::Rejected(ChargingError::ModelOutOfRange { index, len });
        }
        self.paint_tiles(page);
        self.recalculate(page, catalog)
    }

    /// 입력 필드가 바뀌었을 때 호출한다. 슬라이더 값 표시를 갱신하고 다시 계산한다.
    pub fn input_changed<P: Page>(
        &self,
        field: &str,
        page: &mut P,
        catalog: &Catalog,
    ) -> Outcome<ChargingCalcResult, ChargingError> {
        mirror_range(page, field);
        self.recalculate(page, catalog)
    }

    /// 현재 페이지 상태로 계산하고 결과를 표시한다.
    pub fn recalculate<P: Page>(
        &self,
        page: &mut P,
        catalog: &Catalog,
    ) -> Outcome<ChargingCalcResult, ChargingError> {
        let [ac, dc, grid_price, prices] = match bind_fields(
            &*page,
            [
                FIELD_AC_CHARGINGS,
                FIELD_DC_CHARGINGS,
                FIELD_ELECTRICITY_PRICE,
                ATTR_MODEL_PRICES,
            ],
        ) {
            Binding::Bound(values) => values,
            Binding::Absent(missing) => {
                error!(?missing, "charging calculator fields not found");
                return Outcome::Aborted { missing };
            }
        };
        let model_field = match &self.tiles {
            Some(_) => None,
            None => match page.value(FIELD_MODEL) {
                Some(value) => Some(value),
                None => {
                    error!("charging calculator model selector not found");
                    return Outcome::Aborted {
                        missing: vec![FIELD_MODEL],
                    };
                }
            },
        };

        let currency = page_currency(&*page);
        let pricing = page
            .value(ATTR_PRICING)
            .map_or(PricingSchema::default(), |v| PricingSchema::from_attr(&v));
        let messages = catalog.messages(currency.display_language(page.language()));

        let computed = self
            .model_index(model_field.as_deref())
            .and_then(|model| ChargingCalcInput::parse(model, &ac, &dc, &grid_price, pricing))
            .and_then(|input| {
                let model_prices = parse_model_prices(&prices)?;
                compute(&input, &model_prices).map(|result| (input, result))
            });
        let (input, result) = match computed {
            Ok(pair) => pair,
            Err(err) => {
                warn!(%err, "charging calculator input rejected");
                page.alert(&messages.charging.invalid_input);
                return Outcome::Rejected(err);
            }
        };
        debug!(?input, ?result, "charging ROI computed");

        let [daily, annual, years, total] = match bind_targets(&*page, TARGETS) {
            Binding::Bound(targets) => targets,
            Binding::Absent(missing) => {
                error!(?missing, "charging calculator result elements not found");
                return Outcome::Aborted { missing };
            }
        };

        let display = ChargingDisplay::render(&result, currency, messages);
        page.write_text(daily, &display.daily_income);
        page.write_text(annual, &display.annual_income);
        page.write_text(years, &display.roi_years);
        page.write_text(total, &display.total_income_30_years);
        if page.has_target(TARGET_EVALUATION) {
            page.write_text(TARGET_EVALUATION, &display.evaluation_text);
            page.set_color(TARGET_EVALUATION, display.severity().color());
        }
        Outcome::Rendered(result)
    }

    fn model_index(&self, model_field: Option<&str>) -> Result<usize, ChargingError> {
        match (&self.tiles, model_field) {
            (Some(tiles), _) => Ok(tiles.active()),
            (None, Some(raw)) => parse_model_index(raw),
            (None, None) => Err(ChargingError::InvalidNumber { field: FIELD_MODEL }),
        }
    }

    fn paint_tiles<P: Page>(&self, page: &mut P) {
        let Some(tiles) = &self.tiles else {
            return;
        };
        for index in 0..tiles.len() {
            let name = ModelTiles::target_name(index);
            if page.has_target(&name) {
                let style = tiles.style(index);
                page.set_color(&name, style.border_color);
                page.set_background(&name, style.background_color);
            }
        }
    }
}

fn page_currency<P: Page>(page: &P) -> Currency {
    page.value(ATTR_CURRENCY)
        .map_or(Currency::default(), |v| Currency::from_attr(&v))
}

/// 슬라이더 값을 짝이 되는 출력 요소에 그대로 복사한다.
fn mirror_range<P: Page>(page: &mut P, field: &str) {
    let Some((_, output)) = RANGE_MIRRORS.iter().find(|(f, _)| *f == field) else {
        return;
    };
    if let Some(value) = page.value(field) {
        if page.has_target(output) {
            page.write_text(output, &value);
        }
    }
}
