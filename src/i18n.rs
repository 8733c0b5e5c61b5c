use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use sys_locale::get_locale;

use crate::formatting::{Affix, NumberStyle};

/// 지원 언어. 알 수 없는 태그는 체코어로 폴백한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Cs,
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Cs, Language::En, Language::De];

    /// 페이지 언어 속성(`lang`)을 해석한다. 주 태그만 본다 (`de-AT` → De).
    pub fn from_tag(tag: &str) -> Self {
        recognize(tag).unwrap_or_default()
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Cs => "cs",
            Language::En => "en",
            Language::De => "de",
        }
    }

    fn pack_source(&self) -> &'static str {
        match self {
            Language::Cs => include_str!("../locales/cs.toml"),
            Language::En => include_str!("../locales/en.toml"),
            Language::De => include_str!("../locales/de.toml"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

fn recognize(tag: &str) -> Option<Language> {
    let primary = tag
        .trim()
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match primary.as_str() {
        "cs" | "cz" => Some(Language::Cs),
        "en" => Some(Language::En),
        "de" => Some(Language::De),
        _ => None,
    }
}

/// 언어별 메시지 묶음. 새 언어 추가는 locales/ 아래 TOML 파일 추가로 끝난다.
#[derive(Debug, Clone, Deserialize)]
pub struct Messages {
    pub number: NumberStyle,
    pub solar: SolarMessages,
    pub charging: ChargingMessages,
    pub contact: ContactMessages,
    pub cli: CliMessages,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolarMessages {
    pub invalid_input: String,
    pub money: Affix,
    pub years: Affix,
    pub energy: Affix,
    pub co2: Affix,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChargingMessages {
    pub invalid_input: String,
    pub money_czk: Affix,
    pub money_eur: Affix,
    /// 평가 등급별 문구 (최우수 → 최하위 순)
    pub evaluation: [String; 5],
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessages {
    pub missing_fields: String,
    pub invalid_email: String,
    pub thank_you: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliMessages {
    pub title: String,
    pub menu_solar: String,
    pub menu_charging: String,
    pub menu_contact: String,
    pub menu_settings: String,
    pub menu_exit: String,
    pub prompt_menu_select: String,
    pub invalid_selection: String,
    pub solar_heading: String,
    pub prompt_parking_spots: String,
    pub prompt_solar_power: String,
    pub prompt_electricity_price: String,
    pub charging_heading: String,
    pub charging_options: String,
    pub prompt_model: String,
    pub prompt_ac: String,
    pub prompt_dc: String,
    pub prompt_grid_price: String,
    pub contact_heading: String,
    pub prompt_name: String,
    pub prompt_email: String,
    pub prompt_message: String,
    pub label_annual_savings: String,
    pub label_roi_years: String,
    pub label_annual_energy: String,
    pub label_co2_reduction: String,
    pub label_daily_income: String,
    pub label_annual_income: String,
    pub label_total_income_30_years: String,
    pub label_evaluation: String,
    pub elements_missing: String,
    pub settings_heading: String,
    pub settings_current_language: String,
    pub settings_options: String,
    pub settings_prompt_change: String,
    pub settings_invalid: String,
    pub settings_saved: String,
    pub app_exit: String,
}

/// 언어팩 로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum I18nError {
    /// 언어팩 파일 입출력 오류
    Io { path: PathBuf, source: std::io::Error },
    /// TOML 파싱 또는 필드 누락
    Parse {
        language: Language,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            I18nError::Io { path, source } => {
                write!(f, "언어팩 파일을 읽을 수 없음 {}: {source}", path.display())
            }
            I18nError::Parse { language, source } => {
                write!(f, "잘못된 언어팩 `{language}`: {source}")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// 모든 지원 언어의 메시지를 담는 카탈로그. 로드 후에는 불변이다.
#[derive(Debug, Clone)]
pub struct Catalog {
    cs: Messages,
    en: Messages,
    de: Messages,
}

impl Catalog {
    /// 바이너리에 포함된 언어팩만으로 카탈로그를 만든다.
    pub fn builtin() -> Result<Self, I18nError> {
        Self::with_pack_dir(None)
    }

    /// 언어팩 디렉터리(`<dir>/<code>.toml`)가 있으면 내장 문자열 위에 키 단위로 덮어쓴다.
    /// 파일이 없는 언어는 내장 문자열만 사용한다.
    pub fn with_pack_dir(dir: Option<&Path>) -> Result<Self, I18nError> {
        Ok(Self {
            cs: load_messages(Language::Cs, dir)?,
            en: load_messages(Language::En, dir)?,
            de: load_messages(Language::De, dir)?,
        })
    }

    pub fn messages(&self, lang: Language) -> &Messages {
        match lang {
            Language::Cs => &self.cs,
            Language::En => &self.en,
            Language::De => &self.de,
        }
    }
}

fn load_messages(lang: Language, dir: Option<&Path>) -> Result<Messages, I18nError> {
    let parse = |src: &str| {
        toml::from_str::<toml::Table>(src).map_err(|source| I18nError::Parse {
            language: lang,
            source,
        })
    };

    let mut table = parse(lang.pack_source())?;
    if let Some(path) = dir.map(|d| d.join(format!("{}.toml", lang.as_code()))) {
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| I18nError::Io {
                path: path.clone(),
                source,
            })?;
            merge(&mut table, parse(&content)?);
            tracing::debug!(path = %path.display(), "language pack override loaded");
        }
    }

    toml::Value::Table(table)
        .try_into::<Messages>()
        .map_err(|source| I18nError::Parse {
            language: lang,
            source,
        })
}

fn merge(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(over) => {
                if let Some(toml::Value::Table(inner)) = base.get_mut(&key) {
                    merge(inner, over);
                    continue;
                }
                base.insert(key, toml::Value::Table(over));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// CLI 플래그, 설정, 시스템 로케일 순으로 언어를 결정한다. 모두 실패하면 체코어.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> Language {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_default()
}

fn normalize_lang(code: &str) -> Option<Language> {
    match code.trim().to_lowercase().as_str() {
        "auto" | "" => None,
        other => recognize(other),
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    if let Some(lang) = get_locale().as_deref().and_then(recognize) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| recognize(&value))
}
