use serde::{Deserialize, Serialize};

/// 숫자 표기 규칙. 자릿수 구분 기호와 소수점 기호를 언어팩에서 읽는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberStyle {
    pub group: String,
    pub decimal: String,
}

impl NumberStyle {
    pub fn new(group: &str, decimal: &str) -> Self {
        Self {
            group: group.to_string(),
            decimal: decimal.to_string(),
        }
    }
}

/// 숫자 앞뒤에 붙는 기호(통화 기호, 단위 등).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affix {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Affix {
    pub fn suffix(suffix: &str) -> Self {
        Self {
            prefix: String::new(),
            suffix: suffix.to_string(),
        }
    }

    pub fn prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: String::new(),
        }
    }
}

/// 소수 자릿수 범위. `min..=max` 사이에서 뒤쪽 0을 잘라낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub min_fraction: usize,
    pub max_fraction: usize,
}

impl Precision {
    /// 정수 표기 (금액, 에너지, CO2)
    pub const WHOLE: Precision = Precision {
        min_fraction: 0,
        max_fraction: 0,
    };
    /// 소수 한 자리까지, 뒤쪽 0은 생략
    pub const UP_TO_ONE: Precision = Precision {
        min_fraction: 0,
        max_fraction: 1,
    };
    /// 항상 소수 한 자리
    pub const EXACTLY_ONE: Precision = Precision {
        min_fraction: 1,
        max_fraction: 1,
    };
}

/// 숫자를 주어진 표기 규칙으로 문자열화한다.
///
/// 반올림은 0에서 멀어지는 방향(half away from zero)이며, NaN은 `NaN`, 무한대는 `∞`로 표기한다.
pub fn format_number(value: f64, precision: Precision, style: &NumberStyle) -> String {
    format_affixed(value, precision, style, &Affix::default())
}

/// 접두/접미 기호를 붙여 숫자를 표기한다. 음수 부호는 접두 기호 앞에 온다 (`-€2,940`).
pub fn format_affixed(value: f64, precision: Precision, style: &NumberStyle, affix: &Affix) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let body = number_body(value, precision, style);
    format!("{sign}{}{body}{}", affix.prefix, affix.suffix)
}

/// 기호를 숫자 문자열 바깥에 그대로 이어 붙인다. 음수 부호는 접두 기호 뒤에 온다 (`$-246,375`).
pub fn format_wrapped(value: f64, precision: Precision, style: &NumberStyle, affix: &Affix) -> String {
    format!(
        "{}{}{}",
        affix.prefix,
        format_number(value, precision, style),
        affix.suffix
    )
}

fn number_body(value: f64, precision: Precision, style: &NumberStyle) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return "∞".to_string();
    }

    let max = precision.max_fraction;
    let min = precision.min_fraction.min(max);
    let scaled = (value.abs() * 10f64.powi(max as i32)).round();
    let mut digits = format!("{scaled:.0}");
    if digits.len() <= max {
        digits = format!("{}{digits}", "0".repeat(max + 1 - digits.len()));
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - max);

    let mut fraction = frac_part.to_string();
    while fraction.len() > min && fraction.ends_with('0') {
        fraction.pop();
    }

    let grouped = group_digits(int_part, &style.group);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}{}{fraction}", style.decimal)
    }
}

fn group_digits(int_part: &str, separator: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
