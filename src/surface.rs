//! 계산기와 호스트 문서 사이의 경계. 입력 필드 읽기, 결과 표시, 페이지 언어 조회를 추상화한다.

use std::collections::BTreeMap;

use crate::i18n::Language;

/// 이름 있는 입력 필드의 현재 값을 읽는다. 페이지 속성(`data-*`)도 같은 방식으로 노출한다.
pub trait InputSource {
    fn value(&self, name: &str) -> Option<String>;

    /// 필드를 빈 값으로 되돌린다 (폼 리셋).
    fn reset(&mut self, _name: &str) {}
}

/// 결과 표시 대상에 텍스트를 쓰고, 표시 여부/글자색/배경색을 바꾸고, 경고를 띄운다.
pub trait OutputSink {
    fn has_target(&self, target: &str) -> bool;
    fn write_text(&mut self, target: &str, text: &str);
    fn set_visible(&mut self, target: &str, visible: bool);
    fn set_color(&mut self, target: &str, color: &str);
    fn set_background(&mut self, target: &str, color: &str);
    fn alert(&mut self, message: &str);
}

/// 문서 루트의 언어 속성을 읽는다.
pub trait LocaleSource {
    fn language_tag(&self) -> Option<String>;

    /// 활성 언어. 비어 있거나 알 수 없는 태그는 체코어.
    fn language(&self) -> Language {
        self.language_tag()
            .map_or(Language::Cs, |tag| Language::from_tag(&tag))
    }
}

/// 세 가지 능력을 모두 갖춘 호스트 문서.
pub trait Page: InputSource + OutputSink + LocaleSource {}

impl<T: InputSource + OutputSink + LocaleSource> Page for T {}

/// 필수 요소 바인딩 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding<T> {
    Bound(T),
    /// 누락된 요소 이름 목록
    Absent(Vec<&'static str>),
}

/// 필수 입력 필드를 한 번에 읽는다. 하나라도 없으면 누락 목록을 돌려준다.
pub fn bind_fields<const N: usize>(
    source: &impl InputSource,
    names: [&'static str; N],
) -> Binding<[String; N]> {
    let mut missing = Vec::new();
    let values = names.map(|name| {
        source.value(name).unwrap_or_else(|| {
            missing.push(name);
            String::new()
        })
    });
    if missing.is_empty() {
        Binding::Bound(values)
    } else {
        Binding::Absent(missing)
    }
}

/// 필수 출력 대상이 모두 있는지 확인한다.
pub fn bind_targets<const N: usize>(
    sink: &impl OutputSink,
    names: [&'static str; N],
) -> Binding<[&'static str; N]> {
    let missing: Vec<&'static str> = names
        .iter()
        .copied()
        .filter(|name| !sink.has_target(name))
        .collect();
    if missing.is_empty() {
        Binding::Bound(names)
    } else {
        Binding::Absent(missing)
    }
}

/// 한 번의 계산 호출 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    /// 계산 후 결과를 표시했다.
    Rendered(T),
    /// 필수 요소가 없어 조용히 중단했다 (화면 변화 없음).
    Aborted { missing: Vec<&'static str> },
    /// 입력 오류로 경고만 띄우고 계산을 건너뛰었다.
    Rejected(E),
}

impl<T, E> Outcome<T, E> {
    pub fn rendered(self) -> Option<T> {
        match self {
            Outcome::Rendered(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered(_))
    }
}

/// 표시 대상 하나의 상태.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub text: String,
    pub visible: bool,
    pub color: Option<String>,
    pub background: Option<String>,
}

/// 메모리 기반 문서. CLI와 테스트에서 호스트 문서 대신 쓴다.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    lang: Option<String>,
    fields: BTreeMap<String, String>,
    targets: BTreeMap<String, Target>,
    alerts: Vec<String>,
    writes: usize,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, tag: &str) -> Self {
        self.lang = Some(tag.to_string());
        self
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn with_targets(mut self, names: &[&str]) -> Self {
        for name in names {
            self.targets.insert((*name).to_string(), Target::default());
        }
        self
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn remove_field(&mut self, name: &str) {
        self.fields.remove(name);
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.targets.get(name).map(|t| t.text.as_str())
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// 지금까지 `write_text` 호출 횟수
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl InputSource for MemoryPage {
    fn value(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn reset(&mut self, name: &str) {
        if let Some(value) = self.fields.get_mut(name) {
            value.clear();
        }
    }
}

impl OutputSink for MemoryPage {
    fn has_target(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    fn write_text(&mut self, target: &str, text: &str) {
        if let Some(t) = self.targets.get_mut(target) {
            t.text = text.to_string();
            self.writes += 1;
        }
    }

    fn set_visible(&mut self, target: &str, visible: bool) {
        if let Some(t) = self.targets.get_mut(target) {
            t.visible = visible;
        }
    }

    fn set_color(&mut self, target: &str, color: &str) {
        if let Some(t) = self.targets.get_mut(target) {
            t.color = Some(color.to_string());
        }
    }

    fn set_background(&mut self, target: &str, color: &str) {
        if let Some(t) = self.targets.get_mut(target) {
            t.background = Some(color.to_string());
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl LocaleSource for MemoryPage {
    fn language_tag(&self) -> Option<String> {
        self.lang.clone()
    }
}
