//! 카포트 사업 웹사이트의 투자 회수 계산 로직을 라이브러리로 분리하여 CLI와 페이지 바인딩이 함께 쓴다.

pub mod app;
pub mod charging;
pub mod config;
pub mod contact;
pub mod evaluation;
pub mod formatting;
pub mod i18n;
pub mod scroll;
pub mod solar;
pub mod surface;
pub mod tiles;
pub mod ui_cli;
