//! 문의 폼 로컬 검증. 전송은 하지 않고 확인 메시지만 띄운다.

use tracing::{error, info, warn};

use crate::i18n::Catalog;
use crate::surface::{bind_fields, Binding, Outcome, Page};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

const FIELDS: [&str; 3] = [FIELD_NAME, FIELD_EMAIL, FIELD_MESSAGE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// 필수 항목 중 빈 값이 있음
    MissingFields,
    /// 이메일 형식 오류
    InvalidEmail,
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingFields => write!(f, "필수 입력 항목이 비어 있음"),
            ContactError::InvalidEmail => write!(f, "이메일 형식 오류"),
        }
    }
}

impl std::error::Error for ContactError {}

/// 검증을 통과한 문의 내용 (앞뒤 공백 제거됨).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` 와 같은 규칙으로 이메일을 검사한다.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// 폼 제출 처리. 성공하면 감사 메시지를 띄우고 필드를 비운다.
pub fn submit<P: Page>(page: &mut P, catalog: &Catalog) -> Outcome<ContactMessage, ContactError> {
    let [name, email, message] = match bind_fields(&*page, FIELDS) {
        Binding::Bound(values) => values,
        Binding::Absent(missing) => {
            error!(?missing, "contact form fields not found");
            return Outcome::Aborted { missing };
        }
    };

    let messages = &catalog.messages(page.language()).contact;
    match ContactMessage::validate(&name, &email, &message) {
        Ok(contact) => {
            info!(email = %contact.email, "contact form accepted");
            page.alert(&messages.thank_you);
            for field in FIELDS {
                page.reset(field);
            }
            Outcome::Rendered(contact)
        }
        Err(err) => {
            warn!(%err, "contact form rejected");
            let text = match err {
                ContactError::MissingFields => &messages.missing_fields,
                ContactError::InvalidEmail => &messages.invalid_email,
            };
            page.alert(text);
            Outcome::Rejected(err)
        }
    }
}
