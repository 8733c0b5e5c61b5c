use carport_roi::contact::{self, is_valid_email, ContactError, ContactMessage};
use carport_roi::i18n::{Catalog, Language};
use carport_roi::surface::{InputSource, MemoryPage, Outcome};

fn contact_page(lang: &str, name: &str, email: &str, message: &str) -> MemoryPage {
    MemoryPage::new()
        .with_language(lang)
        .with_field(contact::FIELD_NAME, name)
        .with_field(contact::FIELD_EMAIL, email)
        .with_field(contact::FIELD_MESSAGE, message)
}

#[test]
fn email_shape() {
    for ok in ["jan@firma.cz", "a.b@c.d", "x+tag@mail.example.com"] {
        assert!(is_valid_email(ok), "{ok}");
    }
    for bad in [
        "",
        "jan",
        "jan@firma",
        "@firma.cz",
        "jan@.cz",
        "jan@firma.",
        "jan@@firma.cz",
        "jan novak@firma.cz",
        "jan@fir ma.cz",
    ] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

#[test]
fn blank_fields_are_missing() {
    assert_eq!(
        ContactMessage::validate("  ", "jan@firma.cz", "Ahoj"),
        Err(ContactError::MissingFields)
    );
    assert_eq!(
        ContactMessage::validate("Jan", "jan@firma.cz", "\n"),
        Err(ContactError::MissingFields)
    );
}

#[test]
fn accepted_message_is_trimmed() {
    let msg = ContactMessage::validate(" Jan ", " jan@firma.cz ", " Ahoj\n").expect("valid");
    assert_eq!(msg.name, "Jan");
    assert_eq!(msg.email, "jan@firma.cz");
    assert_eq!(msg.message, "Ahoj");
}

#[test]
fn submit_thanks_and_resets_the_form() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = contact_page("en", "Jan", "jan@firma.cz", "Price list please");
    let outcome = contact::submit(&mut page, &catalog);
    assert!(outcome.is_rendered());
    assert_eq!(
        page.alerts(),
        &[catalog.messages(Language::En).contact.thank_you.clone()]
    );
    for field in [contact::FIELD_NAME, contact::FIELD_EMAIL, contact::FIELD_MESSAGE] {
        assert_eq!(page.value(field).as_deref(), Some(""));
    }
}

#[test]
fn invalid_email_keeps_the_form() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = contact_page("de", "Jan", "jan@firma", "Hallo");
    let outcome = contact::submit(&mut page, &catalog);
    assert_eq!(outcome, Outcome::Rejected(ContactError::InvalidEmail));
    assert_eq!(
        page.alerts(),
        &[catalog.messages(Language::De).contact.invalid_email.clone()]
    );
    assert_eq!(page.value(contact::FIELD_EMAIL).as_deref(), Some("jan@firma"));
}

#[test]
fn missing_input_element_aborts() {
    let catalog = Catalog::builtin().expect("builtin packs");
    let mut page = contact_page("cs", "Jan", "jan@firma.cz", "Ahoj");
    page.remove_field(contact::FIELD_MESSAGE);
    let outcome = contact::submit(&mut page, &catalog);
    assert_eq!(
        outcome,
        Outcome::Aborted {
            missing: vec![contact::FIELD_MESSAGE]
        }
    );
    assert!(page.alerts().is_empty());
}
