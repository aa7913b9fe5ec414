use std::time::Duration;

use lootbox_document::{Markup, Viewport};
use lootbox_storage::MemoryStorage;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::{Event, Options};

fn about_page() -> Storefront<MemoryStorage> {
	let doc = Markup::bundled().unwrap().build(Viewport::default());
	let options = Options {
		fragment: Some("#about".into()),
		year: Some(2024),
		..Options::default()
	};
	Storefront::new(doc, MemoryStorage::new(), options).unwrap()
}

fn id(shop: &Storefront<MemoryStorage>, id: &str) -> NodeId {
	shop.document().get_element_by_id(id).unwrap()
}

fn type_into(shop: &mut Storefront<MemoryStorage>, field: &str, value: &str) {
	let target = id(shop, field);
	shop.dispatch(Event::Input {
		target,
		value: value.into(),
	})
	.unwrap();
}

#[rstest]
#[case(Field::Name, "", false)]
#[case(Field::Name, "A", false)]
#[case(Field::Name, "  A  ", false)]
#[case(Field::Name, "Al", true)]
#[case(Field::Name, "😀", true)]
#[case(Field::Message, "123456789", false)]
#[case(Field::Message, "1234567890", true)]
#[case(Field::Message, "   123456789   ", false)]
#[case(Field::Email, "a@b.co", true)]
#[case(Field::Email, "a@b", false)]
#[case(Field::Email, "a b@c.de", false)]
#[case(Field::Email, "@b.co", false)]
#[case(Field::Email, "a@@b.co", false)]
fn field_rules(#[case] field: Field, #[case] value: &str, #[case] ok: bool) {
	assert_eq!(validate(field, value), ok);
}

#[test]
fn field_ids_round_trip() {
	for field in Field::ALL {
		assert_eq!(Field::from_id(field.id()), Some(field));
	}
	assert_eq!(Field::from_id("phone"), None);
}

#[test]
fn empty_submit_flags_every_field_and_focuses_the_first() {
	let mut shop = about_page();
	let button = id(&shop, "submit-btn");

	shop.dispatch(Event::Click(button)).unwrap();

	let state = shop.state();
	let flagged: Vec<_> = state.form_errors.iter().map(|e| e.field).collect();
	assert_eq!(flagged, Field::ALL);
	assert_eq!(state.form_errors[1].message, "Please enter a valid email address");
	assert_eq!(state.focused.as_deref(), Some("input#name"));
	assert_eq!(shop.pending_timers(), 1, "only the initial reveal is pending");
	assert_eq!(shop.document().text(button), "Send Message");
}

#[test]
fn typing_clears_an_error_once_valid() {
	let mut shop = about_page();
	let form = id(&shop, "contact-form");
	shop.dispatch(Event::Submit(form)).unwrap();

	type_into(&mut shop, "name", "A");
	assert!(shop.document().has_class(id(&shop, "name"), "error"));

	type_into(&mut shop, "name", "Ada");
	let name = id(&shop, "name");
	assert!(!shop.document().has_class(name, "error"));
	assert!(shop.document().has_class(name, "success"));
	assert_eq!(shop.document().text(id(&shop, "name-error")), "");
}

#[test]
fn message_counter_counts_utf16_units() {
	let mut shop = about_page();
	type_into(&mut shop, "message", "héllo 😀");
	assert_eq!(shop.document().text(id(&shop, "message-count")), "8");
}

#[test]
fn blur_skips_empty_fields() {
	let mut shop = about_page();
	let email = id(&shop, "email");
	shop.dispatch(Event::Focus(email)).unwrap();
	shop.dispatch(Event::Blur).unwrap();
	assert!(shop.state().form_errors.is_empty());

	shop.dispatch(Event::Focus(email)).unwrap();
	type_into(&mut shop, "email", "nope");
	shop.dispatch(Event::Blur).unwrap();
	let errors = shop.state().form_errors;
	assert_eq!(errors.len(), 1);
	assert_eq!(errors[0].field, Field::Email);
}

#[test]
fn valid_submit_sends_after_delay() {
	let mut shop = about_page();
	type_into(&mut shop, "name", "Ada Lovelace");
	type_into(&mut shop, "email", "ada@example.com");
	type_into(&mut shop, "message", "Do you ship to Cebu?");
	let button = id(&shop, "submit-btn");

	shop.dispatch(Event::Click(button)).unwrap();
	assert_eq!(shop.document().text(button), "Sending");
	assert!(shop.document().element(button).disabled);

	shop.advance(Duration::from_millis(1499)).unwrap();
	assert!(!shop.state().form_success);

	shop.advance(Duration::from_millis(1)).unwrap();
	let state = shop.state();
	assert!(state.form_success);
	assert_eq!(shop.document().text(button), "Send Message");
	assert!(!shop.document().element(button).disabled);
	assert_eq!(shop.document().value(id(&shop, "name")), "");
	assert_eq!(shop.document().text(id(&shop, "message-count")), "0");
	assert_eq!(state.toasts[0].message, "Message sent successfully!");

	shop.advance(SUCCESS_DWELL).unwrap();
	assert!(!shop.state().form_success);
}

#[test]
fn clicks_while_sending_are_ignored() {
	let mut shop = about_page();
	type_into(&mut shop, "name", "Ada Lovelace");
	type_into(&mut shop, "email", "ada@example.com");
	type_into(&mut shop, "message", "Do you ship to Cebu?");
	let button = id(&shop, "submit-btn");

	shop.dispatch(Event::Click(button)).unwrap();
	shop.dispatch(Event::Click(button)).unwrap();
	shop.advance(SUBMIT_DELAY).unwrap();

	let sent: Vec<_> = shop.notifications().messages().collect();
	assert_eq!(sent, ["Message sent successfully!"]);
}
