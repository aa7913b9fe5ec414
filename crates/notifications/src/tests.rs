use pretty_assertions::assert_eq;

use super::*;

#[test]
fn toast_lifecycle() {
	let mut center = NotificationCenter::new();
	let id = center.push(Notification::success("Corsair RM850x added to cart!"));

	assert_eq!(center.toasts()[0].phase, ToastPhase::Visible);
	assert!(center.toasts()[0].class_name().contains("bg-green-600"));
	assert!(!center.toasts()[0].class_name().contains("toast-exit"));

	assert!(center.begin_exit(id));
	assert!(center.toasts()[0].class_name().ends_with(" toast-exit"));

	let removed = center.remove(id).unwrap();
	assert_eq!(removed.notification.message, "Corsair RM850x added to cart!");
	assert!(center.is_empty());
	assert!(!center.begin_exit(id));
	assert_eq!(center.remove(id), None);
}

#[test]
fn toasts_keep_arrival_order() {
	let mut center = NotificationCenter::new();
	let first = center.push(Notification::info("one"));
	center.push(Notification::error("two"));
	center.remove(first);
	center.push(Notification::success("three"));
	assert_eq!(center.messages().collect::<Vec<_>>(), vec!["two", "three"]);
}

#[test]
fn level_styling() {
	assert_eq!(Level::default(), Level::Info);
	assert_eq!(Level::Error.background_class(), "bg-red-600");
	assert_eq!(Level::Info.background_class(), "bg-blue-600");
	assert_eq!(Level::Success.icon_path(), "M5 13l4 4L19 7");
}
