use lootbox_document::NodeId;
use lootbox_keymap_parser::Node;
use serde::Serialize;

/// User and browser input delivered to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
	Click(NodeId),
	/// Key press delivered to the focused element.
	Key(Node),
	/// User scroll to an absolute offset.
	Scroll(f64),
	Back,
	Forward,
	PointerEnter(NodeId),
	PointerLeave(NodeId),
	/// Pointer motion in viewport coordinates.
	PointerMove {
		target: NodeId,
		x: f64,
		y: f64,
	},
	Focus(NodeId),
	/// Moves focus away from the focused element.
	Blur,
	Input {
		target: NodeId,
		value: String,
	},
	Submit(NodeId),
	ImageLoad(NodeId),
}

/// Something the page asked the browser to do outside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Effect {
	/// Full navigation away from the page.
	Navigate { url: String },
}
