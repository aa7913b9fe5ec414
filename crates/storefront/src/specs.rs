//! Product specification overlays.

use serde::Serialize;

#[cfg(test)]
mod tests;

/// Known specifications for a product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSpecs {
	pub category: &'static str,
	pub lines: [&'static str; 5],
}

const SPECIFICATIONS: &str = "Specifications";
const FEATURES: &str = "Features";

static PRODUCT_SPECS: &[(&str, ProductSpecs)] = &[
	(
		"Intel Core i9-13900K",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"24 Cores (8P + 16E) / 32 Threads",
				"P-Core: 3.0GHz Base, 5.8GHz Turbo",
				"36MB L3 Cache + 32MB L2 Cache",
				"Intel LGA 1700 Socket",
				"125W Base TDP (253W MTP)",
			],
		},
	),
	(
		"NVIDIA RTX 4080",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"16GB GDDR6X @ 22.4 Gbps",
				"9728 CUDA Cores (AD103 GPU)",
				"Boost Clock: 2.51 GHz",
				"DLSS 3, Ray Tracing, AV1 Encode",
				"320W TDP, PCIe 4.0 x16",
			],
		},
	),
	(
		"Next-Gen GPU",
		ProductSpecs {
			category: FEATURES,
			lines: [
				"High-end graphics for 4K/144Hz gaming",
				"Hardware ray tracing acceleration",
				"AI-powered upscaling technology",
				"VR Ready with low latency",
				"3x DisplayPort 1.4a, 1x HDMI 2.1",
			],
		},
	),
	(
		"Corsair Vengeance RGB",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"32GB (2x16GB) DDR5-6000 Kit",
				"6000MT/s Speed, CL36-36-36-76",
				"1.35V Operating Voltage",
				"Intel XMP 3.0 Ready",
				"Dynamic RGB Lighting w/ iCUE",
			],
		},
	),
	(
		"ASUS ROG Z790",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"Intel LGA 1700 (12th/13th/14th Gen)",
				"DDR5-7800+ (OC) Support",
				"PCIe 5.0 x16 + PCIe 5.0 M.2",
				"Wi-Fi 6E + Intel 2.5G LAN",
				"18+1 Phase Power Delivery",
			],
		},
	),
	(
		"Samsung 980 Pro 2TB",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"2TB NVMe M.2 2280 SSD",
				"Read: 7,000 MB/s, Write: 5,100 MB/s",
				"PCIe Gen 4.0 x4, NVMe 1.3c",
				"Samsung V-NAND 3-bit MLC",
				"1,200 TBW Endurance, 5-Year Warranty",
			],
		},
	),
	(
		"Blazing-Fast SSD",
		ProductSpecs {
			category: FEATURES,
			lines: [
				"PCIe Gen 4.0 NVMe technology",
				"Dramatically reduced load times",
				"High TBW endurance rating",
				"Built-in thermal throttling protection",
				"Tool-free M.2 installation",
			],
		},
	),
	(
		"Noctua NH-D15",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"Dual-Tower w/ 6 Heatpipes",
				"2x NF-A15 PWM 140mm Fans",
				"165mm Height, 250W+ TDP Capacity",
				"SecuFirm2 Multi-Socket Mount",
				"6-Year Warranty, NT-H1 Paste Included",
			],
		},
	),
	(
		"Corsair RM850x",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"850W Continuous @ 50°C",
				"80 PLUS Gold (>90% Efficiency)",
				"Fully Modular, ATX 2.52",
				"Zero RPM Mode, 135mm Fan",
				"10-Year Warranty, Corsair Link",
			],
		},
	),
	(
		"Lian Li O11 Dynamic",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"ATX/Micro-ATX/Mini-ITX Support",
				"Dual-Chamber Aluminum + Glass",
				"3x 360mm Radiator Positions",
				"Vertical GPU Mount Compatible",
				"446 x 272 x 445mm (L x W x H)",
			],
		},
	),
	(
		"Logitech G Pro Wireless",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"HERO 25K Sensor (100-25,600 DPI)",
				"LIGHTSPEED Wireless (<1ms)",
				"63g Ultralight Design",
				"Ambidextrous w/ Removable Buttons",
				"70-Hour Battery (No RGB)",
			],
		},
	),
	(
		"Razer Huntsman V2",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"Razer Optical Switches (Linear)",
				"Tenkeyless (87-Key) Layout",
				"Doubleshot PBT Keycaps",
				"Razer Chroma RGB Per-Key",
				"Detachable USB-C, Wrist Rest Included",
			],
		},
	),
	(
		"Mechanical Keyboard",
		ProductSpecs {
			category: FEATURES,
			lines: [
				"Hot-swappable mechanical switches",
				"Full N-key rollover & anti-ghosting",
				"Per-key RGB with software control",
				"Aircraft-grade aluminum frame",
				"Onboard memory for profiles",
			],
		},
	),
	(
		"LG UltraGear 27\"",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"27\" QHD Nano IPS (2560x1440)",
				"165Hz (OC 180Hz), 1ms GTG",
				"NVIDIA G-Sync & AMD FreeSync",
				"HDR400, DCI-P3 98% Color",
				"Height/Tilt/Pivot/Swivel Stand",
			],
		},
	),
	(
		"SteelSeries Arctis Pro",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"Hi-Res Audio (40kHz Drivers)",
				"Dual Wireless: 2.4GHz + Bluetooth",
				"Swappable Battery System",
				"ClearCast Bidirectional Mic",
				"20+ Hours Per Battery",
			],
		},
	),
	(
		"Blue Yeti USB Mic",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"4 Patterns: Cardioid/Stereo/Omni/Bi",
				"48kHz/16-bit Sample Rate",
				"USB Plug & Play (No Drivers)",
				"3.5mm Headphone Out w/ Volume",
				"Adjustable Desktop Stand",
			],
		},
	),
	(
		"Logitech C920 Webcam",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"1080p @ 30fps / 720p @ 30fps",
				"Dual Omnidirectional Mics",
				"HD Auto Light Correction",
				"78° Diagonal Field of View",
				"Universal Clip + Tripod Mount",
			],
		},
	),
	(
		"SteelSeries QcK XXL",
		ProductSpecs {
			category: SPECIFICATIONS,
			lines: [
				"900mm x 400mm x 4mm",
				"Micro-Woven Cloth Surface",
				"Non-Slip Rubber Base",
				"Optimized for All Sensor Types",
				"Machine Washable",
			],
		},
	),
	(
		"Premium Braided Cables",
		ProductSpecs {
			category: FEATURES,
			lines: [
				"300D High-Density Braided Sleeving",
				"16 AWG High-Capacity Wires",
				"Pre-crimped Cable Combs",
				"Universal ATX/EPS Compatibility",
				"Available in Multiple Colors",
			],
		},
	),
];

const GENERIC_DETAILS: [&str; 3] = [
	"Premium quality product",
	"Full manufacturer warranty",
	"Fast shipping available",
];

/// Looks up the specification table by exact display name.
pub fn lookup(name: &str) -> Option<&'static ProductSpecs> {
	PRODUCT_SPECS.iter().find(|(n, _)| *n == name).map(|(_, specs)| specs)
}

/// Names with a specification entry, in table order.
pub fn known_products() -> impl Iterator<Item = &'static str> {
	PRODUCT_SPECS.iter().map(|(name, _)| *name)
}

/// Element id of a product's overlay: `overlay-` plus the name with
/// whitespace runs turned into `-`, lowercased.
pub fn overlay_id(name: &str) -> String {
	let mut id = String::from("overlay-");
	let mut in_space = false;
	for ch in name.chars() {
		if ch.is_whitespace() {
			if !in_space {
				id.push('-');
			}
			in_space = true;
		} else {
			id.extend(ch.to_lowercase());
			in_space = false;
		}
	}
	id
}

/// What a product card's info overlay shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayContent {
	pub id: String,
	pub aria_label: String,
	pub heading: String,
	pub lines: Vec<String>,
}

impl OverlayContent {
	/// Overlay for `name`: its specification entry, else a generic details
	/// list when the card has a description, else nothing.
	pub fn for_product(name: &str, description: &str) -> Option<Self> {
		let (aria_label, heading, lines): (_, _, Vec<String>) = match lookup(name) {
			Some(specs) => (
				format!("{name} specifications"),
				specs.category,
				specs.lines.iter().map(|l| (*l).to_owned()).collect(),
			),
			None if !description.is_empty() => (
				format!("{name} details"),
				"Details",
				GENERIC_DETAILS.iter().map(|l| (*l).to_owned()).collect(),
			),
			None => return None,
		};
		Some(Self {
			id: overlay_id(name),
			aria_label,
			heading: heading.to_owned(),
			lines,
		})
	}
}
