//! Desired-capability set sent to the automation hub.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire key names. These are a stable contract with the hub and the cloud grid.
pub mod keys {
	pub const APPIUM_VERSION: &str = "appium-version";
	pub const PLATFORM_VERSION: &str = "platformVersion";
	pub const PLATFORM_NAME: &str = "platformName";
	pub const DEVICE_NAME: &str = "deviceName";
	/// Job name shown on the cloud dashboard.
	pub const JOB_NAME: &str = "name";
	pub const APP: &str = "app";
}

/// Complete capability descriptor for one session.
///
/// Every field is required; [`Capabilities::first_empty`] reports the wire key
/// of the first field that would be sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
	#[serde(rename = "appium-version")]
	pub appium_version: String,
	#[serde(rename = "platformVersion")]
	pub platform_version: String,
	#[serde(rename = "platformName")]
	pub platform_name: String,
	#[serde(rename = "deviceName")]
	pub device_name: String,
	#[serde(rename = "name")]
	pub job_name: String,
	/// Absolute local path or `<scheme>:<file>` storage reference.
	pub app: String,
}

impl Capabilities {
	/// Returns `(wire key, value)` pairs in a fixed order.
	pub fn entries(&self) -> [(&'static str, &str); 6] {
		[
			(keys::APPIUM_VERSION, self.appium_version.as_str()),
			(keys::PLATFORM_VERSION, self.platform_version.as_str()),
			(keys::PLATFORM_NAME, self.platform_name.as_str()),
			(keys::DEVICE_NAME, self.device_name.as_str()),
			(keys::JOB_NAME, self.job_name.as_str()),
			(keys::APP, self.app.as_str()),
		]
	}

	/// Wire key of the first blank field, if any.
	pub fn first_empty(&self) -> Option<&'static str> {
		self.entries()
			.into_iter()
			.find(|(_, value)| value.trim().is_empty())
			.map(|(key, _)| key)
	}

	/// Converts into the JSON object form expected by WebDriver clients.
	pub fn to_map(&self) -> Map<String, Value> {
		self.entries()
			.into_iter()
			.map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Capabilities {
		Capabilities {
			appium_version: "1.4.1".into(),
			platform_version: "8.3".into(),
			platform_name: "ios".into(),
			device_name: "iPhone Simulator".into(),
			job_name: "tutorial run".into(),
			app: "sauce-storage:UICatalog6.1.app.zip".into(),
		}
	}

	#[test]
	fn serializes_with_hub_key_names() {
		let json = serde_json::to_value(sample()).unwrap();
		assert_eq!(json["appium-version"], "1.4.1");
		assert_eq!(json["platformVersion"], "8.3");
		assert_eq!(json["platformName"], "ios");
		assert_eq!(json["deviceName"], "iPhone Simulator");
		assert_eq!(json["name"], "tutorial run");
		assert_eq!(json["app"], "sauce-storage:UICatalog6.1.app.zip");
		assert_eq!(json.as_object().unwrap().len(), 6);
	}

	#[test]
	fn map_form_matches_serde_form() {
		let caps = sample();
		let map = caps.to_map();
		let json = serde_json::to_value(&caps).unwrap();
		assert_eq!(Value::Object(map), json);
	}

	#[test]
	fn first_empty_reports_wire_key() {
		let mut caps = sample();
		assert_eq!(caps.first_empty(), None);

		caps.device_name = "  ".into();
		assert_eq!(caps.first_empty(), Some(keys::DEVICE_NAME));

		caps.appium_version.clear();
		assert_eq!(caps.first_empty(), Some(keys::APPIUM_VERSION));
	}
}
