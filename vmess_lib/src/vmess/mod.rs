/**********************************************************************

Copyright (C) 2021 by reddal

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.

**********************************************************************/

/*!
v2rayN style VMess share links.

A link is `vmess://` followed by the base64 encoding of a JSON object, see
<https://github.com/2dust/v2rayN/wiki/%E5%88%86%E4%BA%AB%E9%93%BE%E6%8E%A5%E6%A0%BC%E5%BC%8F%E8%AF%B4%E6%98%8E(ver-2)>.

[`decode`] only checks the envelope, every field is interpreted later by
[`VmessSettings::from_config`].
*/

mod decode;
mod settings;

pub use decode::decode;
pub use settings::{Network, VmessSettings};

use serde_json::{Map, Value};

pub const PREFIX: &str = "vmess://";

/// Keys of the v2rayN JSON object.
pub(crate) mod keys {
	pub const SERVER: &str = "add";
	pub const PORT: &str = "port";
	pub const ID: &str = "id";
	pub const ALTER_ID: &str = "aid";
	pub const SECURITY: &str = "scy";
	pub const NETWORK: &str = "net";
	pub const TLS: &str = "tls";
	pub const HOST: &str = "host";
	pub const PATH: &str = "path";
	pub const SNI: &str = "sni";
	pub const ALPN: &str = "alpn";
}

/// Raw key/value pairs of a decoded link.
///
/// No field is validated or defaulted here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VmessConfig {
	fields: Map<String, Value>,
}

impl VmessConfig {
	#[inline]
	#[must_use]
	pub fn new(fields: Map<String, Value>) -> Self {
		Self { fields }
	}

	#[inline]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	#[inline]
	pub fn fields(&self) -> &Map<String, Value> {
		&self.fields
	}
}
