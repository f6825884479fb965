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

use super::{keys, VmessConfig};
use crate::prelude::*;
use serde_json::Value;
use std::{convert::Infallible, fmt};

pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_ALTER_ID: i64 = 0;
pub const DEFAULT_SECURITY: &str = "auto";
const TLS_ENABLED: &str = "tls";

/// Value of `net` in a v2rayN link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
	Tcp,
	Ws,
	H2,
	Http,
	Grpc,
	Quic,
	Unknown(String),
}

impl Network {
	pub fn as_str(&self) -> &str {
		match self {
			Network::Tcp => "tcp",
			Network::Ws => "ws",
			Network::H2 => "h2",
			Network::Http => "http",
			Network::Grpc => "grpc",
			Network::Quic => "quic",
			Network::Unknown(s) => s.as_str(),
		}
	}
}

impl Default for Network {
	#[inline]
	fn default() -> Self {
		Network::Tcp
	}
}

impl FromStr for Network {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"tcp" => Network::Tcp,
			"ws" => Network::Ws,
			"h2" => Network::H2,
			"http" => Network::Http,
			"grpc" => Network::Grpc,
			"quic" => Network::Quic,
			_ => Network::Unknown(s.to_owned()),
		})
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Typed fields of a [`VmessConfig`], with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmessSettings {
	pub server: String,
	pub port: u16,
	pub uuid: String,
	pub alter_id: i64,
	pub security: String,
	pub network: Network,
	pub tls: bool,
	pub host: String,
	pub path: String,
	pub sni: String,
	/// Protocols in the order they were listed, empty if `alpn` was empty.
	pub alpn: Vec<String>,
}

impl Default for VmessSettings {
	fn default() -> Self {
		Self {
			server: String::new(),
			port: DEFAULT_PORT,
			uuid: String::new(),
			alter_id: DEFAULT_ALTER_ID,
			security: DEFAULT_SECURITY.to_owned(),
			network: Network::default(),
			tls: false,
			host: String::new(),
			path: String::new(),
			sni: String::new(),
			alpn: Vec::new(),
		}
	}
}

impl VmessSettings {
	/// Read every known field from `config`.
	///
	/// Missing or unusable values fall back to the defaults, this never fails.
	#[must_use]
	pub fn from_config(config: &VmessConfig) -> Self {
		let reader = Reader(config);
		// sing-box ports are 16 bits wide, other integers cannot be used.
		let port = reader
			.integer(keys::PORT)
			.and_then(|port| match u16::try_from(port) {
				Ok(port) => Some(port),
				Err(_) => {
					warn!("VMess port {} is out of range, using {}", port, DEFAULT_PORT);
					None
				}
			})
			.unwrap_or(DEFAULT_PORT);
		let security = reader.string(keys::SECURITY);
		let network = reader.string(keys::NETWORK);
		Self {
			server: reader.string(keys::SERVER).unwrap_or_default(),
			port,
			uuid: reader.string(keys::ID).unwrap_or_default(),
			alter_id: reader.integer(keys::ALTER_ID).unwrap_or(DEFAULT_ALTER_ID),
			security: security.unwrap_or_else(|| DEFAULT_SECURITY.to_owned()),
			network: network.map_or_else(Network::default, |s| s.parse().unwrap_or_default()),
			tls: reader.string(keys::TLS).as_deref() == Some(TLS_ENABLED),
			host: reader.string(keys::HOST).unwrap_or_default(),
			path: reader.string(keys::PATH).unwrap_or_default(),
			sni: reader.string(keys::SNI).unwrap_or_default(),
			alpn: reader
				.string(keys::ALPN)
				.map_or_else(Vec::new, |s| split_alpn(&s)),
		}
	}
}

/// Split a comma separated ALPN string.
///
/// `"h2"` becomes `["h2"]`, `"h2, http/1.1"` becomes `["h2", "http/1.1"]`.
/// Tokens are only trimmed when there is a comma, empty tokens are kept.
pub(crate) fn split_alpn(s: &str) -> Vec<String> {
	if s.is_empty() {
		Vec::new()
	} else if s.contains(',') {
		s.split(',').map(|p| p.trim().to_owned()).collect()
	} else {
		vec![s.to_owned()]
	}
}

struct Reader<'a>(&'a VmessConfig);

impl Reader<'_> {
	/// Strings are taken as is, numbers are formatted.
	/// Anything else (including `null`) is treated as absent.
	fn string(&self, key: &str) -> Option<String> {
		match self.0.get(key)? {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			_ => {
				debug!("Ignoring VMess field '{}', not a string", key);
				None
			}
		}
	}

	/// Integers and strings that hold an integer are accepted.
	fn integer(&self, key: &str) -> Option<i64> {
		let value = self.0.get(key)?;
		let num = match value {
			Value::Number(n) => n.as_i64(),
			Value::String(s) => i64::from_str(s.trim()).ok(),
			_ => None,
		};
		if num.is_none() {
			warn!("Cannot use {} as VMess field '{}', using default", value, key);
		}
		num
	}
}
