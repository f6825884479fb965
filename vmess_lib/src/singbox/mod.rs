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
The part of sing-box's outbound schema produced by this crate.

See <https://sing-box.sagernet.org/configuration/outbound/vmess/>.
*/

mod tls;
mod transport;

pub use tls::Tls;
pub use transport::{Headers, Transport};

use crate::Error;
use serde::Serialize;

/// How [`Outbound::to_json`] lays out its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	Compact,
	/// Indented by two spaces.
	Pretty,
}

impl Default for OutputFormat {
	#[inline]
	fn default() -> Self {
		OutputFormat::Compact
	}
}

/// A sing-box outbound, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outbound {
	Vmess(VmessOutbound),
}

/// Settings of a sing-box `vmess` outbound.
///
/// Optional parts are left out of the JSON entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmessOutbound {
	pub tag: String,
	pub server: String,
	pub server_port: u16,
	pub uuid: String,
	pub security: String,
	pub alter_id: i64,
	#[serde(skip_serializing_if = "Transport::is_none")]
	pub transport: Transport,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tls: Option<Tls>,
}

impl Outbound {
	/// Serialize into a JSON string.
	///
	/// Non-ASCII characters are written as is.
	///
	/// # Errors
	///
	/// Return [`Error::Serialize`] if `serde_json` fails.
	pub fn to_json(&self, format: OutputFormat) -> Result<String, Error> {
		let res = match format {
			OutputFormat::Compact => serde_json::to_string(self),
			OutputFormat::Pretty => serde_json::to_string_pretty(self),
		};
		res.map_err(Error::Serialize)
	}
}
