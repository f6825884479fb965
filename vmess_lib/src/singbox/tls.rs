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

use serde::Serialize;

/// Outbound TLS settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tls {
	pub enabled: bool,
	pub insecure: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub server_name: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub alpn: Vec<String>,
}

impl Default for Tls {
	/// Enabled, with certificate verification.
	fn default() -> Self {
		Self {
			enabled: true,
			insecure: false,
			server_name: None,
			alpn: Vec::new(),
		}
	}
}
