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

use crate::utils::OneOrMany;
use serde::Serialize;

/// Sing-box V2Ray transport.
///
/// [`Transport::None`] means plain TCP and is never written to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum Transport {
	None,
	Ws {
		path: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		headers: Option<Headers>,
	},
	Http {
		path: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		host: Option<Vec<String>>,
	},
	Grpc {
		service_name: String,
	},
	Quic {
		#[serde(skip_serializing_if = "Option::is_none")]
		host: Option<OneOrMany<String>>,
	},
}

impl Transport {
	#[inline]
	pub fn is_none(&self) -> bool {
		matches!(self, Transport::None)
	}
}

impl Default for Transport {
	#[inline]
	fn default() -> Self {
		Transport::None
	}
}

/// Extra HTTP headers of the websocket handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headers {
	#[serde(rename = "Host")]
	pub host: String,
}
