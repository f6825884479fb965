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

use thiserror::Error as ThisError;

/// Reason why a `vmess://` URI could not be decoded.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	#[error("missing scheme prefix 'vmess://'")]
	MissingPrefix,
	#[error("invalid base64 ({0})")]
	Base64(#[from] base64::DecodeError),
	#[error("payload is not valid UTF-8 ({0})")]
	Utf8(#[from] std::string::FromUtf8Error),
	#[error("payload is not valid JSON ({0})")]
	Json(#[source] serde_json::Error),
	#[error("payload is not a JSON object")]
	NotAnObject,
}

#[derive(Debug, ThisError)]
pub enum Error {
	/// Returned by [`crate::vmess::decode`] for any prefix, base64,
	/// UTF-8 or JSON failure. The exact cause is kept as the source.
	#[error("malformed vmess URI ({0})")]
	MalformedInput(#[source] DecodeError),
	#[error("cannot serialize outbound ({0})")]
	Serialize(#[source] serde_json::Error),
}

impl From<DecodeError> for Error {
	#[inline]
	fn from(e: DecodeError) -> Self {
		Error::MalformedInput(e)
	}
}
