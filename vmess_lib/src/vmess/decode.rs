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

use super::{VmessConfig, PREFIX};
use crate::{prelude::*, DecodeError, Error};
use base64::{
	alphabet,
	engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
	Engine,
};
use serde_json::Value;

/// Standard alphabet, padding may be present or not.
const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(
	&alphabet::STANDARD,
	GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a `vmess://` link into its raw key/value pairs.
///
/// Whitespace inside the base64 payload is ignored, so links that were
/// wrapped over several lines still decode.
///
/// # Errors
///
/// Return [`Error::MalformedInput`] if `uri` does not start with `vmess://`,
/// or if the payload is not base64 encoded UTF-8 JSON object.
pub fn decode(uri: &str) -> Result<VmessConfig, Error> {
	let encoded = uri.strip_prefix(PREFIX).ok_or(DecodeError::MissingPrefix)?;
	let encoded: String = encoded
		.chars()
		.filter(|c| !c.is_ascii_whitespace())
		.collect();

	let bytes = BASE64_ENGINE
		.decode(encoded.as_bytes())
		.map_err(DecodeError::Base64)?;
	let text = String::from_utf8(bytes).map_err(DecodeError::Utf8)?;

	match serde_json::from_str::<Value>(&text).map_err(DecodeError::Json)? {
		Value::Object(fields) => {
			debug!("Decoded vmess link with {} fields", fields.len());
			trace!("VMess link keys: {:?}", fields.keys().collect::<Vec<_>>());
			Ok(VmessConfig::new(fields))
		}
		_ => Err(DecodeError::NotAnObject.into()),
	}
}
