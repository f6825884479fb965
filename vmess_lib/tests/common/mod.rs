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

use base64::{engine::general_purpose::STANDARD, Engine};
use vmess_lib::{vmess, OutputFormat};

pub fn setup_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrap `json` into a `vmess://` link.
pub fn make_uri(json: &str) -> String {
	format!("{}{}", vmess::PREFIX, STANDARD.encode(json))
}

/// Decode, translate and serialize `uri` in one go.
pub fn convert(uri: &str, tag: &str) -> Result<String, vmess_lib::Error> {
	let config = vmess::decode(uri)?;
	vmess_lib::translate(&config, tag).to_json(OutputFormat::Compact)
}
