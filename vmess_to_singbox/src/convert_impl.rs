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

use super::{args::ConvertAction, config, Error};
use log::{debug, info};
use std::{fs, path::Path};
use vmess_lib::{vmess, OutputFormat, TranslateOptions, Translator};

/// Run `action` and return the text that should be printed to stdout.
pub(super) fn run(action: ConvertAction) -> Result<String, Error> {
	let ConvertAction {
		coms,
		url,
		tag,
		output,
		format,
		opts,
	} = action;

	let mut log = config::Log::default();
	if let Some(level) = coms.log {
		log.level = level;
	}
	log.output = coms.log_out;
	log.init_logger().map_err(Error::Config)?;

	let json = convert(&url, &tag, format, opts)?;

	Ok(if let Some(path) = output {
		write_output(&path, &json)?;
		format!("Output written to: {}", path.display())
	} else {
		json
	})
}

/// Decode `url` and translate it into sing-box JSON.
pub(super) fn convert(
	url: &str,
	tag: &str,
	format: OutputFormat,
	opts: TranslateOptions,
) -> Result<String, Error> {
	let config = vmess::decode(url).map_err(|e| Error::Input(e.into()))?;
	debug!("Decoded {} fields from vmess URL", config.fields().len());
	let outbound = Translator::new(opts).translate(&config, tag);
	outbound
		.to_json(format)
		.map_err(|e| Error::Internal(e.into()))
}

fn write_output(path: &Path, json: &str) -> Result<(), Error> {
	info!("Writing {} bytes to '{}'", json.len(), path.display());
	fs::write(path, json)?;
	Ok(())
}
