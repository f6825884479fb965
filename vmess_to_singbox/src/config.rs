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

use crate::BoxStdErr;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

// ------------------- Logging -------------------
const STR_STDOUT: &str = "@stdout";
const STR_STDERR: &str = "@stderr";
const STR_NONE: &str = "@none";

#[derive(Debug)]
pub enum LogOutput {
	Stdout,
	Stderr,
	File(String),
}

impl LogOutput {
	pub fn is_colorful(&self) -> bool {
		matches!(self, Self::Stdout | Self::Stderr)
	}

	pub fn from_str(s: &str) -> Option<Self> {
		match s {
			STR_NONE => None,
			STR_STDERR | "" => Some(LogOutput::Stderr),
			STR_STDOUT => Some(LogOutput::Stdout),
			_ => Some(LogOutput::File(s.to_string())),
		}
	}
}

pub struct Log {
	pub level: LevelFilter,
	pub output: Option<LogOutput>,
}

impl Log {
	/// Initialize logger.
	///
	/// DO NOT call this function more than once!
	pub fn init_logger(&self) -> Result<(), BoxStdErr> {
		if let Some(output) = &self.output {
			let time_format =
				time::format_description::parse("[year]-[month]-[day]T[hour]:[minute]:[second]Z")?;
			let is_colorful = output.is_colorful();
			let colors = ColoredLevelConfig::new()
				.info(Color::Blue)
				.trace(Color::Magenta);
			let dispatch =
				fern::Dispatch::new()
					.level(self.level)
					.format(move |out, message, record| {
						let time = time::OffsetDateTime::now_utc()
							.format(&time_format)
							.unwrap_or_default();
						let level = if is_colorful {
							colors.color(record.level()).to_string()
						} else {
							record.level().to_string()
						};
						let target = record.target();
						out.finish(format_args!("[{time} {level} {target}] {message}"));
					});
			match &output {
				LogOutput::Stdout => dispatch.chain(std::io::stdout()),
				LogOutput::Stderr => dispatch.chain(std::io::stderr()),
				LogOutput::File(f) => dispatch.chain(fern::log_file(f)?),
			}
			.apply()?;
		}
		// Ignore empty output
		Ok(())
	}
}

impl Default for Log {
	fn default() -> Self {
		Log {
			level: default_log_level(),
			output: Some(LogOutput::Stderr),
		}
	}
}

fn default_log_level() -> LevelFilter {
	LevelFilter::Warn
}
