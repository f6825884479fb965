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

use super::{config::LogOutput, BoxStdErr};
use clap::Parser;
use std::path::PathBuf;
use vmess_lib::{OutputFormat, QuicHostStyle, TranslateOptions};

const DEFAULT_TAG: &str = "vmess-proxy";

#[derive(Parser)]
#[command(
	name = "vmess_to_singbox",
	version,
	about = "Convert vmess:// URL to sing-box format JSON"
)]
pub struct AppOptions {
	/// The vmess:// URL string to convert.
	#[arg(value_name = "VMESS_URL")]
	vmess_url: String,

	/// Output file path (default: stdout).
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,

	/// Pretty print JSON output.
	#[arg(short, long)]
	pretty: bool,

	/// Tag name for the proxy.
	#[arg(short, long, default_value = DEFAULT_TAG)]
	tag: String,

	/// Write the host of QUIC transport as a list, like HTTP transport.
	#[arg(long)]
	quic_host_list: bool,

	/// Set the log level. Must be one of ["off", "error", "warn" (default), "info", "debug", "trace"]
	#[arg(long, value_name = "LEVEL")]
	log: Option<log::LevelFilter>,

	/// Set the output for log. Can be '@stderr' (default), '@stdout', '@none' or a file.
	#[arg(long, value_name = "LOG_FILE")]
	log_out: Option<String>,
}

impl AppOptions {
	pub fn new_from_args() -> Self {
		Self::parse()
	}

	pub fn into_action(self) -> Result<ConvertAction, BoxStdErr> {
		let log_out = match self.log_out {
			Some(log_out) => LogOutput::from_str(&log_out),
			None => Some(LogOutput::Stderr),
		};
		if matches!(&log_out, Some(LogOutput::Stdout)) && self.output.is_none() {
			return Err("cannot log to stdout when JSON is written to stdout, use --output".into());
		}

		let coms = ActionCommons {
			log: self.log,
			log_out,
		};

		Ok(ConvertAction {
			coms,
			url: self.vmess_url,
			tag: self.tag,
			output: self.output,
			format: if self.pretty {
				OutputFormat::Pretty
			} else {
				OutputFormat::Compact
			},
			opts: TranslateOptions {
				quic_host: if self.quic_host_list {
					QuicHostStyle::List
				} else {
					QuicHostStyle::Scalar
				},
			},
		})
	}
}

pub struct ActionCommons {
	pub log: Option<log::LevelFilter>,
	pub log_out: Option<LogOutput>,
}

pub struct ConvertAction {
	pub coms: ActionCommons,
	pub url: String,
	pub tag: String,
	pub output: Option<PathBuf>,
	pub format: OutputFormat,
	pub opts: TranslateOptions,
}
