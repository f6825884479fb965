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

#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use std::io;

mod args;
mod config;
mod convert_impl;

type BoxStdErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
enum Error {
	#[error("[IO error] {0}")]
	Io(#[from] io::Error),
	#[error("[input] {0}")]
	Input(BoxStdErr),
	#[error("[config] {0}")]
	Config(BoxStdErr),
	#[error("[internal] {0}")]
	Internal(BoxStdErr),
}

impl Error {
	fn exit_code(&self) -> exitcode::ExitCode {
		match self {
			Error::Io(_) => exitcode::IOERR,
			Error::Input(_) => exitcode::DATAERR,
			Error::Config(_) => exitcode::CONFIG,
			Error::Internal(_) => exitcode::SOFTWARE,
		}
	}
}

fn main() {
	let opts = args::AppOptions::new_from_args();
	let res = opts
		.into_action()
		.map_err(Error::Config)
		.and_then(convert_impl::run);
	match res {
		Ok(text) => println!("{}", text),
		Err(err) => {
			eprintln!("Error: {}", err);
			std::process::exit(err.exit_code());
		}
	}
}
