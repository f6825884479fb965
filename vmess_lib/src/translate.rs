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

use crate::{
	prelude::*,
	singbox::{Headers, Outbound, Tls, Transport, VmessOutbound},
	utils::{non_empty, OneOrMany},
	vmess::{Network, VmessConfig, VmessSettings},
};

/// Default path of websocket and HTTP transports.
const DEFAULT_PATH: &str = "/";

/// How the host of a QUIC transport is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuicHostStyle {
	/// `"host": "a.com"`
	Scalar,
	/// `"host": ["a.com"]`, same as the HTTP transport.
	List,
}

impl Default for QuicHostStyle {
	#[inline]
	fn default() -> Self {
		QuicHostStyle::Scalar
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
	pub quic_host: QuicHostStyle,
}

/// Convert decoded VMess links into sing-box outbounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
	opts: TranslateOptions,
}

impl Translator {
	#[inline]
	#[must_use]
	pub fn new(opts: TranslateOptions) -> Self {
		Self { opts }
	}

	/// Build a sing-box outbound named `tag` from `config`.
	///
	/// Missing or invalid fields are replaced by their defaults,
	/// so this cannot fail.
	#[must_use]
	pub fn translate(&self, config: &VmessConfig, tag: &str) -> Outbound {
		let settings = VmessSettings::from_config(config);
		debug!(
			"Translating vmess outbound '{}' to {}:{} (network: {}, tls: {})",
			tag, settings.server, settings.port, settings.network, settings.tls
		);
		let transport = self.make_transport(&settings);
		let tls = make_tls(&settings);
		let VmessSettings {
			server,
			port,
			uuid,
			alter_id,
			security,
			..
		} = settings;
		Outbound::Vmess(VmessOutbound {
			tag: tag.to_owned(),
			server,
			server_port: port,
			uuid,
			security,
			alter_id,
			transport,
			tls,
		})
	}

	fn make_transport(&self, s: &VmessSettings) -> Transport {
		let path_or_default = || non_empty(&s.path).unwrap_or(DEFAULT_PATH).to_owned();
		let host = non_empty(&s.host);
		match &s.network {
			Network::Tcp => Transport::None,
			Network::Unknown(net) => {
				warn!("Unknown VMess network '{}', using plain TCP", net);
				Transport::None
			}
			Network::Ws => Transport::Ws {
				path: path_or_default(),
				headers: host.map(|host| Headers {
					host: host.to_owned(),
				}),
			},
			Network::H2 | Network::Http => Transport::Http {
				path: path_or_default(),
				host: host.map(|host| vec![host.to_owned()]),
			},
			Network::Grpc => Transport::Grpc {
				service_name: s.path.clone(),
			},
			Network::Quic => Transport::Quic {
				host: host.map(|host| match self.opts.quic_host {
					QuicHostStyle::Scalar => OneOrMany::new_one(host.to_owned()),
					QuicHostStyle::List => OneOrMany::new_many(vec![host.to_owned()]),
				}),
			},
		}
	}
}

fn make_tls(s: &VmessSettings) -> Option<Tls> {
	if !s.tls {
		return None;
	}
	let server_name = non_empty(&s.sni)
		.or_else(|| non_empty(&s.host))
		.map(ToOwned::to_owned);
	Some(Tls {
		server_name,
		alpn: s.alpn.clone(),
		..Tls::default()
	})
}

/// Translate with [`TranslateOptions::default`].
#[must_use]
pub fn translate(config: &VmessConfig, tag: &str) -> Outbound {
	Translator::default().translate(config, tag)
}
