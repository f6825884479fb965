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

/*!
Convert v2rayN style `vmess://` share links into sing-box outbound objects.

```
let uri = "vmess://eyJhZGQiOiIxLjIuMy40IiwicG9ydCI6NDQzLCJpZCI6InUxIiwibmV0IjoidGNwIn0=";
let config = vmess_lib::vmess::decode(uri).unwrap();
let outbound = vmess_lib::translate(&config, "x");
assert_eq!(
	outbound.to_json(vmess_lib::OutputFormat::Compact).unwrap(),
	r#"{"type":"vmess","tag":"x","server":"1.2.3.4","server_port":443,"uuid":"u1","security":"auto","alter_id":0}"#
);
```
*/

#[forbid(unsafe_code)]
mod error;
#[forbid(unsafe_code)]
mod prelude;
#[forbid(unsafe_code)]
pub mod singbox;
#[forbid(unsafe_code)]
mod translate;
#[forbid(unsafe_code)]
mod utils;
#[forbid(unsafe_code)]
pub mod vmess;

pub use error::{DecodeError, Error};
pub use singbox::{OutputFormat, Outbound};
pub use translate::{translate, QuicHostStyle, TranslateOptions, Translator};
pub use utils::OneOrMany;
