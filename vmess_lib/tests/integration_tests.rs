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

mod common;

use common::{convert, make_uri, setup_logger};
use serde_json::{json, Value};
use vmess_lib::{
	vmess, DecodeError, Error, OutputFormat, QuicHostStyle, TranslateOptions, Translator,
};

fn convert_value(payload: &Value, tag: &str) -> Value {
	let out = convert(&make_uri(&payload.to_string()), tag).unwrap();
	serde_json::from_str(&out).unwrap()
}

#[test]
fn test_end_to_end_exact() {
	setup_logger();
	let uri = make_uri(r#"{"add":"1.2.3.4","port":443,"id":"u1","net":"tcp"}"#);
	assert_eq!(
		convert(&uri, "x").unwrap(),
		r#"{"type":"vmess","tag":"x","server":"1.2.3.4","server_port":443,"uuid":"u1","security":"auto","alter_id":0}"#
	);
}

#[test]
fn test_empty_object() {
	setup_logger();
	let out = convert_value(&json!({}), "vmess-proxy");
	assert_eq!(
		out,
		json!({
			"type": "vmess",
			"tag": "vmess-proxy",
			"server": "",
			"server_port": 443,
			"uuid": "",
			"security": "auto",
			"alter_id": 0,
		})
	);
	let obj = out.as_object().unwrap();
	assert!(!obj.contains_key("transport"));
	assert!(!obj.contains_key("tls"));
}

#[test]
fn test_ws_tls() {
	setup_logger();
	let payload = json!({
		"v": "2",
		"ps": "my node",
		"add": "example.com",
		"port": "443",
		"id": "u",
		"aid": "0",
		"net": "ws",
		"type": "none",
		"host": "example.com",
		"path": "/ws",
		"tls": "tls",
		"sni": "sni.example.com",
		"alpn": "h2,http/1.1",
	});
	assert_eq!(
		convert_value(&payload, "t1"),
		json!({
			"type": "vmess",
			"tag": "t1",
			"server": "example.com",
			"server_port": 443,
			"uuid": "u",
			"security": "auto",
			"alter_id": 0,
			"transport": { "type": "ws", "path": "/ws", "headers": { "Host": "example.com" } },
			"tls": {
				"enabled": true,
				"insecure": false,
				"server_name": "sni.example.com",
				"alpn": ["h2", "http/1.1"],
			},
		})
	);
}

#[test]
fn test_transport_shapes() {
	setup_logger();
	let data = [
		(json!({}), None),
		(json!({ "net": "tcp", "host": "h" }), None),
		(json!({ "net": "xhttp", "host": "h" }), None),
		(json!({ "net": "ws" }), Some(json!({ "type": "ws", "path": "/" }))),
		(
			json!({ "net": "h2", "host": "h", "path": "/p" }),
			Some(json!({ "type": "http", "path": "/p", "host": ["h"] })),
		),
		(json!({ "net": "http" }), Some(json!({ "type": "http", "path": "/" }))),
		(json!({ "net": "grpc" }), Some(json!({ "type": "grpc", "service_name": "" }))),
		(
			json!({ "net": "grpc", "path": "GunService" }),
			Some(json!({ "type": "grpc", "service_name": "GunService" })),
		),
		(json!({ "net": "quic" }), Some(json!({ "type": "quic" }))),
		(
			json!({ "net": "quic", "host": "h" }),
			Some(json!({ "type": "quic", "host": "h" })),
		),
	];
	for (payload, expected) in data {
		let out = convert_value(&payload, "t");
		assert_eq!(out.get("transport"), expected.as_ref(), "payload: {}", payload);
	}
}

#[test]
fn test_quic_host_list() {
	setup_logger();
	let config = vmess::decode(&make_uri(r#"{"net":"quic","host":"h"}"#)).unwrap();
	let translator = Translator::new(TranslateOptions {
		quic_host: QuicHostStyle::List,
	});
	let out = translator
		.translate(&config, "t")
		.to_json(OutputFormat::Compact)
		.unwrap();
	assert!(out.ends_with(r#""transport":{"type":"quic","host":["h"]}}"#), "{}", out);
}

#[test]
fn test_tls_precedence() {
	setup_logger();
	let data = [
		(json!({ "tls": "tls", "sni": "a", "host": "b" }), Some(json!("a"))),
		(json!({ "tls": "tls", "host": "b" }), Some(json!("b"))),
		(json!({ "tls": "tls" }), None),
	];
	for (payload, expected) in data {
		let out = convert_value(&payload, "t");
		assert_eq!(
			out["tls"].get("server_name"),
			expected.as_ref(),
			"payload: {}",
			payload
		);
	}
}

#[test]
fn test_alpn() {
	setup_logger();
	let data = [
		("h2,http/1.1", Some(json!(["h2", "http/1.1"]))),
		("h2", Some(json!(["h2"]))),
		("h2,", Some(json!(["h2", ""]))),
		(" , ", Some(json!(["", ""]))),
		("  ", Some(json!(["  "]))),
		("", None),
	];
	for (alpn, expected) in data {
		let out = convert_value(&json!({ "tls": "tls", "alpn": alpn }), "t");
		assert_eq!(out["tls"].get("alpn"), expected.as_ref(), "alpn '{}'", alpn);
	}
}

#[test]
fn test_integers_pass_through() {
	setup_logger();
	let out = convert_value(&json!({ "port": 0, "aid": 70000 }), "t");
	assert_eq!(out["server_port"], json!(0));
	assert_eq!(out["alter_id"], json!(70000));

	let out = convert_value(&json!({ "port": "8443", "aid": "abc" }), "t");
	assert_eq!(out["server_port"], json!(8443));
	assert_eq!(out["alter_id"], json!(0));
}

#[test]
fn test_deterministic() {
	setup_logger();
	let uri = make_uri(
		r#"{"add":"a.com","port":8443,"id":"u","net":"h2","host":"a.com","tls":"tls","alpn":"h2"}"#,
	);
	let first = convert(&uri, "t").unwrap();
	let second = convert(&uri, "t").unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_non_ascii_path() {
	setup_logger();
	let uri = make_uri(r#"{"net":"ws","path":"/路径"}"#);
	let out = convert(&uri, "节点").unwrap();
	assert!(out.contains(r#""tag":"节点""#), "{}", out);
	assert!(out.contains(r#""path":"/路径""#), "{}", out);
}

#[test]
fn test_pretty() {
	setup_logger();
	let config = vmess::decode(&make_uri(r#"{"add":"1.2.3.4"}"#)).unwrap();
	let outbound = vmess_lib::translate(&config, "t");
	let pretty = outbound.to_json(OutputFormat::Pretty).unwrap();
	assert!(pretty.starts_with("{\n  \"type\": \"vmess\",\n"));
	let compact = outbound.to_json(OutputFormat::Compact).unwrap();
	assert_eq!(
		serde_json::from_str::<Value>(&pretty).unwrap(),
		serde_json::from_str::<Value>(&compact).unwrap()
	);
}

#[test]
fn test_malformed_input() {
	setup_logger();
	let data = [
		"",
		"https://example.com",
		"vmess:/e30=",
		"vmess://e30=e30=",
		"vmess://eyJhZGQiOiIxLjIuMy40Ii",
		"vmess://aGVsbG8gd29ybGQ=",
	];
	for uri in data {
		let err = convert(uri, "t").unwrap_err();
		assert!(
			matches!(err, Error::MalformedInput(_)),
			"'{}' should be malformed",
			uri
		);
	}
	assert!(matches!(
		vmess::decode("ss://e30="),
		Err(Error::MalformedInput(DecodeError::MissingPrefix))
	));
}
