#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

use hostpulse_core::error::Result;
use hostpulse_server::config::{self, check_version, ServerSection, Validate};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DemoConfig {
    version: u32,
    #[serde(default = "default_server")]
    server: ServerSection,
}

fn default_server() -> ServerSection {
    ServerSection::with_listen("127.0.0.1:9000")
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { version: 1, server: default_server() }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        check_version(self.version)?;
        self.server.validate()
    }
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  lisen: "typo"
"#;

    let err = config::load_from_str::<DemoConfig>(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str::<DemoConfig>("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_rejected() {
    let bad = r#"
version: 1
server:
  listen: "localhost"
"#;
    let err = config::load_from_str::<DemoConfig>(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str::<DemoConfig>("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("hostpulse-config-strict-does-not-exist.yaml");
    let cfg = config::load_or_default::<DemoConfig>(&path).expect("defaults");
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
}

#[test]
fn present_but_invalid_file_is_an_error() {
    let path = std::env::temp_dir().join(format!("hostpulse-config-strict-{}.yaml", std::process::id()));
    std::fs::write(&path, "version: 1\nbogus: true\n").unwrap();
    let res = config::load_or_default::<DemoConfig>(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(res.expect_err("must fail").client_code().as_str(), "BAD_REQUEST");
}
