//! Configuration file loading end to end.

use wechatpay_endpoints::catalog::Endpoint;
use wechatpay_endpoints::config::{load_config, ConfigError};
use wechatpay_endpoints::resolver::resolve;

mod common;

#[test]
fn test_config_file_selects_gateway() {
    let file = common::TempFile::new("us.toml", "[server]\nregion = \"us\"\n");
    let config = load_config(file.path()).unwrap();
    let server = config.server.selection().unwrap();

    let target = resolve(Endpoint::Refund, &server).unwrap();
    assert_eq!(target.uri.as_str(), "https://apius.mch.weixin.qq.com/v3/refund/domestic/refunds");
}

#[test]
fn test_config_file_custom_domain() {
    let file = common::TempFile::new(
        "custom.toml",
        "[server]\ndomain = \"http://127.0.0.1:9000\"\n\n[observability]\nlog_level = \"debug\"\n",
    );
    let config = load_config(file.path()).unwrap();
    let server = config.server.selection().unwrap();

    let uri = Endpoint::CapitalCities.uri(&server).unwrap();
    assert_eq!(
        uri.as_str(),
        "http://127.0.0.1:9000/v3/capital/capitallhh/areas/provinces/{province_code}/cities"
    );
}

#[test]
fn test_config_file_reports_every_problem() {
    let file = common::TempFile::new(
        "broken.toml",
        "[server]\ndomain = \"api.mch.weixin.qq.com\"\n\n[observability]\nlog_level = \"x=loud\"\n",
    );
    match load_config(file.path()) {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_temp_config_dir_is_removed() {
    let file = common::TempFile::new("cleanup.toml", "[server]\nregion = \"hk\"\n");
    let dir = file.dir().to_path_buf();
    assert!(load_config(file.path()).is_ok());
    assert!(dir.exists());

    drop(file);
    assert!(!dir.exists());
}
