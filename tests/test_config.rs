use clap::Parser;
use httpd::config::{Cli, Config};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.document_root, PathBuf::from("."));
    assert_eq!(cfg.workers, 1);
    assert_eq!(cfg.server_name, "httpd");
}

#[test]
fn test_config_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "httpd", "-r", "/srv/www", "-c", "4", "-l", "0.0.0.0:3000", "--server-name", "edge",
    ])
    .unwrap();
    let cfg = Config::from_cli(cli).unwrap();

    assert_eq!(cfg.document_root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.workers, 4);
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server_name, "edge");
}

#[test]
fn test_config_cpus_must_be_numeric() {
    let result = Cli::try_parse_from(["httpd", "-c", "many"]);
    assert!(result.is_err());
}

#[test]
fn test_config_from_yaml_keeps_defaults_for_missing_fields() {
    let cfg = Config::from_yaml_str("document_root: /var/www\nworkers: 2\n").unwrap();

    assert_eq!(cfg.document_root, PathBuf::from("/var/www"));
    assert_eq!(cfg.workers, 2);
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server_name, "httpd");
}

#[test]
fn test_config_invalid_yaml() {
    assert!(Config::from_yaml_str("workers: [not, a, number]").is_err());
}

#[test]
fn test_config_file_then_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "document_root: /from/file\nserver_name: filed").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let cli = Cli::try_parse_from(["httpd", "--config", &path, "-r", "/from/flag"]).unwrap();
    let cfg = Config::from_cli(cli).unwrap();

    assert_eq!(cfg.document_root, PathBuf::from("/from/flag"));
    assert_eq!(cfg.server_name, "filed");
}

#[test]
fn test_config_missing_file() {
    let cli = Cli::try_parse_from(["httpd", "--config", "/definitely/not/here.yaml"]).unwrap();
    assert!(Config::from_cli(cli).is_err());
}

#[test]
fn test_config_validate() {
    let dir = tempfile::tempdir().unwrap();

    let mut cfg = Config::default();
    cfg.document_root = dir.path().to_path_buf();
    assert!(cfg.validate().is_ok());

    cfg.workers = 0;
    assert!(cfg.validate().is_err());

    cfg.workers = 1;
    cfg.document_root = dir.path().join("missing");
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
}
