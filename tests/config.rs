// ABOUTME: Integration tests for configuration parsing and discovery.
// ABOUTME: Tests YAML parsing, file discovery, region overrides, and init.

use stackshift::config::*;
use stackshift::error::Error;
use stackshift::types::Region;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
region: eu-west-1
provisioner:
  binary: /usr/local/bin/senza
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.region().unwrap().as_str(), "eu-west-1");
        assert_eq!(
            config.provisioner.binary,
            PathBuf::from("/usr/local/bin/senza")
        );
    }

    #[test]
    fn provisioner_defaults_to_senza_on_path() {
        let config = Config::from_yaml("region: eu-west-1\n").unwrap();
        assert_eq!(config.provisioner.binary, PathBuf::from("senza"));
    }

    #[test]
    fn empty_file_is_default_config() {
        let config = Config::from_yaml("").unwrap();
        assert!(config.region.is_none());
        assert_eq!(config.provisioner.binary, PathBuf::from("senza"));
    }

    #[test]
    fn invalid_region_returns_error() {
        let err = Config::from_yaml("region: EU West\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn missing_region_is_reported_on_use() {
        let config = Config::from_yaml("provisioner:\n  binary: senza\n").unwrap();
        assert!(matches!(config.region(), Err(Error::MissingRegion)));
        assert!(matches!(config.provisioner(), Err(Error::MissingRegion)));
    }

    #[test]
    fn provisioner_is_scoped_to_region_and_binary() {
        let yaml = r#"
region: us-east-1
provisioner:
  binary: ./bin/senza
"#;
        let senza = Config::from_yaml(yaml).unwrap().provisioner().unwrap();
        assert_eq!(senza.region().as_str(), "us-east-1");
        assert_eq!(senza.binary_path(), PathBuf::from("./bin/senza"));
    }
}

mod discovery {
    use super::*;

    #[test]
    fn finds_primary_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "region: eu-west-1\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.region().unwrap().as_str(), "eu-west-1");
    }

    #[test]
    fn finds_file_in_dot_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".stackshift")).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_DIR), "region: sa-east-1\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.region().unwrap().as_str(), "sa-east-1");
    }

    #[test]
    fn primary_file_wins_over_alternatives() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "region: eu-west-1\n").unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_ALT), "region: us-west-2\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.region().unwrap().as_str(), "eu-west-1");
    }

    #[test]
    fn missing_file_is_an_error_for_discover() {
        let dir = TempDir::new().unwrap();
        let err = Config::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn missing_file_is_default_for_discover_or_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::discover_or_default(dir.path()).unwrap();
        assert!(config.region.is_none());
    }
}

mod region_override {
    use super::*;

    #[test]
    fn environment_overrides_file() {
        temp_env::with_var(REGION_ENV, Some("ap-northeast-1"), || {
            let config = Config::from_yaml("region: eu-west-1\n")
                .unwrap()
                .with_region_override(None)
                .unwrap();
            assert_eq!(config.region().unwrap().as_str(), "ap-northeast-1");
        });
    }

    #[test]
    fn explicit_region_overrides_environment() {
        temp_env::with_var(REGION_ENV, Some("ap-northeast-1"), || {
            let config = Config::default()
                .with_region_override(Some(Region::new("eu-central-1").unwrap()))
                .unwrap();
            assert_eq!(config.region().unwrap().as_str(), "eu-central-1");
        });
    }

    #[test]
    fn file_region_kept_without_overrides() {
        temp_env::with_var_unset(REGION_ENV, || {
            let config = Config::from_yaml("region: eu-west-1\n")
                .unwrap()
                .with_region_override(None)
                .unwrap();
            assert_eq!(config.region().unwrap().as_str(), "eu-west-1");
        });
    }

    #[test]
    fn invalid_environment_region_is_rejected() {
        temp_env::with_var(REGION_ENV, Some("Not A Region"), || {
            let err = Config::default().with_region_override(None).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)));
            assert!(err.to_string().contains(REGION_ENV));
        });
    }
}

mod init {
    use super::*;

    #[test]
    fn writes_loadable_template() {
        let dir = TempDir::new().unwrap();

        let path = init_config(dir.path(), Some("us-west-2"), false).unwrap();

        assert_eq!(path, dir.path().join(CONFIG_FILENAME));
        let config = Config::load(&path).unwrap();
        assert_eq!(config.region().unwrap().as_str(), "us-west-2");
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "region: eu-west-1\n").unwrap();

        let err = init_config(dir.path(), None, false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
    }

    #[test]
    fn force_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "region: eu-west-1\n").unwrap();

        init_config(dir.path(), Some("ca-central-1"), true).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.region().unwrap().as_str(), "ca-central-1");
    }

    #[test]
    fn invalid_region_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = init_config(dir.path(), Some("eu west"), false).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(!dir.path().join(CONFIG_FILENAME).exists());
    }
}
