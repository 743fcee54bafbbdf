#![allow(clippy::unwrap_used)]
// Loading, saving and translating router profiles.
//
// Anything that reads or writes environment variables runs inside
// `figment::Jail`, which serializes those tests and restores the env.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Jail;
use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;

use routeros_api::TlsMode;
use routeros_config::{
    Config, ConfigError, Defaults, Profile, load_config_from, profile_to_client_config,
    resolve_password, save_config_to,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn profile(url: &str) -> Profile {
    Profile {
        url: url.into(),
        username: "admin".into(),
        password: Some("from-file".into()),
        password_env: None,
        ca_cert: None,
        insecure: None,
        timeout: None,
    }
}

const SAMPLE: &str = r#"
default_profile = "lab"

[defaults]
timeout = 20

[profiles.lab]
url = "https://192.168.88.1"
username = "admin"
password = "plain"

[profiles.edge]
url = "https://10.0.0.1"
username = "ops"
password_env = "EDGE_PASSWORD"
ca_cert = "/etc/routeros/ca.pem"
timeout = 5
"#;

// ── Loading ─────────────────────────────────────────────────────────

#[test]
fn test_load_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", SAMPLE)?;

        let config = load_config_from(Path::new("config.toml")).unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("lab"));
        assert_eq!(config.defaults.timeout, 20);
        assert!(!config.defaults.insecure);
        assert_eq!(config.profiles.len(), 2);

        let (name, lab) = config.active_profile().unwrap();
        assert_eq!(name, "lab");
        assert_eq!(lab.url, "https://192.168.88.1");

        let edge = config.profile("edge").unwrap();
        assert_eq!(edge.ca_cert, Some(PathBuf::from("/etc/routeros/ca.pem")));
        Ok(())
    });
}

#[test]
fn test_missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let config = load_config_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.timeout, 10);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", SAMPLE)?;
        jail.set_env("ROUTEROS_DEFAULT_PROFILE", "edge");
        jail.set_env("ROUTEROS_DEFAULTS__INSECURE", "true");
        jail.set_env("ROUTEROS_PROFILES__LAB__URL", "https://lab.example");

        let config = load_config_from(Path::new("config.toml")).unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("edge"));
        assert!(config.defaults.insecure);
        assert_eq!(config.profile("lab").unwrap().url, "https://lab.example");
        Ok(())
    });
}

#[test]
fn test_unknown_profile() {
    let config = Config::default();
    assert!(matches!(
        config.profile("nope"),
        Err(ConfigError::UnknownProfile(name)) if name == "nope"
    ));
    assert!(config.active_profile().is_err());
}

// ── Saving ──────────────────────────────────────────────────────────

#[test]
fn test_save_then_load() {
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut profiles = HashMap::new();
        profiles.insert("lab".to_owned(), profile("https://192.168.88.1"));
        let config = Config {
            default_profile: Some("lab".into()),
            defaults: Defaults {
                insecure: true,
                timeout: 15,
            },
            profiles,
        };

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
        Ok(())
    });
}

// ── Password resolution ─────────────────────────────────────────────

#[test]
fn test_password_chain() {
    Jail::expect_with(|jail| {
        let mut p = profile("https://router");
        p.password_env = Some("LAB_PASSWORD".into());

        // Plaintext is the last resort.
        assert_eq!(resolve_password(&p, "lab").unwrap().expose_secret(), "from-file");

        jail.set_env("ROUTEROS_PASSWORD", "from-shared-env");
        assert_eq!(
            resolve_password(&p, "lab").unwrap().expose_secret(),
            "from-shared-env"
        );

        jail.set_env("LAB_PASSWORD", "from-profile-env");
        assert_eq!(
            resolve_password(&p, "lab").unwrap().expose_secret(),
            "from-profile-env"
        );
        Ok(())
    });
}

#[test]
fn test_no_password_anywhere() {
    Jail::expect_with(|_jail| {
        let mut p = profile("https://router");
        p.password = None;
        let err = resolve_password(&p, "lab").unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { ref profile } if profile == "lab"));
        Ok(())
    });
}

// ── Translation to ClientConfig ─────────────────────────────────────

#[test]
fn test_profile_to_client_config() {
    Jail::expect_with(|_jail| {
        let config = profile_to_client_config(
            "lab",
            &profile("https://192.168.88.1"),
            &Defaults::default(),
        )
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://192.168.88.1/");
        assert_eq!(config.credentials.username(), "admin");
        assert_eq!(config.credentials.password().expose_secret(), "from-file");
        assert_eq!(config.transport.tls, TlsMode::System);
        assert_eq!(config.transport.timeout, Duration::from_secs(10));
        Ok(())
    });
}

#[test]
fn test_tls_and_timeout_overrides() {
    Jail::expect_with(|_jail| {
        let defaults = Defaults {
            insecure: true,
            timeout: 30,
        };

        let mut p = profile("https://router");
        let config = profile_to_client_config("lab", &p, &defaults).unwrap();
        assert_eq!(config.transport.tls, TlsMode::DangerAcceptInvalid);
        assert_eq!(config.transport.timeout, Duration::from_secs(30));

        p.insecure = Some(false);
        p.ca_cert = Some(PathBuf::from("/etc/routeros/ca.pem"));
        p.timeout = Some(3);
        let config = profile_to_client_config("lab", &p, &defaults).unwrap();
        assert_eq!(
            config.transport.tls,
            TlsMode::CustomCa(PathBuf::from("/etc/routeros/ca.pem"))
        );
        assert_eq!(config.transport.timeout, Duration::from_secs(3));
        Ok(())
    });
}

#[test]
fn test_invalid_profiles_are_rejected() {
    Jail::expect_with(|_jail| {
        let defaults = Defaults::default();

        let err = profile_to_client_config("lab", &profile("not a url"), &defaults).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "url"));

        let err =
            profile_to_client_config("lab", &profile("ftp://router"), &defaults).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "url"));

        let mut p = profile("https://router");
        p.timeout = Some(0);
        let err = profile_to_client_config("lab", &p, &defaults).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "timeout"));
        Ok(())
    });
}

#[test]
fn test_client_config_uses_active_profile() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", SAMPLE)?;
        jail.set_env("EDGE_PASSWORD", "edge-secret");

        let config = load_config_from(Path::new("config.toml")).unwrap();

        let active = config.client_config(None).unwrap();
        assert_eq!(active.base_url.host_str(), Some("192.168.88.1"));
        assert_eq!(active.transport.timeout, Duration::from_secs(20));

        let edge = config.client_config(Some("edge")).unwrap();
        assert_eq!(edge.credentials.username(), "ops");
        assert_eq!(edge.credentials.password().expose_secret(), "edge-secret");
        assert_eq!(edge.transport.timeout, Duration::from_secs(5));
        Ok(())
    });
}
