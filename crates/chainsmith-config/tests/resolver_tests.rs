use chainsmith_config::config::test_runner::DEFAULT_TEST_TIMEOUT_MS;
use chainsmith_config::resolver::env::{
    API_KEY_VAR, PRIVATE_KEY_VAR, RPC_URL_VAR, TEST_TIMEOUT_VAR,
};
use chainsmith_config::{
    ConfigError, ConfigResolver, ConfigValidator, EnvResolver, FileLoader, ResolutionMode,
    UNKNOWN_API_KEY,
};
use std::collections::HashMap;
use tempfile::tempdir;

fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn valid_env() -> HashMap<String, String> {
    env_of(&[
        (RPC_URL_VAR, "https://example.invalid/rpc"),
        (PRIVATE_KEY_VAR, &"a".repeat(64)),
    ])
}

/// Worked example from the toolchain contract: valid RPC URL, shared
/// 64-hex key, no APIKEY.
#[test]
fn resolves_shared_environment() {
    let config = EnvResolver::resolve(&valid_env(), ResolutionMode::FailFast).unwrap();

    assert_eq!(config.networks.len(), 3);
    for (name, profile) in &config.networks {
        assert_eq!(&profile.name, name);
        assert_eq!(profile.rpc_url, "https://example.invalid/rpc");
        let key = profile.signing_key.as_ref().unwrap();
        assert_eq!(key.reveal(), format!("0x{}", "a".repeat(64)));
    }
    assert_eq!(config.networks["avalanche"].chain_id, 43114);
    assert_eq!(config.networks["sepolia"].chain_id, 11_155_111);
    assert_eq!(config.networks["fuji"].chain_id, 43113);

    // APIKEY unset: explicit None internally, sentinel at the handoff.
    assert_eq!(config.explorer.key_for("avalanche"), None);
    assert_eq!(config.explorer.key_or_unknown("avalanche"), UNKNOWN_API_KEY);
    assert_eq!(config.explorer.key_or_unknown("fuji"), UNKNOWN_API_KEY);
    assert!(!config.explorer.covers("sepolia"));

    assert_eq!(config.test_runner.timeout_ms, DEFAULT_TEST_TIMEOUT_MS);
    assert!(config.disabled.is_empty());
}

#[test]
fn empty_environment_fails_with_missing_rpc_url_first() {
    let err = EnvResolver::resolve(&HashMap::new(), ResolutionMode::FailFast).unwrap_err();
    assert!(matches!(err, ConfigError::MissingRpcUrl { ref var } if var == RPC_URL_VAR));
}

#[test]
fn empty_rpc_url_counts_as_missing() {
    let env = env_of(&[(RPC_URL_VAR, "   "), (PRIVATE_KEY_VAR, &"a".repeat(64))]);
    let err = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap_err();
    assert!(matches!(err, ConfigError::MissingRpcUrl { .. }));
}

/// "zz" is not valid hex / wrong length; reported before URL-shape
/// problems with the endpoint.
#[test]
fn malformed_key_fails_with_invalid_signing_key() {
    let env = env_of(&[(RPC_URL_VAR, "x"), (PRIVATE_KEY_VAR, "zz")]);
    let err = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSigningKey { ref var } if var == PRIVATE_KEY_VAR));
}

#[test]
fn absent_key_fails_with_invalid_signing_key() {
    let env = env_of(&[(RPC_URL_VAR, "https://example.invalid/rpc")]);
    let err = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSigningKey { .. }));
}

#[test]
fn malformed_rpc_url_with_valid_key_is_reported_as_missing_rpc_url() {
    let env = env_of(&[(RPC_URL_VAR, "x"), (PRIVATE_KEY_VAR, &"a".repeat(64))]);
    let err = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap_err();
    assert!(matches!(err, ConfigError::MissingRpcUrl { .. }));
}

#[test]
fn error_messages_never_contain_the_key_value() {
    let secret = "b".repeat(63); // malformed on purpose
    let env = env_of(&[(RPC_URL_VAR, "https://example.invalid/rpc"), (PRIVATE_KEY_VAR, &secret)]);
    let err = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap_err();
    assert!(!err.to_string().contains(&secret));
}

#[test]
fn resolution_is_idempotent() {
    let env = env_of(&[
        (RPC_URL_VAR, "https://example.invalid/rpc"),
        (PRIVATE_KEY_VAR, &"a".repeat(64)),
        (API_KEY_VAR, "explorer-key"),
    ]);
    let first = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap();
    let second = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap();

    assert_eq!(first.compiler, second.compiler);
    assert_eq!(first.explorer, second.explorer);
    assert_eq!(first.test_runner, second.test_runner);
    assert_eq!(
        first.networks.keys().collect::<Vec<_>>(),
        second.networks.keys().collect::<Vec<_>>()
    );
    for (name, profile) in &first.networks {
        let other = &second.networks[name];
        assert_eq!(profile.rpc_url, other.rpc_url);
        assert_eq!(profile.chain_id, other.chain_id);
        assert_eq!(profile.signing_key, other.signing_key);
    }
}

#[test]
fn compiler_settings_ignore_the_environment() {
    let from_empty = EnvResolver::resolve(&HashMap::new(), ResolutionMode::Partial)
        .unwrap()
        .compiler;
    let from_valid = EnvResolver::resolve(&valid_env(), ResolutionMode::FailFast)
        .unwrap()
        .compiler;

    assert_eq!(from_empty, from_valid);
    assert_eq!(from_valid.version, "0.8.13");
    assert!(from_valid.optimizer.enabled);
    assert_eq!(from_valid.optimizer.runs, 200);
    assert!(from_valid.metadata.use_literal_content);
}

#[test]
fn shared_api_key_applies_to_verified_networks() {
    let mut env = valid_env();
    env.insert(API_KEY_VAR.to_string(), "shared-key".to_string());

    let config = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap();
    assert_eq!(config.explorer.key_for("avalanche"), Some("shared-key"));
    assert_eq!(config.explorer.key_for("fuji"), Some("shared-key"));
}

#[test]
fn per_network_overrides_beat_shared_variables() {
    let mut env = valid_env();
    env.insert("FUJI_RPC_URL".to_string(), "https://fuji.example/rpc".to_string());
    env.insert("FUJI_PRIVATEKEY".to_string(), "b".repeat(64));
    env.insert(API_KEY_VAR.to_string(), "shared-key".to_string());
    env.insert("FUJI_APIKEY".to_string(), "fuji-key".to_string());

    let config = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap();

    let fuji = &config.networks["fuji"];
    assert_eq!(fuji.rpc_url, "https://fuji.example/rpc");
    assert_eq!(
        fuji.signing_key.as_ref().unwrap().reveal(),
        format!("0x{}", "b".repeat(64))
    );

    // Other networks keep the shared values.
    let avalanche = &config.networks["avalanche"];
    assert_eq!(avalanche.rpc_url, "https://example.invalid/rpc");
    assert_eq!(
        avalanche.signing_key.as_ref().unwrap().reveal(),
        format!("0x{}", "a".repeat(64))
    );

    assert_eq!(config.explorer.key_for("fuji"), Some("fuji-key"));
    assert_eq!(config.explorer.key_for("avalanche"), Some("shared-key"));
}

#[test]
fn partial_mode_keeps_compile_only_configuration() {
    // Shared credentials are broken; only fuji carries working overrides.
    let env = env_of(&[
        ("FUJI_RPC_URL", "https://fuji.example/rpc"),
        ("FUJI_PRIVATEKEY", &"c".repeat(64)),
    ]);

    let config = EnvResolver::resolve(&env, ResolutionMode::Partial).unwrap();

    assert_eq!(config.networks.len(), 1);
    assert!(config.networks.contains_key("fuji"));
    assert_eq!(config.disabled.len(), 2);
    assert!(config.disabled.contains_key("avalanche"));
    assert!(config.disabled.contains_key("sepolia"));

    // Compiler, explorer, and timeout stay usable.
    assert_eq!(config.compiler.version, "0.8.13");
    assert_eq!(config.test_runner.timeout_ms, DEFAULT_TEST_TIMEOUT_MS);
    assert_eq!(config.explorer.key_or_unknown("avalanche"), UNKNOWN_API_KEY);

    // Lookup of a disabled network replays the recorded failure.
    assert!(matches!(
        config.network("avalanche").unwrap_err(),
        ConfigError::MissingRpcUrl { .. }
    ));
    assert!(config.network("fuji").is_ok());
    assert!(matches!(
        config.network("localnet").unwrap_err(),
        ConfigError::UnknownNetwork(_)
    ));
}

#[test]
fn test_timeout_override_is_applied_and_validated() {
    let mut env = valid_env();
    env.insert(TEST_TIMEOUT_VAR.to_string(), "5000".to_string());
    let config = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap();
    assert_eq!(config.test_runner.timeout_ms, 5000);

    env.insert(TEST_TIMEOUT_VAR.to_string(), "soon".to_string());
    let err = EnvResolver::resolve(&env, ResolutionMode::FailFast).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFormat(_)));
}

#[test]
fn resolver_facade_uses_the_selected_mode() {
    let resolver = ConfigResolver::with_mode(ResolutionMode::Partial);
    let config = resolver.resolve(&HashMap::new()).unwrap();
    assert!(config.networks.is_empty());
    assert_eq!(config.disabled.len(), 3);

    let failfast = ConfigResolver::new();
    assert!(failfast.resolve(&HashMap::new()).is_err());
}

#[tokio::test]
async fn saved_configuration_never_contains_key_material() {
    let temp_dir = tempdir().unwrap();
    let toml_path = temp_dir.path().join("chainsmith.toml");
    let json_path = temp_dir.path().join("chainsmith.json");

    let config = EnvResolver::resolve(&valid_env(), ResolutionMode::FailFast).unwrap();
    FileLoader::save_toml(&config, &toml_path).await.unwrap();
    FileLoader::save_json(&config, &json_path).await.unwrap();

    let secret = "a".repeat(64);
    let toml_text = std::fs::read_to_string(&toml_path).unwrap();
    let json_text = std::fs::read_to_string(&json_path).unwrap();
    assert!(!toml_text.contains(&secret));
    assert!(!json_text.contains(&secret));
    assert!(!toml_text.contains("signing_key"));

    // A saved file loads back, minus credentials, which are re-resolved
    // from the environment.
    let reloaded = FileLoader::load_auto(&toml_path).await.unwrap();
    assert_eq!(reloaded.compiler, config.compiler);
    assert_eq!(reloaded.networks.len(), 3);
    assert!(reloaded.networks.values().all(|n| !n.can_sign()));
}

/// Serialized TOML drops explorer entries with no key, so the loader
/// must restore coverage for verification networks: a config the tool
/// wrote itself has to survive a full comprehensive re-check.
#[tokio::test]
async fn reloaded_configuration_stays_comprehensively_valid() {
    let temp_dir = tempdir().unwrap();
    let toml_path = temp_dir.path().join("chainsmith.toml");

    // Resolved without APIKEY: verification networks carry explicit
    // absent-key entries.
    let config = EnvResolver::resolve(&valid_env(), ResolutionMode::FailFast).unwrap();
    ConfigValidator::validate_comprehensive(&config).unwrap();

    FileLoader::save_toml(&config, &toml_path).await.unwrap();
    let reloaded = FileLoader::load_auto(&toml_path).await.unwrap();

    ConfigValidator::validate_comprehensive(&reloaded).unwrap();
    assert!(reloaded.explorer.covers("avalanche"));
    assert!(reloaded.explorer.covers("fuji"));
    assert_eq!(reloaded.explorer.key_for("avalanche"), None);
    assert_eq!(reloaded.explorer.key_or_unknown("fuji"), UNKNOWN_API_KEY);
}

#[tokio::test]
async fn file_loader_reports_missing_and_malformed_files() {
    let result = FileLoader::load_auto("/path/that/does/not/exist/chainsmith.toml").await;
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

    let temp_dir = tempdir().unwrap();
    let bad_path = temp_dir.path().join("broken.toml");
    std::fs::write(&bad_path, "invalid toml syntax [[[").unwrap();
    assert!(FileLoader::load_toml(&bad_path).await.is_err());
}

#[tokio::test]
async fn file_loaded_configuration_accepts_signing_keys_for_overrides() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("override.toml");

    let content = format!(
        r#"
[compiler]
version = "0.8.13"

[compiler.optimizer]
enabled = true
runs = 200

[compiler.metadata]
use_literal_content = true

[networks.fuji]
name = "fuji"
rpc_url = "https://fuji.example/rpc"
chain_id = 43113
signing_key = "{}"

[explorer.api_keys]
fuji = "verify-key"

[test_runner]
timeout_ms = 100000000
"#,
        "d".repeat(64)
    );
    std::fs::write(&path, content).unwrap();

    let config = FileLoader::load_toml(&path).await.unwrap();
    let fuji = &config.networks["fuji"];
    assert!(fuji.can_sign());
    assert_eq!(
        fuji.signing_key.as_ref().unwrap().reveal(),
        format!("0x{}", "d".repeat(64))
    );
}
