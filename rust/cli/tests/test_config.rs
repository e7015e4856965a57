//! Configuration precedence: defaults < `DRAWPOKER_CONFIG` file < env vars.
//!
//! Every test here touches process environment, so all of them run serially.

use serial_test::serial;
use std::io::Write;

const KEYS: &[&str] = &[
    "DRAWPOKER_CONFIG",
    "DRAWPOKER_STARTING_STACK",
    "DRAWPOKER_ANTE",
    "DRAWPOKER_BET",
    "DRAWPOKER_SEED",
    "DRAWPOKER_AI",
];

struct EnvGuard {
    restores: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Clears every config variable, then applies `pairs`.
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let restores = KEYS.iter().map(|k| (*k, std::env::var(k).ok())).collect();
        for key in KEYS {
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in &self.restores {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = drawpoker_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> serde_json::Value {
    let (code, out, err) = run(&["drawpoker", "cfg"]);
    assert_eq!(code, 0, "stderr: {}", err);
    serde_json::from_str(&out).unwrap()
}

fn config_file(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    f.write_all(body.as_bytes()).unwrap();
    f
}

#[test]
#[serial]
fn defaults_without_env() {
    let _g = EnvGuard::apply(&[]);
    let v = cfg_json();
    assert_eq!(v["starting_stack"]["value"], 1000);
    assert_eq!(v["ante"]["value"], 10);
    assert_eq!(v["bet"]["value"], 20);
    assert!(v["seed"]["value"].is_null());
    assert_eq!(v["ai"]["value"], "baseline");
    assert_eq!(v["ante"]["source"], "default");
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let file = config_file("ante = 5\nbet = 15\nai = \"passive\"\n");
    let path = file.path().to_string_lossy().to_string();
    let _g = EnvGuard::apply(&[("DRAWPOKER_CONFIG", &path)]);

    let v = cfg_json();
    assert_eq!(v["ante"]["value"], 5);
    assert_eq!(v["ante"]["source"], "file");
    assert_eq!(v["bet"]["value"], 15);
    assert_eq!(v["ai"]["value"], "passive");
    assert_eq!(v["starting_stack"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let file = config_file("ante = 5\n");
    let path = file.path().to_string_lossy().to_string();
    let _g = EnvGuard::apply(&[("DRAWPOKER_CONFIG", &path), ("DRAWPOKER_ANTE", "7")]);

    let v = cfg_json();
    assert_eq!(v["ante"]["value"], 7);
    assert_eq!(v["ante"]["source"], "env");
}

#[test]
#[serial]
fn env_seed_is_used_by_deal() {
    let _g = EnvGuard::apply(&[("DRAWPOKER_SEED", "5")]);
    let (code, out, _) = run(&["drawpoker", "deal"]);
    assert_eq!(code, 0);
    assert!(out.contains("Seed: 5"));

    let (_, explicit, _) = run(&["drawpoker", "deal", "--seed", "6"]);
    assert!(explicit.contains("Seed: 6"));
}

#[test]
#[serial]
fn configured_stakes_reach_the_session() {
    let _g = EnvGuard::apply(&[("DRAWPOKER_ANTE", "25"), ("DRAWPOKER_AI", "passive")]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("r.jsonl");
    let path_str = path.to_string_lossy().to_string();
    let (code, _, err) = run(&[
        "drawpoker", "sim", "--rounds", "2", "--seed", "1", "--output", &path_str,
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    let first = std::fs::read_to_string(&path).unwrap();
    let rec: serde_json::Value = serde_json::from_str(first.lines().next().unwrap()).unwrap();
    assert_eq!(rec["ante"], 25);
}

#[test]
#[serial]
fn non_numeric_env_value_fails() {
    let _g = EnvGuard::apply(&[("DRAWPOKER_BET", "abc")]);
    let (code, _, err) = run(&["drawpoker", "cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid DRAWPOKER_BET: 'abc'"));
}

#[test]
#[serial]
fn unknown_file_key_fails() {
    let file = config_file("blinds = 3\n");
    let path = file.path().to_string_lossy().to_string();
    let _g = EnvGuard::apply(&[("DRAWPOKER_CONFIG", &path)]);
    let (code, _, err) = run(&["drawpoker", "cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn missing_file_fails() {
    let _g = EnvGuard::apply(&[("DRAWPOKER_CONFIG", "/nonexistent/drawpoker.toml")]);
    let (code, _, err) = run(&["drawpoker", "deal", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
}

#[test]
#[serial]
fn ante_above_stack_fails() {
    let _g = EnvGuard::apply(&[("DRAWPOKER_STARTING_STACK", "5")]);
    let (code, _, err) = run(&["drawpoker", "cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}

#[test]
#[serial]
fn unknown_ai_fails() {
    let _g = EnvGuard::apply(&[("DRAWPOKER_AI", "shark")]);
    let (code, _, err) = run(&["drawpoker", "sim", "--rounds", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("unknown ai 'shark'"));
}
