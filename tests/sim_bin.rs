use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .env("BATTLESHIP_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert!(v["rounds"].as_u64().unwrap() >= 1);
}

#[test]
fn sim_binary_rejects_missing_seeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["11", "12"])
            .env("BATTLESHIP_LOG", "off")
            .output()
            .expect("failed to run sim binary")
    };
    let (a, b) = (run(), run());
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
    let v: serde_json::Value = serde_json::from_slice(&a.stdout).expect("invalid json");
    let loser_remaining = if v["winner"] == "player1" {
        &v["player2"]["remaining"]
    } else {
        &v["player1"]["remaining"]
    };
    assert_eq!(loser_remaining.as_u64(), Some(0));
}
