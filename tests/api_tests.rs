use shiftbreak::api::{crack, render_demo, run_demo, write_report, DemoRequest};
use shiftbreak::config::{AttackParams, ShiftParams};
use shiftbreak::error::ShiftBreakError;

fn request(shift: i64, attack: bool) -> DemoRequest {
    DemoRequest {
        cipher: "caesar".to_string(),
        shift: ShiftParams {
            shift,
            strict: false,
        },
        attack: attack.then(AttackParams::default),
    }
}

#[test]
fn test_demo_cleans_then_encrypts() {
    let report = run_demo("  Hello, World!\n", &request(3, false)).unwrap();
    assert_eq!(report.plaintext, "HELLO WORLD");
    assert_eq!(report.ciphertext, "KHOOR ZRUOG");
    assert!(report.attack.is_none());

    let text = render_demo(&report);
    assert_eq!(text, "=== ENCRYPTED MESSAGE ===\nKHOOR ZRUOG\n");
}

#[test]
fn test_demo_with_attack_renders_sections() {
    let report = run_demo(
        "The quick brown fox jumps over the lazy dog.",
        &request(7, true),
    )
    .unwrap();
    let attack = report.attack.as_ref().unwrap();
    assert_eq!(attack.brute_force.len(), 26);
    assert_eq!(attack.ranked.len(), 5);
    assert_eq!(attack.best.as_ref().unwrap().shift, 7);
    assert_eq!(attack.ranked[0].text, "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG");

    let text = render_demo(&report);
    assert!(text.contains("=== BRUTE FORCE ATTACK RESULTS ==="));
    assert!(text.contains("Shift  7: THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG"));
    assert!(text.contains("=== TOP 5 FREQUENCY ANALYSIS GUESSES ==="));
    assert!(text.contains("Shift  7 | Score "));
}

#[test]
fn test_demo_rejects_unknown_cipher() {
    let mut req = request(1, false);
    req.cipher = "vigenere".to_string();
    assert!(matches!(
        run_demo("abc", &req),
        Err(ShiftBreakError::UnsupportedCipher(_))
    ));
}

#[test]
fn test_demo_strict_shift() {
    let mut req = request(27, false);
    req.shift.strict = true;
    assert!(matches!(
        run_demo("abc", &req),
        Err(ShiftBreakError::InvalidShiftRange(27))
    ));
}

#[test]
fn test_crack_without_brute_force_listing() {
    let params = AttackParams {
        top_n: 3,
        reference: None,
        brute_force: false,
    };
    let report = crack("WKLV LV D WHVW RI WKH HQJOLVK ODQJXDJH", &params).unwrap();
    assert!(report.brute_force.is_empty());
    assert_eq!(report.ranked.len(), 3);
    assert_eq!(report.best.unwrap().shift, 3);
}

#[test]
fn test_crack_report_serializes() {
    let report = crack("KHOOR", &AttackParams::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["ranked"].as_array().unwrap().len(), 5);
    assert_eq!(json["brute_force"].as_array().unwrap().len(), 26);
}

#[test]
fn test_write_report_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out/deeper");
    let path = write_report(&nested, "report.txt", "hello").unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
}
