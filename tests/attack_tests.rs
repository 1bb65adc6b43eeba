use rstest::rstest;
use shiftbreak::attack::{brute_force, frequency_attack, ranked_candidates, ranked_candidates_with};
use shiftbreak::cipher::{decode, encode};
use shiftbreak::scorer::english_score;

const PANGRAM: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

#[test]
fn test_frequency_attack_recovers_pangram() {
    let ciphertext = encode(PANGRAM, 7);
    let best = frequency_attack(&ciphertext, english_score).expect("letters present");
    assert_eq!(best.shift, 7);
    assert_eq!(best.text, PANGRAM);
}

#[rstest]
#[case("")]
#[case("KHOOR ZRUOG")]
#[case("12 34 !?")]
fn test_brute_force_completeness(#[case] ciphertext: &str) {
    let all = brute_force(ciphertext);
    assert_eq!(all.len(), 26);
    for (i, c) in all.iter().enumerate() {
        assert_eq!(c.shift as usize, i);
        assert_eq!(c.text, decode(ciphertext, i as i64));
    }
}

#[test]
fn test_frequency_attack_first_shift_wins_ties() {
    // Only shifts 4 and 9 reach the top score; the lower one must win.
    let best = frequency_attack("ABC", |t| {
        if t == decode("ABC", 4) || t == decode("ABC", 9) {
            10.0
        } else {
            0.0
        }
    })
    .unwrap();
    assert_eq!(best.shift, 4);
}

#[test]
fn test_frequency_attack_never_replaces_with_equal_score() {
    let best = frequency_attack("QRS", |_| -5.0).unwrap();
    assert_eq!(best.shift, 0);
}

#[test]
fn test_ranked_candidates_sorted_with_shift_tie_break() {
    let ciphertext = encode("MEETMEATTHEOLDBRIDGEATNOON", 19);
    let ranked = ranked_candidates(&ciphertext, 26);
    assert_eq!(ranked.len(), 26);
    assert_eq!(ranked[0].shift, 19);
    for pair in ranked.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].shift < pair[1].shift),
            "out of order: {:?} then {:?}",
            (pair[0].shift, pair[0].score),
            (pair[1].shift, pair[1].score)
        );
    }
}

#[test]
fn test_ranked_prefix_property() {
    let ciphertext = encode(PANGRAM, 3);
    let all = ranked_candidates(&ciphertext, 26);
    let top = ranked_candidates(&ciphertext, 5);
    assert_eq!(top.as_slice(), &all[..5]);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(26, 26)]
#[case(100, 26)]
fn test_top_n_bounds(#[case] top_n: usize, #[case] expected: usize) {
    assert_eq!(ranked_candidates("WKLV LV D WHVW", top_n).len(), expected);
}

#[test]
fn test_constant_scorer_ranks_by_shift() {
    let ranked = ranked_candidates_with("ANY TEXT", 26, |_| 1.0);
    let shifts: Vec<u8> = ranked.iter().map(|c| c.shift).collect();
    assert_eq!(shifts, (0..26).collect::<Vec<u8>>());
}

#[test]
fn test_unscoreable_ciphertext_ranks_in_shift_order() {
    let ranked = ranked_candidates("", 26);
    assert!(ranked.iter().all(|c| c.score == f64::NEG_INFINITY));
    assert_eq!(ranked[0].shift, 0);
    assert_eq!(ranked[25].shift, 25);
}

#[test]
fn test_ranked_scores_match_english_score() {
    let ciphertext = encode(PANGRAM, 11);
    for c in ranked_candidates(&ciphertext, 26) {
        assert_eq!(c.text, decode(&ciphertext, c.shift as i64));
        assert_eq!(c.score, english_score(&c.text));
    }
}
