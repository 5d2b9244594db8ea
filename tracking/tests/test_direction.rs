use tracking::direction::{classify, LightReading, SunDirection, LDR_THRESHOLD};

// ── Deadband classification ──

#[test]
fn east_when_diff_exceeds_threshold() {
    assert_eq!(classify(2000, 1700, LDR_THRESHOLD), SunDirection::East);
    assert_eq!(classify(151, 0, LDR_THRESHOLD), SunDirection::East);
    assert_eq!(classify(4095, 0, LDR_THRESHOLD), SunDirection::East);
}

#[test]
fn west_when_diff_below_negative_threshold() {
    assert_eq!(classify(1700, 2000, LDR_THRESHOLD), SunDirection::West);
    assert_eq!(classify(0, 151, LDR_THRESHOLD), SunDirection::West);
    assert_eq!(classify(0, 4095, LDR_THRESHOLD), SunDirection::West);
}

#[test]
fn overhead_inside_deadband() {
    assert_eq!(classify(1000, 1000, LDR_THRESHOLD), SunDirection::Overhead);
    assert_eq!(classify(1150, 1000, LDR_THRESHOLD), SunDirection::Overhead);
    assert_eq!(classify(1000, 1150, LDR_THRESHOLD), SunDirection::Overhead);
    assert_eq!(classify(0, 0, LDR_THRESHOLD), SunDirection::Overhead);
}

#[test]
fn threshold_itself_is_overhead() {
    // The deadband is inclusive on both edges: only a strict excess flips.
    assert_eq!(classify(150, 0, 150), SunDirection::Overhead);
    assert_eq!(classify(0, 150, 150), SunDirection::Overhead);
    assert_eq!(classify(151, 0, 150), SunDirection::East);
    assert_eq!(classify(0, 151, 150), SunDirection::West);
}

#[test]
fn classification_sweep_over_imbalance() {
    for diff in -400..=400 {
        let got = classify(2000 + diff, 2000, LDR_THRESHOLD);
        let expected = if diff > LDR_THRESHOLD {
            SunDirection::East
        } else if diff < -LDR_THRESHOLD {
            SunDirection::West
        } else {
            SunDirection::Overhead
        };
        assert_eq!(got, expected, "diff={}", diff);
    }
}

#[test]
fn injected_threshold_is_honored() {
    // A zero deadband classifies any strict imbalance.
    assert_eq!(classify(1001, 1000, 0), SunDirection::East);
    assert_eq!(classify(1000, 1001, 0), SunDirection::West);
    assert_eq!(classify(1000, 1000, 0), SunDirection::Overhead);

    // A wide deadband swallows what the default would classify.
    assert_eq!(classify(2000, 1700, 500), SunDirection::Overhead);
}

#[test]
fn stateless_repeat_reads_agree() {
    let first = classify(2100, 1940, LDR_THRESHOLD);
    for _ in 0..10 {
        assert_eq!(classify(2100, 1940, LDR_THRESHOLD), first);
    }
}

// ── Reading helper ──

#[test]
fn reading_diff_is_signed_east_minus_west() {
    assert_eq!(LightReading { east: 2000, west: 1700 }.diff(), 300);
    assert_eq!(LightReading { east: 1700, west: 2000 }.diff(), -300);
    assert_eq!(LightReading { east: 0, west: 0 }.diff(), 0);
}

// ── Wire ordinals ──

#[test]
fn ordinals_match_wire_format() {
    assert_eq!(SunDirection::East.ordinal(), 0);
    assert_eq!(SunDirection::Overhead.ordinal(), 1);
    assert_eq!(SunDirection::West.ordinal(), 2);
}
