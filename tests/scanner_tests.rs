use jit_log_stat::scanner::{scan, EventKind, ScanConfig};
use jit_log_stat::output::stat_to_string;
use pretty_assertions::assert_eq;

const HOTSPOT_LOG: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<hotspot_log version='160 1' process='4242' time_ms='1700000000000'>
<vm_version>
<name>OpenJDK 64-Bit Server VM</name>
</vm_version>
<compilation_log thread='22531'>
<task compile_id='12' method='java.lang.String hashCode ()I' bytes='55' count='5000' iicount='5000' stamp='0.120'>
<phase name='parse' nodes='3' live='3' stamp='0.121'>
</phase>
<task_done success='1' nmsize='472' count='5000' stamp='0.125'/>
</task>
</compilation_log>
<deoptimized thread='22531' reason='unstable_if' pc='0x00007f' compile_id='12' stamp='1.200'>
<jvms bci='27' method='java.lang.String hashCode ()I' bytes='55' count='5000' iicount='5000'/>
<jvms bci='4' method='java.util.HashMap hash (Ljava/lang/Object;)I' bytes='20' count='9000' iicount='9000'/>
</deoptimized>
<uncommon_trap thread='22531' reason='transfer_to_interpreter' action='none' jvmci_mirror_name='Ljava/util/HashMap;.get' stamp='1.300'>
<jvms bci='6' method='java.util.HashMap get (Ljava/lang/Object;)Ljava/lang/Object;' bytes='23' count='8000' iicount='8000'/>
</uncommon_trap>
<uncommon_trap thread='22531' reason='class_check' action='maybe_recompile' stamp='1.400'>
<jvms bci='6' method='java.util.HashMap get (Ljava/lang/Object;)Ljava/lang/Object;' bytes='23' count='8000' iicount='8000'/>
</uncommon_trap>
<deoptimized thread='22531' reason='class_check' pc='0x00008f' compile_id='14' stamp='1.500'>
<jvms bci='27' method='java.lang.String hashCode ()I' bytes='55' count='5000' iicount='5000'/>
</deoptimized>
</hotspot_log>
"#;

fn scan_str(xml: &str) -> jit_log_stat::scanner::ScanOutcome {
    scan(xml.as_bytes(), &ScanConfig::default()).unwrap()
}

#[test]
fn test_hotspot_log() {
    let outcome = scan_str(HOTSPOT_LOG);

    assert_eq!(outcome.stats.deoptimizations, 2);
    assert_eq!(outcome.stats.uncommon_traps, 2);
    assert_eq!(outcome.stats.frames, 5);
    assert!(!outcome.stats.truncated);

    let deopt = outcome.tally(EventKind::Deoptimization);
    assert_eq!(deopt.get("java.lang.String hashCode ()I"), Some(1));
    assert_eq!(deopt.get("java.util.HashMap hash (Ljava/lang/Object;)I"), Some(0));

    // task/@method is outside any event block
    assert_eq!(deopt.len(), 2);

    let traps = outcome.tally(EventKind::UncommonTrap);
    assert_eq!(
        traps.get("java.util.HashMap get (Ljava/lang/Object;)Ljava/lang/Object;"),
        Some(1)
    );
    assert_eq!(traps.get("Ljava/util/HashMap;.get"), Some(0));
}

#[test]
fn test_foo_bar_scenario() {
    let xml = r#"<log>
        <deoptimized><jvms method="foo"/><jvms method="foo"/></deoptimized>
        <deoptimized><jvms method="foo"/><jvms method="foo"/></deoptimized>
        <deoptimized><jvms method="bar"/></deoptimized>
    </log>"#;
    let outcome = scan_str(xml);

    let ranked = outcome.deoptimizations.ranked();
    assert_eq!(stat_to_string(&ranked, false).unwrap(), r#"{"foo":3,"bar":0}"#);
}

#[test]
fn test_count_is_occurrences_minus_one() {
    for occurrences in 1..=6u64 {
        let frames = r#"<jvms method="m"/>"#.repeat(occurrences as usize);
        let xml = format!("<deoptimized>{}</deoptimized>", frames);
        let outcome = scan_str(&xml);

        assert_eq!(outcome.deoptimizations.get("m"), Some(occurrences - 1));
    }
}

#[test]
fn test_empty_document() {
    let outcome = scan_str("<hotspot_log></hotspot_log>");

    assert_eq!(stat_to_string(&outcome.deoptimizations.ranked(), false).unwrap(), "{}");
    assert_eq!(stat_to_string(&outcome.uncommon_traps.ranked(), false).unwrap(), "{}");
}

#[test]
fn test_truncated_log_keeps_earlier_counts() {
    // Cut off inside a jvms start tag
    let cut = HOTSPOT_LOG.find("<jvms bci='27' method='java.lang.String hashCode ()I' bytes='55' count='5000' iicount='5000'/>\n</deoptimized>\n</hotspot_log>").unwrap();
    let truncated = &HOTSPOT_LOG[..cut + 20];

    let outcome = scan_str(truncated);

    assert_eq!(outcome.deoptimizations.get("java.lang.String hashCode ()I"), Some(0));
    assert_eq!(outcome.stats.deoptimizations, 2);
    assert_eq!(outcome.uncommon_traps.len(), 2);
}

#[test]
fn test_trap_attribution_is_additional() {
    let xml = r#"<uncommon_trap reason="transfer_to_interpreter" jvmci_mirror_name="m">
        <jvms method="m"/>
    </uncommon_trap>"#;
    let outcome = scan_str(xml);

    // Once from the element itself, once from the nested frame
    assert_eq!(outcome.uncommon_traps.get("m"), Some(1));
}

#[test]
fn test_events_nested_anywhere() {
    let xml = r#"<a><b><c><deoptimized><jvms method="deep"/></deoptimized></c></b></a>"#;
    let outcome = scan_str(xml);
    assert_eq!(outcome.deoptimizations.get("deep"), Some(0));
}

#[test]
fn test_multiple_roots_tolerated() {
    let xml = r#"<deoptimized><jvms method="x"/></deoptimized><deoptimized><jvms method="x"/></deoptimized>"#;
    let outcome = scan_str(xml);
    assert_eq!(outcome.deoptimizations.get("x"), Some(1));
}

#[test]
fn test_ranked_counts_non_increasing() {
    let outcome = scan_str(HOTSPOT_LOG);

    for tally in [&outcome.deoptimizations, &outcome.uncommon_traps] {
        let counts: Vec<u64> = tally.ranked().values().copied().collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }
}
