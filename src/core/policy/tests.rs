use super::*;
use crate::testing::MemorySink;

fn policy_with(verbosity: Verbosity) -> (ExecutionPolicy, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let policy = ExecutionPolicy::with_sink(
        PolicyFlags {
            verbosity,
            ..Default::default()
        },
        sink.clone(),
    );
    (policy, sink)
}

#[test]
fn test_verbosity_from_flags_prefers_most_verbose() {
    assert_eq!(Verbosity::from_flags(false, false, false), Verbosity::Normal);
    assert_eq!(Verbosity::from_flags(true, false, false), Verbosity::Quiet);
    assert_eq!(Verbosity::from_flags(false, true, false), Verbosity::Verbose);
    assert_eq!(Verbosity::from_flags(false, true, true), Verbosity::Debug);
}

#[test]
fn test_quiet_keeps_errors_only() {
    let (policy, sink) = policy_with(Verbosity::Quiet);

    policy.debug("d");
    policy.info("i");
    policy.warning("w");
    policy.echo("echo hello");
    policy.error("e");

    assert_eq!(sink.messages(), vec![(Level::Error, "e".to_string())]);
    assert!(sink.commands().is_empty());
}

#[test]
fn test_normal_hides_info_and_debug() {
    let (policy, sink) = policy_with(Verbosity::Normal);

    policy.debug("d");
    policy.info("i");
    policy.warning("w");
    policy.echo("echo hello");

    assert_eq!(sink.messages(), vec![(Level::Warning, "w".to_string())]);
    assert_eq!(sink.commands(), vec!["echo hello".to_string()]);
}

#[test]
fn test_debug_shows_everything() {
    let (policy, sink) = policy_with(Verbosity::Debug);

    policy.debug("d");
    policy.info("i");

    assert_eq!(sink.messages().len(), 2);
}

#[test]
fn test_setters_are_visible_to_all_holders() {
    let policy = ExecutionPolicy::default().shared();
    let other = Arc::clone(&policy);

    assert!(!other.dry_run());
    policy.set_dry_run(true);
    assert!(other.dry_run());

    policy.set_verbosity(Verbosity::Quiet);
    assert!(other.quiet());
}

#[test]
fn test_always_sudo_latch_flips_once() {
    let policy = ExecutionPolicy::default();

    assert!(!policy.always_sudo());
    assert!(policy.latch_always_sudo());
    assert!(!policy.latch_always_sudo());
    assert!(policy.always_sudo());
}

#[test]
fn test_interrupt_turns_into_abort() {
    let policy = ExecutionPolicy::default();
    assert!(policy.check_interrupted().is_ok());

    policy.mark_interrupted();
    let err = policy.check_interrupted().unwrap_err();
    assert!(err.is_abort());
}
