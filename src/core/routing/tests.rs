use super::*;
use BackendKind::{Apt, Brew, Cargo, Pip};

fn capable(kinds: &[BackendKind]) -> impl FnMut(BackendKind) -> bool + '_ {
    move |kind| kinds.contains(&kind)
}

#[test]
fn test_default_priority_is_apt_cargo_pip() {
    let priority = BackendPriority::default();
    assert_eq!(priority.iter().collect::<Vec<_>>(), vec![Apt, Cargo, Pip]);
    assert!(!priority.contains(Brew));
    assert_eq!(priority.rank(Cargo), Some(1));
    assert_eq!(priority.rank(Brew), None);
}

#[test]
fn test_no_pref_picks_apt_over_cargo() {
    let chosen = choose_backend(&[], &BackendPriority::default(), capable(&[Cargo, Apt]));
    assert_eq!(chosen, Some(Apt));
}

#[test]
fn test_pref_order_wins_over_priority() {
    let chosen = choose_backend(
        &[Cargo, Apt],
        &BackendPriority::default(),
        capable(&[Apt, Cargo]),
    );
    assert_eq!(chosen, Some(Cargo));
}

#[test]
fn test_pref_skips_incapable_backends() {
    let chosen = choose_backend(&[Brew, Pip], &BackendPriority::default(), capable(&[Pip]));
    assert_eq!(chosen, Some(Pip));
}

#[test]
fn test_brew_needs_explicit_pref() {
    let priority = BackendPriority::default();
    assert_eq!(choose_backend(&[], &priority, capable(&[Brew])), None);
    assert_eq!(choose_backend(&[Brew], &priority, capable(&[Brew])), Some(Brew));
}

#[test]
fn test_unusable_pref_falls_back_to_priority() {
    let chosen = choose_backend(&[Brew], &BackendPriority::default(), capable(&[Pip]));
    assert_eq!(chosen, Some(Pip));
}

#[test]
fn test_nothing_capable_is_unroutable() {
    assert_eq!(
        choose_backend(&[Cargo], &BackendPriority::default(), capable(&[])),
        None
    );
}

#[test]
fn test_priority_parse_and_display() {
    let priority: BackendPriority = "pip, brew,pip,apt".parse().unwrap();
    assert_eq!(priority.iter().collect::<Vec<_>>(), vec![Pip, Brew, Apt]);
    assert_eq!(priority.to_string(), "pip,brew,apt");
}

#[test]
fn test_priority_parse_rejects_unknown_and_empty() {
    assert!("apt,nix".parse::<BackendPriority>().is_err());
    assert!(" , ".parse::<BackendPriority>().is_err());
}
