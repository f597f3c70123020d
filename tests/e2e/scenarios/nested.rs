use crate::harness::{mock, same_context, wall_millis, AType, Scenario, World, DISTANT_PAST};
use corridor_core::{with_context, HasContext};
use std::sync::Arc;

#[test]
fn test_nested_time_by_context() {
    let before = wall_millis();
    let live = AType::default().nested().now();
    let after = wall_millis();
    assert!(before <= live && live <= after);

    assert_eq!(with_context(AType::default(), mock()).nested().now(), DISTANT_PAST);
}

#[test]
fn test_swap_reaches_every_level() {
    Scenario::new("swap_reaches_every_level")
        .bind_mock()
        .assert_deep_name("mock")
        .assert_deep_now(DISTANT_PAST)
        .assert_shared_context()
        .run()
        .expect("scenario should pass");
}

#[test]
fn test_nested_holds_the_parent_context_instance() {
    let ctx: Arc<dyn World> = mock();
    let root = with_context(AType::default(), Arc::clone(&ctx));
    let nested = root.nested();
    let deep = nested.deep();

    assert!(same_context(nested.resolver().context(), &ctx));
    assert!(same_context(deep.resolver().context(), &ctx));
}

#[test]
fn test_resolved_child_does_not_follow_later_swaps() {
    let root = with_context(AType::default(), mock());
    let nested = root.nested();

    let root = with_context(root, crate::harness::WorldKind::Live.build());

    assert_eq!(nested.now(), DISTANT_PAST);
    assert_ne!(root.nested().now(), DISTANT_PAST);
}
