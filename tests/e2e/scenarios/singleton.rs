use crate::harness::{
    mock, same_context, AType, Relay, StaticGlobal, StaticIdempotent, StaticReset,
    StaticThreads, World, DISTANT_PAST,
};
use corridor_core::{registry, with_context, with_static_context, HasStaticContext};
use std::sync::Arc;
use std::thread;

#[test]
fn test_static_swap_is_global() {
    with_static_context::<StaticGlobal>(mock());

    assert_eq!(StaticGlobal::name(), "mock");
    assert_eq!(StaticGlobal::nested().now(), DISTANT_PAST);

    // Instances keep their own binding
    assert_eq!(AType::default().name(), "live");
}

#[test]
fn test_static_swap_is_seen_from_other_threads() {
    with_static_context::<StaticThreads>(mock());

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| (StaticThreads::name(), StaticThreads::nested().now())))
        .collect();

    for handle in handles {
        let (name, now) = handle.join().unwrap();
        assert_eq!(name, "mock");
        assert_eq!(now, DISTANT_PAST);
    }
}

#[test]
fn test_reset_restores_default() {
    with_static_context::<StaticReset>(mock());
    assert_eq!(StaticReset::name(), "mock");

    StaticReset::resolver().reset();

    assert!(!registry::is_bound::<StaticReset>());
    assert_eq!(StaticReset::name(), "live");
    assert!(registry::is_bound::<StaticReset>());
}

#[test]
fn test_static_swap_is_idempotent() {
    let ctx: Arc<dyn World> = mock();
    with_static_context::<StaticIdempotent>(Arc::clone(&ctx));
    with_static_context::<StaticIdempotent>(Arc::clone(&ctx));

    assert!(same_context(&StaticIdempotent::resolver().context(), &ctx));
}

#[test]
fn test_singleton_address_rebinds_through_parent() {
    let ctx: Arc<dyn World> = mock();
    let root = with_context(AType::default(), Arc::clone(&ctx));

    let _relay: Relay = root.relay();

    assert_eq!(Relay::name(), "mock");
    assert!(same_context(&Relay::resolver().context(), &ctx));
}
