use std::thread::sleep;
use std::time::Duration;

use eyre::Result;
use seat_hold_core::SeatStatus;
use seat_hold_tests::TestCtxBuilder;

#[test]
#[ntest::timeout(20_000)]
fn test_lock_expires_lazily() -> Result<()> {
    let ctx = TestCtxBuilder::new()
        .with_lock_ttl(Duration::from_millis(300))
        .build();

    ctx.api.lock("1", Some("alice"))?;

    // well before the deadline the lock must still be in place
    sleep(Duration::from_millis(50));
    assert_eq!(
        ctx.api.list_seats()[0].status,
        SeatStatus::Locked,
        "A lock must never be released before its TTL."
    );

    sleep(Duration::from_millis(350));
    assert_eq!(
        ctx.api.list_seats()[0].status,
        SeatStatus::Available,
        "An expired lock must be observed as available."
    );

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(20_000)]
fn test_expired_lock_is_not_confirmable() -> Result<()> {
    let ctx = TestCtxBuilder::new()
        .with_lock_ttl(Duration::from_millis(100))
        .build();

    ctx.api.lock("2", Some("alice"))?;
    sleep(Duration::from_millis(200));

    // the seat is reconciled before the confirm is considered, so this is a
    // confirm on an available seat
    let err = ctx.api.confirm("2", Some("alice")).unwrap_err();
    assert_eq!(err.status, 400, "An expired lock must not be confirmable.");

    // and the freed seat can be locked by someone else
    let locked = ctx.api.lock("2", Some("bob"))?;
    assert_eq!(locked.status, SeatStatus::Locked);

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(20_000)]
fn test_expiry_with_sweeper_enabled() -> Result<()> {
    let ctx = TestCtxBuilder::new()
        .with_lock_ttl(Duration::from_millis(100))
        .with_sweep()
        .build();

    ctx.api.lock("1", Some("alice"))?;
    sleep(Duration::from_millis(300));

    assert_eq!(
        ctx.api.list_seats()[0].status,
        SeatStatus::Available,
        "The seat must be free after its deadline, sweeper or not."
    );

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(20_000)]
fn test_sweep_never_reverts_a_booking() -> Result<()> {
    let ctx = TestCtxBuilder::new()
        .with_lock_ttl(Duration::from_millis(100))
        .with_sweep()
        .build();

    ctx.api.lock("1", Some("alice"))?;
    ctx.api.confirm("1", Some("alice"))?;

    // let the original lock deadline pass with the sweeper running
    sleep(Duration::from_millis(300));

    assert_eq!(
        ctx.api.list_seats()[0].status,
        SeatStatus::Booked,
        "A confirmed seat must survive its stale lock deadline."
    );
    let err = ctx.api.lock("1", Some("bob")).unwrap_err();
    assert_eq!(err.status, 409);

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(20_000)]
fn test_seat_released_after_expiry_can_cycle_again() -> Result<()> {
    let ctx = TestCtxBuilder::new()
        .with_lock_ttl(Duration::from_millis(100))
        .build();

    ctx.api.lock("5", Some("alice"))?;
    sleep(Duration::from_millis(200));

    // full second life of the seat: lock and confirm by a new holder
    ctx.api.lock("5", Some("bob"))?;
    let booked = ctx.api.confirm("5", Some("bob"))?;
    assert_eq!(booked.status, SeatStatus::Booked);

    ctx.finish();
    Ok(())
}
