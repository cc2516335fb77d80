use eyre::Result;
use seat_hold_core::SeatStatus;
use seat_hold_tests::TestCtxBuilder;

#[test]
#[ntest::timeout(20_000)] // Test timeout in ms
fn test_lock_and_confirm_one_seat() -> Result<()> {
    let ctx = TestCtxBuilder::new().build();

    // Every seat starts out available
    let seats = ctx.api.list_seats();
    assert_eq!(seats.len(), 5, "All five seats must be listed.");
    assert!(
        seats.iter().all(|s| s.status == SeatStatus::Available),
        "Every seat must start out available."
    );

    // Lock one seat and confirm it
    let locked = ctx.api.lock("1", Some("alice"))?;
    assert_eq!(locked.id, "1");
    assert_eq!(locked.status, SeatStatus::Locked);

    let booked = ctx.api.confirm("1", Some("alice"))?;
    assert_eq!(booked.status, SeatStatus::Booked);

    assert_eq!(ctx.api.list_seats()[0].status, SeatStatus::Booked);

    // Finish the test
    ctx.finish();
    Ok(())
}
