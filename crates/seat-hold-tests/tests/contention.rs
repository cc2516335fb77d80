use std::thread;

use eyre::Result;
use seat_hold_core::SeatStatus;
use seat_hold_tests::TestCtxBuilder;

#[test]
#[ntest::timeout(20_000)]
fn test_exactly_one_winner_per_seat() -> Result<()> {
    let ctx = TestCtxBuilder::new().build();

    let successes: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let api = &ctx.api;
                s.spawn(move || {
                    let holder = format!("holder_{i}");
                    api.lock("3", Some(&holder)).is_ok() as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(successes, 1, "Exactly one racing holder may win the lock.");
    assert_eq!(ctx.api.list_seats()[2].status, SeatStatus::Locked);

    ctx.finish();
    Ok(())
}

#[test]
#[ntest::timeout(20_000)]
fn test_disjoint_seats_do_not_interfere() -> Result<()> {
    let ctx = TestCtxBuilder::new().build();

    thread::scope(|s| {
        for i in 1..=5u32 {
            let api = &ctx.api;
            s.spawn(move || {
                let seat = i.to_string();
                let holder = format!("holder_{i}");
                api.lock(&seat, Some(&holder)).expect("seat is uncontended");
                api.confirm(&seat, Some(&holder))
                    .expect("own lock is confirmable");
            });
        }
    });

    assert!(
        ctx.api
            .list_seats()
            .iter()
            .all(|seat| seat.status == SeatStatus::Booked),
        "Every seat must end up booked."
    );

    ctx.finish();
    Ok(())
}
