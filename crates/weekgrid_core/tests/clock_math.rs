use weekgrid_core::{
    block_to_clock, clock_to_block, ClockError, ClockTime, BLOCKS_PER_CLOCK_DAY,
    DEFAULT_WAKE_OFFSET,
};

#[test]
fn block_to_clock_follows_wake_offset() {
    let time = block_to_clock(3, DEFAULT_WAKE_OFFSET);
    assert_eq!(
        time,
        ClockTime {
            hour12: 5,
            minute: 45,
            is_am: true
        }
    );
}

#[test]
fn midnight_and_noon_use_twelve() {
    let midnight = block_to_clock(0, 0);
    assert_eq!((midnight.hour12, midnight.minute, midnight.is_am), (12, 0, true));

    let noon = block_to_clock(48, 0);
    assert_eq!((noon.hour12, noon.minute, noon.is_am), (12, 0, false));

    assert_eq!(block_to_clock(52, 0).to_string(), "1:00 PM");
}

#[test]
fn block_to_clock_wraps_past_midnight() {
    // 11:45 PM plus one block
    let time = block_to_clock(1, 95);
    assert_eq!(time.to_string(), "12:00 AM");
    assert_eq!(block_to_clock(2 * BLOCKS_PER_CLOCK_DAY + 4, 0).to_string(), "1:00 AM");
}

#[test]
fn clock_to_block_inverts_block_to_clock_over_the_whole_day() {
    for index in 0..BLOCKS_PER_CLOCK_DAY {
        let time = block_to_clock(index, 0);
        let back = clock_to_block(time.hour12, time.minute, time.is_am).unwrap();
        assert_eq!(back, index, "round trip failed for {time}");
    }
}

#[test]
fn clock_to_block_normalizes_twelve_o_clock() {
    assert_eq!(clock_to_block(12, 0, true).unwrap(), 0);
    assert_eq!(clock_to_block(12, 0, false).unwrap(), 48);
    assert_eq!(clock_to_block(5, 0, true).unwrap(), DEFAULT_WAKE_OFFSET);
    assert_eq!(clock_to_block(7, 30, false).unwrap(), 78);
}

#[test]
fn clock_to_block_rejects_invalid_readings() {
    assert_eq!(clock_to_block(0, 0, true), Err(ClockError::InvalidHour(0)));
    assert_eq!(clock_to_block(13, 0, true), Err(ClockError::InvalidHour(13)));
    assert_eq!(clock_to_block(5, 10, true), Err(ClockError::InvalidMinute(10)));
    assert_eq!(clock_to_block(5, 60, true), Err(ClockError::InvalidMinute(60)));
}

#[test]
fn clock_time_parses_display_form() {
    let time = "7:30 PM".parse::<ClockTime>().unwrap();
    assert_eq!(time.block_index(), 78);
    assert_eq!(time.to_string(), "7:30 PM");

    assert_eq!("12:15am".parse::<ClockTime>().unwrap().block_index(), 1);
    assert!(matches!(
        "7 PM".parse::<ClockTime>(),
        Err(ClockError::Unparseable(_))
    ));
    assert!(matches!(
        "19:30".parse::<ClockTime>(),
        Err(ClockError::Unparseable(_))
    ));
}
