use tethys_calendar::{
    CalendarError, DayKeyed, HOURS_PER_YEAR, HourOfYear, MonthKeyed, hour_sequence, month_index,
};

#[test]
fn month_keying_preserves_order_for_any_input() {
    let inputs: [[f64; 12]; 3] = [
        [0.0; 12],
        [-3.5, 2.0, 7.1, 0.0, 1e6, -1e-6, 4.0, 4.0, 9.9, 10.0, 11.0, 12.0],
        std::array::from_fn(|i| (i * i) as f64),
    ];
    for input in inputs {
        let keyed = MonthKeyed::from_slice(&input).unwrap();
        let keys: Vec<u8> = keyed.keys().collect();
        assert_eq!(keys, (1..=12).collect::<Vec<u8>>());
        for (i, &v) in input.iter().enumerate() {
            assert_eq!(keyed.get(i as u8 + 1).unwrap(), v, "month {}", i + 1);
        }
    }
}

#[test]
fn month_keying_rejects_partial_year() {
    let err = MonthKeyed::from_slice(&[1.0; 6]).unwrap_err();
    assert_eq!(err, CalendarError::Shape { expected: 12, got: 6 });
}

#[test]
fn gather_over_full_year_matches_per_hour_lookup() {
    let keyed = MonthKeyed::from_fn(|m| 100.0 + m as f64);
    let dense = keyed.gather(&month_index()).unwrap();
    assert_eq!(dense.len(), HOURS_PER_YEAR);
    for h in hour_sequence() {
        assert_eq!(dense[h.index()], keyed.get(h.month()).unwrap());
    }
}

#[test]
fn day_keying_round_trips_hour_days() {
    let values: Vec<u16> = (1..=365).collect();
    let keyed = DayKeyed::from_slice(&values).unwrap();
    let h = HourOfYear::new(24 * 100 + 5).unwrap();
    assert_eq!(keyed.get(h.doy().get()).unwrap(), 101);
}
