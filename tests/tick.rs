mod common;

mod tests {
    use embassy_futures::block_on;
    use embassy_time::{Duration, Instant};
    use myrtio_event_timer::signal::Wake;
    use myrtio_event_timer::tick::WakeReason;
    use myrtio_event_timer::{
        Gesture, GestureThresholds, Phase, TICK_PERIOD, TickLoop, TickSource, WAKE_TIMEOUT,
        WakeSignal,
    };

    use crate::common::timer;

    fn at_tick(n: u32) -> Instant {
        Instant::from_millis(0) + TICK_PERIOD * n
    }

    #[test]
    fn test_signal_take_clears() {
        let signal = WakeSignal::new();
        assert!(!signal.is_raised());
        assert_eq!(signal.take(), None);

        signal.raise(None);
        assert!(signal.is_raised());
        assert_eq!(signal.take(), Some(Wake { gesture: None }));
        assert!(!signal.is_raised());
        assert_eq!(signal.take(), None);
    }

    #[test]
    fn test_signal_keeps_pending_gesture() {
        let signal = WakeSignal::new();
        signal.raise(Some(Gesture::StartResume));
        signal.raise(None);
        signal.raise(None);
        assert_eq!(
            signal.take(),
            Some(Wake {
                gesture: Some(Gesture::StartResume)
            })
        );

        signal.raise(Some(Gesture::Abort));
        signal.raise(Some(Gesture::StartResume));
        assert_eq!(
            signal.take(),
            Some(Wake {
                gesture: Some(Gesture::Abort)
            })
        );
    }

    #[test]
    fn test_signal_escalates_held_gestures() {
        let signal = WakeSignal::new();
        signal.raise(Some(Gesture::StartResume));
        signal.raise(Some(Gesture::HardReset));
        assert_eq!(
            signal.take(),
            Some(Wake {
                gesture: Some(Gesture::HardReset)
            })
        );
    }

    #[test]
    fn test_wait_returns_pending_wake() {
        let signal = WakeSignal::new();
        signal.raise(Some(Gesture::HardReset));
        let wake = block_on(signal.wait());
        assert_eq!(wake.gesture, Some(Gesture::HardReset));
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_wait_tick_on_signal() {
        let signal = WakeSignal::new();
        let mut tick_loop = TickLoop::new(timer(), &signal, Instant::now());

        signal.raise(Some(Gesture::HardReset));
        assert_eq!(block_on(tick_loop.wait_tick()).unwrap(), WakeReason::Signal);
        assert_eq!(tick_loop.timer().phase(), Phase::ReadyWait);
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_wait_tick_times_out() {
        let signal = WakeSignal::new();
        let mut tick_loop = TickLoop::new(timer(), &signal, Instant::now());

        let started = Instant::now();
        assert_eq!(block_on(tick_loop.wait_tick()).unwrap(), WakeReason::Timeout);
        assert!(Instant::now() - started >= WAKE_TIMEOUT);
        assert_eq!(tick_loop.timer().display().output().commits.len(), 1);
    }

    #[test]
    fn test_poll_idle() {
        let signal = WakeSignal::new();
        let mut tick_loop = TickLoop::new(timer(), &signal, Instant::from_millis(0));

        let result = tick_loop.poll(Instant::from_millis(10)).unwrap();
        assert_eq!(result.woke, None);
        assert_eq!(result.next_deadline, Instant::from_millis(0) + WAKE_TIMEOUT);
        assert_eq!(
            result.sleep_duration,
            WAKE_TIMEOUT - Duration::from_millis(10)
        );
        assert!(tick_loop.timer().display().output().commits.is_empty());
    }

    #[test]
    fn test_poll_timeout() {
        let signal = WakeSignal::new();
        let mut tick_loop = TickLoop::new(timer(), &signal, Instant::from_millis(0));

        let now = Instant::from_millis(0) + WAKE_TIMEOUT;
        let result = tick_loop.poll(now).unwrap();
        assert_eq!(result.woke, Some(WakeReason::Timeout));
        assert_eq!(result.next_deadline, now + WAKE_TIMEOUT);
        assert_eq!(result.sleep_duration, WAKE_TIMEOUT);
        assert_eq!(tick_loop.timer().display().output().commits.len(), 1);
    }

    #[test]
    fn test_poll_signal() {
        let signal = WakeSignal::new();
        let mut tick_loop = TickLoop::new(timer(), &signal, Instant::from_millis(0));

        signal.raise(Some(Gesture::HardReset));
        let now = Instant::from_millis(5);
        let result = tick_loop.poll(now).unwrap();
        assert_eq!(result.woke, Some(WakeReason::Signal));
        assert_eq!(result.next_deadline, now + WAKE_TIMEOUT);
        assert_eq!(tick_loop.timer().phase(), Phase::ReadyWait);
        assert!(!signal.is_raised());

        let result = tick_loop.poll(Instant::from_millis(6)).unwrap();
        assert_eq!(result.woke, None);
    }

    #[test]
    fn test_held_button_drives_timer() {
        let signal = WakeSignal::new();
        let mut source = TickSource::new(GestureThresholds::DEFAULT, &signal);
        let mut tick_loop = TickLoop::new(timer(), &signal, at_tick(0));

        let mut gestures = Vec::new();
        for n in 1..=48 {
            if let Some(gesture) = source.on_tick(true) {
                gestures.push(gesture);
            }
            assert_eq!(
                tick_loop.poll(at_tick(n)).unwrap().woke,
                Some(WakeReason::Signal)
            );
        }

        assert_eq!(gestures, vec![Gesture::StartResume, Gesture::HardReset]);
        assert_eq!(source.decoder().pressed_ticks(), 48);
        assert_eq!(tick_loop.timer().phase(), Phase::ReadyWait);
    }

    #[test]
    fn test_missed_ticks_are_coalesced() {
        let signal = WakeSignal::new();
        let mut source = TickSource::new(GestureThresholds::DEFAULT, &signal);
        let mut tick_loop = TickLoop::new(timer(), &signal, at_tick(0));
        tick_loop.poll(at_tick(0) + WAKE_TIMEOUT).unwrap();

        // Consumer stalled for the whole hold
        for _ in 0..48 {
            source.on_tick(true);
        }
        source.on_tick(false);

        let result = tick_loop.poll(at_tick(49)).unwrap();
        assert_eq!(result.woke, Some(WakeReason::Signal));
        assert_eq!(tick_loop.timer().phase(), Phase::ReadyWait);
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_double_tap_survives_coalesced_tick() {
        let signal = WakeSignal::new();
        let mut source = TickSource::new(GestureThresholds::DEFAULT, &signal);
        let mut tick_loop = TickLoop::new(timer(), &signal, at_tick(0));
        let mut n = 0;
        let mut step = |source: &mut TickSource<'_>, pressed: bool, poll: bool| {
            n += 1;
            source.on_tick(pressed);
            if poll {
                tick_loop.poll(at_tick(n)).unwrap();
            }
            tick_loop.timer().phase()
        };

        // Hold to reset into ReadyWait, release, then a short press to start
        for _ in 0..48 {
            step(&mut source, true, true);
        }
        for _ in 0..12 {
            step(&mut source, false, true);
        }
        for _ in 0..2 {
            step(&mut source, true, true);
        }
        assert_eq!(step(&mut source, false, true), Phase::TimedQuestion);

        // Double tap: the abort tick is never polled on its own
        step(&mut source, false, true);
        step(&mut source, false, true);
        step(&mut source, true, false);
        assert_eq!(step(&mut source, true, true), Phase::Complete);
    }

    #[test]
    fn test_short_press_starts_from_ready_wait() {
        let thresholds = GestureThresholds::DEFAULT;
        let signal = WakeSignal::new();
        let mut source = TickSource::new(thresholds, &signal);
        let mut tick_loop = TickLoop::new(timer(), &signal, at_tick(0));

        let mut n = 0;
        for _ in 0..thresholds.reset_ticks {
            n += 1;
            source.on_tick(true);
            tick_loop.poll(at_tick(n)).unwrap();
        }
        for _ in 0..thresholds.double_tap_ticks {
            n += 1;
            source.on_tick(false);
            tick_loop.poll(at_tick(n)).unwrap();
        }
        assert_eq!(tick_loop.timer().phase(), Phase::ReadyWait);

        for _ in 0..thresholds.press_ticks {
            n += 1;
            source.on_tick(true);
            tick_loop.poll(at_tick(n)).unwrap();
        }

        let timer = tick_loop.timer();
        assert_eq!(timer.phase(), Phase::TimedQuestion);
        assert_eq!(timer.clock().elapsed_tenths(), 0);
        assert_eq!(timer.clock().start(), at_tick(n));
        assert!(!timer.audio().serial().played_tracks().contains(&1));
    }
}
