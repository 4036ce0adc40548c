use std::rc::Rc;

use stakefront_engine::anim::{CountdownParts, CountdownTimer};
use stakefront_engine::schedule::TickScheduler;
use stakefront_engine::time::ClockSource;

use crate::i18n::{t, Lang};
use crate::view::{CountdownUnit, CountdownView};

const UNIT_KEYS: [&str; 4] = [
    "countdown.days",
    "countdown.hours",
    "countdown.minutes",
    "countdown.seconds",
];

/// Launch countdown section: a running timer plus its labelled view.
pub struct CountdownPanel {
    timer: CountdownTimer,
}

impl CountdownPanel {
    pub fn start<S>(timers: &mut S, clock: Rc<dyn ClockSource>, deadline_ms: i64) -> Self
    where
        S: TickScheduler + ?Sized,
    {
        Self { timer: CountdownTimer::start(timers, clock, deadline_ms) }
    }

    pub fn parts(&self) -> CountdownParts {
        self.timer.parts()
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    pub fn view(&self, lang: Lang) -> CountdownView {
        labelled(self.parts(), self.timer.remaining_ms() == 0, lang)
    }
}

fn labelled(parts: CountdownParts, finished: bool, lang: Lang) -> CountdownView {
    let headline = if finished { "countdown.live" } else { "countdown.title" };

    let values = parts.padded();
    let units = std::array::from_fn(|i| CountdownUnit {
        value: values[i].clone(),
        label: t(UNIT_KEYS[i], lang).to_string(),
    });

    CountdownView {
        headline: t(headline, lang).to_string(),
        finished,
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakefront_engine::schedule::IntervalTimers;
    use stakefront_engine::time::ManualClock;

    #[test]
    fn view_pads_and_labels() {
        let view = labelled(CountdownParts { days: 12, hours: 4, minutes: 0, seconds: 9 }, false, Lang::En);
        assert_eq!(view.clock(), "12d 04:00:09");
        assert_eq!(view.units[0].label, "Days");
        assert_eq!(view.units[3].label, "Seconds");
        assert_eq!(view.headline, "Staking opens in");
        assert!(!view.finished);
    }

    #[test]
    fn zero_reads_as_live() {
        let view = labelled(CountdownParts::default(), true, Lang::Zh);
        assert!(view.finished);
        assert_eq!(view.headline, "质押已开启");
        assert_eq!(view.clock(), "0d 00:00:00");
    }

    #[test]
    fn panel_shows_value_before_first_tick() {
        let clock = ManualClock::new(0);
        let mut timers = IntervalTimers::new();
        let panel = CountdownPanel::start(&mut timers, Rc::new(clock), 90_061_000);
        assert_eq!(panel.view(Lang::En).clock(), "1d 01:01:01");
    }
}
