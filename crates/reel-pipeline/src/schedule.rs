//! Coarse time-of-day scheduling.
//!
//! Slots fire at most once per day at a minute-level granularity; the
//! scheduler polls on a coarse interval and runs each due trigger to
//! completion before evaluating the next.

use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{error, info};

use crate::config::PipelineConfig;
use crate::orchestrator::Orchestrator;

/// What a due slot asks the orchestrator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Run the post cycle.
    Post,
    /// Run the compile cycle.
    Compile,
}

#[derive(Debug, Clone)]
struct Slot {
    trigger: Trigger,
    time: NaiveTime,
    last_fired: Option<NaiveDate>,
}

impl Slot {
    fn is_due(&self, now: NaiveDateTime) -> bool {
        now.time() >= self.time && self.last_fired != Some(now.date())
    }
}

/// Tracks which slots have fired today.
#[derive(Debug, Clone)]
pub struct Schedule {
    slots: Vec<Slot>,
}

impl Schedule {
    /// Build a schedule from post times and a compile time.
    ///
    /// Slots whose time has already passed at `start` count as fired for
    /// that day, so a restart does not replay the whole morning.
    pub fn new(post_times: &[NaiveTime], compile_time: NaiveTime, start: NaiveDateTime) -> Self {
        let slots = post_times
            .iter()
            .map(|&time| (Trigger::Post, time))
            .chain(std::iter::once((Trigger::Compile, compile_time)))
            .map(|(trigger, time)| Slot {
                trigger,
                time,
                last_fired: (start.time() >= time).then_some(start.date()),
            })
            .collect();
        Self { slots }
    }

    /// Due triggers at `now`, in slot-time order; each returned slot is
    /// marked fired for the day.
    pub fn due_triggers(&mut self, now: NaiveDateTime) -> Vec<Trigger> {
        let mut due: Vec<(NaiveTime, Trigger)> = Vec::new();
        for slot in &mut self.slots {
            if slot.is_due(now) {
                slot.last_fired = Some(now.date());
                due.push((slot.time, slot.trigger));
            }
        }
        due.sort_by_key(|(time, _)| *time);
        due.into_iter().map(|(_, trigger)| trigger).collect()
    }
}

/// Polls the schedule and dispatches due triggers to the orchestrator.
pub struct Scheduler {
    schedule: Schedule,
    poll_interval: Duration,
}

impl Scheduler {
    /// Create a scheduler from pipeline config, starting now.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            schedule: Schedule::new(
                &config.post_times,
                config.compile_time,
                Local::now().naive_local(),
            ),
            poll_interval: config.poll_interval,
        }
    }

    /// Run the polling loop until shutdown is signalled.
    ///
    /// Cycle failures are logged and never stop the loop; within one
    /// poll, triggers run to completion sequentially.
    pub async fn run(&mut self, orchestrator: &Orchestrator) {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("shutdown signal received");
                    return;
                }
                _ = interval.tick() => {
                    let now = Local::now().naive_local();
                    for trigger in self.schedule.due_triggers(now) {
                        self.dispatch(orchestrator, trigger, now.date()).await;
                    }
                }
            }
        }
    }

    async fn dispatch(&self, orchestrator: &Orchestrator, trigger: Trigger, date: NaiveDate) {
        match trigger {
            Trigger::Post => {
                if let Err(e) = orchestrator.create_post().await {
                    error!(error = %e, "post cycle failed");
                }
            }
            Trigger::Compile => {
                if let Err(e) = orchestrator.compile_daily(date).await {
                    error!(error = %e, "compile cycle failed");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_time(t(time.0, time.1))
    }

    #[test]
    fn test_slot_fires_once_per_day() {
        let start = at((2026, 8, 23), (9, 0));
        let mut schedule = Schedule::new(&[t(10, 0)], t(23, 50), start);

        assert!(schedule.due_triggers(at((2026, 8, 23), (9, 30))).is_empty());
        assert_eq!(
            schedule.due_triggers(at((2026, 8, 23), (10, 1))),
            vec![Trigger::Post]
        );
        // Same day, later poll: already fired.
        assert!(schedule.due_triggers(at((2026, 8, 23), (12, 0))).is_empty());
        // Next day it fires again.
        assert_eq!(
            schedule.due_triggers(at((2026, 8, 24), (10, 0))),
            vec![Trigger::Post]
        );
    }

    #[test]
    fn test_slots_past_at_startup_do_not_replay() {
        let start = at((2026, 8, 23), (15, 0));
        let mut schedule = Schedule::new(&[t(10, 0), t(14, 0), t(18, 0)], t(23, 50), start);

        // 10:00 and 14:00 already passed; only 18:00 fires today.
        assert!(schedule.due_triggers(at((2026, 8, 23), (15, 1))).is_empty());
        assert_eq!(
            schedule.due_triggers(at((2026, 8, 23), (18, 0))),
            vec![Trigger::Post]
        );
    }

    #[test]
    fn test_multiple_due_slots_fire_in_time_order() {
        let start = at((2026, 8, 23), (0, 0));
        let mut schedule = Schedule::new(&[t(14, 0), t(10, 0)], t(12, 0), start);

        // A long gap covered by one poll: everything due, ordered by
        // slot time.
        assert_eq!(
            schedule.due_triggers(at((2026, 8, 23), (23, 0))),
            vec![Trigger::Post, Trigger::Compile, Trigger::Post]
        );
    }

    #[test]
    fn test_compile_slot_fires() {
        let start = at((2026, 8, 23), (20, 0));
        let mut schedule = Schedule::new(&[], t(23, 50), start);
        assert_eq!(
            schedule.due_triggers(at((2026, 8, 23), (23, 50))),
            vec![Trigger::Compile]
        );
    }
}
