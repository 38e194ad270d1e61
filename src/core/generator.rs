// src/core/generator.rs

use crate::core::dates::DateSet;
use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

/// Comment written on vacation days.
pub const VACATION_COMMENT: &str = "vacationing";

/// One day of the register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A working day: all three time fields are present.
    Worked {
        started: NaiveTime,
        finished: NaiveTime,
        duration: Duration,
        comment: String,
    },
    /// A non-working day: no time fields, non-empty comment.
    Absent { comment: String },
}

impl Record {
    /// Working day starting at `started`; `finished` wraps past midnight.
    pub fn worked(started: NaiveTime, duration: Duration) -> Self {
        Record::Worked {
            started,
            finished: started + duration,
            duration,
            comment: String::new(),
        }
    }

    pub fn absent(comment: impl Into<String>) -> Self {
        Record::Absent {
            comment: comment.into(),
        }
    }

    pub fn started(&self) -> Option<NaiveTime> {
        match self {
            Record::Worked { started, .. } => Some(*started),
            Record::Absent { .. } => None,
        }
    }

    pub fn finished(&self) -> Option<NaiveTime> {
        match self {
            Record::Worked { finished, .. } => Some(*finished),
            Record::Absent { .. } => None,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            Record::Worked { duration, .. } => Some(*duration),
            Record::Absent { .. } => None,
        }
    }

    pub fn comment(&self) -> &str {
        match self {
            Record::Worked { comment, .. } | Record::Absent { comment } => comment,
        }
    }

    pub fn is_worked(&self) -> bool {
        matches!(self, Record::Worked { .. })
    }
}

/// Day → record policy. Called once per working day, in day order.
///
/// Any `FnMut(NaiveDate) -> Record` closure is a generator too.
pub trait RecordGenerator {
    fn generate(&mut self, day: NaiveDate) -> Record;
}

impl<F> RecordGenerator for F
where
    F: FnMut(NaiveDate) -> Record,
{
    fn generate(&mut self, day: NaiveDate) -> Record {
        self(day)
    }
}

/// Fixed-length working days starting at a random choice among `started_options`;
/// days in the vacation set become `"vacationing"`.
#[derive(Debug, Clone)]
pub struct FixedWorkdayGenerator<R = ThreadRng> {
    vacations: DateSet,
    started_options: Vec<NaiveTime>,
    workday_duration: Duration,
    rng: R,
}

impl FixedWorkdayGenerator<ThreadRng> {
    pub fn new(
        vacations: DateSet,
        started_options: Vec<NaiveTime>,
        workday_duration: Duration,
    ) -> AppResult<Self> {
        Self::with_rng(vacations, started_options, workday_duration, rand::rng())
    }
}

impl<R: Rng> FixedWorkdayGenerator<R> {
    /// Same as `new` with an explicit random source (e.g. a seeded `StdRng`).
    pub fn with_rng(
        vacations: DateSet,
        started_options: Vec<NaiveTime>,
        workday_duration: Duration,
        rng: R,
    ) -> AppResult<Self> {
        if started_options.is_empty() {
            return Err(AppError::Config(
                "at least one started option is required".into(),
            ));
        }
        if workday_duration <= Duration::zero() {
            return Err(AppError::InvalidDuration(
                "workday duration must be positive".into(),
            ));
        }

        Ok(Self {
            vacations,
            started_options,
            workday_duration,
            rng,
        })
    }
}

impl<R: Rng> RecordGenerator for FixedWorkdayGenerator<R> {
    fn generate(&mut self, day: NaiveDate) -> Record {
        if self.vacations.contains(day) {
            return Record::absent(VACATION_COMMENT);
        }

        // Non-empty, checked at construction.
        let started = self
            .started_options
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(NaiveTime::MIN);

        Record::worked(started, self.workday_duration)
    }
}
