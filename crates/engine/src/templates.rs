//! Text templates for each recommendation.
//!
//! A `Recommendation` is a closed set of variants, each carrying exactly
//! the numbers its templates quote. Reasoning, action plan and science
//! note are rendered from that data, never from strings.

use inputs::ClockTime;
use pipeline::{Strategy, VerdictReason};
use scenarios::ConfidenceBand;
use serde::{Deserialize, Serialize};

/// The chosen plan with everything needed to describe it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recommendation {
    Sleep {
        /// Why the deciding rule chose sleep
        reason: VerdictReason,
        available_hours: f64,
        sleep_hours: f64,
        bedtime: ClockTime,
        alarm: ClockTime,
        cognitive_state_percent: u32,
        adjusted_confidence: u32,
    },
    StrategicCram {
        available_hours: f64,
        study_hours: f64,
        sleep_hours: f64,
        study_until: ClockTime,
        bedtime: ClockTime,
        alarm: ClockTime,
        cognitive_state_percent: u32,
        adjusted_confidence: u32,
        confidence_band: ConfidenceBand,
    },
}

/// "1 hour", "3 hours"; hours are rounded to the nearest whole hour
fn hours_phrase(hours: f64) -> String {
    let whole = hours.round().max(0.0) as u64;
    if whole == 1 {
        "1 hour".to_string()
    } else {
        format!("{} hours", whole)
    }
}

/// True when `hours` would be quoted as "0 hours"
fn rounds_to_zero(hours: f64) -> bool {
    hours.round() <= 0.0
}

impl Recommendation {
    pub fn strategy(&self) -> Strategy {
        match self {
            Recommendation::Sleep { .. } => Strategy::Sleep,
            Recommendation::StrategicCram { .. } => Strategy::StrategicCram,
        }
    }

    /// Every wall-clock time the plan quotes, in plan order
    pub fn clock_times(&self) -> Vec<ClockTime> {
        match self {
            Recommendation::Sleep { bedtime, alarm, .. } => vec![*bedtime, *alarm],
            Recommendation::StrategicCram {
                study_until,
                bedtime,
                alarm,
                ..
            } => vec![*study_until, *bedtime, *alarm],
        }
    }

    pub fn reasoning(&self) -> String {
        match self {
            Recommendation::Sleep {
                available_hours,
                sleep_hours,
                ..
            } if rounds_to_zero(*sleep_hours) => format!(
                "With only {:.1} hours until your exam there is no time left for useful sleep \
                 or study. Keep calm and save your energy for the exam.",
                available_hours
            ),
            Recommendation::Sleep {
                reason: VerdictReason::ShortWindow,
                available_hours,
                ..
            } => format!(
                "With only {:.1} hours until your exam, every hour spent studying comes straight \
                 out of the sleep your brain needs to consolidate what you already know. \
                 Sleep is the best use of the time left.",
                available_hours
            ),
            Recommendation::Sleep {
                reason: VerdictReason::SleepDominates,
                sleep_hours,
                ..
            } => format!(
                "A full night of about {} of sleep projects a bigger boost than giving part of \
                 the night to more study. You are better served by rest.",
                hours_phrase(*sleep_hours)
            ),
            Recommendation::Sleep {
                reason: VerdictReason::SplitWins,
                available_hours,
                sleep_hours,
                ..
            } => format!(
                "You have {:.1} hours before your exam. Spending about {} of it asleep is the \
                 plan chosen for you tonight.",
                available_hours,
                hours_phrase(*sleep_hours)
            ),
            Recommendation::StrategicCram {
                available_hours,
                study_hours,
                sleep_hours,
                ..
            } => match (rounds_to_zero(*study_hours), rounds_to_zero(*sleep_hours)) {
                (true, true) => format!(
                    "You have {:.1} hours before your exam, too little for study or sleep. \
                     Keep calm and save your energy for the exam.",
                    available_hours
                ),
                (true, false) => format!(
                    "You have {:.1} hours before your exam. There is no room for extra study \
                     without cutting into the sleep you need, so skip new material and sleep \
                     about {}.",
                    available_hours,
                    hours_phrase(*sleep_hours)
                ),
                (false, true) => format!(
                    "You have {:.1} hours before your exam. A focused {} review is all the \
                     time allows; there is no room left for sleep.",
                    available_hours,
                    hours_phrase(*study_hours)
                ),
                (false, false) => format!(
                    "You have {:.1} hours before your exam. A focused {} review followed by \
                     about {} of sleep projects a better result than sleeping the whole time.",
                    available_hours,
                    hours_phrase(*study_hours),
                    hours_phrase(*sleep_hours)
                ),
            },
        }
    }

    pub fn action_plan(&self) -> Vec<String> {
        match self {
            Recommendation::Sleep { sleep_hours, .. } if rounds_to_zero(*sleep_hours) => vec![
                "Stop studying now and put your notes away".to_string(),
                "Stay awake; there is no time left for useful sleep".to_string(),
                "Skim your one-page summary once, nothing new".to_string(),
                "Head to the exam early and settle in".to_string(),
            ],
            Recommendation::Sleep {
                sleep_hours,
                bedtime,
                alarm,
                ..
            } => vec![
                "Stop studying now and put your notes away".to_string(),
                format!(
                    "Be in bed by {} for about {} of sleep",
                    bedtime,
                    hours_phrase(*sleep_hours)
                ),
                format!("Set your alarm for {} so you wake up without rushing", alarm),
                "Skim a one-page summary over breakfast, nothing new".to_string(),
            ],
            Recommendation::StrategicCram {
                study_hours,
                sleep_hours,
                study_until,
                bedtime,
                alarm,
                ..
            } => {
                let mut plan = if rounds_to_zero(*study_hours) {
                    vec![
                        "Skip new study tonight; a light look over your summary is enough"
                            .to_string(),
                        "Put your notes away now".to_string(),
                    ]
                } else {
                    vec![
                        format!(
                            "Study your weakest topics for {} in 25-minute blocks with short breaks",
                            hours_phrase(*study_hours)
                        ),
                        format!("Stop at {} even if you are not finished", study_until),
                    ]
                };

                if rounds_to_zero(*sleep_hours) {
                    plan.push("There is no time left to sleep, so take a short break instead".to_string());
                    plan.push("Review key notes briefly before you leave for the exam".to_string());
                } else {
                    plan.push(format!(
                        "Be in bed by {} for about {} of sleep",
                        bedtime,
                        hours_phrase(*sleep_hours)
                    ));
                    plan.push(format!(
                        "Set your alarm for {} and review key notes briefly in the morning",
                        alarm
                    ));
                }
                plan
            }
        }
    }

    pub fn science_note(&self) -> String {
        match self {
            Recommendation::Sleep {
                cognitive_state_percent,
                adjusted_confidence,
                ..
            } => format!(
                "Sleep consolidates memory: during deep and REM sleep the brain replays what \
                 you learned during the day. Your cognitive state is at {}% of peak and your \
                 adjusted confidence is {}%, so extra study now would add little while \
                 costing recall tomorrow.",
                cognitive_state_percent, adjusted_confidence
            ),
            Recommendation::StrategicCram {
                cognitive_state_percent,
                adjusted_confidence,
                confidence_band,
                ..
            } => {
                let advice = match confidence_band {
                    ConfidenceBand::Low => "a targeted review pays off most for you",
                    ConfidenceBand::Neutral => "a short review is still worth it",
                    ConfidenceBand::High => "keep the review light and protect your sleep",
                };
                format!(
                    "Material reviewed shortly before sleep is consolidated overnight. Your \
                     cognitive state is at {}% of peak and your adjusted confidence is {}%, so {}.",
                    cognitive_state_percent, adjusted_confidence, advice
                )
            }
        }
    }
}
