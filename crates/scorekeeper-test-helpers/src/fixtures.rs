//! Canned trial submissions and the stats they should produce.

use scorekeeper_errors::InputError;

/// One encoded trial and the result submitting it should have.
#[derive(Debug, Clone)]
pub struct ActionFixture {
    pub name: &'static str,
    pub action: &'static str,
    pub expected: Result<(), InputError>,
}

/// A sequence of submissions and the stats that should follow.
#[derive(Debug, Clone)]
pub struct StatsFixture {
    pub name: &'static str,
    pub actions: Vec<ActionFixture>,
    /// Expected stats JSON, or `None` when stats should report no data.
    pub stats: Option<&'static str>,
}

fn ok(action: &'static str) -> ActionFixture {
    ActionFixture {
        name: action,
        action,
        expected: Ok(()),
    }
}

fn rejected(action: &'static str, err: InputError) -> ActionFixture {
    ActionFixture {
        name: action,
        action,
        expected: Err(err),
    }
}

/// Single submissions covering every validation outcome.
pub fn get_action_fixtures() -> Vec<ActionFixture> {
    vec![
        ActionFixture {
            name: "simple",
            ..ok(r#"{"action":"jump", "time":100}"#)
        },
        ActionFixture {
            name: "zero",
            ..ok(r#"{"action":"jump", "time":0}"#)
        },
        ActionFixture {
            name: "empty",
            ..rejected("", InputError::NoInput)
        },
        ActionFixture {
            name: "negative",
            ..ok(r#"{"action":"levitate", "time":-1}"#)
        },
        ActionFixture {
            name: "huge",
            ..ok(r#"{"action":"jump", "time":9223372036854775807}"#)
        },
        ActionFixture {
            name: "not a number",
            ..rejected(r#"{"action":"jump", "time":"1s"}"#, InputError::BadTime)
        },
        ActionFixture {
            name: "empty action",
            ..rejected(r#"{"action":"", "time":1}"#, InputError::BadAction)
        },
        ActionFixture {
            name: "missing time",
            ..rejected(r#"{"action":"exist"}"#, InputError::NoTime)
        },
        ActionFixture {
            name: "missing action",
            ..rejected(r#"{"time":1}"#, InputError::BadAction)
        },
        ActionFixture {
            name: "missing both",
            ..rejected("{}", InputError::NoTime)
        },
    ]
}

/// Submission sequences with their expected stats.
pub fn get_stats_fixtures() -> Vec<StatsFixture> {
    vec![
        StatsFixture {
            name: "provided",
            actions: vec![
                ok(r#"{"action":"jump", "time":100}"#),
                ok(r#"{"action":"run", "time":75}"#),
                ok(r#"{"action":"jump", "time":200}"#),
            ],
            stats: Some(r#"[{"action":"jump","avg":150},{"action":"run","avg":75}]"#),
        },
        StatsFixture {
            name: "empty",
            actions: vec![],
            stats: None,
        },
        StatsFixture {
            name: "zero",
            actions: vec![ok(r#"{"action":"stand", "time":0}"#)],
            stats: Some(r#"[{"action":"stand","avg":0}]"#),
        },
        StatsFixture {
            name: "unique",
            actions: vec![
                ok(r#"{"action":"hop", "time":1}"#),
                ok(r#"{"action":"skip", "time":2}"#),
                ok(r#"{"action":"jump", "time":3}"#),
            ],
            stats: Some(
                r#"[{"action":"hop","avg":1},{"action":"skip","avg":2},{"action":"jump","avg":3}]"#,
            ),
        },
        StatsFixture {
            name: "negative",
            actions: vec![ok(r#"{"action":"sink","time":-100}"#)],
            stats: Some(r#"[{"action":"sink","avg":-100}]"#),
        },
        StatsFixture {
            name: "robust",
            actions: vec![
                ok(r#"{"action":"sink", "time":-100}"#),
                rejected(r#"{"action":"exist"}"#, InputError::NoTime),
                ok(r#"{"action":"jump", "time":100}"#),
                ok(r#"{"action":"run", "time":75}"#),
                ok(r#"{"action":"jump", "time":200}"#),
            ],
            stats: Some(
                r#"[{"action":"sink","avg":-100},{"action":"jump","avg":150},{"action":"run","avg":75}]"#,
            ),
        },
        StatsFixture {
            name: "empty label does not leak",
            actions: vec![
                rejected(r#"{"action":"","time":1}"#, InputError::BadAction),
                ok(r#"{"action":"jump","time":100}"#),
                ok(r#"{"action":"jump","time":200}"#),
            ],
            stats: Some(r#"[{"action":"jump","avg":150}]"#),
        },
    ]
}

/// Three actions, five trials each, fifteen submissions in all.
pub fn fifteen_actions() -> [&'static str; 15] {
    [
        r#"{"action":"hop", "time":100}"#,
        r#"{"action":"skip", "time":100}"#,
        r#"{"action":"jump", "time":100}"#,
        r#"{"action":"hop", "time":200}"#,
        r#"{"action":"skip", "time":200}"#,
        r#"{"action":"jump", "time":200}"#,
        r#"{"action":"hop", "time":1}"#,
        r#"{"action":"hop", "time":1}"#,
        r#"{"action":"hop", "time":1}"#,
        r#"{"action":"skip", "time":2}"#,
        r#"{"action":"skip", "time":2}"#,
        r#"{"action":"skip", "time":2}"#,
        r#"{"action":"jump", "time":3}"#,
        r#"{"action":"jump", "time":3}"#,
        r#"{"action":"jump", "time":3}"#,
    ]
}

/// Stats after [`fifteen_actions`] was submitted any positive number of times.
pub const FIFTEEN_ACTIONS_STATS: &str =
    r#"[{"action":"hop","avg":60.6},{"action":"skip","avg":61.2},{"action":"jump","avg":61.8}]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::parse_stats;

    #[test]
    fn test_stats_fixtures_are_valid_json() {
        for fixture in get_stats_fixtures() {
            if let Some(stats) = fixture.stats {
                assert!(parse_stats(stats).is_ok(), "{}", fixture.name);
            }
        }
        assert!(parse_stats(FIFTEEN_ACTIONS_STATS).is_ok());
    }

    #[test]
    fn test_fifteen_actions_cover_three_labels() {
        let actions = fifteen_actions();
        for label in ["hop", "skip", "jump"] {
            let needle = format!(r#""action":"{label}""#);
            assert_eq!(actions.iter().filter(|a| a.contains(&needle)).count(), 5);
        }
    }
}
