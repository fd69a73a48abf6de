//! Decorators applied after a stroke's digits have been written.
//!
//! Rules are tried in priority order and at most one fires per stroke. A
//! rule fires when every key of one of its triggers is present; it then
//! removes that trigger and its modifier keys from the control set.

use tracing::debug;

use crate::lookup::{NotFoundReason, RunningResult};
use crate::roman::{self, MAX_ROMAN};
use crate::settings::Settings;
use crate::stroke::ControlSet;
use crate::words;

/// Keys already handled by digit rendering.
const RENDERED_KEYS: [char; 3] = ['D', 'Z', '*'];

type Apply = fn(&mut RunningResult, &ControlSet, &Settings) -> Result<(), NotFoundReason>;

struct Rule {
    name: &'static str,
    /// Alternative key combinations, tried in order.
    triggers: &'static [&'static [char]],
    /// Keys the rule reads besides its trigger.
    modifiers: &'static [char],
    apply: Apply,
}

const RULES: &[Rule] = &[
    Rule {
        name: "currency",
        triggers: &[&['R', 'B'], &['W', 'R']],
        modifiers: &[],
        apply: currency,
    },
    Rule {
        name: "percent",
        triggers: &[&['K', 'R'], &['R', 'G']],
        modifiers: &[],
        apply: percent,
    },
    Rule {
        name: "dollar_hundreds",
        triggers: &[&['D', 'Z']],
        modifiers: &[],
        apply: dollar_hundreds,
    },
    Rule {
        name: "clock",
        triggers: &[&['K'], &['B', 'G']],
        modifiers: &['K', 'B', 'G', 'S'],
        apply: clock,
    },
    Rule {
        name: "ordinal",
        triggers: &[&['W'], &['B']],
        modifiers: &['W', 'B'],
        apply: ordinal,
    },
    Rule {
        name: "words",
        triggers: &[&['G']],
        modifiers: &[],
        apply: spell_out,
    },
    Rule {
        name: "roman",
        triggers: &[&['R']],
        modifiers: &[],
        apply: roman_numeral,
    },
];

/// Apply the first matching decorator, then check that no control key is
/// left unhandled.
pub(crate) fn decorate(
    out: &mut RunningResult,
    controls: &mut ControlSet,
    settings: &Settings,
) -> Result<(), NotFoundReason> {
    let matched = RULES.iter().find_map(|rule| {
        rule.triggers
            .iter()
            .find(|trigger| controls.contains_all(trigger))
            .map(|trigger| (rule, *trigger))
    });

    if let Some((rule, trigger)) = matched {
        debug!(rule = rule.name, "decorator matched");
        (rule.apply)(out, controls, settings)?;
        controls.consume(trigger);
        controls.consume(rule.modifiers);
        out.schedule_space();
    }

    controls.discard(&RENDERED_KEYS);
    if controls.is_empty() {
        Ok(())
    } else {
        Err(NotFoundReason::UnconsumedControls(controls.to_string()))
    }
}

fn currency(out: &mut RunningResult, _: &ControlSet, _: &Settings) -> Result<(), NotFoundReason> {
    out.wrap_trailing_digits("$", "");
    Ok(())
}

fn percent(out: &mut RunningResult, _: &ControlSet, _: &Settings) -> Result<(), NotFoundReason> {
    out.wrap_trailing_digits("", "%");
    Ok(())
}

fn dollar_hundreds(
    out: &mut RunningResult,
    _: &ControlSet,
    _: &Settings,
) -> Result<(), NotFoundReason> {
    out.wrap_trailing_digits("$", "00");
    Ok(())
}

fn clock(
    out: &mut RunningResult,
    controls: &ControlSet,
    settings: &Settings,
) -> Result<(), NotFoundReason> {
    // Quarter hours need K; -BG on its own is the full hour.
    let minutes = if !controls.contains('K') {
        ":00"
    } else if controls.contains_all(&['B', 'G']) {
        ":45"
    } else if controls.contains('G') {
        ":15"
    } else if controls.contains('B') {
        ":30"
    } else {
        ":00"
    };
    out.push_str(minutes);

    if controls.contains('S') {
        let suffix = if controls.contains('*') {
            &settings.clock.am_suffix
        } else {
            &settings.clock.pm_suffix
        };
        out.push_str(suffix);
    }
    Ok(())
}

fn ordinal(out: &mut RunningResult, _: &ControlSet, _: &Settings) -> Result<(), NotFoundReason> {
    let mut tail = out.as_str().chars().rev();
    let last = tail.next();
    let teen = tail.next() == Some('1');
    let suffix = match last {
        Some('1') if !teen => "st",
        Some('2') if !teen => "nd",
        Some('3') if !teen => "rd",
        _ => "th",
    };
    out.push_str(suffix);
    Ok(())
}

fn spell_out(out: &mut RunningResult, _: &ControlSet, _: &Settings) -> Result<(), NotFoundReason> {
    let digits = out.trailing_digits();
    if digits.is_empty() {
        return Err(NotFoundReason::MissingDigits);
    }
    let spelled = words::encode(digits)?;
    out.replace_trailing_digits(&spelled);
    Ok(())
}

fn roman_numeral(
    out: &mut RunningResult,
    controls: &ControlSet,
    _: &Settings,
) -> Result<(), NotFoundReason> {
    let digits = out.trailing_digits();
    if digits.is_empty() {
        return Err(NotFoundReason::MissingDigits);
    }
    let value: u64 = digits
        .parse()
        .map_err(|_| NotFoundReason::RomanOutOfRange(digits.to_string()))?;
    if value > MAX_ROMAN {
        return Err(NotFoundReason::RomanOutOfRange(digits.to_string()));
    }
    let mut numeral =
        roman::encode(value).map_err(|_| NotFoundReason::RomanOutOfRange(digits.to_string()))?;
    if controls.contains('*') {
        numeral.make_ascii_lowercase();
    }
    out.replace_trailing_digits(&numeral);
    Ok(())
}
