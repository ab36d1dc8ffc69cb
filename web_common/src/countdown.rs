//! Edit-conflict countdown.
//!
//! When `/programs` is locked by another editor the server answers with the
//! number of seconds left on that session. The client waits that long (plus
//! one second) and then reloads.

/// Parse a wait time the way a browser `parseInt` would: leading whitespace,
/// an optional sign, then as many decimal digits as are present.
pub fn parse_wait_seconds(body: &str) -> Option<i64> {
    let trimmed = body.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Human-readable remaining time: rounded minutes above one minute, seconds otherwise.
pub fn format_wait(remaining: i64) -> String {
    if remaining > 60 {
        format!("{} min", (remaining as f64 / 60.0).round() as i64)
    } else {
        format!("{} sec", remaining)
    }
}

/// What to do after one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Show the new remaining time and schedule another tick.
    Remaining(i64),
    /// Time is up; reload the page.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: i64,
}

impl Countdown {
    /// Start from the server-reported wait, with one second of buffer.
    pub fn start(server_secs: i64) -> Self {
        Self {
            remaining: server_secs.saturating_add(1),
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn display(&self) -> String {
        format_wait(self.remaining)
    }

    pub fn tick(&mut self) -> CountdownStep {
        self.remaining -= 1;
        if self.remaining > 0 {
            CountdownStep::Remaining(self.remaining)
        } else {
            CountdownStep::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_wait_seconds("17"), Some(17));
        assert_eq!(parse_wait_seconds("0"), Some(0));
    }

    #[test]
    fn test_parse_like_parse_int() {
        assert_eq!(parse_wait_seconds("  42\n"), Some(42));
        assert_eq!(parse_wait_seconds("12 seconds"), Some(12));
        assert_eq!(parse_wait_seconds("-3"), Some(-3));
        assert_eq!(parse_wait_seconds("+8"), Some(8));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_wait_seconds(""), None);
        assert_eq!(parse_wait_seconds("there already exists an active session"), None);
        assert_eq!(parse_wait_seconds("-"), None);
    }

    #[test]
    fn test_format_wait_boundary() {
        for s in 0..200i64 {
            let t = s + 1;
            let expected = if t > 60 {
                format!("{} min", (t as f64 / 60.0).round() as i64)
            } else {
                format!("{} sec", t)
            };
            assert_eq!(Countdown::start(s).display(), expected, "s = {}", s);
        }
        assert_eq!(format_wait(60), "60 sec");
        assert_eq!(format_wait(61), "1 min");
        assert_eq!(format_wait(90), "2 min");
        assert_eq!(format_wait(300), "5 min");
    }

    #[test]
    fn test_reload_after_exactly_t_ticks() {
        for s in 0..130i64 {
            let mut countdown = Countdown::start(s);
            let t = countdown.remaining();
            let mut ticks = 0;
            loop {
                ticks += 1;
                match countdown.tick() {
                    CountdownStep::Remaining(left) => {
                        assert_eq!(left, t - ticks);
                        assert!(left > 0);
                    }
                    CountdownStep::Expired => break,
                }
            }
            assert_eq!(ticks, t, "s = {}", s);
        }
    }

    #[test]
    fn test_non_positive_start_expires_on_first_tick() {
        let mut countdown = Countdown::start(-5);
        assert_eq!(countdown.tick(), CountdownStep::Expired);
    }
}
