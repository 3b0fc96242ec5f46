//! Contract checks
//!
//! A failed [`check!`](crate::check!) is a programming error in the caller, not
//! a runtime condition. The failure is logged and then handled according to a
//! single process-wide [`CheckFailedPolicy`]:
//!
//! - [`CheckFailedPolicy::Panic`] (default) unwinds, so tests can assert that a
//!   call violates its contract with `#[should_panic]`.
//! - [`CheckFailedPolicy::Abort`] terminates the process immediately.
//!
//! ```rust
//! use polybound_core::check;
//!
//! fn third(v: &[i32]) -> i32 {
//!     check!(v.len() >= 3, "need 3 elements, got {}", v.len());
//!     v[2]
//! }
//!
//! assert_eq!(third(&[1, 2, 3]), 3);
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

/// What happens after a contract violation has been reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckFailedPolicy {
    /// Panic with the diagnostic as payload
    #[default]
    Panic,
    /// Abort the process
    Abort,
}

static POLICY: AtomicU8 = AtomicU8::new(0);

/// Set the process-wide failure policy
pub fn set_check_failed_policy(policy: CheckFailedPolicy) {
    let raw = match policy {
        CheckFailedPolicy::Panic => 0,
        CheckFailedPolicy::Abort => 1,
    };
    POLICY.store(raw, Ordering::Relaxed);
}

/// Current process-wide failure policy
pub fn check_failed_policy() -> CheckFailedPolicy {
    match POLICY.load(Ordering::Relaxed) {
        1 => CheckFailedPolicy::Abort,
        _ => CheckFailedPolicy::Panic,
    }
}

/// Where a check was written and what it tested
#[derive(Debug, Clone, Copy)]
pub struct CheckSite {
    pub condition: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
}

/// Format the diagnostic for a failed check
pub fn format_failure(site: &CheckSite, message: Option<std::fmt::Arguments<'_>>) -> String {
    let mut text = format!(
        "CHECK failed: ({}) in `{}` @ {}:{}",
        site.condition, site.module, site.file, site.line
    );
    if let Some(message) = message {
        text.push_str(": ");
        text.push_str(&message.to_string());
    }
    text
}

/// Report a failed check and apply the current policy
#[cold]
#[inline(never)]
#[track_caller]
pub fn check_failed(site: &CheckSite, message: Option<std::fmt::Arguments<'_>>) -> ! {
    let text = format_failure(site, message);
    log::error!("{text}");
    match check_failed_policy() {
        CheckFailedPolicy::Panic => panic!("{text}"),
        CheckFailedPolicy::Abort => {
            eprintln!("{text}");
            std::process::abort()
        }
    }
}

/// Assert a contract, reporting through [`check_failed`] when it does not hold
///
/// Unlike `debug_assert!`, checks stay enabled in release builds.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::check::check_failed(
                &$crate::check::CheckSite {
                    condition: stringify!($cond),
                    file: file!(),
                    line: line!(),
                    module: module_path!(),
                },
                None,
            );
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::check::check_failed(
                &$crate::check::CheckSite {
                    condition: stringify!($cond),
                    file: file!(),
                    line: line!(),
                    module: module_path!(),
                },
                Some(format_args!($($arg)+)),
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_check_is_silent() {
        check!(1 + 1 == 2);
        check!(true, "never shown {}", 42);
    }

    #[test]
    #[should_panic(expected = "CHECK failed: (2 < 1)")]
    fn test_failing_check_panics() {
        check!(2 < 1);
    }

    #[test]
    #[should_panic(expected = "index 7 out of range")]
    fn test_failing_check_carries_message() {
        let i = 7;
        check!(i < 3, "index {} out of range", i);
    }

    #[test]
    fn test_format_failure() {
        let site = CheckSite {
            condition: "n <= CAP",
            file: "src/lib.rs",
            line: 12,
            module: "polybound_core::inline_vec",
        };
        assert_eq!(
            format_failure(&site, None),
            "CHECK failed: (n <= CAP) in `polybound_core::inline_vec` @ src/lib.rs:12"
        );
        assert_eq!(
            format_failure(&site, Some(format_args!("n = {}", 9))),
            "CHECK failed: (n <= CAP) in `polybound_core::inline_vec` @ src/lib.rs:12: n = 9"
        );
    }

    #[test]
    fn test_default_policy_is_panic() {
        // Tests never install Abort, so the default is observable here.
        assert_eq!(check_failed_policy(), CheckFailedPolicy::Panic);
        assert_eq!(CheckFailedPolicy::default(), CheckFailedPolicy::Panic);
    }
}
