//! One-time code entry and the resend cooldown.
//!
//! Browser-free state machines driven by the verify-code page: the page
//! forwards input and key events and acts on the returned [`OtpStep`].

use contracts::system::auth::VERIFICATION_FAILED;

use crate::shared::api_client::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OtpStep {
    /// Slot that should receive focus.
    pub focus: Option<usize>,
    /// Complete code to submit right away.
    pub submit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    slots: Vec<String>,
    error: Option<String>,
}

impl OtpEntry {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![String::new(); len.max(1)],
            error: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(String::is_empty)
    }

    pub fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn code(&self) -> String {
        self.slots.concat()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
        self.error = None;
    }

    /// Raw value typed or pasted into slot `index`.
    pub fn input(&mut self, index: usize, raw: &str) -> OtpStep {
        let n = self.len();
        if index >= n {
            return OtpStep::default();
        }
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() && !raw.is_empty() {
            return OtpStep::default();
        }

        let count = digits.chars().count();
        if count > 1 {
            self.clear();
            for (slot, ch) in self.slots.iter_mut().zip(digits.chars()) {
                *slot = ch.to_string();
            }
            return OtpStep {
                focus: Some(count.min(n - 1)),
                submit: (count >= n).then(|| self.code()),
            };
        }

        self.slots[index] = digits.clone();
        self.error = None;
        if digits.is_empty() {
            return OtpStep::default();
        }
        if index < n - 1 {
            OtpStep {
                focus: Some(index + 1),
                submit: None,
            }
        } else {
            OtpStep {
                focus: None,
                submit: self.is_complete().then(|| self.code()),
            }
        }
    }

    /// Navigation keys; returns the slot to focus.
    pub fn key(&self, index: usize, key: &str) -> Option<usize> {
        match key {
            "Backspace" if self.slot(index).is_empty() && index > 0 => Some(index - 1),
            "ArrowLeft" if index > 0 => Some(index - 1),
            "ArrowRight" if index + 1 < self.len() => Some(index + 1),
            _ => None,
        }
    }

    /// Manual submit; an incomplete code sets the inline error.
    pub fn submit(&mut self) -> Option<String> {
        if self.is_complete() {
            Some(self.code())
        } else {
            self.error = Some(format!("Please enter all {} digits.", self.len()));
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining: u32,
    max: u32,
}

impl ResendCooldown {
    /// The cooldown is already running when the page opens.
    pub fn new(max: u32) -> Self {
        Self {
            remaining: max,
            max: max.max(1),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// One second elapsed.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn can_resend(&self, resending: bool) -> bool {
        !resending && self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.max;
    }

    /// Width of the shrinking bar, 100 at the start of the cooldown.
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.max) * 100.0
    }
}

/// Text shown under the slots for a rejected code: the `code` field error,
/// else a non-empty server message, else the generic failure.
pub fn verification_error(error: &ApiError) -> String {
    let message = match error {
        ApiError::Validation { message, .. } => error
            .field_errors()
            .remove("code")
            .or_else(|| Some(message.clone()).filter(|m| !m.trim().is_empty())),
        _ => None,
    };
    message.unwrap_or_else(|| VERIFICATION_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_moves_focus_and_submits_on_last_slot() {
        let mut otp = OtpEntry::new(6);
        for (i, d) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            let step = otp.input(i, d);
            assert_eq!(step.focus, Some(i + 1));
            assert_eq!(step.submit, None);
        }
        let step = otp.input(5, "6");
        assert_eq!(step.submit.as_deref(), Some("123456"));
    }

    #[test]
    fn test_last_slot_without_gaps_only() {
        let mut otp = OtpEntry::new(4);
        otp.input(0, "1");
        let step = otp.input(3, "9");
        assert_eq!(step.submit, None);
        assert_eq!(otp.code(), "19");
    }

    #[test]
    fn test_paste_fills_from_start() {
        let mut otp = OtpEntry::new(6);
        otp.input(4, "7");
        let step = otp.input(2, "12-34");
        assert_eq!(otp.code(), "1234");
        assert_eq!(step.focus, Some(4));
        assert_eq!(step.submit, None);

        let step = otp.input(0, "98765432");
        assert_eq!(otp.code(), "987654");
        assert_eq!(step.focus, Some(5));
        assert_eq!(step.submit.as_deref(), Some("987654"));
    }

    #[test]
    fn test_non_digits_ignored_and_empty_clears() {
        let mut otp = OtpEntry::new(6);
        otp.input(0, "5");
        assert_eq!(otp.input(0, "x"), OtpStep::default());
        assert_eq!(otp.slot(0), "5");

        otp.input(0, "");
        assert_eq!(otp.slot(0), "");
    }

    #[test]
    fn test_typing_clears_error() {
        let mut otp = OtpEntry::new(6);
        assert_eq!(otp.submit(), None);
        assert_eq!(otp.error(), Some("Please enter all 6 digits."));
        otp.input(0, "1");
        assert_eq!(otp.error(), None);
    }

    #[test]
    fn test_navigation_keys() {
        let mut otp = OtpEntry::new(6);
        otp.input(1, "4");
        assert_eq!(otp.key(2, "Backspace"), Some(1));
        assert_eq!(otp.key(1, "Backspace"), None);
        assert_eq!(otp.key(0, "Backspace"), None);
        assert_eq!(otp.key(0, "ArrowLeft"), None);
        assert_eq!(otp.key(3, "ArrowLeft"), Some(2));
        assert_eq!(otp.key(5, "ArrowRight"), None);
        assert_eq!(otp.key(3, "ArrowRight"), Some(4));
    }

    #[test]
    fn test_cooldown() {
        let mut cooldown = ResendCooldown::new(60);
        assert!(!cooldown.can_resend(false));
        assert_eq!(cooldown.progress_percent(), 100.0);

        for _ in 0..30 {
            cooldown.tick();
        }
        assert_eq!(cooldown.remaining(), 30);
        assert_eq!(cooldown.progress_percent(), 50.0);

        for _ in 0..45 {
            cooldown.tick();
        }
        assert_eq!(cooldown.remaining(), 0);
        assert!(cooldown.can_resend(false));
        assert!(!cooldown.can_resend(true));

        cooldown.reset();
        assert_eq!(cooldown.remaining(), 60);
        assert!(cooldown.is_running());
    }

    #[test]
    fn test_verification_error_prefers_code_field() {
        let error = ApiError::from_response(
            422,
            r#"{"message":"The given data was invalid.","errors":{"code":["The code is invalid or expired."]}}"#,
        );
        assert_eq!(verification_error(&error), "The code is invalid or expired.");
    }

    #[test]
    fn test_verification_error_uses_message_without_field() {
        let error = ApiError::from_response(422, r#"{"message":"Too many attempts."}"#);
        assert_eq!(verification_error(&error), "Too many attempts.");
    }

    #[test]
    fn test_verification_error_falls_back() {
        let empty = ApiError::from_response(422, "");
        assert_eq!(verification_error(&empty), "Verification failed. Please try again.");
        let blank = ApiError::from_response(422, r#"{"message":""}"#);
        assert_eq!(verification_error(&blank), VERIFICATION_FAILED);
        let server = ApiError::from_response(500, r#"{"message":"boom"}"#);
        assert_eq!(verification_error(&server), VERIFICATION_FAILED);
    }
}
