//! One-time-code issue/verify map for the OTP side-service.
//!
//! Codes are 6 decimal digits, one live code per email. The map is
//! unbounded and entries never expire; a code is consumed by its first
//! successful verification. Delivery is a stderr log line placeholder.

use dashmap::DashMap;
use rand::Rng;

#[derive(Default)]
pub struct OtpStore {
    codes: DashMap<String, String>,
}

impl OtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh code for an email, replacing any previous one.
    pub fn issue(&self, email: &str) -> String {
        let code = generate_code();
        self.codes.insert(email.to_string(), code.clone());
        // Placeholder for mail delivery.
        eprintln!("[otp] code for {}: {}", email, code);
        code
    }

    /// Verify by exact string match, consuming the entry on success.
    pub fn verify(&self, email: &str, otp: &str) -> bool {
        self.codes
            .remove_if(email, |_, stored| stored == otp)
            .is_some()
    }

    pub fn pending(&self) -> usize {
        self.codes.len()
    }
}

/// Random code in 100000..=999999.
fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}
