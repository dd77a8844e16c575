//! Transient banner
//!
//! A message that stays visible until dismissed or until its timeout
//! elapses, whichever comes first.

use tokio::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TransientBanner {
    timeout: Duration,
    current: Option<(String, Instant)>,
}

impl TransientBanner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            current: None,
        }
    }

    /// Shows `message`, restarting the timeout.
    pub fn show(&mut self, message: impl Into<String>) {
        self.current = Some((message.into(), Instant::now() + self.timeout));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The visible message, if its deadline has not passed.
    pub fn message(&self) -> Option<&str> {
        match &self.current {
            Some((message, deadline)) if Instant::now() < *deadline => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.message().is_some()
    }

    /// When the visible banner will hide itself.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Clears the banner once its deadline has passed. Returns true if it
    /// was cleared by this call.
    pub fn expire(&mut self) -> bool {
        match &self.current {
            Some((_, deadline)) if Instant::now() >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_banner_hides_after_timeout() {
        let mut banner = TransientBanner::new(Duration::from_secs(3));
        banner.show("login succeeded");
        assert_eq!(banner.message(), Some("login succeeded"));

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(banner.is_visible());
        assert!(!banner.expire());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!banner.is_visible());
        assert!(banner.expire());
        assert_eq!(banner.deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_and_reshow() {
        let mut banner = TransientBanner::new(Duration::from_secs(3));
        banner.show("first");
        banner.dismiss();
        assert!(!banner.is_visible());

        tokio::time::advance(Duration::from_secs(2)).await;
        banner.show("second");
        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(banner.message(), Some("second"));
    }
}
