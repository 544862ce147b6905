use crate::config::IntakeConfig;
use crate::intake::r#trait::Processor;
use crate::models::UploadedFile;
use anyhow::Result;
use std::time::Duration;

/// Simulated extraction: completes after a fixed delay
pub struct DelayProcessor {
    delay: Duration,
}

impl DelayProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &IntakeConfig) -> Self {
        Self::new(config.processing_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait::async_trait]
impl Processor for DelayProcessor {
    async fn process(&self, file: &UploadedFile) -> Result<()> {
        tracing::debug!(file = %file.name, delay_ms = self.delay.as_millis() as u64, "Processing");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PDF_MIME;
    use tokio::time::Instant;

    #[test]
    fn test_delay_from_config() {
        let processor = DelayProcessor::from_config(&IntakeConfig::default());
        assert_eq!(processor.delay(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_processor_waits() {
        let processor = DelayProcessor::new(Duration::from_millis(2000));
        let file = UploadedFile::new("a.pdf", PDF_MIME, Vec::new());

        let start = Instant::now();
        processor.process(&file).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(2001));
    }
}
