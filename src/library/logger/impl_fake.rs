use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Keeps every line in memory so tests can assert on what was logged.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    fn push(&self, level: &str, message: &str) {
        let line = match &self.namespace {
            Some(namespace) => format!("{} {}: {}", level, namespace, message),
            None => format!("{} {}", level, message),
        };
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push("INFO", message);
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push("ERROR", message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerFake {
            namespace: Some(new_namespace),
            lines: self.lines.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_loggers_share_lines() {
        let logger = LoggerFake::new();
        let child = logger.with_namespace("video").with_namespace("ffmpeg");

        logger.info("start").unwrap();
        child.error("missing file").unwrap();

        assert_eq!(
            logger.lines(),
            vec![
                "INFO start".to_string(),
                "ERROR video:ffmpeg: missing file".to_string()
            ]
        );
    }
}
