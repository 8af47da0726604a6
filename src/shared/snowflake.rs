//! Snowflake ID Generator
//!
//! Twitter-style distributed unique ID generation, used by the storage layer
//! to assign course IDs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Custom epoch (2024-01-01T00:00:00.000Z)
const ID_EPOCH: u64 = 1704067200000;

/// Snowflake ID generator
///
/// Layout: 41 bits timestamp | 10 bits machine id | 12 bits sequence.
pub struct SnowflakeGenerator {
    machine_id: u64,
    sequence: AtomicU64,
    last_timestamp: AtomicU64,
}

impl SnowflakeGenerator {
    /// Create a new snowflake generator
    pub fn new(machine_id: u64) -> Self {
        Self {
            machine_id: machine_id & 0x3FF, // 10 bits
            sequence: AtomicU64::new(0),
            last_timestamp: AtomicU64::new(0),
        }
    }

    /// Generate a new snowflake ID
    pub fn generate(&self) -> i64 {
        let timestamp = self.current_timestamp();
        let last = self.last_timestamp.load(Ordering::SeqCst);

        let sequence = if timestamp == last {
            self.sequence.fetch_add(1, Ordering::SeqCst) & 0xFFF
        } else {
            self.last_timestamp.store(timestamp, Ordering::SeqCst);
            self.sequence.store(0, Ordering::SeqCst);
            0
        };

        let id = ((timestamp - ID_EPOCH) << 22) | (self.machine_id << 12) | sequence;

        id as i64
    }

    /// Get current timestamp in milliseconds
    fn current_timestamp(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }
}

/// Extract timestamp from snowflake ID
pub fn extract_timestamp(snowflake: i64) -> u64 {
    ((snowflake as u64) >> 22) + ID_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique() {
        let generator = SnowflakeGenerator::new(1);
        let id1 = generator.generate();
        let id2 = generator.generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_generated_ids_are_time_ordered() {
        let generator = SnowflakeGenerator::new(1);
        let ids: Vec<i64> = (0..100).map(|_| generator.generate()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_extract_timestamp() {
        let generator = SnowflakeGenerator::new(1);
        let id = generator.generate();
        let ts = extract_timestamp(id);
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        assert!(ts <= now);
        assert!(ts > now - 1000); // Within 1 second
    }
}
