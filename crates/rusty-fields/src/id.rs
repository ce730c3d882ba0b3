//! Identifier generation for defaulted id fields

use uuid::Uuid;

/// Source of fresh identifiers, injected into id presets
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_uuid_generator_yields_distinct_ids() {
        let a = UuidGenerator.generate();
        let b = UuidGenerator.generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_closure_generator() {
        let counter = AtomicUsize::new(0);
        let next = move || format!("id-{}", counter.fetch_add(1, Ordering::SeqCst));
        assert_eq!(next.generate(), "id-0");
        assert_eq!(next.generate(), "id-1");
    }
}
