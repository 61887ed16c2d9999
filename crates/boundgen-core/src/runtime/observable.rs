//! Observable value container

use parking_lot::RwLock;

/// A value that can change over time and may be absent.
///
/// Validators read it through [`Observable::get`], which takes one consistent
/// snapshot under a read lock, so a concurrent writer can never be observed
/// half way through an update.
#[derive(Debug)]
pub struct Observable<T> {
    value: RwLock<Option<T>>,
}

impl<T> Observable<T> {
    pub fn new(value: Option<T>) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    pub fn with_value(value: T) -> Self {
        Self::new(Some(value))
    }

    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn set(&self, value: T) {
        *self.value.write() = Some(value);
    }

    /// Replace the current value, returning the previous one
    pub fn replace(&self, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut *self.value.write(), value)
    }

    pub fn clear(&self) {
        *self.value.write() = None;
    }

    pub fn has_value(&self) -> bool {
        self.value.read().is_some()
    }
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Observable<T> {
    /// Snapshot of the current value
    pub fn get(&self) -> Option<T> {
        self.value.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let obs = Observable::empty();
        assert_eq!(obs.get(), None::<i64>);
        obs.set(4);
        assert_eq!(obs.get(), Some(4));
        assert!(obs.has_value());
        obs.clear();
        assert!(!obs.has_value());
    }

    #[test]
    fn test_replace_returns_previous() {
        let obs = Observable::with_value("a".to_string());
        assert_eq!(obs.replace(Some("b".to_string())), Some("a".to_string()));
        assert_eq!(obs.get().as_deref(), Some("b"));
    }
}
