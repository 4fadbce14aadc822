use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod macros;

pub trait LockExt<T> {
    /// Locks the mutex, recovering the guard if a previous holder panicked.
    fn lock_state(&self) -> MutexGuard<'_, T>;
}

impl<T> LockExt<T> for Mutex<T> {
    fn lock_state(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::{panic, sync::Arc};

    use super::*;

    #[test]
    fn lock_state_recovers_from_poison() {
        let mutex = Arc::new(Mutex::new(1));

        let poisoner = Arc::clone(&mutex);
        let _ = panic::catch_unwind(move || {
            let mut guard = poisoner.lock().unwrap();
            *guard = 2;
            panic!("poison");
        });

        assert!(mutex.is_poisoned());
        assert_eq!(*mutex.lock_state(), 2);
    }
}
