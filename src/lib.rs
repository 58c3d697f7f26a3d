pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod path;
pub mod process;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard};

    static PROCESS_STATE: Mutex<()> = Mutex::new(());

    /// Serializes tests that touch the working directory or the live
    /// process environment.
    pub fn lock() -> MutexGuard<'static, ()> {
        PROCESS_STATE.lock().unwrap_or_else(|e| e.into_inner())
    }
}
