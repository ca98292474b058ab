//! Digit accumulation for teletext page-number entry.
//!
//! # Responsibility
//! - Collect digit keystrokes into one hidden buffer.
//! - Emit the most recent three digits once the buffer holds three or more.
//!
//! # Invariants
//! - Non-digit keys are ignored and never clear the buffer.
//! - The threshold check runs once per delivered key burst, so a burst that
//!   carries more than three digits emits only its last three.
//! - There is no timeout: pending digits persist until a code is emitted.

use log::debug;

use super::key::Key;
use super::listeners::{KeyListeners, ListenerGuard};
use crate::router::{PageCode, PAGE_CODE_LEN};

/// Hidden buffer of pending page-number digits.
#[derive(Debug, Clone, Default)]
pub struct DigitBuffer {
    pending: String,
}

impl DigitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits typed since the last emission.
    pub fn pending(&self) -> &str {
        self.pending.as_str()
    }

    /// Appends the digits of one key burst, then runs the threshold check.
    ///
    /// Returns the emitted page code when the buffer reached three digits.
    pub fn feed<'a, I>(&mut self, keys: I) -> Option<PageCode>
    where
        I: IntoIterator<Item = &'a Key>,
    {
        self.pending
            .extend(keys.into_iter().filter_map(|key| key.digit()));

        if self.pending.len() < PAGE_CODE_LEN {
            return None;
        }

        // Digits are ASCII, so byte offsets are char offsets.
        let tail = &self.pending[self.pending.len() - PAGE_CODE_LEN..];
        let code = PageCode::from_digits(tail);
        self.pending.clear();
        code
    }

    /// Single-key convenience over [`DigitBuffer::feed`].
    pub fn push(&mut self, key: Key) -> Option<PageCode> {
        self.feed([key].iter())
    }
}

/// Mounts the page-digit listener on `listeners`.
///
/// The returned guard owns the registration; dropping it unmounts the
/// listener together with its buffer.
pub fn mount_page_digits<F>(listeners: &KeyListeners, mut on_code: F) -> ListenerGuard
where
    F: FnMut(PageCode) + 'static,
{
    let mut buffer = DigitBuffer::new();
    listeners.subscribe("page_digits", move |keys| {
        if let Some(code) = buffer.feed(keys) {
            debug!(
                "event=page_code_emitted module=input status=ok code={}",
                code
            );
            on_code(code);
        }
    })
}
