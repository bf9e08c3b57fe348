// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// A LogOutputFactory produces the Write the Logger should send each record
/// to. It is called once per record (and once per flush).
pub type LogOutputFactory = Box<dyn Fn() -> Box<dyn Write> + Send + Sync>;

/// SharedWriter lets several handles write to one underlying Write. Every
/// clone refers to the same writer, so e.g. a test can keep one clone around
/// to inspect whatever the Logger wrote through another.
pub struct SharedWriter<T: Write> {
    writer: Arc<Mutex<T>>,
}

impl<T: Write + Send + 'static> SharedWriter<T> {
    /// Wrap the given writer.
    pub fn new(writer: T) -> Self {
        SharedWriter {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Lock the underlying writer, e.g. to read back what was written.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        match self.writer.lock() {
            Ok(guard) => guard,
            // A panic while logging doesn't leave the writer in a state we
            // can't keep appending to.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T: Write + Send + 'static> Write for SharedWriter<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

// Deriving Clone would needlessly require T: Clone.
impl<T: Write> Clone for SharedWriter<T> {
    fn clone(&self) -> Self {
        SharedWriter {
            writer: self.writer.clone(),
        }
    }
}

/// Construct a LogOutputFactory which always writes to the given writer.
pub fn new_log_output_factory<T: Write + Send + 'static>(writer: T) -> LogOutputFactory {
    let writer = SharedWriter::new(writer);
    Box::new(move || Box::new(writer.clone()))
}
