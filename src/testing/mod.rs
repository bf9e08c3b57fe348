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

use crate::logging::{self, LogFilters, OptionsBuilder};
use log::LevelFilter;
use std::sync::{Mutex, MutexGuard, Once};

static INIT_TEST_LOGGER: Once = Once::new();

/// Install a test-friendly global Logger, which writes everything at "Debug"
/// or above to stdout (so the test harness captures it). This is safe to call
/// from every test; only the first call has any effect.
pub fn init_test_logger() {
    INIT_TEST_LOGGER.call_once(|| {
        let options = OptionsBuilder::new()
            .set_filters(LogFilters(vec![]))
            .set_max_level(LevelFilter::Debug)
            .set_output_to(::std::io::stdout())
            .build();
        // Some other logger may already be installed, in which case we just
        // log through it instead.
        if let Ok(options) = options {
            let _ = logging::try_init(options);
        }
    });
}

/// A single call observed by a CallRecorder: the name of the option which
/// triggered it, and the value it was called with (if any).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedCall {
    /// The option name the call was made for.
    pub name: String,
    /// The value passed to the call, if there was one.
    pub value: Option<String>,
}

/// This is a structure which records the calls made to some set of callbacks,
/// e.g. those passed to Args::process. Because it has internal
/// synchronization, calls can be recorded through a shared reference, so many
/// closures can borrow the same CallRecorder.
pub struct CallRecorder {
    calls: Mutex<Vec<RecordedCall>>,
}

impl CallRecorder {
    /// Construct a new CallRecorder which hasn't recorded anything yet.
    pub fn new() -> CallRecorder {
        CallRecorder {
            calls: Mutex::new(vec![]),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        match self.calls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Record a single call, for the given option name and value.
    pub fn record<T: ToString>(&self, name: &str, value: Option<&T>) {
        self.lock().push(RecordedCall {
            name: name.to_owned(),
            value: value.map(|v| v.to_string()),
        });
    }

    /// Return every call recorded so far, in the order they were made.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    /// Return the total number of calls recorded so far.
    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    /// Return the number of calls recorded for the given option name.
    pub fn call_count_for(&self, name: &str) -> usize {
        self.lock().iter().filter(|c| c.name == name).count()
    }
}

impl Default for CallRecorder {
    fn default() -> Self {
        CallRecorder::new()
    }
}
