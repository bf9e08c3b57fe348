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

#[cfg(test)]
mod expander;

use crate::posix::PosixToken;

#[test]
fn test_posix_token_display() {
    crate::testing::init_test_logger();

    assert_eq!("-xf", PosixToken::OptionGroup("xf".to_owned()).to_string());
    assert_eq!("value", PosixToken::OptionValue("value".to_owned()).to_string());
    assert_eq!("-", PosixToken::Operand("-".to_owned()).to_string());
}
