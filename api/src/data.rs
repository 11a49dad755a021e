//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Typed data access over entity data stores
//!
//! Entities keep their state in a keyed store owned by the host. Plugins read
//! it through typed [`Key`]s, receive immutable [`Value`] snapshots and write
//! back [`MutableValue`]s through [`DataHolder::offer`].

mod holder;
mod key;
mod manipulator;
mod types;
mod value;

pub use holder::*;
pub use key::*;
pub use manipulator::*;
pub use types::*;
pub use value::*;
