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


//! Damage sources
//!
//! A damage source describes where damage came from and how it should be
//! applied. Sources are immutable once built. Plugins build them through
//! [`DamageSourceBuilder`] or [`EntityDamageSourceBuilder`], or embed a
//! [`BaseDamageSource`] in their own type to get the shared bookkeeping.

mod builder;
mod source;
mod types;

pub use builder::*;
pub use source::*;
pub use types::*;
