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


//! Entity capability traits

mod animal;

pub use animal::*;

use std::sync::Arc;
use uuid::Uuid;

/// An entity living in a world.
///
/// Entities are owned by the host; the API only ever holds shared handles.
pub trait Entity: Send + Sync {
    /// Persistent identifier of this entity
    fn unique_id(&self) -> Uuid;

    /// Identifier of this entity's type, e.g. `cat`
    fn entity_type(&self) -> &str;
}

/// Shared handle to a host owned entity
pub type EntityRef = Arc<dyn Entity>;
