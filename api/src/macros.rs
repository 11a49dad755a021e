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


/// Declare a catalog type together with its namespace of constants.
///
/// The namespace is an uninhabited enum, so it can never be instantiated; it
/// only carries the associated [`CatalogRef`](crate::catalog::CatalogRef)
/// constants and an `all()` accessor.
macro_rules! define_catalog {
    (
        $(#[$type_meta:meta])*
        type $type:ident;

        $(#[$ns_meta:meta])*
        namespace $ns:ident in $catalog:literal {
            $(
                $(#[$id_meta:meta])*
                $id:ident
            ),* $(,)?
        }
    ) => {
        $(#[$type_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            id: String,
            name: String,
        }

        impl $crate::catalog::CatalogType for $type {
            const CATALOG: &'static str = $catalog;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn from_entry(entry: $crate::catalog::CatalogEntry) -> Self {
                Self {
                    id: entry.id,
                    name: entry.name,
                }
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name)
            }
        }

        $(#[$ns_meta])*
        ///
        /// This type has no values and cannot be constructed:
        ///
        #[doc = concat!("```compile_fail\nlet namespace = sylvan_api::", stringify!($ns), ";\n```")]
        #[derive(Debug)]
        pub enum $ns {}

        impl $ns {
            $(
                $(#[$id_meta])*
                pub const $id: $crate::catalog::CatalogRef<$type> =
                    $crate::catalog::CatalogRef::new(stringify!($id));
            )*

            /// Every constant in this namespace, in declaration order
            pub fn all() -> &'static [$crate::catalog::CatalogRef<$type>] {
                const ALL: &[$crate::catalog::CatalogRef<$type>] = &[$($ns::$id),*];
                ALL
            }
        }
    };
}
