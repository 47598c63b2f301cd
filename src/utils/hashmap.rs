//! The hash-map used for the edge caches of the mesh clipper.

/// Hashmap using [`hashbrown::HashMap`]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;
