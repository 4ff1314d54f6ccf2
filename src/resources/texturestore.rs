//! Loaded textures keyed by name.
//!
//! Raylib's `Texture2D` unloads its GPU memory on drop, so dropping the
//! store at shutdown releases every texture exactly once. Render code asks
//! by key and must tolerate a miss (a failed load is logged at startup and
//! simply never inserted).

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Registry of loaded textures by key.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }
}
